use std::{collections::HashMap, fmt, sync::Arc};

use tracing::debug;

use crate::{case_id::CaseId, seconds::Seconds, timing_provider::TimingProvider};

/// Duration of an activity nobody provides timing for.
pub const UNTIMED_DURATION: Seconds = Seconds(0);
/// Wait after an activity nobody provides timing for: one hour.
pub const UNTIMED_TIME_AFTER: Seconds = Seconds(3600);

/// Timing providers attached to named activities.
#[derive(Clone, Default)]
pub struct ActivityTimings {
    activities: HashMap<String, Arc<dyn TimingProvider>>,
    fallback: Option<Arc<dyn TimingProvider>>,
}

impl ActivityTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(provider: impl TimingProvider + 'static) -> Self {
        Self {
            activities: HashMap::new(),
            fallback: Some(Arc::new(provider)),
        }
    }

    pub fn register(
        &mut self,
        activity: impl Into<String>,
        provider: impl TimingProvider + 'static,
    ) {
        self.activities.insert(activity.into(), Arc::new(provider));
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn activities(&self) -> Vec<String> {
        let mut names: Vec<String> = self.activities.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn time_lasted(&self, activity: &str, case_id: &CaseId) -> Seconds {
        match self.provider(activity) {
            Some(provider) => provider.activity_duration_for(activity, case_id),
            None => {
                debug!("No timing for {:?}, lasting {}", activity, UNTIMED_DURATION);
                UNTIMED_DURATION
            }
        }
    }

    pub fn time_after(&self, activity: &str, case_id: &CaseId) -> Seconds {
        match self.provider(activity) {
            Some(provider) => provider.inter_activity_delay_for(activity, case_id),
            None => {
                debug!("No timing for {:?}, waiting {}", activity, UNTIMED_TIME_AFTER);
                UNTIMED_TIME_AFTER
            }
        }
    }

    fn provider(&self, activity: &str) -> Option<&Arc<dyn TimingProvider>> {
        self.activities.get(activity).or(self.fallback.as_ref())
    }
}

impl fmt::Debug for ActivityTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityTimings")
            .field("activities", &self.activities())
            .field("fallback", &self.has_fallback())
            .finish()
    }
}
