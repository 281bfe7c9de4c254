use std::sync::Arc;

use crate::activity_timings::ActivityTimings;

pub trait AppState: Clone + Send + Sync + 'static {
    fn timings(&self) -> Arc<ActivityTimings>;
}

#[derive(Clone, Debug)]
pub struct LiveState {
    pub timings: Arc<ActivityTimings>,
}

impl LiveState {
    pub fn new(timings: ActivityTimings) -> Self {
        Self {
            timings: Arc::new(timings),
        }
    }
}

impl AppState for LiveState {
    fn timings(&self) -> Arc<ActivityTimings> {
        self.timings.clone()
    }
}
