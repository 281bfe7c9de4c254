use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    activity_timings::ActivityTimings,
    bounds_policy::{ConstantBounds, ACTIVITY_DURATION_WINDOW, INTER_ACTIVITY_DELAY_WINDOW},
    error::ConfigError,
    seconds::Seconds,
    time_window::TimeWindow,
    timing_provider::UniformTimingProvider,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowConfig {
    pub min_seconds: u64,
    pub max_seconds: u64,
}

impl WindowConfig {
    pub fn window(&self, name: &str) -> Result<TimeWindow, ConfigError> {
        TimeWindow::new(Seconds(self.min_seconds), Seconds(self.max_seconds)).map_err(|source| {
            ConfigError::InvalidWindow {
                name: name.to_string(),
                source,
            }
        })
    }
}

impl From<TimeWindow> for WindowConfig {
    fn from(window: TimeWindow) -> Self {
        Self {
            min_seconds: window.min().0,
            max_seconds: window.max().0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub duration: WindowConfig,
    pub time_after: WindowConfig,
}

impl ActivityConfig {
    fn bounds(&self, name: &str) -> Result<ConstantBounds, ConfigError> {
        let activity = self.duration.window(&format!("{}.duration", name))?;
        let delay = self.time_after.window(&format!("{}.time_after", name))?;
        Ok(ConstantBounds::new(activity, delay))
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            duration: ACTIVITY_DURATION_WINDOW.into(),
            time_after: INTER_ACTIVITY_DELAY_WINDOW.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Switches every provider to per-case sampling.
    pub seed: Option<u64>,
    /// `None` leaves unknown activities untimed.
    pub defaults: Option<ActivityConfig>,
    pub activities: HashMap<String, ActivityConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            seed: None,
            defaults: Some(ActivityConfig::default()),
            activities: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timings(&self) -> Result<ActivityTimings, ConfigError> {
        let mut timings = match &self.defaults {
            Some(defaults) => {
                let bounds = defaults.bounds("defaults")?;
                ActivityTimings::with_fallback(self.provider(bounds))
            }
            None => ActivityTimings::new(),
        };

        let mut names: Vec<&String> = self.activities.keys().collect();
        names.sort();
        for name in names {
            let bounds = self.activities[name].bounds(&format!("activities.{}", name))?;
            timings.register(name.clone(), self.provider(bounds));
        }

        Ok(timings)
    }

    fn provider(&self, bounds: ConstantBounds) -> UniformTimingProvider {
        let provider = UniformTimingProvider::new(bounds);
        match self.seed {
            Some(seed) => provider.seeded(seed),
            None => provider,
        }
    }
}
