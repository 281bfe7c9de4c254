//! Timing of simulated process activities: how long each activity lasts and
//! how long to wait before the next one starts, sampled per case.

pub mod activity_timings;
pub mod bounds_policy;
pub mod case_id;
pub mod config;
pub mod config_source;
pub mod error;
pub mod hooks;
pub mod routes;
pub mod seconds;
pub mod state;
pub mod time_window;
pub mod timing_provider;

pub use activity_timings::ActivityTimings;
pub use bounds_policy::{BoundsPolicy, ConstantBounds, FnBounds};
pub use case_id::CaseId;
pub use error::{ConfigError, InvalidRangeError};
pub use hooks::{time_after, time_lasted};
pub use seconds::Seconds;
pub use time_window::TimeWindow;
pub use timing_provider::{Sampling, TimingProvider, UniformTimingProvider};
