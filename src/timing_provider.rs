use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha3::{Digest, Sha3_256};

use crate::{
    bounds_policy::{BoundsPolicy, ConstantBounds},
    case_id::CaseId,
    error::InvalidRangeError,
    seconds::Seconds,
    time_window::TimeWindow,
};

/// Supplies the timing of simulated activities.
pub trait TimingProvider: Send + Sync {
    /// Seconds the activity is supposed to last.
    fn activity_duration(&self, case_id: &CaseId) -> Seconds;
    /// Seconds to wait before the following activity can start.
    fn inter_activity_delay(&self, case_id: &CaseId) -> Seconds;

    /// Like [`TimingProvider::activity_duration`], for a named activity.
    fn activity_duration_for(&self, _activity: &str, case_id: &CaseId) -> Seconds {
        self.activity_duration(case_id)
    }

    /// Like [`TimingProvider::inter_activity_delay`], for a named activity.
    fn inter_activity_delay_for(&self, _activity: &str, case_id: &CaseId) -> Seconds {
        self.inter_activity_delay(case_id)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Sampling {
    #[default]
    ThreadLocal,
    /// Same seed, activity, case and operation always give the same sample.
    ///
    /// An activity that runs more than once in a case (a loop in the model)
    /// gets the same duration and delay every time.
    PerCase { seed: u64 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Stream {
    Activity = 0,
    Delay = 1,
}

#[derive(Debug, Clone)]
pub struct UniformTimingProvider<P = ConstantBounds> {
    policy: P,
    sampling: Sampling,
}

impl Default for UniformTimingProvider<ConstantBounds> {
    fn default() -> Self {
        Self::standard()
    }
}

impl UniformTimingProvider<ConstantBounds> {
    /// Activities last 5 to 15 minutes and are followed by 1 to 5 minutes
    /// of delay.
    pub const fn standard() -> Self {
        Self {
            policy: ConstantBounds::standard(),
            sampling: Sampling::ThreadLocal,
        }
    }

    /// Builds a provider from raw `(lower, upper)` second pairs.
    pub fn with_bounds(
        activity: (u64, u64),
        delay: (u64, u64),
    ) -> Result<Self, InvalidRangeError> {
        let activity = TimeWindow::new(Seconds(activity.0), Seconds(activity.1))?;
        let delay = TimeWindow::new(Seconds(delay.0), Seconds(delay.1))?;
        Ok(Self::new(ConstantBounds::new(activity, delay)))
    }
}

impl<P: BoundsPolicy> UniformTimingProvider<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            sampling: Sampling::ThreadLocal,
        }
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn seeded(self, seed: u64) -> Self {
        self.with_sampling(Sampling::PerCase { seed })
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    fn sample(
        &self,
        window: TimeWindow,
        activity: &str,
        case_id: &CaseId,
        stream: Stream,
    ) -> Seconds {
        match self.sampling {
            Sampling::ThreadLocal => window.choose(),
            Sampling::PerCase { seed } => {
                let seed = sample_seed(seed, activity, case_id, stream);
                let mut rnd = ChaCha8Rng::from_seed(seed);
                window.choose_with(&mut rnd)
            }
        }
    }
}

impl<P: BoundsPolicy + Send + Sync> TimingProvider for UniformTimingProvider<P> {
    fn activity_duration(&self, case_id: &CaseId) -> Seconds {
        self.activity_duration_for("", case_id)
    }

    fn inter_activity_delay(&self, case_id: &CaseId) -> Seconds {
        self.inter_activity_delay_for("", case_id)
    }

    fn activity_duration_for(&self, activity: &str, case_id: &CaseId) -> Seconds {
        let window = self.policy.activity_window(case_id);
        self.sample(window, activity, case_id, Stream::Activity)
    }

    fn inter_activity_delay_for(&self, activity: &str, case_id: &CaseId) -> Seconds {
        let window = self.policy.delay_window(case_id);
        self.sample(window, activity, case_id, Stream::Delay)
    }
}

/// ChaCha8 seed for one sample: SHA3-256 over the little-endian seed, the
/// length-prefixed activity and case bytes, and the stream tag.
fn sample_seed(seed: u64, activity: &str, case_id: &CaseId, stream: Stream) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    Digest::update(&mut hasher, seed.to_le_bytes());
    Digest::update(&mut hasher, (activity.len() as u64).to_le_bytes());
    Digest::update(&mut hasher, activity.as_bytes());
    Digest::update(&mut hasher, (case_id.0.len() as u64).to_le_bytes());
    Digest::update(&mut hasher, case_id.0.as_bytes());
    Digest::update(&mut hasher, [stream as u8]);
    hasher.finalize().into()
}
