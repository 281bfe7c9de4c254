//! Entry points an engine calls once per simulated activity instance.

use crate::{
    bounds_policy::ConstantBounds,
    case_id::CaseId,
    seconds::Seconds,
    timing_provider::{TimingProvider, UniformTimingProvider},
};

const DEFAULT_PROVIDER: UniformTimingProvider<ConstantBounds> = UniformTimingProvider::standard();

/// Number of seconds the activity is supposed to last: 5 to 15 minutes.
pub fn time_lasted(case_id: impl Into<CaseId>) -> Seconds {
    DEFAULT_PROVIDER.activity_duration(&case_id.into())
}

/// Number of seconds to wait before the following activity can start: 1 to 5
/// minutes.
pub fn time_after(case_id: impl Into<CaseId>) -> Seconds {
    DEFAULT_PROVIDER.inter_activity_delay(&case_id.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_sample_their_own_ranges() {
        for case in 0..10_000u64 {
            let lasted = time_lasted(case);
            let after = time_after(case);
            assert!((300..=900).contains(&lasted.0), "time_lasted {}", lasted);
            assert!((60..=300).contains(&after.0), "time_after {}", after);
        }
    }

    #[test]
    fn hooks_accept_string_case_ids() {
        let case_id = CaseId::from("instance_12");
        assert!((300..=900).contains(&time_lasted(&case_id).0));
        assert!((60..=300).contains(&time_after(&case_id).0));
        assert!((300..=900).contains(&time_lasted("").0));
    }
}
