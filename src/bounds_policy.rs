use crate::{case_id::CaseId, time_window::TimeWindow};

/// 5 to 15 minutes.
pub const ACTIVITY_DURATION_WINDOW: TimeWindow = TimeWindow::between(60 * 5, 60 * 15);
/// 1 to 5 minutes.
pub const INTER_ACTIVITY_DELAY_WINDOW: TimeWindow = TimeWindow::between(60, 60 * 5);

/// Decides which windows a case samples from.
pub trait BoundsPolicy {
    fn activity_window(&self, case_id: &CaseId) -> TimeWindow;
    fn delay_window(&self, case_id: &CaseId) -> TimeWindow;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConstantBounds {
    pub activity: TimeWindow,
    pub delay: TimeWindow,
}

impl ConstantBounds {
    pub const fn new(activity: TimeWindow, delay: TimeWindow) -> Self {
        Self { activity, delay }
    }

    pub const fn standard() -> Self {
        Self::new(ACTIVITY_DURATION_WINDOW, INTER_ACTIVITY_DELAY_WINDOW)
    }
}

impl Default for ConstantBounds {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoundsPolicy for ConstantBounds {
    fn activity_window(&self, _case_id: &CaseId) -> TimeWindow {
        self.activity
    }

    fn delay_window(&self, _case_id: &CaseId) -> TimeWindow {
        self.delay
    }
}

/// Policy backed by a closure, for windows keyed on the case.
#[derive(Clone)]
pub struct FnBounds<F> {
    f: F,
}

impl<F> FnBounds<F>
where
    F: Fn(&CaseId) -> ConstantBounds,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> BoundsPolicy for FnBounds<F>
where
    F: Fn(&CaseId) -> ConstantBounds,
{
    fn activity_window(&self, case_id: &CaseId) -> TimeWindow {
        (self.f)(case_id).activity
    }

    fn delay_window(&self, case_id: &CaseId) -> TimeWindow {
        (self.f)(case_id).delay
    }
}
