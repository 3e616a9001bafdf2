/// What one poll run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Remote notifications reconciled into the local store.
    pub synced: usize,
    /// Alerts raised, all steps included.
    pub alerted: usize,
    /// Steps that failed and were skipped.
    pub failed_steps: Vec<&'static str>,
}

impl PollReport {
    pub fn is_clean(&self) -> bool {
        self.failed_steps.is_empty()
    }
}
