/// Aggregated view of session progress, used for the question counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// One-based number of the question on screen.
    #[must_use]
    pub fn display_position(&self) -> usize {
        (self.position + 1).min(self.total)
    }
}
