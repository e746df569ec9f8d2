//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show results plus headers and status lines.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers and status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
