/// Gate for drag reordering.
///
/// The core does not refuse a reorder while the gate is closed; keeping drags
/// from starting is the caller's job. [`MoveMode::is_enabled`] is what it
/// checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveMode {
    enabled: bool,
}

impl MoveMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the gate. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        tracing::debug!(enabled = self.enabled, "move mode toggled");
        self.enabled
    }

    pub fn set(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
