/// Discrete player commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    TogglePlay,
    ToggleMute,
    ToggleFullscreen,
    /// Skip backwards by the configured skip interval (10s).
    Rewind,
    /// Skip forwards by the configured skip interval (10s).
    Forward,
    /// Seek backwards by the step interval (5s), bypassing the rewind handler.
    StepBack,
    /// Seek forwards by the step interval (5s), bypassing the forward handler.
    StepForward,
}

impl PlayerAction {
    /// Whether the triggering key must be consumed so it cannot also scroll
    /// or activate a focused widget (space would otherwise page the UI).
    pub fn consumes_key(self) -> bool {
        matches!(self, PlayerAction::TogglePlay)
    }
}
