//! Declarative mapping from controller + media state to what the overlay
//! shows. The GUI renders from a [`ControlsView`] snapshot only, so every
//! icon swap and label is testable without a live window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Loud,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Enter,
    Exit,
}

/// Snapshot of everything the control overlay displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    /// Icon for the toolbar button and the center overlay alike.
    pub play_icon: PlayPauseIcon,
    /// Whether the player shell carries its "paused" styling.
    pub shell_paused: bool,
    pub volume_icon: VolumeIcon,
    pub fullscreen_icon: FullscreenIcon,
    pub controls_hidden: bool,
    pub scrub_value: f64,
    pub scrub_max: f64,
    /// Progress fill, 0..=100.
    pub progress_percent: f64,
    pub current_label: String,
    pub duration_label: String,
    pub volume_slider: f64,
    pub playback_rate: f64,
}
