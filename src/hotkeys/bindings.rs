use egui::Key;

use crate::hotkeys::PlayerAction;

/// Keys the player listens to; the app polls exactly this set each frame.
pub const BOUND_KEYS: [Key; 8] = [
    Key::Space,
    Key::K,
    Key::M,
    Key::F,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::J,
    Key::L,
];

/// Map a pressed key to its player action. Unbound keys return None and are
/// left for the rest of the UI.
pub fn action_for_key(key: Key) -> Option<PlayerAction> {
    match key {
        Key::Space | Key::K => Some(PlayerAction::TogglePlay),
        Key::M => Some(PlayerAction::ToggleMute),
        Key::F => Some(PlayerAction::ToggleFullscreen),
        Key::ArrowLeft => Some(PlayerAction::Rewind),
        Key::ArrowRight => Some(PlayerAction::Forward),
        Key::J => Some(PlayerAction::StepBack),
        Key::L => Some(PlayerAction::StepForward),
        _ => None,
    }
}
