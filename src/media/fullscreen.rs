/// Element currently presented fullscreen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    /// The player container (the mode auto-hide cares about).
    Player,
}

/// Host fullscreen primitives. Requests are asynchronous: the host confirms
/// (or refuses) them through its own change notification, which the app
/// forwards to the controller as `on_fullscreen_change`.
pub trait FullscreenHost {
    /// The element currently in fullscreen, if any.
    fn element(&self) -> Option<FullscreenTarget>;
    fn request(&mut self, target: FullscreenTarget);
    fn exit(&mut self);
}

/// Fullscreen adapter backed by the eframe viewport. The whole viewport is
/// the player container here, so viewport fullscreen maps to
/// [`FullscreenTarget::Player`].
pub struct ViewportFullscreen {
    current: Option<FullscreenTarget>,
    pending: Option<bool>,
}

impl ViewportFullscreen {
    pub fn new() -> Self {
        Self {
            current: None,
            pending: None,
        }
    }

    /// Flush any pending request to the viewport and pick up the host's
    /// actual fullscreen state. Returns true when the state changed, which
    /// covers both our own requests resolving and external exits (Esc).
    pub fn sync(&mut self, ctx: &egui::Context) -> bool {
        if let Some(want) = self.pending.take() {
            log::debug!("Sending viewport fullscreen command: {}", want);
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(want));
        }

        let actual = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
        let observed = if actual {
            Some(FullscreenTarget::Player)
        } else {
            None
        };

        if observed != self.current {
            log::info!("Fullscreen state changed: {:?} -> {:?}", self.current, observed);
            self.current = observed;
            true
        } else {
            false
        }
    }
}

impl FullscreenHost for ViewportFullscreen {
    fn element(&self) -> Option<FullscreenTarget> {
        self.current
    }

    fn request(&mut self, _target: FullscreenTarget) {
        // The whole viewport is the player container
        self.pending = Some(true);
    }

    fn exit(&mut self) {
        self.pending = Some(false);
    }
}
