use std::time::{Duration, Instant};

use crate::core::{clamp_to_range, coerce_finite, format_timestamp, PlayerConfig};
use crate::hotkeys::PlayerAction;
use crate::media::{FullscreenHost, FullscreenTarget, MediaElement, MediaEvent};
use crate::player::autohide::AutoHide;
use crate::player::view::{ControlsView, FullscreenIcon, PlayPauseIcon, VolumeIcon};

/// How long a fullscreen request may go unconfirmed before it is treated as
/// refused and further toggles are accepted again. Hosts confirm through a
/// state change; a refused request produces none, so a deadline is the only
/// signal that nothing is coming.
const FULLSCREEN_REQUEST_TIMEOUT: Duration = Duration::from_millis(1000);

/// Per-player controller for the control overlay.
///
/// Owns the UI mirror state (drag flag, hidden flag, scrub range, volume
/// slider, pending fullscreen request) and translates user input into
/// commands against the media element. One instance per player; nothing here
/// is process-global, so multiple players can coexist.
pub struct PlayerController {
    config: PlayerConfig,
    is_dragging: bool,
    controls_hidden: bool,
    autohide: AutoHide,
    scrub_value: f64,
    /// Scrub range upper bound. Starts at 1.0 so the bar is draggable before
    /// metadata arrives; real durations replace it, bogus ones keep it.
    scrub_max: f64,
    volume_slider: f64,
    /// When the in-flight fullscreen request was issued; toggles during that
    /// window are ignored rather than racing the host. Cleared on a confirmed
    /// state change or once [`FULLSCREEN_REQUEST_TIMEOUT`] passes unanswered.
    fullscreen_requested: Option<Instant>,
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        let autohide = AutoHide::new(config.autohide_delay());
        let volume_slider = config.default_volume;
        Self {
            config,
            is_dragging: false,
            controls_hidden: false,
            autohide,
            scrub_value: 0.0,
            scrub_max: 1.0,
            volume_slider,
            fullscreen_requested: None,
        }
    }

    /// Push the configured startup volume into the media element.
    pub fn apply_initial_state(&mut self, media: &mut dyn MediaElement) {
        media.set_volume(self.volume_slider);
        log::debug!("Initialized media volume to {:.2}", self.volume_slider);
    }

    // ---- state queries -----------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn controls_hidden(&self) -> bool {
        self.controls_hidden
    }

    pub fn scrub_max(&self) -> f64 {
        self.scrub_max
    }

    pub fn volume_slider(&self) -> f64 {
        self.volume_slider
    }

    pub fn autohide_armed(&self) -> bool {
        self.autohide.is_armed()
    }

    fn is_active(media: &dyn MediaElement) -> bool {
        !media.paused() && !media.ended()
    }

    fn in_player_fullscreen(fs: &dyn FullscreenHost) -> bool {
        fs.element() == Some(FullscreenTarget::Player)
    }

    fn hide_eligible(&self, media: &dyn MediaElement, fs: &dyn FullscreenHost) -> bool {
        Self::is_active(media) && !self.is_dragging && Self::in_player_fullscreen(fs)
    }

    pub fn clamp_scrub(&self, value: f64) -> f64 {
        clamp_to_range(value, self.scrub_max)
    }

    // ---- media event handling ----------------------------------------------

    pub fn handle_media_event(
        &mut self,
        event: MediaEvent,
        media: &dyn MediaElement,
        fs: &dyn FullscreenHost,
        now: Instant,
    ) {
        match event {
            MediaEvent::LoadedMetadata | MediaEvent::DurationChange => self.sync_duration(media),
            MediaEvent::TimeUpdate => self.sync_time(media),
            MediaEvent::Play | MediaEvent::Pause | MediaEvent::Ended => {
                self.sync_play_state(media, fs, now)
            }
        }
    }

    /// Adopt a freshly known duration as the scrub range; a non-finite or
    /// non-positive duration keeps the previous range usable.
    fn sync_duration(&mut self, media: &dyn MediaElement) {
        let duration = media.duration();
        if duration.is_finite() && duration > 0.0 {
            self.scrub_max = duration;
        }
        self.scrub_value = self.clamp_scrub(self.scrub_value);
    }

    fn sync_time(&mut self, media: &dyn MediaElement) {
        let duration = media.duration();
        if duration.is_finite() && duration > 0.0 && self.scrub_max != duration {
            self.scrub_max = duration;
        }
        if !self.is_dragging {
            self.scrub_value = self.clamp_scrub(media.current_time());
        }
    }

    /// React to the media engine's own play/pause/ended notifications. While
    /// playing in player fullscreen the hide timer runs; in every other state
    /// it is cancelled and the controls stay visible.
    fn sync_play_state(&mut self, media: &dyn MediaElement, fs: &dyn FullscreenHost, now: Instant) {
        if Self::is_active(media) && Self::in_player_fullscreen(fs) {
            self.schedule_hide(media, fs, now);
        } else {
            self.autohide.cancel();
            self.controls_hidden = false;
        }
    }

    // ---- auto-hide ---------------------------------------------------------

    fn schedule_hide(&mut self, media: &dyn MediaElement, fs: &dyn FullscreenHost, now: Instant) {
        self.autohide.cancel();
        if self.hide_eligible(media, fs) {
            self.autohide.arm(now);
        }
    }

    /// Check the hide deadline. Eligibility is re-validated here because the
    /// armed-time snapshot can be stale by the time the deadline passes.
    pub fn poll_autohide(&mut self, media: &dyn MediaElement, fs: &dyn FullscreenHost, now: Instant) {
        if self.autohide.fire(now) && self.hide_eligible(media, fs) {
            log::debug!("Hiding controls after inactivity");
            self.controls_hidden = true;
        }
    }

    /// Any qualifying activity: pointer move, click, touch, or a shortcut.
    /// Reveals the controls and re-arms the hide timer when eligible.
    pub fn activity(&mut self, media: &dyn MediaElement, fs: &dyn FullscreenHost, now: Instant) {
        self.controls_hidden = false;
        if Self::in_player_fullscreen(fs) {
            self.schedule_hide(media, fs, now);
        } else {
            self.autohide.cancel();
        }
    }

    // ---- user commands -----------------------------------------------------

    pub fn toggle_play(&mut self, media: &mut dyn MediaElement) {
        if media.paused() {
            media.play();
        } else {
            media.pause();
        }
    }

    /// Click on the bare video surface: toggles playback unless the media
    /// has ended (the center overlay handles replay in that case).
    pub fn surface_clicked(&mut self, media: &mut dyn MediaElement) {
        if !media.ended() {
            self.toggle_play(media);
        }
    }

    pub fn overlay_clicked(&mut self, media: &mut dyn MediaElement) {
        self.toggle_play(media);
    }

    /// Continuous scrub input: live preview, decoupled from time updates.
    pub fn scrub_input(&mut self, value: f64) {
        self.is_dragging = true;
        self.scrub_value = self.clamp_scrub(value);
        self.controls_hidden = false;
        self.autohide.cancel();
    }

    /// Drag release: commit the seek and hand the bar back to time updates.
    pub fn scrub_commit(
        &mut self,
        value: f64,
        media: &mut dyn MediaElement,
        fs: &dyn FullscreenHost,
        now: Instant,
    ) {
        let clamped = self.clamp_scrub(value);
        self.scrub_value = clamped;
        media.set_current_time(clamped);
        self.is_dragging = false;
        self.schedule_hide(media, fs, now);
    }

    pub fn volume_input(&mut self, value: f64, media: &mut dyn MediaElement) {
        let volume = coerce_finite(value).clamp(0.0, 1.0);
        self.volume_slider = volume;
        media.set_volume(volume);
        media.set_muted(volume == 0.0);
    }

    pub fn toggle_mute(&mut self, media: &mut dyn MediaElement) {
        let muted = !media.muted();
        media.set_muted(muted);
        if !muted && media.volume() == 0.0 {
            let restore = self.config.unmute_restore_volume;
            media.set_volume(restore);
            self.volume_slider = restore;
        }
    }

    /// Toggle player-scoped fullscreen. The request completes asynchronously;
    /// further toggles are ignored until the host confirms the change or the
    /// request has gone unanswered past the timeout.
    pub fn toggle_fullscreen(&mut self, fs: &mut dyn FullscreenHost, now: Instant) {
        if let Some(requested) = self.fullscreen_requested {
            if now.duration_since(requested) < FULLSCREEN_REQUEST_TIMEOUT {
                log::debug!("Ignoring fullscreen toggle while a request is pending");
                return;
            }
            log::warn!("Fullscreen request went unanswered, treating it as refused");
        }
        self.fullscreen_requested = Some(now);
        if fs.element().is_none() {
            fs.request(FullscreenTarget::Player);
        } else {
            fs.exit();
        }
    }

    /// The host's fullscreen state changed, whether from our request or an
    /// external exit (browser-style Esc).
    pub fn on_fullscreen_change(
        &mut self,
        media: &dyn MediaElement,
        fs: &dyn FullscreenHost,
        now: Instant,
    ) {
        self.fullscreen_requested = None;
        self.activity(media, fs, now);
    }

    pub fn set_speed(&mut self, rate: f64, media: &mut dyn MediaElement) {
        // Accepted verbatim; the selector constrains values, the operation
        // does not.
        media.set_playback_rate(rate);
    }

    pub fn rewind(&mut self, media: &mut dyn MediaElement) {
        let target = (media.current_time() - self.config.skip_seconds).max(0.0);
        media.set_current_time(target);
    }

    pub fn forward(&mut self, media: &mut dyn MediaElement) {
        let target = (media.current_time() + self.config.skip_seconds).min(media.duration());
        media.set_current_time(target);
    }

    /// Dispatch a keyboard action. StepBack/StepForward seek directly instead
    /// of going through rewind/forward, so those handlers' future side
    /// effects would not apply to them; that asymmetry is inherited behavior.
    /// Every action counts as activity.
    pub fn handle_action(
        &mut self,
        action: PlayerAction,
        media: &mut dyn MediaElement,
        fs: &mut dyn FullscreenHost,
        now: Instant,
    ) {
        match action {
            PlayerAction::TogglePlay => self.toggle_play(media),
            PlayerAction::ToggleMute => self.toggle_mute(media),
            PlayerAction::ToggleFullscreen => self.toggle_fullscreen(fs, now),
            PlayerAction::Rewind => self.rewind(media),
            PlayerAction::Forward => self.forward(media),
            PlayerAction::StepBack => {
                let target = (media.current_time() - self.config.step_seconds).max(0.0);
                media.set_current_time(target);
            }
            PlayerAction::StepForward => {
                let target = (media.current_time() + self.config.step_seconds).min(media.duration());
                media.set_current_time(target);
            }
        }
        self.activity(media, fs, now);
    }

    // ---- view --------------------------------------------------------------

    /// Snapshot everything the overlay renders.
    pub fn view(&self, media: &dyn MediaElement, fs: &dyn FullscreenHost) -> ControlsView {
        let is_playing = Self::is_active(media);
        let muted = media.muted() || media.volume() == 0.0;

        let progress_percent = if self.scrub_max > 0.0 {
            let percent = self.scrub_value / self.scrub_max * 100.0;
            coerce_finite(percent)
        } else {
            0.0
        };

        // While dragging the label previews the dragged position; otherwise
        // it tracks the media clock.
        let current_label = if self.is_dragging {
            format_timestamp(self.scrub_value)
        } else {
            format_timestamp(media.current_time())
        };

        ControlsView {
            play_icon: if is_playing {
                PlayPauseIcon::Pause
            } else {
                PlayPauseIcon::Play
            },
            shell_paused: !is_playing,
            volume_icon: if muted {
                VolumeIcon::Muted
            } else {
                VolumeIcon::Loud
            },
            fullscreen_icon: if fs.element().is_some() {
                FullscreenIcon::Exit
            } else {
                FullscreenIcon::Enter
            },
            controls_hidden: self.controls_hidden,
            scrub_value: self.scrub_value,
            scrub_max: self.scrub_max,
            progress_percent,
            current_label,
            duration_label: format_timestamp(media.duration()),
            volume_slider: self.volume_slider,
            playback_rate: media.playback_rate(),
        }
    }
}
