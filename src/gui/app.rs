use eframe::egui;
use std::time::Instant;
use tokio::sync::broadcast;

use crate::core::PlayerConfig;
use crate::gui::controls::ControlBar;
use crate::gui::surface::VideoSurface;
use crate::hotkeys::{action_for_key, BOUND_KEYS};
use crate::media::{MediaEvent, PlaybackEngine, ViewportFullscreen};
use crate::player::PlayerController;

/// Length of the synthetic timeline the demo binary loads; a real embedding
/// would load actual media behind the same engine surface.
const DEMO_TIMELINE_SECONDS: f64 = 634.0;

pub struct OverlayPlayerApp {
    pub config: PlayerConfig,
    pub controller: PlayerController,
    pub engine: PlaybackEngine,
    pub media_events: broadcast::Receiver<MediaEvent>,
    pub fullscreen: ViewportFullscreen,
}

impl OverlayPlayerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        // Set global text color to white
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::WHITE);
        cc.egui_ctx.set_visuals(visuals);

        let config = PlayerConfig::load()?;

        let mut engine = PlaybackEngine::new();
        let media_events = engine.subscribe();
        engine
            .load(DEMO_TIMELINE_SECONDS)
            .map_err(|e| anyhow::anyhow!("Failed to load media timeline: {}", e))?;

        let mut controller = PlayerController::new(config.clone());
        controller.apply_initial_state(&mut engine);

        Ok(Self {
            config,
            controller,
            engine,
            media_events,
            fullscreen: ViewportFullscreen::new(),
        })
    }

    /// Drain media change notifications into the controller. Also called
    /// from tests, which drive the same path the frame loop does.
    pub fn process_media_events(&mut self, now: Instant) {
        while let Ok(event) = self.media_events.try_recv() {
            self.controller
                .handle_media_event(event, &self.engine, &self.fullscreen, now);
        }
    }

    fn process_keyboard(&mut self, ctx: &egui::Context, now: Instant) {
        let mut actions = Vec::new();
        ctx.input_mut(|input| {
            for key in BOUND_KEYS {
                if let Some(action) = action_for_key(key) {
                    let pressed = if action.consumes_key() {
                        input.consume_key(egui::Modifiers::NONE, key)
                    } else {
                        input.key_pressed(key)
                    };
                    if pressed {
                        actions.push(action);
                    }
                }
            }
        });

        for action in actions {
            log::debug!("Keyboard action: {:?}", action);
            self.controller
                .handle_action(action, &mut self.engine, &mut self.fullscreen, now);
        }
    }

    fn process_pointer_activity(&mut self, ctx: &egui::Context, now: Instant) {
        let active = ctx.input(|input| {
            input.pointer.is_moving() || input.pointer.any_pressed() || input.any_touches()
        });
        if active {
            self.controller.activity(&self.engine, &self.fullscreen, now);
        }
    }
}

impl eframe::App for OverlayPlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Fold engine status into the media mirror, then process events
        self.engine.pump();
        self.process_media_events(now);
        self.process_keyboard(ctx, now);
        self.process_pointer_activity(ctx, now);

        // Flush pending fullscreen requests and pick up external changes (Esc)
        if self.fullscreen.sync(ctx) {
            self.controller
                .on_fullscreen_change(&self.engine, &self.fullscreen, now);
        }

        self.controller
            .poll_autohide(&self.engine, &self.fullscreen, now);

        let view = self.controller.view(&self.engine, &self.fullscreen);

        if !view.controls_hidden {
            egui::TopBottomPanel::bottom("control_bar").show(ctx, |ui| {
                let bar = ControlBar::show(ui, &view, &self.config.speed_options);

                if bar.toggle_play {
                    self.controller.toggle_play(&mut self.engine);
                }
                if bar.rewind {
                    self.controller.rewind(&mut self.engine);
                }
                if bar.forward {
                    self.controller.forward(&mut self.engine);
                }
                if let Some(value) = bar.scrub_input {
                    self.controller.scrub_input(value);
                }
                if let Some(value) = bar.scrub_commit {
                    self.controller
                        .scrub_commit(value, &mut self.engine, &self.fullscreen, now);
                }
                if let Some(volume) = bar.volume_input {
                    self.controller.volume_input(volume, &mut self.engine);
                }
                if bar.toggle_mute {
                    self.controller.toggle_mute(&mut self.engine);
                }
                if bar.toggle_fullscreen {
                    self.controller.toggle_fullscreen(&mut self.fullscreen, now);
                }
                if let Some(rate) = bar.speed_selected {
                    self.controller.set_speed(rate, &mut self.engine);
                }
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let surface = VideoSurface::show(ui, &view);
                if surface.surface_clicked {
                    self.controller.surface_clicked(&mut self.engine);
                }
                if surface.overlay_clicked {
                    self.controller.overlay_clicked(&mut self.engine);
                }
            });

        // Request repaint to keep the playback clock and hide timer moving
        ctx.request_repaint();
    }
}
