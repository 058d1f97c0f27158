use eframe::egui;

use crate::player::{ControlsView, FullscreenIcon, PlayPauseIcon, VolumeIcon};

/// What the user did to the control bar this frame. The app maps this onto
/// controller calls; the bar itself never touches the media element.
#[derive(Default)]
pub struct ControlBarResponse {
    pub toggle_play: bool,
    pub rewind: bool,
    pub forward: bool,
    /// Scrub bar is being dragged; value is the live preview position.
    pub scrub_input: Option<f64>,
    /// Scrub drag released (or bar clicked); value is the seek target.
    pub scrub_commit: Option<f64>,
    pub volume_input: Option<f64>,
    pub toggle_mute: bool,
    pub toggle_fullscreen: bool,
    pub speed_selected: Option<f64>,
}

pub struct ControlBar;

impl ControlBar {
    pub fn show(ui: &mut egui::Ui, view: &ControlsView, speed_options: &[f64]) -> ControlBarResponse {
        let mut response = ControlBarResponse::default();

        ui.horizontal(|ui| {
            let play_glyph = match view.play_icon {
                PlayPauseIcon::Play => "▶",
                PlayPauseIcon::Pause => "⏸",
            };
            if ui.button(play_glyph).clicked() {
                response.toggle_play = true;
            }

            if ui.button("⏪").on_hover_text("Back 10s").clicked() {
                response.rewind = true;
            }
            if ui.button("⏩").on_hover_text("Forward 10s").clicked() {
                response.forward = true;
            }

            ui.separator();
            ui.monospace(format!("{} / {}", view.current_label, view.duration_label));

            let mut scrub_value = view.scrub_value;
            let scrub = ui
                .add(
                    egui::Slider::new(&mut scrub_value, 0.0..=view.scrub_max)
                        .show_value(false)
                        .trailing_fill(true),
                )
                .on_hover_text(format!("{:.0}%", view.progress_percent));
            if scrub.dragged() {
                response.scrub_input = Some(scrub_value);
            }
            if scrub.drag_stopped() || scrub.clicked() {
                response.scrub_commit = Some(scrub_value);
            }

            ui.separator();

            let volume_glyph = match view.volume_icon {
                VolumeIcon::Loud => "🔊",
                VolumeIcon::Muted => "🔇",
            };
            if ui.button(volume_glyph).clicked() {
                response.toggle_mute = true;
            }

            let mut volume = view.volume_slider;
            if ui
                .add(egui::Slider::new(&mut volume, 0.0..=1.0).show_value(false))
                .changed()
            {
                response.volume_input = Some(volume);
            }

            ui.separator();

            egui::ComboBox::from_id_source("playback_speed")
                .selected_text(format!("{}x", view.playback_rate))
                .show_ui(ui, |ui| {
                    for &rate in speed_options {
                        if ui
                            .selectable_label(view.playback_rate == rate, format!("{}x", rate))
                            .clicked()
                        {
                            response.speed_selected = Some(rate);
                        }
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let fullscreen_glyph = match view.fullscreen_icon {
                    FullscreenIcon::Enter => "⛶",
                    FullscreenIcon::Exit => "🗗",
                };
                if ui.button(fullscreen_glyph).on_hover_text("Fullscreen (F)").clicked() {
                    response.toggle_fullscreen = true;
                }
            });
        });

        response
    }
}
