use eframe::egui;

use crate::player::{ControlsView, PlayPauseIcon};

#[derive(Default)]
pub struct SurfaceResponse {
    /// Click on the bare video area (toggles playback unless ended).
    pub surface_clicked: bool,
    /// Click on the center overlay button.
    pub overlay_clicked: bool,
}

/// The video area: a dark placeholder surface (decoding is not this crate's
/// concern) with the center play/pause overlay on top.
pub struct VideoSurface;

impl VideoSurface {
    pub fn show(ui: &mut egui::Ui, view: &ControlsView) -> SurfaceResponse {
        let mut response = SurfaceResponse::default();

        let (rect, surface) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, egui::Rounding::ZERO, egui::Color32::from_rgb(12, 12, 14));

            // Dim the shell a little while paused, like a poster frame
            if view.shell_paused {
                ui.painter().rect_filled(
                    rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_black_alpha(80),
                );
            }
        }

        if surface.clicked() {
            response.surface_clicked = true;
        }

        // Center overlay mirrors the toolbar icon; hidden together with the
        // rest of the controls
        if !view.controls_hidden {
            let glyph = match view.play_icon {
                PlayPauseIcon::Play => "▶",
                PlayPauseIcon::Pause => "⏸",
            };
            let overlay_rect = egui::Rect::from_center_size(rect.center(), egui::Vec2::splat(64.0));
            let overlay = ui.put(
                overlay_rect,
                egui::Button::new(egui::RichText::new(glyph).size(32.0))
                    .rounding(egui::Rounding::same(32.0)),
            );
            if overlay.clicked() {
                response.overlay_clicked = true;
                // The overlay sits on top; don't double-toggle
                response.surface_clicked = false;
            }
        }

        response
    }
}
