#[cfg(test)]
mod tests {

    use std::time::{Duration, Instant};

    use crate::core::PlayerConfig;
    use crate::gui::app::OverlayPlayerApp;
    use crate::media::{MediaElement, PlaybackEngine, ViewportFullscreen};
    use crate::player::PlayerController;

    // Test helper to create a minimal app instance for testing (no eframe
    // context needed; the engine runs its own thread)
    fn create_test_app() -> OverlayPlayerApp {
        let config = PlayerConfig::default();
        let engine = PlaybackEngine::new();
        let media_events = engine.subscribe();

        OverlayPlayerApp {
            controller: PlayerController::new(config.clone()),
            config,
            engine,
            media_events,
            fullscreen: ViewportFullscreen::new(),
        }
    }

    /// Pump the engine and forward events until the condition holds.
    fn pump_until(app: &mut OverlayPlayerApp, mut condition: impl FnMut(&OverlayPlayerApp) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            app.engine.pump();
            app.process_media_events(Instant::now());
            if condition(app) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        false
    }

    #[test]
    fn test_app_initialization_defaults() {
        let app = create_test_app();

        assert!(!app.controller.is_dragging());
        assert!(!app.controller.controls_hidden());
        assert_eq!(app.controller.volume_slider(), 0.7);
        // Minimal usable scrub range before metadata arrives
        assert_eq!(app.controller.scrub_max(), 1.0);
    }

    #[test]
    fn test_loading_media_updates_scrub_range_and_label() {
        let mut app = create_test_app();

        app.engine.load(125.0).expect("engine should accept load");
        assert!(pump_until(&mut app, |a| a.controller.scrub_max() == 125.0));

        let view = app.controller.view(&app.engine, &app.fullscreen);
        assert_eq!(view.scrub_max, 125.0);
        assert_eq!(view.duration_label, "2:05");
        assert_eq!(view.current_label, "0:00");
    }

    #[test]
    fn test_play_through_controller_reaches_engine() {
        let mut app = create_test_app();
        app.engine.load(100.0).expect("engine should accept load");
        assert!(pump_until(&mut app, |a| a.controller.scrub_max() == 100.0));

        app.controller.toggle_play(&mut app.engine);

        assert!(pump_until(&mut app, |a| !a.engine.paused()));
        assert!(pump_until(&mut app, |a| a.engine.current_time() > 0.0));
    }

    #[test]
    fn test_scrub_commit_seeks_engine() {
        let mut app = create_test_app();
        app.engine.load(100.0).expect("engine should accept load");
        assert!(pump_until(&mut app, |a| a.controller.scrub_max() == 100.0));

        let now = Instant::now();
        app.controller.scrub_input(40.0);
        app.controller.scrub_commit(40.0, &mut app.engine, &app.fullscreen, now);

        assert!(pump_until(&mut app, |a| a.engine.current_time() == 40.0));
        assert!(!app.controller.is_dragging());
    }
}
