#[cfg(test)]
mod tests {

    use std::time::{Duration, Instant};

    use crate::media::{MediaElement, MediaEvent, PlaybackEngine};

    /// Pump the engine until the condition holds or a generous timeout runs
    /// out. The playback thread ticks every 50ms, so two seconds is plenty.
    fn pump_until(engine: &mut PlaybackEngine, mut condition: impl FnMut(&PlaybackEngine) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            engine.pump();
            if condition(engine) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        false
    }

    #[test]
    fn test_load_reports_metadata() {
        let mut engine = PlaybackEngine::new();
        let mut events = engine.subscribe();
        assert!(engine.duration().is_nan());

        engine.load(125.0).expect("engine should accept load");
        assert!(pump_until(&mut engine, |e| e.duration() == 125.0));
        assert!(engine.paused());
        assert!(!engine.ended());
        assert_eq!(engine.current_time(), 0.0);

        let mut saw_metadata = false;
        while let Ok(event) = events.try_recv() {
            if event == MediaEvent::LoadedMetadata {
                saw_metadata = true;
            }
        }
        assert!(saw_metadata);
    }

    #[test]
    fn test_load_rejects_degenerate_duration() {
        let mut engine = PlaybackEngine::new();
        let mut events = engine.subscribe();
        engine.load(f64::INFINITY).expect("engine should accept load");

        // Wait until the playback thread has answered the load
        let mut saw_metadata = false;
        assert!(pump_until(&mut engine, |_| {
            while let Ok(event) = events.try_recv() {
                if event == MediaEvent::LoadedMetadata {
                    saw_metadata = true;
                }
            }
            saw_metadata
        }));
        // Duration stays unknown rather than becoming infinite
        assert!(engine.duration().is_nan());
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut engine = PlaybackEngine::new();
        engine.load(100.0).expect("engine should accept load");
        assert!(pump_until(&mut engine, |e| e.duration() == 100.0));

        engine.set_current_time(500.0);
        assert!(pump_until(&mut engine, |e| e.current_time() == 100.0));

        engine.set_current_time(-20.0);
        assert!(pump_until(&mut engine, |e| e.current_time() == 0.0));
    }

    #[test]
    fn test_play_advances_position_and_pause_holds_it() {
        let mut engine = PlaybackEngine::new();
        let mut events = engine.subscribe();
        engine.load(100.0).expect("engine should accept load");
        assert!(pump_until(&mut engine, |e| e.duration() == 100.0));

        engine.play();
        assert!(pump_until(&mut engine, |e| !e.paused()));
        assert!(pump_until(&mut engine, |e| e.current_time() > 0.0));

        engine.pause();
        assert!(pump_until(&mut engine, |e| e.paused()));
        let held = engine.current_time();
        std::thread::sleep(Duration::from_millis(150));
        engine.pump();
        assert_eq!(engine.current_time(), held);

        let mut saw_play = false;
        let mut saw_pause = false;
        while let Ok(event) = events.try_recv() {
            match event {
                MediaEvent::Play => saw_play = true,
                MediaEvent::Pause => saw_pause = true,
                _ => {}
            }
        }
        assert!(saw_play);
        assert!(saw_pause);
    }

    #[test]
    fn test_playback_ends_at_duration() {
        let mut engine = PlaybackEngine::new();
        let mut events = engine.subscribe();
        // A very short timeline so the end is reached within the timeout
        engine.load(0.2).expect("engine should accept load");
        assert!(pump_until(&mut engine, |e| e.duration() == 0.2));

        engine.play();
        assert!(pump_until(&mut engine, |e| e.ended()));
        assert!(engine.paused());
        assert_eq!(engine.current_time(), 0.2);

        let mut saw_ended = false;
        while let Ok(event) = events.try_recv() {
            if event == MediaEvent::Ended {
                saw_ended = true;
            }
        }
        assert!(saw_ended);
    }

    #[test]
    fn test_seek_away_from_end_clears_ended() {
        let mut engine = PlaybackEngine::new();
        engine.load(0.2).expect("engine should accept load");
        assert!(pump_until(&mut engine, |e| e.duration() == 0.2));

        engine.play();
        assert!(pump_until(&mut engine, |e| e.ended()));

        engine.set_current_time(0.0);
        assert!(pump_until(&mut engine, |e| !e.ended()));
        assert_eq!(engine.current_time(), 0.0);
    }

    #[test]
    fn test_audio_properties_live_on_the_engine() {
        let mut engine = PlaybackEngine::new();
        engine.set_volume(0.3);
        assert_eq!(engine.volume(), 0.3);
        engine.set_volume(2.0);
        assert_eq!(engine.volume(), 1.0);

        engine.set_muted(true);
        assert!(engine.muted());

        engine.set_playback_rate(1.5);
        assert_eq!(engine.playback_rate(), 1.5);
    }
}
