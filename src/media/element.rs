use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media engine is no longer running")]
    EngineGone,
}

/// Change notifications emitted by the media engine, mirroring the event
/// surface of a native media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Metadata became available; duration is now known.
    LoadedMetadata,
    /// Duration changed after metadata load.
    DurationChange,
    /// Playback position advanced (fired periodically while playing and
    /// after seeks).
    TimeUpdate,
    Play,
    Pause,
    Ended,
}

/// Read and command surface of the host playback runtime.
///
/// The controller never owns playback state: it reads this surface, issues
/// commands against it, and reacts to [`MediaEvent`] notifications. Decoding,
/// buffering and seeking mechanics live behind this trait.
pub trait MediaElement {
    fn paused(&self) -> bool;
    fn ended(&self) -> bool;
    fn current_time(&self) -> f64;
    /// Total duration in seconds; NaN until metadata is known.
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn muted(&self) -> bool;
    fn playback_rate(&self) -> f64;

    fn play(&mut self);
    fn pause(&mut self);
    fn set_current_time(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn set_playback_rate(&mut self, rate: f64);
}
