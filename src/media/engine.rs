use std::sync::mpsc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

use crate::media::{MediaElement, MediaError, MediaEvent};

/// Commands sent to the playback thread
#[derive(Debug, Clone)]
enum EngineCommand {
    Load(f64), // duration in seconds
    Play,
    Pause,
    Seek(f64),
    SetRate(f64),
    Shutdown,
}

/// Status updates from the playback thread
#[derive(Debug, Clone, Copy)]
enum EngineStatus {
    Loaded(f64), // duration
    Position(f64),
    Played,
    Paused,
    Ended,
}

/// Interval at which the playback thread checks for commands and, while
/// playing, advances the clock and reports position.
const TICK: Duration = Duration::from_millis(50);

/// Playback engine driving a wall-clock position behind the
/// [`MediaElement`] surface.
///
/// Runs a worker thread that owns the playback clock: commands go in over an
/// mpsc channel, status comes back and is folded into a mirror of the media
/// state on [`PlaybackEngine::pump`]. Frame decoding is not this crate's
/// concern; the engine models only the state machine the overlay observes
/// (position, play/pause, ended, seek clamping).
pub struct PlaybackEngine {
    command_sender: mpsc::Sender<EngineCommand>,
    status_receiver: mpsc::Receiver<EngineStatus>,
    event_sender: broadcast::Sender<MediaEvent>,
    thread_handle: Option<std::thread::JoinHandle<()>>,

    // Mirror of the playback thread's state, updated by pump()
    paused: bool,
    ended: bool,
    current_time: f64,
    duration: f64,

    // Audio properties have no thread-side counterpart (no audio pipeline);
    // the engine is their source of truth directly.
    volume: f64,
    muted: bool,
    playback_rate: f64,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (status_tx, status_rx) = mpsc::channel::<EngineStatus>();
        let (event_sender, _) = broadcast::channel(64);

        let handle = std::thread::spawn(move || {
            Self::run_playback_thread(cmd_rx, status_tx);
        });

        Self {
            command_sender: cmd_tx,
            status_receiver: status_rx,
            event_sender,
            thread_handle: Some(handle),
            paused: true,
            ended: false,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            muted: false,
            playback_rate: 1.0,
        }
    }

    fn run_playback_thread(cmd_rx: mpsc::Receiver<EngineCommand>, status_tx: mpsc::Sender<EngineStatus>) {
        let mut duration = f64::NAN;
        let mut position = 0.0;
        let mut playing = false;
        let mut rate = 1.0;
        let mut last_tick = Instant::now();

        // Advance the position by wall-clock time scaled with the rate
        let advance = |position: &mut f64, last_tick: &mut Instant, rate: f64, duration: f64| {
            let now = Instant::now();
            *position += now.duration_since(*last_tick).as_secs_f64() * rate;
            *last_tick = now;
            if *position < 0.0 {
                *position = 0.0;
            }
            if duration.is_finite() && *position > duration {
                *position = duration;
            }
        };

        loop {
            match cmd_rx.recv_timeout(TICK) {
                Ok(command) => {
                    log::debug!("Playback thread received command: {:?}", command);
                    match command {
                        EngineCommand::Load(dur) => {
                            duration = if dur.is_finite() && dur > 0.0 { dur } else { f64::NAN };
                            position = 0.0;
                            playing = false;
                            last_tick = Instant::now();
                            log::info!("Playback thread: loaded media with duration {:.2}s", duration);
                            let _ = status_tx.send(EngineStatus::Loaded(duration));
                        }
                        EngineCommand::Play => {
                            if !playing {
                                // Playing again after the end restarts from the top
                                if duration.is_finite() && position >= duration {
                                    position = 0.0;
                                    let _ = status_tx.send(EngineStatus::Position(position));
                                }
                                playing = true;
                                last_tick = Instant::now();
                                let _ = status_tx.send(EngineStatus::Played);
                            }
                        }
                        EngineCommand::Pause => {
                            if playing {
                                advance(&mut position, &mut last_tick, rate, duration);
                                playing = false;
                                let _ = status_tx.send(EngineStatus::Position(position));
                                let _ = status_tx.send(EngineStatus::Paused);
                            }
                        }
                        EngineCommand::Seek(target) => {
                            let clamped = if duration.is_finite() {
                                target.clamp(0.0, duration)
                            } else {
                                target.max(0.0)
                            };
                            position = if clamped.is_finite() { clamped } else { 0.0 };
                            last_tick = Instant::now();
                            let _ = status_tx.send(EngineStatus::Position(position));
                        }
                        EngineCommand::SetRate(new_rate) => {
                            if playing {
                                advance(&mut position, &mut last_tick, rate, duration);
                                let _ = status_tx.send(EngineStatus::Position(position));
                            }
                            rate = new_rate;
                        }
                        EngineCommand::Shutdown => {
                            log::info!("Playback thread: received shutdown command, terminating");
                            break;
                        }
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if playing {
                        advance(&mut position, &mut last_tick, rate, duration);
                        let _ = status_tx.send(EngineStatus::Position(position));
                        if duration.is_finite() && position >= duration {
                            playing = false;
                            let _ = status_tx.send(EngineStatus::Paused);
                            let _ = status_tx.send(EngineStatus::Ended);
                        }
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    log::info!("Playback thread: channel disconnected, terminating");
                    break;
                }
            }
        }
    }

    /// Subscribe to media change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<MediaEvent> {
        self.event_sender.subscribe()
    }

    /// Load a media timeline with the given duration.
    pub fn load(&mut self, duration: f64) -> Result<(), MediaError> {
        self.command_sender
            .send(EngineCommand::Load(duration))
            .map_err(|_| MediaError::EngineGone)
    }

    /// Fold pending status updates from the playback thread into the state
    /// mirror and broadcast the matching media events. Called once per frame.
    pub fn pump(&mut self) {
        while let Ok(status) = self.status_receiver.try_recv() {
            match status {
                EngineStatus::Loaded(duration) => {
                    self.duration = duration;
                    self.current_time = 0.0;
                    self.paused = true;
                    self.ended = false;
                    self.broadcast(MediaEvent::LoadedMetadata);
                    self.broadcast(MediaEvent::DurationChange);
                }
                EngineStatus::Position(position) => {
                    self.current_time = position;
                    // Seeking away from the end clears the ended flag
                    if self.ended && self.duration.is_finite() && position < self.duration {
                        self.ended = false;
                    }
                    self.broadcast(MediaEvent::TimeUpdate);
                }
                EngineStatus::Played => {
                    self.paused = false;
                    self.ended = false;
                    self.broadcast(MediaEvent::Play);
                }
                EngineStatus::Paused => {
                    self.paused = true;
                    self.broadcast(MediaEvent::Pause);
                }
                EngineStatus::Ended => {
                    self.paused = true;
                    self.ended = true;
                    if self.duration.is_finite() {
                        self.current_time = self.duration;
                    }
                    self.broadcast(MediaEvent::Ended);
                }
            }
        }
    }

    fn broadcast(&self, event: MediaEvent) {
        // Send only fails when nobody is subscribed, which is fine
        let _ = self.event_sender.send(event);
    }

    fn send_command(&self, command: EngineCommand) {
        if self.command_sender.send(command).is_err() {
            log::warn!("{}", MediaError::EngineGone);
        }
    }
}

impl MediaElement for PlaybackEngine {
    fn paused(&self) -> bool {
        self.paused
    }

    fn ended(&self) -> bool {
        self.ended
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn play(&mut self) {
        self.send_command(EngineCommand::Play);
    }

    fn pause(&mut self) {
        self.send_command(EngineCommand::Pause);
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.send_command(EngineCommand::Seek(seconds));
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
        self.send_command(EngineCommand::SetRate(rate));
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        log::debug!("PlaybackEngine::drop() - sending shutdown command");
        let _ = self.command_sender.send(EngineCommand::Shutdown);

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}
