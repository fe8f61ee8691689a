//! Lifecycle state for one visualization session.

/// Whether the audio source is currently producing sound.
///
/// Transitions are driven externally by the source's play/pause events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Whether the animation driver has a live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum DriverState {
    Stopped,
    Running,
}

/// A play or pause signal from the audio source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum PlaybackEvent {
    Play,
    Pause,
}

/// What the host's frame loop should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum FrameOutcome {
    /// Schedule another frame.
    Continue,
    /// The session ended; stop scheduling frames.
    Stop,
}

impl PlaybackState {
    /// Next playback state after an external event.
    pub fn after(self, event: PlaybackEvent) -> PlaybackState {
        match event {
            PlaybackEvent::Play => PlaybackState::Playing,
            PlaybackEvent::Pause => PlaybackState::Paused,
        }
    }
}

impl DriverState {
    /// Next driver state after an external event.
    ///
    /// Only a play event on a stopped driver starts a session. A pause event
    /// never stops the driver synchronously; the caps decay to rest first.
    pub fn after(self, event: PlaybackEvent) -> DriverState {
        match (self, event) {
            (DriverState::Stopped, PlaybackEvent::Play) => DriverState::Running,
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_state_follows_events() {
        assert_eq!(
            PlaybackState::Paused.after(PlaybackEvent::Play),
            PlaybackState::Playing
        );
        assert_eq!(
            PlaybackState::Playing.after(PlaybackEvent::Pause),
            PlaybackState::Paused
        );
        assert_eq!(
            PlaybackState::Playing.after(PlaybackEvent::Play),
            PlaybackState::Playing
        );
    }

    #[test]
    fn play_starts_a_stopped_driver() {
        assert_eq!(
            DriverState::Stopped.after(PlaybackEvent::Play),
            DriverState::Running
        );
        assert_eq!(
            DriverState::Running.after(PlaybackEvent::Play),
            DriverState::Running
        );
    }

    #[test]
    fn pause_never_stops_the_driver_synchronously() {
        assert_eq!(
            DriverState::Running.after(PlaybackEvent::Pause),
            DriverState::Running
        );
        assert_eq!(
            DriverState::Stopped.after(PlaybackEvent::Pause),
            DriverState::Stopped
        );
    }
}
