use core::fmt;

/// Failures on the playback-bridge path.
///
/// Rendering math is deliberately unvalidated (malformed gradient stops, a
/// zero meter count and similar produce whatever the math produces, never an
/// error), so the taxonomy only covers audio wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum SpectrumError {
    /// Neither an explicit audio element nor a lookup by id resolved.
    AudioSourceNotFound,
    /// The host cannot construct an audio analysis graph.
    EnvironmentUnsupported,
    /// Graph setup ran without a resolved audio element. This is a sequencing
    /// bug in the caller, not a recoverable condition.
    MissingAudioElement,
}

impl fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumError::AudioSourceNotFound => write!(f, "target audio not found"),
            SpectrumError::EnvironmentUnsupported => {
                write!(f, "host does not support audio analysis graphs")
            }
            SpectrumError::MissingAudioElement => {
                write!(f, "graph setup invoked without an audio element")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpectrumError {}
