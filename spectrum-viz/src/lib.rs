#![no_std]
//! Real-time frequency-spectrum visualization: VU-style meter bars with
//! slowly decaying peak caps, drawn on any `embedded-graphics` target.
//!
//! The crate never schedules frames itself. The host owns the frame loop,
//! calls [`AudioSpectrum::render_frame`] once per display refresh and stops
//! scheduling when a tick returns [`FrameOutcome::Stop`].
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
pub mod config;
pub mod driver;
pub mod error;
pub mod gradient;
pub mod playback;
pub mod renderer;
pub mod sampler;
pub mod spectrum;
pub mod types;

pub use caps::CapTracker;
pub use config::{random_surface_id, ColorStop, MeterFill, SpectrumConfig, SurfaceId};
pub use driver::AnimationDriver;
pub use error::SpectrumError;
pub use gradient::LinearGradient;
pub use playback::{
    resolve_audio_element, AnalyserSettings, AudioGraphFactory, ElementRegistry, FrequencySource,
    PlaybackBridge,
};
pub use renderer::SpectrumRenderer;
pub use sampler::StrideSampler;
pub use spectrum::AudioSpectrum;
pub use types::{DriverState, FrameOutcome, PlaybackEvent, PlaybackState};
