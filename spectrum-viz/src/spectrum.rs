//! Top-level spectrum component: playback bridge plus animation driver.

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888};

#[cfg(feature = "logging")]
use defmt::error;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::config::{SpectrumConfig, SurfaceId};
use crate::driver::AnimationDriver;
use crate::error::SpectrumError;
use crate::playback::{resolve_audio_element, AudioGraphFactory, ElementRegistry, PlaybackBridge};
use crate::types::{DriverState, FrameOutcome};

/// One spectrum visualization bound to one audio element and one drawing
/// surface.
///
/// The host forwards the element's play/pause events to [`handle_play`] and
/// [`handle_pause`], and drives frames through [`render_frame`].
///
/// [`handle_play`]: AudioSpectrum::handle_play
/// [`handle_pause`]: AudioSpectrum::handle_pause
/// [`render_frame`]: AudioSpectrum::render_frame
pub struct AudioSpectrum<F: AudioGraphFactory> {
    id: SurfaceId,
    bridge: PlaybackBridge<F>,
    driver: AnimationDriver,
}

impl<F: AudioGraphFactory> AudioSpectrum<F> {
    /// Builds the component, resolving the audio element up front.
    ///
    /// Exactly one of `audio_ele` / `audio_id` must resolve; otherwise this
    /// fails fast with [`SpectrumError::AudioSourceNotFound`] and performs no
    /// further work.
    pub fn new<R>(
        config: &SpectrumConfig,
        factory: F,
        registry: &R,
        audio_ele: Option<F::Element>,
        audio_id: Option<&str>,
        id: SurfaceId,
    ) -> Result<Self, SpectrumError>
    where
        R: ElementRegistry<Element = F::Element>,
    {
        let element = match resolve_audio_element(registry, audio_ele, audio_id) {
            Ok(element) => element,
            Err(err) => {
                #[cfg(feature = "logging")]
                error!("target audio not found");
                #[cfg(feature = "std")]
                std::println!("error: {}", err);
                return Err(err);
            }
        };

        let mut bridge = PlaybackBridge::new(factory);
        bridge.attach_element(element);
        Ok(Self {
            id,
            bridge,
            driver: AnimationDriver::new(config),
        })
    }

    /// Identifier of the drawable region this component paints.
    pub fn id(&self) -> &SurfaceId {
        &self.id
    }

    pub fn is_running(&self) -> bool {
        self.driver.state() == DriverState::Running
    }

    /// Handles a play event from the audio element.
    ///
    /// The analysis graph is built on the first play and reused afterwards.
    /// If the host cannot build one, the failure is logged and the component
    /// stays visually inert; only the sequencing bug
    /// [`SpectrumError::MissingAudioElement`] propagates.
    pub fn handle_play(&mut self) -> Result<(), SpectrumError> {
        match self.bridge.on_play() {
            Ok(_) => {
                self.driver.handle_play();
                Ok(())
            }
            Err(SpectrumError::MissingAudioElement) => Err(SpectrumError::MissingAudioElement),
            Err(_err) => {
                #[cfg(feature = "logging")]
                error!("audio analysis unavailable, spectrum stays inert");
                #[cfg(feature = "std")]
                std::println!("error: {}", _err);
                Ok(())
            }
        }
    }

    /// Handles a pause event; decay-to-rest takes over from here.
    pub fn handle_pause(&mut self) {
        self.driver.handle_pause();
    }

    /// Runs one frame against the bridge's frequency source.
    ///
    /// Returns [`FrameOutcome::Stop`] when there is nothing to animate, either
    /// because no graph exists or because the session settled.
    pub fn render_frame<D>(&mut self, target: &mut D) -> Result<FrameOutcome, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self.bridge.source_mut() {
            Some(source) => self.driver.tick(source, target),
            None => Ok(FrameOutcome::Stop),
        }
    }

    /// Tears the session down. The host must also cancel any pending frame
    /// callback so a removed visual cannot keep a scheduled frame alive.
    pub fn dispose(&mut self) {
        self.driver.dispose();
    }
}
