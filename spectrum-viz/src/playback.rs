//! Wiring between the external audio source and the animation driver.
//!
//! The host injects everything platform-specific: how frequency data is
//! sampled, how the analysis graph is built and how audio elements are looked
//! up by id. Nothing here reads ambient globals.

use crate::error::SpectrumError;

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

/// Live frequency sampling, one snapshot per animation frame.
pub trait FrequencySource {
    /// Number of frequency bins a snapshot carries.
    fn bin_count(&self) -> usize;

    /// Fills `out` with the current per-bin magnitudes, 0..=255 each.
    fn read_frequency_data(&mut self, out: &mut [u8]);
}

/// Builds an analysis graph for an audio element: analysis node attached to
/// the element's output, audio passed through to the destination.
pub trait AudioGraphFactory {
    type Element;
    type Source: FrequencySource;

    fn build(
        &mut self,
        element: &Self::Element,
        settings: &AnalyserSettings,
    ) -> Result<Self::Source, SpectrumError>;
}

/// Looks audio elements up by id, the way a document does.
pub trait ElementRegistry {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Analysis-node parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyserSettings {
    pub smoothing_time_constant: f32,
    pub fft_size: usize,
}

impl AnalyserSettings {
    /// One magnitude per bin; half the analysis resolution.
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }
}

impl Default for AnalyserSettings {
    fn default() -> Self {
        Self {
            smoothing_time_constant: 0.8,
            fft_size: 2048,
        }
    }
}

/// Resolves the audio element from the recognized configuration options.
///
/// An id lookup takes precedence over a directly passed element. Fails fast
/// with [`SpectrumError::AudioSourceNotFound`] when neither resolves; callers
/// must perform no further work in that case.
pub fn resolve_audio_element<R: ElementRegistry>(
    registry: &R,
    audio_ele: Option<R::Element>,
    audio_id: Option<&str>,
) -> Result<R::Element, SpectrumError> {
    if let Some(id) = audio_id {
        return registry
            .element_by_id(id)
            .ok_or(SpectrumError::AudioSourceNotFound);
    }
    audio_ele.ok_or(SpectrumError::AudioSourceNotFound)
}

/// Owns the lazily built analysis graph for one audio element.
///
/// The graph is constructed on the first play event and reused on every
/// later one.
pub struct PlaybackBridge<F: AudioGraphFactory> {
    factory: F,
    settings: AnalyserSettings,
    element: Option<F::Element>,
    source: Option<F::Source>,
}

impl<F: AudioGraphFactory> PlaybackBridge<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            settings: AnalyserSettings::default(),
            element: None,
            source: None,
        }
    }

    pub fn attach_element(&mut self, element: F::Element) {
        self.element = Some(element);
    }

    pub fn settings(&self) -> &AnalyserSettings {
        &self.settings
    }

    pub fn is_graph_built(&self) -> bool {
        self.source.is_some()
    }

    /// The frequency source, if a graph has been built.
    pub fn source_mut(&mut self) -> Option<&mut F::Source> {
        self.source.as_mut()
    }

    /// Handles a play event: builds the graph exactly once and returns the
    /// frequency source.
    ///
    /// Calling this without an attached element is a sequencing bug and
    /// surfaces as [`SpectrumError::MissingAudioElement`].
    pub fn on_play(&mut self) -> Result<&mut F::Source, SpectrumError> {
        if self.source.is_none() {
            let element = self
                .element
                .as_ref()
                .ok_or(SpectrumError::MissingAudioElement)?;
            let source = self.factory.build(element, &self.settings)?;
            #[cfg(feature = "logging")]
            info!("analysis graph built");
            #[cfg(feature = "std")]
            std::println!("analysis graph built");
            self.source = Some(source);
        }
        match self.source.as_mut() {
            Some(source) => Ok(source),
            None => Err(SpectrumError::MissingAudioElement),
        }
    }
}
