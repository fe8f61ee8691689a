//! Desktop simulator for the spectrum visualizer.
//!
//! Plays the role of every external collaborator: a synthetic analyser node
//! stands in for the audio graph, the simulator window is the drawing
//! surface and the space bar issues play/pause events. The loop schedules
//! frames only while ticks ask for more, mirroring a host that cancels its
//! frame callback on `Stop`.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use spectrum_viz::{
    random_surface_id, AnalyserSettings, AudioGraphFactory, AudioSpectrum, ElementRegistry,
    FrameOutcome, FrequencySource, SpectrumConfig, SpectrumError,
};
use std::{thread, time::Duration};

const FRAME_DELAY_MS: u64 = 16;

/// Synthetic analyser: a few moving sine humps across the bins.
struct SineAnalyser {
    bins: usize,
    time: f32,
}

impl SineAnalyser {
    fn new(bins: usize) -> Self {
        Self { bins, time: 0.0 }
    }
}

impl FrequencySource for SineAnalyser {
    fn bin_count(&self) -> usize {
        self.bins
    }

    fn read_frequency_data(&mut self, out: &mut [u8]) {
        for (i, bin) in out.iter_mut().enumerate() {
            let x = i as f32 / self.bins as f32;
            let hump = (self.time + x * 8.0 * core::f32::consts::PI).sin() * 0.5 + 0.5;
            let falloff = 1.0 - x * 0.7;
            *bin = (hump * falloff * 255.0) as u8;
        }
        self.time += 0.05;
    }
}

struct SimulatorAudioGraph;

impl AudioGraphFactory for SimulatorAudioGraph {
    type Element = &'static str;
    type Source = SineAnalyser;

    fn build(
        &mut self,
        _element: &Self::Element,
        settings: &AnalyserSettings,
    ) -> Result<Self::Source, SpectrumError> {
        Ok(SineAnalyser::new(settings.bin_count()))
    }
}

struct SimulatorDocument;

impl ElementRegistry for SimulatorDocument {
    type Element = &'static str;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (id == "demo-track").then_some("demo-track")
    }
}

fn main() -> Result<(), core::convert::Infallible> {
    let config = SpectrumConfig {
        meter_count: 25,
        ..SpectrumConfig::default()
    };

    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(config.width, config.height));
    let mut window = Window::new(
        "spectrum-viz simulator (space: play/pause)",
        &OutputSettingsBuilder::new().scale(2).build(),
    );

    let id = random_surface_id(&mut rand::rng());
    println!("spectrum surface id: {}", id);

    let mut spectrum = AudioSpectrum::new(
        &config,
        SimulatorAudioGraph,
        &SimulatorDocument,
        None,
        Some("demo-track"),
        id,
    )
    .expect("demo-track should resolve");

    spectrum.handle_play().expect("simulator graph always builds");

    let mut playing = true;
    let mut scheduled = true;
    loop {
        if scheduled {
            let outcome = spectrum.render_frame(&mut display)?;
            // A stopped session hands the frame callback back to the host.
            scheduled = outcome == FrameOutcome::Continue;
        }
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Space,
                    ..
                } => {
                    playing = !playing;
                    if playing {
                        spectrum
                            .handle_play()
                            .expect("simulator graph always builds");
                        scheduled = true;
                    } else {
                        spectrum.handle_pause();
                    }
                }
                _ => {}
            }
        }

        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }
}
