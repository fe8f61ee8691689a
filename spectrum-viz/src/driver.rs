//! Per-frame animation driver.
//!
//! The driver owns one visualization session: cap state, decimation and the
//! draw pass. It is deliberately ignorant of the host's frame-callback
//! primitive; the host calls [`AnimationDriver::tick`] once per display
//! refresh and keeps scheduling only while ticks return
//! [`FrameOutcome::Continue`].

use alloc::{vec, vec::Vec};

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888};

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::caps::CapTracker;
use crate::config::SpectrumConfig;
use crate::playback::FrequencySource;
use crate::renderer::SpectrumRenderer;
use crate::sampler::StrideSampler;
use crate::types::{DriverState, FrameOutcome, PlaybackEvent, PlaybackState};

const DEFAULT_BIN_COUNT: usize = 1024;

pub struct AnimationDriver {
    state: DriverState,
    playback: PlaybackState,
    meter_count: usize,
    caps: CapTracker,
    sampler: StrideSampler,
    renderer: SpectrumRenderer,
    bin_buf: Vec<u8>,
    bar_values: Vec<u8>,
}

impl AnimationDriver {
    pub fn new(config: &SpectrumConfig) -> Self {
        Self {
            state: DriverState::Stopped,
            playback: PlaybackState::Paused,
            meter_count: config.meter_count,
            caps: CapTracker::new(config.meter_count),
            sampler: StrideSampler::new(DEFAULT_BIN_COUNT, config.meter_count),
            renderer: SpectrumRenderer::new(config),
            bin_buf: vec![0; DEFAULT_BIN_COUNT],
            bar_values: vec![0; config.meter_count],
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Applies an external play/pause signal.
    ///
    /// A play event starting a session resets the cap state; the previous
    /// session's caps never leak into the next one.
    pub fn handle_event(&mut self, event: PlaybackEvent) {
        self.playback = self.playback.after(event);
        let next = self.state.after(event);
        if self.state == DriverState::Stopped && next == DriverState::Running {
            self.caps.reset();
            #[cfg(feature = "logging")]
            info!("animation session started");
            #[cfg(feature = "std")]
            std::println!("animation session started");
        }
        self.state = next;
    }

    pub fn handle_play(&mut self) {
        self.handle_event(PlaybackEvent::Play);
    }

    pub fn handle_pause(&mut self) {
        self.handle_event(PlaybackEvent::Pause);
    }

    /// Explicit teardown for hosts removing the visual mid-animation. The
    /// host must also cancel any frame callback it still has pending.
    pub fn dispose(&mut self) {
        self.state = DriverState::Stopped;
        self.caps.reset();
    }

    /// Runs one animation frame: sample, decay, draw, decide.
    ///
    /// Paused frames force all magnitudes to 0 so the caps fall toward rest.
    /// Once every cap is at rest while paused, the driver stops itself and
    /// clears the surface. Without that the idle loop would redraw a blank
    /// spectrum on every display refresh for as long as the component lives.
    pub fn tick<S, D>(&mut self, source: &mut S, target: &mut D) -> Result<FrameOutcome, D::Error>
    where
        S: FrequencySource,
        D: DrawTarget<Color = Rgb888>,
    {
        if self.state == DriverState::Stopped {
            return Ok(FrameOutcome::Stop);
        }

        let bin_count = source.bin_count();
        if self.bin_buf.len() != bin_count {
            self.bin_buf = vec![0; bin_count];
            self.sampler = StrideSampler::new(bin_count, self.meter_count);
        }
        source.read_frequency_data(&mut self.bin_buf);
        if self.playback == PlaybackState::Paused {
            self.bin_buf.fill(0);
        }

        self.sampler.sample_into(&self.bin_buf, &mut self.bar_values);
        let caps = self.caps.update(&self.bar_values);
        self.renderer.draw_frame(target, &self.bar_values, caps)?;

        if self.playback == PlaybackState::Paused && self.caps.at_rest() {
            self.renderer.clear(target)?;
            self.state = DriverState::Stopped;
            #[cfg(feature = "logging")]
            info!("caps at rest, animation session stopped");
            #[cfg(feature = "std")]
            std::println!("caps at rest, animation session stopped");
            return Ok(FrameOutcome::Stop);
        }
        Ok(FrameOutcome::Continue)
    }
}
