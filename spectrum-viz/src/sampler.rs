//! Fixed-stride decimation of a frequency frame down to one value per bar.

use alloc::vec::Vec;

#[allow(unused_imports)]
use micromath::F32Ext;

/// Picks one representative frequency bin per meter.
///
/// The stride is `round(bin_count / meter_count)` and bar `i` reads bin
/// `i * step`. Nearest-bin decimation, not averaging; the sampled indices are
/// precomputed once per (bin_count, meter_count) pair.
pub struct StrideSampler {
    bin_count: usize,
    indices: Vec<usize>,
}

impl StrideSampler {
    pub fn new(bin_count: usize, meter_count: usize) -> Self {
        let step = (bin_count as f32 / meter_count as f32).round() as usize;
        let indices = (0..meter_count).map(|i| i * step).collect();
        Self { bin_count, indices }
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Writes one sampled magnitude per bar into `out`.
    ///
    /// Strides that run past the end of `bins` read as 0.
    pub fn sample_into(&self, bins: &[u8], out: &mut [u8]) {
        for (slot, &idx) in out.iter_mut().zip(self.indices.iter()) {
            *slot = bins.get(idx).copied().unwrap_or(0);
        }
    }
}
