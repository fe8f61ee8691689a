//! Per-bar peak caps with the VU-meter rise/fall asymmetry.

use alloc::vec::Vec;

/// Tracks the last-known peak value of every bar across frames.
///
/// Rise is instantaneous: a sampled magnitude at or above the stored cap
/// snaps the cap to it in the same frame. Fall is exactly one unit per frame.
/// The asymmetry is the VU-meter look and is load-bearing; the driver also
/// uses it to detect when an idle animation has settled.
///
/// State starts empty and grows lazily to `meter_count` entries over the
/// first frames. One tracker belongs to exactly one animation session.
pub struct CapTracker {
    caps: Vec<i16>,
    meter_count: usize,
}

impl CapTracker {
    pub fn new(meter_count: usize) -> Self {
        Self {
            caps: Vec::with_capacity(meter_count),
            meter_count,
        }
    }

    /// Advances the caps by one frame and returns their draw positions.
    ///
    /// The decayed cap is drawn at its post-decrement value, so the visual
    /// cap leads the position it will settle at.
    pub fn update(&mut self, values: &[u8]) -> &[i16] {
        for (i, &sampled) in values.iter().enumerate().take(self.meter_count) {
            let value = sampled as i16;
            if i == self.caps.len() {
                self.caps.push(value);
            }
            let prev = self.caps[i];
            self.caps[i] = if value < prev { prev - 1 } else { value };
        }
        &self.caps
    }

    pub fn caps(&self) -> &[i16] {
        &self.caps
    }

    /// True when every cap has settled at or below the baseline.
    ///
    /// Vacuously true while the state is still empty.
    pub fn at_rest(&self) -> bool {
        self.caps.iter().all(|&cap| cap <= 0)
    }

    /// Drops all cap state for a fresh session.
    pub fn reset(&mut self) {
        self.caps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_grow_lazily_to_meter_count() {
        let mut tracker = CapTracker::new(3);
        assert!(tracker.caps().is_empty());

        tracker.update(&[10, 20, 30]);
        assert_eq!(tracker.caps(), &[10, 20, 30]);
    }

    #[test]
    fn snap_up_is_instantaneous() {
        let mut tracker = CapTracker::new(1);
        tracker.update(&[5]);
        let caps = tracker.update(&[200]);
        assert_eq!(caps, &[200]);
    }

    #[test]
    fn decay_is_one_unit_per_frame() {
        let mut tracker = CapTracker::new(1);
        tracker.update(&[10]);

        for expected in (0..10).rev() {
            let caps = tracker.update(&[0]);
            assert_eq!(caps, &[expected]);
        }
        assert!(tracker.at_rest());
    }

    #[test]
    fn cap_ten_reaches_rest_after_exactly_ten_zero_frames() {
        let mut tracker = CapTracker::new(1);
        tracker.update(&[10]);

        let mut frames = 0;
        while !tracker.at_rest() {
            tracker.update(&[0]);
            frames += 1;
        }
        assert_eq!(frames, 10);
    }

    #[test]
    fn settled_cap_stays_at_zero() {
        let mut tracker = CapTracker::new(1);
        tracker.update(&[1]);
        tracker.update(&[0]);
        assert_eq!(tracker.caps(), &[0]);
        // Zero input against a zero cap takes the snap branch and holds.
        tracker.update(&[0]);
        assert_eq!(tracker.caps(), &[0]);
    }

    #[test]
    fn at_rest_iff_every_entry_nonpositive() {
        let mut tracker = CapTracker::new(3);
        tracker.update(&[0, 0, 1]);
        assert!(!tracker.at_rest());

        tracker.update(&[0, 0, 0]);
        assert!(tracker.at_rest());
    }

    #[test]
    fn empty_state_counts_as_at_rest() {
        let tracker = CapTracker::new(4);
        assert!(tracker.at_rest());
    }

    #[test]
    fn reset_clears_state() {
        let mut tracker = CapTracker::new(2);
        tracker.update(&[50, 60]);
        tracker.reset();
        assert!(tracker.caps().is_empty());
        assert!(tracker.at_rest());
    }
}
