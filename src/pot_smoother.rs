//! # Pot Smoother
//!
//! Raw ADC readings of a pot jitter by a few counts even when nobody touches the knob. With the detune pot in the
//! stepped regime a reading sitting right on the edge of a zone would make oscillator 2 chatter between two intervals.
//!
//! The pot smoother is a moving average over the most recent readings. It is optional, readings can be handed to the
//! glide controller raw.

use heapless::HistoryBuffer;

/// A moving average of the last `N` raw pot readings is represented here.
///
/// `N` must be at least 1. Larger values smooth more but make the knob feel sluggish.
pub struct PotSmoother<const N: usize> {
    buff: HistoryBuffer<u16, N>,
}

impl<const N: usize> PotSmoother<N> {
    /// `PotSmoother::new()` is a new pot smoother with no readings in it
    pub fn new() -> Self {
        Self {
            buff: HistoryBuffer::new(),
        }
    }

    /// `ps.push(r)` adds raw pot reading `r` to the average, pushing out the oldest reading once full
    pub fn push(&mut self, raw: u16) {
        self.buff.write(raw);
    }

    /// `ps.value()` is the average of the readings held, rounded to the nearest integer
    ///
    /// Before the buffer fills up this is the average of however many readings there are so far. Zero before any
    /// readings are pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use supersaw_pitch::pot_smoother::PotSmoother;
    /// let mut ps = PotSmoother::<4>::new();
    /// for r in [500, 502, 499, 501] {
    ///     ps.push(r);
    /// }
    /// assert_eq!(ps.value(), 501);
    /// ```
    pub fn value(&self) -> u16 {
        let num_readings = self.buff.len() as u32;
        if num_readings == 0 {
            return 0;
        }

        let sum: u32 = self.buff.as_slice().iter().map(|r| *r as u32).sum();

        ((sum + num_readings / 2) / num_readings) as u16
    }

    /// `ps.clear()` throws away all readings
    pub fn clear(&mut self) {
        self.buff.clear();
    }
}

impl<const N: usize> Default for PotSmoother<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_smoother_is_zero() {
        let ps = PotSmoother::<8>::new();
        assert_eq!(ps.value(), 0);
    }

    #[test]
    fn partial_buffer_averages_what_it_has() {
        let mut ps = PotSmoother::<8>::new();
        ps.push(100);
        assert_eq!(ps.value(), 100);
        ps.push(200);
        assert_eq!(ps.value(), 150);
    }

    #[test]
    fn oldest_readings_fall_out() {
        let mut ps = PotSmoother::<4>::new();
        for _ in 0..4 {
            ps.push(0);
        }
        for _ in 0..4 {
            ps.push(1000);
        }
        assert_eq!(ps.value(), 1000);
    }

    #[test]
    fn rounds_to_nearest() {
        let mut ps = PotSmoother::<4>::new();
        // 1001 / 4 = 250.25
        for r in [250, 250, 250, 251] {
            ps.push(r);
        }
        assert_eq!(ps.value(), 250);

        // 1002 / 4 = 250.5, halves round up
        ps.push(251);
        assert_eq!(ps.value(), 251);
    }

    #[test]
    fn jitter_around_zone_edge_is_flattened() {
        use crate::detune::stepped_index;

        let mut ps = PotSmoother::<16>::new();
        for _ in 0..16 {
            ps.push(430);
        }

        // jittering +/- 8 counts around 430, the low readings fall in the next zone down
        let jitter = [424, 436, 422, 438, 426, 434, 428, 432];
        assert_eq!(stepped_index(422), 3);

        for r in jitter.iter().cycle().take(64) {
            ps.push(*r);
            assert_eq!(stepped_index(ps.value()), 2);
        }
    }

    #[test]
    fn full_scale_readings_do_not_overflow() {
        let mut ps = PotSmoother::<64>::new();
        for _ in 0..64 {
            ps.push(u16::MAX);
        }
        assert_eq!(ps.value(), u16::MAX);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut ps = PotSmoother::<4>::new();
        ps.push(1023);
        ps.clear();
        assert_eq!(ps.value(), 0);
    }
}
