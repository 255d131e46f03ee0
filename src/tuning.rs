//! # Tuning
//!
//! Conversion from MIDI note numbers to sounding frequencies in Hertz.
//!
//! The pitch core never computes frequencies on its own, it asks a `Tuning` for them. The standard twelve tone equal
//! temperament is provided, but anything implementing `Tuning` can be swapped in, including a plain closure.

/// A mapping from MIDI note numbers to frequencies is represented here.
///
/// Implementations must be monotonic in the note number. Notes outside of the range the implementation can handle are
/// the caller's problem, no checking is done in the pitch core.
pub trait Tuning {
    /// `t.frequency_of(n)` is the frequency in Hertz of MIDI note number `n`
    fn frequency_of(&self, note: i32) -> f32;
}

impl<F> Tuning for F
where
    F: Fn(i32) -> f32,
{
    fn frequency_of(&self, note: i32) -> f32 {
        self(note)
    }
}

/// Twelve tone equal temperament is represented here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualTemperament {
    // frequency of the reference note A4 (MIDI note 69)
    reference_hz: f32,
}

impl EqualTemperament {
    /// `EqualTemperament::new(hz)` is a new equal temperament tuning with A4 tuned to `hz`
    ///
    /// Any reference is accepted, baroque A = 415Hz and a whole step down at 392Hz included. It must be finite and
    /// greater than zero.
    pub fn new(reference_hz: f32) -> Self {
        debug_assert!(
            reference_hz.is_finite() && 0.0 < reference_hz,
            "reference frequency must be finite and positive"
        );
        Self { reference_hz }
    }

    /// `et.reference_hz()` is the frequency A4 is tuned to
    pub fn reference_hz(&self) -> f32 {
        self.reference_hz
    }
}

impl Default for EqualTemperament {
    /// `EqualTemperament::default()` is concert pitch, A4 = 440Hz
    fn default() -> Self {
        Self::new(CONCERT_A_HZ)
    }
}

impl Tuning for EqualTemperament {
    /// # Examples
    ///
    /// ```
    /// # use supersaw_pitch::tuning::{EqualTemperament, Tuning};
    /// let et = EqualTemperament::default();
    /// assert_eq!(et.frequency_of(69), 440.0);
    /// assert_eq!(et.frequency_of(57), 220.0);
    /// ```
    fn frequency_of(&self, note: i32) -> f32 {
        self.reference_hz * libm::powf(2.0_f32, (note - A4_NOTE_NUM) as f32 / 12.0_f32)
    }
}

/// The MIDI note number of A4
const A4_NOTE_NUM: i32 = 69;

/// Concert pitch for A4
pub const CONCERT_A_HZ: f32 = 440.0_f32;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::*;

    #[test]
    fn a4_is_the_reference() {
        let et = EqualTemperament::default();
        assert!(is_almost(et.frequency_of(69), 440.0, 0.001));
    }

    #[test]
    fn octaves_double_and_halve() {
        let et = EqualTemperament::default();
        assert!(is_almost(et.frequency_of(81), 880.0, 0.01));
        assert!(is_almost(et.frequency_of(57), 220.0, 0.01));
        assert!(is_almost(et.frequency_of(45), 110.0, 0.01));
    }

    #[test]
    fn middle_c_is_about_261_hz() {
        let et = EqualTemperament::default();
        assert!(is_almost(et.frequency_of(60), 261.6256, 0.01));
    }

    #[test]
    fn is_monotonic() {
        let et = EqualTemperament::default();
        let mut last = et.frequency_of(-20);
        for n in -19..140 {
            let f = et.frequency_of(n);
            assert!(last < f);
            last = f;
        }
    }

    #[test]
    fn reference_is_taken_as_given() {
        assert_eq!(EqualTemperament::new(392.0).reference_hz(), 392.0);
        assert_eq!(EqualTemperament::new(415.0).reference_hz(), 415.0);
        assert_eq!(EqualTemperament::new(432.0).reference_hz(), 432.0);
    }

    #[test]
    fn low_reference_retunes_every_note() {
        let et = EqualTemperament::new(392.0);
        assert_eq!(et.frequency_of(69), 392.0);
        assert!(is_almost(et.frequency_of(57), 196.0, 0.001));
    }

    #[test]
    fn closures_are_tunings() {
        let one_hz_per_note = |n: i32| n as f32;
        assert_eq!(one_hz_per_note.frequency_of(42), 42.0);
    }
}
