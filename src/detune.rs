//! # Detune
//!
//! Oscillator 2 is detuned relative to oscillator 1 by an amount set with a front panel pot. The pot sweeps through
//! three regimes:
//!
//! - Near the bottom of its travel oscillator 2 sits an octave below oscillator 1, going slightly flat as the pot is
//!   turned up.
//! - Through the middle of its travel oscillator 2 steps through a handful of musical intervals below oscillator 1.
//! - Near the top of its travel oscillator 2 is continuously detuned around the same note as oscillator 1, for the
//!   thick "supersaw" sound.
//!
//! The pot reading is the raw 10 bit ADC value in `[0, 1023]`.

use crate::tuning::Tuning;

/// The intervals below the master note that oscillator 2 can be stepped to, in semitones
///
/// Minor third, major third, fourth, fifth, and a major sixth
pub const DETUNE_OFFSET_SEMITONES: [i32; 5] = [3, 4, 5, 7, 9];

/// The largest valid raw pot reading
pub const MAX_POT_VALUE: u16 = 1023;

/// Pot readings below this are in the sub-octave regime
pub const SUB_OCTAVE_BOUNDARY: u16 = 200;

/// Pot readings above this are in the wide detune regime
pub const WIDE_BOUNDARY: u16 = 800;

/// The three detune regimes of the pot are represented here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetuneRegime {
    /// One octave down, going slightly flat as the pot is turned up
    SubOctave,
    /// Stepped musical intervals below the master note
    Stepped,
    /// Continuous detune around the master note
    Wide,
}

impl DetuneRegime {
    /// `DetuneRegime::from_pot(p)` is the regime that raw pot reading `p` falls into
    ///
    /// Both boundaries belong to the stepped regime.
    pub fn from_pot(pot: u16) -> Self {
        if WIDE_BOUNDARY < pot {
            DetuneRegime::Wide
        } else if pot < SUB_OCTAVE_BOUNDARY {
            DetuneRegime::SubOctave
        } else {
            DetuneRegime::Stepped
        }
    }
}

/// `compute_detuned_frequency(t, n, p)` is the target frequency for oscillator 2 given master note `n` and raw detune
/// pot reading `p`, using tuning `t`
///
/// # Arguments
///
/// * `tuning` - converts note numbers into frequencies
///
/// * `note` - the MIDI note number oscillator 1 is playing
///
/// * `pot` - the raw detune pot reading in `[0, 1023]`, values outside of this range are a caller error
///
/// # Examples
///
/// ```
/// # use supersaw_pitch::{detune, tuning::EqualTemperament};
/// let et = EqualTemperament::default();
///
/// // pot all the way down, one octave below A4
/// assert_eq!(detune::compute_detuned_frequency(&et, 69, 0), 220.0);
///
/// // top of the stepped range, a minor third below A4
/// let f = detune::compute_detuned_frequency(&et, 69, 799);
/// assert!(369.9 < f && f < 370.0);
/// ```
pub fn compute_detuned_frequency<T: Tuning + ?Sized>(tuning: &T, note: i32, pot: u16) -> f32 {
    debug_assert!(pot <= MAX_POT_VALUE, "detune pot reading out of range");

    match DetuneRegime::from_pot(pot) {
        DetuneRegime::Wide => tuning.frequency_of(note) * (pot as f32 + 9_000.0_f32) / 10_000.0_f32,
        DetuneRegime::SubOctave => {
            tuning.frequency_of(note - 12) * (20_000.0_f32 - pot as f32) / 20_000.0_f32
        }
        DetuneRegime::Stepped => tuning.frequency_of(note - stepped_offset(pot)),
    }
}

/// `stepped_offset(p)` is the number of semitones below the master note for pot reading `p` in the stepped regime
pub fn stepped_offset(pot: u16) -> i32 {
    DETUNE_OFFSET_SEMITONES[stepped_index(pot)]
}

/// `stepped_index(p)` is the index into `DETUNE_OFFSET_SEMITONES` for pot reading `p` in the stepped regime
///
/// The stepped range `[200, 800]` maps linearly and in reverse onto the indices `[4, 0]`, rounded to the nearest
/// index with halves rounding towards index zero. The two end indices get half-width zones:
///
/// | pot          | index |
/// |--------------|-------|
/// | `[200, 274]` | 4     |
/// | `[275, 424]` | 3     |
/// | `[425, 574]` | 2     |
/// | `[575, 724]` | 1     |
/// | `[725, 800]` | 0     |
///
/// Readings outside of the stepped range are clamped to the nearest end of it.
pub fn stepped_index(pot: u16) -> usize {
    const SPAN: u32 = (WIDE_BOUNDARY - SUB_OCTAVE_BOUNDARY) as u32;
    const MAX_IDX: u32 = (DETUNE_OFFSET_SEMITONES.len() - 1) as u32;

    let dist_from_bottom = (pot.saturating_sub(SUB_OCTAVE_BOUNDARY) as u32).min(SPAN);

    // integer rounding, can't reach past MAX_IDX because dist_from_bottom is at most SPAN
    let steps_up = (dist_from_bottom * MAX_IDX + SPAN / 2) / SPAN;

    (MAX_IDX - steps_up) as usize
}
