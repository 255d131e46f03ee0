//! # Glide Controller
//!
//! The glide controller keeps track of the frequencies of both oscillators and moves them towards their target
//! frequencies, either instantly or with a constant rate glide.
//!
//! When glide is enabled each glide step covers a fixed fraction of the remaining distance to the target, so the
//! pitch approaches the target exponentially, like the output of an RC lag circuit. Glide steps are only taken once
//! every `GLIDE_STEP_INTERVAL` time units no matter how often `update` is called, so the glide speed does not depend
//! on how fast the control loop runs.
//!
//! When glide is disabled both oscillators jump straight to their targets.
//!
//! Oscillator 1 always plays the master note. Oscillator 2 plays the master note detuned by the detune pot, see the
//! `detune` module.

use crate::{detune, tuning::Tuning};

/// The pitch state of one two-oscillator voice is represented here
///
/// Both frequencies are the actual sounding frequencies in Hertz, possibly somewhere in the middle of a glide.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PitchState {
    oscillator1_frequency: f32,
    oscillator2_frequency: f32,

    // no glide step is taken before this time, compared with wraparound so the clock may roll over
    next_update_time: u32,
}

impl PitchState {
    /// `ps.oscillator1_frequency()` is the current frequency of the master oscillator in Hertz
    pub fn oscillator1_frequency(&self) -> f32 {
        self.oscillator1_frequency
    }

    /// `ps.oscillator2_frequency()` is the current frequency of the detuned oscillator in Hertz
    pub fn oscillator2_frequency(&self) -> f32 {
        self.oscillator2_frequency
    }

    /// `ps.next_update_time()` is the earliest time at which the next glide step may be taken
    pub fn next_update_time(&self) -> u32 {
        self.next_update_time
    }
}

/// A glide controller for the two oscillators of a voice is represented here
pub struct GlideController<T: Tuning> {
    tuning: T,
    state: PitchState,
}

impl<T: Tuning> GlideController<T> {
    /// `GlideController::new(t)` is a new glide controller using tuning `t`, with both oscillators at zero Hertz
    pub fn new(tuning: T) -> Self {
        Self {
            tuning,
            state: PitchState::default(),
        }
    }

    /// `gc.update(n, p, g, now)` moves both oscillator frequencies towards their targets
    ///
    /// Expected to be called once per control loop cycle.
    ///
    /// # Arguments
    ///
    /// * `note` - the MIDI note number oscillator 1 should play
    ///
    /// * `pot` - the raw detune pot reading in `[0, 1023]`
    ///
    /// * `glide_enabled` - glide towards the targets if true, otherwise jump straight to them
    ///
    /// * `now` - the current time, from a clock which never goes backwards, typically in milliseconds
    ///
    /// # Examples
    ///
    /// ```
    /// # use supersaw_pitch::{glide_controller::GlideController, tuning::EqualTemperament};
    /// let mut gc = GlideController::new(EqualTemperament::default());
    ///
    /// // glide off, jump right to A4
    /// gc.update(69, 1023, false, 0);
    /// assert_eq!(gc.state().oscillator1_frequency(), 440.0);
    ///
    /// // glide on, one step covers 30% of the way to A5
    /// gc.update(81, 1023, true, 1);
    /// let f = gc.state().oscillator1_frequency();
    /// assert!(571.99 < f && f < 572.01);
    /// ```
    pub fn update(&mut self, note: i32, pot: u16, glide_enabled: bool, now: u32) {
        let oscillator2_target = detune::compute_detuned_frequency(&self.tuning, note, pot);
        let oscillator1_target = self.tuning.frequency_of(note);

        if glide_enabled {
            // rate gate, glide steps only happen every so often
            if self.gate_is_open(now) {
                self.state.oscillator1_frequency =
                    glide_step(self.state.oscillator1_frequency, oscillator1_target);
                self.state.oscillator2_frequency =
                    glide_step(self.state.oscillator2_frequency, oscillator2_target);
                self.state.next_update_time = now.wrapping_add(GLIDE_STEP_INTERVAL);

                log::trace!(
                    "glide step at {}: osc1 {} Hz, osc2 {} Hz",
                    now,
                    self.state.oscillator1_frequency,
                    self.state.oscillator2_frequency
                );
            }
        } else {
            self.snap(oscillator1_target, oscillator2_target);
        }
    }

    /// `gc.snap_to(n, p)` jumps both oscillators straight to their targets for note `n` and pot reading `p`
    ///
    /// The glide timing is left alone. Handy for starting a voice so the first note doesn't glide up from zero.
    pub fn snap_to(&mut self, note: i32, pot: u16) {
        let oscillator2_target = detune::compute_detuned_frequency(&self.tuning, note, pot);
        let oscillator1_target = self.tuning.frequency_of(note);
        self.snap(oscillator1_target, oscillator2_target);
    }

    /// `gc.state()` is the current pitch state
    pub fn state(&self) -> &PitchState {
        &self.state
    }

    /// `gc.gate_is_open(now)` is true iff a glide step may be taken at time `now`
    ///
    /// The gate is closed only while the next step is still due within one step interval. Comparing the wrapped
    /// distance keeps the gate working when the clock rolls over.
    fn gate_is_open(&self, now: u32) -> bool {
        let wait = self.state.next_update_time.wrapping_sub(now);
        wait == 0 || GLIDE_STEP_INTERVAL < wait
    }

    fn snap(&mut self, oscillator1_target: f32, oscillator2_target: f32) {
        if self.state.oscillator1_frequency != oscillator1_target
            || self.state.oscillator2_frequency != oscillator2_target
        {
            log::trace!(
                "snap: osc1 {} Hz, osc2 {} Hz",
                oscillator1_target,
                oscillator2_target
            );
        }
        self.state.oscillator1_frequency = oscillator1_target;
        self.state.oscillator2_frequency = oscillator2_target;
    }
}

/// `glide_step(f, t)` is frequency `f` moved `GLIDE_COEFFICIENT` of the way towards target `t`
fn glide_step(current: f32, target: f32) -> f32 {
    current + (target - current) * GLIDE_COEFFICIENT
}

/// The fraction of the remaining distance to the target covered by each glide step
pub const GLIDE_COEFFICIENT: f32 = 0.3_f32;

/// The minimum time between glide steps, in the same units as the clock passed to `update`
pub const GLIDE_STEP_INTERVAL: u32 = 10;
