//! # Pitch Voice
//!
//! Ties the glide controller to the rest of the synthesizer. Everything the pitch core needs from the outside world
//! (the note being played, the detune pot, the glide switch, and the time) comes in through a `ControlSurface`, and
//! the resulting oscillator frequencies are read back out for the oscillators.
//!
//! Each synthesizer voice owns its own `PitchVoice`, there is no shared state between voices.

use crate::{
    detune::DetuneRegime,
    glide_controller::{GlideController, PitchState},
    tuning::Tuning,
};

/// The inputs the pitch core reads once per control loop cycle are represented here
///
/// Implementors are responsible for keeping the readings in range, the pitch core does not check them.
pub trait ControlSurface {
    /// `cs.master_note()` is the MIDI note number oscillator 1 should play
    fn master_note(&self) -> i32;

    /// `cs.read_detune_pot()` is the current raw detune pot reading in `[0, 1023]`
    fn read_detune_pot(&mut self) -> u16;

    /// `cs.read_glide_switch()` is true iff glide is enabled
    ///
    /// The slide switch on the hardware is active-low, implementors reading the pin directly should pass the pin level
    /// through `active_low(..)`.
    fn read_glide_switch(&mut self) -> bool;

    /// `cs.current_time()` is the current time from a clock which never goes backwards, typically in milliseconds
    fn current_time(&self) -> u32;
}

/// `active_low(l)` is true iff pin level `l` is low, i.e. the switch is pressed
pub fn active_low(pin_level: bool) -> bool {
    !pin_level
}

/// The pitch section of one two-oscillator synthesizer voice is represented here
pub struct PitchVoice<T: Tuning> {
    glide: GlideController<T>,

    // only used to report regime changes
    last_regime: Option<DetuneRegime>,
}

impl<T: Tuning> PitchVoice<T> {
    /// `PitchVoice::new(t)` is a new pitch voice using tuning `t`
    pub fn new(tuning: T) -> Self {
        Self {
            glide: GlideController::new(tuning),
            last_regime: None,
        }
    }

    /// `pv.start(cs)` puts both oscillators straight onto the current targets from control surface `cs`
    ///
    /// Call this once before the first `tick` so the first note doesn't glide up from zero Hertz.
    pub fn start<C: ControlSurface>(&mut self, surface: &mut C) {
        let pot = surface.read_detune_pot();
        self.note_regime(pot);
        self.glide.snap_to(surface.master_note(), pot);
    }

    /// `pv.tick(cs)` reads all of the inputs from control surface `cs` and updates the oscillator frequencies
    ///
    /// Must be called once per control loop cycle. Never blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use supersaw_pitch::{tuning::EqualTemperament, voice::{ControlSurface, PitchVoice}};
    /// struct Panel {
    ///     millis: u32,
    /// }
    ///
    /// impl ControlSurface for Panel {
    ///     fn master_note(&self) -> i32 { 69 }
    ///     fn read_detune_pot(&mut self) -> u16 { 0 }
    ///     fn read_glide_switch(&mut self) -> bool { false }
    ///     fn current_time(&self) -> u32 { self.millis }
    /// }
    ///
    /// let mut pv = PitchVoice::new(EqualTemperament::default());
    /// pv.tick(&mut Panel { millis: 0 });
    ///
    /// assert_eq!(pv.oscillator1_frequency(), 440.0);
    /// assert_eq!(pv.oscillator2_frequency(), 220.0);
    /// ```
    pub fn tick<C: ControlSurface>(&mut self, surface: &mut C) {
        let pot = surface.read_detune_pot();
        let glide_enabled = surface.read_glide_switch();

        self.note_regime(pot);

        self.glide.update(
            surface.master_note(),
            pot,
            glide_enabled,
            surface.current_time(),
        );
    }

    /// `pv.oscillator1_frequency()` is the frequency oscillator 1 should be playing, in Hertz
    pub fn oscillator1_frequency(&self) -> f32 {
        self.glide.state().oscillator1_frequency()
    }

    /// `pv.oscillator2_frequency()` is the frequency oscillator 2 should be playing, in Hertz
    pub fn oscillator2_frequency(&self) -> f32 {
        self.glide.state().oscillator2_frequency()
    }

    /// `pv.state()` is the full pitch state of the voice
    pub fn state(&self) -> &PitchState {
        self.glide.state()
    }

    /// `pv.regime()` is the detune regime the pot was in at the last `tick` or `start`, if any
    pub fn regime(&self) -> Option<DetuneRegime> {
        self.last_regime
    }

    fn note_regime(&mut self, pot: u16) {
        let regime = DetuneRegime::from_pot(pot);
        if self.last_regime != Some(regime) {
            log::debug!("detune regime {:?} at pot {}", regime, pot);
            self.last_regime = Some(regime);
        }
    }
}
