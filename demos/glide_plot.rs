//! Plot out both oscillators gliding between a few notes
//!
//! Look in /images/ for the resulting plot.
//!
//! Requires plotters lib: https://docs.rs/plotters/latest/plotters/. Tested on an Ubuntu machine.
//!
//! Set `RUST_LOG=trace` to see every glide step.

use plotters::prelude::*;
use supersaw_pitch::{
    pot_smoother::PotSmoother,
    tuning::EqualTemperament,
    voice::{ControlSurface, PitchVoice},
};

/// A pretend front panel, playing a little melody with the glide switch held down
///
/// The detune pot is noisy, readings are averaged before they reach the pitch core.
struct MockPanel {
    millis: u32,
    pot: PotSmoother<16>,
}

impl MockPanel {
    // (start time in ms, MIDI note)
    const MELODY: [(u32, i32); 4] = [(0, 45), (250, 57), (1_000, 52), (2_000, 64)];
}

impl ControlSurface for MockPanel {
    fn master_note(&self) -> i32 {
        Self::MELODY
            .iter()
            .rev()
            .find(|(t, _)| *t <= self.millis)
            .map(|(_, n)| *n)
            .unwrap_or(Self::MELODY[0].1)
    }

    fn read_detune_pot(&mut self) -> u16 {
        // stepped regime, a fifth below, with a few counts of ADC noise that would otherwise cross into the fourth
        let noise = [0, 30, -10, 28, -5, 31, 4, -12];
        let raw = 400 + noise[self.millis as usize % noise.len()];
        self.pot.push(raw as u16);
        self.pot.value()
    }

    fn read_glide_switch(&mut self) -> bool {
        // glide off for the last note so it snaps
        self.millis < 2_000
    }

    fn current_time(&self) -> u32 {
        self.millis
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    const NUM_MILLIS_TO_PLOT: u32 = 2_500;

    let mut panel = MockPanel {
        millis: 0,
        pot: PotSmoother::new(),
    };
    let mut voice = PitchVoice::new(EqualTemperament::default());
    voice.start(&mut panel);

    // run the control loop once per millisecond, the glide only steps every 10ms
    let mut osc1 = Vec::new();
    let mut osc2 = Vec::new();
    for ms in 0..NUM_MILLIS_TO_PLOT {
        panel.millis = ms;
        voice.tick(&mut panel);

        let t = ms as f32 / 1_000.0;
        osc1.push((t, voice.oscillator1_frequency()));
        osc2.push((t, voice.oscillator2_frequency()));
    }

    std::fs::create_dir_all("images")?;
    let root =
        BitMapBackend::new("images/glide_example_plot_0.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Glide Controller", ("Arial", 20).into_font())
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..NUM_MILLIS_TO_PLOT as f32 / 1_000.0, 0f32..400f32)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Frequency (Hz)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(osc1, BLUE))?
        .label("Oscillator 1")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(osc2, RED))?
        .label("Oscillator 2")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
