//! Plot out the oscillator 2 detune ratio across the whole travel of the detune pot
//!
//! Look in /images/ for the resulting plot.
//!
//! Requires plotters lib: https://docs.rs/plotters/latest/plotters/. Tested on an Ubuntu machine.

use plotters::prelude::*;
use supersaw_pitch::{
    detune,
    tuning::{EqualTemperament, Tuning},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let et = EqualTemperament::default();
    let note = 69;
    let master_hz = et.frequency_of(note);

    std::fs::create_dir_all("images")?;
    let root =
        BitMapBackend::new("images/detune_example_plot_0.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Oscillator 2 detune", ("Arial", 20).into_font())
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..detune::MAX_POT_VALUE as f32, 0.4f32..1.1f32)?;

    chart
        .configure_mesh()
        .x_desc("Detune pot reading")
        .y_desc("Osc 2 / Osc 1 frequency ratio")
        .draw()?;

    chart.draw_series(LineSeries::new(
        (0..=detune::MAX_POT_VALUE).map(|pot| {
            let ratio = detune::compute_detuned_frequency(&et, note, pot) / master_hz;
            (pot as f32, ratio)
        }),
        RED,
    ))?;

    root.present()?;

    log::info!("wrote images/detune_example_plot_0.png");

    Ok(())
}
