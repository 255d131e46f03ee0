#![no_std]
#![doc = include_str!("../README.md")]

pub mod detune;
pub mod glide_controller;
pub mod pot_smoother;
pub mod tuning;
pub mod voice;

#[cfg(test)]
mod utils;
