//! Platform hosts
//!
//! A host owns the frame schedule and the input source:
//! - Browser: `requestAnimationFrame` plus DOM listeners (see `main.rs`)
//! - Headless: a fixed-rate simulated clock with scripted or autopilot input

pub mod headless;

pub use headless::{HeadlessOptions, RunOutcome, RunSummary, run, run_with};
