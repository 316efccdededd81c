//! Platform abstraction layer
//!
//! Handles browser/native differences for input: pointer and touch
//! coordinates are translated into court space here and queued for the
//! frame driver.

pub mod input;

pub use input::{InputEvent, InputQueue, pointer_to_court_y};
