//! Pancake Harness: the I/O layer around the search core.
//!
//! The harness turns user input into a [`pancake_kernel::PlateStack`],
//! runs the search with wall-clock timing, and renders the result.
//! It implements no search logic itself.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod prompt;
pub mod random;
pub mod render;
pub mod runner;
