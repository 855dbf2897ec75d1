//! Pancake Kernel: the plate stack value type and everything that can be
//! computed from a single stack without searching.
//!
//! # API Surface
//!
//! - [`stack::PlateStack`] -- validated stack, flips, gap heuristic
//! - [`replay::verify_solution`] -- replay a flip sequence against a root stack
//! - [`hash::stack_fingerprint`] -- domain-separated content hash of a stack
//!
//! # Module Dependency Direction
//!
//! `error` ← `stack` ← `replay`, `hash`. One-way only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hash;
pub mod replay;
pub mod stack;

pub use error::{FlipError, StackError};
pub use stack::PlateStack;
