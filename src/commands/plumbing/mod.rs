//! Plumbing commands (low-level building blocks)
//!
//! ## Commands
//!
//! - `align`: Print the raw line alignment without change classification
//! - `show`: Print the saved texts and their save time

pub mod align;
pub mod show;
