//! Comparison data structures and algorithms
//!
//! - `core`: Shared output plumbing (pager writer)
//! - `diff`: The line diff engine (alignment, classification, summary)
//! - `input`: Reading, validating and splitting the two text blocks
//! - `render`: HTML and terminal presentation of a comparison

pub mod core;
pub mod diff;
pub mod input;
pub mod render;
