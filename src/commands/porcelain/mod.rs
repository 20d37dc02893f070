//! Porcelain commands (user-facing workflows)
//!
//! ## Commands
//!
//! - `compare`: Compare two texts, print the annotated new text and save both
//! - `watch`: Re-compare two files on every change, auto-saving in the background
//! - `clear`: Forget the saved texts

pub mod clear;
pub mod compare;
pub mod watch;
