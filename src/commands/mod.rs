//! Command implementations
//!
//! Every command is an inherent method on [`Session`](crate::areas::session::Session),
//! grouped in two categories:
//!
//! - `plumbing`: Low-level commands that expose one building block (align, show)
//! - `porcelain`: User-facing comparison workflows (compare, watch, clear)

pub mod plumbing;
pub mod porcelain;
