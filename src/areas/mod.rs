//! Stateful collaborators around the diff engine
//!
//! - `autosave`: Debounced background writer for in-progress texts
//! - `session`: Store root resolution and the object commands run against
//! - `store`: File-backed storage for the last old/new text pair

pub mod autosave;
pub mod session;
pub mod store;
