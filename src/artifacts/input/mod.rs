//! Input acquisition
//!
//! - `source`: reading raw text blocks from files or stdin
//! - `text_pair`: trimming, validation and line splitting

pub mod source;
pub mod text_pair;
