//! Line diff engine
//!
//! The comparison runs as a pipeline of pure stages:
//!
//! - `lcs`: LCS alignment into unchanged/added/removed operations
//! - `classifier`: re-tags added lines as changed when a removed line is similar
//! - `summary`: counts plus the new-text view handed to renderers
//!
//! `similarity` holds the edit-distance metric the classifier scores with, and
//! `operation` the operation type shared by every stage.

pub mod classifier;
pub mod lcs;
pub mod operation;
pub mod similarity;
pub mod summary;

use crate::artifacts::diff::classifier::ChangeClassifier;
use crate::artifacts::diff::lcs::align;
use crate::artifacts::diff::summary::DiffReport;

/// Aligns, classifies and summarizes two line sequences.
pub fn compare<T>(old: &[T], new: &[T], classifier: &ChangeClassifier) -> DiffReport<T>
where
    T: AsRef<str> + Eq + Clone,
{
    let aligned = align(old, new);
    DiffReport::from_operations(classifier.classify(&aligned))
}
