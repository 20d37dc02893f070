use crate::artifacts::diff::operation::DiffOperation;
use crate::artifacts::diff::similarity::similarity;
use derive_new::new;

/// Similarity an added line must strictly exceed to count as a changed line.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// How removed lines are shared between added lines during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// A removed line stays available after a match, so it can mark several
    /// added lines as changed.
    #[default]
    Shared,
    /// A removed line is taken out of the pool by its first match.
    ConsumeOnMatch,
}

/// Rewrites `Added` operations as `Changed` when a removed line is similar
/// enough.
///
/// Every removed line, in order, forms the candidate pool. Each added line
/// picks the first candidate whose similarity is strictly above the threshold.
/// Operation count and order never change, and `Removed`/`Unchanged`
/// operations pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct ChangeClassifier {
    threshold: f64,
    pairing: PairingMode,
}

impl Default for ChangeClassifier {
    fn default() -> Self {
        ChangeClassifier::new(DEFAULT_SIMILARITY_THRESHOLD, PairingMode::default())
    }
}

impl ChangeClassifier {
    pub fn classify<T>(&self, operations: &[DiffOperation<T>]) -> Vec<DiffOperation<T>>
    where
        T: AsRef<str> + Clone,
    {
        let mut candidates = operations
            .iter()
            .filter_map(|operation| match operation {
                DiffOperation::Removed { line } => Some(line.as_ref()),
                _ => None,
            })
            .collect::<Vec<_>>();

        operations
            .iter()
            .map(|operation| match operation {
                DiffOperation::Added { line } if self.take_match(&mut candidates, line.as_ref()) => {
                    DiffOperation::Changed { line: line.clone() }
                }
                other => other.clone(),
            })
            .collect()
    }

    fn take_match(&self, candidates: &mut Vec<&str>, line: &str) -> bool {
        let Some(position) = candidates
            .iter()
            .position(|candidate| similarity(line, candidate) > self.threshold)
        else {
            return false;
        };

        if self.pairing == PairingMode::ConsumeOnMatch {
            candidates.remove(position);
        }

        true
    }
}
