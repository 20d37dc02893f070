use crate::artifacts::diff::operation::DiffOperation;
use derive_new::new;
use std::fmt::Display;

/// Counts of added, changed and removed lines; unchanged lines are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStats {
    pub added: usize,
    pub changed: usize,
    pub removed: usize,
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Added: {} | Changed: {} | Removed: {}",
            self.added, self.changed, self.removed
        )
    }
}

/// Category of a line shown in the new-text view. Removed lines never reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    Unchanged,
    Added,
    Changed,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RenderedLine<T> {
    kind: RenderKind,
    line: T,
}

impl<T> RenderedLine<T> {
    pub fn kind(&self) -> RenderKind {
        self.kind
    }

    pub fn line(&self) -> &T {
        &self.line
    }
}

/// Final result of a comparison: the counts plus the new-text view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport<T> {
    stats: DiffStats,
    lines: Vec<RenderedLine<T>>,
}

impl<T> DiffReport<T> {
    pub fn from_operations(operations: Vec<DiffOperation<T>>) -> Self {
        let mut stats = DiffStats::default();
        let mut lines = Vec::with_capacity(operations.len());

        for operation in operations {
            match operation {
                DiffOperation::Removed { .. } => stats.removed += 1,
                DiffOperation::Added { line } => {
                    stats.added += 1;
                    lines.push(RenderedLine::new(RenderKind::Added, line));
                }
                DiffOperation::Changed { line } => {
                    stats.changed += 1;
                    lines.push(RenderedLine::new(RenderKind::Changed, line));
                }
                DiffOperation::Unchanged { line } => {
                    lines.push(RenderedLine::new(RenderKind::Unchanged, line));
                }
            }
        }

        DiffReport { stats, lines }
    }

    pub fn stats(&self) -> &DiffStats {
        &self.stats
    }

    pub fn lines(&self) -> &[RenderedLine<T>] {
        &self.lines
    }
}
