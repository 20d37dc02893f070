use std::fmt::Display;

/// Category of a single diff operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    Changed,
}

impl LineKind {
    /// One-character marker used when printing an operation.
    pub fn marker(&self) -> char {
        match self {
            LineKind::Unchanged => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
            LineKind::Changed => '~',
        }
    }
}

/// A single line-level diff operation.
///
/// The aligner only ever produces `Unchanged`, `Added` and `Removed`;
/// `Changed` is introduced later by the classifier, which builds a new value
/// instead of retagging the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOperation<T> {
    Unchanged { line: T },
    Added { line: T },
    Removed { line: T },
    Changed { line: T },
}

impl<T> DiffOperation<T> {
    pub fn kind(&self) -> LineKind {
        match self {
            DiffOperation::Unchanged { .. } => LineKind::Unchanged,
            DiffOperation::Added { .. } => LineKind::Added,
            DiffOperation::Removed { .. } => LineKind::Removed,
            DiffOperation::Changed { .. } => LineKind::Changed,
        }
    }

    pub fn line(&self) -> &T {
        match self {
            DiffOperation::Unchanged { line }
            | DiffOperation::Added { line }
            | DiffOperation::Removed { line }
            | DiffOperation::Changed { line } => line,
        }
    }

    pub fn into_line(self) -> T {
        match self {
            DiffOperation::Unchanged { line }
            | DiffOperation::Added { line }
            | DiffOperation::Removed { line }
            | DiffOperation::Changed { line } => line,
        }
    }
}

impl<T> DiffOperation<T>
where
    T: AsRef<str>,
{
    pub fn as_string(&self) -> String {
        format!("{}{}", self.kind().marker(), self.line().as_ref())
    }
}

impl<T> Display for DiffOperation<T>
where
    T: AsRef<str>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// A line-sequence diff algorithm split into its table, path and script phases.
pub trait DiffAlgorithm<'d, T> {
    type Table;
    type EditPath;
    type EditScript;
    type Output;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
    fn format_diff(&self) -> Self::Output
    where
        T: AsRef<str>,
        Self::EditScript: AsRef<[DiffOperation<T>]>,
        Self::Output: From<String>,
    {
        let operations = self.diff();
        let formatted = operations
            .as_ref()
            .iter()
            .map(|operation| operation.as_string())
            .collect::<Vec<_>>()
            .join("\n");
        formatted.into()
    }
}
