/// Message shown when either side of a comparison is blank.
pub const MISSING_INPUT_MESSAGE: &str = "Please enter both old and new text.";

/// A validated pair of text blocks, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    old: String,
    new: String,
}

impl TextPair {
    pub fn try_parse(old: &str, new: &str) -> anyhow::Result<Self> {
        let (old, new) = (old.trim(), new.trim());

        if old.is_empty() || new.is_empty() {
            anyhow::bail!(MISSING_INPUT_MESSAGE);
        }

        Ok(Self {
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    pub fn old_text(&self) -> &str {
        &self.old
    }

    pub fn new_text(&self) -> &str {
        &self.new
    }

    pub fn old_lines(&self) -> Vec<&str> {
        split_lines(&self.old)
    }

    pub fn new_lines(&self) -> Vec<&str> {
        split_lines(&self.new)
    }

    /// Number of cells the alignment table needs for this pair.
    pub fn table_cells(&self) -> usize {
        let old = self.old.split('\n').count();
        let new = self.new.split('\n').count();
        old.saturating_mul(new)
    }
}

/// Splits a block on `'\n'`. A carriage return stays part of its line.
pub fn split_lines(block: &str) -> Vec<&str> {
    block.split('\n').collect()
}
