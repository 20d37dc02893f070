use crate::areas::session::Session;
use crate::artifacts::diff::lcs::LcsDiff;
use crate::artifacts::diff::operation::DiffAlgorithm;
use crate::artifacts::input::source::read_pair;
use crate::artifacts::input::text_pair::split_lines;
use std::path::Path;

/// Trimmed block split into lines; a blank block is an empty sequence.
fn lines_of(block: &str) -> Vec<&str> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        split_lines(trimmed)
    }
}

impl Session {
    /// Prints the raw alignment, one marked operation per line, without
    /// change classification.
    pub fn align(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let (old_block, new_block) = read_pair(old, new)?;
        let (old_lines, new_lines) = (lines_of(&old_block), lines_of(&new_block));

        let formatted = LcsDiff::new(&old_lines, &new_lines).format_diff();
        log::debug!(
            "aligned {} old and {} new lines",
            old_lines.len(),
            new_lines.len()
        );

        if !formatted.is_empty() {
            writeln!(self.writer(), "{}", formatted)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::lines_of;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("  \n\n", vec![])]
    #[case("\na\n\nb\n", vec!["a", "", "b"])]
    fn blocks_are_trimmed_before_splitting(#[case] block: &str, #[case] expected: Vec<&str>) {
        assert_eq!(lines_of(block), expected);
    }
}
