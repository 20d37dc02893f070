use crate::areas::session::Session;
use crate::areas::store::StoreKey;
use crate::artifacts::diff::classifier::ChangeClassifier;
use crate::artifacts::diff::compare;
use crate::artifacts::diff::summary::DiffStats;
use crate::artifacts::input::source::read_pair;
use crate::artifacts::input::text_pair::TextPair;
use crate::artifacts::render::OutputFormat;
use std::path::{Path, PathBuf};

/// Largest alignment table (old lines x new lines) compared by default.
///
/// Line length is not part of the count; change detection still scores
/// every added line against every removed line.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 25_000_000;

#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Old text file; `None` together with `new` means "use the saved texts"
    pub old: Option<PathBuf>,
    pub new: Option<PathBuf>,
    pub classifier: ChangeClassifier,
    /// 0 disables the size guard
    pub max_table_cells: usize,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            old: None,
            new: None,
            classifier: ChangeClassifier::default(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            format: OutputFormat::default(),
            color: false,
        }
    }
}

impl Session {
    /// Compares the two texts, prints the result and saves both trimmed texts.
    pub fn compare(&self, opts: &CompareOptions) -> anyhow::Result<DiffStats> {
        let (old_raw, new_raw) = self.load_texts(opts.old.as_deref(), opts.new.as_deref())?;
        let pair = TextPair::try_parse(&old_raw, &new_raw)?;

        let stats = self.show_comparison(&pair, opts)?;
        self.store().set_pair(pair.old_text(), pair.new_text())?;

        Ok(stats)
    }

    fn load_texts(
        &self,
        old: Option<&Path>,
        new: Option<&Path>,
    ) -> anyhow::Result<(String, String)> {
        match (old, new) {
            (Some(old), Some(new)) => read_pair(old, new),
            (None, None) => {
                log::debug!("no input files given, comparing saved texts");
                Ok((
                    self.store().get(StoreKey::Old)?.unwrap_or_default(),
                    self.store().get(StoreKey::New)?.unwrap_or_default(),
                ))
            }
            _ => anyhow::bail!("use both --old and --new, or omit both to compare the saved texts"),
        }
    }

    pub(crate) fn show_comparison(
        &self,
        pair: &TextPair,
        opts: &CompareOptions,
    ) -> anyhow::Result<DiffStats> {
        let cells = pair.table_cells();
        if opts.max_table_cells != 0 && cells > opts.max_table_cells {
            anyhow::bail!(
                "inputs too large to compare: {} table cells needed, limit is {} (see --max-table-cells)",
                cells,
                opts.max_table_cells
            );
        }

        let (old_lines, new_lines) = (pair.old_lines(), pair.new_lines());
        let report = compare(&old_lines, &new_lines, &opts.classifier);
        log::debug!(
            "compared {} old and {} new lines: {:?}",
            old_lines.len(),
            new_lines.len(),
            report.stats()
        );

        let mut writer = self.writer();
        opts.format.render(&report, opts.color, &mut *writer)?;

        Ok(*report.stats())
    }
}
