use crate::artifacts::diff::summary::{DiffReport, RenderKind};
use crate::artifacts::render::Render;
use colored::Colorize;
use derive_new::new;
use std::io::Write;

/// Renders the new-text view with a marker column, colored when enabled.
#[derive(Debug, Clone, Copy, new)]
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    fn marker(kind: RenderKind) -> char {
        match kind {
            RenderKind::Added => '+',
            RenderKind::Changed => '~',
            RenderKind::Unchanged => ' ',
        }
    }

    fn paint(&self, kind: RenderKind, text: String) -> String {
        if !self.color {
            return text;
        }

        match kind {
            RenderKind::Added => text.green().to_string(),
            RenderKind::Changed => text.yellow().to_string(),
            RenderKind::Unchanged => text,
        }
    }
}

impl Render for TerminalRenderer {
    fn render<T: AsRef<str>>(
        &self,
        report: &DiffReport<T>,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        for line in report.lines() {
            let text = format!("{} {}", Self::marker(line.kind()), line.line().as_ref());
            writeln!(writer, "{}", self.paint(line.kind(), text))?;
        }

        let stats = format!("Diff Stats: {}", report.stats());
        if self.color {
            writeln!(writer, "{}", stats.bold())?;
        } else {
            writeln!(writer, "{}", stats)?;
        }

        Ok(())
    }
}
