use crate::artifacts::diff::summary::{DiffReport, DiffStats, RenderKind, RenderedLine};
use crate::artifacts::render::Render;
use std::io::Write;

/// Escapes the characters that would otherwise open or break markup.
pub fn escape_html(line: &str) -> String {
    line.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn css_class(kind: RenderKind) -> &'static str {
    match kind {
        RenderKind::Added => "added",
        RenderKind::Changed => "changed",
        RenderKind::Unchanged => "",
    }
}

/// Renders the new-text view as one `<div>` per line, classed by category.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn stats_banner(stats: &DiffStats) -> String {
        format!("<strong>Diff Stats:</strong> {}", stats)
    }

    pub fn line_markup<T: AsRef<str>>(line: &RenderedLine<T>) -> String {
        format!(
            "<div class=\"{}\">{}</div>",
            css_class(line.kind()),
            escape_html(line.line().as_ref())
        )
    }
}

impl Render for HtmlRenderer {
    fn render<T: AsRef<str>>(
        &self,
        report: &DiffReport<T>,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        writeln!(
            writer,
            "<div class=\"diff-stats\">{}</div>",
            Self::stats_banner(report.stats())
        )?;
        for line in report.lines() {
            writeln!(writer, "{}", Self::line_markup(line))?;
        }

        Ok(())
    }
}
