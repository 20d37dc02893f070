//! Presentation of a finished comparison
//!
//! - `html`: escaped `<div>` markup with a stats banner
//! - `terminal`: marker column with optional colors
//!
//! Renderers only see the [`DiffReport`]; they never touch the diff engine.

pub mod html;
pub mod terminal;

use crate::artifacts::diff::summary::DiffReport;
use crate::artifacts::render::html::HtmlRenderer;
use crate::artifacts::render::terminal::TerminalRenderer;
use clap::ValueEnum;
use std::io::Write;

pub trait Render {
    fn render<T: AsRef<str>>(
        &self,
        report: &DiffReport<T>,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// New text with `+`/`~` markers and a stats line
    #[default]
    Text,
    /// New text as classed HTML lines
    Html,
    /// Stats line only
    Stats,
}

impl OutputFormat {
    pub fn render<T: AsRef<str>>(
        &self,
        report: &DiffReport<T>,
        color: bool,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        match self {
            OutputFormat::Text => TerminalRenderer::new(color).render(report, writer),
            OutputFormat::Html => HtmlRenderer.render(report, writer),
            OutputFormat::Stats => {
                writeln!(writer, "Diff Stats: {}", report.stats())?;
                Ok(())
            }
        }
    }
}
