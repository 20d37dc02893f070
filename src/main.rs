use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use minus::Pager;
use redline::areas::autosave::DEFAULT_DEBOUNCE;
use redline::areas::session::{Session, resolve_store_root};
use redline::artifacts::core::PagerWriter;
use redline::artifacts::diff::classifier::{
    ChangeClassifier, DEFAULT_SIMILARITY_THRESHOLD, PairingMode,
};
use redline::artifacts::render::OutputFormat;
use redline::commands::porcelain::compare::{CompareOptions, DEFAULT_MAX_TABLE_CELLS};
use redline::commands::porcelain::watch::WatchOptions;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "redline",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Line-level text comparison with change detection",
    long_about = "Compares an old and a new block of text line by line. \
    Lines are aligned with a longest-common-subsequence table, and added lines \
    that closely resemble a removed line are reported as changed. \
    The last compared texts are saved so they can be shown or compared again.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding the saved texts (defaults to $REDLINE_HOME, then the current directory)"
    )]
    store: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to color terminal output"
    )]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(&self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Args)]
struct DiffArgs {
    #[arg(
        long,
        default_value_t = DEFAULT_SIMILARITY_THRESHOLD,
        value_parser = parse_threshold,
        help = "Similarity above which an added line counts as changed"
    )]
    threshold: f64,
    #[arg(
        long,
        help = "Let each removed line justify at most one changed line"
    )]
    consume_on_match: bool,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_TABLE_CELLS,
        help = "Refuse inputs whose alignment table (old lines x new lines) exceeds this many cells (0 disables). \
        Line length is not counted; change detection scores each added line against each removed line, \
        so very long lines on both sides still take time"
    )]
    max_table_cells: usize,
}

impl DiffArgs {
    fn classifier(&self) -> ChangeClassifier {
        let pairing = if self.consume_on_match {
            PairingMode::ConsumeOnMatch
        } else {
            PairingMode::Shared
        };

        ChangeClassifier::new(self.threshold, pairing)
    }
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| format!("invalid threshold {raw:?}: {e}"))?;

    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0 and 1, got {value}"))
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Compare an old and a new text",
        long_about = "This command prints the new text with added (+) and changed (~) lines marked, \
        followed by the diff stats, and saves both texts. \
        Without --old and --new it compares the saved texts. Use - to read one side from stdin."
    )]
    Compare {
        #[arg(long, help = "File with the old text")]
        old: Option<PathBuf>,
        #[arg(long, help = "File with the new text")]
        new: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
        #[arg(long, help = "Show the output in a pager when stdout is a terminal")]
        pager: bool,
        #[command(flatten)]
        diff: DiffArgs,
    },
    #[command(
        name = "watch",
        about = "Re-compare two files whenever they change",
        long_about = "This command polls both files, prints a fresh comparison after every change \
        and auto-saves the texts once edits settle. Stop it with Ctrl-C."
    )]
    Watch {
        #[arg(long, help = "File with the old text")]
        old: PathBuf,
        #[arg(long, help = "File with the new text")]
        new: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
        #[arg(
            long,
            default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64,
            help = "Auto-save quiet period in milliseconds"
        )]
        debounce_ms: u64,
        #[arg(
            long,
            default_value_t = 1000,
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Polling interval in milliseconds"
        )]
        interval_ms: u64,
        #[arg(
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
            help = "Stop after this many polls"
        )]
        iterations: Option<usize>,
        #[command(flatten)]
        diff: DiffArgs,
    },
    #[command(
        name = "align",
        about = "Print the raw line alignment",
        long_about = "This command prints every aligned line prefixed with ' ', '+' or '-', \
        without detecting changed lines and without saving anything."
    )]
    Align {
        #[arg(long, help = "File with the old text")]
        old: PathBuf,
        #[arg(long, help = "File with the new text")]
        new: PathBuf,
    },
    #[command(name = "show", about = "Print the saved texts")]
    Show,
    #[command(name = "clear", about = "Forget the saved texts")]
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let color = cli.color.enabled();
    colored::control::set_override(color);

    let root = resolve_store_root(cli.store)?;

    match cli.command {
        Commands::Compare {
            old,
            new,
            format,
            pager,
            diff,
        } => {
            let opts = CompareOptions {
                old,
                new,
                classifier: diff.classifier(),
                max_table_cells: diff.max_table_cells,
                format,
                color,
            };

            if pager && std::io::stdout().is_terminal() {
                let pager = Pager::new();
                let session = Session::new(&root, Box::new(PagerWriter::new(pager.clone())))?;
                session.compare(&opts)?;
                PagerWriter::page(pager)?;
            } else {
                let session = Session::new(&root, Box::new(std::io::stdout()))?;
                session.compare(&opts)?;
            }
        }
        Commands::Watch {
            old,
            new,
            format,
            debounce_ms,
            interval_ms,
            iterations,
            diff,
        } => {
            let opts = WatchOptions {
                compare: CompareOptions {
                    old: Some(old),
                    new: Some(new),
                    classifier: diff.classifier(),
                    max_table_cells: diff.max_table_cells,
                    format,
                    color,
                },
                interval: Duration::from_millis(interval_ms),
                debounce: Duration::from_millis(debounce_ms),
                iterations,
            };

            let session = Session::new(&root, Box::new(std::io::stdout()))?;
            session.watch(&opts).await?;
        }
        Commands::Align { old, new } => {
            let session = Session::new(&root, Box::new(std::io::stdout()))?;
            session.align(&old, &new)?;
        }
        Commands::Show => {
            let session = Session::new(&root, Box::new(std::io::stdout()))?;
            session.show()?;
        }
        Commands::Clear => {
            let session = Session::new(&root, Box::new(std::io::stdout()))?;
            session.clear()?;
        }
    }

    Ok(())
}
