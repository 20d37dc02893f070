use crate::areas::autosave::AutoSaver;
use crate::areas::session::Session;
use crate::artifacts::input::source::{is_stdin, read_pair};
use crate::artifacts::input::text_pair::TextPair;
use crate::commands::porcelain::compare::CompareOptions;
use chrono::Local;
use colored::Colorize;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub compare: CompareOptions,
    /// How often both files are re-read
    pub interval: Duration,
    /// Quiet period before an edit is auto-saved
    pub debounce: Duration,
    /// Stop after this many polls instead of waiting for Ctrl-C. The first
    /// poll always runs, so `Some(0)` behaves like `Some(1)`.
    pub iterations: Option<usize>,
}

impl Session {
    /// Re-compares the two files whenever either changes and auto-saves the
    /// raw texts in the background.
    ///
    /// Returns the number of auto-save writes made.
    pub async fn watch(&self, opts: &WatchOptions) -> anyhow::Result<usize> {
        let (Some(old), Some(new)) = (opts.compare.old.as_deref(), opts.compare.new.as_deref())
        else {
            anyhow::bail!("watch needs both --old and --new files");
        };
        if is_stdin(old) || is_stdin(new) {
            anyhow::bail!("watch cannot read from stdin");
        }

        let saver = AutoSaver::spawn(self.store().clone(), opts.debounce);
        let mut ticker = tokio::time::interval(opts.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut last_seen: Option<(String, String)> = None;
        let mut polls = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = &mut ctrl_c => {
                    log::debug!("interrupted, stopping watch");
                    break;
                }
            }
            polls += 1;

            match read_pair(old, new) {
                Ok(current) if last_seen.as_ref() != Some(&current) => {
                    saver.submit(current.0.as_str(), current.1.as_str())?;
                    self.report_change(&current.0, &current.1, &opts.compare)?;
                    last_seen = Some(current);
                }
                Ok(_) => {}
                Err(err) => log::warn!("skipping poll: {:#}", err),
            }

            if opts.iterations.is_some_and(|limit| polls >= limit) {
                break;
            }
        }

        let writes = saver.shutdown().await?;
        log::debug!("watch finished after {} polls, {} auto-saves", polls, writes);

        Ok(writes)
    }

    fn report_change(&self, old: &str, new: &str, opts: &CompareOptions) -> anyhow::Result<()> {
        let header = format!("[{}]", Local::now().format("%H:%M:%S"));
        if opts.color {
            writeln!(self.writer(), "{}", header.cyan())?;
        } else {
            writeln!(self.writer(), "{}", header)?;
        }

        let shown = TextPair::try_parse(old, new).and_then(|pair| self.show_comparison(&pair, opts));
        if let Err(err) = shown {
            writeln!(self.writer(), "{:#}", err)?;
        }

        Ok(())
    }
}
