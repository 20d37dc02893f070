//! Shared output plumbing.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter that feeds rendered output into a `minus` pager.
///
/// The pager only accepts `&str`, so non UTF-8 bytes are reported as
/// `InvalidData`. Call [`PagerWriter::page`] once all output is written.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    /// Hands the collected output to the pager and blocks until it is closed.
    pub fn page(pager: Pager) -> anyhow::Result<()> {
        minus::page_all(pager).map_err(|e| anyhow::anyhow!("pager failed: {e}"))
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
