use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Path value that stands for standard input.
pub const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Reads a whole text block from a file, or from stdin for `-`.
pub fn read_block(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut block = String::new();
        std::io::stdin()
            .read_to_string(&mut block)
            .context("failed to read text from stdin")?;
        return Ok(block);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Reads both sides; at most one of them may come from stdin.
pub fn read_pair(old: &Path, new: &Path) -> anyhow::Result<(String, String)> {
    if is_stdin(old) && is_stdin(new) {
        anyhow::bail!("only one of the old and new texts can be read from stdin");
    }

    Ok((read_block(old)?, read_block(new)?))
}
