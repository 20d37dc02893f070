use crate::areas::session::Session;

impl Session {
    /// Forgets the saved texts. Returns whether anything was removed.
    pub fn clear(&self) -> anyhow::Result<bool> {
        let removed = self.store().remove_all()?;

        if removed {
            writeln!(self.writer(), "Cleared saved texts")?;
        } else {
            writeln!(self.writer(), "No saved texts")?;
        }

        Ok(removed)
    }
}
