use crate::areas::session::Session;
use crate::areas::store::StoreKey;

impl Session {
    /// Prints the saved texts and when they were saved.
    pub fn show(&self) -> anyhow::Result<()> {
        let old = self.store().get(StoreKey::Old)?;
        let new = self.store().get(StoreKey::New)?;

        if old.is_none() && new.is_none() {
            writeln!(self.writer(), "No saved texts")?;
            return Ok(());
        }

        if let Some(saved_at) = self.store().saved_at()? {
            writeln!(
                self.writer(),
                "saved at: {}",
                saved_at.format("%Y-%m-%d %H:%M:%S %z")
            )?;
        }

        let mut writer = self.writer();
        writeln!(writer, "--- old")?;
        writeln!(writer, "{}", old.unwrap_or_default())?;
        writeln!(writer, "+++ new")?;
        writeln!(writer, "{}", new.unwrap_or_default())?;

        Ok(())
    }
}
