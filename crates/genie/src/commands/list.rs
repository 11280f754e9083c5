use clap::Args;
use genie_drs::DrsArchive;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct ListArgs {
    /// An input DRS resource set
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.archive)
            .into_diagnostic()
            .context(format!("path: {}", &self.archive.display()))?;
        let mut drs = DrsArchive::new(&mut f)?;

        let mut entries = drs.entry_buffer();
        for i in 0..drs.table_count() {
            let table = drs.tables()[i];
            println!(
                "table {} [{}]: {} entries at offset {}",
                i,
                table.extension().cyan(),
                table.file_count,
                table.offset
            );

            drs.read_entries(i, &mut entries)?;
            for entry in &entries {
                println!(
                    "  {:>10}  {:>10}  {}",
                    entry.offset,
                    entry.size,
                    table.file_name(entry.id).green()
                );
            }
        }

        Ok(())
    }
}
