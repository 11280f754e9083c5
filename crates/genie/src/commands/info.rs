use clap::Args;
use genie_drs::DrsArchive;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct InfoArgs {
    /// An input DRS resource set
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.archive)
            .into_diagnostic()
            .context(format!("path: {}", &self.archive.display()))?;
        let drs = DrsArchive::new(&mut f)?;

        let header = drs.header();
        println!("notice:      {}", header.copyright());
        println!("version:     {}", header.version);
        println!("tribe:       {}", header.tribe());
        println!("tables:      {}", header.table_count);
        println!("data offset: {}", header.data_offset);
        println!("resources:   {}", drs.len());

        for (i, table) in drs.tables().iter().enumerate() {
            println!(
                "table {} [{}]: flag {:#04x}, {} entries at offset {}",
                i,
                table.extension(),
                table.flag,
                table.file_count,
                table.offset
            );
        }

        Ok(())
    }
}
