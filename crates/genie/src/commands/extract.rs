use clap::Args;
use genie_drs::DrsArchive;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, io::Write, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct ExtractArgs {
    /// An input DRS resource set
    #[arg(value_name = "ARCHIVE")]
    archive: PathBuf,

    /// A target directory, created if missing
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    directory: PathBuf,

    /// Allow overwriting existing output files
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.archive)
            .into_diagnostic()
            .context(format!("path: {}", &self.archive.display()))?;
        let mut drs = DrsArchive::new(&mut f)?;

        std::fs::create_dir_all(&self.directory)
            .into_diagnostic()
            .context(format!("creating {}", &self.directory.display()))?;

        // One entry buffer sized for the largest table and one data buffer,
        // reused across every resource. The run aborts on the first failed
        // resource; output written before that point stays on disk.
        let mut entries = drs.entry_buffer();
        let mut data = Vec::new();
        for i in 0..drs.table_count() {
            let table = drs.tables()[i];
            drs.read_entries(i, &mut entries)?;

            for entry in &entries {
                let p = self.directory.join(table.file_name(entry.id));
                info!("writing {}", p.display());

                drs.read_entry_data(entry, &mut data)
                    .context(format!("extracting resource {}", entry.id))?;

                let mut out = if !self.overwrite {
                    File::create_new(&p)
                        .into_diagnostic()
                        .context(format!("creating {}", &p.display()))?
                } else {
                    File::create(&p)
                        .into_diagnostic()
                        .context(format!("creating {}", &p.display()))?
                };

                out.write_all(&data)
                    .into_diagnostic()
                    .context(format!("extracting resource {}", entry.id))?;
            }
        }

        Ok(())
    }
}
