pub mod extract;
pub mod info;
pub mod list;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Extract a DRS resource set into a directory
    Extract(extract::ExtractArgs),
    /// List the resources contained in a DRS resource set
    List(list::ListArgs),
    /// Show header and table information for a DRS resource set
    Info(info::InfoArgs),
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Extract(extract) => extract.handle(),
            Commands::List(list) => list.handle(),
            Commands::Info(info) => info.handle(),
        }
    }
}
