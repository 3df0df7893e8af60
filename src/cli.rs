use clap::Parser;
use std::path::PathBuf;

/// GeoPeek - a terminal wizard for Swiss geoportal lookups
#[derive(Parser)]
#[command(name = "geopeek")]
#[command(about = "Look up geoportal information for geographic assets from the terminal")]
#[command(version)]
pub struct Cli {
    /// Path to an asset catalog CSV to use instead of the bundled one.
    ///
    /// The file must carry the `ID,Latitude,Longitude,Name,Type` header.
    /// Malformed rows are skipped with a warning.
    #[arg(long, value_name = "FILE")]
    pub assets: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
