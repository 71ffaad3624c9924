use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "td",
    about = concat!("[x] ticked v", env!("CARGO_PKG_VERSION"), " - your todo list, one keypress away"),
    version
)]
pub struct Cli {
    /// Use a different data directory (default: $TICKED_DIR or ~/.ticked)
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<PathBuf>,
}
