use clap::Parser;
use ticked::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = ticked::tui::run(cli.data_dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
