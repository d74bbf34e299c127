mod cli;
mod layout_cmd;
mod pages_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Layout {
            ref file,
            ref format,
        } => layout_cmd::run(file, format),
        cli::Commands::Pages {
            ref dir,
            ref format,
        } => pages_cmd::run(dir, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
