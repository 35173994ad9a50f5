use cli::cli::Cli;
use structopt::StructOpt;

fn main() {
    if let Err(err) = Cli::from_args().execute() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
