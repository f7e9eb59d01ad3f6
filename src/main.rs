use clap::Parser;

mod cli;

fn main() {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.quiet);
    cli::run(cli);
}
