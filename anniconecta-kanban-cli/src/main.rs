use anniconecta_kanban_cli::{
    cli::Cli,
    exit_codes::EXIT_ERROR,
    logging::configure_logging,
    run::run,
};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}
