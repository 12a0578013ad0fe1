use formwork::{
    cli::{get_log_level_from_verbose, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let verbose = match &cli.command {
        Commands::Entity(args) => args.shared.verbose,
        Commands::Page(args) => args.shared.verbose,
    };
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(verbose))
        .init();

    if let Err(err) = run(cli) {
        default_error_handler(err);
    }
}
