use mastermind::cli::usage;
use mastermind::logging::init_logging;
use mastermind::{CliInterface, CodeEngine, game_loop, parse_args};
use std::io;
use std::process;

fn main() {
    let program = std::env::args_os()
        .next()
        .map_or_else(|| "mastermind".to_string(), |arg| arg.to_string_lossy().into_owned());

    let options = match parse_args(std::env::args_os()) {
        Ok(options) => options,
        Err(mastermind::UsageError::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", usage(&program));
            process::exit(err.exit_code());
        }
    };

    init_logging(options.verbose);

    let mut engine = CodeEngine::new(options.config);
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), io::stdout().lock());

    if let Err(e) = game_loop(&mut engine, &mut interface) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
