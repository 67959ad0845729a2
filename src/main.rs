use std::io;
use std::process::ExitCode;

use clap::Parser;

use hyperion_lookup::cli::Args;
use hyperion_lookup::db::SqliteBackend;
use hyperion_lookup::executor::QueryExecutor;
use hyperion_lookup::logging::init_logging;
use hyperion_lookup::repl::Repl;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let backend = match SqliteBackend::open(&args.db) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error connecting to the database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let executor = QueryExecutor::new(Box::new(backend));
    let mut repl = Repl::new(executor, io::stdin().lock(), io::stdout().lock());

    match repl.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
