use vupr_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = cli::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("vupr error: {:#}", err);
        std::process::exit(1);
    }
}
