//! Error handling utilities

use tracing::error;

/// Report a fatal error and exit.
///
/// Unknown groups and queries exit with 2, everything else with 1. With
/// `verbose >= 1` the full context chain is printed.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::Error;

    error!("Fatal error: {:#}", error);
    eprintln!("Error: {error:#}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    let exit_code = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(1, Error::exit_code);

    std::process::exit(exit_code)
}
