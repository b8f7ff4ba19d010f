//! Entry point for the `blind-navigator` command-line interface.
#![forbid(unsafe_code)]

use navigator_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on the terminal"
)]
fn main() {
    match navigator_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("blind-navigator: {err}");
            std::process::exit(1);
        }
    }
}
