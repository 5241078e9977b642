use std::io::{self, Write};
use std::process::ExitCode;
use wc_analogue::args::Args;
use wc_analogue::config::Config;

fn main() -> ExitCode {
    wc_analogue::logging::init();

    let args = Args::from_env();
    let config = Config::from_env();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = wc_analogue::app::run(&args, &config, &mut out)
        .and_then(|()| out.flush().map_err(Into::into));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
