use std::{io, process};

use lcg::{render, run_all, transcripts};

fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let report = run_all(&transcripts());

    let stdout = io::stdout();
    if let Err(e) = render(&report, &mut stdout.lock()) {
        eprintln!("{e}");
        process::exit(2);
    }

    process::exit(report.exit_code());
}
