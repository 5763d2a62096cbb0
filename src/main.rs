use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use log::{error, LevelFilter};

use elemsort::{run, PROMPT, TRIALS};

fn read_input() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    let mut raw = String::new();
    io::stdin().lock().read_line(&mut raw)?;
    Ok(raw)
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Error)
        .parse_default_env()
        .init();

    let result = read_input().and_then(|raw| run(&raw, TRIALS, &mut io::stdout().lock()));
    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}
