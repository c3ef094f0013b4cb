use std::io;
use std::process::ExitCode;

use euclid_gcd::logger;

fn main() -> ExitCode {
    logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match euclid_gcd::run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
