use std::process::ExitCode;

fn main() -> ExitCode {
    match tilt_thrower::game::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
