use std::process::ExitCode;

fn main() -> ExitCode {
    match jid_sort::bootstrap::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
