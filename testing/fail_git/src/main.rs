use std::env;
use std::process::ExitCode;

// Usage: fail_git <code> [message...]
// Writes the message to stderr and exits with the code.
fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let code = args.next()
        .and_then(|code| code.parse::<u8>().ok())
        .unwrap_or(255);
    let message = args.collect::<Vec<_>>().join(" ");
    if !message.is_empty() {
        eprintln!("{message}");
    }
    ExitCode::from(code)
}
