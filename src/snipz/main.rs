//! The binary only invokes `cli::run()` and turns an error into exit status 1.
//! Everything user-facing lives in `cli/`; see the library docs for the layers
//! underneath.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
