//! Microbench CLI entry point.

fn main() {
    if let Err(e) = microbench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
