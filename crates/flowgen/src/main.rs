//! `electron-flowgen` binary entry point.

fn main() {
    std::process::exit(flowgen_cli::run_cli(std::env::args().collect()));
}
