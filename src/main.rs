mod cli;
mod common;

fn main() -> std::process::ExitCode {
    cli::run()
}
