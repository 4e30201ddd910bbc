use std::process::ExitCode;

fn main() -> ExitCode {
    lexicon_manager::startup::launch()
}
