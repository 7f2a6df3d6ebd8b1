use anyhow::*;
use std::io;

mod console;
mod error;
mod quiz;
mod settings;

use crate::console::StreamConsole;
use crate::quiz::definition::CsvQuestionSource;
use crate::quiz::runner::Runner;
use crate::quiz::Quiz;
use crate::settings::Settings;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = Settings::default();
    log::info!("Reading questions from {}", settings.questions_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = StreamConsole::new(stdin.lock(), stdout.lock());
    let quiz = Quiz::new(CsvQuestionSource::new(settings), console);

    let mut runner = Runner::new(quiz);
    runner.run()
}
