use anyhow::*;
use std::fs::File;

use crate::error::QuizError;
use crate::settings::Settings;

pub mod question;

pub use question::{Answer, Question, RawQuestion};


pub trait QuestionSource {
    fn find_all(&self) -> Result<Vec<Question>>;
}

#[derive(Debug)]
pub struct CsvQuestionSource {
    settings: Settings,
}

impl CsvQuestionSource {
    pub fn new(settings: Settings) -> Self {
        CsvQuestionSource { settings }
    }

    fn read_questions(&self) -> Result<Vec<Question>> {
        let file = File::open(&self.settings.questions_path).context("File not found")?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.settings.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut questions = Vec::new();
        // The first line is a header and is never inspected.
        for record in csv_reader.records().skip(1) {
            let record = record?;
            if record.len() != 2 {
                bail!(
                    "Expected 2 fields on line {}, found {}",
                    record.position().map_or(0, |p| p.line()),
                    record.len()
                );
            }
            let raw_question: RawQuestion = record.deserialize(None)?;
            questions.push(Question::from_raw(raw_question, &self.settings)?);
        }
        Ok(questions)
    }
}

impl QuestionSource for CsvQuestionSource {
    fn find_all(&self) -> Result<Vec<Question>> {
        let questions = self
            .read_questions()
            .map_err(|e| QuizError::read(&self.settings.questions_path, e))?;
        log::info!(
            "Loaded {} questions from {}",
            questions.len(),
            self.settings.questions_path.display()
        );
        Ok(questions)
    }
}
