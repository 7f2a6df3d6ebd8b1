use anyhow::*;

use crate::console::Console;
use crate::error::QuizError;
use crate::quiz::definition::QuestionSource;
use crate::quiz::Quiz;


/// Runs a quiz and turns load or format failures into messages for the user.
/// Any other failure is returned to the caller.
pub struct Runner<S: QuestionSource, C: Console> {
    quiz: Quiz<S, C>,
}

impl<S: QuestionSource, C: Console> Runner<S, C> {
    pub fn new(quiz: Quiz<S, C>) -> Self {
        Runner { quiz }
    }

    pub fn run(&mut self) -> Result<()> {
        if let Err(error) = self.quiz.execute() {
            let message = match error.downcast_ref::<QuizError>() {
                Some(QuizError::Read { .. }) => "Unable to load questions.",
                Some(QuizError::Validation(_)) => "Incorrect questions format.",
                None => return Err(error),
            };
            log::warn!("{:#}", error);
            self.quiz.console_mut().print_line(message)?;
        }
        Ok(())
    }
}
