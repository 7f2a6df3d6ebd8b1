use anyhow::*;

use self::definition::*;
use self::tracker::AnswerTracker;
use crate::console::Console;
use crate::error::QuizError;

pub mod definition;
pub mod runner;
mod tracker;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    pub correct: usize,
    pub total: usize,
}

pub struct Quiz<S: QuestionSource, C: Console> {
    source: S,
    console: C,
}

impl<S: QuestionSource, C: Console> Quiz<S, C> {
    pub fn new(source: S, console: C) -> Self {
        Quiz { source, console }
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn execute(&mut self) -> Result<Summary> {
        self.print_introduction()?;

        let questions = self.source.find_all()?;
        if questions.is_empty() {
            return Err(QuizError::validation("No questions found").into());
        }

        let mut correct = 0;
        for question in &questions {
            if self.ask(question)? {
                correct += 1;
            }
        }

        let summary = Summary {
            correct,
            total: questions.len(),
        };
        self.console.print_formatted_line(format_args!(
            "Test completed. Correct answers: {}/{}",
            summary.correct, summary.total
        ))?;
        log::info!("Quiz completed: {:?}", summary);
        Ok(summary)
    }

    fn print_introduction(&mut self) -> Result<()> {
        self.console.print_line("")?;
        self.console
            .print_formatted_line(format_args!("Please answer the questions below\n"))
    }

    /// Lists the options of a question, reads the user's choice and reports
    /// whether it was correct.
    fn ask(&mut self, question: &Question) -> Result<bool> {
        self.console.print_line(&question.text)?;

        let mut tracker = AnswerTracker::new();
        for (position, answer) in question.answers.iter().enumerate() {
            tracker.consider_answer(answer, position);
            self.console
                .print_formatted_line(format_args!("{}. {}", position + 1, answer.text))?;
        }

        let (correct_answer, correct_position) = match tracker.correct() {
            Some(correct) => correct,
            None => {
                return Err(QuizError::validation(format!(
                    "Correct answer not found for question: {}",
                    question.text
                ))
                .into())
            }
        };

        let chosen_position = self.read_answer_number(question.answers.len())? - 1;
        log::debug!(
            "Chose option {} for `{}`",
            chosen_position + 1,
            question.text
        );

        if chosen_position == correct_position {
            self.console.print_line("Correct!\n")?;
            Ok(true)
        } else {
            self.console.print_formatted_line(format_args!(
                "Wrong! The correct answer is: {}. {}\n",
                correct_position + 1,
                correct_answer.text
            ))?;
            Ok(false)
        }
    }

    fn read_answer_number(&mut self, option_count: usize) -> Result<usize> {
        loop {
            self.console.print_formatted_line(format_args!(
                "Choose the correct answer number from 1 to {}: ",
                option_count
            ))?;
            let number = self.console.read_int()?;
            if (1..=option_count as i64).contains(&number) {
                return Ok(number as usize);
            }
            log::debug!("Option {} is out of range", number);
        }
    }
}
