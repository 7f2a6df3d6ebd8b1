use anyhow::*;
use serde::Deserialize;

use crate::settings::Settings;


fn bool_from_string(flag: &str) -> Result<bool> {
    match flag.trim().to_lowercase().as_ref() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        other => Err(anyhow!(
            "Invalid correctness flag `{}`, expected true, false or blank",
            other
        )),
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct RawQuestion {
    pub text: String,
    pub answers: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

impl Answer {
    pub fn new<S: Into<String>>(text: S, is_correct: bool) -> Self {
        Answer {
            text: text.into(),
            is_correct,
        }
    }

    fn parse(raw_answer: &str, settings: &Settings) -> Result<Self> {
        let (text, flag) = raw_answer
            .rsplit_once(settings.correctness_separator)
            .with_context(|| {
                format!(
                    "Answer `{}` has no `{}` correctness marker",
                    raw_answer, settings.correctness_separator
                )
            })?;
        let text = text.trim();
        if text.is_empty() {
            return Err(anyhow!("Answer `{}` has no text", raw_answer));
        }
        Ok(Answer::new(text, bool_from_string(flag)?))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new<S: Into<String>>(text: S, answers: Vec<Answer>) -> Self {
        Question {
            text: text.into(),
            answers,
        }
    }

    pub fn from_raw(raw_question: RawQuestion, settings: &Settings) -> Result<Self> {
        let answers = raw_question
            .answers
            .split(settings.answer_separator)
            .map(|raw_answer| Answer::parse(raw_answer, settings))
            .collect::<Result<Vec<Answer>>>()
            .with_context(|| format!("Invalid answers for question `{}`", raw_question.text))?;
        Ok(Question::new(raw_question.text.trim(), answers))
    }
}
