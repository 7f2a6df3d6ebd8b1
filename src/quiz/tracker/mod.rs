use crate::quiz::definition::Answer;


/// Remembers the correct option of a question while its options are listed.
/// A later correct option replaces an earlier one.
#[derive(Debug, Default)]
pub struct AnswerTracker<'a> {
    correct: Option<(&'a Answer, usize)>,
}

impl<'a> AnswerTracker<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn consider_answer(&mut self, answer: &'a Answer, position: usize) {
        if answer.is_correct {
            self.correct = Some((answer, position));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.correct.is_none()
    }

    pub fn correct(&self) -> Option<(&'a Answer, usize)> {
        self.correct
    }

    pub fn correct_answer(&self) -> Option<&'a Answer> {
        self.correct.map(|(answer, _)| answer)
    }

    pub fn correct_answer_position(&self) -> Option<usize> {
        self.correct.map(|(_, position)| position)
    }
}
