use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub questions_path: PathBuf,
    pub delimiter: u8,
    pub answer_separator: char,
    pub correctness_separator: char,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            questions_path: PathBuf::from("questions.csv"),
            delimiter: b';',
            answer_separator: '|',
            correctness_separator: '%',
        }
    }
}
