use crate::core::{NewQuestion, QuestionRecord};
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

/// Reads `text,pub_date,choices` rows and validates each one.
///
/// The first bad row aborts the whole import.
pub fn read_questions<R: Read>(reader: R) -> Result<Vec<NewQuestion>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (row, record) in csv_reader.deserialize::<QuestionRecord>().enumerate() {
        let record = record?;
        let question = NewQuestion::try_from(record).map_err(|e| {
            tracing::warn!("Rejected row {}: {}", row + 1, e);
            e
        })?;
        questions.push(question);
    }
    Ok(questions)
}

pub fn read_questions_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<NewQuestion>> {
    let file = std::fs::File::open(path)?;
    read_questions(file)
}
