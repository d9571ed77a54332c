use crate::error::Result;
use crate::structs::WeatherRecord;
use csv::ReaderBuilder;
use log::debug;
use std::{fs::File, path::Path};

/// Reads daily weather readings from a CSV file.
///
/// The first row is a header and is skipped. Each remaining non-empty row
/// must have exactly three fields: an ISO-8601 date string and two
/// integer Fahrenheit temperatures (low, high). Blank rows are skipped;
/// rows with a different field count or non-integer temperatures are
/// errors. File order is preserved.
///
/// # Errors
///
/// Returns `SummaryError::Io` if the file cannot be opened and
/// `SummaryError::Csv` if a row is malformed or a field fails to parse.
pub fn load_readings(path: &Path) -> Result<Vec<WeatherRecord>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: WeatherRecord = row?;
        records.push(record);
    }

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
