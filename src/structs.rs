use log::{Log, Metadata, Record as LogRecord};
use serde::Deserialize;

/// Simple logger implementation
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &LogRecord) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// One day of weather readings, as stored in the input CSV
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherRecord {
    pub date: String,
    pub low_fahrenheit: i32,
    pub high_fahrenheit: i32,
}

/// An extreme value together with its reported position in the sequence.
///
/// The value is rounded to one decimal place. When the extreme occurs
/// exactly twice, `index` is a mirrored position rather than either
/// occurrence's true position (see `stats::find_min` / `stats::find_max`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}
