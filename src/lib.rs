pub mod error;
pub mod load;
pub mod stats;
pub mod structs;
pub mod summary;
pub mod transform;

// Re-export public API
pub use error::{Result, SummaryError};
pub use load::load_readings;
pub use stats::{calculate_mean, find_max, find_min};
pub use structs::{Extremum, SimpleLogger, WeatherRecord};
pub use summary::{generate_daily_summary, generate_summary};
pub use transform::{convert_date, convert_f_to_c, format_temperature};
