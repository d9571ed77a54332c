use crate::error::{Result, SummaryError};
use crate::stats::calculate_mean;
use crate::structs::WeatherRecord;
use crate::transform::{convert_date, convert_f_to_c, format_temperature};

/// Converts a Fahrenheit reading and renders it with one decimal place.
fn display_celsius(fahrenheit: f64) -> String {
    format_temperature(format!("{:.1}", convert_f_to_c(fahrenheit)))
}

/// Builds the period overview report.
///
/// The report holds the record count, the lowest low and highest high with
/// the dates they occur on, and the average low and high. The dates are
/// attributed by the first occurrence of the raw Fahrenheit extreme in the
/// series, independent of the mirrored tie positions `stats::find_min` and
/// `stats::find_max` may report.
///
/// # Errors
///
/// Returns `SummaryError::Data` for an empty series and
/// `SummaryError::Date` if a record's date does not parse.
pub fn generate_summary(records: &[WeatherRecord]) -> Result<String> {
    if records.is_empty() {
        return Err(SummaryError::Data(
            "cannot summarise an empty series".to_string(),
        ));
    }

    let lows: Vec<f64> = records.iter().map(|r| f64::from(r.low_fahrenheit)).collect();
    let highs: Vec<f64> = records
        .iter()
        .map(|r| f64::from(r.high_fahrenheit))
        .collect();

    let mut min_pos = 0;
    for (i, &low) in lows.iter().enumerate() {
        if low < lows[min_pos] {
            min_pos = i;
        }
    }
    let mut max_pos = 0;
    for (i, &high) in highs.iter().enumerate() {
        if high > highs[max_pos] {
            max_pos = i;
        }
    }

    let mut result = String::new();
    result.push_str(&format!("{} Day Overview\n", records.len()));
    result.push_str(&format!(
        "  The lowest temperature will be {}, and will occur on {}.\n",
        display_celsius(lows[min_pos]),
        convert_date(&records[min_pos].date)?,
    ));
    result.push_str(&format!(
        "  The highest temperature will be {}, and will occur on {}.\n",
        display_celsius(highs[max_pos]),
        convert_date(&records[max_pos].date)?,
    ));
    result.push_str(&format!(
        "  The average low this week is {}.\n",
        display_celsius(calculate_mean(&lows)?),
    ));
    result.push_str(&format!(
        "  The average high this week is {}.\n",
        display_celsius(calculate_mean(&highs)?),
    ));
    Ok(result)
}

/// Builds the day-by-day breakdown, one block per record in series order.
///
/// # Errors
///
/// Returns `SummaryError::Date` if a record's date does not parse.
pub fn generate_daily_summary(records: &[WeatherRecord]) -> Result<String> {
    let mut result = String::new();
    for record in records {
        result.push_str(&format!("---- {} ----\n", convert_date(&record.date)?));
        result.push_str(&format!(
            "  Minimum Temperature: {}\n",
            display_celsius(f64::from(record.low_fahrenheit)),
        ));
        result.push_str(&format!(
            "  Maximum Temperature: {}\n",
            display_celsius(f64::from(record.high_fahrenheit)),
        ));
        result.push('\n');
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, low: i32, high: i32) -> WeatherRecord {
        WeatherRecord {
            date: date.to_string(),
            low_fahrenheit: low,
            high_fahrenheit: high,
        }
    }

    fn five_day_series() -> Vec<WeatherRecord> {
        vec![
            record("2021-07-02T07:00:00+08:00", 49, 67),
            record("2021-07-03T07:00:00+08:00", 57, 68),
            record("2021-07-04T07:00:00+08:00", 56, 62),
            record("2021-07-05T07:00:00+08:00", 55, 61),
            record("2021-07-06T07:00:00+08:00", 53, 62),
        ]
    }

    #[test]
    fn overview_of_five_day_series() {
        let expected = "5 Day Overview\n\
            \x20 The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n\
            \x20 The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n\
            \x20 The average low this week is 12.2°C.\n\
            \x20 The average high this week is 17.8°C.\n";
        assert_eq!(generate_summary(&five_day_series()).unwrap(), expected);
    }

    #[test]
    fn overview_with_negative_temperatures() {
        let series = vec![
            record("2020-06-19T07:00:00+08:00", -47, -46),
            record("2020-06-20T07:00:00+08:00", -51, 67),
            record("2020-06-21T07:00:00+08:00", 58, 72),
            record("2020-06-22T07:00:00+08:00", 59, 71),
            record("2020-06-23T07:00:00+08:00", -52, 71),
            record("2020-06-24T07:00:00+08:00", 52, 67),
            record("2020-06-25T07:00:00+08:00", -48, 66),
            record("2020-06-26T07:00:00+08:00", 53, 66),
        ];
        let expected = "8 Day Overview\n\
            \x20 The lowest temperature will be -46.7°C, and will occur on Tuesday 23 June 2020.\n\
            \x20 The highest temperature will be 22.2°C, and will occur on Sunday 21 June 2020.\n\
            \x20 The average low this week is -16.1°C.\n\
            \x20 The average high this week is 12.4°C.\n";
        assert_eq!(generate_summary(&series).unwrap(), expected);
    }

    #[test]
    fn overview_attributes_tied_extremes_to_first_occurrence() {
        let series = vec![
            record("2021-07-02T07:00:00+08:00", 49, 60),
            record("2021-07-03T07:00:00+08:00", 49, 60),
            record("2021-07-04T07:00:00+08:00", 53, 58),
        ];
        let report = generate_summary(&series).unwrap();
        assert!(report.contains("will occur on Friday 02 July 2021"));
        assert!(!report.contains("Saturday 03 July 2021"));
    }

    #[test]
    fn overview_of_empty_series_is_an_error() {
        assert!(generate_summary(&[]).is_err());
    }

    #[test]
    fn daily_breakdown_content() {
        let series = vec![record("2021-07-06T07:00:00+08:00", 53, 62)];
        let expected = "---- Tuesday 06 July 2021 ----\n\
            \x20 Minimum Temperature: 11.7°C\n\
            \x20 Maximum Temperature: 16.7°C\n\n";
        assert_eq!(generate_daily_summary(&series).unwrap(), expected);
    }

    #[test]
    fn daily_breakdown_emits_one_block_per_record_in_order() {
        let report = generate_daily_summary(&five_day_series()).unwrap();
        let blocks: Vec<&str> = report.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].starts_with("---- Friday 02 July 2021 ----"));
        assert!(blocks[4].starts_with("---- Tuesday 06 July 2021 ----"));
        for block in blocks {
            assert_eq!(block.lines().count(), 3);
            assert!(block.contains("  Minimum Temperature: "));
            assert!(block.contains("  Maximum Temperature: "));
        }
    }

    #[test]
    fn daily_breakdown_of_empty_series_is_empty() {
        assert_eq!(generate_daily_summary(&[]).unwrap(), "");
    }
}
