//! Lookback windows the caller can request.

use chrono::{Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Calendar lookback for the historical series, counted back from the
/// request date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    Y1,
    Y5,
    Y10,
}

impl Timeframe {
    pub fn years(self) -> u32 {
        match self {
            Self::Y1 => 1,
            Self::Y5 => 5,
            Self::Y10 => 10,
        }
    }

    /// Window start: `end` minus the timeframe's calendar years.
    pub fn start_from(self, end: NaiveDate) -> NaiveDate {
        end.checked_sub_months(Months::new(self.years() * 12))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1Y" => Ok(Self::Y1),
            "5Y" => Ok(Self::Y5),
            "10Y" => Ok(Self::Y10),
            other => Err(format!("unknown timeframe '{other}', expected 1Y, 5Y, or 10Y")),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Y1 => "1Y",
            Self::Y5 => "5Y",
            Self::Y10 => "10Y",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("1Y".parse::<Timeframe>().unwrap(), Timeframe::Y1);
        assert_eq!("5y".parse::<Timeframe>().unwrap(), Timeframe::Y5);
        assert_eq!("10Y".parse::<Timeframe>().unwrap(), Timeframe::Y10);
        assert!("2Y".parse::<Timeframe>().is_err());
    }

    #[test]
    fn start_is_calendar_years_back() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(
            Timeframe::Y1.start_from(end),
            NaiveDate::from_ymd_opt(2023, 6, 3).unwrap()
        );
        assert_eq!(
            Timeframe::Y10.start_from(end),
            NaiveDate::from_ymd_opt(2014, 6, 3).unwrap()
        );
    }

    #[test]
    fn leap_day_clamps_to_month_end() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            Timeframe::Y1.start_from(end),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Timeframe::Y5.to_string(), "5Y");
        assert_eq!("5Y".parse::<Timeframe>().unwrap(), Timeframe::Y5);
    }
}
