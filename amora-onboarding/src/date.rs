use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Accepted layouts for a user-entered date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `DD/MM/YYYY`
    Dmy,
    /// `YYYY-MM-DD`
    Iso,
}

impl DateFormat {
    fn separator(self) -> char {
        match self {
            Self::Dmy => '/',
            Self::Iso => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date must be three numeric fields in the expected layout")]
    MalformedInput,
    #[error("day, month and year do not form a calendar date")]
    ImpossibleDate,
}

/// A plain calendar date: (year, month 1-12, day 1-31). Never an instant,
/// so no timezone is ever involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Parses a user-entered date string in the given layout.
    pub fn parse(raw: &str, format: DateFormat) -> Result<Self, DateError> {
        let fields: Vec<&str> = raw.trim().split(format.separator()).collect();
        if fields.len() != 3 {
            return Err(DateError::MalformedInput);
        }

        let mut numbers = [0u32; 3];
        for (number, field) in numbers.iter_mut().zip(&fields) {
            if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
                return Err(DateError::MalformedInput);
            }
            *number = field.parse().map_err(|_| DateError::MalformedInput)?;
        }

        let (day, month, year) = match format {
            DateFormat::Dmy => (numbers[0], numbers[1], numbers[2]),
            DateFormat::Iso => (numbers[2], numbers[1], numbers[0]),
        };
        let year = i32::try_from(year).map_err(|_| DateError::ImpossibleDate)?;

        // Construction succeeding is not enough: a constructor that
        // normalizes overflow would turn Feb 31 into Mar 3 without a
        // sound. The date must read back as the very triple that went in.
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::ImpossibleDate)?;
        if (date.year(), date.month(), date.day()) != (year, month, day) {
            return Err(DateError::ImpossibleDate);
        }

        Ok(Self { year, month, day })
    }

    /// Canonical zero-padded `YYYY-MM-DD`, the form the service expects.
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dmy() {
        assert_eq!(
            CalendarDate::parse("15/06/1995", DateFormat::Dmy),
            Ok(CalendarDate {
                year: 1995,
                month: 6,
                day: 15
            })
        );
        // Leap day.
        assert_eq!(
            CalendarDate::parse("29/02/2024", DateFormat::Dmy),
            Ok(CalendarDate {
                year: 2024,
                month: 2,
                day: 29
            })
        );
        // Surrounding whitespace is not the user's problem.
        assert_eq!(
            CalendarDate::parse("  01/12/2001 ", DateFormat::Dmy),
            Ok(CalendarDate {
                year: 2001,
                month: 12,
                day: 1
            })
        );
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(
            CalendarDate::parse("1995-06-15", DateFormat::Iso),
            Ok(CalendarDate {
                year: 1995,
                month: 6,
                day: 15
            })
        );
    }

    #[test]
    fn test_malformed_input() {
        for raw in [
            "",
            "15/06",
            "15/06/1995/2",
            "15-06-1995",
            "a/b/c",
            "15/jun/1995",
            "15//1995",
            "+5/06/1995",
            "-15/06/1995",
        ] {
            assert_eq!(
                CalendarDate::parse(raw, DateFormat::Dmy),
                Err(DateError::MalformedInput),
                "{raw:?} should be malformed"
            );
        }
        // DMY text fed to the ISO layout splits on the wrong separator.
        assert_eq!(
            CalendarDate::parse("15/06/1995", DateFormat::Iso),
            Err(DateError::MalformedInput)
        );
    }

    #[test]
    fn test_impossible_dates_never_roll_over() {
        for raw in ["31/02/2024", "29/02/2023", "31/04/2025", "00/01/2000", "01/13/2000"] {
            assert_eq!(
                CalendarDate::parse(raw, DateFormat::Dmy),
                Err(DateError::ImpossibleDate),
                "{raw:?} should be impossible"
            );
        }
    }

    #[test]
    fn test_iso_is_zero_padded() {
        let date = CalendarDate::parse("1/2/0195", DateFormat::Dmy).unwrap();
        assert_eq!(date.to_iso(), "0195-02-01");
    }

    #[test]
    fn test_iso_round_trip() {
        for raw in ["15/06/1995", "29/02/2024", "01/01/1900", "31/12/2099"] {
            let date = CalendarDate::parse(raw, DateFormat::Dmy).unwrap();
            assert_eq!(
                CalendarDate::parse(&date.to_iso(), DateFormat::Iso),
                Ok(date)
            );
        }
    }
}
