use crate::error::DateError;
use chrono::{Datelike, Local, NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The separator between day, month, and year in a birth date string.
pub const SEPARATOR: char = '-';

const COMPONENT_NAMES: [&str; 3] = ["day", "month", "year"];

/// A day, month, and year, with no timezone or time of day.
///
/// Values parsed from text are *not* checked to be real days. `31-02-2000` parses, because the
/// registration form never checked that either. Use [CalendarDate::validate_calendar] (or convert
/// into a [NaiveDate]) when a real day is required.
///
/// Field order makes the derived ordering compare year, then month, then day.
///
/// # Examples
///
/// ```
/// use agegate::prelude::*;
///
/// let date: CalendarDate = "05-03-2001".parse().unwrap();
/// assert_eq!((5, 3, 2001), (date.day(), date.month(), date.year()));
/// assert_eq!("05-03-2001", date.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: u32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Returns a new [CalendarDate] from its components. Nothing is range checked.
    pub const fn new(day: u32, month: u32, year: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses a `DD-MM-YYYY` string. See [CalendarDate::from_str].
    pub fn parse(text: &str) -> Result<Self, DateError> {
        text.parse()
    }

    /// Parses a reference date in ISO format (`YYYY-MM-DD`). Unlike birth dates, these must be
    /// real days.
    pub fn parse_iso(text: &str) -> Result<Self, DateError> {
        Self::try_from(NaiveDate::from_str(text)?)
    }

    /// Returns the current date in UTC at the time of this call.
    pub fn utc_today() -> Result<Self, DateError> {
        Self::try_from(Utc::now().date_naive())
    }

    /// Returns the current date in the system's local timezone at the time of this call.
    pub fn local_today() -> Result<Self, DateError> {
        Self::try_from(Local::now().date_naive())
    }

    /// The day of the month.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The month, `1` for January.
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The full year, e.g. `1990`.
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Returns `Ok(())` if this date names a day that exists on the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// - Returns a [DateError::NotACalendarDay] for dates such as `31-02-2000` or `01-13-2000`.
    pub fn validate_calendar(&self) -> Result<(), DateError> {
        NaiveDate::try_from(*self).map(|_| ())
    }
}

fn parse_component(component: &'static str, text: &str) -> Result<u32, DateError> {
    // u32::from_str would also take a leading `+`, which is not a digit
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidComponent {
            component,
            text: text.to_owned(),
        });
    }
    text.parse().map_err(|_| DateError::InvalidComponent {
        component,
        text: text.to_owned(),
    })
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses a date string into a [CalendarDate]. The string must be made of exactly three
    /// unsigned integers separated by `-`, in the order day, month, year. The form writes them as
    /// `DD-MM-YYYY`, but padding is not required.
    ///
    /// # Errors
    ///
    /// - Returns a [DateError::WrongPartCount] if there are not exactly three parts.
    /// - Returns a [DateError::InvalidComponent] if a part is empty, has non-digits, or overflows.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = text.split(SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::WrongPartCount {
                text: text.to_owned(),
                found: parts.len(),
            });
        };

        let [day_name, month_name, year_name] = COMPONENT_NAMES;
        Ok(Self::new(
            parse_component(day_name, day)?,
            parse_component(month_name, month)?,
            parse_component(year_name, year)?,
        ))
    }
}

impl Display for CalendarDate {
    /// Renders the date the way the form's date picker fills in the field: `DD-MM-YYYY`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u32::try_from(date.year())
            .map_err(|_| DateError::NegativeYear { year: date.year() })?;
        Ok(Self::new(date.day(), date.month(), year))
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        i32::try_from(date.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, date.month, date.day))
            .ok_or(DateError::NotACalendarDay {
                day: date.day,
                month: date.month,
                year: date.year,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rstest::*;

    #[rstest]
    #[case("20-05-2006", 20, 5, 2006)]
    #[case("01-01-2000", 1, 1, 2000)]
    #[case("1-1-2000", 1, 1, 2000)] // padding not required
    #[case("31-02-2000", 31, 2, 2000)] // no calendar check
    #[case("01-13-2000", 1, 13, 2000)]
    #[case("00-00-0000", 0, 0, 0)]
    fn test_parse_ok(#[case] text: &str, #[case] day: u32, #[case] month: u32, #[case] year: u32) {
        let date = CalendarDate::parse(text).unwrap();
        assert_eq!((day, month, year), (date.day(), date.month(), date.year()));
    }

    #[rstest]
    #[case("12/05/2000", 1)]
    #[case("12-05", 2)]
    #[case("", 1)]
    #[case("01-01-2000-1", 4)]
    #[case("-01-01-2000", 4)]
    #[case("01-01-2000-", 4)]
    fn test_parse_wrong_part_count(#[case] text: &str, #[case] found: usize) {
        assert_eq!(
            Err(DateError::WrongPartCount {
                text: text.to_owned(),
                found
            }),
            CalendarDate::parse(text)
        );
    }

    #[rstest]
    #[case("abc-05-2000", "day", "abc")]
    #[case("12--2000", "month", "")]
    #[case("12-05-20x0", "year", "20x0")]
    #[case("+1-05-2000", "day", "+1")]
    #[case(" 1-05-2000", "day", " 1")]
    #[case("12-05-99999999999", "year", "99999999999")] // overflows u32
    fn test_parse_invalid_component(
        #[case] text: &str,
        #[case] component: &'static str,
        #[case] bad: &str,
    ) {
        assert_eq!(
            Err(DateError::InvalidComponent {
                component,
                text: bad.to_owned()
            }),
            CalendarDate::parse(text)
        );
    }

    #[test]
    fn test_display_matches_form_text() {
        for text in ["20-05-2006", "01-01-2000", "31-12-1999"] {
            assert_eq!(text, CalendarDate::parse(text).unwrap().to_string());
        }
        // picker pads
        assert_eq!("05-03-0987", CalendarDate::new(5, 3, 987).to_string());
    }

    /// every zero-padded day, month, and a spread of years, real calendar days or not
    #[test]
    fn test_parse_display_round_trip() {
        for (day, month, year) in iproduct!(1..=31u32, 1..=12u32, [1u32, 999, 1990, 2006, 9999]) {
            let text = format!("{day:02}-{month:02}-{year:04}");
            let date = CalendarDate::parse(&text).unwrap();
            assert_eq!((day, month, year), (date.day(), date.month(), date.year()));
            assert_eq!(text, date.to_string());
        }
    }

    #[test]
    fn test_from_naive_date() {
        let date = CalendarDate::try_from(NaiveDate::from_ymd_opt(2001, 3, 5).unwrap()).unwrap();
        assert_eq!("05-03-2001", date.to_string());

        let negative = CalendarDate::try_from(NaiveDate::from_ymd_opt(-1, 3, 5).unwrap());
        assert_eq!(Err(DateError::NegativeYear { year: -1 }), negative);
    }

    #[rstest]
    #[case(CalendarDate::new(29, 2, 2024), true)] // leap year
    #[case(CalendarDate::new(29, 2, 2023), false)]
    #[case(CalendarDate::new(31, 2, 2000), false)]
    #[case(CalendarDate::new(1, 13, 2000), false)]
    #[case(CalendarDate::new(0, 1, 2000), false)]
    #[case(CalendarDate::new(31, 12, 1999), true)]
    fn test_validate_calendar(#[case] date: CalendarDate, #[case] passes: bool) {
        let result = date.validate_calendar();
        if passes {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(DateError::NotACalendarDay { .. })));
        }
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(
            Ok(CalendarDate::new(20, 5, 2024)),
            CalendarDate::parse_iso("2024-05-20")
        );
        assert!(matches!(
            CalendarDate::parse_iso("2024-02-30"),
            Err(DateError::UnparseableReferenceDate(_))
        ));
        assert!(matches!(
            CalendarDate::parse_iso("20-05-2024"),
            Err(DateError::UnparseableReferenceDate(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let earlier = CalendarDate::new(31, 12, 2005);
        let later = CalendarDate::new(1, 1, 2006);
        assert!(earlier < later);
        assert!(CalendarDate::new(2, 5, 2006) > CalendarDate::new(30, 4, 2006));
    }
}
