/// Errors that can occur when turning text into a [`CalendarDate`](crate::CalendarDate) or a
/// reference date.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    /// The date text did not split into exactly day, month, and year.
    #[error("Date `{text}` should have exactly 3 `-`-separated parts (`DD-MM-YYYY`), found {found}")]
    WrongPartCount {
        /// The text that was parsed.
        text: String,
        /// How many parts were found.
        found: usize,
    },

    /// One of the parts was not an unsigned integer.
    #[error("The {component} part `{text}` should be an unsigned integer")]
    InvalidComponent {
        /// The name of the component (`day`, `month` or `year`).
        component: &'static str,
        /// The offending text.
        text: String,
    },

    /// The components parsed, but they do not name a day that exists.
    #[error("Day ({day}), month ({month}), and year ({year}) cannot be made into a valid date")]
    NotACalendarDay {
        /// The day of the month.
        day: u32,
        /// The month.
        month: u32,
        /// The year.
        year: u32,
    },

    /// A structured date lies before year 0 and has no `DD-MM-YYYY` rendering.
    #[error("Year `{year}` should not be negative")]
    NegativeYear {
        /// The offending year.
        year: i32,
    },

    /// A reference date (`YYYY-MM-DD`) could not be parsed.
    #[error("Unparseable reference date: {0}")]
    UnparseableReferenceDate(#[from] chrono::ParseError),
}
