use crate::date::CalendarDate;
use core::fmt::{self, Display};

/// The age at which registration is allowed.
pub const ADULT_AGE: u32 = 18;

/// Why a registration attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The name or birth date field was empty.
    MissingFields,
    /// The birth date could not be read as day, month, and year.
    MalformedDate,
    /// The person is younger than the minimum age at the reference date.
    Underage {
        /// The minimum age the person had to reach.
        minimum_age: u32,
    },
}

/// The outcome of validating a registration attempt.
///
/// Every outcome maps to exactly one user-facing [message](ValidationResult::message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    /// Registration is allowed.
    Valid,
    /// Registration is refused for the given reason.
    Invalid(Reason),
}

impl ValidationResult {
    /// Returns `true` for [ValidationResult::Valid].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The notification shown to the person filling in the form. Same as [Display].
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Invalid(Reason::MissingFields) => {
                f.write_str("Please fill in all fields")
            }
            ValidationResult::Invalid(Reason::MalformedDate) => f.write_str("Invalid birth date"),
            ValidationResult::Invalid(Reason::Underage { minimum_age }) => write!(
                f,
                "Registration is only allowed for people aged {minimum_age} or over"
            ),
            ValidationResult::Valid => f.write_str("Registration allowed!"),
        }
    }
}

impl From<Reason> for ValidationResult {
    fn from(reason: Reason) -> Self {
        ValidationResult::Invalid(reason)
    }
}

/// Decides whether a birth date belongs to someone old enough, measured at a reference date.
///
/// The reference date is always passed in, so validation never reads the clock.
///
/// # Examples
///
/// ```
/// use agegate::prelude::*;
///
/// let today = CalendarDate::new(20, 5, 2024);
/// let validator = AgeValidator::default();
/// assert!(validator.validate(&CalendarDate::new(20, 5, 2006), &today).is_valid());
/// assert_eq!(
///     ValidationResult::Invalid(Reason::Underage { minimum_age: 18 }),
///     validator.validate(&CalendarDate::new(21, 5, 2006), &today),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeValidator {
    minimum_age: u32,
}

impl Default for AgeValidator {
    fn default() -> Self {
        Self {
            minimum_age: ADULT_AGE,
        }
    }
}

impl AgeValidator {
    /// Returns a validator that requires `minimum_age` instead of [ADULT_AGE].
    pub fn with_minimum_age(minimum_age: u32) -> Self {
        Self {
            minimum_age,
        }
    }

    /// The minimum age (inclusive) this validator accepts.
    pub fn minimum_age(&self) -> u32 {
        self.minimum_age
    }

    /// Returns [ValidationResult::Valid] if the person born on `birth` is at least the minimum age
    /// on `reference`, otherwise `Invalid(Underage)` carrying the minimum age.
    ///
    /// Birth dates after the reference date are not rejected separately. Their age is negative,
    /// so they come out as underage.
    pub fn validate(&self, birth: &CalendarDate, reference: &CalendarDate) -> ValidationResult {
        if age_on(birth, reference) >= i64::from(self.minimum_age) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(Reason::Underage {
                minimum_age: self.minimum_age,
            })
        }
    }
}

/// Returns the number of whole years between `birth` and `reference`.
///
/// The age is the difference of the years, minus one if the birthday has not happened yet in the
/// reference year. A birthday falling on the reference date counts as happened. Dates are not
/// checked to be real days, and the result is negative for birth dates after the reference date.
pub fn age_on(birth: &CalendarDate, reference: &CalendarDate) -> i64 {
    let mut age = i64::from(reference.year()) - i64::from(birth.year());
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
