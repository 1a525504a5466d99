use crate::{
    date::CalendarDate,
    validator::{AgeValidator, Reason, ValidationResult},
};

/// How strictly a parsed birth date is checked against the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarCheck {
    /// Any three unsigned integers are accepted, so `31-02-2000` is a birth date.
    #[default]
    Lenient,
    /// The birth date must be a day that exists. Otherwise it is a malformed date.
    Strict,
}

/// The raw fields of the registration form, as typed or picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    /// The person's name. Only checked for presence.
    pub name: String,
    /// The birth date as written into the form, `DD-MM-YYYY`.
    pub birth_date: String,
    /// The selected sex. Carried along, never validated.
    pub sex: Option<String>,
}

impl Registration {
    /// Returns a new [Registration] with no sex selected.
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            sex: None,
        }
    }

    /// Sets the sex selection.
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }
}

/// Checks a [Registration] end to end: fields present, birth date readable, person old enough.
///
/// Every failure becomes a [ValidationResult]; nothing here returns an error.
///
/// # Examples
///
/// ```
/// use agegate::prelude::*;
///
/// let gate = FormGate::default();
/// let today = CalendarDate::new(20, 5, 2024);
///
/// let result = gate.submit(&Registration::new("Ana", "20-05-2006"), &today);
/// assert_eq!("Registration allowed!", result.message());
///
/// let result = gate.submit(&Registration::new("  ", "20-05-2006"), &today);
/// assert_eq!(ValidationResult::Invalid(Reason::MissingFields), result);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FormGate {
    validator: AgeValidator,
    calendar_check: CalendarCheck,
}

impl FormGate {
    /// Returns a gate using the given [AgeValidator].
    pub fn new(validator: AgeValidator) -> Self {
        Self {
            validator,
            calendar_check: CalendarCheck::default(),
        }
    }

    /// Sets how the birth date is checked against the calendar.
    pub fn with_calendar_check(mut self, calendar_check: CalendarCheck) -> Self {
        self.calendar_check = calendar_check;
        self
    }

    /// Validates the form fields against `reference`, normally today's date.
    pub fn submit(&self, registration: &Registration, reference: &CalendarDate) -> ValidationResult {
        let result = self.check(registration, reference);
        tracing::debug!(
            applicant = registration.name.trim(),
            birth_date = registration.birth_date.trim(),
            sex = registration.sex.as_deref(),
            %reference,
            ?result,
            "registration submitted"
        );
        result
    }

    fn check(&self, registration: &Registration, reference: &CalendarDate) -> ValidationResult {
        let name = registration.name.trim();
        let birth_date = registration.birth_date.trim();
        if name.is_empty() || birth_date.is_empty() {
            return Reason::MissingFields.into();
        }

        let birth = match CalendarDate::parse(birth_date) {
            Ok(birth) => birth,
            Err(e) => {
                tracing::debug!(error = %e, "unreadable birth date");
                return Reason::MalformedDate.into();
            }
        };

        if self.calendar_check == CalendarCheck::Strict {
            if let Err(e) = birth.validate_calendar() {
                tracing::debug!(error = %e, "birth date is not a calendar day");
                return Reason::MalformedDate.into();
            }
        }

        self.validator.validate(&birth, reference)
    }
}
