//! # agegate
//!
//! A library for gating a registration form on a person's birth date: the form is only accepted
//! when the person is an adult (18 or older) on a given reference date.
//!
//! The pieces are:
//!
//! - **Parsing**: birth dates are written `DD-MM-YYYY` and parsed into a [`CalendarDate`].
//! - **Age validation**: an [`AgeValidator`] computes the whole-year age between a birth date and a
//!   reference date, and compares it to a minimum age.
//! - **The form**: a [`FormGate`] takes the raw [`Registration`] fields, checks that they are
//!   present, and returns a [`ValidationResult`], which carries the message to show the user.
//!
//! ## Examples
//!
//! ```
//! use agegate::prelude::*;
//!
//! let today = CalendarDate::new(20, 5, 2024);
//! let gate = FormGate::default();
//!
//! assert!(gate.submit(&Registration::new("Ana", "20-05-2006"), &today).is_valid());
//!
//! let result = gate.submit(&Registration::new("Ana", "21-05-2006"), &today);
//! assert_eq!(ValidationResult::Invalid(Reason::Underage { minimum_age: ADULT_AGE }), result);
//! assert_eq!("Registration is only allowed for people aged 18 or over", result.message());
//! ```
//!
//! Or use the parts on their own:
//!
//! ```
//! use agegate::prelude::*;
//!
//! let birth: CalendarDate = "21-05-2006".parse().unwrap();
//! let today = CalendarDate::parse_iso("2024-05-20").unwrap();
//! assert_eq!(17, age_on(&birth, &today));
//! ```
//!
//! ## Reference Dates
//!
//! Nothing in this library reads the clock. The "today" used to compute an age is always an
//! argument. Use [`CalendarDate::local_today`] or [`CalendarDate::utc_today`] to get one.
//!
//! ## Calendar Checks
//!
//! Birth dates are three unsigned integers. Whether they name a real day is not checked unless the
//! gate is built with [`CalendarCheck::Strict`]:
//!
//! ```
//! use agegate::prelude::*;
//!
//! let today = CalendarDate::new(20, 5, 2024);
//! let registration = Registration::new("Ana", "31-02-2000");
//!
//! assert!(FormGate::default().submit(&registration, &today).is_valid());
//!
//! let strict = FormGate::default().with_calendar_check(CalendarCheck::Strict);
//! assert_eq!(
//!     ValidationResult::Invalid(Reason::MalformedDate),
//!     strict.submit(&registration, &today),
//! );
//! ```
//!
//! ## Prelude
//!
//! agegate provides a prelude module for convenience. Use it with:
//!
//! ```
//! use agegate::prelude::*;
//! ```
#![warn(missing_docs)]

mod date;
mod error;
mod form;
mod validator;

pub use crate::date::{CalendarDate, SEPARATOR};
pub use crate::error::DateError;
pub use crate::form::{CalendarCheck, FormGate, Registration};
pub use crate::validator::{age_on, AgeValidator, Reason, ValidationResult, ADULT_AGE};

/// A convenience module appropriate for glob imports (`use agegate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::age_on;
    #[doc(no_inline)]
    pub use crate::AgeValidator;
    #[doc(no_inline)]
    pub use crate::ADULT_AGE;
    #[doc(no_inline)]
    pub use crate::CalendarCheck;
    #[doc(no_inline)]
    pub use crate::CalendarDate;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::FormGate;
    #[doc(no_inline)]
    pub use crate::Reason;
    #[doc(no_inline)]
    pub use crate::Registration;
    #[doc(no_inline)]
    pub use crate::ValidationResult;
}
