mod dob;


pub use dob::age_in_years;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::form::ValidationError;

pub const SIGNUP_PASSWORD_MIN_CHARS: usize = 8;
pub const LOGIN_PASSWORD_MIN_CHARS: usize = 6;
pub const MINIMUM_AGE_YEARS: i32 = 13;
pub const DOB_FORMAT: &str = "%d/%m/%Y";

static FULL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]{3,}$").expect("full name pattern must compile"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern must compile"));
static EMAIL_NORMALIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$")
        .expect("normalized email pattern must compile")
});
static MOBILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile number pattern must compile"));

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    InvalidName,
    InvalidEmail,
    PasswordTooShort { min_chars: usize },
    PasswordMismatch,
    InvalidMobileNumber,
    DobMissing,
    DobUnparseable,
    DobInFuture,
    Underage,
    TermsNotAccepted,
}

impl ValidationError for Violation {
    fn message(&self) -> String {
        match self {
            Violation::InvalidName => {
                "Name must be at least 3 characters and contain only letters".to_string()
            }
            Violation::InvalidEmail => "Enter valid email address".to_string(),
            Violation::PasswordTooShort { min_chars } => {
                format!("Password must be at least {min_chars} characters")
            }
            Violation::PasswordMismatch => "Passwords do not match".to_string(),
            Violation::InvalidMobileNumber => {
                "Enter valid 10-digit mobile number starting 6-9".to_string()
            }
            Violation::DobMissing => "Date of birth is required".to_string(),
            Violation::DobUnparseable => "Invalid date selected".to_string(),
            Violation::DobInFuture => "DOB cannot be future date".to_string(),
            Violation::Underage => "You must be at least 13 years old".to_string(),
            Violation::TermsNotAccepted => {
                "You must accept the Terms and Privacy Policy".to_string()
            }
        }
    }
}

pub fn full_name(value: &str) -> Result<(), Violation> {
    if FULL_NAME.is_match(value.trim()) {
        Ok(())
    } else {
        Err(Violation::InvalidName)
    }
}

pub fn email(value: &str) -> Result<(), Violation> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(Violation::InvalidEmail)
    }
}

pub fn email_normalized(value: &str) -> Result<(), Violation> {
    let lowered = value.to_lowercase();
    if EMAIL_NORMALIZED.is_match(&lowered) {
        Ok(())
    } else {
        Err(Violation::InvalidEmail)
    }
}

pub fn signup_password(value: &str) -> Result<(), Violation> {
    password_with_min(value, SIGNUP_PASSWORD_MIN_CHARS)
}

pub fn login_password(value: &str) -> Result<(), Violation> {
    password_with_min(value, LOGIN_PASSWORD_MIN_CHARS)
}

fn password_with_min(value: &str, min_chars: usize) -> Result<(), Violation> {
    if value.chars().count() >= min_chars {
        Ok(())
    } else {
        Err(Violation::PasswordTooShort { min_chars })
    }
}

pub fn confirm_password(password: &str, confirm: &str) -> Result<(), Violation> {
    if confirm.is_empty() || confirm != password {
        Err(Violation::PasswordMismatch)
    } else {
        Ok(())
    }
}

pub fn mobile_number(value: &str) -> Result<(), Violation> {
    if MOBILE_NUMBER.is_match(value) {
        Ok(())
    } else {
        Err(Violation::InvalidMobileNumber)
    }
}

pub fn terms_accepted(accepted: bool) -> Result<(), Violation> {
    if accepted {
        Ok(())
    } else {
        Err(Violation::TermsNotAccepted)
    }
}

pub fn date_of_birth(value: &str, today: NaiveDate) -> Result<(), Violation> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Violation::DobMissing);
    }
    let birth =
        NaiveDate::parse_from_str(value, DOB_FORMAT).map_err(|_| Violation::DobUnparseable)?;
    if birth > today {
        return Err(Violation::DobInFuture);
    }
    if age_in_years(birth, today) < MINIMUM_AGE_YEARS {
        return Err(Violation::Underage);
    }
    Ok(())
}
