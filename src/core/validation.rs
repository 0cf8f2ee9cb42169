//! Input checks shared by the core use cases.
//!
//! Every check returns [`Error::InvalidInput`] naming the offending field.
use lazy_static::lazy_static;
use regex::Regex;

use super::error::Error;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
            .expect("the e-mail pattern should compile");
}

/// # Errors
///
/// Will return `Err` if `value` is not a syntactically valid e-mail address.
pub fn email(field: &'static str, value: &str) -> Result<(), Error> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            reason: String::from("value is not a valid email address"),
        })
    }
}

/// Checks the number of characters of `value`.
///
/// # Errors
///
/// Will return `Err` if the length is outside `min..=max`.
pub fn length(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), Error> {
    let chars = value.chars().count();

    if chars < min {
        return Err(Error::InvalidInput {
            field,
            reason: format!("should have at least {min} characters"),
        });
    }

    if chars > max {
        return Err(Error::InvalidInput {
            field,
            reason: format!("should have at most {max} characters"),
        });
    }

    Ok(())
}

/// Three-letter IATA airport or city code.
///
/// # Errors
///
/// Will return `Err` if `value` does not have exactly three characters.
pub fn iata(field: &'static str, value: &str) -> Result<(), Error> {
    if value.chars().count() == 3 {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            reason: String::from("should be a three-letter IATA code"),
        })
    }
}

/// # Errors
///
/// Will return `Err` if `value` is outside `min..=max`.
pub fn range<T>(field: &'static str, value: T, min: T, max: T) -> Result<(), Error>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(Error::InvalidInput {
            field,
            reason: format!("should be between {min} and {max}"),
        });
    }

    Ok(())
}

/// # Errors
///
/// Will return `Err` if `value` is lower than `min`.
pub fn at_least<T>(field: &'static str, value: T, min: T) -> Result<(), Error>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min {
        return Err(Error::InvalidInput {
            field,
            reason: format!("should be greater than or equal to {min}"),
        });
    }

    Ok(())
}
