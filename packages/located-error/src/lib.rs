//! Error decorator that records where an error was raised.
//!
//! Wrapping a source error with [`Located`] and converting it into a
//! [`LocatedError`] captures the caller location, so error messages returned
//! by the storage and partner layers point at the line that produced them.
//!
//! ```rust
//! use tripcompare_located_error::{Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! enum LookupError {
//!     #[error("lookup failed")]
//!     Failed,
//! }
//!
//! let e: LocatedError<LookupError> = Located(LookupError::Failed).into();
//!
//! assert!(e.to_string().starts_with("lookup failed, "));
//! assert!(e.location().file().ends_with(".rs"));
//! ```
use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

use tracing::debug;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Marks an error so it can be turned into a [`LocatedError`].
pub struct Located<E>(pub E);

/// A shared source error plus the location where it was wrapped.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.source
    }
}

impl<'a, E> std::fmt::Display for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<'a, E> Error for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<'a, E> Clone for LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        LocatedError {
            source: self.source.clone(),
            location: self.location.clone(),
        }
    }
}

impl<'a, E> From<Located<E>> for LocatedError<'a, E>
where
    E: Error + Send + Sync,
{
    #[track_caller]
    fn from(located: Located<E>) -> Self {
        let e = LocatedError {
            source: Arc::new(located.0),
            location: Box::new(*Location::caller()),
        };
        debug!("{e}");
        e
    }
}

impl<'a> From<DynError> for LocatedError<'a, dyn std::error::Error + Send + Sync> {
    #[track_caller]
    fn from(source: DynError) -> Self {
        LocatedError {
            source,
            location: Box::new(*Location::caller()),
        }
    }
}
