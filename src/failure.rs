use std::{error::Error, fmt};

use triomphe::Arc;

type BoxError = Box<dyn Error + Send + Sync>;

/// Shared handle to an application error carried by an
/// [`OptionalResult`][crate::OptionalResult].
///
/// Cloning is cheap and every clone refers to the same error object, so a
/// failure delivered through [`get`][crate::OptionalResult::get] compares equal
/// to the one it was built from. Equality is identity, not message equality.
///
/// # Examples
///
/// ```rust
/// use optionals::Failure;
///
/// let a = Failure::new("bad stuff happened");
/// let b = a.clone();
/// assert_eq!(a, b);
/// assert_ne!(a, Failure::new("bad stuff happened"));
/// assert_eq!(a.to_string(), "bad stuff happened");
/// ```
#[derive(Clone)]
pub struct Failure(Arc<BoxError>);

impl Failure {
    /// Wraps `err`, which may be any error type or a plain message.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self(Arc::new(err.into()))
    }

    /// Returns `true` if both handles refer to the same error object.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Returns the wrapped error.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &**self.0
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for Failure {}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self.0, f)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self.0, f)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
