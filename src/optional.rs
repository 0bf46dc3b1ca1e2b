use crate::{
    signal::{self, Signals},
    util::Nullable,
};

/// A value of type `T`, or nothing.
///
/// Serializes as the bare encoding of the value when present and as `null`
/// when absent, so it can be embedded as a field of a larger structure.
///
/// # Examples
///
/// ```rust
/// use optionals::Optional;
///
/// let name = Optional::some("Thor");
/// assert!(name.is_present());
/// assert_eq!(name.or_else("Loki"), "Thor");
///
/// let missing = Optional::<&str>::none();
/// assert!(!missing.is_present());
/// assert_eq!(missing.or_else("Loki"), "Loki");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Optional<T> {
    /// Some value `T`
    Present(T),

    /// No value
    Absent,
}

// Implemented manually to omit the `T: Default` bound `#[derive(Default)]`
// would impose.
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Optional<T> {
    /// Wraps `value` as present.
    ///
    /// Values in Rust have no null state; to wrap something that may be null,
    /// use [`from_nullable`][Self::from_nullable].
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns an absent optional.
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Wraps a nullable reference. A null input yields `Absent`, never a
    /// present null.
    ///
    /// ```rust
    /// use optionals::Optional;
    /// use std::ptr;
    ///
    /// assert!(!Optional::from_nullable(None::<&str>).is_present());
    /// assert!(!Optional::from_nullable(ptr::null::<u8>()).is_present());
    /// assert!(Optional::from_nullable(Some(&5)).is_present());
    /// ```
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Target = T>,
    {
        value.into_non_null().map_or(Self::Absent, Self::Present)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the contained value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if no value is present. Calling this on an absent optional is a
    /// logic error in the caller.
    #[inline]
    #[track_caller]
    pub fn must_get(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("value not present"),
        }
    }

    /// Calls `f` with the value if one is present.
    #[inline]
    pub fn if_present<F: FnOnce(&T)>(&self, f: F) {
        if let Self::Present(value) = self {
            f(value)
        }
    }

    /// Returns the contained value, or `default` if absent.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match *self {
            Self::Present(ref value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts into the equivalent `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Optional<T>
where
    T: Clone + Send + 'static,
{
    /// Delivers the current state on a pair of one-shot channels.
    ///
    /// A background task sends the value on `some`, or `()` on `none`, then
    /// closes both. Each call spawns its own task and delivers independently,
    /// so `get` may be called any number of times.
    ///
    /// ```rust
    /// use optionals::Optional;
    ///
    /// let opt = Optional::some(String::from("blah blah"));
    /// assert_eq!(opt.get().wait(), opt);
    /// assert_eq!(opt.get().some.recv().as_deref(), Ok("blah blah"));
    /// ```
    pub fn get(&self) -> Signals<T> {
        signal::deliver(self.clone())
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Optional;

    impl<T: Serialize> Serialize for Optional<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Self::Present(value) => value.serialize(serializer),
                Self::Absent => serializer.serialize_none(),
            }
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<T>::deserialize(deserializer).map(Self::from)
        }
    }
}
