use crate::{
    error::EncodeError,
    signal::{self, ResultSignals},
    util::Nullable,
    Failure,
};

/// A value of type `T`, nothing, or an error `E`.
///
/// Absence is not an error: `Absent` is the normal empty state, while
/// `Failed` carries an application error attached by the producer. Only
/// `Present` counts as present.
///
/// `Present` and `Absent` serialize like [`Optional`][crate::Optional].
/// `Failed` has no wire form and refuses to serialize with [`EncodeError`];
/// deserialization never produces it.
///
/// # Examples
///
/// ```rust
/// use optionals::{Failure, OptionalResult};
///
/// let res = OptionalResult::<String>::failed(Failure::new("bad stuff happened"));
/// assert!(!res.is_present());
/// assert!(res.is_failed());
/// assert_eq!(res.or_else("fallback".into()), "fallback");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum OptionalResult<T, E = Failure> {
    /// Some value `T`
    Present(T),

    /// No value
    Absent,

    /// No value, because of the error `E`
    Failed(E),
}

/// Short name for [`OptionalResult`]: some, none, or error.
pub type SoNoEr<T, E = Failure> = OptionalResult<T, E>;

impl<T, E> Default for OptionalResult<T, E> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T, E> OptionalResult<T, E> {
    /// Wraps `value` as present.
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns an absent result.
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Returns a result carrying `err`.
    pub const fn failed(err: E) -> Self {
        Self::Failed(err)
    }

    /// Wraps a nullable reference. A null input yields `Absent`.
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Target = T>,
    {
        value.into_non_null().map_or(Self::Absent, Self::Present)
    }

    /// Returns `true` only for `Present`.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` only for `Absent`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` only for `Failed`.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the carried error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the contained value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics unless the result is `Present`, including when it is `Failed`.
    #[inline]
    #[track_caller]
    pub fn must_get(self) -> T {
        match self {
            Self::Present(value) => value,
            _ => panic!("value not present"),
        }
    }

    /// Calls `f` with the value if one is present.
    #[inline]
    pub fn if_present<F: FnOnce(&T)>(&self, f: F) {
        if let Self::Present(value) = self {
            f(value)
        }
    }

    /// Returns the contained value, or `default` if absent or failed.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            _ => default,
        }
    }

    /// Converts from `&OptionalResult<T, E>` to `OptionalResult<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> OptionalResult<&T, &E> {
        match *self {
            Self::Present(ref value) => OptionalResult::Present(value),
            Self::Absent => OptionalResult::Absent,
            Self::Failed(ref err) => OptionalResult::Failed(err),
        }
    }

    /// Converts into `Result<Option<T>, E>`, mapping `Absent` to `Ok(None)`.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Present(value) => Ok(Some(value)),
            Self::Absent => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }

    /// Returns `Err` if this result could not be serialized.
    pub fn check_encodable(&self) -> Result<(), EncodeError> {
        match self {
            Self::Failed(_) => Err(EncodeError),
            _ => Ok(()),
        }
    }
}

impl<T, E> OptionalResult<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Delivers the current state on three one-shot channels.
    ///
    /// A background task sends the value on `some`, the error on `err`, or
    /// `()` on `none`, then closes all three. Every call delivers
    /// independently.
    ///
    /// ```rust
    /// use crossbeam_channel::select;
    /// use optionals::{Failure, OptionalResult};
    ///
    /// let failure = Failure::new("loki is a secret");
    /// let signals = OptionalResult::<u32>::failed(failure.clone()).get();
    /// select! {
    ///     recv(signals.some) -> _ => unreachable!(),
    ///     recv(signals.none) -> _ => unreachable!(),
    ///     recv(signals.err) -> err => assert_eq!(err, Ok(failure)),
    /// }
    /// ```
    pub fn get(&self) -> ResultSignals<T, E> {
        signal::deliver_result(self.clone())
    }
}

impl<T, E> From<Result<Option<T>, E>> for OptionalResult<T, E> {
    fn from(value: Result<Option<T>, E>) -> Self {
        match value {
            Ok(value) => Self::from_nullable(value),
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};

    use super::OptionalResult;
    use crate::error::EncodeError;

    impl<T: Serialize, E> Serialize for OptionalResult<T, E> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Self::Present(value) => value.serialize(serializer),
                Self::Absent => serializer.serialize_none(),
                Self::Failed(_) => Err(ser::Error::custom(EncodeError)),
            }
        }
    }

    impl<'de, T: Deserialize<'de>, E> Deserialize<'de> for OptionalResult<T, E> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<T>::deserialize(deserializer)?;
            Ok(value.map_or(Self::Absent, Self::Present))
        }
    }
}
