use thiserror::Error;

/// Returned when serializing an [`OptionalResult::Failed`][crate::OptionalResult::Failed].
///
/// A carried error has no JSON form: on decode a plain string could not be
/// told apart from an encoded error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("cannot encode a carried error to JSON")]
pub struct EncodeError;
