use std::ptr::NonNull;

/// A reference-shaped value that may be in a null state.
///
/// Used by the `from_nullable` constructors: a null input becomes `Absent`
/// rather than a present null.
pub trait Nullable {
    type Target;

    fn into_non_null(self) -> Option<Self::Target>;
}

impl<T> Nullable for Option<T> {
    type Target = T;

    fn into_non_null(self) -> Option<Self::Target> {
        self
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Target = NonNull<T>;

    fn into_non_null(self) -> Option<Self::Target> {
        NonNull::new(self as *mut T)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Target = NonNull<T>;

    fn into_non_null(self) -> Option<Self::Target> {
        NonNull::new(self)
    }
}
