use super::error::SequenceError;

/// Turns the `try_` form of an operation into its panicking form.
pub(crate) trait Throw<T> {
    /// Returns the success value, or panics with the message of the [`SequenceError`] held
    /// instead.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Into<SequenceError>> Throw<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error.into()),
        }
    }
}
