use std::fmt::{
    Arguments,
    Display,
};

use crate::error::{
    Error,
    general_error,
    not_found_error,
};

/// Wraps an error into [`Error`], optionally providing additional context.
pub trait WrapError {
    /// Wraps the object into an [`Error`].
    #[track_caller]
    fn wrap_error(self) -> Error;

    /// Wraps the object into an [`Error`], with an additional message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display + Send + Sync + 'static;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    fn wrap_error(self) -> Error {
        self.into()
    }

    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display + Send + Sync + 'static,
    {
        Into::<Error>::into(self).context(message)
    }
}

/// Wraps the error of a [`Result`] into an [`Error`].
pub trait WrapResultError<T> {
    /// Wraps the error into an [`Error`].
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    /// Wraps the error into an [`Error`], with an additional message.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display + Send + Sync + 'static;

    /// Wraps the error into an [`Error`], with an additional formatted message.
    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error>;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(|error| error.wrap_error())
    }

    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display + Send + Sync + 'static,
    {
        self.map_err(|error| error.wrap_error_with_message(message))
    }

    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.map_err(|error| error.wrap_error_with_message(format!("{args}")))
    }
}

/// Wraps an [`Option`] into a result producing an [`Error`].
pub trait WrapOptionError<T> {
    /// Wraps the object into a [`Result<T, Error>`] with a general error.
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Wraps the object into a [`Result<T, Error>`] with a
    /// [`NotFoundError`][`crate::error::NotFoundError`].
    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| general_error(message))
    }

    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| not_found_error(target))
    }
}
