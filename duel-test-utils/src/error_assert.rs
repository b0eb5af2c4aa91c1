use anyhow::Error;

/// [`assert`]s that the result is an [`Error`] with the given message, including all context.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(error) => pretty_assertions::assert_eq!(format!("{error:#}"), message),
    }
}

/// [`assert`]s that the result is an [`Error`] that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got Ok"),
        Err(error) => {
            let error = format!("{error:#}");
            assert!(error.contains(message), "{error}");
        }
    }
}
