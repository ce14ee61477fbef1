pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Connection: `{0}`")]
    Connection(String),
    #[error("Timeout: `{0}`")]
    Timeout(String),
    #[error("Database: `{0}`")]
    Database(String),
    #[error("Runtime: `{0}`")]
    Runtime(String),
    #[error("FromValue: `{0}`")]
    FromValue(String),
    #[error("OutOfRange: `{0}`")]
    OutOfRange(String),
    /// Statement cannot be rendered, e.g. no mode was chosen
    #[error("Build: `{0}`")]
    Build(String),
    /// A variadic operation was called without any item
    #[error("EmptyArgument: `{0}`")]
    EmptyArgument(String),
}

#[macro_export]
macro_rules! connection {
    ($($arg:tt)*) => { $crate::Error::Connection(format!($($arg)*)) };
}

#[macro_export]
macro_rules! timeout {
    ($($arg:tt)*) => { $crate::Error::Timeout(format!($($arg)*)) };
}

#[macro_export]
macro_rules! database {
    ($($arg:tt)*) => { $crate::Error::Database(format!($($arg)*)) };
}

#[macro_export]
macro_rules! runtime {
    ($($arg:tt)*) => { $crate::Error::Runtime(format!($($arg)*)) };
}

#[macro_export]
macro_rules! from_value {
    ($($arg:tt)*) => { $crate::Error::FromValue(format!($($arg)*)) };
}

#[macro_export]
macro_rules! out_of_range {
    ($($arg:tt)*) => { $crate::Error::OutOfRange(format!($($arg)*)) };
}

#[macro_export]
macro_rules! build {
    ($($arg:tt)*) => { $crate::Error::Build(format!($($arg)*)) };
}

#[macro_export]
macro_rules! empty_argument {
    ($($arg:tt)*) => { $crate::Error::EmptyArgument(format!($($arg)*)) };
}

#[cfg(test)]
mod test {
    #[test]
    fn test_macros() {
        let err = crate::build!("Statement for `{}` has no mode", "users");
        assert!(matches!(err, crate::Error::Build(_)));
        assert_eq!(err.to_string(), "Build: `Statement for `users` has no mode`");

        let err = crate::empty_argument!("Tables must not be empty");
        assert!(matches!(err, crate::Error::EmptyArgument(_)));
        assert_eq!(err.to_string(), "EmptyArgument: `Tables must not be empty`");
    }
}
