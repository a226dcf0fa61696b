use std::error::Error as StdError;

/// Alias for a result whose error type is [`Error`].
pub type TemplarResult<T> = Result<T, Error>;
type BoxDynError = Box<dyn StdError + Send + Sync + 'static>;

/// All the ways reading and templating migration content can end in failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error from the wrapped source driver, passed through untouched.
    #[error(transparent)]
    Driver(BoxDynError),
    /// Draining the raw content stream failed.
    #[error("could not read migration content: {0}")]
    Read(#[from] std::io::Error),
    /// Migration content that is not UTF-8 cannot be templated.
    #[error("migration {1} is not valid UTF-8: {0}")]
    Utf8(#[source] std::string::FromUtf8Error, String),
    /// The migration content has malformed placeholder syntax.
    #[error("template {0}: {1}")]
    Parse(String, String),
    /// A placeholder references a name missing from the parameters.
    #[error("template {0}: no entry for parameter {1:?}")]
    MissingParameter(String, String),
    /// The source contains no versions at all.
    #[error("no versions found in source")]
    NoVersions,
    /// A version specified does not exist in the source.
    #[error("version {0} not found in source")]
    VersionNotPresent(i64),
}

/// Converting a result with a generic `std::error::Error` to one with this
/// crate's error type, for driver implementors with their own error types.
pub trait SourceError<T> {
    fn templar_result(self) -> TemplarResult<T>;
}

impl<T, E> SourceError<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn templar_result(self) -> TemplarResult<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::Driver(Box::new(e))),
        }
    }
}
