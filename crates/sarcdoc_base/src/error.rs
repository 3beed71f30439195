use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

/// Error variants that can occur in sarcdoc operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// File system operation failed
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    ConfigError { path: String, message: String },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/// Error type wrapping ErrorKind with an optional context stack.
///
/// Context strings are attached during propagation and displayed before the
/// underlying error message, outermost first.
#[derive(Debug)]
pub struct SarcdocError {
    kind: ErrorKind,
    context: Vec<String>,
}

impl SarcdocError {
    /// Creates a new error from an ErrorKind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
        }
    }

    /// Creates a message-only error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    /// Allows pattern matching on specific error variants.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl From<ErrorKind> for SarcdocError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for SarcdocError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::FileError { source, .. } => Some(source),
            ErrorKind::ConfigError { .. } => None,
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for SarcdocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ctx) in self.context.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", ctx)?;
            } else {
                write!(f, ": {}", ctx)?;
            }
        }

        if !self.context.is_empty() {
            write!(f, ": ")?;
        }

        match &self.kind {
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::ConfigError { path, message } => {
                write!(f, "Invalid configuration in {}: {}", path, message)
            }
            ErrorKind::Message { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// Standard result type for sarcdoc operations.
///
/// Boxing the error keeps the Ok path small.
pub type SarcdocResult<T> = std::result::Result<T, Box<SarcdocError>>;

/// Creates a boxed message error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::error::SarcdocError::message(format!($($arg)*)))
    };
}

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> SarcdocResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> SarcdocResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for SarcdocResult<T> {
    fn context(self, context: impl Into<String>) -> SarcdocResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> SarcdocResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_from_file_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let path = PathBuf::from("sarcdoc.toml");
        let error = SarcdocError::new(ErrorKind::FileError {
            path: path.clone(),
            source: io_err,
        });

        match error.kind() {
            ErrorKind::FileError { path: p, .. } => {
                assert_eq!(p, &path);
            }
            _ => panic!("Expected FileError variant"),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_display_message_only() {
        let error = SarcdocError::message("test message");
        assert_eq!(error.to_string(), "test message");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_display_with_context() {
        let error = SarcdocError::message("test message").context("operation failed");
        assert_eq!(error.to_string(), "operation failed: test message");
    }

    #[test]
    fn test_error_display_with_multiple_contexts() {
        let error = SarcdocError::message("root error")
            .context("first")
            .context("second")
            .context("third");
        assert_eq!(error.to_string(), "first: second: third: root error");
    }

    #[test]
    fn test_error_display_config_error() {
        let error = SarcdocError::new(ErrorKind::ConfigError {
            path: "sarcdoc.toml".to_string(),
            message: "missing field `title`".to_string(),
        });
        let display = error.to_string();
        assert!(display.contains("sarcdoc.toml"));
        assert!(display.contains("missing field `title`"));
    }

    #[test]
    fn test_error_root_cause_file_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let error = SarcdocError::new(ErrorKind::FileError {
            path: PathBuf::from("test.txt"),
            source: io_err,
        });
        assert_eq!(error.root_cause().to_string(), "not found");
    }

    #[test]
    fn test_error_with_context_lazy_evaluation() {
        let mut called = false;
        let error = SarcdocError::message("error").with_context(|| {
            called = true;
            "lazy context".to_string()
        });

        assert!(called);
        assert_eq!(error.to_string(), "lazy context: error");
    }

    #[test]
    fn test_result_ext_context_success() {
        let result: SarcdocResult<i32> = Ok(42);
        let final_result = result.context("operation failed");
        assert_eq!(final_result.unwrap(), 42);
    }

    #[test]
    fn test_result_ext_context_error() {
        let result: SarcdocResult<i32> = Err(Box::new(SarcdocError::message("original")));
        let final_result = result.context("operation failed");
        assert!(final_result.is_err());
        let err = final_result.unwrap_err();
        assert_eq!(err.to_string(), "operation failed: original");
    }

    #[test]
    fn test_result_ext_chaining() {
        let result: SarcdocResult<i32> = Err(Box::new(SarcdocError::message("root")));
        let final_result = result
            .context("step 1")
            .context("step 2")
            .with_context(|| "step 3".to_string());
        assert!(final_result.is_err());
        let err = final_result.unwrap_err();
        assert_eq!(err.to_string(), "step 1: step 2: step 3: root");
    }

    #[test]
    fn test_err_macro() {
        let error = err!("missing parameter '{}'", "method");
        assert_eq!(error.to_string(), "missing parameter 'method'");
    }
}
