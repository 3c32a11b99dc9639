use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The user aborted an in-progress prompt.
    #[error("Prompt cancelled by user interrupt.")]
    Interrupted,

    #[error("IO error: {0}.")]
    IoError(io::Error),

    /// The blocking worker driving a prompt failed to complete.
    #[error("Prompt worker failed: {0}.")]
    WorkerJoinError(#[from] tokio::task::JoinError),

    /// Represents validation failures in prompt configuration
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with inquest's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        // An interrupted terminal read is the user hitting Ctrl-C, not an
        // IO failure.
        if err.kind() == io::ErrorKind::Interrupted {
            Error::Interrupted
        } else {
            Error::IoError(err)
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) => io_err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_read_maps_to_interrupted() {
        let err: Error = io::Error::new(io::ErrorKind::Interrupted, "read interrupted").into();
        assert!(matches!(err, Error::Interrupted));
    }

    #[test]
    fn other_io_errors_stay_io_errors() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn dialoguer_interrupt_maps_through() {
        let inner = io::Error::new(io::ErrorKind::Interrupted, "read interrupted");
        let err: Error = dialoguer::Error::IO(inner).into();
        assert!(matches!(err, Error::Interrupted));
    }

    #[test]
    fn dialoguer_io_failure_maps_through() {
        let inner = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        let err: Error = dialoguer::Error::IO(inner).into();
        assert!(matches!(err, Error::IoError(_)));
    }
}
