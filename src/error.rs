use std::error;
use std::fmt;

/// A `Result` type alias for this crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that occurred while building or materializing a view.
///
/// Almost every misuse of a view is rejected by the type checker. The few
/// conditions that can only be detected at runtime are reported through
/// this type by the fallible (`try_*`) entry points. Their panicking twins
/// (`chunk`, `iota_step`, `RandomAccessView::at`) assert the same
/// conditions instead.
#[derive(Clone, Eq, PartialEq)]
pub enum Error {
    /// A chunk view was requested with a chunk size of zero.
    ///
    /// A zero-width chunk would never advance the underlying cursor.
    ZeroChunkSize,
    /// A numeric progression was requested with a step of zero.
    ZeroStep,
    /// A random access read was attempted outside of a view's bounds.
    OutOfBounds {
        /// The position that was requested.
        index: usize,
        /// The number of elements in the view.
        len: usize,
    },
    /// A view was materialized into a fixed size container whose length
    /// does not match the number of elements produced.
    LengthMismatch {
        /// The length of the target container.
        expected: usize,
        /// The number of elements the view produced. When the view produced
        /// too many elements, this is `expected + 1` since materialization
        /// stops at the first surplus element.
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::Error::*;
        match *self {
            ZeroChunkSize => write!(f, "\
Error building chunk view: the chunk size must be greater than zero."),
            ZeroStep => write!(f, "\
Error building numeric progression: the step must not be zero."),
            OutOfBounds { index, len } => write!(f, "\
Error reading view: index {} is out of bounds for a view of length {}.",
                index, len),
            LengthMismatch { expected, got } => write!(f, "\
Error materializing view: expected exactly {} elements, got {}{}.",
                expected,
                got,
                if got > expected { " or more" } else { "" }),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_out_of_bounds() {
        let err = Error::OutOfBounds { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Error reading view: index 7 is out of bounds for a view of \
             length 3."
        );
    }

    #[test]
    fn display_length_mismatch_surplus() {
        let err = Error::LengthMismatch { expected: 2, got: 3 };
        assert!(err.to_string().ends_with("got 3 or more."));
    }

    #[test]
    fn debug_is_display() {
        let err = Error::ZeroStep;
        assert_eq!(format!("{:?}", err), format!("{}", err));
    }
}
