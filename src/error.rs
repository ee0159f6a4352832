//! Error types.

use alloc::string::String;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The port is longer than five characters, is not a number,
    /// or is outside of the range `0..=65535`.
    ///
    /// The error index points to the first character of the port.
    InvalidPort,
    /// An authority is present but its host is empty.
    ///
    /// The error index points to where the host should have started.
    EmptyHost,
}

/// An error occurred when parsing a URI.
///
/// The input that failed to parse is carried along for diagnostics.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseError<I = String> {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
    pub(crate) input: I,
}

impl ParseError<()> {
    pub(crate) fn with_input<I>(self, input: I) -> ParseError<I> {
        ParseError {
            index: self.index,
            kind: self.kind,
            input,
        }
    }
}

impl<I> ParseError<I> {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Recovers the input that was attempted to parse into a [`Uri`].
    ///
    /// [`Uri`]: crate::Uri
    #[inline]
    pub fn into_input(self) -> I {
        self.input
    }

    /// Returns the error with input erased.
    #[inline]
    #[must_use]
    pub fn plain(&self) -> ParseError<()> {
        ParseError {
            index: self.index,
            kind: self.kind,
            input: (),
        }
    }
}

impl ParseError {
    /// Returns the input that was attempted to parse as a string slice.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An error occurred when setting a port outside of the TCP/UDP range.
///
/// Returned by [`Uri::with_port`](crate::Uri::with_port).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortRangeError {
    pub(crate) port: i64,
}

impl PortRangeError {
    /// The smallest port accepted.
    pub const MIN: i64 = 0;
    /// The largest port accepted.
    pub const MAX: i64 = 65535;

    /// Returns the rejected port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> i64 {
        self.port
    }
}

#[cfg(feature = "impl-error")]
impl core::error::Error for ParseError {}

#[cfg(feature = "impl-error")]
impl core::error::Error for PortRangeError {}
