use crate::{error::ParseError, Uri};

/// A factory of [`Uri`]s.
///
/// This is a thin wrapper around [`Uri::parse`] for code that is handed a
/// factory instead of calling constructors directly.
///
/// # Examples
///
/// ```
/// use lenient_uri::UriFactory;
///
/// let factory = UriFactory::new();
/// let uri = factory.create_uri("/users/1")?;
/// assert_eq!(uri.path(), "/users/1");
///
/// assert!(factory.create_uri("host:65536").is_err());
/// # Ok::<_, lenient_uri::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UriFactory {
    _priv: (),
}

impl UriFactory {
    /// Creates a new factory.
    #[inline]
    #[must_use]
    pub const fn new() -> UriFactory {
        UriFactory { _priv: () }
    }

    /// Creates a [`Uri`] from a string.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Uri::parse`] unchanged.
    #[inline]
    pub fn create_uri(&self, uri: &str) -> Result<Uri, ParseError> {
        Uri::parse(uri)
    }
}
