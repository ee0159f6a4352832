use crate::{
    component::Scheme,
    error::{ParseError, ParseErrorKind, PortRangeError},
    Uri,
};
use core::fmt::{self, Write};

impl ParseErrorKind {
    fn description(self) -> &'static str {
        match self {
            ParseErrorKind::InvalidPort => "invalid port",
            ParseErrorKind::EmptyHost => "empty host",
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("index", &self.index)
            .field("kind", &self.kind)
            .field("input", &self.input)
            .finish()
    }
}

impl fmt::Display for ParseError<()> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}", self.kind.description(), self.index)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the uri '{}' is not valid: {}",
            self.input,
            self.plain()
        )
    }
}

impl fmt::Display for PortRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port '{}' is not within a valid UDP/TCP range", self.port)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Writes the authority of a URI that has a host.
pub(crate) struct AuthorityDisplay<'a>(pub(crate) &'a Uri);

impl fmt::Display for AuthorityDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uri = self.0;
        let userinfo = uri.userinfo();
        if !userinfo.is_empty() {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&uri.host())?;
        if let Some(port) = uri.port() {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

/// Serializes the URI from its normalized components.
///
/// Two corrections are made to the path so that the output stays a valid URI:
///
/// - A rootless path is prefixed with `/` when an authority is present.
/// - Leading slashes are collapsed into one when there is no authority,
///   so that the path is not mistaken for an authority.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.scheme();
        if !scheme.is_empty() {
            write!(f, "{scheme}:")?;
        }

        let has_authority = self.has_authority();
        if has_authority {
            write!(f, "//{}", AuthorityDisplay(self))?;
        }

        let path = self.path();
        if has_authority && !path.is_empty() && !path.starts_with('/') {
            f.write_char('/')?;
            f.write_str(path)?;
        } else if !has_authority && path.starts_with("//") {
            f.write_char('/')?;
            f.write_str(path.trim_start_matches('/'))?;
        } else {
            f.write_str(path)?;
        }

        let query = self.query();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }

        let fragment = self.fragment();
        if !fragment.is_empty() {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
