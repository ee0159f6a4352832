use crate::{
    component::Components,
    error::{ParseError, ParseErrorKind},
};

type Result<T> = core::result::Result<T, ParseError<()>>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
            input: (),
        })
    };
}

pub(crate) fn parse(s: &str) -> Result<Components<'_>> {
    let mut parser = Parser {
        s,
        pos: 0,
        out: Components::EMPTY,
    };
    parser.parse_from_scheme()?;
    crate::log::trace!("split {:?} into {:?}", s, parser.out);
    Ok(parser.out)
}

/// Lenient URI splitter.
///
/// # Invariants
///
/// `pos <= s.len()` and `pos` is always on an ASCII delimiter boundary,
/// so every output slice is on the boundary of a UTF-8 code point.
///
/// # Preconditions and guarantees
///
/// Start and finish parsing by calling `parse_from_scheme`.
///
/// Nothing is validated beyond what is needed to split the input: the
/// port must fit in `0..=65535` and an authority must have a nonempty host.
struct Parser<'a> {
    s: &'a str,
    pos: usize,
    out: Components<'a>,
}

fn is_scheme_char(x: u8) -> bool {
    x.is_ascii_alphanumeric() || matches!(x, b'+' | b'-' | b'.')
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Reads a port the way C's `strtol` reads a number: leading whitespace
/// and a sign are allowed, and anything after the digits is ignored.
fn parse_port(s: &str) -> Option<u16> {
    let s = s.trim_start_matches(is_c_space);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // At most five bytes reach here, so this cannot overflow.
    let value: u32 = s[..digits].parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    u16::try_from(value).ok()
}

impl<'a> Parser<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.s.as_bytes()
    }

    fn len(&self) -> usize {
        self.s.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.s[self.pos..].starts_with(s) {
            // INVARIANT: The remaining bytes start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    fn count_digits(&self, start: usize, max: usize) -> usize {
        self.bytes()[start..]
            .iter()
            .take(max)
            .take_while(|x| x.is_ascii_digit())
            .count()
    }

    fn parse_from_scheme(&mut self) -> Result<()> {
        let (s, bytes) = (self.s, self.bytes());

        let Some(colon) = bytes.iter().position(|&x| x == b':') else {
            return self.parse_from_authority_or_path();
        };
        if colon == 0 {
            return self.parse_from_port(colon);
        }

        if !bytes[..colon].iter().all(|&x| is_scheme_char(x)) {
            // Not a scheme. The colon may still introduce a port.
            let query = bytes.iter().position(|&x| x == b'?');
            return if colon + 1 < self.len() && query.is_some_and(|i| colon < i) {
                self.parse_from_port(colon)
            } else {
                self.parse_from_authority_or_path()
            };
        }

        let scheme = &s[..colon];
        match bytes.get(colon + 1) {
            None => {
                self.out.scheme = Some(scheme);
                // INVARIANT: Skipping the scheme and ":" reaches the end.
                self.skip(colon + 1);
                Ok(())
            }
            Some(b'/') => {
                self.out.scheme = Some(scheme);
                if bytes.get(colon + 2) != Some(&b'/') {
                    self.skip(colon + 1);
                    return self.parse_from_path();
                }
                self.skip(colon + 3);
                if scheme.eq_ignore_ascii_case("file") && bytes.get(colon + 3) == Some(&b'/') {
                    // Keep the drive letter in `file:///c:/dir/file`.
                    if bytes.get(colon + 5) == Some(&b':') {
                        self.skip(1);
                    }
                    return self.parse_from_path();
                }
                self.parse_from_authority()
            }
            Some(_) => {
                let digits = self.count_digits(colon + 1, usize::MAX);
                if digits < 6 && matches!(bytes.get(colon + 1 + digits), None | Some(b'/')) {
                    // Something like `example.com:8080/path`.
                    return self.parse_from_port(colon);
                }
                self.out.scheme = Some(scheme);
                self.skip(colon + 1);
                self.parse_from_path()
            }
        }
    }

    // The input has no scheme and `colon` is the first colon in it.
    fn parse_from_port(&mut self, colon: usize) -> Result<()> {
        let start = colon + 1;
        let digits = self.count_digits(start, 6);
        let end = start + digits;

        if (1..6).contains(&digits) && matches!(self.bytes().get(end), None | Some(b'/')) {
            match self.s[start..end].parse::<u16>() {
                Ok(port) => self.out.port = Some(port),
                Err(_) => err!(start, InvalidPort),
            }
            self.read_str("//");
        } else if digits == 0 && start == self.len() {
            err!(start, InvalidPort);
        } else if !self.read_str("//") {
            return self.parse_from_path();
        }
        self.parse_from_authority()
    }

    fn parse_from_authority_or_path(&mut self) -> Result<()> {
        if self.read_str("//") {
            self.parse_from_authority()
        } else {
            self.parse_from_path()
        }
    }

    fn parse_from_authority(&mut self) -> Result<()> {
        let s = self.s;
        let start = self.pos;
        let end = s[start..]
            .find(|c| matches!(c, '/' | '?' | '#'))
            .map_or(s.len(), |i| start + i);

        let mut host_start = start;
        if let Some(i) = s[start..end].rfind('@') {
            let userinfo = &s[start..start + i];
            match userinfo.split_once(':') {
                Some((user, password)) => {
                    self.out.user = Some(user);
                    self.out.password = Some(password);
                }
                None => self.out.user = Some(userinfo),
            }
            host_start = start + i + 1;
        }

        let host = &s[host_start..end];
        let mut host_end = end;
        // An IP literal has colons of its own and never carries a port inside the brackets.
        if !(host.starts_with('[') && host.ends_with(']')) {
            if let Some(i) = host.rfind(':') {
                host_end = host_start + i;
                // A port read earlier wins.
                if self.out.port.is_none() {
                    let port_start = host_end + 1;
                    let port = &s[port_start..end];
                    if port.len() > 5 {
                        err!(port_start, InvalidPort);
                    }
                    if !port.is_empty() {
                        match parse_port(port) {
                            Some(port) => self.out.port = Some(port),
                            None => err!(port_start, InvalidPort),
                        }
                    }
                }
            }
        }

        if host_end == host_start {
            err!(host_start, EmptyHost);
        }
        self.out.host = Some(&s[host_start..host_end]);

        // INVARIANT: `end` is at a delimiter or the end of input.
        self.skip(end - start);
        if self.has_remaining() {
            self.parse_from_path()
        } else {
            Ok(())
        }
    }

    fn parse_from_path(&mut self) -> Result<()> {
        let s = self.s;
        let start = self.pos;
        let mut end = s.len();

        if let Some(i) = s[start..].find('#') {
            self.out.fragment = Some(&s[start + i + 1..]);
            end = start + i;
        }

        if let Some(i) = s[start..end].find('?') {
            self.out.query = Some(&s[start + i + 1..end]);
            end = start + i;
        }

        if start < end || start == s.len() {
            self.out.path = Some(&s[start..end]);
        }

        // INVARIANT: Everything is consumed.
        self.skip(s.len() - start);
        Ok(())
    }
}
