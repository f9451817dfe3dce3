//! Text representation: the `"(re,im)"` format and its strict parser.

use crate::Complex;
use core::fmt;
use core::num::ParseFloatError;
use core::str::FromStr;

const FORMAT_START: u8 = b'(';
const FORMAT_END: u8 = b')';
const FORMAT_SEP: u8 = b',';
/// Shortest parsable input: `"(0,0)"`.
const FORMAT_MIN_LEN: usize = 5;
/// Least index the separator can sit at: `"(x,x)"`.
const BEFORE_SEP: usize = 2;

impl fmt::Display for Complex {
    /// Formats as `"(re,im)"`, each part in the shortest decimal form that
    /// parses back to the same bits. Together with the strict parser this
    /// gives an exact round trip for finite parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.re, self.im)
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    /// Parses the format produced by `Display`: a start and end parenthesis
    /// surrounding two numeric parts split by a comma. Leading and trailing
    /// spaces are allowed around each part; each part is parsed by
    /// `f64::from_str`.
    ///
    /// ```
    /// use cnum::Complex;
    ///
    /// assert_eq!("(1e300,-1.1e-2)".parse(), Ok(Complex::new(1e300, -1.1e-2)));
    /// assert_eq!("( -0.0 , 4.5 )".parse(), Ok(Complex::new(-0.0, 4.5)));
    /// assert!("(1,2,3)".parse::<Complex>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let len = bytes.len();
        if len < FORMAT_MIN_LEN {
            return Err(ParseComplexError::new(ErrorKind::Format));
        }
        if bytes[0] != FORMAT_START {
            return Err(ParseComplexError::new(ErrorKind::Start));
        }
        if bytes[len - 1] != FORMAT_END {
            return Err(ParseComplexError::new(ErrorKind::End));
        }

        // The separator must be at least 2 characters from either end:
        // search backwards ignoring the last two.
        let sep = match bytes[..len - 2].iter().rposition(|&b| b == FORMAT_SEP) {
            Some(sep) if sep >= BEFORE_SEP => sep,
            _ => return Err(ParseComplexError::new(ErrorKind::Separator)),
        };
        if bytes[sep + 1..].contains(&FORMAT_SEP) {
            return Err(ParseComplexError::new(ErrorKind::DuplicateSeparator));
        }

        // The bounds all sit on ASCII bytes, so the slicing is safe.
        let re_part = &s[1..sep];
        let re = re_part.trim().parse::<f64>().map_err(|cause| {
            ParseComplexError::new(ErrorKind::RealPart(Fragment::new(re_part), cause))
        })?;

        let im_part = &s[sep + 1..len - 1];
        let im = im_part.trim().parse::<f64>().map_err(|cause| {
            ParseComplexError::new(ErrorKind::ImaginaryPart(Fragment::new(im_part), cause))
        })?;

        Ok(Complex::new(re, im))
    }
}

/// Error from parsing a [Complex] out of its `"(re,im)"` text form.
///
/// The message names the violated piece of the grammar; for an unparsable
/// numeric part it quotes the offending fragment and the underlying float
/// parse error, which is also exposed as the error source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseComplexError {
    kind: ErrorKind,
}

impl ParseComplexError {
    fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ErrorKind {
    Format,
    Start,
    End,
    Separator,
    DuplicateSeparator,
    RealPart(Fragment, ParseFloatError),
    ImaginaryPart(Fragment, ParseFloatError),
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Format => write!(f, "expected format '(real,imaginary)'"),
            ErrorKind::Start => write!(f, "expected start '('"),
            ErrorKind::End => write!(f, "expected end ')'"),
            ErrorKind::Separator => {
                write!(f, "expected separator between two numbers ','")
            }
            ErrorKind::DuplicateSeparator => {
                write!(f, "incorrect number of parts, expected only 2 using separator ','")
            }
            ErrorKind::RealPart(fragment, cause) => {
                write!(f, "could not parse real part '{}': {}", fragment.as_str(), cause)
            }
            ErrorKind::ImaginaryPart(fragment, cause) => {
                write!(
                    f,
                    "could not parse imaginary part '{}': {}",
                    fragment.as_str(),
                    cause
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseComplexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::RealPart(_, cause) | ErrorKind::ImaginaryPart(_, cause) => Some(cause),
            _ => None,
        }
    }
}

/// Capacity of the inline fragment buffer in [ParseComplexError].
const FRAGMENT_CAPACITY: usize = 32;

/// The offending substring, truncated into a fixed buffer so the error
/// needs no allocator.
#[derive(Clone, PartialEq, Eq)]
struct Fragment {
    buf: [u8; FRAGMENT_CAPACITY],
    len: u8,
}

impl Fragment {
    fn new(s: &str) -> Self {
        let mut end = s.len().min(FRAGMENT_CAPACITY);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        let mut buf = [0; FRAGMENT_CAPACITY];
        buf[..end].copy_from_slice(&s.as_bytes()[..end]);
        Self {
            buf,
            len: end as u8,
        }
    }

    fn as_str(&self) -> &str {
        // Always a prefix of a str, cut on a char boundary.
        core::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
