use std::fmt::{Display, Formatter};

/// Literal token TMDB uses for the unscaled upload.
pub const ORIGINAL: &str = "original";

/// Parsed form of a TMDB image size token such as `"w780"` or `"h632"`.
///
/// Parsing never fails. Tokens that are neither width, height, nor the
/// original marker are kept verbatim in [`SizeToken::Other`] so they render
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SizeToken {
    /// `w<N>`: scaled to N pixels wide.
    Width(u32),
    /// `h<N>`: scaled to N pixels high.
    Height(u32),
    /// The unscaled upload.
    Original,
    Other(String),
}

impl SizeToken {
    pub fn parse(token: &str) -> Self {
        if token == ORIGINAL {
            return Self::Original;
        }
        if let Some(width) = token.strip_prefix('w').and_then(parse_pixels) {
            return Self::Width(width);
        }
        if let Some(height) = token.strip_prefix('h').and_then(parse_pixels) {
            return Self::Height(height);
        }
        Self::Other(token.to_owned())
    }

    /// Pixel width for `w<N>` tokens. Heights and the original marker have
    /// no comparable width.
    pub const fn width(&self) -> Option<u32> {
        match self {
            Self::Width(w) => Some(*w),
            _ => None,
        }
    }

    pub const fn is_original(&self) -> bool {
        matches!(self, Self::Original)
    }

    /// Wire representation, as used in the URL path.
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Width(w) => format!("w{w}").into(),
            Self::Height(h) => format!("h{h}").into(),
            Self::Original => ORIGINAL.into(),
            Self::Other(raw) => raw.as_str().into(),
        }
    }
}

// Digits only: `str::parse::<u32>` alone would also accept a leading '+'.
fn parse_pixels(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl From<&str> for SizeToken {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl Display for SizeToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width(w) => write!(f, "w{w}"),
            Self::Height(h) => write!(f, "h{h}"),
            Self::Original => f.write_str(ORIGINAL),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}
