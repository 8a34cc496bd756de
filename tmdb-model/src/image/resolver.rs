//! Picks a size variant for a requested width and builds the image URL.
//!
//! Selection never fails: whenever no `w<N>` variant is at least as wide as
//! the request, or no width is requested at all, the literal `"original"`
//! token is used. The fallback is not looked up in the size list, so a
//! configuration without an `"original"` entry still yields that segment.

use url::Url;

use super::{ImageCategory, ImagesConfiguration, SizeToken, sizes::ORIGINAL};

/// Choose the tightest `w<N>` token whose width is at least `ideal_width`.
///
/// `sizes` is expected in ascending order; the first qualifying token in
/// list order wins. Height tokens, `"original"`, and unrecognised tokens are
/// never matched.
pub fn select_size(sizes: &[String], ideal_width: Option<u32>) -> &str {
    let Some(ideal_width) = ideal_width else {
        return ORIGINAL;
    };

    let selected = sizes.iter().find(|token| {
        SizeToken::parse(token)
            .width()
            .is_some_and(|width| width >= ideal_width)
    });

    match selected {
        Some(token) => token.as_str(),
        None => {
            tracing::debug!(
                ideal_width,
                available = sizes.len(),
                "no size wide enough, using original"
            );
            ORIGINAL
        }
    }
}

/// Join `base`, `size` and `path` into a single URL.
///
/// Leading separators on `path` are dropped so `/image.jpg` does not
/// produce an empty segment.
pub fn compose_url(base: &Url, size: &str, path: &str) -> Option<Url> {
    let relative = path.trim_start_matches('/');
    let mut url = base.clone();

    let appended = match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().push(size).extend(relative.split('/'));
            true
        }
        Err(()) => false,
    };
    if appended {
        return Some(url);
    }

    // Cannot-be-a-base URLs have no segment list; fall back to plain text.
    let mut joined = base.as_str().to_owned();
    if !joined.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(size);
    joined.push('/');
    joined.push_str(relative);

    match Url::parse(&joined) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(%base, size, path, %err, "could not compose image url");
            None
        }
    }
}

impl ImagesConfiguration {
    /// Resolve `path` against the size list of `category`.
    ///
    /// Returns `None` only when `path` is `None`. Without an `ideal_width`
    /// the original variant is used.
    pub fn image_url(
        &self,
        category: ImageCategory,
        path: Option<&str>,
        ideal_width: Option<u32>,
    ) -> Option<Url> {
        let path = path?;
        let size = select_size(self.sizes(category), ideal_width);
        tracing::trace!(%category, ?ideal_width, size, "selected image size");
        compose_url(&self.secure_base_url, size, path)
    }

    pub fn backdrop_url(
        &self,
        path: Option<&str>,
        ideal_width: Option<u32>,
    ) -> Option<Url> {
        self.image_url(ImageCategory::Backdrop, path, ideal_width)
    }

    pub fn logo_url(
        &self,
        path: Option<&str>,
        ideal_width: Option<u32>,
    ) -> Option<Url> {
        self.image_url(ImageCategory::Logo, path, ideal_width)
    }

    pub fn poster_url(
        &self,
        path: Option<&str>,
        ideal_width: Option<u32>,
    ) -> Option<Url> {
        self.image_url(ImageCategory::Poster, path, ideal_width)
    }

    pub fn profile_url(
        &self,
        path: Option<&str>,
        ideal_width: Option<u32>,
    ) -> Option<Url> {
        self.image_url(ImageCategory::Profile, path, ideal_width)
    }

    pub fn still_url(
        &self,
        path: Option<&str>,
        ideal_width: Option<u32>,
    ) -> Option<Url> {
        self.image_url(ImageCategory::Still, path, ideal_width)
    }
}
