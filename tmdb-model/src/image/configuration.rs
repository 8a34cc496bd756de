use url::Url;

use super::ImageCategory;

const TMDB_IMAGE_BASE: &str = "http://image.tmdb.org/t/p/";
const TMDB_SECURE_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Image section of TMDB's `/configuration` response.
///
/// Each size list is ordered from smallest to largest and conventionally
/// ends with `"original"`. The value is built once per client session and
/// never mutated, so it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImagesConfiguration {
    /// Plain-http prefix. Kept for completeness; generated URLs always use
    /// `secure_base_url`.
    pub base_url: Url,
    pub secure_base_url: Url,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrop_sizes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub logo_sizes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_sizes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile_sizes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub still_sizes: Vec<String>,
}

impl ImagesConfiguration {
    /// Configuration with the given base URLs and no size lists. Every
    /// resolved URL falls back to the original variant until sizes are set.
    pub fn new(base_url: Url, secure_base_url: Url) -> Self {
        Self {
            base_url,
            secure_base_url,
            backdrop_sizes: Vec::new(),
            logo_sizes: Vec::new(),
            poster_sizes: Vec::new(),
            profile_sizes: Vec::new(),
            still_sizes: Vec::new(),
        }
    }

    /// Like [`ImagesConfiguration::new`], parsing both base URLs.
    pub fn from_base_urls(
        base_url: &str,
        secure_base_url: &str,
    ) -> crate::Result<Self> {
        Ok(Self::new(Url::parse(base_url)?, Url::parse(secure_base_url)?))
    }

    /// Ordered size tokens available for `category`.
    pub fn sizes(&self, category: ImageCategory) -> &[String] {
        match category {
            ImageCategory::Backdrop => &self.backdrop_sizes,
            ImageCategory::Logo => &self.logo_sizes,
            ImageCategory::Poster => &self.poster_sizes,
            ImageCategory::Profile => &self.profile_sizes,
            ImageCategory::Still => &self.still_sizes,
        }
    }

    pub fn with_sizes<I, S>(mut self, category: ImageCategory, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sizes = sizes.into_iter().map(Into::into).collect();
        match category {
            ImageCategory::Backdrop => self.backdrop_sizes = sizes,
            ImageCategory::Logo => self.logo_sizes = sizes,
            ImageCategory::Poster => self.poster_sizes = sizes,
            ImageCategory::Profile => self.profile_sizes = sizes,
            ImageCategory::Still => self.still_sizes = sizes,
        }
        self
    }

    /// Decode the `images` object of a `/configuration` response.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_owned()).collect()
}

impl Default for ImagesConfiguration {
    /// TMDB's published image configuration.
    fn default() -> Self {
        Self {
            base_url: Url::parse(TMDB_IMAGE_BASE)
                .expect("TMDB image base is a valid URL"),
            secure_base_url: Url::parse(TMDB_SECURE_IMAGE_BASE)
                .expect("TMDB secure image base is a valid URL"),
            backdrop_sizes: strings(&["w300", "w780", "w1280", "original"]),
            logo_sizes: strings(&[
                "w45", "w92", "w154", "w185", "w300", "w500", "original",
            ]),
            poster_sizes: strings(&[
                "w92", "w154", "w185", "w342", "w500", "w780", "original",
            ]),
            profile_sizes: strings(&["w45", "w185", "h632", "original"]),
            still_sizes: strings(&["w92", "w185", "w300", "original"]),
        }
    }
}

/// Full body of TMDB's `/configuration` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiConfiguration {
    pub images: ImagesConfiguration,
    /// Field names reported by the `/changes` endpoints.
    #[cfg_attr(feature = "serde", serde(default))]
    pub change_keys: Vec<String>,
}

impl ApiConfiguration {
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
