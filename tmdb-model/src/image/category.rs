use std::fmt::{Display, Formatter};

/// Image kinds that carry their own size list in the TMDB configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageCategory {
    /// Wide background art (16:9)
    Backdrop,
    /// Transparent title/network logos
    Logo,
    /// Key art (2:3)
    Poster,
    /// Person headshots
    Profile,
    /// Episode stills
    Still,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 5] = [
        Self::Backdrop,
        Self::Logo,
        Self::Poster,
        Self::Profile,
        Self::Still,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Logo => "logo",
            Self::Poster => "poster",
            Self::Profile => "profile",
            Self::Still => "still",
        }
    }
}

impl Display for ImageCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
