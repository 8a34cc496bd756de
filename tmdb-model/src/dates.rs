//! Fixed date formats used on TMDB's wire format.
//!
//! Calendar dates (`release_date`, `air_date`, `birthday`) are plain
//! `yyyy-MM-dd`. Timestamps (`created_at`, `updated_at`) are UTC with
//! exactly three fractional digits and a literal `Z`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{ModelError, Result};

/// `yyyy-MM-dd`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| {
        ModelError::InvalidDate {
            input: input.to_owned(),
            source,
        }
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ModelError::InvalidDate {
            input: input.to_owned(),
            source,
        })
}

/// Render with millisecond precision; finer sub-second digits are dropped.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// `#[serde(with = ...)]` adapters for the formats above.
#[cfg(feature = "serde")]
pub mod serde {
    pub mod date {
        use ::serde::{Deserialize, Deserializer, Serializer, de::Error as _};
        use chrono::NaiveDate;

        pub fn serialize<S: Serializer>(
            date: &NaiveDate,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&crate::dates::format_date(*date))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<NaiveDate, D::Error> {
            let raw = String::deserialize(deserializer)?;
            crate::dates::parse_date(&raw).map_err(D::Error::custom)
        }
    }

    /// TMDB sends `""` rather than `null` for unknown dates; both decode to
    /// `None`. Pair with `#[serde(default)]` to also accept a missing field.
    pub mod optional_date {
        use ::serde::{Deserialize, Deserializer, Serializer, de::Error as _};
        use chrono::NaiveDate;

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => {
                    serializer.serialize_str(&crate::dates::format_date(*date))
                }
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.is_empty() => crate::dates::parse_date(&raw)
                    .map(Some)
                    .map_err(D::Error::custom),
                _ => Ok(None),
            }
        }
    }

    pub mod timestamp {
        use ::serde::{Deserialize, Deserializer, Serializer, de::Error as _};
        use chrono::{DateTime, Utc};

        pub fn serialize<S: Serializer>(
            timestamp: &DateTime<Utc>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer
                .serialize_str(&crate::dates::format_timestamp(timestamp))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<DateTime<Utc>, D::Error> {
            let raw = String::deserialize(deserializer)?;
            crate::dates::parse_timestamp(&raw).map_err(D::Error::custom)
        }
    }
}
