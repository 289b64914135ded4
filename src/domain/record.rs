//! Podcast record domain model.
//!
//! A [`Record`] is one immutable catalog entry as delivered by the record
//! supplier. Records are never mutated after they are decoded; a refresh replaces
//! the whole list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable, unique identifier of a record.
///
/// The podcast API sends identifiers as strings (`"10716"`), but numeric ids are
/// accepted too and normalized to their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// One podcast show in the catalog.
///
/// Optional attributes mirror what the supplier may omit: a record without a
/// title never matches an active search, a record without genres never matches a
/// concrete genre selection, a missing season count reads as 0 and a missing or
/// unparseable `updated` timestamp sorts as the oldest possible date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<u32>>,
    #[serde(default)]
    pub seasons: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated: Option<DateTime<Utc>>,
}

impl Record {
    /// Creates a record with the given id and title and every optional field empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use podshelf::domain::Record;
    ///
    /// let record = Record::new("42", "The Daily Byte");
    /// assert_eq!(record.title.as_deref(), Some("The Daily Byte"));
    /// assert_eq!(record.season_count(), 0);
    /// ```
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            title: Some(title.into()),
            image: String::new(),
            description: None,
            genres: None,
            seasons: None,
            updated: None,
        }
    }

    /// Season count, with an absent value reading as 0.
    #[must_use]
    pub fn season_count(&self) -> u32 {
        self.seasons.unwrap_or(0)
    }

    /// Genre identifiers, empty when the supplier sent none.
    #[must_use]
    pub fn genre_ids(&self) -> &[u32] {
        self.genres.as_deref().unwrap_or(&[])
    }

    /// Title for display, empty when absent.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Last-updated date formatted like "January 5, 2024", or "Unknown".
    #[must_use]
    pub fn formatted_updated(&self) -> String {
        self.updated
            .map_or_else(|| "Unknown".to_string(), |ts| ts.format("%B %-d, %Y").to_string())
    }

    /// "1 season" / "N seasons".
    #[must_use]
    pub fn seasons_label(&self) -> String {
        match self.season_count() {
            1 => "1 season".to_string(),
            n => format!("{n} seasons"),
        }
    }
}

/// Reads an optional string, with `null` as empty text.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 timestamps and degrades anything else to `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|text| match DateTime::parse_from_rfc3339(text.trim()) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(value = %text, error = %e, "unparseable updated timestamp");
            None
        }
    }))
}
