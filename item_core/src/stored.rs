//! Lenient readers for loosely typed stored item fields
//!
//! Host documents store empty number inputs as `null`, and older documents
//! may hold floats or numeric strings. None of these may reject an item.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A stored number in any of the shapes the host writes
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl StoredNumber {
    fn to_i32(&self) -> i32 {
        match self {
            StoredNumber::Int(v) => clamp(*v),
            // `as` saturates and maps NaN to 0
            StoredNumber::Float(v) => v.trunc() as i32,
            StoredNumber::Text(s) => s.trim().parse::<f64>().map_or(0, |v| v.trunc() as i32),
            StoredNumber::Other(_) => 0,
        }
    }
}

fn clamp(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFlag {
    Bool(bool),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredText {
    Text(String),
    Other(IgnoredAny),
}

/// Numeric field: `null` and unreadable values read as 0
pub(crate) fn number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StoredNumber::deserialize(deserializer)?.to_i32())
}

/// Boolean field: anything but a boolean reads as `false`
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(StoredFlag::deserialize(deserializer)?, StoredFlag::Bool(true)))
}

/// Optional boolean field: anything but a boolean reads as absent
pub(crate) fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StoredFlag::deserialize(deserializer)? {
        StoredFlag::Bool(b) => Some(b),
        StoredFlag::Other(_) => None,
    })
}

/// Text field: `null` reads as empty
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StoredText::deserialize(deserializer)? {
        StoredText::Text(s) => s,
        StoredText::Other(_) => String::new(),
    })
}
