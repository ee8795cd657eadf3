// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity photo records.
//!
//! Strava keys photo URLs by pixel size (`"100"`, `"600"`). Those keys are
//! not valid Rust identifiers, so `PhotoUrls` maps between wire keys and
//! struct slots through `SIZE_KEYS` at the serialization boundary.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Photo rendition sizes published by Strava.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoSize {
    Px100,
    Px600,
}

/// Wire key for each photo size, in serialization order.
const SIZE_KEYS: [(PhotoSize, &str); 2] = [(PhotoSize::Px100, "100"), (PhotoSize::Px600, "600")];

impl PhotoSize {
    pub const ALL: [PhotoSize; 2] = [PhotoSize::Px100, PhotoSize::Px600];

    /// The JSON key Strava uses for this size.
    pub fn wire_key(self) -> &'static str {
        SIZE_KEYS
            .iter()
            .find(|(size, _)| *size == self)
            .map(|(_, key)| *key)
            .unwrap_or_default()
    }

    pub fn from_wire_key(key: &str) -> Option<Self> {
        SIZE_KEYS
            .iter()
            .find(|(_, wire)| *wire == key)
            .map(|(size, _)| *size)
    }

    fn slot(self) -> usize {
        match self {
            PhotoSize::Px100 => 0,
            PhotoSize::Px600 => 1,
        }
    }
}

/// URLs of the photo renditions. Both sizes are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUrls {
    pub size_100: String,
    pub size_600: String,
}

impl PhotoUrls {
    pub fn get(&self, size: PhotoSize) -> &str {
        match size {
            PhotoSize::Px100 => &self.size_100,
            PhotoSize::Px600 => &self.size_600,
        }
    }
}

impl Serialize for PhotoUrls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SIZE_KEYS.len()))?;
        for (size, key) in SIZE_KEYS {
            map.serialize_entry(key, self.get(size))?;
        }
        map.end()
    }
}

struct PhotoUrlsVisitor;

impl<'de> Visitor<'de> for PhotoUrlsVisitor {
    type Value = PhotoUrls;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of photo URLs keyed by \"100\" and \"600\"")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PhotoUrls, A::Error> {
        let mut slots: [Option<String>; 2] = [None, None];

        while let Some(key) = map.next_key::<String>()? {
            match PhotoSize::from_wire_key(&key) {
                Some(size) => {
                    let slot = &mut slots[size.slot()];
                    if slot.is_some() {
                        return Err(de::Error::duplicate_field(size.wire_key()));
                    }
                    *slot = Some(map.next_value()?);
                }
                // Strava occasionally adds renditions; they are not modelled.
                None => {
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        let [size_100, size_600] = slots;
        Ok(PhotoUrls {
            size_100: size_100
                .ok_or_else(|| de::Error::missing_field(PhotoSize::Px100.wire_key()))?,
            size_600: size_600
                .ok_or_else(|| de::Error::missing_field(PhotoSize::Px600.wire_key()))?,
        })
    }
}

impl<'de> Deserialize<'de> for PhotoUrls {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PhotoUrlsVisitor)
    }
}

/// Individual photo attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: Option<u64>,
    pub unique_id: String,
    pub urls: PhotoUrls,
    pub source: u32,
}

/// Photo summary block of a detailed activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photos {
    #[serde(default)]
    pub primary: Option<Photo>,
    pub use_primary_photo: bool,
    pub count: u32,
}
