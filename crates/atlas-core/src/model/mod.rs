// crates/atlas-core/src/model/mod.rs

//! # Data Model
//!
//! Typed, partial views over the externally supplied JSON documents. Every
//! nested group is an `Option` and every leaf is tolerant (see [`lenient`]),
//! so an absent or malformed field means "unknown" and never rejects the
//! record. Only a missing `id` makes a document unusable.
//!
//! Entities are read-only snapshots; nothing in this crate mutates them after
//! ingestion.

pub mod attraction;
pub mod city;
pub mod country;
pub mod index;
pub mod lenient;
pub mod photo;

pub use attraction::Attraction;
pub use city::City;
pub use country::Country;
pub use index::{CategoryIndex, IndexDocument, IndexItem};
pub use photo::{Photo, PhotoDocument};

use serde::{Deserialize, Serialize};

/// Name block shared by countries and cities.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Names {
    #[serde(rename = "popularna", default, deserialize_with = "lenient::text")]
    pub popular: Option<String>,
    #[serde(rename = "oficjalna", default, deserialize_with = "lenient::text")]
    pub official: Option<String>,
    #[serde(rename = "lokalna", default, deserialize_with = "lenient::text")]
    pub local: Option<String>,
}

impl Names {
    /// Popular name, falling back to the official one.
    pub fn display(&self) -> &str {
        self.popular
            .as_deref()
            .or(self.official.as_deref())
            .unwrap_or("")
    }
}

/// A `{lat, lon}` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient::number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lon: Option<f64>,
}

impl Coordinates {
    /// Both components, or `None` when either is unknown.
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lon?))
    }
}

/// The four entity types of the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Country,
    City,
    Attraction,
    Photo,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::City => "city",
            EntityKind::Attraction => "attraction",
            EntityKind::Photo => "photo",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = crate::AtlasError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "country" | "countries" | "kraje" => Ok(EntityKind::Country),
            "city" | "cities" | "miasta" => Ok(EntityKind::City),
            "attraction" | "attractions" | "atrakcje" | "building" => Ok(EntityKind::Attraction),
            "photo" | "photos" | "zdjecia" => Ok(EntityKind::Photo),
            other => Err(crate::AtlasError::InvalidData(format!(
                "unknown entity kind: {other}"
            ))),
        }
    }
}
