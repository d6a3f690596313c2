// crates/atlas-core/src/model/index.rs
use super::lenient;
use serde::{Deserialize, Serialize};

/// Lightweight per-type manifest: `{"items": [{"id": ..., "name": ...}, ...]}`.
///
/// Index documents drive discovery of the detail documents and provide the
/// `{id, name}` pairs used by the relation resolver and the global search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexDocument {
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<IndexItem>,
}

/// One summary row of an index document.
///
/// Both the English and the Polish spelling of each key are accepted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexItem {
    pub id: String,
    #[serde(default, alias = "nazwa", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, alias = "nazwa_oficjalna", deserialize_with = "lenient::text")]
    pub official_name: Option<String>,
    #[serde(default, alias = "kontynent", deserialize_with = "lenient::text")]
    pub continent: Option<String>,
    #[serde(default, alias = "kraj", deserialize_with = "lenient::text")]
    pub country: Option<String>,
    #[serde(default, alias = "kategoria", deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, alias = "lokalizacja", deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, alias = "flaga", deserialize_with = "lenient::text")]
    pub flag: Option<String>,
}

impl IndexItem {
    /// Display name, falling back to the official name and finally the id.
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.official_name.as_deref())
            .unwrap_or(&self.id)
    }

    pub fn official_name(&self) -> &str {
        self.official_name.as_deref().unwrap_or("")
    }
}

/// Per-category attraction manifest: `{"files": ["koloseum.json", ...]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryIndex {
    #[serde(default, alias = "pliki", deserialize_with = "lenient::strings")]
    pub files: Vec<String>,
}
