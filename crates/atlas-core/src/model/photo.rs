// crates/atlas-core/src/model/photo.rs
use super::lenient;
use super::EntityKind;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

/// The gallery document: `{"zdjecia": [...]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhotoDocument {
    #[serde(rename = "zdjecia", default, deserialize_with = "lenient::list")]
    pub photos: Vec<Photo>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(rename = "tytul", default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(rename = "autor", default, deserialize_with = "lenient::text")]
    pub author: Option<String>,
    #[serde(rename = "data", default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(rename = "opis", default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "tagi", default, deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
    #[serde(rename = "miniatura", default, deserialize_with = "lenient::text")]
    pub thumbnail: Option<String>,
    #[serde(rename = "pelny_rozmiar", default, deserialize_with = "lenient::text")]
    pub full_size: Option<String>,
    #[serde(rename = "powiazania", default, deserialize_with = "lenient::group")]
    pub associations: Option<Associations>,
}

/// Ids of the entities a photo depicts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Associations {
    #[serde(rename = "kraje_ids", default, deserialize_with = "lenient::strings")]
    pub country_ids: Vec<String>,
    #[serde(rename = "miasta_ids", default, deserialize_with = "lenient::strings")]
    pub city_ids: Vec<String>,
    #[serde(rename = "obiekty_ids", default, deserialize_with = "lenient::strings")]
    pub attraction_ids: Vec<String>,
}

impl Photo {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    /// Association list for one entity kind. Photos never link to photos.
    pub fn linked_ids(&self, kind: EntityKind) -> &[String] {
        let Some(a) = self.associations.as_ref() else {
            return &[];
        };
        match kind {
            EntityKind::Country => &a.country_ids,
            EntityKind::City => &a.city_ids,
            EntityKind::Attraction => &a.attraction_ids,
            EntityKind::Photo => &[],
        }
    }

    pub fn depicts(&self, kind: EntityKind, id: &str) -> bool {
        self.linked_ids(kind).iter().any(|x| x == id)
    }

    /// Capture date, accepting `YYYY-MM-DD` optionally followed by a time part.
    pub fn parsed_date(&self) -> Option<Date> {
        let raw = self.date.as_deref()?.trim();
        let day = raw.get(..10).unwrap_or(raw);
        Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn associations_and_dates() {
        let doc: PhotoDocument = serde_json::from_str(
            r#"{"zdjecia": [
                {"id": "P1", "tytul": "Koloseum o zmierzchu", "data": "2023-06-14T18:00:00",
                 "powiazania": {"obiekty_ids": ["A1", "A2"], "kraje_ids": ["KRAJ-IT-001"]}},
                {"id": "P2", "data": "wczoraj"},
                {"tytul": "no id, dropped"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(doc.photos.len(), 2);
        let p1 = &doc.photos[0];
        assert!(p1.depicts(EntityKind::Attraction, "A2"));
        assert!(!p1.depicts(EntityKind::City, "A2"));
        assert_eq!(p1.parsed_date().map(|d| d.year()), Some(2023));
        assert!(doc.photos[1].parsed_date().is_none());
        assert!(doc.photos[1].linked_ids(EntityKind::Country).is_empty());
    }
}
