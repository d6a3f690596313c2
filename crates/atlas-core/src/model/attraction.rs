// crates/atlas-core/src/model/attraction.rs
use super::lenient::{self, Scalar};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An attraction (building, monument, museum, ...) detail document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    /// Category tag. Injected by the loader from the folder the record was
    /// discovered in (`budynki`, `muzea`, ...).
    #[serde(rename = "kategoria", default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(rename = "podstawowe_informacje", default, deserialize_with = "lenient::group")]
    pub basics: Option<AttractionBasics>,
    #[serde(rename = "lokalizacja", default, deserialize_with = "lenient::group")]
    pub location: Option<AttractionLocation>,
    #[serde(rename = "wymiary", default, deserialize_with = "lenient::group")]
    pub dimensions: Option<Dimensions>,
    #[serde(rename = "budowa", default, deserialize_with = "lenient::group")]
    pub construction: Option<Construction>,
    #[serde(rename = "architektura", default, deserialize_with = "lenient::group")]
    pub architecture: Option<Architecture>,
    #[serde(rename = "kontekst_historyczny", default, deserialize_with = "lenient::group")]
    pub history: Option<HistoricalContext>,
    #[serde(rename = "funkcje", default, deserialize_with = "lenient::group")]
    pub functions: Option<Functions>,
    #[serde(rename = "szczegółowy_opis", default, deserialize_with = "lenient::group")]
    pub description: Option<Description>,
    #[serde(rename = "galeria_zdjęć", default, deserialize_with = "lenient::list")]
    pub gallery: Vec<GalleryImage>,

    /// Lower-cased serialized form of the whole source record.
    #[serde(skip)]
    search_text: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttractionBasics {
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::group")]
    pub name: Option<AttractionName>,
    #[serde(rename = "certyfikaty_oznaczenia", default, deserialize_with = "lenient::group")]
    pub designations: Option<Designations>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttractionName {
    #[serde(rename = "potoczna", default, deserialize_with = "lenient::text")]
    pub common: Option<String>,
    #[serde(rename = "oficjalna", default, deserialize_with = "lenient::text")]
    pub official: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Designations {
    #[serde(rename = "UNESCO", default, deserialize_with = "lenient::truthy")]
    pub unesco: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttractionLocation {
    #[serde(rename = "adres", default, deserialize_with = "lenient::group")]
    pub address: Option<Address>,
    #[serde(rename = "współrzędne", default, deserialize_with = "lenient::group")]
    pub coordinates: Option<GeoPoint>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "miasto", default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(rename = "kraj", default, deserialize_with = "lenient::text")]
    pub country: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "szerokość_geograficzna", default, deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,
    #[serde(rename = "długość_geograficzna", default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "wysokość", default, deserialize_with = "lenient::group")]
    pub height: Option<Measure>,
    #[serde(rename = "długość", default, deserialize_with = "lenient::group")]
    pub length: Option<Measure>,
    #[serde(rename = "szerokość", default, deserialize_with = "lenient::group")]
    pub width: Option<Measure>,
    #[serde(rename = "powierzchnia", default, deserialize_with = "lenient::group")]
    pub area: Option<Measure>,
    #[serde(rename = "kondygnacje", default, deserialize_with = "lenient::group")]
    pub floors: Option<Floors>,
    #[serde(rename = "objetosc", default, deserialize_with = "lenient::group")]
    pub volume: Option<Volume>,
}

/// A measurement given either as a total (`całkowita`) or as an exterior
/// dimension (`zewnętrzna`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Measure {
    #[serde(rename = "całkowita", default, deserialize_with = "lenient::number")]
    pub total: Option<f64>,
    #[serde(rename = "zewnętrzna", default, deserialize_with = "lenient::number")]
    pub exterior: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Floors {
    #[serde(rename = "nadziemne", default, deserialize_with = "lenient::number")]
    pub above_ground: Option<f64>,
    #[serde(rename = "podziemne", default, deserialize_with = "lenient::number")]
    pub below_ground: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Volume {
    #[serde(rename = "calosc_m3", default, deserialize_with = "lenient::number")]
    pub total_m3: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Construction {
    #[serde(rename = "chronologia", default, deserialize_with = "lenient::group")]
    pub timeline: Option<Timeline>,
    #[serde(rename = "czas_budowy_lat", default, deserialize_with = "lenient::scalar")]
    pub duration_years: Option<Scalar>,
    #[serde(rename = "koszt", default, deserialize_with = "lenient::group")]
    pub cost: Option<Cost>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(rename = "rozpoczęcie_budowy", default, deserialize_with = "lenient::scalar")]
    pub started: Option<Scalar>,
    #[serde(rename = "zakończenie_budowy", default, deserialize_with = "lenient::scalar")]
    pub completed: Option<Scalar>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cost {
    #[serde(rename = "szacowany_mln_usd", default, deserialize_with = "lenient::scalar")]
    pub estimated_musd: Option<Scalar>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(rename = "styl_architektoniczny", default, deserialize_with = "lenient::group")]
    pub style: Option<Style>,
    #[serde(rename = "architekci", default, deserialize_with = "lenient::group")]
    pub architects: Option<Architects>,
    #[serde(rename = "materiały_konstrukcyjne", default, deserialize_with = "lenient::group")]
    pub materials: Option<Materials>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Style {
    #[serde(rename = "główny", default, deserialize_with = "lenient::text")]
    pub main: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Architects {
    #[serde(rename = "architekt_główny", default, deserialize_with = "lenient::persons")]
    pub lead: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Materials {
    #[serde(rename = "główne", default, deserialize_with = "lenient::strings")]
    pub main: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoricalContext {
    #[serde(rename = "epoka_historyczna", default, deserialize_with = "lenient::text")]
    pub era: Option<String>,
    #[serde(rename = "kontekst_polityczny", default, deserialize_with = "lenient::text")]
    pub political_context: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Functions {
    #[serde(rename = "turystyczne", default, deserialize_with = "lenient::group")]
    pub tourism: Option<TourismInfo>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TourismInfo {
    #[serde(rename = "liczba_turystów", default, deserialize_with = "lenient::group")]
    pub visitors: Option<VisitorCount>,
    #[serde(rename = "czas_zwiedzania_min", default, deserialize_with = "lenient::number")]
    pub visit_minutes: Option<f64>,
    /// Ticket type -> price, in document order.
    #[serde(rename = "bilety", default, deserialize_with = "lenient::key_values")]
    pub tickets: Vec<(String, String)>,
    /// Day -> hours, in document order.
    #[serde(rename = "godziny_otwarcia", default, deserialize_with = "lenient::key_values")]
    pub opening_hours: Vec<(String, String)>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VisitorCount {
    #[serde(rename = "rocznie", default, deserialize_with = "lenient::number")]
    pub annual: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "tekst_długi", default, deserialize_with = "lenient::text")]
    pub long_text: Option<String>,
    #[serde(rename = "ciekawostki", default, deserialize_with = "lenient::strings")]
    pub trivia: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(rename = "miniatura", default, deserialize_with = "lenient::text")]
    pub thumbnail: Option<String>,
}

impl Attraction {
    /// Builds an attraction from its raw document, tagging it with `category`.
    ///
    /// The tag is written into the record before it is serialized for the
    /// full-text search, so a category name is itself searchable.
    pub fn from_value(mut value: Value, category: Option<&str>) -> Result<Self> {
        if let (Some(cat), Value::Object(map)) = (category, &mut value) {
            map.insert("kategoria".to_owned(), Value::String(cat.to_owned()));
        }
        let search_text = serde_json::to_string(&value)?.to_lowercase();
        let mut attraction: Attraction = serde_json::from_value(value)?;
        attraction.search_text = search_text;
        Ok(attraction)
    }

    /// Lower-cased serialized text of the whole record, as ingested.
    ///
    /// Records built through plain deserialization (without
    /// [`Attraction::from_value`]) have an empty search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Common name, falling back to the official name.
    pub fn display_name(&self) -> &str {
        self.basics
            .as_ref()
            .and_then(|b| b.name.as_ref())
            .and_then(|n| n.common.as_deref().or(n.official.as_deref()))
            .unwrap_or("")
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn address(&self) -> Option<&Address> {
        self.location.as_ref().and_then(|l| l.address.as_ref())
    }

    pub fn city(&self) -> Option<&str> {
        self.address().and_then(|a| a.city.as_deref())
    }

    /// Country *name* from the address block.
    pub fn country(&self) -> Option<&str> {
        self.address().and_then(|a| a.country.as_deref())
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let p = self.location.as_ref()?.coordinates?;
        Some((p.latitude?, p.longitude?))
    }

    pub fn is_unesco(&self) -> bool {
        self.basics
            .as_ref()
            .and_then(|b| b.designations.as_ref())
            .is_some_and(|d| d.unesco)
    }

    pub fn height_m(&self) -> Option<f64> {
        self.dimensions
            .as_ref()
            .and_then(|d| d.height.as_ref())
            .and_then(|h| h.total)
    }

    pub fn construction_start(&self) -> Option<&Scalar> {
        self.construction
            .as_ref()
            .and_then(|c| c.timeline.as_ref())
            .and_then(|t| t.started.as_ref())
    }

    pub fn tourism(&self) -> Option<&TourismInfo> {
        self.functions.as_ref().and_then(|f| f.tourism.as_ref())
    }

    pub fn annual_visitors(&self) -> Option<f64> {
        self.tourism()
            .and_then(|t| t.visitors.as_ref())
            .and_then(|v| v.annual)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.gallery.first().and_then(|g| g.thumbnail.as_deref())
    }
}
