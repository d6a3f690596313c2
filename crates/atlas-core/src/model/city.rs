// crates/atlas-core/src/model/city.rs
use super::lenient;
use super::{Coordinates, Names};
use serde::{Deserialize, Serialize};

/// A city detail document (`data/miasta/<id>.json`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    #[serde(rename = "podstawowe_informacje", default, deserialize_with = "lenient::group")]
    pub basics: Option<CityBasics>,
    #[serde(rename = "lokalizacja", default, deserialize_with = "lenient::group")]
    pub location: Option<CityLocation>,
    #[serde(rename = "demografia", default, deserialize_with = "lenient::group")]
    pub demographics: Option<CityDemographics>,
    #[serde(rename = "geografia", default, deserialize_with = "lenient::group")]
    pub geography: Option<CityGeography>,
    #[serde(rename = "turystyka", default, deserialize_with = "lenient::group")]
    pub tourism: Option<CityTourism>,
    #[serde(rename = "historia", default, deserialize_with = "lenient::group")]
    pub history: Option<CityHistory>,
    #[serde(default, deserialize_with = "lenient::group")]
    pub transport: Option<Transport>,
    #[serde(rename = "kultura", default, deserialize_with = "lenient::group")]
    pub culture: Option<Culture>,
    #[serde(rename = "atrakcje_glowne", default, deserialize_with = "lenient::group")]
    pub main_attractions: Option<MainAttractions>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityBasics {
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::group")]
    pub name: Option<Names>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityLocation {
    /// Back-reference to the owning country.
    #[serde(rename = "kraj_id", default, deserialize_with = "lenient::text")]
    pub country_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityDemographics {
    #[serde(rename = "populacja", default, deserialize_with = "lenient::number")]
    pub population: Option<f64>,
    #[serde(rename = "gestosc_na_km2", default, deserialize_with = "lenient::number")]
    pub density_per_km2: Option<f64>,
    #[serde(rename = "aglomeracja", default, deserialize_with = "lenient::number")]
    pub metro_population: Option<f64>,
    #[serde(rename = "jezyk_urzedowy", default, deserialize_with = "lenient::text")]
    pub official_language: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityGeography {
    #[serde(rename = "wspolrzedne", default, deserialize_with = "lenient::group")]
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "powierzchnia_km2", default, deserialize_with = "lenient::number")]
    pub area_km2: Option<f64>,
    #[serde(rename = "wysokosc_npm", default, deserialize_with = "lenient::number")]
    pub elevation_m: Option<f64>,
    #[serde(rename = "klimat", default, deserialize_with = "lenient::text")]
    pub climate: Option<String>,
    #[serde(rename = "strefa_czasowa", default, deserialize_with = "lenient::text")]
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityTourism {
    #[serde(rename = "obiekty_unesco", default, deserialize_with = "lenient::number")]
    pub unesco_sites: Option<f64>,
    #[serde(rename = "liczba_turystow_rocznie", default, deserialize_with = "lenient::number")]
    pub annual_visitors: Option<f64>,
    #[serde(rename = "najwazniejsze_atrakcje_ids", default, deserialize_with = "lenient::strings")]
    pub top_attraction_ids: Vec<String>,
    #[serde(rename = "sredni_czas_pobytu_dni", default, deserialize_with = "lenient::number")]
    pub average_stay_days: Option<f64>,
    #[serde(rename = "najlepszy_czas_wizyty", default, deserialize_with = "lenient::group")]
    pub best_time: Option<CityBestTime>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityBestTime {
    #[serde(rename = "najlepsze_miesiace", default, deserialize_with = "lenient::strings")]
    pub best_months: Vec<String>,
    #[serde(rename = "unikaj", default, deserialize_with = "lenient::strings")]
    pub avoid: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CityHistory {
    #[serde(rename = "zalozone", default, deserialize_with = "lenient::text")]
    pub founded: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transport {
    #[serde(rename = "lotniska", default, deserialize_with = "lenient::list")]
    pub airports: Vec<Airport>,
    #[serde(default, deserialize_with = "lenient::group")]
    pub metro: Option<Metro>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Airport {
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "kod_IATA", default, deserialize_with = "lenient::text")]
    pub iata: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Metro {
    #[serde(rename = "liczba_linii", default, deserialize_with = "lenient::number")]
    pub lines: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Culture {
    #[serde(rename = "muzea", default, deserialize_with = "lenient::group")]
    pub museums: Option<Museums>,
    #[serde(rename = "uniwersytety", default, deserialize_with = "lenient::strings")]
    pub universities: Vec<String>,
    #[serde(rename = "teatry", default, deserialize_with = "lenient::strings")]
    pub theatres: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Museums {
    #[serde(rename = "liczba", default, deserialize_with = "lenient::number")]
    pub count: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MainAttractions {
    #[serde(rename = "top_10_ids", default, deserialize_with = "lenient::strings")]
    pub top_ids: Vec<String>,
}

impl City {
    fn names(&self) -> Option<&Names> {
        self.basics.as_ref().and_then(|b| b.name.as_ref())
    }

    pub fn display_name(&self) -> &str {
        self.names().map(Names::display).unwrap_or("")
    }

    pub fn popular_name(&self) -> &str {
        self.names()
            .and_then(|n| n.popular.as_deref())
            .unwrap_or("")
    }

    pub fn official_name(&self) -> &str {
        self.names()
            .and_then(|n| n.official.as_deref())
            .unwrap_or("")
    }

    pub fn country_id(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.country_id.as_deref())
    }

    pub fn population(&self) -> Option<f64> {
        self.demographics.as_ref().and_then(|d| d.population)
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        self.geography
            .as_ref()
            .and_then(|g| g.coordinates.as_ref())
    }

    pub fn area_km2(&self) -> Option<f64> {
        self.geography.as_ref().and_then(|g| g.area_km2)
    }

    pub fn unesco_sites(&self) -> Option<f64> {
        self.tourism.as_ref().and_then(|t| t.unesco_sites)
    }

    /// `true` when the city lists at least one UNESCO site.
    pub fn has_unesco(&self) -> bool {
        self.unesco_sites().is_some_and(|n| n > 0.0)
    }

    pub fn annual_visitors(&self) -> Option<f64> {
        self.tourism.as_ref().and_then(|t| t.annual_visitors)
    }

    pub fn top_attraction_ids(&self) -> &[String] {
        self.tourism
            .as_ref()
            .map(|t| t.top_attraction_ids.as_slice())
            .unwrap_or(&[])
    }
}
