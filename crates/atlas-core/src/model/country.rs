// crates/atlas-core/src/model/country.rs
use super::lenient::{self, Scalar};
use super::{Coordinates, Names};
use serde::{Deserialize, Serialize};

/// A country detail document (`data/kraje/<id>.json`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    #[serde(rename = "podstawowe_informacje", default, deserialize_with = "lenient::group")]
    pub basics: Option<CountryBasics>,
    #[serde(rename = "geografia", default, deserialize_with = "lenient::group")]
    pub geography: Option<CountryGeography>,
    #[serde(rename = "demografia", default, deserialize_with = "lenient::group")]
    pub demographics: Option<CountryDemographics>,
    #[serde(rename = "ekonomia", default, deserialize_with = "lenient::group")]
    pub economy: Option<Economy>,
    #[serde(rename = "turystyka", default, deserialize_with = "lenient::group")]
    pub tourism: Option<CountryTourism>,
    #[serde(rename = "powiazania", default, deserialize_with = "lenient::group")]
    pub relations: Option<CountryRelations>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryBasics {
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::group")]
    pub name: Option<Names>,
    #[serde(rename = "flaga", default, deserialize_with = "lenient::group")]
    pub flag: Option<Flag>,
    #[serde(rename = "stolica", default, deserialize_with = "lenient::group")]
    pub capital: Option<NamedPlace>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Flag {
    #[serde(default, deserialize_with = "lenient::text")]
    pub emoji: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NamedPlace {
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryGeography {
    #[serde(rename = "kontynent", default, deserialize_with = "lenient::text")]
    pub continent: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub region: Option<String>,
    #[serde(rename = "powierzchnia", default, deserialize_with = "lenient::group")]
    pub area: Option<Area>,
    #[serde(rename = "wspolrzedne", default, deserialize_with = "lenient::group")]
    pub coordinates: Option<CountryCoordinates>,
    #[serde(rename = "granice", default, deserialize_with = "lenient::group")]
    pub borders: Option<Borders>,
    #[serde(rename = "klimat", default, deserialize_with = "lenient::group")]
    pub climate: Option<Climate>,
    #[serde(rename = "linia_brzegowa_km", default, deserialize_with = "lenient::number")]
    pub coastline_km: Option<f64>,
    #[serde(rename = "teren", default, deserialize_with = "lenient::group")]
    pub terrain: Option<Terrain>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "calkowita_km2", default, deserialize_with = "lenient::number")]
    pub total_km2: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryCoordinates {
    #[serde(rename = "geograficzne_centrum", default, deserialize_with = "lenient::group")]
    pub center: Option<Coordinates>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Borders {
    #[serde(rename = "kraje_sasiadujace", default, deserialize_with = "lenient::strings")]
    pub neighbouring_countries: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Climate {
    #[serde(rename = "typ", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Terrain {
    #[serde(rename = "najwyzszy_punkt", default, deserialize_with = "lenient::group")]
    pub highest_point: Option<HighestPoint>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HighestPoint {
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "wysokosc_npm", default, deserialize_with = "lenient::number")]
    pub elevation_m: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryDemographics {
    #[serde(rename = "populacja", default, deserialize_with = "lenient::group")]
    pub population: Option<Population>,
    #[serde(rename = "jezyki", default, deserialize_with = "lenient::list")]
    pub languages: Vec<NamedPlace>,
    #[serde(rename = "religie", default, deserialize_with = "lenient::list")]
    pub religions: Vec<NamedPlace>,
    #[serde(rename = "gestosc_na_km2", default, deserialize_with = "lenient::number")]
    pub density_per_km2: Option<f64>,
    #[serde(rename = "mediana_wieku", default, deserialize_with = "lenient::number")]
    pub median_age: Option<f64>,
    #[serde(rename = "urbanizacja_procent", default, deserialize_with = "lenient::number")]
    pub urbanization_percent: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Population {
    #[serde(rename = "liczba", default, deserialize_with = "lenient::number")]
    pub count: Option<f64>,
    #[serde(rename = "rok", default, deserialize_with = "lenient::scalar")]
    pub year: Option<Scalar>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Economy {
    #[serde(rename = "waluta", default, deserialize_with = "lenient::group")]
    pub currency: Option<Currency>,
    #[serde(rename = "PKB", default, deserialize_with = "lenient::group")]
    pub gdp: Option<Gdp>,
    #[serde(rename = "glowne_bransze", default, deserialize_with = "lenient::strings")]
    pub main_industries: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "kod", default, deserialize_with = "lenient::text")]
    pub code: Option<String>,
    #[serde(rename = "nazwa", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub symbol: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Gdp {
    #[serde(rename = "nominal_USD", default, deserialize_with = "lenient::number")]
    pub nominal_usd: Option<f64>,
    #[serde(rename = "na_osobe_USD", default, deserialize_with = "lenient::number")]
    pub per_capita_usd: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryTourism {
    #[serde(rename = "obiekty_unesco", default, deserialize_with = "lenient::number")]
    pub unesco_sites: Option<f64>,
    #[serde(rename = "liczba_turystow_rocznie", default, deserialize_with = "lenient::number")]
    pub annual_visitors: Option<f64>,
    #[serde(rename = "najwazniejsze_atrakcje_ids", default, deserialize_with = "lenient::strings")]
    pub top_attraction_ids: Vec<String>,
    #[serde(rename = "najlepszy_czas_wizyty", default, deserialize_with = "lenient::group")]
    pub best_time: Option<BestTime>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BestTime {
    #[serde(rename = "okresy", default, deserialize_with = "lenient::strings")]
    pub periods: Vec<String>,
    #[serde(rename = "opis", default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

/// Association lists embedded in a country document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryRelations {
    #[serde(rename = "miasta_ids", default, deserialize_with = "lenient::strings")]
    pub city_ids: Vec<String>,
    #[serde(rename = "atrakcje_ids", default, deserialize_with = "lenient::strings")]
    pub attraction_ids: Vec<String>,
    #[serde(rename = "sasiedzi_ids", default, deserialize_with = "lenient::strings")]
    pub neighbour_ids: Vec<String>,
}

impl Country {
    fn names(&self) -> Option<&Names> {
        self.basics.as_ref().and_then(|b| b.name.as_ref())
    }

    /// Popular name, falling back to the official name.
    pub fn display_name(&self) -> &str {
        self.names().map(Names::display).unwrap_or("")
    }

    pub fn official_name(&self) -> &str {
        self.names()
            .and_then(|n| n.official.as_deref())
            .unwrap_or("")
    }

    pub fn local_name(&self) -> &str {
        self.names().and_then(|n| n.local.as_deref()).unwrap_or("")
    }

    pub fn flag_emoji(&self) -> Option<&str> {
        self.basics
            .as_ref()
            .and_then(|b| b.flag.as_ref())
            .and_then(|f| f.emoji.as_deref())
    }

    pub fn capital(&self) -> Option<&str> {
        self.basics
            .as_ref()
            .and_then(|b| b.capital.as_ref())
            .and_then(|c| c.name.as_deref())
    }

    pub fn continent(&self) -> &str {
        self.geography
            .as_ref()
            .and_then(|g| g.continent.as_deref())
            .unwrap_or("")
    }

    pub fn region(&self) -> &str {
        self.geography
            .as_ref()
            .and_then(|g| g.region.as_deref())
            .unwrap_or("")
    }

    pub fn area_km2(&self) -> Option<f64> {
        self.geography
            .as_ref()
            .and_then(|g| g.area.as_ref())
            .and_then(|a| a.total_km2)
    }

    pub fn center(&self) -> Option<&Coordinates> {
        self.geography
            .as_ref()
            .and_then(|g| g.coordinates.as_ref())
            .and_then(|c| c.center.as_ref())
    }

    pub fn population(&self) -> Option<f64> {
        self.demographics
            .as_ref()
            .and_then(|d| d.population.as_ref())
            .and_then(|p| p.count)
    }

    pub fn currency(&self) -> Option<&Currency> {
        self.economy.as_ref().and_then(|e| e.currency.as_ref())
    }

    pub fn unesco_sites(&self) -> Option<f64> {
        self.tourism.as_ref().and_then(|t| t.unesco_sites)
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

    pub fn city_ids(&self) -> &[String] {
        self.relations
            .as_ref()
            .map(|r| r.city_ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn attraction_ids(&self) -> &[String] {
        self.relations
            .as_ref()
            .map(|r| r.attraction_ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn neighbour_ids(&self) -> &[String] {
        self.relations
            .as_ref()
            .map(|r| r.neighbour_ids.as_slice())
            .unwrap_or(&[])
    }
}
