//! Store-page record for a single app (`/api/appdetails`).
//!
//! Steam fills this record very unevenly: DLC has no price block, empty
//! requirements arrive as `[]` instead of an object, text fields are
//! sometimes `null`, and `required_age` is a number for some apps and a
//! string for others. Every field therefore decodes leniently: a value of
//! the wrong shape becomes the field's default instead of failing the whole
//! record. Fields not modelled here are kept in [`AppDetails::extra`].

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decodes `T`, falling back to `T::default()` on null or a mismatched shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes a sub-record, accepting only a JSON object.
///
/// Steam sends `[]` for some empty sub-records; serde would otherwise read
/// that as a struct with every field defaulted.
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Details of one store app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDetails {
    /// `game`, `dlc`, `demo`, `music`, ...
    #[serde(default, rename = "type", deserialize_with = "or_default")]
    pub app_type: String,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub steam_appid: u32,
    /// Numeric for some apps, textual for others. See
    /// [`AppDetails::required_age_years`].
    #[serde(default)]
    pub required_age: Value,
    #[serde(default, deserialize_with = "or_default")]
    pub is_free: bool,
    #[serde(default, deserialize_with = "or_default")]
    pub dlc: Vec<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub detailed_description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub about_the_game: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub supported_languages: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub reviews: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub header_image: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub capsule_image: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub capsule_imagev5: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub pc_requirements: Option<Requirements>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub mac_requirements: Option<Requirements>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub linux_requirements: Option<Requirements>,
    #[serde(default, deserialize_with = "or_default")]
    pub developers: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub publishers: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub demos: Vec<Demo>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub price_overview: Option<PriceOverview>,
    #[serde(default, deserialize_with = "or_default")]
    pub packages: Vec<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub package_groups: Vec<PackageGroup>,
    #[serde(default, deserialize_with = "or_default")]
    pub platforms: Platforms,
    #[serde(default, deserialize_with = "object_or_none")]
    pub metacritic: Option<Metacritic>,
    #[serde(default, deserialize_with = "or_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "or_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "or_default")]
    pub screenshots: Vec<Screenshot>,
    #[serde(default, deserialize_with = "or_default")]
    pub movies: Vec<Movie>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub recommendations: Option<Recommendations>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub achievements: Option<Achievements>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub release_date: Option<ReleaseDate>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub support_info: Option<SupportInfo>,
    #[serde(default, deserialize_with = "or_default")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub background_raw: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub content_descriptors: Option<ContentDescriptors>,
    /// Upstream fields without a typed counterpart.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppDetails {
    /// Returns the minimum age as a number.
    ///
    /// Accepts both the numeric and the textual form of `required_age`.
    pub fn required_age_years(&self) -> Option<u32> {
        match &self.required_age {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// HTML-formatted system requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demo {
    pub appid: u32,
    pub description: String,
}

/// Current price, in the smallest currency unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceOverview {
    pub currency: String,
    pub initial: i64,
    #[serde(rename = "final")]
    pub final_price: i64,
    pub discount_percent: i32,
    pub initial_formatted: String,
    pub final_formatted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageGroup {
    pub name: String,
    pub title: String,
    pub description: String,
    pub selection_text: String,
    pub save_text: String,
    /// Number or string depending on the app.
    pub display_type: Value,
    pub is_recurring_subscription: Value,
    pub subs: Vec<PackageSub>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSub {
    pub packageid: u32,
    pub percent_savings_text: String,
    pub percent_savings: i32,
    pub option_text: String,
    pub option_description: String,
    pub can_get_free_license: Value,
    pub is_free_license: bool,
    pub price_in_cents_with_discount: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platforms {
    pub windows: bool,
    pub mac: bool,
    pub linux: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metacritic {
    pub score: i32,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub description: String,
}

/// Genre. Unlike [`Category`], the upstream ID is a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    pub id: i64,
    pub path_thumbnail: String,
    pub path_full: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub thumbnail: String,
    pub webm: Option<MovieSources>,
    pub mp4: Option<MovieSources>,
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieSources {
    #[serde(rename = "480")]
    pub low: String,
    pub max: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    pub total: u32,
    pub highlighted: Vec<HighlightedAchievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightedAchievement {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    pub coming_soon: bool,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportInfo {
    pub url: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDescriptors {
    pub ids: Vec<Value>,
    pub notes: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_age_numeric_or_textual() {
        let numeric: AppDetails = serde_json::from_str(r#"{"required_age":18}"#).unwrap();
        assert_eq!(numeric.required_age_years(), Some(18));

        let textual: AppDetails = serde_json::from_str(r#"{"required_age":"17"}"#).unwrap();
        assert_eq!(textual.required_age_years(), Some(17));

        let garbage: AppDetails = serde_json::from_str(r#"{"required_age":"n/a"}"#).unwrap();
        assert_eq!(garbage.required_age_years(), None);

        let missing: AppDetails = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.required_age, Value::Null);
        assert_eq!(missing.required_age_years(), None);
    }

    #[test]
    fn empty_requirements_array_is_absent() {
        let details: AppDetails = serde_json::from_str(
            r#"{
                "pc_requirements": {"minimum": "<strong>Minimum:</strong> 4 GB RAM"},
                "mac_requirements": [],
                "linux_requirements": []
            }"#,
        )
        .unwrap();
        let pc = details.pc_requirements.unwrap();
        assert!(pc.minimum.unwrap().contains("4 GB"));
        assert!(pc.recommended.is_none());
        assert!(details.mac_requirements.is_none());
        assert!(details.linux_requirements.is_none());
    }

    #[test]
    fn null_and_mistyped_fields_fall_back() {
        let details: AppDetails = serde_json::from_str(
            r#"{
                "name": "Test",
                "website": null,
                "developers": "not a list",
                "is_free": "yes",
                "platforms": {"windows": true, "mac": false, "linux": true}
            }"#,
        )
        .unwrap();
        assert_eq!(details.name, "Test");
        assert!(details.website.is_none());
        assert!(details.developers.is_empty());
        assert!(!details.is_free);
        assert!(details.platforms.windows && details.platforms.linux);
    }

    #[test]
    fn dlc_without_price_block() {
        let details: AppDetails = serde_json::from_str(
            r#"{"type":"dlc","name":"Soundtrack","steam_appid":1001,"is_free":true,"fullgame":{"appid":"1000","name":"Base"}}"#,
        )
        .unwrap();
        assert_eq!(details.app_type, "dlc");
        assert!(details.price_overview.is_none());
        assert_eq!(details.extra["fullgame"]["appid"], "1000");
    }

    #[test]
    fn price_and_media_blocks() {
        let details: AppDetails = serde_json::from_str(
            r#"{
                "price_overview": {"currency":"EUR","initial":1999,"final":999,"discount_percent":50,
                                   "initial_formatted":"19,99€","final_formatted":"9,99€"},
                "genres": [{"id":"1","description":"Action"}],
                "categories": [{"id":2,"description":"Single-player"}],
                "movies": [{"id":7,"name":"Trailer","thumbnail":"t.jpg",
                            "webm":{"480":"low.webm","max":"max.webm"},"highlight":true}],
                "release_date": {"coming_soon": false, "date": "9 Jul, 2013"}
            }"#,
        )
        .unwrap();
        let price = details.price_overview.unwrap();
        assert_eq!(price.final_price, 999);
        assert_eq!(price.discount_percent, 50);
        assert_eq!(details.genres[0].id, "1");
        assert_eq!(details.categories[0].id, 2);
        assert_eq!(details.movies[0].webm.as_ref().unwrap().low, "low.webm");
        assert!(details.movies[0].mp4.is_none());
        assert_eq!(details.release_date.unwrap().date, "9 Jul, 2013");
    }
}
