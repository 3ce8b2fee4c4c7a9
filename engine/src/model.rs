use serde::{Deserialize, Serialize};
use std::fmt;

pub type PropertyId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Condo,
    Townhouse,
    Apartment,
    Penthouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Apartment,
        PropertyType::Penthouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Apartment => "apartment",
            PropertyType::Penthouse => "penthouse",
        }
    }

    /// Maps a spoken or typed type name onto the closed set. Accepts plurals and a few
    /// everyday synonyms ("home", "flat", "condominium").
    pub fn parse_loose(input: &str) -> Option<Self> {
        let s = crate::normalize::normalize(input);
        let s = s.as_str();
        let kind = match s {
            "house" | "houses" | "home" | "homes" | "single family" | "single-family" | "single family home" => PropertyType::House,
            "condo" | "condos" | "condominium" | "condominiums" => PropertyType::Condo,
            "townhouse" | "townhouses" | "townhome" | "townhomes" | "town house" | "town houses" => PropertyType::Townhouse,
            "apartment" | "apartments" | "flat" | "flats" => PropertyType::Apartment,
            "penthouse" | "penthouses" => PropertyType::Penthouse,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing in the catalog. Only price, bedrooms, location, type and features take part in
/// scoring; the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<u32>,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_feet: u32,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A record paired with the score it earned for one search. Serializes flat, the record's
/// fields plus `matchScore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProperty {
    #[serde(flatten)]
    pub property: PropertyRecord,
    pub match_score: u8,
}

impl ScoredProperty {
    pub fn new(property: PropertyRecord, match_score: u8) -> Self {
        Self { property, match_score }
    }

    pub fn id(&self) -> PropertyId {
        self.property.id
    }
}
