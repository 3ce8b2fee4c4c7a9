//! Search criteria, in the loose shape callers send and the canonical shape the scorer reads.
//!
//! Voice front-ends and HTTP clients disagree on field names (`location` vs `city`,
//! `propertyType` vs `type`) and often send numbers as spoken text ("500k", "$1.2 million").
//! [`RawCriteria::normalize`] folds all of that into one [`SearchCriteria`], or says exactly
//! which field could not be coerced.

use crate::model::PropertyType;
use crate::normalize::split_list;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

lazy_static! {
    static ref MONEY: Regex = Regex::new(
        r"(?i)^\s*(?:under|below|over|above|at least|at most|around|about|up to)?\s*\$?\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s*(k|thousand|m|mil|million|mm)?\s*(?:dollars|usd)?\s*$"
    )
    .expect("valid regex");
    static ref COUNT: Regex = Regex::new(r"(?i)^\s*([0-9]+)\s*(?:\+|bedrooms?|beds?|br|bd)?\s*$").expect("valid regex");
}

const NUMBER_WORDS: &[&str] = &["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("{field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),
    #[error("{field} must be text")]
    InvalidText { field: &'static str },
    #[error("features must be a list of strings")]
    InvalidFeatures,
}

/// Canonical criteria. Every field is optional; an absent field is not scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub location: Option<String>,
    pub property_type: Option<PropertyType>,
    pub features: Vec<String>,
}

impl SearchCriteria {
    pub fn new() -> Self { Self::default() }

    pub fn min_price(mut self, v: f64) -> Self { self.min_price = Some(v); self }
    pub fn max_price(mut self, v: f64) -> Self { self.max_price = Some(v); self }
    pub fn bedrooms(mut self, v: u32) -> Self { self.bedrooms = Some(v); self }
    pub fn location(mut self, v: impl Into<String>) -> Self { self.location = Some(v.into()); self }
    pub fn property_type(mut self, v: PropertyType) -> Self { self.property_type = Some(v); self }
    pub fn feature(mut self, v: impl Into<String>) -> Self { self.features.push(v.into()); self }

    pub fn has_price_bounds(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_price_bounds()
            && self.bedrooms.is_none()
            && self.location.is_none()
            && self.property_type.is_none()
            && self.features.is_empty()
    }
}

/// Criteria exactly as received. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<Value>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
}

impl RawCriteria {
    /// Resolves aliases and coerces values into [`SearchCriteria`].
    pub fn normalize(&self) -> Result<SearchCriteria, CriteriaError> {
        let location = parse_text("location", self.location.as_ref())?;
        let city = parse_text("city", self.city.as_ref())?;
        let property_type = parse_text("propertyType", self.property_type.as_ref())?;
        let kind = parse_text("type", self.kind.as_ref())?;
        let location = location.or(city);
        let property_type = match property_type.or(kind) {
            Some(s) => Some(PropertyType::parse_loose(&s).ok_or(CriteriaError::UnknownPropertyType(s))?),
            None => None,
        };
        Ok(SearchCriteria {
            // a zero bound is how callers say "no limit"
            min_price: parse_price("minPrice", self.min_price.as_ref())?.filter(|v| *v > 0.0),
            max_price: parse_price("maxPrice", self.max_price.as_ref())?.filter(|v| *v > 0.0),
            bedrooms: parse_bedrooms(self.bedrooms.as_ref())?,
            location,
            property_type,
            features: parse_features(self.features.as_ref())?,
        })
    }

    /// Fields present in `self` win; absent ones are taken from `saved`.
    pub fn merged_over(&self, saved: &RawCriteria) -> RawCriteria {
        let has_location = self.location.is_some() || self.city.is_some();
        let has_type = self.property_type.is_some() || self.kind.is_some();
        RawCriteria {
            min_price: self.min_price.clone().or_else(|| saved.min_price.clone()),
            max_price: self.max_price.clone().or_else(|| saved.max_price.clone()),
            bedrooms: self.bedrooms.clone().or_else(|| saved.bedrooms.clone()),
            location: if has_location { self.location.clone() } else { saved.location.clone() },
            city: if has_location { self.city.clone() } else { saved.city.clone() },
            property_type: if has_type { self.property_type.clone() } else { saved.property_type.clone() },
            kind: if has_type { self.kind.clone() } else { saved.kind.clone() },
            features: self.features.clone().or_else(|| saved.features.clone()),
        }
    }
}

impl TryFrom<RawCriteria> for SearchCriteria {
    type Error = CriteriaError;

    fn try_from(raw: RawCriteria) -> Result<Self, Self::Error> {
        raw.normalize()
    }
}

/// Trimmed text; blank and null mean absent.
fn parse_text(field: &'static str, value: Option<&Value>) -> Result<Option<String>, CriteriaError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let s = s.trim();
            Ok((!s.is_empty()).then(|| s.to_string()))
        }
        Some(_) => Err(CriteriaError::InvalidText { field }),
    }
}

fn parse_price(field: &'static str, value: Option<&Value>) -> Result<Option<f64>, CriteriaError> {
    let invalid = |v: &Value| CriteriaError::InvalidNumber { field, value: v.to_string() };
    let Some(v) = value else { return Ok(None) };
    let amount = match v {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(v))?,
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => parse_money(s).ok_or_else(|| invalid(v))?,
        _ => return Err(invalid(v)),
    };
    if amount < 0.0 {
        return Err(CriteriaError::Negative { field });
    }
    Ok(Some(amount))
}

/// "$450,000", "500k", "1.2 million" -> dollars.
fn parse_money(s: &str) -> Option<f64> {
    let caps = MONEY.captures(s)?;
    let base: f64 = caps[1].replace(',', "").parse().ok()?;
    let scale = match caps.get(2).map(|m| m.as_str().to_lowercase()) {
        Some(unit) if unit == "k" || unit == "thousand" => 1_000.0,
        Some(_) => 1_000_000.0,
        None => 1.0,
    };
    Some(base * scale)
}

fn parse_bedrooms(value: Option<&Value>) -> Result<Option<u32>, CriteriaError> {
    const FIELD: &str = "bedrooms";
    let invalid = |v: &Value| CriteriaError::InvalidNumber { field: FIELD, value: v.to_string() };
    let Some(v) = value else { return Ok(None) };
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return u32::try_from(u).map(Some).map_err(|_| invalid(v));
            }
            match n.as_f64() {
                Some(f) if f < 0.0 => Err(CriteriaError::Negative { field: FIELD }),
                Some(f) if f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(Some(f as u32)),
                _ => Err(invalid(v)),
            }
        }
        Value::String(s) => {
            let word = s.trim().to_lowercase();
            if word.is_empty() {
                return Ok(None);
            }
            if word == "studio" {
                return Ok(Some(0));
            }
            if word.starts_with('-') {
                return Err(CriteriaError::Negative { field: FIELD });
            }
            if let Some(caps) = COUNT.captures(&word) {
                return caps[1].parse().map(Some).map_err(|_| invalid(v));
            }
            let head = word.split_whitespace().next().unwrap_or_default();
            NUMBER_WORDS
                .iter()
                .position(|w| *w == head)
                .map(|n| Some(n as u32))
                .ok_or_else(|| invalid(v))
        }
        _ => Err(invalid(v)),
    }
}

fn parse_features(value: Option<&Value>) -> Result<Vec<String>, CriteriaError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(split_list(s)),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
                    Value::String(_) | Value::Null => {}
                    _ => return Err(CriteriaError::InvalidFeatures),
                }
            }
            Ok(out)
        }
        Some(_) => Err(CriteriaError::InvalidFeatures),
    }
}
