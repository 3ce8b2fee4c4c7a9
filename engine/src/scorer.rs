//! Weighted match score of one listing against one set of criteria.
//!
//! Each dimension counts only when its criterion is present, so the score is a percentage of
//! the weight the caller actually asked about:
//!
//! | dimension | weight | full credit                  | partial credit                         |
//! |-----------|--------|------------------------------|----------------------------------------|
//! | price     | 30     | inside [min, max]            | `30 - 30 * distance / bound`           |
//! | bedrooms  | 20     | at least the requested count | `20 - 10 * missing`                    |
//! | location  | 25     | same city                    | 15 when found in "city state address"  |
//! | type      | 15     | same type                    | none                                   |
//! | features  | 10     | -                            | `10 * matched / requested`             |
//!
//! Criteria with nothing to score give 100.

use crate::criteria::SearchCriteria;
use crate::model::PropertyRecord;
use crate::normalize::normalize;

pub const PRICE_WEIGHT: f64 = 30.0;
pub const BEDROOM_WEIGHT: f64 = 20.0;
pub const LOCATION_WEIGHT: f64 = 25.0;
pub const LOCATION_PARTIAL: f64 = 15.0;
pub const TYPE_WEIGHT: f64 = 15.0;
pub const FEATURE_WEIGHT: f64 = 10.0;

/// Points earned and points available for one pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreParts {
    pub earned: f64,
    pub possible: f64,
}

impl ScoreParts {
    fn add(&mut self, earned: f64, weight: f64) {
        self.earned += earned.clamp(0.0, weight);
        self.possible += weight;
    }

    pub fn percent(&self) -> u8 {
        if self.possible <= 0.0 {
            return 100;
        }
        (100.0 * self.earned / self.possible).round().clamp(0.0, 100.0) as u8
    }
}

/// Match score in 0..=100.
pub fn score(property: &PropertyRecord, criteria: &SearchCriteria) -> u8 {
    score_parts(property, criteria).percent()
}

pub fn score_parts(property: &PropertyRecord, criteria: &SearchCriteria) -> ScoreParts {
    let mut parts = ScoreParts::default();

    if criteria.has_price_bounds() {
        parts.add(price_points(property.price as f64, criteria.min_price, criteria.max_price), PRICE_WEIGHT);
    }
    if let Some(wanted) = criteria.bedrooms {
        parts.add(bedroom_points(property.bedrooms, wanted), BEDROOM_WEIGHT);
    }
    if let Some(location) = &criteria.location {
        parts.add(location_points(property, location), LOCATION_WEIGHT);
    }
    if let Some(kind) = criteria.property_type {
        parts.add(if property.kind == kind { TYPE_WEIGHT } else { 0.0 }, TYPE_WEIGHT);
    }
    if !criteria.features.is_empty() {
        parts.add(feature_points(&property.features, &criteria.features), FEATURE_WEIGHT);
    }
    parts
}

fn price_points(price: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let min = min.unwrap_or(0.0);
    let max = max.unwrap_or(f64::INFINITY);
    if price >= min && price <= max {
        return PRICE_WEIGHT;
    }
    let (distance, bound) = if price < min { (min - price, min) } else { (price - max, max) };
    if bound <= 0.0 {
        return 0.0;
    }
    (PRICE_WEIGHT - PRICE_WEIGHT * distance / bound).max(0.0)
}

fn bedroom_points(have: u32, wanted: u32) -> f64 {
    if have >= wanted {
        return BEDROOM_WEIGHT;
    }
    let missing = (wanted - have) as f64;
    (BEDROOM_WEIGHT - 10.0 * missing).max(0.0)
}

fn location_points(property: &PropertyRecord, location: &str) -> f64 {
    let wanted = normalize(location);
    if normalize(&property.city) == wanted {
        return LOCATION_WEIGHT;
    }
    let haystack = normalize(&format!("{} {} {}", property.city, property.state, property.address));
    if haystack.contains(&wanted) {
        LOCATION_PARTIAL
    } else {
        0.0
    }
}

fn feature_points(have: &[String], wanted: &[String]) -> f64 {
    let have: Vec<String> = have.iter().map(|f| normalize(f)).collect();
    let matched = wanted
        .iter()
        .map(|w| normalize(w))
        .filter(|w| have.iter().any(|h| h.contains(w.as_str())))
        .count();
    FEATURE_WEIGHT * matched as f64 / wanted.len() as f64
}
