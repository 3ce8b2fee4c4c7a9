use crate::catalog::Catalog;
use crate::criteria::SearchCriteria;
use crate::index::CatalogIndex;
use crate::model::{PropertyId, PropertyRecord, ScoredProperty};
use crate::scorer::score;
use crate::similarity::has_related_feature;

pub const MAX_RESULTS: usize = 10;
/// Results scoring at or below this are dropped.
pub const RELEVANCE_FLOOR: u8 = 30;
pub const FEATURE_BONUS: u8 = 5;
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Ranks `records` against `criteria`: price bounds filter, weighted score, fuzzy feature
/// bonus, relevance floor, top ten. Equal scores keep catalog order, before and after the
/// bonus pass.
pub fn search(records: &[PropertyRecord], criteria: &SearchCriteria) -> Vec<ScoredProperty> {
    let candidates: Vec<&PropertyRecord> = records.iter().filter(|p| within_bounds(p, criteria)).collect();
    let num_candidates = candidates.len();

    // (catalog position, hit); position breaks score ties
    let mut ranked: Vec<(usize, ScoredProperty)> = candidates
        .into_iter()
        .enumerate()
        .map(|(pos, p)| (pos, ScoredProperty::new(p.clone(), score(p, criteria))))
        .collect();
    rank(&mut ranked);

    if !criteria.features.is_empty() {
        for (_, hit) in ranked.iter_mut() {
            let bonus = feature_bonus(&hit.property.features, &criteria.features);
            hit.match_score = hit.match_score.saturating_add(bonus).min(100);
        }
        rank(&mut ranked);
    }

    let mut scored: Vec<ScoredProperty> = ranked.into_iter().map(|(_, hit)| hit).collect();
    scored.retain(|hit| hit.match_score > RELEVANCE_FLOOR);
    scored.truncate(MAX_RESULTS);
    tracing::debug!(
        catalog = records.len(),
        candidates = num_candidates,
        returned = scored.len(),
        top_score = scored.first().map(|h| h.match_score),
        "search complete"
    );
    scored
}

fn rank(ranked: &mut [(usize, ScoredProperty)]) {
    ranked.sort_by(|a, b| b.1.match_score.cmp(&a.1.match_score).then(a.0.cmp(&b.0)));
}

fn within_bounds(property: &PropertyRecord, criteria: &SearchCriteria) -> bool {
    let price = property.price as f64;
    criteria.min_price.map_or(true, |min| price >= min) && criteria.max_price.map_or(true, |max| price <= max)
}

/// Flat bonus for each requested feature that has a close relative on the listing.
pub fn feature_bonus(have: &[String], wanted: &[String]) -> u8 {
    let hits = wanted.iter().filter(|w| has_related_feature(have, w, FUZZY_THRESHOLD)).count();
    u8::try_from(hits).unwrap_or(u8::MAX).saturating_mul(FEATURE_BONUS)
}

/// The catalog together with its derived indices, built once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    catalog: Catalog,
    index: CatalogIndex,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        let index = CatalogIndex::build(&catalog);
        Self { catalog, index }
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<ScoredProperty> {
        search(self.catalog.get_all(), criteria)
    }

    pub fn get_by_id(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.catalog.get_by_id(id)
    }

    pub fn get_all(&self) -> &[PropertyRecord] {
        self.catalog.get_all()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }
}
