use crate::catalog::Catalog;
use crate::model::PropertyId;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inverted lookups over a catalog. Derived data: rebuild it whenever the catalog changes.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CatalogIndex {
    pub features: HashMap<String, Vec<PropertyId>>, // postings in catalog order
    pub cities: HashMap<String, Vec<PropertyId>>,
    pub num_properties: u32,
}

impl CatalogIndex {
    pub fn new() -> Self { Self::default() }

    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::new();
        for rec in catalog.get_all() {
            for feature in &rec.features {
                push_unique(index.features.entry(normalize(feature)).or_default(), rec.id);
            }
            push_unique(index.cities.entry(normalize(&rec.city)).or_default(), rec.id);
        }
        index.num_properties = catalog.len() as u32;
        tracing::debug!(
            num_properties = index.num_properties,
            num_features = index.features.len(),
            num_cities = index.cities.len(),
            "built catalog index"
        );
        index
    }

    pub fn ids_with_feature(&self, feature: &str) -> &[PropertyId] {
        self.features.get(&normalize(feature)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn ids_in_city(&self, city: &str) -> &[PropertyId] {
        self.cities.get(&normalize(city)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// (feature, listing count), most common first, ties alphabetical.
    pub fn feature_counts(&self) -> Vec<(&str, usize)> {
        sorted_counts(&self.features)
    }

    pub fn city_counts(&self) -> Vec<(&str, usize)> {
        sorted_counts(&self.cities)
    }
}

fn push_unique(list: &mut Vec<PropertyId>, id: PropertyId) {
    if list.last() != Some(&id) {
        list.push(id);
    }
}

fn sorted_counts(map: &HashMap<String, Vec<PropertyId>>) -> Vec<(&str, usize)> {
    let mut out: Vec<(&str, usize)> = map.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyRecord, PropertyType};

    fn rec(id: PropertyId, city: &str, features: &[&str]) -> PropertyRecord {
        PropertyRecord {
            id,
            title: String::new(),
            address: String::new(),
            city: city.into(),
            state: String::new(),
            zip_code: None,
            price: 1,
            bedrooms: 0,
            bathrooms: 1,
            square_feet: 500,
            kind: PropertyType::Condo,
            features: features.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            year_built: None,
            image: None,
        }
    }

    #[test]
    fn builds_postings_in_catalog_order() {
        let cat = Catalog::new(vec![
            rec(5, "Miami", &["Pool", "Gym"]),
            rec(2, "miami", &["pool"]),
            rec(9, "Boston", &["gym"]),
        ])
        .unwrap();
        let idx = CatalogIndex::build(&cat);
        assert_eq!(idx.ids_with_feature("POOL"), &[5, 2]);
        assert_eq!(idx.ids_in_city("Miami"), &[5, 2]);
        assert_eq!(idx.ids_in_city("Austin"), &[] as &[PropertyId]);
        assert_eq!(idx.city_counts(), vec![("miami", 2), ("boston", 1)]);
        assert_eq!(idx.feature_counts(), vec![("gym", 2), ("pool", 2)]);
        assert_eq!(idx.num_properties, 3);
    }
}
