use crate::model::{PropertyId, PropertyRecord};
use crate::normalize::normalize;
use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};

/// Read-only set of listings, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
    by_id: HashMap<PropertyId, usize>,
}

impl Catalog {
    /// Builds the store. Ids must be positive and unique; feature tags are deduplicated
    /// case-insensitively, keeping the first spelling.
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut out = Vec::with_capacity(records.len());
        for mut rec in records {
            if rec.id == 0 {
                bail!("property id must be positive (title: {:?})", rec.title);
            }
            if by_id.insert(rec.id, out.len()).is_some() {
                bail!("duplicate property id {}", rec.id);
            }
            dedup_features(&mut rec.features);
            out.push(rec);
        }
        Ok(Self { records: out, by_id })
    }

    pub fn get_all(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn get_by_id(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn dedup_features(features: &mut Vec<String>) {
    let mut seen = HashSet::new();
    features.retain(|f| {
        let key = normalize(f);
        !key.is_empty() && seen.insert(key)
    });
}
