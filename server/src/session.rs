use engine::RawCriteria;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Criteria stashed per voice call between turns. Owned by the server, passed to the webhook
/// handlers through state; entries are removed when the call ends.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<String, RawCriteria>>,
}

impl SessionStore {
    pub fn new() -> Self { Self::default() }

    pub fn save(&self, call_id: &str, criteria: RawCriteria) {
        self.inner.lock().insert(call_id.to_string(), criteria);
    }

    pub fn get(&self, call_id: &str) -> Option<RawCriteria> {
        self.inner.lock().get(call_id).cloned()
    }

    pub fn remove(&self, call_id: &str) -> Option<RawCriteria> {
        self.inner.lock().remove(call_id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
