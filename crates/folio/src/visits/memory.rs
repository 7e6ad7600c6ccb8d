use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use folio_core::visits::{VisitCounter, VisitError};

/// Per-process visit counts, lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryVisitCounter {
    totals: Mutex<HashMap<String, u64>>,
}

impl InMemoryVisitCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitCounter for InMemoryVisitCounter {
    async fn total_path_visits(&self, path: &str) -> Result<u64, VisitError> {
        let mut totals = self
            .totals
            .lock()
            .map_err(|_| VisitError::Unavailable("visit counter lock poisoned".to_string()))?;
        let total = totals.entry(path.to_string()).or_insert(0);
        *total += 1;
        Ok(*total)
    }
}
