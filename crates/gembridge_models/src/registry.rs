//! Case-insensitive registry of upstream model identifiers.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument, warn};

/// Prefix some upstream listings put in front of model ids.
const MODELS_PREFIX: &str = "models/";

/// Descriptor fields that may carry a model id.
const ID_FIELDS: [&str; 3] = ["id", "name", "model"];

/// Normalize a raw model identifier.
///
/// Trims whitespace and strips a leading `models/`. Returns `None` when
/// nothing is left.
///
/// # Examples
///
/// ```
/// use gembridge_models::normalize_model_id;
///
/// assert_eq!(normalize_model_id("  models/gemini-pro "), Some("gemini-pro"));
/// assert_eq!(normalize_model_id("   "), None);
/// ```
pub fn normalize_model_id(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let id = trimmed.strip_prefix(MODELS_PREFIX).unwrap_or(trimmed);
    (!id.is_empty()).then_some(id)
}

/// Model ids found in a listing are strings, occasionally numbers.
fn candidate_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Process-wide cache of the model ids the upstream currently recognizes.
///
/// Maps `lowercase(normalized id)` to the canonical id last seen for that
/// key. Entries are only added or overwritten; [`ModelRegistry::clear`]
/// exists for tests and explicit resets. Share it as
/// `Arc<ModelRegistry>`: every method takes `&self`.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    /// Canonical ids by lowercase key
    known: RwLock<HashMap<String, String>>,
    /// When a listing was last ingested
    last_updated: RwLock<Option<DateTime<Utc>>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_known(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.known.read().unwrap_or_else(|poisoned| {
            warn!("Model registry lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write_known(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.known.write().unwrap_or_else(|poisoned| {
            warn!("Model registry lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn touch(&self) {
        let mut last_updated = self
            .last_updated
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *last_updated = Some(Utc::now());
    }

    /// Record a single model id. Case variants overwrite each other.
    ///
    /// Returns `false` when the id normalizes to nothing.
    pub fn ingest(&self, value: &str) -> bool {
        let Some(normalized) = normalize_model_id(value) else {
            return false;
        };
        self.write_known()
            .insert(normalized.to_lowercase(), normalized.to_string());
        true
    }

    fn ingest_value(&self, value: &Value) -> bool {
        candidate_id(value).is_some_and(|id| self.ingest(&id))
    }

    fn ingest_descriptor_fields(&self, descriptor: &Value) -> usize {
        ID_FIELDS
            .iter()
            .filter_map(|field| descriptor.get(*field))
            .filter(|value| self.ingest_value(value))
            .count()
    }

    /// Update the registry from an upstream model-listing response.
    ///
    /// Accepts either a sequence of descriptors (or bare ids) or a mapping of
    /// model id to descriptor. Each entry contributes up to four candidate
    /// ids: the entry or key itself plus its `id`, `name` and `model`
    /// fields. Any sequence or mapping refreshes the timestamp, even one that
    /// yields no ids. Absent, null and scalar listings are ignored.
    #[instrument(skip_all)]
    pub fn update_from_listing(&self, models: Option<&Value>) {
        let ingested = match models {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| {
                    usize::from(self.ingest_value(entry)) + self.ingest_descriptor_fields(entry)
                })
                .sum::<usize>(),
            Some(Value::Object(map)) => map
                .iter()
                .map(|(model_id, info)| {
                    usize::from(self.ingest(model_id)) + self.ingest_descriptor_fields(info)
                })
                .sum::<usize>(),
            _ => {
                debug!("Ignoring model listing that is neither a sequence nor a mapping");
                return;
            }
        };

        self.touch();
        debug!(ingested, known = self.count(), "Ingested upstream model listing");
    }

    /// Look up the canonical id for a model name, ignoring case and a
    /// leading `models/`.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let normalized = normalize_model_id(name)?;
        self.read_known().get(&normalized.to_lowercase()).cloned()
    }

    /// Number of distinct (case-insensitive) model ids known.
    pub fn count(&self) -> usize {
        self.read_known().len()
    }

    /// Whether no model id has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.read_known().is_empty()
    }

    /// When a listing was last ingested, if ever.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        *self
            .last_updated
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Canonical ids, sorted.
    pub fn known_models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.read_known().values().cloned().collect();
        models.sort();
        models
    }

    /// Forget every id and the last-updated timestamp.
    pub fn clear(&self) {
        self.write_known().clear();
        *self
            .last_updated
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
