// src/domain/content_type/entity.rs
use crate::domain::search::Searchable;
use std::fmt;

/// Registered model type, addressed either by its surrogate `id` or by the
/// `(app_label, model)` natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub id: i64,
    pub app_label: String,
    pub model: String,
}

impl TypeDescriptor {
    pub fn new(id: i64, app_label: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id,
            app_label: app_label.into(),
            model: model.into(),
        }
    }

    pub fn has_key(&self, key: &ContentTypeKey) -> bool {
        self.app_label == key.app_label && self.model == key.model
    }
}

impl Searchable for TypeDescriptor {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.app_label.as_str()), Some(self.model.as_str())]
    }
}

/// `app_label.model` natural key. Always stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentTypeKey {
    pub app_label: String,
    pub model: String,
}

impl ContentTypeKey {
    /// Returns `None` unless the value splits into exactly two dot-separated parts.
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.to_lowercase();
        let mut parts = lowered.split('.');
        let (Some(app_label), Some(model), None) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        Some(Self {
            app_label: app_label.to_string(),
            model: model.to_string(),
        })
    }
}

impl fmt::Display for ContentTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app_label, self.model)
    }
}
