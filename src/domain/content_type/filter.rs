// src/domain/content_type/filter.rs
use crate::domain::content_type::TypeDescriptor;
use crate::domain::search;

/// Criteria for listing content types. Empty sets and `None` leave the
/// corresponding field unconstrained; everything that is set must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    pub ids: Vec<i64>,
    pub app_labels: Vec<String>,
    pub models: Vec<String>,
    pub q: Option<String>,
}

impl TypeFilter {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
            && self.app_labels.is_empty()
            && self.models.is_empty()
            && self.search_term().is_none()
    }

    /// The `q` value when it actually constrains the result.
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().and_then(search::needle)
    }

    pub fn matches(&self, descriptor: &TypeDescriptor) -> bool {
        one_of(&self.ids, &descriptor.id)
            && one_of(&self.app_labels, &descriptor.app_label)
            && one_of(&self.models, &descriptor.model)
            && search::matches_record(self.search_term(), descriptor)
    }

    pub fn apply<'a, I>(&self, descriptors: I) -> Vec<TypeDescriptor>
    where
        I: IntoIterator<Item = &'a TypeDescriptor>,
    {
        descriptors
            .into_iter()
            .filter(|descriptor| self.matches(descriptor))
            .cloned()
            .collect()
    }
}

pub(crate) fn one_of<T: PartialEq>(allowed: &[T], value: &T) -> bool {
    allowed.is_empty() || allowed.contains(value)
}
