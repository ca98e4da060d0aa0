//! # Form Schema
//!
//! A mapping from field name to [`Schema`], assembled once by the caller
//! and read-only afterwards.

use std::collections::BTreeMap;

use crate::builder::Schema;

/// Field name to schema mapping for a whole form.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: BTreeMap<String, Schema>,
}

impl FormSchema {
    /// An empty form schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any schema already registered under `name`.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.insert(name, schema);
        self
    }

    /// Add a field in place, returning the schema it replaced.
    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.fields.insert(name.into(), schema)
    }

    /// The schema registered for `name`.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields.get(name)
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, schema)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Map each field to the fields whose matching rule points at it.
    ///
    /// `{"confirmPassword": matches("password")}` yields
    /// `{"password": ["confirmPassword"]}`. Computed in one pass over the
    /// schema so lookups during validation stay constant per field.
    pub fn back_references(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut index: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (name, schema) in self.iter() {
            if let Some(target) = schema.matching_property() {
                index.entry(target).or_default().push(name);
            }
        }
        index
    }
}

impl<K: Into<String>> FromIterator<(K, Schema)> for FormSchema {
    fn from_iter<I: IntoIterator<Item = (K, Schema)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (name, schema) in iter {
            form.insert(name, schema);
        }
        form
    }
}
