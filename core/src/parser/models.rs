//! # Data Models
//!
//! Intermediate Representation (IR) of the exported type model found in one
//! source unit.

use indexmap::IndexMap;
use serde::Serialize;

/// Type and optionality of a single interface field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// The raw type annotation, trimmed. Serialized as `type`.
    #[serde(rename = "type")]
    pub type_expression: String,
    /// Whether the field name carried a `?` marker.
    pub optional: bool,
}

impl FieldSpec {
    /// Builds a field spec, trimming the type annotation.
    pub fn new(type_expression: &str, optional: bool) -> Self {
        Self {
            type_expression: type_expression.trim().to_string(),
            optional,
        }
    }
}

/// A named declaration found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TypeEntry {
    /// `export interface Name { ... }`, decomposed into fields.
    #[serde(rename = "interface")]
    Interface {
        /// Fields in source order.
        fields: IndexMap<String, FieldSpec>,
    },
    /// `export type Name = ...;`, kept as raw text.
    #[serde(rename = "type")]
    Alias {
        /// The unparsed right-hand side.
        definition: String,
    },
}

impl TypeEntry {
    /// Returns the serialized kind tag (`interface` or `type`).
    pub fn kind(&self) -> &'static str {
        match self {
            TypeEntry::Interface { .. } => "interface",
            TypeEntry::Alias { .. } => "type",
        }
    }

    /// Returns the fields of an interface entry.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldSpec>> {
        match self {
            TypeEntry::Interface { fields } => Some(fields),
            TypeEntry::Alias { .. } => None,
        }
    }
}

/// Every exported declaration of one source unit, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeReport {
    /// Where the text came from (usually a file path). Supplied by the caller.
    pub source_identifier: String,
    /// Entries in discovery order.
    pub entries: IndexMap<String, TypeEntry>,
}

impl TypeReport {
    /// Creates an empty report for the given source.
    pub fn new(source_identifier: impl Into<String>) -> Self {
        Self {
            source_identifier: source_identifier.into(),
            entries: IndexMap::new(),
        }
    }

    /// Records a declaration. A repeated name replaces the earlier entry but
    /// keeps its position.
    pub fn insert(&mut self, name: &str, entry: TypeEntry) {
        self.entries.insert(name.to_string(), entry);
    }

    /// Number of distinct declared names.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    /// Whether no declaration was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
