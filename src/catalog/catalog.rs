use std::sync::OnceLock;

use ahash::AHashMap;

use crate::errors::UnknownAttributeError;
use super::attribute::{ATTRIBUTE_TABLE, AttributeSpec};

/// Read-only registry of selectable attributes, keyed by display name.
#[derive(Debug)]
pub struct AttributeCatalog {
    specs: Vec<AttributeSpec>,
    index: AHashMap<&'static str, usize>, // name -> position in `specs`
}

impl AttributeCatalog {
    /// Build a catalog from specs in UI order. A repeated name keeps its first spec.
    pub fn new(specs: impl IntoIterator<Item = AttributeSpec>) -> Self {
        let mut catalog = Self { specs: Vec::new(), index: AHashMap::new() };
        for spec in specs {
            if catalog.index.contains_key(spec.name) { continue }
            catalog.index.insert(spec.name, catalog.specs.len());
            catalog.specs.push(spec);
        }
        catalog
    }

    /// The process-wide catalog built from the declarative attribute table.
    pub fn global() -> &'static AttributeCatalog {
        static CATALOG: OnceLock<AttributeCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| AttributeCatalog::new(ATTRIBUTE_TABLE))
    }

    pub fn lookup(&self, name: &str) -> Result<&AttributeSpec, UnknownAttributeError> {
        self.index.get(name.trim())
            .map(|&i| &self.specs[i])
            .ok_or_else(|| UnknownAttributeError(name.to_string()))
    }

    /// Attribute names in UI order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    #[inline] pub fn specs(&self) -> &[AttributeSpec] { &self.specs }

    #[inline] pub fn len(&self) -> usize { self.specs.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.specs.is_empty() }
}
