//! Variable and variable table types

use crate::error::{Error, Result};
use ahash::AHashMap;

/// A named numeric quantity available for substitution into formulas
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Unique, stable identifier
    pub id: String,
    /// Display name shown in the editing surface
    pub name: String,
    /// Current numeric value (always finite)
    pub value: f64,
}

impl Variable {
    /// Create a new variable
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
        }
    }
}

/// The variable catalog: the single source of truth for substitution
///
/// Seeded once at session start from an externally supplied catalog. Values
/// may be edited in place through [`set_value`](VariableTable::set_value);
/// entries are never added or removed after construction.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    /// Variables in catalog order
    entries: Vec<Variable>,
    /// Index from id to position in `entries`
    index: AHashMap<String, usize>,
}

impl VariableTable {
    /// Build a table from a catalog seed
    ///
    /// Catalog order is preserved; suggestion ordering depends on it. Fails
    /// on duplicate ids and non-finite values.
    pub fn new<I: IntoIterator<Item = Variable>>(catalog: I) -> Result<Self> {
        let entries: Vec<Variable> = catalog.into_iter().collect();
        let mut index = AHashMap::with_capacity(entries.len());

        for (pos, variable) in entries.iter().enumerate() {
            if !variable.value.is_finite() {
                return Err(Error::NonFiniteValue(variable.id.clone()));
            }
            if index.insert(variable.id.clone(), pos).is_some() {
                return Err(Error::DuplicateVariableId(variable.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Get a variable by id
    pub fn get(&self, id: &str) -> Option<&Variable> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Set the value of an existing variable
    ///
    /// A no-op if the id is absent (the table never grows) or if the value
    /// is not finite (the table holds only finite values). The update is
    /// visible to all subsequent evaluations.
    pub fn set_value(&mut self, id: &str, value: f64) {
        if !value.is_finite() {
            return;
        }
        if let Some(&pos) = self.index.get(id) {
            self.entries[pos].value = value;
        }
    }

    /// Number of variables in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all variables in catalog order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }
}
