//! Variable suggestion lookup
//!
//! The editing surface feeds pending free text to a suggestion source and
//! offers the candidates as insertable reference tokens. The formula model
//! itself never consults suggestions; they are advisory input only, and
//! staleness policy for in-flight lookups (last value wins) belongs to the
//! caller.

use tally_core::Variable;

/// Source of variable suggestions for the editing surface
///
/// An empty query returns the full catalog. Matching is a case-insensitive
/// substring match against the display name, and candidates come back in
/// catalog order (ties therefore resolve by catalog order too).
pub trait SuggestionSource {
    /// Candidate variables for a free-text query
    fn lookup(&self, query: &str) -> Vec<Variable>;
}

/// In-memory suggestion source over a fixed catalog
///
/// Suitable for tests and embedded catalogs; applications backed by a
/// remote service implement [`SuggestionSource`] over their own client.
#[derive(Debug, Clone)]
pub struct CatalogSuggestions {
    catalog: Vec<Variable>,
}

impl CatalogSuggestions {
    /// Create a suggestion source over the given catalog
    pub fn new<I: IntoIterator<Item = Variable>>(catalog: I) -> Self {
        Self {
            catalog: catalog.into_iter().collect(),
        }
    }

    /// Suggestion source over the built-in demo catalog
    pub fn demo() -> Self {
        Self::new(demo_catalog())
    }
}

impl SuggestionSource for CatalogSuggestions {
    fn lookup(&self, query: &str) -> Vec<Variable> {
        if query.is_empty() {
            return self.catalog.clone();
        }

        let needle = query.to_lowercase();
        self.catalog
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// The built-in demo catalog of business variables
pub fn demo_catalog() -> Vec<Variable> {
    vec![
        Variable::new("1", "Revenue", 100.0),
        Variable::new("2", "Cost", 50.0),
        Variable::new("3", "Profit Margin", 0.4),
        Variable::new("4", "Growth Rate", 0.1),
        Variable::new("5", "Expenses", 30.0),
        Variable::new("6", "Tax Rate", 0.2),
        Variable::new("7", "Sales Volume", 200.0),
        Variable::new("8", "Customer Acquisition Cost", 15.0),
        Variable::new("9", "Conversion Rate", 0.03),
        Variable::new("10", "Average Order Value", 75.0),
    ]
}
