//! Provider brand style table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::display_color;

/// Brand styling for one provider, as shipped in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStyle {
    /// Provider name as it appears on facility records
    pub name: String,
    /// Brand color, 6-digit hex
    pub color: String,
    /// Short badge label, defaults to the name
    pub label: Option<String>,
}

impl ProviderStyle {
    /// Style with the name doubling as the badge label
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            label: None,
        }
    }

    /// Set a short badge label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Badge text: the explicit label when present, otherwise the name
    pub fn badge(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Brand styles keyed by provider name, case-insensitively.
///
/// Facility records spell providers with display casing ("AWS", "Equinix")
/// while style lookups may come from any layer, so keys are folded to
/// lowercase on insert and lookup.
#[derive(Debug, Clone, Default)]
pub struct ProviderStyles {
    by_name: HashMap<String, ProviderStyle>,
}

impl ProviderStyles {
    /// Empty style table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from dataset entries. Later duplicates replace
    /// earlier ones.
    pub fn from_styles(styles: Vec<ProviderStyle>) -> Self {
        let mut table = Self::new();
        for style in styles {
            table.insert(style);
        }
        table
    }

    /// Insert a style, replacing any existing entry for the same provider
    pub fn insert(&mut self, style: ProviderStyle) {
        self.by_name.insert(style.name.to_lowercase(), style);
    }

    /// Style for a provider, any casing
    pub fn get(&self, provider: &str) -> Option<&ProviderStyle> {
        self.by_name.get(&provider.to_lowercase())
    }

    /// Render-ready brand color for a provider: the dataset color run
    /// through [`display_color`] so dark brands stay visible
    pub fn display_color(&self, provider: &str) -> Option<String> {
        self.get(provider).map(|style| display_color(&style.color))
    }

    /// Number of styled providers
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when no styles are loaded
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
