//! Ability catalog with localized labels
//!
//! The catalog ships embedded in the binary; ability ids are stable
//! across locales, only labels and descriptions localize.

use crate::core::error::{BarracksError, Result};
use crate::core::types::{AbilityId, Locale};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Embedded catalog data
const BUILTIN_CATALOG: &str = include_str!("abilities.toml");

/// A piece of text with one entry per locale
///
/// Resolution falls back to the default locale, then to any entry,
/// so a missing translation never renders as an empty card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text(AHashMap<Locale, String>);

impl Text {
    pub fn resolve(&self, locale: Locale) -> &str {
        self.0
            .get(&locale)
            .or_else(|| self.0.get(&Locale::DEFAULT))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// A catalog ability definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    pub label: Text,
    pub description: Text,
    pub cost: f64,
}

/// An ability projected into a single locale, as shown in selection lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedAbility {
    pub id: AbilityId,
    pub label: String,
    pub description: String,
    pub cost: f64,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    ability: Vec<Ability>,
}

/// The full set of abilities available for authoring, in catalog order
#[derive(Debug, Clone)]
pub struct AbilityCatalog {
    entries: Vec<Ability>,
    index: AHashMap<AbilityId, usize>,
}

impl AbilityCatalog {
    /// Parse a catalog from TOML data
    pub fn from_toml(data: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(data)?;
        let index = file
            .ability
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Ok(Self {
            entries: file.ability,
            index,
        })
    }

    /// The catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &AbilityId) -> Result<&Ability> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| BarracksError::UnknownAbility(id.to_string()))
    }

    /// Resolve a list of ability ids into their definitions, preserving order
    pub fn resolve(&self, ids: &[AbilityId]) -> Result<Vec<Ability>> {
        ids.iter().map(|id| self.get(id).cloned()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.entries.iter()
    }

    /// Project the whole catalog into one locale, in catalog order
    pub fn localized(&self, locale: Locale) -> Vec<LocalizedAbility> {
        self.entries
            .iter()
            .map(|a| LocalizedAbility {
                id: a.id.clone(),
                label: a.label.resolve(locale).to_string(),
                description: a.description.resolve(locale).to_string(),
                cost: a.cost,
            })
            .collect()
    }
}
