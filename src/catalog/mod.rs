//! Reference catalogs for factions and maps.
//!
//! Each catalog is an ordered list of canonical names plus an ordered
//! alias table mapping informal and translated tokens to a canonical
//! name. Ships built-in tables; a JSON file can override them at
//! startup for house-ruled content.

pub mod factions;
pub mod maps;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Violations of the catalog structural invariants.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A canonical option is the empty string.
    #[error("canonical option at index {0} is empty")]
    EmptyOption(usize),
    /// The same canonical option appears twice.
    #[error("duplicate canonical option: {0}")]
    DuplicateOption(String),
    /// An alias token is the empty string (it would contain-match everything).
    #[error("alias token for target '{0}' is empty")]
    EmptyAliasToken(String),
    /// An alias token is not lowercase.
    #[error("alias token is not lowercase: {0}")]
    AliasNotLowercase(String),
    /// The same alias token appears twice; each token maps to exactly one target.
    #[error("duplicate alias token: {0}")]
    DuplicateAliasToken(String),
    /// An alias points at a name that is not in the option list.
    #[error("alias '{token}' targets unknown option '{target}'")]
    UnknownAliasTarget { token: String, target: String },
    /// The override document is not valid JSON.
    #[error("invalid reference data JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One alias entry: an informal or translated token and the canonical
/// option it resolves to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    /// Lowercase token as it may appear in OCR text
    pub token: String,
    /// Canonical option this token resolves to
    pub target: String,
}

/// An ordered set of canonical options plus an ordered alias table.
///
/// Option order is definition/display order, not priority. Alias order
/// IS a matching contract: the fuzzy matcher scans the table top to
/// bottom and the first containment hit wins, so the table is a `Vec`,
/// never a hash map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    options: Vec<String>,
    aliases: Vec<Alias>,
}

impl Catalog {
    /// Creates a catalog, rejecting invariant violations.
    pub fn new(options: Vec<String>, aliases: Vec<Alias>) -> Result<Self, CatalogError> {
        let catalog = Self { options, aliases };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the structural invariants.
    ///
    /// Needed separately from [`Catalog::new`] because serde constructs
    /// catalogs directly when deserializing an override file.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_options: HashSet<&str> = HashSet::new();
        for (i, option) in self.options.iter().enumerate() {
            if option.is_empty() {
                return Err(CatalogError::EmptyOption(i));
            }
            if !seen_options.insert(option) {
                return Err(CatalogError::DuplicateOption(option.clone()));
            }
        }

        let mut seen_tokens: HashSet<&str> = HashSet::new();
        for alias in &self.aliases {
            if alias.token.is_empty() {
                return Err(CatalogError::EmptyAliasToken(alias.target.clone()));
            }
            if alias.token != alias.token.to_lowercase() {
                return Err(CatalogError::AliasNotLowercase(alias.token.clone()));
            }
            if !seen_tokens.insert(&alias.token) {
                return Err(CatalogError::DuplicateAliasToken(alias.token.clone()));
            }
            if !seen_options.contains(alias.target.as_str()) {
                return Err(CatalogError::UnknownAliasTarget {
                    token: alias.token.clone(),
                    target: alias.target.clone(),
                });
            }
        }

        Ok(())
    }

    /// Canonical options in definition order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Alias table in definition order.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Returns true if `name` is one of the canonical options.
    pub fn contains(&self, name: &str) -> bool {
        self.options.iter().any(|o| o == name)
    }
}

/// The faction and map catalogs, bundled for passing to the parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub factions: Catalog,
    pub maps: Catalog,
}

impl ReferenceData {
    /// Returns the compiled-in faction and map tables.
    pub fn builtin() -> Self {
        Self {
            factions: factions::catalog(),
            maps: maps::catalog(),
        }
    }

    /// Parses an override document, rejecting bad JSON and catalogs
    /// that violate the structural invariants.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let data: ReferenceData = serde_json::from_str(text)?;
        data.factions.validate()?;
        data.maps.validate()?;
        Ok(data)
    }

    /// Loads reference data from a JSON file, falling back to the
    /// built-in tables when the file is absent or unusable.
    ///
    /// Never fails: a league without an override file gets the shipped
    /// game content.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no reference data file, using built-ins");
            return Self::builtin();
        }

        match fs::read_to_string(path) {
            Ok(text) => match Self::from_json(&text) {
                Ok(data) => {
                    debug!(path = %path.display(), "reference data loaded from file");
                    data
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid reference data file, using built-ins");
                    Self::builtin()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read reference data file, using built-ins");
                Self::builtin()
            }
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
