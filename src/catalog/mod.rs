//! Registry of breathing techniques.
//!
//! The catalog is assembled once at startup (built-in techniques plus any
//! user-defined ones from the config file) and is read-only afterwards.
//! Construction validates every technique and the default id, so the rest
//! of the program can assume any catalog it holds is well-formed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the technique selected when the user first enters the menu.
pub const DEFAULT_TECHNIQUE_ID: &str = "4-6";

/// A named pattern of breathing phase durations.
///
/// A hold duration of zero means the corresponding phase is skipped
/// entirely when cycling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingTechnique {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub inhale_seconds: u32,
    #[serde(default)]
    pub hold_seconds: u32,
    pub exhale_seconds: u32,
    #[serde(default)]
    pub hold_after_exhale_seconds: u32,
}

impl BreathingTechnique {
    /// A technique can only drive a session if it actually breathes:
    /// inhale and exhale must both take time. The two hold phases may be
    /// zero (skipped).
    pub fn has_positive_durations(&self) -> bool {
        self.inhale_seconds > 0 && self.exhale_seconds > 0
    }

    /// Seconds for one full cycle, counting skipped phases as zero.
    pub fn cycle_seconds(&self) -> u32 {
        self.inhale_seconds + self.hold_seconds + self.exhale_seconds + self.hold_after_exhale_seconds
    }
}

/// Errors raised while building or querying the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("breathing technique '{id}' not found")]
    NotFound { id: String },

    #[error("technique '{id}' is invalid: inhale and exhale durations must be positive")]
    InvalidDurations { id: String },

    #[error("technique '{id}' is registered twice")]
    DuplicateId { id: String },

    #[error("default technique '{id}' is not in the catalog")]
    MissingDefault { id: String },
}

/// The fixed set of selectable techniques. No mutation after construction.
#[derive(Debug, Clone)]
pub struct TechniqueCatalog {
    techniques: Vec<BreathingTechnique>,
    default_id: String,
}

impl TechniqueCatalog {
    /// Catalog containing only the built-in techniques.
    pub fn builtin() -> Self {
        Self::with_extras(Vec::new()).unwrap_or_else(|err| {
            // The built-in table is validated by tests; reaching this
            // means the binary itself is broken.
            panic!("built-in technique catalog is invalid: {err}")
        })
    }

    /// Built-ins plus user-defined techniques, validated as a whole.
    pub fn with_extras(extras: Vec<BreathingTechnique>) -> Result<Self, CatalogError> {
        let mut techniques = builtin_techniques();
        techniques.extend(extras);

        for (index, technique) in techniques.iter().enumerate() {
            if !technique.has_positive_durations() {
                return Err(CatalogError::InvalidDurations {
                    id: technique.id.clone(),
                });
            }
            if techniques[..index].iter().any(|t| t.id == technique.id) {
                return Err(CatalogError::DuplicateId {
                    id: technique.id.clone(),
                });
            }
        }

        let catalog = Self {
            techniques,
            default_id: DEFAULT_TECHNIQUE_ID.to_string(),
        };
        // Fatal at startup if the designated default ever goes missing.
        catalog.get(DEFAULT_TECHNIQUE_ID).map_err(|_| CatalogError::MissingDefault {
            id: DEFAULT_TECHNIQUE_ID.to_string(),
        })?;
        Ok(catalog)
    }

    /// Look up a technique by id. Never substitutes the default.
    pub fn get(&self, id: &str) -> Result<&BreathingTechnique, CatalogError> {
        self.techniques
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn default_technique(&self) -> &BreathingTechnique {
        // default_id resolution was checked at construction
        self.techniques
            .iter()
            .find(|t| t.id == self.default_id)
            .unwrap_or(&self.techniques[0])
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreathingTechnique> {
        self.techniques.iter()
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}

fn builtin_techniques() -> Vec<BreathingTechnique> {
    vec![
        BreathingTechnique {
            id: "4-6".to_string(),
            title: "Quick Calm (4-6)".to_string(),
            subtitle: "Four seconds in through the nose, six seconds out through the mouth"
                .to_string(),
            inhale_seconds: 4,
            hold_seconds: 0,
            exhale_seconds: 6,
            hold_after_exhale_seconds: 0,
        },
        BreathingTechnique {
            id: "pursed-lips".to_string(),
            title: "Pursed-Lip Breathing".to_string(),
            subtitle: "Deep nasal inhale, slow exhale through pursed lips".to_string(),
            inhale_seconds: 2,
            hold_seconds: 0,
            exhale_seconds: 4,
            hold_after_exhale_seconds: 0,
        },
        BreathingTechnique {
            id: "4-7-8".to_string(),
            title: "Relaxing Breath (4-7-8)".to_string(),
            subtitle: "Inhale for four, hold for seven, exhale for eight".to_string(),
            inhale_seconds: 4,
            hold_seconds: 7,
            exhale_seconds: 8,
            hold_after_exhale_seconds: 0,
        },
    ]
}
