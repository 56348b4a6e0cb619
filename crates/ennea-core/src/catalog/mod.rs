//! The curated catalog: every reference table, loaded once, immutable after.
//!
//! The catalog is the single explicit "table load" lifecycle step. The
//! built-in tables ship with the crate; an alternative catalog document can
//! be loaded from JSON (see [`Catalog::from_file`]) for deployments that
//! maintain their own curated content. After construction nothing is ever
//! mutated, so a `Catalog` is freely shareable across threads.

mod data;
mod table;

pub use table::SymmetricTable;

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::types::{
    CompatibilityRecord, InstinctPairingDynamic, InstinctStack, InstinctType,
    RelationshipArchetype, RelationshipStory, StackDescription, Tritype, TritypeCode,
    TypeNumber, TypeSubtypeStyle,
};

/// Expected number of (type, instinct) style records in a complete catalog.
const EXPECTED_STYLE_COUNT: usize = 27;

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Returns the process-wide built-in catalog.
///
/// Constructed on first use and immutable for the process lifetime.
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

/// The raw curated document: flat entry lists, as authored or as loaded
/// from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub compatibility: Vec<CompatibilityRecord>,
    #[serde(default)]
    pub archetypes: Vec<RelationshipArchetype>,
    #[serde(default)]
    pub stories: Vec<RelationshipStory>,
    #[serde(default)]
    pub subtype_styles: Vec<TypeSubtypeStyle>,
    #[serde(default)]
    pub instinct_pairings: Vec<InstinctPairingDynamic>,
    #[serde(default)]
    pub tritypes: Vec<Tritype>,
    #[serde(default)]
    pub stack_descriptions: Vec<StackDescription>,
}

/// Immutable lookup tables built from a [`CatalogData`] document.
#[derive(Debug, Clone)]
pub struct Catalog {
    compatibility: SymmetricTable<TypeNumber, CompatibilityRecord>,
    archetypes: SymmetricTable<TypeNumber, RelationshipArchetype>,
    stories: SymmetricTable<TypeNumber, RelationshipStory>,
    instinct_pairings: SymmetricTable<InstinctType, InstinctPairingDynamic>,
    subtype_styles: HashMap<(TypeNumber, InstinctType), TypeSubtypeStyle>,
    tritypes: HashMap<TritypeCode, Tritype>,
    stack_descriptions: HashMap<(InstinctType, InstinctType), StackDescription>,
}

impl Catalog {
    /// Builds the catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_data(data::builtin()).expect("built-in catalog data is valid")
    }

    /// Builds and validates lookup tables from a catalog document.
    ///
    /// Rejects out-of-range curated scores, duplicate unordered pairs, and
    /// duplicate point keys with [`CoreError::CatalogError`]. An incomplete
    /// style table (fewer than 27 records) is expected to be possible and
    /// only logged.
    pub fn from_data(data: CatalogData) -> CoreResult<Self> {
        let mut compatibility = SymmetricTable::new();
        for record in data.compatibility {
            if !(1..=10).contains(&record.overall_score) {
                return Err(CoreError::CatalogError(format!(
                    "compatibility {}-{}: score {} out of range [1,10]",
                    record.type1, record.type2, record.overall_score
                )));
            }
            let (a, b) = (record.type1, record.type2);
            if compatibility.insert(a, b, record).is_some() {
                return Err(duplicate_pair("compatibility", a, b));
            }
        }

        let mut archetypes = SymmetricTable::new();
        for record in data.archetypes {
            let (a, b) = (record.type1, record.type2);
            if archetypes.insert(a, b, record).is_some() {
                return Err(duplicate_pair("archetype", a, b));
            }
        }

        let mut stories = SymmetricTable::new();
        for record in data.stories {
            let (a, b) = (record.type1, record.type2);
            if stories.insert(a, b, record).is_some() {
                return Err(duplicate_pair("story", a, b));
            }
        }

        let mut instinct_pairings = SymmetricTable::new();
        for record in data.instinct_pairings {
            let (a, b) = (record.instinct1, record.instinct2);
            if instinct_pairings.insert(a, b, record).is_some() {
                return Err(CoreError::CatalogError(format!(
                    "duplicate instinct pairing {{{}, {}}}",
                    a, b
                )));
            }
        }

        let mut subtype_styles = HashMap::new();
        for record in data.subtype_styles {
            let key = (record.type_number, record.instinct);
            if subtype_styles.insert(key, record).is_some() {
                return Err(CoreError::CatalogError(format!(
                    "duplicate subtype style for type {} {}",
                    key.0, key.1
                )));
            }
        }
        if subtype_styles.len() != EXPECTED_STYLE_COUNT {
            warn!(
                count = subtype_styles.len(),
                expected = EXPECTED_STYLE_COUNT,
                "subtype style table is incomplete"
            );
        }

        let mut tritypes = HashMap::new();
        for record in data.tritypes {
            let code = record.code;
            if tritypes.insert(code, record).is_some() {
                return Err(CoreError::CatalogError(format!(
                    "duplicate tritype code {}",
                    code
                )));
            }
        }

        let mut stack_descriptions = HashMap::new();
        for record in data.stack_descriptions {
            let key = (record.dominant, record.secondary);
            if stack_descriptions.insert(key, record).is_some() {
                return Err(CoreError::CatalogError(format!(
                    "duplicate stack description {}/{}",
                    key.0, key.1
                )));
            }
        }

        debug!(
            compatibility = compatibility.len(),
            archetypes = archetypes.len(),
            stories = stories.len(),
            instinct_pairings = instinct_pairings.len(),
            subtype_styles = subtype_styles.len(),
            tritypes = tritypes.len(),
            stack_descriptions = stack_descriptions.len(),
            "catalog loaded"
        );

        Ok(Self {
            compatibility,
            archetypes,
            stories,
            instinct_pairings,
            subtype_styles,
            tritypes,
            stack_descriptions,
        })
    }

    /// Parses and builds a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::CatalogError(format!(
                "failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Loads the catalog selected by configuration: the file at
    /// `catalog.path` when set, otherwise the built-in tables.
    pub fn load(config: &Config) -> CoreResult<Self> {
        match &config.catalog.path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Curated compatibility record for the unordered pair, if any.
    pub fn curated_compatibility(
        &self,
        a: TypeNumber,
        b: TypeNumber,
    ) -> Option<&CompatibilityRecord> {
        self.compatibility.get(a, b)
    }

    /// Narrative archetype for the unordered pair, if catalogued.
    ///
    /// No heuristic fallback exists; an uncatalogued pair is simply absent.
    pub fn resolve_archetype(&self, a: TypeNumber, b: TypeNumber) -> Option<&RelationshipArchetype> {
        self.archetypes.get(a, b)
    }

    /// Long-form story for the unordered pair, if catalogued.
    pub fn resolve_story(&self, a: TypeNumber, b: TypeNumber) -> Option<&RelationshipStory> {
        self.stories.get(a, b)
    }

    /// Pairing dynamic for the unordered instinct pair, if catalogued.
    ///
    /// Same-instinct pairs are valid keys.
    pub fn instinct_pairing(
        &self,
        a: InstinctType,
        b: InstinctType,
    ) -> Option<&InstinctPairingDynamic> {
        self.instinct_pairings.get(a, b)
    }

    /// Behavioral profile for one (type, instinct) combination, if present.
    pub fn subtype_style(
        &self,
        type_number: TypeNumber,
        instinct: InstinctType,
    ) -> Option<&TypeSubtypeStyle> {
        self.subtype_styles.get(&(type_number, instinct))
    }

    /// Catalogued tritype profile for an exact code string.
    ///
    /// A string that does not parse as a code matches nothing.
    pub fn tritype_lookup(&self, code: &str) -> Option<&Tritype> {
        let parsed: TritypeCode = code.parse().ok()?;
        self.tritypes.get(&parsed)
    }

    /// Catalogued tritype profile for a code value.
    pub fn tritype(&self, code: &TritypeCode) -> Option<&Tritype> {
        self.tritypes.get(code)
    }

    /// Curated prose for a dominance stack.
    ///
    /// Order-sensitive: `sp/so` and `so/sp` are different keys.
    pub fn stack_description(&self, stack: &InstinctStack) -> Option<&StackDescription> {
        self.stack_descriptions
            .get(&(stack.dominant, stack.secondary))
    }

    /// Number of curated compatibility pairs.
    pub fn compatibility_count(&self) -> usize {
        self.compatibility.len()
    }

    /// Number of curated subtype styles.
    pub fn subtype_style_count(&self) -> usize {
        self.subtype_styles.len()
    }
}

fn duplicate_pair(table: &str, a: TypeNumber, b: TypeNumber) -> CoreError {
    CoreError::CatalogError(format!("duplicate {} pair {{{}, {}}}", table, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_builds() {
        let catalog = Catalog::builtin();
        assert!(catalog.compatibility_count() >= 12);
        assert_eq!(catalog.subtype_style_count(), EXPECTED_STYLE_COUNT);
    }

    #[test]
    fn test_builtin_has_all_instinct_pairings() {
        let catalog = Catalog::builtin();
        for a in InstinctType::all() {
            for b in InstinctType::all() {
                assert!(
                    catalog.instinct_pairing(a, b).is_some(),
                    "missing pairing {{{}, {}}}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_builtin_has_all_stack_descriptions() {
        let catalog = Catalog::builtin();
        for dominant in InstinctType::all() {
            for secondary in InstinctType::all() {
                if dominant == secondary {
                    continue;
                }
                let stack = InstinctStack::new(dominant, secondary).unwrap();
                assert!(
                    catalog.stack_description(&stack).is_some(),
                    "missing stack description {}",
                    stack
                );
            }
        }
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let data = CatalogData {
            compatibility: vec![CompatibilityRecord::heuristic(
                TypeNumber::One,
                TypeNumber::Two,
                11,
            )],
            ..Default::default()
        };
        let err = Catalog::from_data(data).unwrap_err();
        assert!(matches!(err, CoreError::CatalogError(_)));
    }

    #[test]
    fn test_duplicate_pair_rejected_across_orderings() {
        let data = CatalogData {
            compatibility: vec![
                CompatibilityRecord::heuristic(TypeNumber::One, TypeNumber::Two, 5),
                CompatibilityRecord::heuristic(TypeNumber::Two, TypeNumber::One, 6),
            ],
            ..Default::default()
        };
        assert!(Catalog::from_data(data).is_err());
    }

    #[test]
    fn test_tritype_lookup_ignores_malformed_code() {
        let catalog = Catalog::builtin();
        assert!(catalog.tritype_lookup("abc").is_none());
        assert!(catalog.tritype_lookup("5381").is_none());
    }

    #[test]
    fn test_tritype_lookup_finds_curated_code() {
        let catalog = Catalog::builtin();
        let tritype = catalog.tritype_lookup("538").expect("538 is catalogued");
        assert_eq!(tritype.name, "The Solution Master");
    }

    #[test]
    fn test_stack_description_is_order_sensitive() {
        let catalog = Catalog::builtin();
        let sp_so: InstinctStack = "sp/so".parse().unwrap();
        let so_sp: InstinctStack = "so/sp".parse().unwrap();
        let first = catalog.stack_description(&sp_so).unwrap();
        let second = catalog.stack_description(&so_sp).unwrap();
        assert_ne!(first.description, second.description);
    }

    #[test]
    fn test_from_json_str_minimal_document() {
        let catalog = Catalog::from_json_str(r#"{"compatibility": []}"#).unwrap();
        assert_eq!(catalog.compatibility_count(), 0);
        assert!(catalog
            .resolve_archetype(TypeNumber::One, TypeNumber::Seven)
            .is_none());
    }
}
