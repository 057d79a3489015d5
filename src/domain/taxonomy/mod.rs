//! Taxonomy Module - The embedded three-level bias tree and its flattening.
//!
//! The tree is authored as `Category -> Rationale -> Bias` and never mutated.
//! Selection works on the flattened form: one [`FlattenedEntry`] per leaf,
//! in depth-first authored order.

mod dataset;
mod model;

pub use model::{Bias, Category, Rationale};

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Number of characters stripped from a category name for display ("1. ").
const GROUP_ORDINAL_PREFIX_CHARS: usize = 2;

/// Read-only view over a static category tree.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    categories: &'static [Category],
}

/// One leaf bias together with the names of its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedEntry {
    /// Category name, e.g. `"1. Too Much Information"`.
    pub group: String,
    /// Rationale name.
    pub description: String,
    /// Bias name.
    pub bias: String,
}

impl FlattenedEntry {
    /// Category name without its leading ordinal.
    ///
    /// Drops the first two characters plus the space that follows them, so
    /// `"1. Too Much Information"` displays as `"Too Much Information"`.
    /// Single-digit ordinals only.
    pub fn group_label(&self) -> &str {
        match self.group.char_indices().nth(GROUP_ORDINAL_PREFIX_CHARS) {
            Some((offset, _)) => self.group[offset..].trim_start(),
            None => "",
        }
    }
}

impl Taxonomy {
    /// Wraps an arbitrary static tree.
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// The embedded cognitive bias cheat sheet.
    pub const fn cognitive_biases() -> Self {
        Self::new(dataset::COGNITIVE_BIASES)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Total number of leaf biases.
    pub fn leaf_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.rationales.iter())
            .map(|r| r.biases.len())
            .sum()
    }

    /// Flattens the tree depth-first in authored order.
    ///
    /// No sorting and no deduplication: a bias listed under two rationales
    /// yields two entries.
    pub fn flatten(&self) -> Vec<FlattenedEntry> {
        let mut entries = Vec::with_capacity(self.leaf_count());
        for category in self.categories {
            for rationale in category.rationales {
                for bias in rationale.biases {
                    entries.push(FlattenedEntry {
                        group: category.name.to_string(),
                        description: rationale.name.to_string(),
                        bias: bias.name.to_string(),
                    });
                }
            }
        }
        entries
    }

    /// Checks that every node is named and every inner node has children.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.categories.is_empty() {
            return Err(ValidationError::missing_children("taxonomy", "categories"));
        }
        for category in self.categories {
            if category.name.trim().is_empty() {
                return Err(ValidationError::empty_field("category.name"));
            }
            if category.rationales.is_empty() {
                return Err(ValidationError::missing_children(category.name, "rationales"));
            }
            for rationale in category.rationales {
                if rationale.name.trim().is_empty() {
                    return Err(ValidationError::empty_field("rationale.name"));
                }
                if rationale.biases.is_empty() {
                    return Err(ValidationError::missing_children(rationale.name, "biases"));
                }
                if rationale.biases.iter().any(|b| b.name.trim().is_empty()) {
                    return Err(ValidationError::empty_field("bias.name"));
                }
            }
        }
        Ok(())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::cognitive_biases()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pinned size of the embedded dataset.
    const SHIPPED_ENTRY_COUNT: usize = 189;

    static SMALL_TREE: &[Category] = &[
        Category {
            name: "1. First",
            rationales: &[
                Rationale {
                    name: "alpha",
                    biases: &[Bias::new("a1"), Bias::new("a2")],
                },
                Rationale {
                    name: "beta",
                    biases: &[Bias::new("b1")],
                },
            ],
        },
        Category {
            name: "2. Second",
            rationales: &[Rationale {
                name: "gamma",
                biases: &[Bias::new("a1")],
            }],
        },
    ];

    static HOLLOW_TREE: &[Category] = &[Category {
        name: "1. Hollow",
        rationales: &[Rationale {
            name: "nothing here",
            biases: &[],
        }],
    }];

    fn entry(group: &str, description: &str, bias: &str) -> FlattenedEntry {
        FlattenedEntry {
            group: group.to_string(),
            description: description.to_string(),
            bias: bias.to_string(),
        }
    }

    #[test]
    fn shipped_taxonomy_flattens_to_pinned_count() {
        let taxonomy = Taxonomy::cognitive_biases();
        assert_eq!(taxonomy.flatten().len(), SHIPPED_ENTRY_COUNT);
        assert_eq!(taxonomy.leaf_count(), SHIPPED_ENTRY_COUNT);
    }

    #[test]
    fn shipped_taxonomy_is_well_formed() {
        assert!(Taxonomy::cognitive_biases().validate().is_ok());
        assert_eq!(Taxonomy::cognitive_biases().categories().len(), 4);
    }

    #[test]
    fn shipped_taxonomy_starts_and_ends_in_authored_order() {
        let entries = Taxonomy::cognitive_biases().flatten();
        assert_eq!(
            entries.first(),
            Some(&entry(
                "1. Too Much Information",
                "We notice things already primed in memory or repeated often.",
                "Availability heuristic",
            ))
        );
        assert_eq!(
            entries.last(),
            Some(&entry(
                "4. What Should We Remember?",
                "We store memories differently based on how they were experienced",
                "Tip of the tongue phenomenon",
            ))
        );
    }

    #[test]
    fn duplicate_bias_names_produce_distinct_entries() {
        let negativity: Vec<_> = Taxonomy::cognitive_biases()
            .flatten()
            .into_iter()
            .filter(|e| e.bias == "Negativity bias")
            .collect();
        assert_eq!(negativity.len(), 2);
        assert_ne!(negativity[0].description, negativity[1].description);
    }

    #[test]
    fn flatten_is_depth_first_with_active_ancestors() {
        let entries = Taxonomy::new(SMALL_TREE).flatten();
        assert_eq!(
            entries,
            vec![
                entry("1. First", "alpha", "a1"),
                entry("1. First", "alpha", "a2"),
                entry("1. First", "beta", "b1"),
                entry("2. Second", "gamma", "a1"),
            ]
        );
    }

    #[test]
    fn flatten_is_pure() {
        let taxonomy = Taxonomy::cognitive_biases();
        assert_eq!(taxonomy.flatten(), taxonomy.flatten());
    }

    #[test]
    fn validate_reports_rationale_without_biases() {
        let err = Taxonomy::new(HOLLOW_TREE).validate().unwrap_err();
        assert_eq!(err, ValidationError::missing_children("nothing here", "biases"));
    }

    #[test]
    fn validate_reports_empty_tree() {
        assert!(Taxonomy::new(&[]).validate().is_err());
    }

    #[test]
    fn group_label_strips_leading_ordinal() {
        let e = entry("1. Too Much Information", "d", "b");
        assert_eq!(e.group_label(), "Too Much Information");
    }

    #[test]
    fn group_label_of_every_shipped_category_has_no_ordinal() {
        for category in Taxonomy::cognitive_biases().categories() {
            let e = entry(category.name, "d", "b");
            let label = e.group_label();
            assert!(!label.starts_with(|c: char| c.is_ascii_digit() || c == '.'));
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn group_label_of_short_name_is_empty() {
        assert_eq!(entry("1.", "d", "b").group_label(), "");
        assert_eq!(entry("", "d", "b").group_label(), "");
    }
}
