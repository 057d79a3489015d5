//! Daily selection - maps a calendar day onto one flattened taxonomy entry.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::DayOfYear;
use crate::domain::taxonomy::FlattenedEntry;

/// Errors raised while picking the entry of the day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Taxonomy has no entries to select from")]
    EmptyTaxonomy,
}

/// Index of the entry shown on `day` in a list of `len` entries.
///
/// Always in `[0, len)`, and periodic: `day` and `day + len` map to the same
/// index.
pub fn select_index(day: u32, len: usize) -> Result<usize, SelectionError> {
    if len == 0 {
        return Err(SelectionError::EmptyTaxonomy);
    }
    Ok(day as usize % len)
}

/// The entry picked for a given day, with the numbers shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySelection {
    pub day: DayOfYear,
    pub index: usize,
    pub total: usize,
    pub entry: FlattenedEntry,
}

impl DailySelection {
    /// Picks the entry for `day` out of `entries`.
    pub fn pick(entries: &[FlattenedEntry], day: DayOfYear) -> Result<Self, SelectionError> {
        let index = select_index(day.value(), entries.len())?;
        let entry = entries
            .get(index)
            .cloned()
            .ok_or(SelectionError::EmptyTaxonomy)?;

        Ok(Self {
            day,
            index,
            total: entries.len(),
            entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::Taxonomy;
    use proptest::prelude::*;

    #[test]
    fn select_index_wraps_by_list_length() {
        assert_eq!(select_index(0, 189), Ok(0));
        assert_eq!(select_index(100, 189), Ok(100));
        assert_eq!(select_index(189, 189), Ok(0));
        assert_eq!(select_index(366, 189), Ok(177));
    }

    #[test]
    fn select_index_rejects_empty_list() {
        assert_eq!(select_index(42, 0), Err(SelectionError::EmptyTaxonomy));
    }

    #[test]
    fn pick_returns_entry_at_index() {
        let entries = Taxonomy::cognitive_biases().flatten();
        let selection = DailySelection::pick(&entries, DayOfYear::new(1)).unwrap();

        assert_eq!(selection.index, 1);
        assert_eq!(selection.total, 189);
        assert_eq!(selection.entry.bias, "Attentional bias");
        assert_eq!(selection.day, DayOfYear::new(1));
    }

    #[test]
    fn pick_fails_fast_on_empty_list() {
        let result = DailySelection::pick(&[], DayOfYear::new(10));
        assert_eq!(result, Err(SelectionError::EmptyTaxonomy));
    }

    proptest! {
        #[test]
        fn select_index_is_in_range(day in 0u32..100_000, len in 1usize..1_000) {
            let index = select_index(day, len).unwrap();
            prop_assert!(index < len);
        }

        #[test]
        fn select_index_is_periodic(day in 0u32..100_000, len in 1usize..1_000) {
            let shifted = day + len as u32;
            prop_assert_eq!(select_index(day, len), select_index(shifted, len));
        }

        #[test]
        fn select_index_is_stable(day in 0u32..400, len in 1usize..400) {
            prop_assert_eq!(select_index(day, len), select_index(day, len));
        }
    }
}
