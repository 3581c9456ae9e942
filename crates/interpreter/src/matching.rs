//! Fuzzy candidate resolution and removal reconciliation.

use despensa_core::{PantryItem, normalize};

/// Outcome of reconciling a removal request against current stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Remove the item entirely.
    Delete,
    /// Keep the item with the remaining quantity.
    Decrement(u32),
}

/// Find the single removal target for a search term.
///
/// An item matches when, after normalization, the item name contains the
/// term **or** the term contains the item name — "tomate" finds
/// "tomate cherry" and vice versa. Ties go to the highest id, read as the
/// most recently added entry.
pub fn resolve_target<'a>(items: &'a [PantryItem], term: &str) -> Option<&'a PantryItem> {
    let needle = normalize(term);
    if needle.is_empty() {
        return None;
    }

    items
        .iter()
        .filter(|item| {
            let name = normalize(&item.name);
            name.contains(&needle) || needle.contains(name.as_str())
        })
        .max_by_key(|item| item.id)
}

/// Aggregate stock for an existence check ("how much X do I have").
///
/// Unlike the removal path, this sums the quantity over **all** matches and
/// matches one-directionally: the item name must contain the term.
pub fn total_quantity(items: &[PantryItem], term: &str) -> u32 {
    let needle = normalize(term);
    if needle.is_empty() {
        return 0;
    }

    items
        .iter()
        .filter(|item| normalize(&item.name).contains(&needle))
        .map(|item| item.quantity)
        .sum()
}

/// Decide between deleting the matched item and decrementing it.
///
/// Requesting at least the current stock deletes the item — including
/// over-requests, since voice input cannot reliably distinguish "remove
/// all" from an over-estimate. The remaining quantity is never negative.
pub fn reconcile(current: u32, requested: u32) -> Removal {
    if current <= requested {
        Removal::Delete
    } else {
        Removal::Decrement(current - requested)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use despensa_core::{Category, ItemId};

    use super::*;

    fn test_item(id: u64, name: &str, quantity: u32) -> PantryItem {
        PantryItem {
            id: ItemId::new(id),
            name: name.to_string(),
            quantity,
            category: Category::guess(name),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn matching_is_bidirectional() {
        let pantry = [test_item(1, "tomate cherry", 2)];
        assert!(resolve_target(&pantry, "tomate").is_some());

        let pantry = [test_item(1, "tomate", 2)];
        assert!(resolve_target(&pantry, "tomate cherry").is_some());
    }

    #[test]
    fn matching_ignores_case_and_accents() {
        let pantry = [test_item(1, "Plátanos", 3)];
        assert!(resolve_target(&pantry, "platanos").is_some());
    }

    #[test]
    fn ties_go_to_the_highest_id() {
        let pantry = [
            test_item(3, "tomate", 1),
            test_item(7, "tomate cherry", 1),
            test_item(5, "tomate pera", 1),
        ];
        let target = resolve_target(&pantry, "tomate").unwrap();
        assert_eq!(target.id, ItemId::new(7));
    }

    #[test]
    fn no_match_yields_none() {
        let pantry = [test_item(1, "pepinos", 2)];
        assert_eq!(resolve_target(&pantry, "lejía"), None);
        assert_eq!(resolve_target(&pantry, ""), None);
        assert_eq!(resolve_target(&[], "pepinos"), None);
    }

    #[test]
    fn aggregate_sums_all_one_directional_matches() {
        let pantry = [
            test_item(1, "tomate", 2),
            test_item(2, "tomate cherry", 3),
            test_item(3, "pepinos", 9),
        ];
        assert_eq!(total_quantity(&pantry, "tomate"), 5);
    }

    #[test]
    fn aggregate_does_not_match_backwards() {
        // "tomate" does not contain "tomate cherry"; the removal path would
        // match this, the aggregate path must not.
        let pantry = [test_item(1, "tomate", 2)];
        assert_eq!(total_quantity(&pantry, "tomate cherry"), 0);
    }

    #[test]
    fn over_request_deletes() {
        // Pantry has 2, the user removes 5: the whole entry goes.
        assert_eq!(reconcile(2, 5), Removal::Delete);
        assert_eq!(reconcile(5, 5), Removal::Delete);
    }

    #[test]
    fn partial_request_decrements() {
        // Pantry has 5, the user removes 2: 3 remain.
        assert_eq!(reconcile(5, 2), Removal::Decrement(3));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: delete exactly when `current <= requested`,
            /// otherwise decrement to `current - requested` (never
            /// negative, never zero).
            #[test]
            fn reconcile_laws(current in 0u32..10_000, requested in 1u32..10_000) {
                match reconcile(current, requested) {
                    Removal::Delete => prop_assert!(current <= requested),
                    Removal::Decrement(left) => {
                        prop_assert!(current > requested);
                        prop_assert_eq!(left, current - requested);
                        prop_assert!(left > 0);
                    }
                }
            }
        }
    }
}
