//! Quantity/name extraction from loosely-filled slots.
//!
//! Voice platforms sometimes put the numeral in the quantity slot, sometimes
//! inside the name slot ("3 cocacolas"), and sometimes in both. The
//! extractor splits a raw slot value into (quantity, name); `parse_command`
//! fuses the two slots into one command.

use despensa_core::{DomainError, DomainResult};

/// A removal/addition request distilled from slot values.
///
/// `name` may come out empty (e.g. the slot held only a number); callers
/// treat that as a clarification-needed condition, via [`QuantityName::validated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityName {
    pub quantity: u32,
    pub name: String,
}

impl QuantityName {
    /// Reject commands whose name came out empty.
    pub fn validated(self) -> DomainResult<QuantityName> {
        if self.name.is_empty() {
            return Err(DomainError::validation("empty product name"));
        }
        Ok(self)
    }
}

/// Split a raw slot string into a leading quantity and the remaining name.
///
/// A leading integer token becomes the quantity and the trimmed remainder
/// the name; an input that is only a number yields an empty name. Anything
/// else keeps `default_quantity` and the trimmed input as the name.
pub fn extract_quantity_and_name(raw: &str, default_quantity: u32) -> QuantityName {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return QuantityName {
            quantity: default_quantity,
            name: String::new(),
        };
    }

    let digit_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digit_end > 0 {
        let (digits, rest) = trimmed.split_at(digit_end);
        // The numeral must stand alone: either nothing follows, or the name
        // starts after whitespace ("3cocacolas" is a name, not a count).
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            if let Ok(quantity) = digits.parse::<u32>() {
                return QuantityName {
                    quantity,
                    name: rest.trim().to_string(),
                };
            }
        }
    }

    QuantityName {
        quantity: default_quantity,
        name: trimmed.to_string(),
    }
}

/// Fuse the dedicated quantity slot and the name slot into one command.
///
/// A valid quantity slot (integer >= 1) wins; the extractor still runs over
/// the name slot to strip a duplicated leading numeral, and its quantity
/// output is discarded. An invalid or absent quantity slot defers the
/// quantity to the extractor with default 1.
pub fn parse_command(quantity_slot: Option<&str>, name_slot: Option<&str>) -> QuantityName {
    let raw_name = name_slot.unwrap_or("");
    let slot_quantity = quantity_slot
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|q| *q >= 1);

    match slot_quantity {
        Some(quantity) => QuantityName {
            quantity,
            name: extract_quantity_and_name(raw_name, quantity).name,
        },
        None => extract_quantity_and_name(raw_name, 1),
    }
}
