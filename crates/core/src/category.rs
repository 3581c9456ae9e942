//! Storage category classification.
//!
//! Categories are a closed set; items created from voice input get a
//! best-effort category guessed from fixed keyword groups, or none at all.

use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// Pantry storage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Lacteos,
    FrutaVerdura,
    Despensa,
    Bebidas,
}

const LACTEOS: &[&str] = &[
    "leche", "queso", "yogur", "mantequilla", "nata", "kefir", "cuajada",
];

const FRUTA_VERDURA: &[&str] = &[
    "manzana", "platano", "banana", "naranja", "limon", "tomate", "lechuga",
    "pepino", "zanahoria", "cebolla", "pimiento", "patata", "aguacate",
    "fresa", "uva", "pera", "melon", "sandia", "calabacin", "brocoli",
    "espinaca", "fruta", "verdura",
];

const DESPENSA: &[&str] = &[
    "arroz", "pasta", "macarron", "espagueti", "harina", "azucar", "sal",
    "aceite", "lenteja", "garbanzo", "alubia", "atun", "conserva", "galleta",
    "cereal", "pan", "cafe", "cacao", "chocolate", "legumbre",
];

const BEBIDAS: &[&str] = &[
    "agua", "zumo", "jugo", "refresco", "cola", "cerveza", "vino", "gaseosa",
    "batido", "sidra", "bebida",
];

impl Category {
    /// Guess the category for a product name.
    ///
    /// Case/diacritic-insensitive keyword lookup against the four fixed
    /// groups; the first group with a matching keyword wins, `None` when no
    /// group matches. Deterministic and total.
    pub fn guess(name: &str) -> Option<Category> {
        let needle = normalize(name);
        if needle.is_empty() {
            return None;
        }

        let groups: [(&[&str], Category); 4] = [
            (LACTEOS, Category::Lacteos),
            (FRUTA_VERDURA, Category::FrutaVerdura),
            (DESPENSA, Category::Despensa),
            (BEBIDAS, Category::Bebidas),
        ];

        for (keywords, category) in groups {
            if keywords.iter().any(|kw| needle.contains(kw)) {
                return Some(category);
            }
        }
        None
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lacteos => "lacteos",
            Category::FrutaVerdura => "fruta_verdura",
            Category::Despensa => "despensa",
            Category::Bebidas => "bebidas",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
