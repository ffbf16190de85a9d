//! Product categories.
//!
//! The marketplace classifies every product into one of a fixed, closed
//! set of categories. The wire format (and the query-string format used by
//! the category toggles) is the SCREAMING_SNAKE_CASE name.

use serde::{Deserialize, Serialize};

/// A product category.
///
/// Maps to the backend's `categoria` field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Frutas,
    Legumes,
    Verduras,
    Embalados,
    Doces,
    Granja,
    Outros,
}

impl Category {
    /// All categories, in the order the page displays them.
    pub const ALL: [Self; 7] = [
        Self::Frutas,
        Self::Legumes,
        Self::Verduras,
        Self::Embalados,
        Self::Doces,
        Self::Granja,
        Self::Outros,
    ];

    /// The wire name, e.g. `FRUTAS`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Frutas => "FRUTAS",
            Self::Legumes => "LEGUMES",
            Self::Verduras => "VERDURAS",
            Self::Embalados => "EMBALADOS",
            Self::Doces => "DOCES",
            Self::Granja => "GRANJA",
            Self::Outros => "OUTROS",
        }
    }

    /// Human-readable label for the category toggle.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Frutas => "Frutas",
            Self::Legumes => "Legumes",
            Self::Verduras => "Verduras",
            Self::Embalados => "Embalados",
            Self::Doces => "Doces",
            Self::Granja => "Granja e Pescados",
            Self::Outros => "Outros",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FRUTAS" => Ok(Self::Frutas),
            "LEGUMES" => Ok(Self::Legumes),
            "VERDURAS" => Ok(Self::Verduras),
            "EMBALADOS" => Ok(Self::Embalados),
            "DOCES" => Ok(Self::Doces),
            "GRANJA" => Ok(Self::Granja),
            "OUTROS" => Ok(Self::Outros),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).expect("serializable");
            assert_eq!(json, format!("\"{category}\""));
            let back: Category = serde_json::from_str(&json).expect("round trip");
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_from_str_matches_display() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("PEIXES".parse::<Category>().is_err());
    }

    #[test]
    fn test_granja_label() {
        assert_eq!(Category::Granja.label(), "Granja e Pescados");
    }
}
