//! The menu: pizza sizes and extra toppings.
//!
//! Sizes and toppings are closed sets. Their display names (the Spanish
//! menu labels) are also the wire values submitted by the order form and
//! the strings persisted in `detalle_pizzas`, so parsing and display must
//! stay byte-for-byte symmetric.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Error returned when a size name is not on the menu.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pizza size: {0}")]
pub struct UnknownSize(pub String);

/// Error returned when a topping name is not on the menu.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown topping: {0}")]
pub struct UnknownTopping(pub String);

/// Pizza size tiers, each with a fixed base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    Chica,
    Mediana,
    Grande,
    Familiar,
    Jumbo,
}

impl PizzaSize {
    /// Every size, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Chica,
        Self::Mediana,
        Self::Grande,
        Self::Familiar,
        Self::Jumbo,
    ];

    /// Base price for this size, before toppings.
    #[must_use]
    pub fn base_price(self) -> Money {
        let pesos = match self {
            Self::Chica => 40,
            Self::Mediana => 80,
            Self::Grande => 120,
            Self::Familiar => 150,
            Self::Jumbo => 200,
        };
        Money::from_pesos(pesos)
    }

    /// Menu label, also the form value and persisted string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chica => "Chica",
            Self::Mediana => "Mediana",
            Self::Grande => "Grande",
            Self::Familiar => "Familiar",
            Self::Jumbo => "Jumbo",
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PizzaSize {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownSize(s.to_owned()))
    }
}

/// Extra toppings, each flat-priced regardless of identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topping {
    #[serde(rename = "Jamón")]
    Jamon,
    #[serde(rename = "Piña")]
    Pina,
    #[serde(rename = "Champiñones")]
    Champinones,
    Chorizo,
    Gomitas,
}

impl Topping {
    /// Every topping, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Jamon,
        Self::Pina,
        Self::Champinones,
        Self::Chorizo,
        Self::Gomitas,
    ];

    /// Flat price of any extra topping.
    #[must_use]
    pub fn price() -> Money {
        Money::from_pesos(10)
    }

    /// Menu label, also the form value and persisted string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jamon => "Jamón",
            Self::Pina => "Piña",
            Self::Champinones => "Champiñones",
            Self::Chorizo => "Chorizo",
            Self::Gomitas => "Gomitas",
        }
    }

    /// Join toppings into the comma-separated string persisted with a
    /// line item, e.g. `"Jamón, Piña"`.
    #[must_use]
    pub fn join(toppings: &[Self]) -> String {
        toppings
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topping {
    type Err = UnknownTopping;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topping| topping.as_str() == s)
            .ok_or_else(|| UnknownTopping(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(PizzaSize::Chica.base_price(), Money::from_pesos(40));
        assert_eq!(PizzaSize::Mediana.base_price(), Money::from_pesos(80));
        assert_eq!(PizzaSize::Grande.base_price(), Money::from_pesos(120));
        assert_eq!(PizzaSize::Familiar.base_price(), Money::from_pesos(150));
        assert_eq!(PizzaSize::Jumbo.base_price(), Money::from_pesos(200));
    }

    #[test]
    fn test_size_round_trips_through_label() {
        for size in PizzaSize::ALL {
            assert_eq!(size.as_str().parse::<PizzaSize>(), Ok(size));
        }
        assert!("Gigante".parse::<PizzaSize>().is_err());
    }

    #[test]
    fn test_topping_labels_keep_accents() {
        assert_eq!("Jamón".parse::<Topping>(), Ok(Topping::Jamon));
        assert_eq!("Piña".parse::<Topping>(), Ok(Topping::Pina));
        // Unaccented spellings are not menu values
        assert!("Jamon".parse::<Topping>().is_err());
    }

    #[test]
    fn test_join() {
        assert_eq!(
            Topping::join(&[Topping::Jamon, Topping::Pina]),
            "Jamón, Piña"
        );
        assert_eq!(Topping::join(&[]), "");
    }

    #[test]
    fn test_serde_uses_menu_labels() {
        let json = serde_json::to_string(&Topping::Pina).expect("serialize");
        assert_eq!(json, "\"Piña\"");
        let back: Topping = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Topping::Pina);
    }
}
