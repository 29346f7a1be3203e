//! Subtotal computation for one pizza configuration.

use crate::pizza::{PizzaSize, Topping};
use crate::types::Money;

/// Compute the subtotal for `quantity` pizzas of the given size and
/// toppings.
///
/// `subtotal = (base_price(size) + topping_price × |toppings|) × quantity`
///
/// Every topping entry is charged, including duplicates. Size and
/// quantity validity are the form layer's responsibility; this function
/// only does arithmetic.
#[must_use]
pub fn subtotal(size: PizzaSize, toppings: &[Topping], quantity: u32) -> Money {
    let extras = Topping::price() * u32::try_from(toppings.len()).unwrap_or(u32::MAX);
    (size.base_price() + extras) * quantity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mediana_with_two_toppings_times_two() {
        // (80 + 2×10) × 2 = 200
        let result = subtotal(PizzaSize::Mediana, &[Topping::Jamon, Topping::Pina], 2);
        assert_eq!(result, Money::from_pesos(200));
    }

    #[test]
    fn test_no_toppings() {
        assert_eq!(
            subtotal(PizzaSize::Chica, &[], 1),
            PizzaSize::Chica.base_price()
        );
    }

    #[test]
    fn test_every_size_and_topping_count() {
        for size in PizzaSize::ALL {
            for n in 0..=5 {
                let toppings = vec![Topping::Chorizo; n];
                for qty in 1..=3 {
                    let expected = (size.base_price()
                        + Money::from_pesos(10 * u32::try_from(n).expect("small")))
                        * qty;
                    assert_eq!(subtotal(size, &toppings, qty), expected);
                }
            }
        }
    }

    #[test]
    fn test_duplicate_toppings_each_charged() {
        let result = subtotal(PizzaSize::Grande, &[Topping::Gomitas, Topping::Gomitas], 1);
        assert_eq!(result, Money::from_pesos(140));
    }
}
