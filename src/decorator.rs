// Composable beverage wrappers with a cumulative cost and description.
// Each wrapper owns exactly one inner beverage, never mutates it, and adds a
// fixed cost increment plus a " + <name>" description suffix. Nesting depth
// is unbounded and caller-controlled; description order tracks nesting order.

use crate::error::BehaviorError;

pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

/// Base component: plain coffee, no extras.
pub struct SimpleCoffee;

impl Beverage for SimpleCoffee {
    fn description(&self) -> String {
        "simple coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{} + milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Sugar {
    fn description(&self) -> String {
        format!("{} + sugar", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.2
    }
}

pub struct Chocolate {
    inner: Box<dyn Beverage>,
}

impl Chocolate {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Chocolate {
    fn description(&self) -> String {
        format!("{} + chocolate", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.8
    }
}

/// Selector-driven wrapping for dynamic composition. Matching is
/// case-insensitive; unknown kinds degrade gracefully with
/// [`BehaviorError::UnsupportedFormat`].
pub fn with_extra(
    kind: &str,
    inner: Box<dyn Beverage>,
) -> Result<Box<dyn Beverage>, BehaviorError> {
    match kind.to_ascii_lowercase().as_str() {
        "milk" => Ok(Box::new(Milk::new(inner))),
        "sugar" => Ok(Box::new(Sugar::new(inner))),
        "chocolate" => Ok(Box::new(Chocolate::new(inner))),
        _ => Err(BehaviorError::UnsupportedFormat(kind.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use proptest::prelude::*;

    const KINDS: [&str; 3] = ["milk", "sugar", "chocolate"];
    const INCREMENTS: [f64; 3] = [0.5, 0.2, 0.8];

    #[test]
    fn test_base_coffee() {
        assert_eq!(SimpleCoffee.description(), "simple coffee");
        assert!((SimpleCoffee.cost() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_wrapper() {
        let coffee = Milk::new(Box::new(SimpleCoffee));
        assert_eq!(coffee.description(), "simple coffee + milk");
        assert!((coffee.cost() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_deluxe_stack() {
        let coffee = Chocolate::new(Box::new(Sugar::new(Box::new(Milk::new(Box::new(
            SimpleCoffee,
        ))))));
        assert!((coffee.cost() - 3.5).abs() < 1e-9);
        assert_eq!(
            coffee.description(),
            "simple coffee + milk + sugar + chocolate"
        );
    }

    #[test]
    fn test_with_extra_is_case_insensitive() {
        let coffee = with_extra("MILK", Box::new(SimpleCoffee)).unwrap();
        assert_eq!(coffee.description(), "simple coffee + milk");
    }

    #[test]
    fn test_with_extra_unknown_kind() {
        assert_eq!(
            with_extra("whiskey", Box::new(SimpleCoffee)).err(),
            Some(BehaviorError::UnsupportedFormat("whiskey".to_string()))
        );
    }

    #[test]
    fn test_cost_is_order_independent() {
        for order in (0..KINDS.len()).permutations(KINDS.len()) {
            let mut drink: Box<dyn Beverage> = Box::new(SimpleCoffee);
            let mut expected_description = String::from("simple coffee");
            for &k in &order {
                drink = with_extra(KINDS[k], drink).unwrap();
                expected_description.push_str(" + ");
                expected_description.push_str(KINDS[k]);
            }

            // Same total for every order, but the description tracks the
            // nesting order exactly.
            assert!((drink.cost() - 3.5).abs() < 1e-9);
            assert_eq!(drink.description(), expected_description);
        }
    }

    proptest! {
        #[test]
        fn test_arbitrary_stacks(stack in proptest::collection::vec(0usize..3, 0..8)) {
            let mut drink: Box<dyn Beverage> = Box::new(SimpleCoffee);
            let mut expected_cost = 2.0;
            let mut expected_description = String::from("simple coffee");

            for &k in &stack {
                drink = with_extra(KINDS[k], drink).unwrap();
                expected_cost += INCREMENTS[k];
                expected_description.push_str(" + ");
                expected_description.push_str(KINDS[k]);
            }

            prop_assert!((drink.cost() - expected_cost).abs() < 1e-9);
            prop_assert_eq!(drink.description(), expected_description);
        }
    }
}
