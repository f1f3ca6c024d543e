// Runtime-swappable payment and sorting behavior.
// Strategies are stateless with respect to their context: a ShoppingCart or
// Sorter only ever sees the most recently bound implementation.

use crate::context::Context;
use crate::error::BehaviorError;
use crate::singleton::CurrencyFormat;

// ============================================================================
// Payment strategies
// ============================================================================

/// A way of settling an amount. Implementations are immutable after
/// construction and hold only the configuration their receipt needs.
pub trait PaymentMethod {
    fn name(&self) -> &str;

    /// Produces the receipt text. Payment is simulated; no real integration.
    fn pay(&self, amount: f64) -> String;
}

pub struct CreditCard {
    holder: String,
    number: String,
}

impl CreditCard {
    pub fn new(holder: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            number: number.into(),
        }
    }
}

impl PaymentMethod for CreditCard {
    fn name(&self) -> &str {
        "credit card"
    }

    fn pay(&self, amount: f64) -> String {
        format!(
            "paid {} with credit card (holder: {}, card: {})",
            CurrencyFormat::global().format(amount),
            self.holder,
            self.number
        )
    }
}

pub struct Alipay {
    mobile: String,
}

impl Alipay {
    pub fn new(mobile: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
        }
    }
}

impl PaymentMethod for Alipay {
    fn name(&self) -> &str {
        "Alipay"
    }

    fn pay(&self, amount: f64) -> String {
        format!(
            "paid {} with Alipay (mobile: {}), redirecting to the Alipay app",
            CurrencyFormat::global().format(amount),
            self.mobile
        )
    }
}

pub struct WechatPay {
    openid: String,
}

impl WechatPay {
    pub fn new(openid: impl Into<String>) -> Self {
        Self {
            openid: openid.into(),
        }
    }
}

impl PaymentMethod for WechatPay {
    fn name(&self) -> &str {
        "WeChat Pay"
    }

    fn pay(&self, amount: f64) -> String {
        format!(
            "paid {} with WeChat Pay (openid: {}), waiting for QR scan",
            CurrencyFormat::global().format(amount),
            self.openid
        )
    }
}

/// Accumulates item prices and checks out through the currently selected
/// payment method.
pub struct ShoppingCart {
    items: Vec<f64>,
    payment: Context<dyn PaymentMethod>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            payment: Context::unbound(),
        }
    }

    pub fn add_item(&mut self, price: f64) {
        self.items.push(price);
    }

    pub fn total(&self) -> f64 {
        self.items.iter().sum()
    }

    /// Selects the payment method; replaces any earlier selection.
    pub fn set_payment(&mut self, method: Box<dyn PaymentMethod>) {
        self.payment.bind(method);
    }

    /// Settles the current total. Checking out before a method has been
    /// selected yields [`BehaviorError::UnboundStrategy`].
    pub fn checkout(&self) -> Result<String, BehaviorError> {
        let method = self.payment.current()?;
        Ok(method.pay(self.total()))
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Sort strategies
// ============================================================================

pub trait SortStrategy {
    fn name(&self) -> &str;
    fn sort(&self, values: &mut [i32]);
}

pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &str {
        "bubble sort"
    }

    fn sort(&self, values: &mut [i32]) {
        let n = values.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if values[j] > values[j + 1] {
                    values.swap(j, j + 1);
                }
            }
        }
    }
}

pub struct QuickSort;

impl QuickSort {
    fn quicksort(values: &mut [i32]) {
        if values.len() <= 1 {
            return;
        }
        let pivot = Self::partition(values);
        let (left, right) = values.split_at_mut(pivot);
        Self::quicksort(left);
        Self::quicksort(&mut right[1..]);
    }

    // Lomuto partition, last element as pivot.
    fn partition(values: &mut [i32]) -> usize {
        let high = values.len() - 1;
        let pivot = values[high];
        let mut i = 0;
        for j in 0..high {
            if values[j] < pivot {
                values.swap(i, j);
                i += 1;
            }
        }
        values.swap(i, high);
        i
    }
}

impl SortStrategy for QuickSort {
    fn name(&self) -> &str {
        "quick sort"
    }

    fn sort(&self, values: &mut [i32]) {
        Self::quicksort(values);
    }
}

/// Sorts slices with whichever strategy is currently bound.
pub struct Sorter {
    strategy: Context<dyn SortStrategy>,
}

impl Sorter {
    pub fn new() -> Self {
        Self {
            strategy: Context::unbound(),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy.bind(strategy);
    }

    pub fn strategy_name(&self) -> Result<&str, BehaviorError> {
        Ok(self.strategy.current()?.name())
    }

    pub fn sort(&self, values: &mut [i32]) -> Result<(), BehaviorError> {
        self.strategy.current()?.sort(values);
        Ok(())
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_without_method_errors() {
        let mut cart = ShoppingCart::new();
        cart.add_item(29.99);
        assert_eq!(cart.checkout(), Err(BehaviorError::UnboundStrategy));
    }

    #[test]
    fn test_cart_totals_items() {
        let mut cart = ShoppingCart::new();
        cart.add_item(29.99);
        cart.add_item(15.50);
        cart.add_item(8.75);
        assert!((cart.total() - 54.24).abs() < 1e-9);
    }

    #[test]
    fn test_checkout_uses_selected_method() {
        let mut cart = ShoppingCart::new();
        cart.add_item(10.0);
        cart.set_payment(Box::new(CreditCard::new("Zhang San", "1234-5678-9012-3456")));

        let receipt = cart.checkout().unwrap();
        assert!(receipt.contains("credit card"));
        assert!(receipt.contains("$10.00"));
        assert!(receipt.contains("Zhang San"));
    }

    #[test]
    fn test_switching_method_is_last_write_wins() {
        let mut cart = ShoppingCart::new();
        cart.add_item(5.0);
        cart.set_payment(Box::new(CreditCard::new("Zhang San", "1234")));
        cart.set_payment(Box::new(Alipay::new("138****8888")));

        let receipt = cart.checkout().unwrap();
        assert!(receipt.contains("Alipay"));
        assert!(!receipt.contains("credit card"));
    }

    #[test]
    fn test_bubble_sort() {
        let mut values = [64, 34, 25, 12, 22, 11, 90];
        BubbleSort.sort(&mut values);
        assert_eq!(values, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_quick_sort() {
        let mut values = [64, 34, 25, 12, 22, 11, 90];
        QuickSort.sort(&mut values);
        assert_eq!(values, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_sorts_agree_on_edge_cases() {
        for values in [vec![], vec![7], vec![3, 3, 3], vec![5, 4, 3, 2, 1]] {
            let mut bubble = values.clone();
            let mut quick = values.clone();
            BubbleSort.sort(&mut bubble);
            QuickSort.sort(&mut quick);

            let mut expected = values;
            expected.sort_unstable();
            assert_eq!(bubble, expected);
            assert_eq!(quick, expected);
        }
    }

    #[test]
    fn test_sorter_without_strategy_errors() {
        let sorter = Sorter::new();
        let mut values = [2, 1];
        assert_eq!(sorter.sort(&mut values), Err(BehaviorError::UnboundStrategy));
        // Untouched on failure.
        assert_eq!(values, [2, 1]);
    }

    #[test]
    fn test_sorter_delegates_to_bound_strategy() {
        let mut sorter = Sorter::new();
        sorter.set_strategy(Box::new(BubbleSort));
        assert_eq!(sorter.strategy_name().unwrap(), "bubble sort");

        sorter.set_strategy(Box::new(QuickSort));
        assert_eq!(sorter.strategy_name().unwrap(), "quick sort");

        let mut values = [9, 1, 5];
        sorter.sort(&mut values).unwrap();
        assert_eq!(values, [1, 5, 9]);
    }
}
