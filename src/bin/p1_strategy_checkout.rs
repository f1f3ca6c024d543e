//! Strategy pattern: runtime-swappable payment and sorting behavior.
//!
//! Run with: cargo run --bin p1_strategy_checkout

use colored::Colorize;
use pluggable_behaviors::strategy::{
    Alipay, BubbleSort, CreditCard, PaymentMethod, QuickSort, ShoppingCart, SortStrategy, Sorter,
    WechatPay,
};
use pluggable_behaviors::{BehaviorError, Registry};

fn main() {
    println!("{}", "=== Shopping Cart Checkout ===".bold());
    let mut cart = ShoppingCart::new();
    cart.add_item(29.99);
    cart.add_item(15.50);
    cart.add_item(8.75);
    println!("3 items in the cart, total ${:.2}", cart.total());

    // Checking out before any payment method is selected is a recoverable
    // condition, not a crash.
    match cart.checkout() {
        Ok(receipt) => println!("{}", receipt),
        Err(err) => println!("{}", format!("checkout refused: {}", err).red()),
    }

    println!("\n--- paying with a credit card ---");
    cart.set_payment(Box::new(CreditCard::new("Zhang San", "1234-5678-9012-3456")));
    report(cart.checkout());

    println!("\n--- switching to Alipay ---");
    cart.set_payment(Box::new(Alipay::new("138****8888")));
    report(cart.checkout());

    println!("\n{}", "=== Payment Registry ===".bold());
    let mut registry: Registry<dyn PaymentMethod> = Registry::new();
    registry.register("card", Box::new(CreditCard::new("Li Si", "4321-8765-2109-6543")));
    registry.register("alipay", Box::new(Alipay::new("139****9999")));
    registry.register("wechat", Box::new(WechatPay::new("wx_0d2f8a")));

    for selector in ["ALIPAY", "wechat", "paypal"] {
        match registry.get(selector) {
            Some(method) => println!("{} -> {}", selector, method.pay(12.0)),
            None => println!("{}", format!("{} -> no such payment method", selector).red()),
        }
    }

    println!("\n{}", "=== Sorting Strategies ===".bold());
    let numbers = [64, 34, 25, 12, 22, 11, 90];
    let mut sorter = Sorter::new();

    for strategy in [
        Box::new(BubbleSort) as Box<dyn SortStrategy>,
        Box::new(QuickSort),
    ] {
        sorter.set_strategy(strategy);
        let mut values = numbers;
        println!("original:             {:?}", values);
        match sorter.sort(&mut values) {
            Ok(()) => println!(
                "after {}: {:?}",
                sorter.strategy_name().unwrap_or("?"),
                values
            ),
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}

fn report(result: Result<String, BehaviorError>) {
    match result {
        Ok(receipt) => {
            println!("{}", receipt);
            println!("{}", "payment successful".green());
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
}
