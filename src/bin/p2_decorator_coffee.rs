//! Decorator pattern: stacked beverage wrappers with cumulative cost, plus
//! the std-io flavor of the same idea (buffered file streams).
//!
//! Run with: cargo run --bin p2_decorator_coffee

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use colored::Colorize;
use pluggable_behaviors::decorator::{with_extra, Beverage, Chocolate, Milk, SimpleCoffee, Sugar};
use pluggable_behaviors::singleton::CurrencyFormat;

fn main() -> io::Result<()> {
    let price = |drink: &dyn Beverage| CurrencyFormat::global().format(drink.cost());

    println!("{}", "=== Coffee Orders ===".bold());
    let simple = SimpleCoffee;
    println!("{} - {}", simple.description(), price(&simple));

    let with_milk = Milk::new(Box::new(SimpleCoffee));
    println!("{} - {}", with_milk.description(), price(&with_milk));

    let with_sugar = Sugar::new(Box::new(SimpleCoffee));
    println!("{} - {}", with_sugar.description(), price(&with_sugar));

    // Triple stack: wrap order shows up in the description, the total does
    // not depend on it.
    let deluxe = Chocolate::new(Box::new(Sugar::new(Box::new(Milk::new(Box::new(
        SimpleCoffee,
    ))))));
    println!("{} - {}", deluxe.description(), price(&deluxe));

    println!("\n{}", "=== Dynamic Composition ===".bold());
    let mut order: Box<dyn Beverage> = Box::new(SimpleCoffee);
    for extra in ["milk", "sugar", "chocolate", "whiskey"] {
        order = match with_extra(extra, order) {
            Ok(wrapped) => {
                println!(
                    "added {}: {} - {}",
                    extra,
                    wrapped.description(),
                    price(&*wrapped)
                );
                wrapped
            }
            Err(err) => {
                println!("{}", format!("skipped {}: {}", extra, err).red());
                break;
            }
        };
    }

    // The standard library stacks stream wrappers the same way: a buffer
    // around a file, a reader around the buffer.
    println!("\n{}", "=== Buffered Stream Wrappers ===".bold());
    let path = std::env::temp_dir().join("decorator_demo.txt");

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "123")?;
    writeln!(writer, "hello world")?;
    writeln!(writer, "3.14159")?;
    writer.flush()?;

    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    println!("read back:");
    for line in reader.lines() {
        println!("  {}", line?);
    }
    std::fs::remove_file(&path)?;

    Ok(())
}
