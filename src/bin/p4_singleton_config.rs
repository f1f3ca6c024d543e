//! Singleton pattern: a shared currency format, initialized exactly once and
//! read without locking afterwards.
//!
//! Run with: cargo run --bin p4_singleton_config

use std::thread;

use colored::Colorize;
use pluggable_behaviors::singleton::{CurrencyFormat, DEFAULT_CURRENCY};

fn main() {
    println!("{}", "=== Shared Currency Format ===".bold());
    let format = CurrencyFormat::global();
    println!("symbol: {}", format.symbol());
    println!("precision: {}", format.precision());
    println!("54.239 renders as {}", format.format(54.239));

    println!("\n{}", "=== Same Instance Everywhere ===".bold());
    let again = CurrencyFormat::global();
    println!("reference-equal accessors: {}", std::ptr::eq(format, again));
    println!("matches process default: {}", *format == DEFAULT_CURRENCY);

    println!("\n{}", "=== Concurrent First Access ===".bold());
    let handles: Vec<_> = (0..4)
        .map(|id| {
            thread::spawn(move || {
                let address = CurrencyFormat::global() as *const CurrencyFormat as usize;
                (id, address)
            })
        })
        .collect();

    let mut addresses = Vec::new();
    for handle in handles {
        match handle.join() {
            Ok((id, address)) => {
                println!("thread {} sees instance at {:#x}", id, address);
                addresses.push(address);
            }
            Err(_) => println!("{}", "worker thread panicked".red()),
        }
    }

    if addresses.windows(2).all(|pair| pair[0] == pair[1]) {
        println!("{}", "all threads share one instance".green());
    }
}
