//! Observer pattern: a subject broadcasting state changes in attach order.
//!
//! Run with: cargo run --bin p7_observer_updates

use std::sync::{Arc, Mutex};

use colored::Colorize;
use pluggable_behaviors::observer::{EventLog, Observer, Subject};

struct ConsoleObserver {
    name: String,
}

impl Observer for ConsoleObserver {
    fn update(&mut self, state: &str) {
        println!("{} received update: {}", self.name, state);
    }
}

fn main() {
    println!("{}", "=== Subject / Observer ===".bold());

    let mut subject = Subject::new();
    subject.attach(Arc::new(Mutex::new(ConsoleObserver {
        name: "observer 1".to_string(),
    })));
    subject.attach(Arc::new(Mutex::new(ConsoleObserver {
        name: "observer 2".to_string(),
    })));

    let log = Arc::new(Mutex::new(EventLog::new()));
    subject.attach(log.clone());

    subject.set_state("state changed!");
    subject.set_state("settled");

    println!("\n{}", "=== Recorded History ===".bold());
    match log.lock() {
        Ok(log) => {
            for (i, state) in log.states().iter().enumerate() {
                println!("{}: {}", i + 1, state);
            }
        }
        Err(_) => println!("{}", "event log poisoned".red()),
    }
    println!("current state: {}", subject.state());
}
