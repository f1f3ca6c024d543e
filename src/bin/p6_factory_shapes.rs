//! Factory pattern: selector-driven shape construction.
//!
//! Run with: cargo run --bin p6_factory_shapes

use colored::Colorize;
use pluggable_behaviors::factory::ShapeFactory;

fn main() {
    println!("{}", "=== Shape Factory ===".bold());

    for kind in ["CIRCLE", "rectangle", "Circle", "triangle"] {
        match ShapeFactory::create(kind) {
            Some(shape) => println!("{} -> {}", kind, shape.draw()),
            None => println!("{}", format!("{} -> no such shape", kind).red()),
        }
    }
}
