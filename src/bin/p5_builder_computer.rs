//! Builder pattern: a consuming builder for computers and a director driving
//! interchangeable meal builders.
//!
//! Run with: cargo run --bin p5_builder_computer

use colored::Colorize;
use pluggable_behaviors::builder::{
    Computer, MealDirector, NonVegMealBuilder, VegMealBuilder,
};

fn main() {
    println!("{}", "=== Computer Builds ===".bold());

    let basic = Computer::builder("Intel i5", "8GB").build();
    println!("{}\n", basic);

    let gaming = Computer::builder("AMD Ryzen 9", "32GB")
        .storage("1TB SSD")
        .graphics_card("RTX 4080")
        .cooling("liquid cooling")
        .motherboard("X670E")
        .build();
    println!("{}\n", gaming);

    let office = Computer::builder("Intel i7", "16GB")
        .storage("512GB SSD")
        .graphics_card("integrated graphics")
        .build();
    println!("{}", office);

    println!("\n{}", "=== Meals via Director ===".bold());

    let mut veg = VegMealBuilder::new();
    let meal = MealDirector::new(&mut veg).construct_full();
    println!("{}\n", meal);

    // Same step sequence, different builder, different meal.
    let mut non_veg = NonVegMealBuilder::new();
    let meal = MealDirector::new(&mut non_veg).construct_light();
    println!("{}", meal);
}
