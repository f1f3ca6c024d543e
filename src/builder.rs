// Staged construction: a consuming builder for computers and a
// director-driven builder family for meals.

use std::fmt;
use std::mem;

// ============================================================================
// Consuming builder
// ============================================================================

/// A machine with two required parts and a tail of optional ones.
#[derive(Debug)]
pub struct Computer {
    cpu: String,
    ram: String,
    storage: Option<String>,
    graphics_card: Option<String>,
    cooling: Option<String>,
    motherboard: Option<String>,
}

impl Computer {
    /// Entry point to the builder; required fields up front.
    pub fn builder(cpu: impl Into<String>, ram: impl Into<String>) -> ComputerBuilder {
        ComputerBuilder::new(cpu, ram)
    }

    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    pub fn ram(&self) -> &str {
        &self.ram
    }

    pub fn storage(&self) -> Option<&str> {
        self.storage.as_deref()
    }

    pub fn graphics_card(&self) -> Option<&str> {
        self.graphics_card.as_deref()
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset(part: &Option<String>) -> &str {
            part.as_deref().unwrap_or("not configured")
        }

        write!(
            f,
            "Computer configuration:\n  CPU: {}\n  RAM: {}\n  Storage: {}\n  Graphics: {}\n  Cooling: {}\n  Motherboard: {}",
            self.cpu,
            self.ram,
            or_unset(&self.storage),
            or_unset(&self.graphics_card),
            or_unset(&self.cooling),
            or_unset(&self.motherboard),
        )
    }
}

/// Each setter takes `self` and returns `self` for chaining; `build`
/// consumes the builder.
pub struct ComputerBuilder {
    cpu: String,
    ram: String,
    storage: Option<String>,
    graphics_card: Option<String>,
    cooling: Option<String>,
    motherboard: Option<String>,
}

impl ComputerBuilder {
    pub fn new(cpu: impl Into<String>, ram: impl Into<String>) -> Self {
        Self {
            cpu: cpu.into(),
            ram: ram.into(),
            storage: None,
            graphics_card: None,
            cooling: None,
            motherboard: None,
        }
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn graphics_card(mut self, card: impl Into<String>) -> Self {
        self.graphics_card = Some(card.into());
        self
    }

    pub fn cooling(mut self, cooling: impl Into<String>) -> Self {
        self.cooling = Some(cooling.into());
        self
    }

    pub fn motherboard(mut self, motherboard: impl Into<String>) -> Self {
        self.motherboard = Some(motherboard.into());
        self
    }

    pub fn build(self) -> Computer {
        Computer {
            cpu: self.cpu,
            ram: self.ram,
            storage: self.storage,
            graphics_card: self.graphics_card,
            cooling: self.cooling,
            motherboard: self.motherboard,
        }
    }
}

// ============================================================================
// Builder family with a director
// ============================================================================

#[derive(Debug, Default)]
pub struct Meal {
    burger: Option<String>,
    drink: Option<String>,
    dessert: Option<String>,
}

impl Meal {
    pub fn burger(&self) -> Option<&str> {
        self.burger.as_deref()
    }

    pub fn drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    pub fn dessert(&self) -> Option<&str> {
        self.dessert.as_deref()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Meal contents:\n  Burger: {}\n  Drink: {}\n  Dessert: {}",
            self.burger.as_deref().unwrap_or("none"),
            self.drink.as_deref().unwrap_or("none"),
            self.dessert.as_deref().unwrap_or("none"),
        )
    }
}

/// Step interface the director drives. `finish` hands the assembled meal
/// over and leaves the builder empty, ready for the next construction.
pub trait MealBuilder {
    fn add_burger(&mut self);
    fn add_drink(&mut self);
    fn add_dessert(&mut self);
    fn finish(&mut self) -> Meal;
}

#[derive(Default)]
pub struct VegMealBuilder {
    meal: Meal,
}

impl VegMealBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for VegMealBuilder {
    fn add_burger(&mut self) {
        self.meal.burger = Some("veggie burger".to_string());
    }

    fn add_drink(&mut self) {
        self.meal.drink = Some("orange juice".to_string());
    }

    fn add_dessert(&mut self) {
        self.meal.dessert = Some("fruit salad".to_string());
    }

    fn finish(&mut self) -> Meal {
        mem::take(&mut self.meal)
    }
}

#[derive(Default)]
pub struct NonVegMealBuilder {
    meal: Meal,
}

impl NonVegMealBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealBuilder for NonVegMealBuilder {
    fn add_burger(&mut self) {
        self.meal.burger = Some("beef burger".to_string());
    }

    fn add_drink(&mut self) {
        self.meal.drink = Some("cola".to_string());
    }

    fn add_dessert(&mut self) {
        self.meal.dessert = Some("ice cream".to_string());
    }

    fn finish(&mut self) -> Meal {
        mem::take(&mut self.meal)
    }
}

/// Encodes the step sequences; works with any [`MealBuilder`].
pub struct MealDirector<'a> {
    builder: &'a mut dyn MealBuilder,
}

impl<'a> MealDirector<'a> {
    pub fn new(builder: &'a mut dyn MealBuilder) -> Self {
        Self { builder }
    }

    /// Burger, drink and dessert.
    pub fn construct_full(&mut self) -> Meal {
        self.builder.add_burger();
        self.builder.add_drink();
        self.builder.add_dessert();
        self.builder.finish()
    }

    /// Burger and drink only.
    pub fn construct_light(&mut self) -> Meal {
        self.builder.add_burger();
        self.builder.add_drink();
        self.builder.finish()
    }
}
