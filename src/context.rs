// Generic strategy holder and selector registry.
// Both are thin containers over boxed trait objects: a Context holds the one
// currently bound implementation, a Registry maps selector strings to many.

use std::collections::HashMap;

use crate::error::BehaviorError;

/// Holder of a replaceable, currently bound strategy.
///
/// The context may be empty before first use; invoking it through
/// [`Context::current`] surfaces that as [`BehaviorError::UnboundStrategy`]
/// rather than panicking. Rebinding is a single field assignment and retains
/// nothing from the previous strategy.
pub struct Context<S: ?Sized> {
    strategy: Option<Box<S>>,
}

impl<S: ?Sized> Context<S> {
    /// Creates a context with no strategy bound.
    pub fn unbound() -> Self {
        Self { strategy: None }
    }

    /// Replaces the active strategy. Legal from empty or non-empty state;
    /// last write wins.
    pub fn bind(&mut self, strategy: Box<S>) {
        self.strategy = Some(strategy);
    }

    /// Resolves the most recently bound strategy.
    pub fn current(&self) -> Result<&S, BehaviorError> {
        self.strategy
            .as_deref()
            .ok_or(BehaviorError::UnboundStrategy)
    }

    pub fn is_bound(&self) -> bool {
        self.strategy.is_some()
    }
}

impl<S: ?Sized> Default for Context<S> {
    fn default() -> Self {
        Self::unbound()
    }
}

/// Maps a case-insensitive selector string to a capability implementation.
///
/// Registering under an existing selector replaces the previous entry.
pub struct Registry<S: ?Sized> {
    entries: HashMap<String, Box<S>>,
}

impl<S: ?Sized> Registry<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, selector: &str, value: Box<S>) {
        self.entries.insert(selector.to_ascii_lowercase(), value);
    }

    pub fn get(&self, selector: &str) -> Option<&S> {
        self.entries
            .get(&selector.to_ascii_lowercase())
            .map(|entry| &**entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: ?Sized> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter {
        fn greet(&self) -> &'static str;
    }

    struct English;
    impl Greeter for English {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    struct French;
    impl Greeter for French {
        fn greet(&self) -> &'static str {
            "bonjour"
        }
    }

    #[test]
    fn test_unbound_context_errors() {
        let context: Context<dyn Greeter> = Context::unbound();
        assert!(!context.is_bound());
        assert_eq!(
            context.current().err(),
            Some(BehaviorError::UnboundStrategy)
        );
    }

    #[test]
    fn test_bind_then_invoke() {
        let mut context: Context<dyn Greeter> = Context::unbound();
        context.bind(Box::new(English));
        assert!(context.is_bound());
        assert_eq!(context.current().unwrap().greet(), "hello");
    }

    #[test]
    fn test_rebinding_is_last_write_wins() {
        let mut context: Context<dyn Greeter> = Context::unbound();
        context.bind(Box::new(English));
        context.bind(Box::new(French));
        assert_eq!(context.current().unwrap().greet(), "bonjour");
    }

    #[test]
    fn test_registry_lookup_is_case_insensitive() {
        let mut registry: Registry<dyn Greeter> = Registry::new();
        registry.register("EN", Box::new(English));
        registry.register("fr", Box::new(French));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("en").unwrap().greet(), "hello");
        assert_eq!(registry.get("Fr").unwrap().greet(), "bonjour");
        assert!(registry.get("de").is_none());
    }

    #[test]
    fn test_registry_replaces_on_reregister() {
        let mut registry: Registry<dyn Greeter> = Registry::new();
        registry.register("default", Box::new(English));
        registry.register("Default", Box::new(French));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("default").unwrap().greet(), "bonjour");
    }

    #[test]
    fn test_empty_registry() {
        let registry: Registry<dyn Greeter> = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }
}
