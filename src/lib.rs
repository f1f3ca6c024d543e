//! Pluggable-behavior registry: classic object-oriented design patterns
//! re-expressed as trait objects and composition.
//!
//! Three mechanisms share one underlying structure (a value implementing a
//! capability trait, optionally wrapping another such value):
//!
//! - **Strategy** ([`context`], [`strategy`]): runtime-swappable algorithms
//!   bound to a [`Context`], with a selector [`Registry`] for lookup.
//! - **Decorator** ([`decorator`]): stackable wrappers, each adding a fixed
//!   cost increment and a description suffix in nesting order.
//! - **Adapter** ([`adapter`]): translation between incompatible capability
//!   shapes, including a bidirectional socket variant.
//!
//! Supporting patterns from the same catalog:
//!
//! - **Singleton** ([`singleton`]): a shared currency format initialized
//!   exactly once.
//! - **Builder** ([`builder`]): consuming builder and a director-driven
//!   builder family.
//! - **Factory** ([`factory`]): selector-driven shape construction.
//! - **Observer** ([`observer`]): a subject broadcasting state changes.
//!
//! Failures are recoverable values, never panics: an unbound context reports
//! [`BehaviorError::UnboundStrategy`], an unrecognized selector
//! [`BehaviorError::UnsupportedFormat`].
//!
//! Run individual demonstrations with:
//!
//! ```bash
//! cargo run --bin p1_strategy_checkout
//! cargo run --bin p2_decorator_coffee
//! cargo run --bin p3_adapter_media
//! cargo run --bin p4_singleton_config
//! cargo run --bin p5_builder_computer
//! cargo run --bin p6_factory_shapes
//! cargo run --bin p7_observer_updates
//! ```

pub mod adapter;
pub mod builder;
pub mod context;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod strategy;

pub use context::{Context, Registry};
pub use error::BehaviorError;
