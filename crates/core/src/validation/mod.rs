//! Field validation engine.
//!
//! Rule types, submitted values, localized messages and the per-field
//! engine. Pure logic with no I/O.

pub mod engine;
pub mod messages;
pub mod rules;
pub mod value;

pub use engine::{ErrorState, Validatable, ValidationEngine};
pub use messages::{MessageCatalog, MessageKey};
pub use rules::{PatternRule, PredicateRule, Rule};
pub use value::FieldValue;
