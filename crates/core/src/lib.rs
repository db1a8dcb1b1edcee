//! Server-side form toolkit.
//!
//! Value widgets carry a [`validation::ValidationEngine`] that evaluates
//! submitted values against length bounds and ordered rules, then render
//! themselves to HTML with the localized error message inline.

pub mod error;
pub mod form;
pub mod validation;
pub mod widgets;
