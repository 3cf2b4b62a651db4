//! # panstock-domain
//!
//! Pure domain model for the panstock bakery inventory tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **`SupplyItem`** — the single inventory entity (name, quantity, unit)
//! - Enforce domain invariants (non-empty name, positive quantity)
//! - Hold the **merge policy**: lookup by name and quantity adjustment,
//!   separated from any HTTP transport so it is independently testable
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod supply_item;
