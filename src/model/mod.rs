//! The order document consumed by the label renderer.
//!
//! These are plain serde DTOs. They are built once by [`crate::input::load_order`]
//! and shared read-only (behind an `Arc`) with every render job.

pub mod bill;
pub mod customer;
pub mod item;
pub mod order;
pub mod sequencing;
pub mod serde_helpers;

pub use bill::*;
pub use customer::*;
pub use item::*;
pub use order::*;
pub use sequencing::*;
