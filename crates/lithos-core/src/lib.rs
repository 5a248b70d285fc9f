//! Core types and traits for the Lithos engine.
//!
//! This crate provides the foundational pieces shared by the device and
//! display layers:
//! - Rectangle geometry for display descriptors
//! - The [`Criteria`] trait and order-preserving [`filter`] used by
//!   capability negotiation

pub mod geometry;
pub mod select;

pub use geometry::Rect;
pub use select::{filter, Criteria};
