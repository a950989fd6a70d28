//! Sweet Shop Core - Shared domain types.
//!
//! This crate provides the types shared by the storefront and its tests:
//! - product records mirrored from the sweet shop API
//! - search criteria for the listing query
//! - the quantity selector that guards the buy control
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. Everything here is owned by the remote API and only mirrored
//! for rendering.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, sweets, search parameters, and quantity bounds

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
