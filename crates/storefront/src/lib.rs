//! Sweet Shop Storefront library.
//!
//! Server-rendered storefront for the sweet shop: login and registration
//! forms, a product dashboard with search, and purchase controls. All
//! business logic and persistence live in the sweet shop API; this crate
//! forwards each user action as a single API call and renders the result.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
