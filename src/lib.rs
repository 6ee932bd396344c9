//! Bilingual (Hebrew/English) site for Herzliya Volunteers.
//!
//! The library holds everything the server binary wires together, so it can
//! be exercised directly by the integration tests.

pub mod config;
pub mod i18n;
pub mod pages;
pub mod server;
pub mod sheets;
pub mod volunteer;
