//! Pizza Box site service
//!
//! Serves the static website and relays its booking and contact forms to an
//! Airtable table.
//!
//! # Modules
//!
//! - `routes`: router wiring for the relay, the health probe and the site
//! - `services::assets`: path inference and not-found fallbacks for the site
//! - `services::store`: directory and HTTP-origin asset stores
//! - `services::relay`: maps form fields to a record and posts it to Airtable
//! - `client`: AirtableClient for the table's REST endpoint
//!
//! # Configuration
//!
//! All settings come from the environment (or a `.env` file) and are loaded
//! once into [`AppConfig`], which is passed down explicitly.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


// Re-export the main types for ease of use
pub use client::AirtableClient;
pub use config::AppConfig;
pub use handlers::AppState;
pub use routes::create_router;
