//! Shopping List Server - HTTP front end for the shopping list store
//!
//! Exposes a single resource, `/shopping-list`, backed by a JSON file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Shopping List Server                    │
//! ├─────────────────────────────────────────────────────────┤
//! │   GET      POST      PUT / PATCH      DELETE ?name=     │
//! │    │        │            │               │              │
//! │    └────────┴─────┬──────┴───────────────┘              │
//! │                   │                                     │
//! │        ┌──────────▼──────────┐                          │
//! │        │ parse + validate    │   400 / 404 / 405        │
//! │        └──────────┬──────────┘                          │
//! │                   │ spawn_blocking                      │
//! │        ┌──────────▼──────────┐                          │
//! │        │     ItemStore       │   load → mutate → save   │
//! │        └──────────┬──────────┘                          │
//! │                   │                                     │
//! │           shopping-list.json                            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Endpoints
//!
//! | Verb        | Path                    | Success            |
//! |-------------|-------------------------|--------------------|
//! | GET         | `/shopping-list`        | 200, JSON array    |
//! | POST        | `/shopping-list`        | 201, created item  |
//! | PUT / PATCH | `/shopping-list`        | 200, updated item  |
//! | DELETE      | `/shopping-list?name=X` | 204, empty body    |
//!
//! Mutations are serialized by the store's write lock, so concurrent requests
//! never lose each other's updates.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, Result, ServerError};
pub use handlers::{router, AppState};
pub use server::Server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The one routed resource path
pub const ITEMS_PATH: &str = "/shopping-list";
