//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, caller resolution and DTO conversion
//! - **Service Layer** (`service/`) - Booking lifecycle, ownership and visibility rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Identity header guard
//!
//! Supporting modules: `config` (environment configuration), `state` (shared application
//! state), `startup` (tracing, database and migrations), `router` (routes and OpenAPI
//! document) and `util` (query helpers).
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** resolves the caller via `AuthGuard`, converts DTOs to params
//! 3. **Service** applies the business rules, passing the caller explicitly
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
