//! teller - Terminal-based banking ledger with flat-file persistence
//!
//! This library provides the core functionality for the teller banking
//! ledger: customers own checking, savings, and loan accounts, each with a
//! balance and an append-only transaction history, persisted to plain text
//! files between sessions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (customers, accounts, transaction logs)
//! - `storage`: Flat-file storage layer (roster and statement formats)
//! - `services`: Business logic layer (the bank ledger store)
//! - `cli`: Command handlers
//! - `display`: Terminal output formatting

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TellerError;
