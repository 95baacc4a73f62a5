//! Business logic layer

pub mod bank;

pub use bank::Bank;
