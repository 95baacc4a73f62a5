//! Terminal output formatting

pub mod customer;

pub use customer::{format_account_details, format_customer_details, format_customer_list};
