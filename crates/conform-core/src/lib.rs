//! Core types, table loading, and configuration for conform.
//!
//! This crate provides the foundational data structures used across all conform crates:
//! - [`types`]: Cases, case ids, reference sequences, and the error type
//! - [`row`]: Raw table rows and their conversion into cases
//! - [`reference`]: Deriving the happy path from flagged rows
//! - [`table`]: Loading JSON / JSON-lines tables from disk
//! - [`paging`]: Windowed row delivery with a row budget
//! - [`config`]: Configuration loading from `.conform/conform.json`

pub mod config;
pub mod paging;
pub mod reference;
pub mod row;
pub mod table;
pub mod types;
