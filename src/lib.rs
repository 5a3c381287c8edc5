//! GoalFlow - Terminal savings-goal and budget tracker
//!
//! This library provides the core functionality for GoalFlow: recording
//! income and expense transactions, tracking per-category budgets, and
//! funding savings goals by waterfall priority (earlier goals are funded in
//! full before later goals receive any surplus).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals, budgets)
//! - `allocator`: The pure waterfall allocator and spend aggregator
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! The allocator is deliberately kept free of I/O: the service layer reads
//! stores, runs the computation, and writes results back, so the core logic
//! stays testable in isolation.

pub mod allocator;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::GoalflowError;
