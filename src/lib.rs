//! Hours-proportional expense split engine
//!
//! This crate splits a total amount of money between participants in
//! proportion to the hours each one contributed. Hours are either typed
//! directly or derived from a time-of-day range that may cross midnight.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
