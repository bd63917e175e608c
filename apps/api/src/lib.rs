//! Tournament API Library
//!
//! Team registration, match scheduling, result processing and seed
//! ranking for a small two-team-per-match tournament, exposed over HTTP.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
