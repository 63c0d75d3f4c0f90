//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod games;
pub mod leaderboard;
pub mod players;
pub mod session;
pub mod session_config;
pub mod shop;
pub mod state;
pub mod support;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod views;

pub use error::ApiResult;
