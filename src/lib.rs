//! Mathify · adaptive learning engine
//!
//! Offline analysis of a learner's topic progress (statistics, strengths and
//! weaknesses, next-topic recommendations, learning path, difficulty) and
//! curriculum-aware procedural question generation, plus the thin axum
//! service that exposes them.

pub mod telemetry;
pub mod util;
pub mod domain;
pub mod config;
pub mod stats;
pub mod analysis;
pub mod questions;
pub mod state;
pub mod protocol;
pub mod logic;
pub mod routes;
