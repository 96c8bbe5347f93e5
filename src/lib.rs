//! Greenlane - Vehicle Comparison and Eco-Cost Estimation Engine
//!
//! This crate normalizes heterogeneous vehicle records into comparable
//! metrics (sustainability scores, running-cost and CO₂ projections,
//! localized on-road prices) and composes them into decision payloads
//! for presentation surfaces.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
