//! Analyzer module - ATS scoring engine

pub mod catalog;
pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{AggregateStats, ScoringEngine};
pub use scoring::ScoreCalculator;
