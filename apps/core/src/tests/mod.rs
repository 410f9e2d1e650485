//! Test Module
//!
//! Cross-module test suite for the KetoScout core.
//!
//! ## Test Categories
//! - `scoring_tests`: chain detection, chain menu scoring, heuristic scoring, routing
//! - `review_tests`: signal extraction, confidence aggregation, summaries
//! - `database_tests`: signal store upserts and lookups
//! - `integration_tests`: score, analyze and rank a full batch

pub mod review_tests;
