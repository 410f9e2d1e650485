//! # Reviews Module
//!
//! Keyword evidence from free-text reviews.
//!
//! ## Components
//! - `signals`: per-review phrase counts across nine categories
//! - `confidence`: weighted confidence and rationale text
//! - `analyzer`: restaurant-level orchestration with the verified-chain short-circuit
//! - `suggestions`: fallback dish ideas per cuisine

pub mod analyzer;
pub mod confidence;
pub mod signals;
pub mod suggestions;

pub use analyzer::{analyze_reviews, verified_chain_analysis, ReviewAnalysis, ReviewAnalyzer};
pub use confidence::{
    aggregate_confidence, evaluate_confidence, summarize_signals, ConfidenceResult,
    NO_SIGNALS_SUMMARY,
};
pub use signals::{extract_review_signals, ReviewSignals, SignalCategory, SignalTally};
pub use suggestions::{basic_keto_suggestions, suggestions_for};
