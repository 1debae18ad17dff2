//! Shared types for the Eloquence vocabulary-improvement pipeline.
//!
//! This crate holds the API types exchanged between the language analyzer,
//! the candidate detector, the vocabulary store and the enrichment engine:
//!
//! - [`enums`] -- part-of-speech, category and register enums
//! - [`character`] -- character classification for French text
//! - [`token`] -- analyzer output: tokens, sentences, [`token::AnalyzedText`]
//! - [`entry`] -- [`entry::SubstitutionEntry`], one vocabulary store row
//! - [`report`] -- the analysis output document types

pub mod character;
pub mod entry;
pub mod enums;
pub mod report;
pub mod token;

pub use entry::SubstitutionEntry;
pub use enums::{Category, PartOfSpeech, Register};
pub use report::{AnalysisResult, ImprovementCandidate, TextStatistics};
pub use token::{AnalyzedText, Sentence, Token};
