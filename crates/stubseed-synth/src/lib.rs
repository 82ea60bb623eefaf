//! Schema-aware record synthesis for stubseed.
//!
//! This crate turns column descriptors into synthetic records (value
//! dispatch, name hints, foreign-key sampling) and orchestrates
//! count-many insert cycles with a summary report.

pub mod runner;
pub mod synthesizer;
pub mod values;

pub use runner::{SeedReport, SeedRunner};
pub use synthesizer::RecordSynthesizer;
pub use values::{CredentialHasher, FakeValues, Sha256Hasher, ValueFaker};
