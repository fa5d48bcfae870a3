//! Deterministic mystery case assembly.
//!
//! This crate turns an opaque case identifier into a reproducible case file:
//! the identifier is hashed into a seed, the seed drives a small linear
//! congruential sequence, and that sequence picks a template from a curated
//! pool and shuffles the template's evidence. The same identifier always
//! produces the same case and the same artifact order, with no stored state.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Seed derivation compatible with the browser-side hash
//! - A seeded sequence of draws in `[0, 1)`
//! - Seeded picking and Fisher-Yates shuffling
//! - Loading and validating template pools, including the bundled pool
//! - Case assembly with an artifact cap
//! - Case identifier generation
//!
//! # Example
//!
//! ```
//! use case_engine::{TemplatePool, assemble_case, derive_seed};
//!
//! let pool = TemplatePool::bundled().expect("bundled pool");
//! let case = assemble_case("", &pool).expect("assembled");
//!
//! assert_eq!(derive_seed(""), 0);
//! assert_eq!(case.title, "The Zodiac Killer Ciphers");
//! assert!(case.artifacts.len() <= case_engine::ARTIFACT_CAP);
//! ```

mod assembly;
mod error;
mod identifier;
mod pool;
mod seed;
mod selection;
mod sequence;
mod template;

pub use assembly::{ARTIFACT_CAP, CasePayload, assemble_case, assemble_case_from};
pub use error::{AssemblyError, PoolError};
pub use identifier::{IDENTIFIER_LEN, case_identifier_from_parts, generate_case_identifier};
pub use pool::TemplatePool;
pub use seed::derive_seed;
pub use selection::{pick_index, pick_item, shuffle};
pub use sequence::{INCREMENT, MODULUS, MULTIPLIER, SeededSequence};
pub use template::{ArtifactKind, ArtifactRecord, CaseCategory, Difficulty, TemplateRecord};
