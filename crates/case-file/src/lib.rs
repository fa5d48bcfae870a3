//! Application layer around the deterministic case engine.
//!
//! `case_engine` decides which case an identifier opens. This crate covers
//! what happens around that decision:
//!
//! - [`enrichment`] tries model-backed strategies before falling back to the
//!   curated template
//! - [`investigation`] scores notebook text for hidden evidence, signal
//!   strength and progress
//! - [`archive`] keeps closed cases and exchanges them with other
//!   investigators
//! - [`settings`] and [`case_cli`] back the `case-file` binary
//!
//! # Example
//!
//! ```
//! use case_file::investigation::{RuleSet, SecretRule, detect_secret};
//!
//! let rules = RuleSet::<SecretRule>::bundled().expect("bundled rules");
//! let rule = rules.get("voynich-manuscript").expect("voynich rule");
//! let scan = detect_secret("Carbon dating puts the vellum in the 1400s", rule);
//!
//! assert!(scan.is_unlocked());
//! ```

pub mod archive;
pub mod case_cli;
pub mod enrichment;
pub mod investigation;
mod macros;
pub mod settings;
