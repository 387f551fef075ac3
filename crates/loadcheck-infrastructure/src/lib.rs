//! Infrastructure layer for loadcheck.
//!
//! # Module Structure
//!
//! - `paths`: Platform config directory resolution
//! - `config_service`: `config.toml` loading with environment overrides
//! - `evidence`: Reading evidence files from disk
//! - `answer_sheet`: TOML answer sheets filling a `FormStore`

pub mod answer_sheet;
pub mod config_service;
pub mod evidence;
pub mod paths;

pub use answer_sheet::{AnswerSheet, fill_store, load_record};
pub use config_service::ConfigService;
pub use evidence::{load_evidence, load_evidence_list};
pub use paths::{LoadcheckPaths, PathError};
