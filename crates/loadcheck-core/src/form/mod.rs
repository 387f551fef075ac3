//! Form state module.
//!
//! - `record`: the `FormRecord` snapshot, its `FieldValue` union and `EvidenceFile`
//! - `store`: the session-owned `FormStore`

mod record;
mod store;

pub use record::{EvidenceFile, FieldValue, FormRecord};
pub use store::FormStore;
