//! Session-owned holder of the current form record.

use tokio::sync::RwLock;

use super::record::{FieldValue, FormRecord};
use crate::catalog::FieldKey;
use crate::error::Result;

/// Single-writer container for the session's form record.
///
/// The store is owned by the session and handed to collaborators by `Arc`.
/// Every update swaps in a new snapshot; readers always see a complete record.
#[derive(Debug, Default)]
pub struct FormStore {
    record: RwLock<FormRecord>,
}

impl FormStore {
    /// Creates a store holding an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `record`.
    pub fn with_record(record: FormRecord) -> Self {
        Self {
            record: RwLock::new(record),
        }
    }

    /// Returns a snapshot of the current record.
    pub async fn get(&self) -> FormRecord {
        self.record.read().await.clone()
    }

    /// Replaces a single field.
    ///
    /// # Errors
    ///
    /// Returns a `FieldKind` error if `value` does not match the field's
    /// declared kind. The stored record is unchanged in that case.
    pub async fn set_field(&self, key: FieldKey, value: impl Into<FieldValue>) -> Result<()> {
        let mut guard = self.record.write().await;
        let next = guard.with_field(key, value)?;
        *guard = next;
        tracing::debug!("[FormStore] Field updated: {}", key);
        Ok(())
    }

    /// Restores the initial empty record.
    pub async fn reset(&self) {
        *self.record.write().await = FormRecord::new();
        tracing::debug!("[FormStore] Record reset");
    }

    /// Restores the initial empty record if `condition` holds.
    ///
    /// `condition` runs while the store is write-locked, so no reader can take
    /// a snapshot between the check and the reset. Returns whether the record
    /// was reset.
    pub async fn reset_if(&self, condition: impl FnOnce() -> bool) -> bool {
        let mut guard = self.record.write().await;
        if !condition() {
            return false;
        }
        *guard = FormRecord::new();
        tracing::debug!("[FormStore] Record reset");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LoadType, YesNo};
    use crate::form::EvidenceFile;

    #[tokio::test]
    async fn test_set_field_then_get() {
        let store = FormStore::new();
        store.set_field(FieldKey::Carrier, "Rodonaves").await.unwrap();
        store.set_field(FieldKey::LoadType, LoadType::Mixed).await.unwrap();

        let record = store.get().await;
        assert_eq!(record.text(FieldKey::Carrier), "Rodonaves");
        assert_eq!(record.text(FieldKey::LoadType), "Carregamento misto");
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_record() {
        let store = FormStore::new();
        store.set_field(FieldKey::PbtCompliant, YesNo::No).await.unwrap();

        let result = store.set_field(FieldKey::PbtCompliant, "talvez").await;
        assert!(result.is_err());
        assert_eq!(store.get().await.text(FieldKey::PbtCompliant), "Não");
    }

    #[tokio::test]
    async fn test_reset_restores_empty_record() {
        let store = FormStore::new();
        store.set_field(FieldKey::Date, "2026-10-16").await.unwrap();
        store
            .set_field(
                FieldKey::GeneralRemarks,
                vec![EvidenceFile::new("overview.jpg", vec![1u8, 2, 3])],
            )
            .await
            .unwrap();

        store.reset().await;

        let record = store.get().await;
        assert_eq!(record, FormRecord::new());
        for (key, value) in record.fields() {
            match key.kind().is_files() {
                true => assert!(value.as_files().unwrap().is_empty()),
                false => assert_eq!(value.as_text(), Some("")),
            }
        }
    }

    #[tokio::test]
    async fn test_reset_if_checks_condition_under_lock() {
        let store = FormStore::new();
        store.set_field(FieldKey::Carrier, "Rodonaves").await.unwrap();

        let reset = store
            .reset_if(|| {
                assert!(store.record.try_read().is_err());
                false
            })
            .await;
        assert!(!reset);
        assert_eq!(store.get().await.text(FieldKey::Carrier), "Rodonaves");

        assert!(store.reset_if(|| true).await);
        assert!(store.get().await.is_blank());
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_store() {
        let store = FormStore::new();
        let before = store.get().await;
        store.set_field(FieldKey::VehiclePlate, "ABC1D23").await.unwrap();
        assert_eq!(before.text(FieldKey::VehiclePlate), "");
    }
}
