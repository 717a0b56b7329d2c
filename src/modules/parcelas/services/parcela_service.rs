use sqlx::MySqlPool;
use tracing::debug;

use crate::core::{Page, PageQuery, Result};
use crate::modules::parcelas::{
    models::{Parcela, ParcelaPatch},
    repositories::ParcelaRepository,
};

/// Service for parcela business logic
pub struct ParcelaService {
    repository: ParcelaRepository,
}

impl ParcelaService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: ParcelaRepository::new(pool),
        }
    }

    /// Persist a parcela: insert when transient, full overwrite otherwise
    pub async fn save(&self, parcela: Parcela) -> Result<Parcela> {
        debug!("Request to save Parcela : {:?}", parcela);
        match parcela.id {
            Some(_) => self.repository.update(&parcela).await,
            None => self.repository.insert(&parcela).await,
        }
    }

    /// Merge the patch into the stored parcela, field by field.
    ///
    /// Returns `Ok(None)` when no stored parcela carries the patch id. The
    /// window between the load and the update is not locked; a row deleted in
    /// between surfaces as a not-found error from the update.
    pub async fn partial_update(&self, patch: ParcelaPatch) -> Result<Option<Parcela>> {
        debug!("Request to partially update Parcela : {:?}", patch);

        let id = match patch.id {
            Some(id) => id,
            None => return Ok(None),
        };

        match self.repository.find_by_id(id).await? {
            Some(mut parcela) => {
                parcela.apply_patch(&patch);
                let updated = self.repository.update(&parcela).await?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    pub async fn find_all(&self, page: &PageQuery) -> Result<Page<Parcela>> {
        debug!("Request to get all Parcelas");
        let content = self.repository.find_all(page.limit(), page.offset()).await?;
        let total_count = self.repository.count().await?;
        Ok(Page {
            content,
            total_count,
        })
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Parcela>> {
        debug!("Request to get Parcela : {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        self.repository.exists_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!("Request to delete Parcela : {}", id);
        self.repository.delete_by_id(id).await
    }
}
