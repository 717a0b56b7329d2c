use sqlx::MySqlPool;
use tracing::debug;

use crate::core::{Page, PageQuery, Result};
use crate::modules::clientes::{
    models::{Cliente, ClientePatch},
    repositories::ClienteRepository,
};

/// Service for cliente business logic
pub struct ClienteService {
    repository: ClienteRepository,
}

impl ClienteService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn save(&self, cliente: Cliente) -> Result<Cliente> {
        debug!("Request to save Cliente : {:?}", cliente);
        match cliente.id {
            Some(_) => self.repository.update(&cliente).await,
            None => self.repository.insert(&cliente).await,
        }
    }

    /// Merge the patch into the stored cliente; `Ok(None)` when it is gone
    pub async fn partial_update(&self, patch: ClientePatch) -> Result<Option<Cliente>> {
        debug!("Request to partially update Cliente : {:?}", patch);

        let id = match patch.id {
            Some(id) => id,
            None => return Ok(None),
        };

        match self.repository.find_by_id(id).await? {
            Some(mut cliente) => {
                cliente.apply_patch(&patch);
                let updated = self.repository.update(&cliente).await?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    pub async fn find_all(&self, page: &PageQuery) -> Result<Page<Cliente>> {
        debug!("Request to get all Clientes");
        let content = self.repository.find_all(page.limit(), page.offset()).await?;
        let total_count = self.repository.count().await?;
        Ok(Page {
            content,
            total_count,
        })
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Cliente>> {
        debug!("Request to get Cliente : {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        self.repository.exists_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!("Request to delete Cliente : {}", id);
        self.repository.delete_by_id(id).await
    }
}
