use sqlx::MySqlPool;
use tracing::debug;

use crate::core::{Page, PageQuery, Result};
use crate::modules::cursos::{
    models::{Curso, CursoPatch},
    repositories::CursoRepository,
};

/// Service for curso business logic
pub struct CursoService {
    repository: CursoRepository,
}

impl CursoService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: CursoRepository::new(pool),
        }
    }

    pub async fn save(&self, curso: Curso) -> Result<Curso> {
        debug!("Request to save Curso : {:?}", curso);
        match curso.id {
            Some(_) => self.repository.update(&curso).await,
            None => self.repository.insert(&curso).await,
        }
    }

    pub async fn partial_update(&self, patch: CursoPatch) -> Result<Option<Curso>> {
        debug!("Request to partially update Curso : {:?}", patch);

        let id = match patch.id {
            Some(id) => id,
            None => return Ok(None),
        };

        match self.repository.find_by_id(id).await? {
            Some(mut curso) => {
                curso.apply_patch(&patch);
                let updated = self.repository.update(&curso).await?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    pub async fn find_all(&self, page: &PageQuery) -> Result<Page<Curso>> {
        debug!("Request to get all Cursos");
        let content = self.repository.find_all(page.limit(), page.offset()).await?;
        let total_count = self.repository.count().await?;
        Ok(Page {
            content,
            total_count,
        })
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Curso>> {
        debug!("Request to get Curso : {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        self.repository.exists_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!("Request to delete Curso : {}", id);
        self.repository.delete_by_id(id).await
    }
}
