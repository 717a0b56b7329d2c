use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::cursos::models::Curso;

/// Repository for curso database operations
pub struct CursoRepository {
    pool: MySqlPool,
}

impl CursoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, curso: &Curso) -> Result<Curso> {
        let result = sqlx::query("INSERT INTO curso (nome) VALUES (?)")
            .bind(&curso.nome)
            .execute(&self.pool)
            .await?;

        let mut created = curso.clone();
        created.id = Some(result.last_insert_id() as i64);
        Ok(created)
    }

    pub async fn update(&self, curso: &Curso) -> Result<Curso> {
        let id = curso
            .id
            .ok_or_else(|| AppError::internal("Curso id is required for update"))?;

        let rows_affected = sqlx::query("UPDATE curso SET nome = ? WHERE id = ?")
            .bind(&curso.nome)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::not_found("Curso not found"));
        }

        Ok(curso.clone())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Curso>> {
        let curso = sqlx::query_as::<_, Curso>("SELECT id, nome FROM curso WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(curso)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM curso WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Curso>> {
        let cursos =
            sqlx::query_as::<_, Curso>("SELECT id, nome FROM curso ORDER BY id ASC LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

        Ok(cursos)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM curso")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete by id; a missing row is a silent no-op
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM curso WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
