use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::clientes::models::Cliente;

/// Repository for cliente database operations
pub struct ClienteRepository {
    pool: MySqlPool,
}

impl ClienteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, cliente: &Cliente) -> Result<Cliente> {
        let result = sqlx::query(
            r#"
            INSERT INTO cliente (nome, cpf, email, telefone, curso_id, parcela_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&cliente.nome)
        .bind(&cliente.cpf)
        .bind(&cliente.email)
        .bind(&cliente.telefone)
        .bind(cliente.curso_id)
        .bind(cliente.parcela_id)
        .execute(&self.pool)
        .await?;

        let mut created = cliente.clone();
        created.id = Some(result.last_insert_id() as i64);
        Ok(created)
    }

    pub async fn update(&self, cliente: &Cliente) -> Result<Cliente> {
        let id = cliente
            .id
            .ok_or_else(|| AppError::internal("Cliente id is required for update"))?;

        let rows_affected = sqlx::query(
            r#"
            UPDATE cliente
            SET nome = ?, cpf = ?, email = ?, telefone = ?, curso_id = ?, parcela_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&cliente.nome)
        .bind(&cliente.cpf)
        .bind(&cliente.email)
        .bind(&cliente.telefone)
        .bind(cliente.curso_id)
        .bind(cliente.parcela_id)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::not_found("Cliente not found"));
        }

        Ok(cliente.clone())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id, nome, cpf, email, telefone, curso_id, parcela_id
            FROM cliente
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cliente WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id, nome, cpf, email, telefone, curso_id, parcela_id
            FROM cliente
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cliente")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete by id; a missing row is a silent no-op
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM cliente WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
