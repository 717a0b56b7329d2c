use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::parcelas::models::{Parcela, StatusParcela};

/// Repository for parcela database operations
pub struct ParcelaRepository {
    pool: MySqlPool,
}

impl ParcelaRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new parcela and return it with the generated id
    pub async fn insert(&self, parcela: &Parcela) -> Result<Parcela> {
        let result = sqlx::query(
            r#"
            INSERT INTO parcela (documento, id_transacao, valor, numero, total, status)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(parcela.documento)
        .bind(&parcela.id_transacao)
        .bind(parcela.valor)
        .bind(parcela.numero)
        .bind(parcela.total)
        .bind(parcela.status.map(|s| s.as_str()))
        .execute(&self.pool)
        .await?;

        let mut created = parcela.clone();
        created.id = Some(result.last_insert_id() as i64);
        Ok(created)
    }

    /// Overwrite every column of an existing parcela
    pub async fn update(&self, parcela: &Parcela) -> Result<Parcela> {
        let id = parcela
            .id
            .ok_or_else(|| AppError::internal("Parcela id is required for update"))?;

        let rows_affected = sqlx::query(
            r#"
            UPDATE parcela
            SET documento = ?, id_transacao = ?, valor = ?, numero = ?, total = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(parcela.documento)
        .bind(&parcela.id_transacao)
        .bind(parcela.valor)
        .bind(parcela.numero)
        .bind(parcela.total)
        .bind(parcela.status.map(|s| s.as_str()))
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::not_found("Parcela not found"));
        }

        Ok(parcela.clone())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Parcela>> {
        let row = sqlx::query_as::<_, ParcelaRow>(
            r#"
            SELECT id, documento, id_transacao, valor, numero, total, status
            FROM parcela
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(r.try_into()?)),
            None => Ok(None),
        }
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parcela WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Parcela>> {
        let rows = sqlx::query_as::<_, ParcelaRow>(
            r#"
            SELECT id, documento, id_transacao, valor, numero, total, status
            FROM parcela
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|row| row.try_into()).collect()
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parcela")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete by id; a missing row is a silent no-op
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM parcela WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Database row representation for the parcela table
#[derive(sqlx::FromRow)]
struct ParcelaRow {
    id: i64,
    documento: Option<i64>,
    id_transacao: Option<String>,
    valor: Option<rust_decimal::Decimal>,
    numero: Option<i32>,
    total: Option<i32>,
    status: Option<String>,
}

impl TryFrom<ParcelaRow> for Parcela {
    type Error = AppError;

    fn try_from(row: ParcelaRow) -> Result<Self> {
        let status = row
            .status
            .map(StatusParcela::try_from)
            .transpose()
            .map_err(AppError::internal)?;

        Ok(Parcela {
            id: Some(row.id),
            documento: row.documento,
            id_transacao: row.id_transacao,
            valor: row.valor,
            numero: row.numero,
            total: row.total,
            status,
        })
    }
}
