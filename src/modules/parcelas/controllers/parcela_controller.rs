use actix_web::{http::header, web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::pagination::TOTAL_COUNT_HEADER;
use crate::core::{AppError, PageQuery, Result};
use crate::modules::parcelas::{
    models::{Parcela, ParcelaPatch},
    services::ParcelaService,
};

const ENTITY_NAME: &str = "parcela";

/// POST /api/parcelas : create a new parcela.
///
/// Returns 201 with a Location header, or 400 when the body already carries
/// an id.
pub async fn create_parcela(
    pool: web::Data<MySqlPool>,
    parcela: web::Json<Parcela>,
) -> Result<HttpResponse> {
    let parcela = parcela.into_inner();
    tracing::debug!("REST request to save Parcela : {:?}", parcela);

    if parcela.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new parcela cannot already have an ID",
        ));
    }

    let service = ParcelaService::new(pool.get_ref().clone());
    let result = service.save(parcela).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::internal("Created parcela has no id"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/parcelas/{}", id)))
        .json(result))
}

/// PUT /api/parcelas/{id} : full update of an existing parcela.
///
/// Fails 400 when the body id is missing, differs from the path id, or no
/// stored parcela carries it.
pub async fn update_parcela(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    parcela: web::Json<Parcela>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let parcela = parcela.into_inner();
    tracing::debug!("REST request to update Parcela : {}, {:?}", id, parcela);

    let body_id = parcela
        .id
        .ok_or_else(|| AppError::bad_request(ENTITY_NAME, "idnull", "Invalid id"))?;
    if body_id != id {
        return Err(AppError::bad_request(ENTITY_NAME, "idinvalid", "Invalid ID"));
    }

    let service = ParcelaService::new(pool.get_ref().clone());
    if !service.exists(id).await? {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    let result = service.save(parcela).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// PATCH /api/parcelas/{id} (application/merge-patch+json) : partial update.
///
/// Fields absent from the payload keep their stored values. Returns 404 when
/// the target vanishes between the existence check and the merge.
pub async fn partial_update_parcela(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    patch: web::Json<ParcelaPatch>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = patch.into_inner();
    tracing::debug!(
        "REST request to partial update Parcela partially : {}, {:?}",
        id,
        patch
    );

    let body_id = patch
        .id
        .ok_or_else(|| AppError::bad_request(ENTITY_NAME, "idnull", "Invalid id"))?;
    if body_id != id {
        return Err(AppError::bad_request(ENTITY_NAME, "idinvalid", "Invalid ID"));
    }

    let service = ParcelaService::new(pool.get_ref().clone());
    if !service.exists(id).await? {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    let result = service.partial_update(patch).await?;
    let parcela = result.ok_or_else(|| AppError::not_found("Parcela not found"))?;

    Ok(HttpResponse::Ok().json(parcela))
}

/// GET /api/parcelas : a page of parcelas plus the X-Total-Count header.
pub async fn get_all_parcelas(
    pool: web::Data<MySqlPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    tracing::debug!("REST request to get a page of Parcelas");

    let service = ParcelaService::new(pool.get_ref().clone());
    let page = service.find_all(&query).await?;

    Ok(HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, page.total_count.to_string()))
        .json(page.content))
}

/// GET /api/parcelas/{id} : one parcela, or 404.
pub async fn get_parcela(pool: web::Data<MySqlPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!("REST request to get Parcela : {}", id);

    let service = ParcelaService::new(pool.get_ref().clone());
    let parcela = service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::not_found("Parcela not found"))?;

    Ok(HttpResponse::Ok().json(parcela))
}

/// DELETE /api/parcelas/{id} : idempotent removal, always 204.
pub async fn delete_parcela(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!("REST request to delete Parcela : {}", id);

    let service = ParcelaService::new(pool.get_ref().clone());
    service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure parcela routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/parcelas")
            .route("", web::post().to(create_parcela))
            .route("", web::get().to(get_all_parcelas))
            .route("/{id}", web::put().to(update_parcela))
            .route("/{id}", web::patch().to(partial_update_parcela))
            .route("/{id}", web::get().to(get_parcela))
            .route("/{id}", web::delete().to(delete_parcela)),
    );
}
