use actix_web::{http::header, web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::pagination::TOTAL_COUNT_HEADER;
use crate::core::{AppError, PageQuery, Result};
use crate::modules::clientes::{
    models::{Cliente, ClientePatch},
    services::ClienteService,
};

const ENTITY_NAME: &str = "cliente";

/// POST /api/clientes : create a new cliente.
pub async fn create_cliente(
    pool: web::Data<MySqlPool>,
    cliente: web::Json<Cliente>,
) -> Result<HttpResponse> {
    let cliente = cliente.into_inner();
    tracing::debug!("REST request to save Cliente : {:?}", cliente);

    if cliente.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new cliente cannot already have an ID",
        ));
    }

    let service = ClienteService::new(pool.get_ref().clone());
    let result = service.save(cliente).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::internal("Created cliente has no id"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/clientes/{}", id)))
        .json(result))
}

/// PUT /api/clientes/{id} : full update of an existing cliente.
pub async fn update_cliente(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    cliente: web::Json<Cliente>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let cliente = cliente.into_inner();
    tracing::debug!("REST request to update Cliente : {}, {:?}", id, cliente);

    let body_id = cliente
        .id
        .ok_or_else(|| AppError::bad_request(ENTITY_NAME, "idnull", "Invalid id"))?;
    if body_id != id {
        return Err(AppError::bad_request(ENTITY_NAME, "idinvalid", "Invalid ID"));
    }

    let service = ClienteService::new(pool.get_ref().clone());
    if !service.exists(id).await? {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    let result = service.save(cliente).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// PATCH /api/clientes/{id} (application/merge-patch+json) : partial update.
pub async fn partial_update_cliente(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    patch: web::Json<ClientePatch>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = patch.into_inner();
    tracing::debug!(
        "REST request to partial update Cliente partially : {}, {:?}",
        id,
        patch
    );

    let body_id = patch
        .id
        .ok_or_else(|| AppError::bad_request(ENTITY_NAME, "idnull", "Invalid id"))?;
    if body_id != id {
        return Err(AppError::bad_request(ENTITY_NAME, "idinvalid", "Invalid ID"));
    }

    let service = ClienteService::new(pool.get_ref().clone());
    if !service.exists(id).await? {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    let result = service.partial_update(patch).await?;
    let cliente = result.ok_or_else(|| AppError::not_found("Cliente not found"))?;

    Ok(HttpResponse::Ok().json(cliente))
}

/// GET /api/clientes : a page of clientes plus the X-Total-Count header.
pub async fn get_all_clientes(
    pool: web::Data<MySqlPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    tracing::debug!("REST request to get a page of Clientes");

    let service = ClienteService::new(pool.get_ref().clone());
    let page = service.find_all(&query).await?;

    Ok(HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, page.total_count.to_string()))
        .json(page.content))
}

/// GET /api/clientes/{id} : one cliente, or 404.
pub async fn get_cliente(pool: web::Data<MySqlPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!("REST request to get Cliente : {}", id);

    let service = ClienteService::new(pool.get_ref().clone());
    let cliente = service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cliente not found"))?;

    Ok(HttpResponse::Ok().json(cliente))
}

/// DELETE /api/clientes/{id} : idempotent removal, always 204.
pub async fn delete_cliente(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!("REST request to delete Cliente : {}", id);

    let service = ClienteService::new(pool.get_ref().clone());
    service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure cliente routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clientes")
            .route("", web::post().to(create_cliente))
            .route("", web::get().to(get_all_clientes))
            .route("/{id}", web::put().to(update_cliente))
            .route("/{id}", web::patch().to(partial_update_cliente))
            .route("/{id}", web::get().to(get_cliente))
            .route("/{id}", web::delete().to(delete_cliente)),
    );
}
