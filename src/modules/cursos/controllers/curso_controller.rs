use actix_web::{http::header, web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::pagination::TOTAL_COUNT_HEADER;
use crate::core::{AppError, PageQuery, Result};
use crate::modules::cursos::{
    models::{Curso, CursoPatch},
    services::CursoService,
};

const ENTITY_NAME: &str = "curso";

/// POST /api/cursos : create a new curso.
pub async fn create_curso(
    pool: web::Data<MySqlPool>,
    curso: web::Json<Curso>,
) -> Result<HttpResponse> {
    let curso = curso.into_inner();
    tracing::debug!("REST request to save Curso : {:?}", curso);

    if curso.id.is_some() {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idexists",
            "A new curso cannot already have an ID",
        ));
    }

    let service = CursoService::new(pool.get_ref().clone());
    let result = service.save(curso).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::internal("Created curso has no id"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/cursos/{}", id)))
        .json(result))
}

/// PUT /api/cursos/{id} : full update of an existing curso.
pub async fn update_curso(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    curso: web::Json<Curso>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let curso = curso.into_inner();
    tracing::debug!("REST request to update Curso : {}, {:?}", id, curso);

    let body_id = curso
        .id
        .ok_or_else(|| AppError::bad_request(ENTITY_NAME, "idnull", "Invalid id"))?;
    if body_id != id {
        return Err(AppError::bad_request(ENTITY_NAME, "idinvalid", "Invalid ID"));
    }

    let service = CursoService::new(pool.get_ref().clone());
    if !service.exists(id).await? {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    let result = service.save(curso).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// PATCH /api/cursos/{id} (application/merge-patch+json) : partial update.
pub async fn partial_update_curso(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
    patch: web::Json<CursoPatch>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = patch.into_inner();
    tracing::debug!(
        "REST request to partial update Curso partially : {}, {:?}",
        id,
        patch
    );

    let body_id = patch
        .id
        .ok_or_else(|| AppError::bad_request(ENTITY_NAME, "idnull", "Invalid id"))?;
    if body_id != id {
        return Err(AppError::bad_request(ENTITY_NAME, "idinvalid", "Invalid ID"));
    }

    let service = CursoService::new(pool.get_ref().clone());
    if !service.exists(id).await? {
        return Err(AppError::bad_request(
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ));
    }

    let result = service.partial_update(patch).await?;
    let curso = result.ok_or_else(|| AppError::not_found("Curso not found"))?;

    Ok(HttpResponse::Ok().json(curso))
}

/// GET /api/cursos : a page of cursos plus the X-Total-Count header.
pub async fn get_all_cursos(
    pool: web::Data<MySqlPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    tracing::debug!("REST request to get a page of Cursos");

    let service = CursoService::new(pool.get_ref().clone());
    let page = service.find_all(&query).await?;

    Ok(HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, page.total_count.to_string()))
        .json(page.content))
}

/// GET /api/cursos/{id} : one curso, or 404.
pub async fn get_curso(pool: web::Data<MySqlPool>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!("REST request to get Curso : {}", id);

    let service = CursoService::new(pool.get_ref().clone());
    let curso = service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::not_found("Curso not found"))?;

    Ok(HttpResponse::Ok().json(curso))
}

/// DELETE /api/cursos/{id} : idempotent removal, always 204.
pub async fn delete_curso(
    pool: web::Data<MySqlPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!("REST request to delete Curso : {}", id);

    let service = CursoService::new(pool.get_ref().clone());
    service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure curso routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cursos")
            .route("", web::post().to(create_curso))
            .route("", web::get().to(get_all_cursos))
            .route("/{id}", web::put().to(update_curso))
            .route("/{id}", web::patch().to(partial_update_curso))
            .route("/{id}", web::get().to(get_curso))
            .route("/{id}", web::delete().to(delete_curso)),
    );
}
