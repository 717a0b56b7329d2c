// Request-validation paths of the REST surface, driven over in-process
// actix services.
//
// Every case here is rejected by the controllers before any query runs, so a
// lazily-connecting pool is enough and no database is required.

use actix_web::{http::header, test, web, App};
use pagamento::core::json::json_config;
use pagamento::modules::{clientes, cursos, parcelas};
use serde_json::json;
use sqlx::MySqlPool;

fn lazy_pool() -> MySqlPool {
    MySqlPool::connect_lazy("mysql://localhost:3306/pagamento_test").unwrap()
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(json_config())
                .service(
                    web::scope("/api")
                        .configure(clientes::controllers::configure)
                        .configure(cursos::controllers::configure)
                        .configure(parcelas::controllers::configure),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_create_with_id_fails_idexists_for_all_entities() {
    let app = init_app!();

    for (path, body) in [
        ("/api/clientes", json!({"id": 1, "nome": "Maria"})),
        ("/api/cursos", json!({"id": 1, "nome": "Rust"})),
        ("/api/parcelas", json!({"id": 1, "documento": 1})),
    ] {
        let req = test::TestRequest::post().uri(path).set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "POST {} must fail", path);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["errorKey"], "idexists");
    }
}

#[actix_web::test]
async fn test_update_without_body_id_fails_idnull() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/api/parcelas/5")
        .set_json(json!({"documento": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["errorKey"], "idnull");
    assert_eq!(body["error"]["entityName"], "parcela");
}

#[actix_web::test]
async fn test_update_with_mismatched_id_fails_idinvalid() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/api/clientes/5")
        .set_json(json!({"id": 6, "nome": "Maria"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["errorKey"], "idinvalid");
    assert_eq!(body["error"]["entityName"], "cliente");
}

#[actix_web::test]
async fn test_merge_patch_content_type_is_accepted() {
    let app = init_app!();

    // mismatched ids still reject, proving the body deserialized through the
    // merge-patch+json content type
    let req = test::TestRequest::patch()
        .uri("/api/parcelas/5")
        .insert_header((header::CONTENT_TYPE, "application/merge-patch+json"))
        .set_payload(r#"{"id": 6, "valor": 2.00}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["errorKey"], "idinvalid");
}

#[actix_web::test]
async fn test_merge_patch_without_body_id_fails_idnull() {
    let app = init_app!();

    let req = test::TestRequest::patch()
        .uri("/api/cursos/5")
        .insert_header((header::CONTENT_TYPE, "application/merge-patch+json"))
        .set_payload("{}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["errorKey"], "idnull");
    assert_eq!(body["error"]["entityName"], "curso");
}

#[actix_web::test]
async fn test_malformed_json_body_fails_with_error_shape() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/parcelas")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"].is_string());
    assert_eq!(body["error"]["code"], 400);
}
