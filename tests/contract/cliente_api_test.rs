// Contract tests for the /api/clientes wire format.

use pagamento::modules::clientes::models::{Cliente, ClientePatch};
use serde_json::json;

#[test]
fn test_create_cliente_request_schema() {
    let request = json!({
        "nome": "Maria",
        "cpf": "12345678900",
        "email": "maria@example.com",
        "telefone": "11999990000",
        "cursoId": 2
    });

    assert!(request.get("id").is_none());

    let cliente: Cliente = serde_json::from_value(request).unwrap();
    assert_eq!(cliente.id, None);
    assert_eq!(cliente.nome.as_deref(), Some("Maria"));
    assert_eq!(cliente.cpf.as_deref(), Some("12345678900"));
    assert_eq!(cliente.email.as_deref(), Some("maria@example.com"));
    assert_eq!(cliente.telefone.as_deref(), Some("11999990000"));
    assert_eq!(cliente.curso_id, Some(2));
    assert_eq!(cliente.parcela_id, None);
}

#[test]
fn test_cliente_response_schema() {
    let cliente = Cliente {
        id: Some(7),
        nome: Some("Maria".to_string()),
        cpf: Some("12345678900".to_string()),
        email: Some("maria@example.com".to_string()),
        telefone: None,
        curso_id: Some(2),
        parcela_id: Some(9),
    };

    let response = serde_json::to_value(&cliente).unwrap();

    assert_eq!(response["id"], 7);
    assert_eq!(response["nome"], "Maria");
    assert_eq!(response["cpf"], "12345678900");
    assert_eq!(response["email"], "maria@example.com");
    // nullable columns serialize as explicit nulls
    assert!(response["telefone"].is_null());
    // association fields are camelCase scalar ids
    assert_eq!(response["cursoId"], 2);
    assert_eq!(response["parcelaId"], 9);
    assert!(response.get("curso_id").is_none());
}

#[test]
fn test_merge_patch_request_schema() {
    let patch: ClientePatch =
        serde_json::from_value(json!({"id": 7, "email": "novo@example.com"})).unwrap();

    assert_eq!(patch.id, Some(7));
    assert_eq!(patch.email.as_deref(), Some("novo@example.com"));
    assert_eq!(patch.nome, None);
    assert_eq!(patch.cpf, None);
    assert_eq!(patch.telefone, None);
}

#[test]
fn test_error_body_schema() {
    let error = json!({
        "error": {
            "message": "Entity not found",
            "code": 400,
            "entityName": "cliente",
            "errorKey": "idnotfound"
        }
    });

    assert!(error["error"]["message"].is_string());
    assert_eq!(error["error"]["code"], 400);
    assert_eq!(error["error"]["entityName"], "cliente");
    assert_eq!(error["error"]["errorKey"], "idnotfound");
}
