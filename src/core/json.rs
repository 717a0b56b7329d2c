use actix_web::{error::InternalError, web, HttpResponse};

/// JSON extractor configuration shared by the application and tests.
///
/// Accepts `application/json` and any `+json` media type, so PATCH requests
/// sent as `application/merge-patch+json` deserialize through the same
/// extractor. Malformed bodies map onto the standard error body shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|mt| mt.subtype() == mime::JSON || mt.suffix() == Some(mime::JSON))
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(serde_json::json!({
                "error": {
                    "message": err.to_string(),
                    "code": 400,
                }
            }));
            InternalError::from_response(err, response).into()
        })
}
