use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::services::ServiceError;

pub mod catalog;
pub mod productos;

/// Error body shared by every JSON endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Register every router under `api_prefix` plus the root document.
pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(show_index)
        .service(
            web::scope(api_prefix)
                .configure(productos::configure)
                .configure(catalog::configure),
        );
}

#[get("/")]
/// Welcome document listing where the API lives.
pub async fn show_index(config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!(
            "Bienvenido a {}: productos, videojuegos, figuras de colección y joyería",
            config.project_name
        ),
        "api": config.api_prefix,
    }))
}

/// Translate a service failure into its HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorBody::new(err.to_string()))
        }
        ServiceError::InvalidValue(detail) | ServiceError::Form(detail) => {
            HttpResponse::UnprocessableEntity().json(ErrorBody::new(detail))
        }
        ServiceError::Repository(err) => {
            log::error!("Storage failure: {err}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Error interno del servidor"))
        }
    }
}

fn unprocessable<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::UnprocessableEntity().json(ErrorBody::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| unprocessable(err))
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| unprocessable(err))
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| unprocessable(err))
}
