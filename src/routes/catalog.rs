//! Catalog routers that are mounted but not implemented yet.

use actix_web::{HttpResponse, web};

use crate::routes::ErrorBody;

/// Path segments of the catalogs served as placeholders.
pub const STUB_CATALOGS: [&str; 3] = ["videojuegos", "figuras-coleccion", "joyeria"];

pub fn configure(cfg: &mut web::ServiceConfig) {
    for catalogo in STUB_CATALOGS {
        cfg.service(
            web::scope(&format!("/{catalogo}"))
                .default_service(web::to(move || not_implemented(catalogo))),
        );
    }
}

async fn not_implemented(catalogo: &'static str) -> HttpResponse {
    HttpResponse::NotImplemented().json(ErrorBody::new(format!(
        "El catálogo `{catalogo}` aún no está implementado"
    )))
}
