use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::productos::{CreateProductoForm, UpdateProductoForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::productos::{self, ProductosQuery};

/// Header carrying the number of products that match the listing filter.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/productos")
            .service(create_producto)
            .service(list_productos)
            .service(show_producto)
            .service(update_producto)
            .service(delete_producto),
    );
}

#[post("")]
pub async fn create_producto(
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateProductoForm>,
) -> impl Responder {
    match productos::create_producto(repo.get_ref(), form.into_inner()) {
        Ok(producto) => HttpResponse::Created().json(producto),
        Err(err) => error_response(err),
    }
}

#[get("")]
pub async fn list_productos(
    params: web::Query<ProductosQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match productos::list_productos(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok()
            .insert_header((TOTAL_COUNT_HEADER, page.total.to_string()))
            .json(page.items),
        Err(err) => error_response(err),
    }
}

#[get("/{producto_id}")]
pub async fn show_producto(
    producto_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match productos::get_producto(repo.get_ref(), producto_id.into_inner()) {
        Ok(producto) => HttpResponse::Ok().json(producto),
        Err(err) => error_response(err),
    }
}

#[put("/{producto_id}")]
pub async fn update_producto(
    producto_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateProductoForm>,
) -> impl Responder {
    match productos::update_producto(repo.get_ref(), producto_id.into_inner(), form.into_inner()) {
        Ok(producto) => HttpResponse::Ok().json(producto),
        Err(err) => error_response(err),
    }
}

#[delete("/{producto_id}")]
pub async fn delete_producto(
    producto_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match productos::delete_producto(repo.get_ref(), producto_id.into_inner()) {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(err) => error_response(err),
    }
}
