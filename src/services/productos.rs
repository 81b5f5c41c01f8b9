use serde::Deserialize;

use crate::domain::producto::{DEFAULT_LIST_LIMIT, DeleteAck, Producto, ProductoListQuery};
use crate::forms::productos::{CreateProductoForm, UpdateProductoForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductoReader, ProductoWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductosQuery {
    /// Number of matching products to skip.
    pub skip: Option<usize>,
    /// Maximum number of products to return.
    pub limit: Option<usize>,
    /// Optional exact category filter; an empty value disables filtering.
    pub categoria: Option<String>,
}

/// One window of the product listing.
#[derive(Debug)]
pub struct ProductosPage {
    /// Number of products matching the filter, ignoring the window.
    pub total: usize,
    /// Products inside the requested window, ordered by id.
    pub items: Vec<Producto>,
}

/// Fetches a single product by id.
pub fn get_producto<R>(repo: &R, producto_id: i32) -> ServiceResult<Producto>
where
    R: ProductoReader + ?Sized,
{
    repo.get_producto_by_id(producto_id)?
        .ok_or(ServiceError::NotFound { id: producto_id })
}

/// Lists products ordered by id, optionally restricted to one category.
pub fn list_productos<R>(repo: &R, query: ProductosQuery) -> ServiceResult<ProductosPage>
where
    R: ProductoReader + ?Sized,
{
    let ProductosQuery {
        skip,
        limit,
        categoria,
    } = query;

    let mut list_query =
        ProductoListQuery::new().paginate(skip.unwrap_or(0), limit.unwrap_or(DEFAULT_LIST_LIMIT));

    if let Some(categoria) = categoria.filter(|value| !value.is_empty()) {
        list_query = list_query.categoria(categoria);
    }

    let (total, items) = repo.list_productos(list_query)?;

    Ok(ProductosPage { total, items })
}

/// Validates the payload and stores a new product.
pub fn create_producto<R>(repo: &R, form: CreateProductoForm) -> ServiceResult<Producto>
where
    R: ProductoWriter + ?Sized,
{
    let new_producto = form.into_new_producto()?;

    let producto = repo.create_producto(&new_producto)?;
    log::info!("Created producto {}", producto.id);

    Ok(producto)
}

/// Applies the fields present in `form` to an existing product.
///
/// A payload without any field returns the stored product untouched.
pub fn update_producto<R>(
    repo: &R,
    producto_id: i32,
    form: UpdateProductoForm,
) -> ServiceResult<Producto>
where
    R: ProductoReader + ProductoWriter + ?Sized,
{
    let updates = form.into_update_producto()?;

    if updates.is_empty() {
        log::debug!("Empty update for producto {producto_id}, nothing to write");
        return get_producto(repo, producto_id);
    }

    let producto = repo
        .update_producto(producto_id, &updates)
        .map_err(not_found_as(producto_id))?;
    log::info!("Updated producto {producto_id}");

    Ok(producto)
}

/// Removes a product permanently.
pub fn delete_producto<R>(repo: &R, producto_id: i32) -> ServiceResult<DeleteAck>
where
    R: ProductoWriter + ?Sized,
{
    repo.delete_producto(producto_id)
        .map_err(not_found_as(producto_id))?;
    log::info!("Deleted producto {producto_id}");

    Ok(DeleteAck::deleted(producto_id))
}

fn not_found_as(producto_id: i32) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |err| match err {
        RepositoryError::NotFound => ServiceError::NotFound { id: producto_id },
        other => ServiceError::Repository(other),
    }
}
