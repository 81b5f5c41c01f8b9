use crate::db::{DbConnection, DbPool};
use crate::domain::producto::{NewProducto, Producto, ProductoListQuery, UpdateProducto};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod producto;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductoReader {
    fn get_producto_by_id(&self, id: i32) -> RepositoryResult<Option<Producto>>;
    fn list_productos(&self, query: ProductoListQuery)
    -> RepositoryResult<(usize, Vec<Producto>)>;
}

/// Write operations over product records.
pub trait ProductoWriter {
    fn create_producto(&self, new_producto: &NewProducto) -> RepositoryResult<Producto>;
    fn update_producto(
        &self,
        producto_id: i32,
        updates: &UpdateProducto,
    ) -> RepositoryResult<Producto>;
    fn delete_producto(&self, producto_id: i32) -> RepositoryResult<()>;
}
