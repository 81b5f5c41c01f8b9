use mockall::mock;

use super::{ProductoReader, ProductoWriter};
use crate::domain::producto::{NewProducto, Producto, ProductoListQuery, UpdateProducto};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductoReader {}

    impl ProductoReader for ProductoReader {
        fn get_producto_by_id(&self, id: i32) -> RepositoryResult<Option<Producto>>;
        fn list_productos(
            &self,
            query: ProductoListQuery,
        ) -> RepositoryResult<(usize, Vec<Producto>)>;
    }
}

mock! {
    pub ProductoWriter {}

    impl ProductoWriter for ProductoWriter {
        fn create_producto(&self, new_producto: &NewProducto) -> RepositoryResult<Producto>;
        fn update_producto(
            &self,
            producto_id: i32,
            updates: &UpdateProducto,
        ) -> RepositoryResult<Producto>;
        fn delete_producto(&self, producto_id: i32) -> RepositoryResult<()>;
    }
}
