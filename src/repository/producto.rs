use diesel::prelude::*;

use crate::{
    domain::producto::{
        NewProducto as DomainNewProducto, Producto as DomainProducto, ProductoListQuery,
        UpdateProducto as DomainUpdateProducto,
    },
    models::producto::{
        NewProducto as DbNewProducto, Producto as DbProducto,
        UpdateProducto as DbUpdateProducto,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ProductoReader, ProductoWriter},
};

impl ProductoReader for DieselRepository {
    fn get_producto_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProducto>> {
        use crate::schema::productos;

        let mut conn = self.conn()?;
        let producto = productos::table
            .find(id)
            .first::<DbProducto>(&mut conn)
            .optional()?;

        Ok(producto.map(Into::into))
    }

    fn list_productos(
        &self,
        query: ProductoListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProducto>)> {
        use crate::schema::productos;

        let mut conn = self.conn()?;

        let mut count_query = productos::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(categoria) = query.categoria.as_ref() {
            count_query = count_query.filter(productos::categoria.eq(categoria));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = productos::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(categoria) = query.categoria.as_ref() {
            items = items.filter(productos::categoria.eq(categoria));
        }

        // Saturate instead of wrapping: SQLite reads a negative LIMIT as "no limit".
        let offset = i64::try_from(query.skip).unwrap_or(i64::MAX);
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);

        let db_productos = items
            .order(productos::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<DbProducto>(&mut conn)?;

        Ok((total, db_productos.into_iter().map(Into::into).collect()))
    }
}

impl ProductoWriter for DieselRepository {
    fn create_producto(
        &self,
        new_producto: &DomainNewProducto,
    ) -> RepositoryResult<DomainProducto> {
        use crate::schema::productos;

        let mut conn = self.conn()?;
        let db_new = DbNewProducto::from(new_producto);

        let created = diesel::insert_into(productos::table)
            .values(&db_new)
            .get_result::<DbProducto>(&mut conn)?;

        Ok(created.into())
    }

    fn update_producto(
        &self,
        producto_id: i32,
        updates: &DomainUpdateProducto,
    ) -> RepositoryResult<DomainProducto> {
        use crate::schema::productos;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProducto::from(updates);

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(productos::table.find(producto_id))
                .set(&db_updates)
                .get_result::<DbProducto>(conn)
                .optional()?;

            updated.map(Into::into).ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_producto(&self, producto_id: i32) -> RepositoryResult<()> {
        use crate::schema::productos;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(productos::table.find(producto_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
