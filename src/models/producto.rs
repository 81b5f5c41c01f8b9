use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::producto::{
    NewProducto as DomainNewProducto, Producto as DomainProducto,
    UpdateProducto as DomainUpdateProducto,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::productos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Producto {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub categoria: Option<String>,
    pub fecha_creacion: NaiveDateTime,
    pub fecha_actualizacion: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::productos)]
pub struct NewProducto<'a> {
    pub nombre: &'a str,
    pub descripcion: Option<&'a str>,
    pub precio: f64,
    pub stock: i32,
    pub categoria: Option<&'a str>,
    pub fecha_creacion: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::productos)]
pub struct UpdateProducto<'a> {
    pub nombre: Option<&'a str>,
    pub descripcion: Option<Option<&'a str>>,
    pub precio: Option<f64>,
    pub stock: Option<i32>,
    pub categoria: Option<Option<&'a str>>,
    pub fecha_actualizacion: NaiveDateTime,
}

impl From<Producto> for DomainProducto {
    fn from(value: Producto) -> Self {
        Self {
            id: value.id,
            nombre: value.nombre,
            descripcion: value.descripcion,
            precio: value.precio,
            stock: value.stock,
            categoria: value.categoria,
            fecha_creacion: value.fecha_creacion,
            fecha_actualizacion: value.fecha_actualizacion,
        }
    }
}

impl<'a> From<&'a DomainNewProducto> for NewProducto<'a> {
    fn from(value: &'a DomainNewProducto) -> Self {
        Self {
            nombre: value.nombre.as_str(),
            descripcion: value.descripcion.as_deref(),
            precio: value.precio,
            stock: value.stock,
            categoria: value.categoria.as_deref(),
            fecha_creacion: value.fecha_creacion,
        }
    }
}

impl<'a> From<&'a DomainUpdateProducto> for UpdateProducto<'a> {
    fn from(value: &'a DomainUpdateProducto) -> Self {
        Self {
            nombre: value.nombre.as_deref(),
            descripcion: value.descripcion.as_ref().map(Option::as_deref),
            precio: value.precio,
            stock: value.stock,
            categoria: value.categoria.as_ref().map(Option::as_deref),
            fecha_actualizacion: value.fecha_actualizacion,
        }
    }
}
