use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of rows returned by a listing when the caller does not say otherwise.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Producto {
    /// Identifier assigned by storage; never changes.
    pub id: i32,
    /// Human-readable name of the product.
    pub nombre: String,
    /// Optional longer description shown to users.
    pub descripcion: Option<String>,
    /// Unit price, always positive and rounded to two decimals.
    pub precio: f64,
    /// Units available in inventory.
    pub stock: i32,
    /// Optional catalog category used for filtering.
    pub categoria: Option<String>,
    /// Timestamp for when the product record was created.
    pub fecha_creacion: NaiveDateTime,
    /// Timestamp of the last successful update, if any.
    pub fecha_actualizacion: Option<NaiveDateTime>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProducto {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub categoria: Option<String>,
    /// Timestamp captured when the payload was built.
    pub fecha_creacion: NaiveDateTime,
}

impl NewProducto {
    /// Build a new product payload stamped with the current time.
    ///
    /// `precio` is stored as given; callers normalise it with
    /// [`normalize_precio`] first.
    pub fn new(nombre: impl Into<String>, precio: f64, stock: i32) -> Self {
        Self {
            nombre: nombre.into(),
            descripcion: None,
            precio,
            stock,
            categoria: None,
            fecha_creacion: Utc::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = Some(descripcion.into());
        self
    }

    /// Attach a category to the product payload.
    pub fn with_categoria(mut self, categoria: impl Into<String>) -> Self {
        self.categoria = Some(categoria.into());
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// `None` leaves a column untouched. For the nullable columns the inner
/// `Option` distinguishes "set to NULL" from "set to a value".
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProducto {
    pub nombre: Option<String>,
    pub descripcion: Option<Option<String>>,
    pub precio: Option<f64>,
    pub stock: Option<i32>,
    pub categoria: Option<Option<String>>,
    /// Timestamp written alongside any change.
    pub fecha_actualizacion: NaiveDateTime,
}

impl Default for UpdateProducto {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProducto {
    /// Create a patch with no changes, stamped with the current time.
    pub fn new() -> Self {
        Self {
            nombre: None,
            descripcion: None,
            precio: None,
            stock: None,
            categoria: None,
            fecha_actualizacion: Utc::now().naive_utc(),
        }
    }

    /// Update the product name.
    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    /// Update the description, using `None` to clear an existing value.
    pub fn descripcion(mut self, descripcion: Option<impl Into<String>>) -> Self {
        self.descripcion = Some(descripcion.map(Into::into));
        self
    }

    /// Update the price. The value must already be normalised.
    pub fn precio(mut self, precio: f64) -> Self {
        self.precio = Some(precio);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Update the category, using `None` to clear an existing value.
    pub fn categoria(mut self, categoria: Option<impl Into<String>>) -> Self {
        self.categoria = Some(categoria.map(Into::into));
        self
    }

    /// Whether the patch touches no column at all.
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.descripcion.is_none()
            && self.precio.is_none()
            && self.stock.is_none()
            && self.categoria.is_none()
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoListQuery {
    /// Optional exact, case-sensitive category filter.
    pub categoria: Option<String>,
    /// Number of matching rows to skip.
    pub skip: usize,
    /// Maximum number of rows to return.
    pub limit: usize,
}

impl Default for ProductoListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductoListQuery {
    /// Construct a query over every product using the default window.
    pub fn new() -> Self {
        Self {
            categoria: None,
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Filter the results to products in exactly this category.
    pub fn categoria(mut self, categoria: impl Into<String>) -> Self {
        self.categoria = Some(categoria.into());
        self
    }

    /// Apply an offset/limit window to the query.
    pub fn paginate(mut self, skip: usize, limit: usize) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }
}

/// Acknowledgment returned after a product has been removed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteAck {
    pub ok: bool,
    pub message: String,
}

impl DeleteAck {
    pub fn deleted(producto_id: i32) -> Self {
        Self {
            ok: true,
            message: format!("Producto con ID {producto_id} eliminado correctamente"),
        }
    }
}

/// Round a price to two decimal places, sending exact halves to the even cent.
///
/// Prices too large to scale by 100 carry no fractional digits and are kept
/// as they are. Returns `None` when the price is not finite or is not
/// strictly positive, including values that collapse to `0.00` once rounded.
pub fn normalize_precio(precio: f64) -> Option<f64> {
    if !precio.is_finite() || precio <= 0.0 {
        return None;
    }

    let cents = precio * 100.0;
    let rounded = if cents.is_finite() {
        cents.round_ties_even() / 100.0
    } else {
        precio
    };
    (rounded > 0.0).then_some(rounded)
}
