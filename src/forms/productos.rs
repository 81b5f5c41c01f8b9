use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::producto::{NewProducto, UpdateProducto, normalize_precio};
use crate::forms::deserialize_present;

/// Maximum allowed length for a product name.
const NOMBRE_MAX_LEN: usize = 100;
const NOMBRE_MAX_LEN_VALIDATOR: u64 = NOMBRE_MAX_LEN as u64;

/// Maximum allowed length for a product description.
const DESCRIPCION_MAX_LEN: usize = 500;
const DESCRIPCION_MAX_LEN_VALIDATOR: u64 = DESCRIPCION_MAX_LEN as u64;

/// Maximum allowed length for a category label.
const CATEGORIA_MAX_LEN: usize = 50;
const CATEGORIA_MAX_LEN_VALIDATOR: u64 = CATEGORIA_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductoFormResult<T> = Result<T, ProductoFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductoFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The price is not strictly positive once rounded to cents.
    #[error("el precio debe ser mayor que cero (recibido {value})")]
    InvalidPrecio { value: f64 },
}

/// JSON body accepted when creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductoForm {
    #[validate(length(min = 1, max = NOMBRE_MAX_LEN_VALIDATOR))]
    pub nombre: String,
    #[validate(length(max = DESCRIPCION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(length(max = CATEGORIA_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub categoria: Option<String>,
}

impl CreateProductoForm {
    /// Validates and normalizes the payload into a domain `NewProducto`.
    pub fn into_new_producto(self) -> ProductoFormResult<NewProducto> {
        self.validate()?;

        let precio = normalize_precio(self.precio).ok_or(ProductoFormError::InvalidPrecio {
            value: self.precio,
        })?;

        let mut new_producto = NewProducto::new(self.nombre, precio, self.stock);

        if let Some(descripcion) = self.descripcion {
            new_producto = new_producto.with_descripcion(descripcion);
        }

        if let Some(categoria) = self.categoria {
            new_producto = new_producto.with_categoria(categoria);
        }

        Ok(new_producto)
    }
}

/// JSON body accepted when partially updating a product.
///
/// A missing key leaves the column untouched. `descripcion` and `categoria`
/// additionally accept an explicit `null`, which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductoForm {
    #[validate(length(min = 1, max = NOMBRE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub nombre: Option<String>,
    #[validate(length(max = DESCRIPCION_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "deserialize_present")]
    pub descripcion: Option<Option<String>>,
    #[serde(default)]
    pub precio: Option<f64>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: Option<i32>,
    #[validate(length(max = CATEGORIA_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "deserialize_present")]
    pub categoria: Option<Option<String>>,
}

impl UpdateProductoForm {
    /// Validates the payload and collects the explicitly provided fields.
    pub fn into_update_producto(self) -> ProductoFormResult<UpdateProducto> {
        self.validate()?;

        let mut updates = UpdateProducto::new();

        if let Some(nombre) = self.nombre {
            updates = updates.nombre(nombre);
        }

        if let Some(descripcion) = self.descripcion {
            updates = updates.descripcion(descripcion);
        }

        if let Some(precio) = self.precio {
            let normalized =
                normalize_precio(precio).ok_or(ProductoFormError::InvalidPrecio { value: precio })?;
            updates = updates.precio(normalized);
        }

        if let Some(stock) = self.stock {
            updates = updates.stock(stock);
        }

        if let Some(categoria) = self.categoria {
            updates = updates.categoria(categoria);
        }

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form() -> CreateProductoForm {
        CreateProductoForm {
            nombre: "Tren de madera".to_string(),
            descripcion: None,
            precio: 19.999,
            stock: 5,
            categoria: Some("juguetes".to_string()),
        }
    }

    #[test]
    fn create_form_rounds_precio_and_keeps_nombre_verbatim() {
        let form = CreateProductoForm {
            nombre: "  Tren \t de   madera ".to_string(),
            descripcion: Some("Incluye vías".to_string()),
            ..create_form()
        };

        let new_producto = form.into_new_producto().expect("expected success");

        assert_eq!(new_producto.nombre, "  Tren \t de   madera ");
        assert_eq!(new_producto.precio, 20.0);
        assert_eq!(new_producto.stock, 5);
        assert_eq!(new_producto.descripcion.as_deref(), Some("Incluye vías"));
        assert_eq!(new_producto.categoria.as_deref(), Some("juguetes"));
    }

    #[test]
    fn create_form_rejects_non_positive_precio() {
        for precio in [0.0, -5.0, 0.004] {
            let form = CreateProductoForm {
                precio,
                ..create_form()
            };

            let result = form.into_new_producto();

            assert!(
                matches!(
                    result,
                    Err(ProductoFormError::InvalidPrecio { value }) if value == precio
                ),
                "precio {precio} should be rejected"
            );
        }
    }

    #[test]
    fn create_form_rejects_negative_stock() {
        let form = CreateProductoForm {
            stock: -1,
            ..create_form()
        };

        assert!(matches!(
            form.into_new_producto(),
            Err(ProductoFormError::Validation(_))
        ));
    }

    #[test]
    fn create_form_enforces_length_limits() {
        let too_long_nombre = CreateProductoForm {
            nombre: "x".repeat(NOMBRE_MAX_LEN + 1),
            ..create_form()
        };
        assert!(matches!(
            too_long_nombre.into_new_producto(),
            Err(ProductoFormError::Validation(_))
        ));

        let too_long_categoria = CreateProductoForm {
            categoria: Some("c".repeat(CATEGORIA_MAX_LEN + 1)),
            ..create_form()
        };
        assert!(matches!(
            too_long_categoria.into_new_producto(),
            Err(ProductoFormError::Validation(_))
        ));

        let too_long_descripcion = CreateProductoForm {
            descripcion: Some("d".repeat(DESCRIPCION_MAX_LEN + 1)),
            ..create_form()
        };
        assert!(matches!(
            too_long_descripcion.into_new_producto(),
            Err(ProductoFormError::Validation(_))
        ));
    }

    #[test]
    fn create_form_accepts_whitespace_nombre() {
        let form = CreateProductoForm {
            nombre: "   ".to_string(),
            ..create_form()
        };

        let new_producto = form.into_new_producto().expect("expected success");

        assert_eq!(new_producto.nombre, "   ");
    }

    #[test]
    fn create_form_rejects_empty_nombre() {
        let form = CreateProductoForm {
            nombre: String::new(),
            ..create_form()
        };

        assert!(matches!(
            form.into_new_producto(),
            Err(ProductoFormError::Validation(_))
        ));
    }

    #[test]
    fn update_form_keeps_nombre_verbatim() {
        let form = UpdateProductoForm {
            nombre: Some("Tren\tde  madera".to_string()),
            ..UpdateProductoForm::default()
        };

        let updates = form.into_update_producto().expect("expected success");

        assert_eq!(updates.nombre.as_deref(), Some("Tren\tde  madera"));
    }

    #[test]
    fn update_form_distinguishes_absent_null_and_value() {
        let form: UpdateProductoForm =
            serde_json::from_str(r#"{"descripcion": null, "categoria": "juegos"}"#)
                .expect("valid json");

        assert_eq!(form.descripcion, Some(None));
        assert_eq!(form.categoria, Some(Some("juegos".to_string())));
        assert_eq!(form.nombre, None);
        assert_eq!(form.stock, None);

        let updates = form.into_update_producto().expect("expected success");

        assert_eq!(updates.descripcion, Some(None));
        assert_eq!(updates.categoria, Some(Some("juegos".to_string())));
        assert!(updates.nombre.is_none());
        assert!(updates.precio.is_none());
        assert!(updates.stock.is_none());
    }

    #[test]
    fn update_form_keeps_zero_values() {
        let form: UpdateProductoForm =
            serde_json::from_str(r#"{"stock": 0}"#).expect("valid json");

        let updates = form.into_update_producto().expect("expected success");

        assert_eq!(updates.stock, Some(0));
        assert!(!updates.is_empty());
    }

    #[test]
    fn update_form_empty_body_has_no_changes() {
        let form: UpdateProductoForm = serde_json::from_str("{}").expect("valid json");

        let updates = form.into_update_producto().expect("expected success");

        assert!(updates.is_empty());
    }

    #[test]
    fn update_form_rounds_precio() {
        let form = UpdateProductoForm {
            precio: Some(19.999),
            ..UpdateProductoForm::default()
        };

        let updates = form.into_update_producto().expect("expected success");

        assert_eq!(updates.precio, Some(20.0));
    }

    #[test]
    fn update_form_rejects_invalid_precio() {
        let form = UpdateProductoForm {
            precio: Some(-1.0),
            ..UpdateProductoForm::default()
        };

        assert!(matches!(
            form.into_update_producto(),
            Err(ProductoFormError::InvalidPrecio { .. })
        ));
    }

    #[test]
    fn update_form_validates_present_categoria_length() {
        let form = UpdateProductoForm {
            categoria: Some(Some("c".repeat(CATEGORIA_MAX_LEN + 1))),
            ..UpdateProductoForm::default()
        };

        assert!(matches!(
            form.into_update_producto(),
            Err(ProductoFormError::Validation(_))
        ));
    }
}
