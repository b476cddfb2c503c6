//! Wire types shared between the controller and the inventory service.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifier of a product record, assigned by the server.
///
/// Serializes as the bare integer so it matches the service's JSON shape.
#[derive(Serialize, Deserialize, Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{0}", self.0))
    }
}

/// A product record as returned by the inventory service.
///
/// Records are server-owned. The controller never edits one in place; it
/// creates or deletes records and refetches the collection to observe the
/// result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-form text; the view substitutes a placeholder when this is
    /// absent or empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: u32,
}

/// Body of `POST {base}/products`.
///
/// The server responds with the created record, which the controller
/// ignores beyond success or failure; the follow-up refetch supplies the
/// new row.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

/// Availability of the inventory service as reported by the one-shot
/// health probe.
///
/// Starts at `Checking` and settles to `Up` or `Down` at most once per
/// page load. A settled status never changes again without a reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// The probe has not answered yet.
    #[default]
    Checking,
    /// The probe answered with a success status.
    Up,
    /// The probe failed or timed out.
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&ProductId(42)).unwrap();
        assert_eq!(json, "42");
        assert_eq!(ProductId(42).to_string(), "42");
    }

    #[test]
    fn test_product_decodes_service_payload() {
        let json = r#"{"id":1,"name":"Widget","description":"A widget","price":9.99,"quantity":3}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description.as_deref(), Some("A widget"));
        assert_eq!(product.quantity, 3);
    }

    #[test]
    fn test_product_tolerates_missing_or_null_description() {
        let absent: Product =
            serde_json::from_str(r#"{"id":2,"name":"Gadget","price":1.5,"quantity":7}"#).unwrap();
        assert_eq!(absent.description, None);

        let null: Product = serde_json::from_str(
            r#"{"id":3,"name":"Gizmo","description":null,"price":1.5,"quantity":7}"#,
        )
        .unwrap();
        assert_eq!(null.description, None);
    }

    #[test]
    fn test_create_payload_wire_shape() {
        let payload = NewProduct {
            name: "Widget".to_string(),
            description: String::new(),
            price: 2.5,
            quantity: 4,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Widget","description":"","price":2.5,"quantity":4}"#
        );
    }

    #[test]
    fn test_api_status_starts_checking() {
        assert_eq!(ApiStatus::default(), ApiStatus::Checking);
    }
}
