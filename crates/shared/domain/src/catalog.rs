//! Catalog entities (categories and products).
//!
//! Only field presence and type are checked here; there is no inventory logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MSG_BLANK, MSG_NOT_A_NUMBER};
use crate::validation::{is_blank, run_checks, Check, ValidationErrors};

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Product belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Price in cents
    pub price_cents: i64,
    pub quantity: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Price formatted in dollars, e.g. "$12.50"
    pub fn display_price(&self) -> String {
        let sign = if self.price_cents < 0 { "-" } else { "" };
        let cents = self.price_cents.unsigned_abs();
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

/// Category creation input
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewCategory {
    #[serde(default)]
    pub name: Option<String>,
}

pub const CATEGORY_CHECKS: &[Check<NewCategory>] = &[category_name];

fn category_name(c: &NewCategory, errors: &mut ValidationErrors) {
    if is_blank(c.name.as_deref()) {
        errors.add("name", MSG_BLANK);
    }
}

impl NewCategory {
    pub fn validate(&self) -> ValidationErrors {
        run_checks(self, CATEGORY_CHECKS)
    }
}

/// Product creation input. Every field is optional so that missing values
/// surface as field errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

/// Checks run on every new product, in order. Category existence needs
/// storage and is checked by the catalog service.
pub const PRODUCT_CHECKS: &[Check<NewProduct>] = &[
    product_name,
    product_price,
    product_quantity,
    product_category,
];

fn product_name(p: &NewProduct, errors: &mut ValidationErrors) {
    if is_blank(p.name.as_deref()) {
        errors.add("name", MSG_BLANK);
    }
}

fn product_price(p: &NewProduct, errors: &mut ValidationErrors) {
    if p.price_cents.is_none() {
        errors.add("price_cents", MSG_NOT_A_NUMBER);
    }
}

fn product_quantity(p: &NewProduct, errors: &mut ValidationErrors) {
    if p.quantity.is_none() {
        errors.add("quantity", MSG_BLANK);
    }
}

fn product_category(p: &NewProduct, errors: &mut ValidationErrors) {
    if p.category_id.is_none() {
        errors.add("category", MSG_BLANK);
    }
}

impl NewProduct {
    pub fn validate(&self) -> ValidationErrors {
        run_checks(self, PRODUCT_CHECKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> NewProduct {
        NewProduct {
            name: Some("Product Name".to_string()),
            description: None,
            price_cents: Some(1000),
            quantity: Some(5),
            category_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(product().validate().is_empty());
    }

    #[test]
    fn test_name_required() {
        let p = NewProduct {
            name: None,
            ..product()
        };
        assert!(p.validate().contains("name", "can't be blank"));
    }

    #[test]
    fn test_price_must_be_a_number() {
        let p = NewProduct {
            price_cents: None,
            ..product()
        };
        assert!(p.validate().contains("price_cents", "is not a number"));
    }

    #[test]
    fn test_quantity_required() {
        let p = NewProduct {
            quantity: None,
            ..product()
        };
        assert!(p.validate().contains("quantity", "can't be blank"));
    }

    #[test]
    fn test_category_required() {
        let p = NewProduct {
            category_id: None,
            ..product()
        };
        assert!(p.validate().contains("category", "can't be blank"));
    }

    #[test]
    fn test_empty_product_reports_every_field() {
        assert_eq!(NewProduct::default().validate().len(), 4);
    }

    #[test]
    fn test_category_name_required() {
        assert!(NewCategory::default()
            .validate()
            .contains("name", "can't be blank"));
        assert!(NewCategory {
            name: Some("Electronics".to_string())
        }
        .validate()
        .is_empty());
    }

    #[test]
    fn test_display_price() {
        let p = Product {
            id: Uuid::new_v4(),
            name: "Lamp".to_string(),
            description: None,
            price_cents: 1250,
            quantity: 1,
            category_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        assert_eq!(p.display_price(), "$12.50");
    }
}
