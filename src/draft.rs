//! Product Draft & Validation
//!
//! Loosely-typed form state for one product and the rules that turn it into
//! [`ProductFields`]. Validation runs on submit only.

use std::collections::BTreeMap;

use crate::models::{Product, ProductFields};

/// Editable product field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Price,
    Category,
    Description,
}

/// In-progress form values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl ProductDraft {
    /// Seed from the product being edited; `None` gives an empty draft.
    pub fn from_product(product: Option<&Product>) -> Self {
        match product {
            Some(p) => Self {
                name: p.name.clone(),
                price: p.price.to_string(),
                category: p.category.clone(),
                description: p.description.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Category => &self.category,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Price => self.price = value,
            Field::Category => self.category = value,
            Field::Description => self.description = value,
        }
    }

    /// Check every field; on success return trimmed strings and a numeric price.
    pub fn validate(&self) -> Result<ProductFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = check_text(&self.name, "Product name", 2, 100);
        let price = check_price(&self.price);
        let category = check_text(&self.category, "Category", 2, 50);
        let description = check_text(&self.description, "Description", 10, 500);

        match (name, price, category, description) {
            (Ok(name), Ok(price), Ok(category), Ok(description)) => Ok(ProductFields {
                name,
                price,
                description,
                category,
            }),
            (name, price, category, description) => {
                if let Err(msg) = name {
                    errors.insert(Field::Name, msg);
                }
                if let Err(msg) = price {
                    errors.insert(Field::Price, msg);
                }
                if let Err(msg) = category {
                    errors.insert(Field::Category, msg);
                }
                if let Err(msg) = description {
                    errors.insert(Field::Description, msg);
                }
                Err(errors)
            }
        }
    }
}

/// Required text with a trimmed length range, counted in characters
fn check_text(raw: &str, label: &str, min: usize, max: usize) -> Result<String, String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        Err(format!("{} is required", label))
    } else if len < min {
        Err(format!("{} must be at least {} characters", label, min))
    } else if len > max {
        Err(format!("{} must be less than {} characters", label, max))
    } else {
        Ok(trimmed.to_string())
    }
}

fn check_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Price is required".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err("Price must be a positive number".to_string()),
    }
}

/// One message per invalid field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Forget one field's message, leaving the others in place
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// What the form hands to the shell on a valid submit.
///
/// An attached image switches the request to multipart encoding.
#[derive(Debug, Clone)]
pub enum ProductPayload {
    Fields(ProductFields),
    WithImage(ProductFields, web_sys::File),
}

impl ProductPayload {
    pub fn new(fields: ProductFields, image: Option<web_sys::File>) -> Self {
        match image {
            Some(file) => ProductPayload::WithImage(fields, file),
            None => ProductPayload::Fields(fields),
        }
    }

    pub fn fields(&self) -> &ProductFields {
        match self {
            ProductPayload::Fields(fields) | ProductPayload::WithImage(fields, _) => fields,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, ProductPayload::WithImage(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, category: &str, description: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    fn valid_with_name(name: &str) -> ProductDraft {
        draft(name, "5", "Stationery", "A basic pen")
    }

    #[test]
    fn test_pen_is_accepted() {
        let fields = draft("Pen", "5", "Stationery", "A basic pen").validate().unwrap();
        assert_eq!(fields.name, "Pen");
        assert_eq!(fields.price, 5.0);
        assert_eq!(fields.category, "Stationery");
        assert_eq!(fields.description, "A basic pen");

        let payload = ProductPayload::new(fields, None);
        assert!(!payload.is_multipart());
        assert_eq!(payload.fields().price, 5.0);
    }

    #[test]
    fn test_short_name_and_description_give_two_errors() {
        let errors = draft("P", "5", "Stationery", "short").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), Some("Product name must be at least 2 characters"));
        assert_eq!(errors.get(Field::Description), Some("Description must be at least 10 characters"));
        assert_eq!(errors.get(Field::Price), None);
        assert_eq!(errors.get(Field::Category), None);
    }

    #[test]
    fn test_name_length_boundaries() {
        let too_long = "a".repeat(101);
        for rejected in ["", "   ", "a", too_long.as_str()] {
            let errors = valid_with_name(rejected).validate().unwrap_err();
            assert!(errors.get(Field::Name).is_some(), "{:?} should be rejected", rejected);
        }
        let longest = "a".repeat(100);
        for accepted in ["ab", longest.as_str(), "  ab  "] {
            assert!(valid_with_name(accepted).validate().is_ok(), "{:?} should be accepted", accepted);
        }
    }

    #[test]
    fn test_lengths_count_characters_not_utf16_units() {
        // one scalar value, two UTF-16 code units
        let emoji = "\u{1F600}";
        let single = valid_with_name(emoji).validate().unwrap_err();
        assert_eq!(single.get(Field::Name), Some("Product name must be at least 2 characters"));

        let pair = emoji.repeat(2);
        let longest = emoji.repeat(100);
        for accepted in [pair.as_str(), longest.as_str()] {
            assert!(valid_with_name(accepted).validate().is_ok());
        }

        let too_long = emoji.repeat(101);
        let errors = valid_with_name(&too_long).validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Product name must be less than 100 characters"));
    }

    #[test]
    fn test_description_length_boundaries() {
        let nine = draft("Pen", "5", "Stationery", "123456789").validate().unwrap_err();
        assert_eq!(nine.get(Field::Description), Some("Description must be at least 10 characters"));
        assert!(draft("Pen", "5", "Stationery", "1234567890").validate().is_ok());

        let long = draft("Pen", "5", "Stationery", &"d".repeat(501)).validate().unwrap_err();
        assert_eq!(long.get(Field::Description), Some("Description must be less than 500 characters"));
    }

    #[test]
    fn test_category_length_boundaries() {
        let short = draft("Pen", "5", "S", "A basic pen").validate().unwrap_err();
        assert_eq!(short.get(Field::Category), Some("Category must be at least 2 characters"));
        assert!(draft("Pen", "5", &"c".repeat(50), "A basic pen").validate().is_ok());
        assert!(draft("Pen", "5", &"c".repeat(51), "A basic pen").validate().is_err());
    }

    #[test]
    fn test_price_rules() {
        let missing = draft("Pen", "", "Stationery", "A basic pen").validate().unwrap_err();
        assert_eq!(missing.get(Field::Price), Some("Price is required"));

        for bad in ["0", "-1", "abc", "5abc", "inf", "NaN"] {
            let errors = draft("Pen", bad, "Stationery", "A basic pen").validate().unwrap_err();
            assert_eq!(errors.get(Field::Price), Some("Price must be a positive number"), "price {:?}", bad);
        }

        let fields = draft("Pen", " 12.75 ", "Stationery", "A basic pen").validate().unwrap();
        assert_eq!(fields.price, 12.75);
    }

    #[test]
    fn test_empty_draft_reports_every_field_as_required() {
        let errors = ProductDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Product name is required"));
        assert_eq!(errors.get(Field::Category), Some("Category is required"));
        assert_eq!(errors.get(Field::Description), Some("Description is required"));
    }

    #[test]
    fn test_clear_only_touches_one_field() {
        let mut errors = draft("P", "", "Stationery", "short").validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        errors.clear(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
        assert!(errors.get(Field::Price).is_some());
        assert!(errors.get(Field::Description).is_some());
    }

    #[test]
    fn test_draft_seeded_from_product() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Pen".to_string(),
            price: 5.0,
            category: "Stationery".to_string(),
            description: "A basic pen".to_string(),
            image_revision: 0,
        };
        let seeded = ProductDraft::from_product(Some(&product));
        assert_eq!(seeded.price, "5");
        assert_eq!(seeded.get(Field::Name), "Pen");
        assert_eq!(ProductDraft::from_product(None), ProductDraft::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_drafts_are_trimmed_with_positive_price(
                name in "[a-zA-Z]{2,100}",
                category in "[a-zA-Z]{2,50}",
                description in "[a-zA-Z]{10,500}",
                price in 0.01f64..1.0e7,
                pad in " {0,3}",
            ) {
                let raw = draft(
                    &format!("{pad}{name}{pad}"),
                    &format!("{pad}{price}"),
                    &format!("{category}{pad}"),
                    &format!("{pad}{description}"),
                );
                let fields = raw.validate().unwrap();
                prop_assert!(fields.price > 0.0);
                prop_assert_eq!(fields.price, price);
                prop_assert_eq!(fields.name, name);
                prop_assert_eq!(fields.category, category);
                prop_assert_eq!(fields.description, description);
            }

            #[test]
            fn overlong_names_are_rejected(name in "[a-z]{101,200}") {
                let errors = valid_with_name(&name).validate().unwrap_err();
                prop_assert_eq!(errors.get(Field::Name), Some("Product name must be less than 100 characters"));
            }
        }
    }
}
