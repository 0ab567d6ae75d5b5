//! Validation Invariant Tests
//!
//! Invariants covered:
//! - Omitting any required field of any entity names that field
//! - Bounds are inclusive: boundary values pass, outside values fail
//! - Absent optional fields take their declared default, else null
//! - Validation is deterministic
//! - No cross-field rules (check_out before check_in is accepted)

use flames_schema::schema::{DocumentValidator, SchemaRegistry, ValidatorOptions};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn registry() -> SchemaRegistry {
    SchemaRegistry::builtin().unwrap()
}

fn valid_document(collection: &str) -> Value {
    match collection {
        "user" => json!({
            "name": "Alice",
            "email": "alice@example.com",
            "address": "1 Main St",
            "age": 34,
            "is_active": true
        }),
        "product" => json!({
            "title": "Table Lamp",
            "description": "Warm light",
            "price": 39.5,
            "category": "home",
            "in_stock": false
        }),
        "farmhouse" => json!({
            "name": "Hill Cottage",
            "location": "Vermont",
            "description": "Quiet place with a view",
            "price_per_night": 140.0,
            "guests": 4,
            "bedrooms": 2,
            "bathrooms": 1,
            "image_url": "https://example.com/hill.jpg",
            "rating": 4.5
        }),
        "booking" => json!({
            "farmhouse_id": "fh_42",
            "name": "Bob",
            "email": "bob@example.com",
            "check_in": "2026-09-01",
            "check_out": "2026-09-05",
            "guests": 2,
            "notes": "late arrival"
        }),
        other => panic!("no fixture for {}", other),
    }
}

// =============================================================================
// Required Field Tests
// =============================================================================

/// Every complete fixture passes for its entity.
#[test]
fn test_complete_documents_pass() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    for collection in ["user", "product", "farmhouse", "booking"] {
        let doc = valid_document(collection);
        assert!(
            validator.validate(collection, &doc).is_ok(),
            "fixture for {} rejected",
            collection
        );
    }
}

/// For all entities, omitting any one required field yields an error
/// naming that field.
#[test]
fn test_omitting_any_required_field_names_it() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    for collection in ["user", "product", "farmhouse", "booking"] {
        let entity = registry.get(collection).unwrap();
        let complete = valid_document(collection);

        for required in entity.required_fields() {
            let mut doc = complete.clone();
            doc.as_object_mut().unwrap().remove(&required.name);

            let result = validator.validate(collection, &doc);
            assert!(
                result.is_err(),
                "{}.{} omitted but accepted",
                collection,
                required.name
            );
            let err = result.unwrap_err();
            assert_eq!(
                err.details().unwrap().field,
                required.name,
                "wrong field named for {}.{}",
                collection,
                required.name
            );
        }
    }
}

// =============================================================================
// Bounds Tests
// =============================================================================

/// Boundary values are accepted; values outside are rejected.
#[test]
fn test_bounds_are_inclusive() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let cases: Vec<(&str, &str, Vec<Value>, Vec<Value>)> = vec![
        ("user", "age", vec![json!(0), json!(120)], vec![json!(-1), json!(121), json!(150)]),
        ("product", "price", vec![json!(0), json!(0.0)], vec![json!(-0.01), json!(-10)]),
        ("farmhouse", "rating", vec![json!(0.0), json!(5.0)], vec![json!(-0.1), json!(5.1)]),
        ("farmhouse", "guests", vec![json!(1)], vec![json!(0), json!(-3)]),
        ("farmhouse", "bedrooms", vec![json!(0)], vec![json!(-1)]),
        ("farmhouse", "bathrooms", vec![json!(0)], vec![json!(-1)]),
        ("booking", "guests", vec![json!(1)], vec![json!(0)]),
    ];

    for (collection, field, accepted, rejected) in cases {
        for value in accepted {
            let mut doc = valid_document(collection);
            doc.as_object_mut().unwrap().insert(field.into(), value.clone());
            assert!(
                validator.validate(collection, &doc).is_ok(),
                "{}.{} = {} should pass",
                collection,
                field,
                value
            );
        }
        for value in rejected {
            let mut doc = valid_document(collection);
            doc.as_object_mut().unwrap().insert(field.into(), value.clone());
            let result = validator.validate(collection, &doc);
            assert!(
                result.is_err(),
                "{}.{} = {} should fail",
                collection,
                field,
                value
            );
            assert_eq!(result.unwrap_err().details().unwrap().field, field);
        }
    }
}

// =============================================================================
// Default Tests
// =============================================================================

/// The minimal user from the design notes: accepted, with is_active
/// defaulted to true and age null.
#[test]
fn test_minimal_user_takes_defaults() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let doc = json!({"name": "A", "email": "a@b.com", "address": "X"});
    let normalized = validator.validate("User", &doc).unwrap();

    assert_eq!(normalized["is_active"], json!(true));
    assert_eq!(normalized["age"], Value::Null);
}

/// The over-age user from the design notes is rejected.
#[test]
fn test_over_age_user_rejected() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let doc = json!({"name": "A", "email": "a@b.com", "address": "X", "age": 150});
    assert!(validator.validate("User", &doc).is_err());
}

/// Farmhouse rating defaults to 4.8 when absent, keeps an explicit
/// value, and keeps an explicit null.
#[test]
fn test_rating_default_rules() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let mut doc = valid_document("farmhouse");
    doc.as_object_mut().unwrap().remove("rating");
    let normalized = validator.validate("Farmhouse", &doc).unwrap();
    assert_eq!(normalized["rating"], json!(4.8));

    let normalized = validator
        .validate("Farmhouse", &valid_document("farmhouse"))
        .unwrap();
    assert_eq!(normalized["rating"], json!(4.5));

    let mut doc = valid_document("farmhouse");
    doc.as_object_mut().unwrap().insert("rating".into(), Value::Null);
    let normalized = validator.validate("Farmhouse", &doc).unwrap();
    assert_eq!(normalized["rating"], Value::Null);
}

/// Optional fields without a declared default normalize to null.
#[test]
fn test_optional_without_default_is_null() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let mut doc = valid_document("product");
    doc.as_object_mut().unwrap().remove("description");
    let normalized = validator.validate("Product", &doc).unwrap();

    assert_eq!(normalized["description"], Value::Null);
    // in_stock was given explicitly and must not be overridden
    assert_eq!(normalized["in_stock"], json!(false));
}

// =============================================================================
// Cross-field Behavior Tests
// =============================================================================

/// There is no cross-field rule: a booking whose check_out precedes its
/// check_in is accepted as-is.
#[test]
fn test_reversed_booking_dates_accepted() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let mut doc = valid_document("booking");
    {
        let obj = doc.as_object_mut().unwrap();
        obj.insert("check_in".into(), json!("2026-09-05"));
        obj.insert("check_out".into(), json!("2026-09-01"));
    }

    assert!(validator.validate("Booking", &doc).is_ok());
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same document validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let doc = valid_document("booking");
    let first = validator.validate("Booking", &doc).unwrap();

    for _ in 0..100 {
        let again = validator.validate("Booking", &doc).unwrap();
        assert_eq!(first, again);
    }
}

/// Invalid document fails consistently.
#[test]
fn test_invalid_document_fails_consistently() {
    let registry = registry();
    let validator = DocumentValidator::new(&registry);

    let doc = json!({"name": "A"});
    for _ in 0..100 {
        assert!(validator.validate("User", &doc).is_err());
    }
}

// =============================================================================
// Strict Mode Tests
// =============================================================================

/// Undeclared fields are dropped by default and rejected in strict
/// mode.
#[test]
fn test_unknown_field_handling() {
    let registry = registry();

    let mut doc = valid_document("user");
    doc.as_object_mut().unwrap().insert("nickname".into(), json!("Al"));

    let lenient = DocumentValidator::new(&registry);
    let normalized = lenient.validate("User", &doc).unwrap();
    assert!(normalized.get("nickname").is_none());

    let strict = DocumentValidator::with_options(&registry, ValidatorOptions::strict());
    let result = strict.validate("User", &doc);
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().details().unwrap().field, "nickname");
}
