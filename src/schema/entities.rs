//! Built-in entity declarations for the viewer's collections
//!
//! Each entity represents one database collection; the entity name is
//! converted to lowercase for the collection name (User -> "user").
//! The viewer reads these via the schema catalog, uses them to validate
//! documents when creating or editing, and handles all CRUD itself.

use serde_json::json;

use super::types::{EntitySchema, FieldDef};

/// Returns the declared entities, in declaration order.
pub fn builtin_entities() -> Vec<EntitySchema> {
    vec![user(), product(), farmhouse(), booking()]
}

/// Users collection
fn user() -> EntitySchema {
    EntitySchema::new(
        "User",
        vec![
            FieldDef::required_string("name").describe("Full name"),
            FieldDef::required_string("email").describe("Email address"),
            FieldDef::required_string("address").describe("Address"),
            FieldDef::optional_int("age").ge(0).le(120).describe("Age in years"),
            FieldDef::optional_bool("is_active")
                .with_default(json!(true))
                .describe("Whether user is active"),
        ],
    )
    .describe("Users collection")
}

/// Products collection
fn product() -> EntitySchema {
    EntitySchema::new(
        "Product",
        vec![
            FieldDef::required_string("title").describe("Product title"),
            FieldDef::optional_string("description").describe("Product description"),
            FieldDef::required_float("price").ge(0).describe("Price in dollars"),
            FieldDef::required_string("category").describe("Product category"),
            FieldDef::optional_bool("in_stock")
                .with_default(json!(true))
                .describe("Whether product is in stock"),
        ],
    )
    .describe("Products collection")
}

/// Farmhouses available for browsing and booking
fn farmhouse() -> EntitySchema {
    EntitySchema::new(
        "Farmhouse",
        vec![
            FieldDef::required_string("name").describe("Farmhouse name"),
            FieldDef::required_string("location").describe("City or area"),
            FieldDef::required_string("description").describe("Short description"),
            FieldDef::required_float("price_per_night").ge(0).describe("Nightly rate"),
            FieldDef::required_int("guests").ge(1).describe("Max guests"),
            FieldDef::required_int("bedrooms").ge(0),
            FieldDef::required_int("bathrooms").ge(0),
            FieldDef::optional_string("image_url").describe("Cover image URL"),
            FieldDef::optional_float("rating").ge(0).le(5).with_default(json!(4.8)),
        ],
    )
    .describe("Farmhouses available for browsing and booking")
}

/// Bookings for farmhouses
///
/// `farmhouse_id` is a loose reference to a Farmhouse document id; it
/// is not referentially enforced here.
fn booking() -> EntitySchema {
    EntitySchema::new(
        "Booking",
        vec![
            FieldDef::required_string("farmhouse_id").describe("ID of the farmhouse"),
            FieldDef::required_string("name").describe("Guest full name"),
            FieldDef::required_string("email").describe("Guest email"),
            FieldDef::required_date("check_in").describe("Check-in date"),
            FieldDef::required_date("check_out").describe("Check-out date"),
            FieldDef::required_int("guests").ge(1),
            FieldDef::optional_string("notes").describe("Special requests"),
        ],
    )
    .describe("Bookings for farmhouses")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_declarations_are_well_formed() {
        for entity in builtin_entities() {
            assert!(
                entity.validate_structure().is_ok(),
                "malformed declaration for {}",
                entity.name
            );
        }
    }

    #[test]
    fn test_collection_names() {
        let names: Vec<String> = builtin_entities()
            .iter()
            .map(|e| e.collection.clone())
            .collect();
        assert_eq!(names, vec!["user", "product", "farmhouse", "booking"]);
    }

    #[test]
    fn test_user_field_constraints() {
        let user = builtin_entities().remove(0);
        let age = user.field("age").unwrap();
        assert!(!age.required);
        assert_eq!(age.min, Some(0.0));
        assert_eq!(age.max, Some(120.0));

        let is_active = user.field("is_active").unwrap();
        assert_eq!(is_active.default, Some(json!(true)));
    }

    #[test]
    fn test_farmhouse_rating_default() {
        let farmhouse = builtin_entities()
            .into_iter()
            .find(|e| e.collection == "farmhouse")
            .unwrap();
        let rating = farmhouse.field("rating").unwrap();
        assert_eq!(rating.default, Some(json!(4.8)));
        assert_eq!(rating.min, Some(0.0));
        assert_eq!(rating.max, Some(5.0));
    }

    #[test]
    fn test_booking_dates_are_required() {
        let booking = builtin_entities()
            .into_iter()
            .find(|e| e.collection == "booking")
            .unwrap();
        assert!(booking.field("check_in").unwrap().required);
        assert!(booking.field("check_out").unwrap().required);
        assert!(!booking.field("notes").unwrap().required);
    }
}
