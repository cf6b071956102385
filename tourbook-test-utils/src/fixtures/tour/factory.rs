//! Factory functions for generating tour records as the GraphQL backend returns them.

use serde_json::{json, Value};

/// Create a complete tour record with every optional field populated.
///
/// Field names follow the backend's camelCase GraphQL output.
///
/// # Arguments
/// - `id` - Tour ID, also used to vary the other fields
///
/// # Returns
/// - `Value` - JSON object for a single tour
pub fn mock_tour(id: i32) -> Value {
    json!({
        "id": id,
        "title": format!("Tour {}", id),
        "description": format!("A guided tour number {}", id),
        "startDate": "2025-06-01",
        "endDate": "2025-06-08",
        "price": 1250.5 + id as f64,
        "rating": 4.5,
        "createdAt": "2025-01-15T09:30:00",
        "updatedAt": "2025-02-01T12:00:00",
        "location": "Reykjavik, Iceland",
        "imageUrl": format!("https://images.example.com/tours/{}.jpg", id),
        "isActive": true,
        "maxParticipants": 12
    })
}

/// Create a tour record carrying only the required fields.
pub fn mock_minimal_tour(id: i32) -> Value {
    json!({
        "id": id,
        "title": format!("Tour {}", id),
        "isActive": false
    })
}

/// Create `count` complete tour records with IDs starting at 1.
pub fn mock_tours(count: i32) -> Vec<Value> {
    (1..=count).map(mock_tour).collect()
}

/// Create the record returned by the `createTour` mutation.
pub fn mock_created_tour(id: i32, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "created_at": "2025-03-01T10:00:00",
        "updated_at": "2025-03-01T10:00:00"
    })
}
