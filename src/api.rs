use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::customer::{Customer, CustomerRegistry};
use crate::error::AppResult;
use crate::rating::{Rating, RatingLedger};
use crate::restaurant::{Restaurant, RestaurantRegistry};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRestaurantResponse {
    pub message: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub category: String,
    pub active: bool,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            category: restaurant.category.clone(),
            active: restaurant.active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleRestaurantResponse {
    pub message: String,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddDishRequest {
    pub dish: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddDishResponse {
    pub message: String,
    pub dish: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordOrderRequest {
    pub dish: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordOrderResponse {
    pub message: String,
    pub dish: String,
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRatingRequest {
    pub restaurant: String,
    pub customer: String,
    pub score: i64,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRatingResponse {
    pub message: String,
}

/// Either the rating history or the "no ratings found" marker, so an
/// unrated restaurant renders as a message instead of an empty list.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListRatingsResponse {
    Ratings(Vec<Rating>),
    NoRatings { message: String },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AverageRatingResponse {
    pub average: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: String,
    pub age: i64,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterCustomerResponse {
    pub message: String,
}

#[derive(Clone)]
pub struct AppState {
    restaurants: Arc<Mutex<RestaurantRegistry>>,
    ratings: Arc<Mutex<RatingLedger>>,
    customers: Arc<Mutex<CustomerRegistry>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            restaurants: Arc::new(Mutex::new(RestaurantRegistry::new())),
            ratings: Arc::new(Mutex::new(RatingLedger::new())),
            customers: Arc::new(Mutex::new(CustomerRegistry::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router() -> Router {
    let state = AppState::new();

    Router::new()
        .route("/restaurants", post(create_restaurant).get(list_restaurants))
        .route("/restaurants/:name/toggle", post(toggle_restaurant))
        .route("/restaurants/:name/dishes", post(add_dish))
        .route("/restaurants/:name/orders", post(record_order))
        .route("/restaurants/:name/ratings", get(list_ratings))
        .route("/restaurants/:name/ratings/average", get(average_rating))
        .route("/ratings", post(register_rating))
        .route("/customers", post(register_customer).get(list_customers))
        .route("/customers/:email", get(find_customer))
        .with_state(state)
}

async fn create_restaurant(
    State(state): State<AppState>,
    Json(request): Json<CreateRestaurantRequest>,
) -> Json<CreateRestaurantResponse> {
    let mut restaurants = state.restaurants.lock().await;
    restaurants.create(&request.name, &request.category);

    Json(CreateRestaurantResponse {
        message: "Restaurant created successfully!".to_string(),
        name: request.name,
        category: request.category,
    })
}

async fn list_restaurants(State(state): State<AppState>) -> Json<Vec<RestaurantSummary>> {
    let restaurants = state.restaurants.lock().await;
    Json(restaurants.list().iter().map(RestaurantSummary::from).collect())
}

async fn toggle_restaurant(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ToggleRestaurantResponse>> {
    let mut restaurants = state.restaurants.lock().await;
    let active = restaurants.toggle_active(&name)?;
    let status = if active { "activated" } else { "deactivated" };

    Ok(Json(ToggleRestaurantResponse {
        message: format!("Restaurant {} was {} successfully.", name, status),
        active,
    }))
}

async fn add_dish(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<AddDishRequest>,
) -> AppResult<Json<AddDishResponse>> {
    let mut restaurants = state.restaurants.lock().await;
    restaurants.add_dish(&name, &request.dish, request.price)?;

    Ok(Json(AddDishResponse {
        message: "Dish added successfully!".to_string(),
        dish: request.dish,
        price: request.price,
    }))
}

async fn record_order(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<RecordOrderRequest>,
) -> AppResult<Json<RecordOrderResponse>> {
    let mut restaurants = state.restaurants.lock().await;
    let count = restaurants.record_order(&name, &request.dish)?;

    Ok(Json(RecordOrderResponse {
        message: "Order recorded successfully!".to_string(),
        dish: request.dish,
        count,
    }))
}

async fn register_rating(
    State(state): State<AppState>,
    Json(request): Json<RegisterRatingRequest>,
) -> AppResult<Json<RegisterRatingResponse>> {
    let mut ratings = state.ratings.lock().await;
    ratings.register(
        &request.restaurant,
        &request.customer,
        request.score,
        &request.comment,
    )?;

    Ok(Json(RegisterRatingResponse {
        message: "Rating registered successfully!".to_string(),
    }))
}

async fn list_ratings(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<ListRatingsResponse> {
    let ratings = state.ratings.lock().await;
    let response = match ratings.list(&name) {
        Some(history) => ListRatingsResponse::Ratings(history.to_vec()),
        None => ListRatingsResponse::NoRatings {
            message: "No ratings found.".to_string(),
        },
    };

    Json(response)
}

async fn average_rating(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<AverageRatingResponse> {
    let ratings = state.ratings.lock().await;
    Json(AverageRatingResponse {
        average: ratings.average(&name),
    })
}

async fn register_customer(
    State(state): State<AppState>,
    Json(request): Json<RegisterCustomerRequest>,
) -> AppResult<Json<RegisterCustomerResponse>> {
    let mut customers = state.customers.lock().await;
    customers.register(&request.name, request.age, &request.phone, &request.email)?;

    Ok(Json(RegisterCustomerResponse {
        message: "Customer registered successfully!".to_string(),
    }))
}

async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    let customers = state.customers.lock().await;
    Json(customers.list().to_vec())
}

async fn find_customer(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Customer>> {
    let customers = state.customers.lock().await;
    let customer = customers.find(&email)?;
    Ok(Json(customer.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_rating_flow_through_handlers() {
        let state = AppState::new();

        register_rating(
            State(state.clone()),
            Json(RegisterRatingRequest {
                restaurant: "Cantina".to_string(),
                customer: "Ana".to_string(),
                score: 5,
                comment: "great pasta".to_string(),
            }),
        )
        .await
        .unwrap();

        register_rating(
            State(state.clone()),
            Json(RegisterRatingRequest {
                restaurant: "Cantina".to_string(),
                customer: "Bob".to_string(),
                score: 4,
                comment: String::new(),
            }),
        )
        .await
        .unwrap();

        let Json(listed) = list_ratings(State(state.clone()), Path("Cantina".to_string())).await;
        match listed {
            ListRatingsResponse::Ratings(history) => {
                assert_eq!(history.len(), 2);
                assert_eq!(history[0].customer, "Ana");
            }
            ListRatingsResponse::NoRatings { .. } => panic!("expected rating history"),
        }

        let Json(avg) = average_rating(State(state), Path("Cantina".to_string())).await;
        assert_eq!(avg.average, 4.5);
    }

    #[tokio::test]
    async fn test_invalid_score_is_rejected() {
        let state = AppState::new();

        let err = register_rating(
            State(state.clone()),
            Json(RegisterRatingRequest {
                restaurant: "Cantina".to_string(),
                customer: "Ana".to_string(),
                score: 9,
                comment: String::new(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, AppError::InvalidScore(9));

        let Json(avg) = average_rating(State(state), Path("Cantina".to_string())).await;
        assert_eq!(avg.average, 0.0);
    }

    #[tokio::test]
    async fn test_unrated_restaurant_renders_message() {
        let state = AppState::new();

        let Json(listed) = list_ratings(State(state), Path("Cantina".to_string())).await;
        let rendered = serde_json::to_value(&listed).unwrap();
        assert_eq!(
            rendered,
            serde_json::json!({ "message": "No ratings found." })
        );
    }

    #[tokio::test]
    async fn test_restaurant_lifecycle_through_handlers() {
        let state = AppState::new();

        create_restaurant(
            State(state.clone()),
            Json(CreateRestaurantRequest {
                name: "Cantina".to_string(),
                category: "Italian".to_string(),
            }),
        )
        .await;

        add_dish(
            State(state.clone()),
            Path("Cantina".to_string()),
            Json(AddDishRequest {
                dish: "Carbonara".to_string(),
                price: 12.5,
            }),
        )
        .await
        .unwrap();

        let Json(order) = record_order(
            State(state.clone()),
            Path("Cantina".to_string()),
            Json(RecordOrderRequest {
                dish: "Carbonara".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(order.count, 1);

        let Json(toggled) = toggle_restaurant(State(state.clone()), Path("Cantina".to_string()))
            .await
            .unwrap();
        assert!(toggled.active);

        let Json(listed) = list_restaurants(State(state)).await;
        assert_eq!(listed.len(), 1);
        assert!(listed[0].active);
    }

    #[tokio::test]
    async fn test_customer_registration_through_handlers() {
        let state = AppState::new();

        register_customer(
            State(state.clone()),
            Json(RegisterCustomerRequest {
                name: "Ana".to_string(),
                age: 30,
                phone: "555-0100".to_string(),
                email: "ana@example.com".to_string(),
            }),
        )
        .await
        .unwrap();

        let Json(found) = find_customer(State(state.clone()), Path("ana@example.com".to_string()))
            .await
            .unwrap();
        assert_eq!(found.name, "Ana");

        let err = find_customer(State(state), Path("ghost@example.com".to_string()))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::CustomerNotFound("ghost@example.com".to_string())
        );
    }
}
