use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, PartialEq)]
pub enum AppError {
    InvalidScore(i64),
    InvalidAge(i64),
    DuplicateEmail(String),
    CustomerNotFound(String),
    RestaurantNotFound(String),
    DishNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidScore(score) => (
                StatusCode::BAD_REQUEST,
                format!("Score must be between 1 and 5, got {}", score),
            ),
            AppError::InvalidAge(age) => (
                StatusCode::BAD_REQUEST,
                format!("Age cannot be negative, got {}", age),
            ),
            AppError::DuplicateEmail(email) => (
                StatusCode::CONFLICT,
                format!("A customer with email {} is already registered", email),
            ),
            AppError::CustomerNotFound(email) => (
                StatusCode::NOT_FOUND,
                format!("Customer with email {} not found", email),
            ),
            AppError::RestaurantNotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("Restaurant {} not found", name),
            ),
            AppError::DishNotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("Dish {} is not on the menu", name),
            ),
        };

        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
