use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// A single customer's review of a restaurant.
///
/// Scores are bounded to 1..=5; construction is the only place the bound is
/// checked, so a `Rating` that exists is always in range.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Rating {
    pub customer: String,
    pub score: u8,
    pub comment: String,
}

impl Rating {
    /// Builds a rating, rejecting out-of-range scores.
    ///
    /// # Arguments
    /// * `customer` - Name of the reviewer
    /// * `score` - Quality score, must be within 1..=5
    /// * `comment` - Free-form comment, may be empty
    ///
    /// # Returns
    /// * `AppResult<Self>` - The rating, or `InvalidScore`
    pub fn new(customer: &str, score: i64, comment: &str) -> AppResult<Self> {
        if !(1..=5).contains(&score) {
            return Err(AppError::InvalidScore(score));
        }
        Ok(Self {
            customer: customer.to_string(),
            score: score as u8,
            comment: comment.to_string(),
        })
    }
}

/// In-memory store of ratings, keyed by restaurant name.
///
/// Ratings are append-only for the lifetime of the process; a restaurant
/// that was never rated is the same as one with an empty history.
#[derive(Debug, Default)]
pub struct RatingLedger {
    ratings: HashMap<String, Vec<Rating>>,
}

impl RatingLedger {
    pub fn new() -> Self {
        Self {
            ratings: HashMap::new(),
        }
    }

    /// Validates and records a rating for a restaurant.
    ///
    /// The restaurant's history is created on first rating. On an invalid
    /// score nothing is stored, not even the empty history.
    ///
    /// # Returns
    /// * `AppResult<()>` - Ok once appended, or `InvalidScore`
    pub fn register(
        &mut self,
        restaurant: &str,
        customer: &str,
        score: i64,
        comment: &str,
    ) -> AppResult<()> {
        let rating = Rating::new(customer, score, comment)?;
        self.ratings
            .entry(restaurant.to_string())
            .or_default()
            .push(rating);
        Ok(())
    }

    /// Returns the restaurant's ratings in submission order.
    ///
    /// `None` means "no ratings found"; callers branch on it to render a
    /// message instead of an empty list.
    pub fn list(&self, restaurant: &str) -> Option<&[Rating]> {
        match self.ratings.get(restaurant) {
            Some(ratings) if !ratings.is_empty() => Some(ratings),
            _ => None,
        }
    }

    /// Mean score for the restaurant, rounded to 2 decimal places.
    ///
    /// Returns 0 when the restaurant has no ratings. Callers treat 0 as
    /// "no data" by convention; a real mean can never be 0 since every
    /// stored score is at least 1.
    pub fn average(&self, restaurant: &str) -> f64 {
        match self.list(restaurant) {
            Some(ratings) => {
                let total: u32 = ratings.iter().map(|r| u32::from(r.score)).sum();
                let mean = f64::from(total) / ratings.len() as f64;
                (mean * 100.0).round() / 100.0
            }
            None => 0.0,
        }
    }
}
