use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// A registered restaurant with its menu and running order tally.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    pub active: bool,
    pub menu: HashMap<String, f64>,
    pub orders: HashMap<String, u32>,
}

impl Restaurant {
    /// New restaurants start inactive with an empty menu.
    pub fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            active: false,
            menu: HashMap::new(),
            orders: HashMap::new(),
        }
    }

    /// Adds a dish to the menu, overwriting the price if it already exists.
    pub fn add_dish(&mut self, dish: &str, price: f64) {
        self.menu.insert(dish.to_string(), price);
    }

    /// Counts one order of a dish, which must already be on the menu.
    ///
    /// # Returns
    /// * `AppResult<u32>` - Total orders for the dish so far, or `DishNotFound`
    pub fn record_order(&mut self, dish: &str) -> AppResult<u32> {
        if !self.menu.contains_key(dish) {
            return Err(AppError::DishNotFound(dish.to_string()));
        }
        let count = self.orders.entry(dish.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }
}

/// In-memory list of restaurants, looked up by name.
///
/// Names are not required to be unique; lookups return the earliest match.
#[derive(Debug, Default)]
pub struct RestaurantRegistry {
    restaurants: Vec<Restaurant>,
}

impl RestaurantRegistry {
    pub fn new() -> Self {
        Self {
            restaurants: Vec::new(),
        }
    }

    pub fn create(&mut self, name: &str, category: &str) {
        self.restaurants.push(Restaurant::new(name, category));
    }

    /// All restaurants in creation order.
    pub fn list(&self) -> &[Restaurant] {
        &self.restaurants
    }

    fn find_mut(&mut self, name: &str) -> AppResult<&mut Restaurant> {
        self.restaurants
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| AppError::RestaurantNotFound(name.to_string()))
    }

    /// Flips the active flag and returns the new state.
    pub fn toggle_active(&mut self, name: &str) -> AppResult<bool> {
        let restaurant = self.find_mut(name)?;
        restaurant.active = !restaurant.active;
        Ok(restaurant.active)
    }

    pub fn add_dish(&mut self, name: &str, dish: &str, price: f64) -> AppResult<()> {
        self.find_mut(name)?.add_dish(dish, price);
        Ok(())
    }

    pub fn record_order(&mut self, name: &str, dish: &str) -> AppResult<u32> {
        self.find_mut(name)?.record_order(dish)
    }
}
