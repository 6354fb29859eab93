use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
}

impl Customer {
    /// Builds a customer record, rejecting negative ages.
    pub fn new(name: &str, age: i64, phone: &str, email: &str) -> AppResult<Self> {
        if age < 0 {
            return Err(AppError::InvalidAge(age));
        }
        Ok(Self {
            name: name.to_string(),
            age: age as u32,
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }
}

/// In-memory customer records, keyed by email.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }

    /// Registers a customer. The email must not be taken already; on any
    /// failure the registry is unchanged.
    pub fn register(&mut self, name: &str, age: i64, phone: &str, email: &str) -> AppResult<()> {
        if self.customers.iter().any(|c| c.email == email) {
            return Err(AppError::DuplicateEmail(email.to_string()));
        }
        let customer = Customer::new(name, age, phone, email)?;
        self.customers.push(customer);
        Ok(())
    }

    /// All customers in registration order.
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find(&self, email: &str) -> AppResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.email == email)
            .ok_or_else(|| AppError::CustomerNotFound(email.to_string()))
    }
}
