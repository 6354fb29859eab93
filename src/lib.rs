//! Restaurant Management Service
//!
//! An in-memory administrative service for restaurants, menus, customer
//! records, and ratings, exposed over HTTP.
//!
//! # Architecture
//!
//! The system is built using a modular architecture with the following components:
//!
//! ## Core Components
//!
//! * `api` - RESTful API endpoints using Axum framework
//! * `restaurant` - Restaurant registry, menus, and order tallies
//! * `customer` - Customer records keyed by email
//! * `rating` - Rating ledger and average-score computation
//! * `error` - Error handling and HTTP response mapping
//!
//! ## Design
//!
//! ### API Layer (`api.rs`)
//! - Built with Axum web framework
//! - RESTful endpoints over shared in-memory state
//! - One async mutex per registry; handlers never hold a lock across awaits
//!
//! ### State
//! - Everything lives in process memory and dies with the process
//! - No persistence layer; restarting the service starts from an empty state
//!
//! ### Rating Ledger (`rating.rs`)
//! - Scores are validated to 1..=5 at construction
//! - Averages are rounded to 2 decimal places
//! - An unrated restaurant averages to 0 and lists as a "no ratings found"
//!   message rather than an empty list
//!
//! # Environment Configuration
//!
//! ```bash
//! HOST=127.0.0.1    # Server host
//! PORT=8000         # Server port
//! RUST_LOG=info     # Logging level
//! ```
//!
//! # API Endpoints
//!
//! ## POST /restaurants
//! Creates a restaurant. New restaurants start inactive.
//!
//! ### Request
//! ```json
//! { "name": "string", "category": "string" }
//! ```
//!
//! ## GET /restaurants
//! Lists every restaurant's name, category, and active flag.
//!
//! ## POST /restaurants/:name/toggle
//! Flips the restaurant's active flag and reports the new state.
//!
//! ## POST /restaurants/:name/dishes
//! Adds a dish to the restaurant's menu.
//!
//! ### Request
//! ```json
//! { "dish": "string", "price": number }
//! ```
//!
//! ## POST /restaurants/:name/orders
//! Records one order of a dish that is already on the menu and returns the
//! running count for that dish.
//!
//! ### Request
//! ```json
//! { "dish": "string" }
//! ```
//!
//! ## POST /ratings
//! Registers a rating for a restaurant. Scores outside 1..=5 are rejected
//! with 400 and nothing is stored.
//!
//! ### Request
//! ```json
//! {
//!   "restaurant": "string",
//!   "customer": "string",
//!   "score": 1,
//!   "comment": "string"   // optional, defaults to ""
//! }
//! ```
//!
//! ## GET /restaurants/:name/ratings
//! Returns the rating history in submission order, or a marker object when
//! the restaurant has no ratings:
//!
//! ```json
//! { "message": "No ratings found." }
//! ```
//!
//! ## GET /restaurants/:name/ratings/average
//! Returns the mean score rounded to 2 decimals. A restaurant with no
//! ratings reports 0; since stored scores are at least 1, a real average
//! can never collide with the sentinel.
//!
//! ### Response
//! ```json
//! { "average": 4.67 }
//! ```
//!
//! ## POST /customers
//! Registers a customer. Negative ages are rejected with 400; an email that
//! is already registered is rejected with 409.
//!
//! ### Request
//! ```json
//! {
//!   "name": "string",
//!   "age": 0,
//!   "phone": "string",
//!   "email": "string"
//! }
//! ```
//!
//! ## GET /customers
//! Lists customers in registration order.
//!
//! ## GET /customers/:email
//! Fetches one customer by email, 404 when unknown.

pub mod api;
pub mod customer;
pub mod error;
pub mod rating;
pub mod restaurant;
