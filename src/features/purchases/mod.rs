//! Customer purchases.
//!
//! A purchase is recorded as-is: it does not touch product stock and its
//! total price is stored as supplied.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/purchases` | List all purchases |
//! | GET | `/api/v1/purchases/{id}` | Get purchase by id |
//! | POST | `/api/v1/purchases` | Record purchase |
//! | PUT | `/api/v1/purchases/{id}` | Replace purchase |
//! | DELETE | `/api/v1/purchases/{id}` | Delete purchase |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PurchaseRepository, PurchaseService};
