//! Shop products.
//!
//! Every product belongs to a category; the reference is checked inside the
//! same transaction as the write and enforced again by the foreign key.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/products` | List all products |
//! | GET | `/api/v1/products/{id}` | Get product by id |
//! | POST | `/api/v1/products` | Create product |
//! | PUT | `/api/v1/products/{id}` | Replace product |
//! | DELETE | `/api/v1/products/{id}` | Delete product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ProductRepository, ProductService};
