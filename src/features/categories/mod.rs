//! Product categories of the shop.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/categories` | List all categories |
//! | GET | `/api/v1/categories/{id}` | Get category by id |
//! | POST | `/api/v1/categories` | Create category |
//! | PUT | `/api/v1/categories/{id}` | Replace category |
//! | DELETE | `/api/v1/categories/{id}` | Delete category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{CategoryRepository, CategoryService};
