pub mod product_service;

pub use product_service::{ProductRepository, ProductService};
