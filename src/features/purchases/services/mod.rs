pub mod purchase_service;

pub use purchase_service::{PurchaseRepository, PurchaseService};
