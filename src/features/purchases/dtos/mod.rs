pub mod purchase_dto;

pub use purchase_dto::{PurchaseRequestDto, PurchaseResponseDto};
