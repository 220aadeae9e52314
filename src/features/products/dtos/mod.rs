pub mod product_dto;

pub use product_dto::{ProductRequestDto, ProductResponseDto};
