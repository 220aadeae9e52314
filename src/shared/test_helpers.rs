//! In-memory repositories for handler and router tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::services::category_service::CATEGORY_NOT_FOUND;
use crate::features::categories::CategoryRepository;
use crate::features::products::dtos::{ProductRequestDto, ProductResponseDto};
use crate::features::products::services::product_service::{
    CATEGORY_DOES_NOT_EXIST, PRODUCT_NOT_FOUND,
};
use crate::features::products::services::ProductRepository;
use crate::features::purchases::dtos::{PurchaseRequestDto, PurchaseResponseDto};
use crate::features::purchases::services::purchase_service::PURCHASE_NOT_FOUND;
use crate::features::purchases::services::PurchaseRepository;

/// Rows kept in insertion order with ids starting at 1
#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategories {
    table: Mutex<Table<CategoryResponseDto>>,
}

impl InMemoryCategories {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a category directly and return its id
    pub async fn seed(&self, name: &str) -> i64 {
        let dto = CategoryRequestDto {
            name: name.to_string(),
            store_id: None,
        };
        match self.create(dto).await {
            Ok(category) => category.id,
            Err(e) => panic!("seeding category failed: {}", e),
        }
    }

    pub async fn contains(&self, id: i64) -> bool {
        self.table.lock().await.rows.iter().any(|c| c.id == id)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        Ok(self.table.lock().await.rows.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto> {
        self.table
            .lock()
            .await
            .rows
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))
    }

    async fn create(&self, dto: CategoryRequestDto) -> Result<CategoryResponseDto> {
        let mut table = self.table.lock().await;
        let now = Utc::now();
        let category = CategoryResponseDto {
            id: table.allocate_id(),
            name: dto.name,
            store_id: dto.store_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: i64, dto: CategoryRequestDto) -> Result<CategoryResponseDto> {
        let mut table = self.table.lock().await;
        let category = table
            .rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))?;
        category.name = dto.name;
        category.store_id = dto.store_id;
        category.updated_at = Utc::now();
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        if table.rows.len() == before {
            return Err(AppError::NotFound(CATEGORY_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

/// Products checked against a shared category store
pub struct InMemoryProducts {
    categories: Arc<InMemoryCategories>,
    table: Mutex<Table<ProductResponseDto>>,
}

impl InMemoryProducts {
    pub fn new(categories: Arc<InMemoryCategories>) -> Self {
        Self {
            categories,
            table: Mutex::new(Table::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    async fn ensure_category_exists(&self, category_id: i64) -> Result<()> {
        if self.categories.contains(category_id).await {
            Ok(())
        } else {
            Err(AppError::Validation(CATEGORY_DOES_NOT_EXIST.to_string()))
        }
    }
}

fn product_from_dto(id: i64, dto: ProductRequestDto) -> ProductResponseDto {
    let now = Utc::now();
    ProductResponseDto {
        id,
        name: dto.name,
        description: dto.description,
        price: dto.price,
        image_url: dto.image_url,
        category_id: dto.category_id,
        manufacturer_id: dto.manufacturer_id,
        stock: dto.stock,
        vape_type: dto.vape_type,
        power: dto.power,
        battery_capacity: dto.battery_capacity,
        tank_capacity: dto.tank_capacity,
        coil_resistance: dto.coil_resistance,
        material: dto.material,
        color: dto.color,
        is_new: dto.is_new,
        is_featured: dto.is_featured,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        Ok(self.table.lock().await.rows.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<ProductResponseDto> {
        self.table
            .lock()
            .await
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    async fn create(&self, dto: ProductRequestDto) -> Result<ProductResponseDto> {
        self.ensure_category_exists(dto.category_id).await?;

        let mut table = self.table.lock().await;
        let product = product_from_dto(table.allocate_id(), dto);
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, dto: ProductRequestDto) -> Result<ProductResponseDto> {
        let created_at = self.get_by_id(id).await?.created_at;
        self.ensure_category_exists(dto.category_id).await?;

        let mut table = self.table.lock().await;
        let slot = table
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;
        let mut product = product_from_dto(id, dto);
        product.created_at = created_at;
        *slot = product.clone();
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        if table.rows.len() == before {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPurchases {
    table: Mutex<Table<PurchaseResponseDto>>,
}

impl InMemoryPurchases {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn purchase_from_dto(id: i64, dto: PurchaseRequestDto) -> PurchaseResponseDto {
    let now = Utc::now();
    let status = dto.status_or_default().to_string();
    PurchaseResponseDto {
        id,
        customer_id: dto.customer_id,
        store_id: dto.store_id,
        product_id: dto.product_id,
        quantity: dto.quantity,
        total_price: dto.total_price,
        delivery_id: dto.delivery_id,
        status,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchases {
    async fn list(&self) -> Result<Vec<PurchaseResponseDto>> {
        Ok(self.table.lock().await.rows.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<PurchaseResponseDto> {
        self.table
            .lock()
            .await
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(PURCHASE_NOT_FOUND.to_string()))
    }

    async fn create(&self, dto: PurchaseRequestDto) -> Result<PurchaseResponseDto> {
        let mut table = self.table.lock().await;
        let purchase = purchase_from_dto(table.allocate_id(), dto);
        table.rows.push(purchase.clone());
        Ok(purchase)
    }

    async fn update(&self, id: i64, dto: PurchaseRequestDto) -> Result<PurchaseResponseDto> {
        let mut table = self.table.lock().await;
        let slot = table
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(PURCHASE_NOT_FOUND.to_string()))?;
        let mut purchase = purchase_from_dto(id, dto);
        purchase.created_at = slot.created_at;
        *slot = purchase.clone();
        Ok(purchase)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        if table.rows.len() == before {
            return Err(AppError::NotFound(PURCHASE_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
