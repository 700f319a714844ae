//! 测试辅助：内存仓储

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use beerstock_common::{PagedResult, Pagination};
use beerstock_domain_core::Entity;
use beerstock_errors::{AppError, AppResult};

use beer_inventory::domain::entities::Beer;
use beer_inventory::domain::enums::BeerStyle;
use beer_inventory::domain::repositories::BeerRepository;
use beer_inventory::domain::value_objects::{BeerId, BeerName};

/// 内存实现的啤酒仓储
#[derive(Default)]
pub struct InMemoryBeerRepository {
    beers: Mutex<HashMap<BeerId, Beer>>,
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_by_id(&self, id: &BeerId) -> AppResult<Option<Beer>> {
        Ok(self.beers.lock().unwrap().get(id).cloned())
    }

    async fn find_by_name(&self, name: &BeerName) -> AppResult<Option<Beer>> {
        Ok(self
            .beers
            .lock()
            .unwrap()
            .values()
            .find(|b| b.name() == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &BeerName) -> AppResult<bool> {
        Ok(self
            .beers
            .lock()
            .unwrap()
            .values()
            .any(|b| b.name() == name))
    }

    async fn save(&self, beer: &Beer) -> AppResult<()> {
        self.beers.lock().unwrap().insert(*beer.id(), beer.clone());
        Ok(())
    }

    async fn update(&self, beer: &Beer) -> AppResult<()> {
        let mut beers = self.beers.lock().unwrap();
        if !beers.contains_key(beer.id()) {
            return Err(AppError::not_found("啤酒不存在"));
        }
        beers.insert(*beer.id(), beer.clone());
        Ok(())
    }

    async fn delete(&self, id: &BeerId) -> AppResult<()> {
        if self.beers.lock().unwrap().remove(id).is_none() {
            return Err(AppError::not_found("啤酒不存在"));
        }
        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> AppResult<PagedResult<Beer>> {
        let beers = self.beers.lock().unwrap();
        let mut items: Vec<Beer> = beers.values().cloned().collect();
        items.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));

        let total = items.len() as u64;
        let items = items
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.page_size as usize)
            .collect();

        Ok(PagedResult::new(items, total, &pagination))
    }
}

/// 默认测试啤酒
#[allow(dead_code)]
pub fn brahma() -> Beer {
    Beer::new(
        BeerName::new("Brahma").unwrap(),
        "Ambev",
        BeerStyle::Lager,
        50,
        10,
    )
}
