//! Page fetching with offline fallback
//!
//! Online, pages come from the live source and are snapshotted into the offline
//! cache. Offline, only the snapshot is read; a missing snapshot is an empty page.

use std::sync::Arc;

use crate::{
    domain::{
        product::{Product, ProductsResponse},
        query::FetchRequest,
    },
    infrastructure::{
        cache::OfflineCache,
        product_source::{FetchError, ProductSource},
    },
};

#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn ProductSource>,
    cache: Arc<dyn OfflineCache>,
}

impl Catalog {
    pub fn new(source: Arc<dyn ProductSource>, cache: Arc<dyn OfflineCache>) -> Self {
        Self { source, cache }
    }

    pub async fn fetch_page(
        &self,
        request: &FetchRequest,
        online: bool,
    ) -> Result<Vec<Product>, FetchError> {
        let key = request.cache_key();
        if online {
            let products = self.source.fetch_products(request).await?;
            self.cache.save(&key, serde_json::to_value(&products)?)?;
            Ok(products)
        } else {
            match self.cache.load(&key)? {
                Some(value) => {
                    let products =
                        serde_json::from_value::<ProductsResponse>(value)?.into_products();
                    log::debug!("Served {key} from offline cache ({} products)", products.len());
                    Ok(products)
                }
                None => {
                    log::debug!("No offline snapshot for {key}");
                    Ok(vec![])
                }
            }
        }
    }
}
