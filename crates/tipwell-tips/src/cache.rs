//! Read-through / write-through cache in front of the tip generator.
//!
//! Lists are partitioned by `(goal label, age)` and details by
//! `(goal label, tip id, age)`. Entries never expire; a different profile
//! simply reads a different partition. Cache writes are best-effort and a
//! value that fails to parse is treated exactly like a miss.

use tipwell_core::models::tip::{Tip, TipDetail};
use tipwell_core::store_keys;
use tipwell_gemini::error::TipError;
use tipwell_storage::KeyValueStore;
use tipwell_storage::state::{load_json, remove_best_effort, save_json_best_effort};
use tracing::{debug, info};

use crate::generator::TipGenerator;

pub struct TipCache<G, S> {
    generator: G,
    store: S,
}

impl<G: TipGenerator, S: KeyValueStore> TipCache<G, S> {
    pub fn new(generator: G, store: S) -> Self {
        Self { generator, store }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tips for a goal and age, from cache when possible.
    ///
    /// `force_refresh` drops the cached list first and always calls the
    /// generator (the "regenerate" action). Errors are returned as classified
    /// by the generator and nothing is cached.
    pub async fn get_tip_list(
        &self,
        goal_label: &str,
        age: u8,
        force_refresh: bool,
    ) -> Result<Vec<Tip>, TipError> {
        let key = store_keys::tip_list(goal_label, age);

        if force_refresh {
            debug!(%key, "forced refresh, dropping cached tip list");
            remove_best_effort(&self.store, &key);
        } else if let Some(tips) = self.cached_tip_list(goal_label, age) {
            debug!(%key, count = tips.len(), "tip list cache hit");
            return Ok(tips);
        }

        info!(%key, "tip list cache miss, generating");
        let tips = self.generator.request_tip_list(goal_label, age).await?;
        save_json_best_effort(&self.store, &key, &tips);
        Ok(tips)
    }

    /// Detail for one tip, from cache when possible.
    pub async fn get_tip_detail(
        &self,
        goal_label: &str,
        tip_id: &str,
        tip_title: &str,
        age: u8,
    ) -> Result<TipDetail, TipError> {
        let key = store_keys::tip_detail(goal_label, tip_id, age);

        if let Some(detail) = load_json::<TipDetail, _>(&self.store, &key)
            .filter(|detail| !detail.description.trim().is_empty())
        {
            debug!(%key, "tip detail cache hit");
            return Ok(detail);
        }

        info!(%key, "tip detail cache miss, generating");
        let detail = self
            .generator
            .request_tip_detail(goal_label, tip_title, age)
            .await?;
        save_json_best_effort(&self.store, &key, &detail);
        Ok(detail)
    }

    /// The cached list for a partition, if one is resident and non-empty.
    /// Never touches the generator.
    pub fn cached_tip_list(&self, goal_label: &str, age: u8) -> Option<Vec<Tip>> {
        let key = store_keys::tip_list(goal_label, age);
        load_json::<Vec<Tip>, _>(&self.store, &key).filter(|tips| !tips.is_empty())
    }

    /// Look a tip up by id in a cached list partition.
    pub fn find_cached_tip(&self, goal_label: &str, age: u8, tip_id: &str) -> Option<Tip> {
        self.cached_tip_list(goal_label, age)?
            .into_iter()
            .find(|tip| tip.id == tip_id)
    }
}
