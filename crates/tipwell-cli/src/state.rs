use std::path::Path;
use std::sync::Arc;

use tipwell_gemini::client::GeminiClient;
use tipwell_storage::file::FileStore;
use tipwell_tips::cache::TipCache;
use tipwell_tips::saved::SavedTipRegistry;

use crate::config::TipwellConfig;

/// Everything a command needs, built once per invocation.
pub struct AppState {
    pub store: Arc<FileStore>,
    pub cache: TipCache<GeminiClient, Arc<FileStore>>,
    pub saved: SavedTipRegistry<Arc<FileStore>>,
}

impl AppState {
    pub fn open(
        config: &TipwellConfig,
        store_path: &Path,
        api_key: Option<String>,
    ) -> eyre::Result<Self> {
        let store = Arc::new(FileStore::open(store_path)?);
        let client = GeminiClient::new(config.gemini_config(api_key));

        Ok(Self {
            cache: TipCache::new(client, store.clone()),
            saved: SavedTipRegistry::init(store.clone()),
            store,
        })
    }
}
