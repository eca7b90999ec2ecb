//! The saved board: saved tips joined back to their cached tip records.

use tipwell_core::models::saved::SavedTip;
use tipwell_core::models::tip::Tip;
use tipwell_storage::KeyValueStore;

use crate::cache::TipCache;
use crate::generator::TipGenerator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    pub saved: SavedTip,
    pub tip: Tip,
}

/// Resolve each saved tip against the list partition it was saved from.
///
/// A saved tip whose partition is no longer cache-resident (cleared or
/// regenerated without it) is left off the board. It stays in the saved set.
pub fn resolve_saved_board<G, S>(cache: &TipCache<G, S>, saved: &[SavedTip]) -> Vec<BoardEntry>
where
    G: TipGenerator,
    S: KeyValueStore,
{
    saved
        .iter()
        .filter_map(|s| {
            let tip = cache.find_cached_tip(&s.goal_label, s.age, &s.tip_id);
            if tip.is_none() {
                tracing::debug!(tip_id = %s.tip_id, "saved tip not cache-resident, hiding it");
            }
            tip.map(|tip| BoardEntry {
                saved: s.clone(),
                tip,
            })
        })
        .collect()
}
