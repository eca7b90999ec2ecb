use tipwell_core::models::profile::Profile;
use tipwell_core::store_keys;
use tipwell_storage::KeyValueStore;
use tipwell_storage::error::StorageError;
use tipwell_storage::state::{load_json, save_json};
use tracing::{debug, info};

/// Persist the profile, replacing any previous one.
pub fn save_profile<S: KeyValueStore + ?Sized>(
    store: &S,
    profile: &Profile,
) -> Result<(), StorageError> {
    save_json(store, store_keys::PROFILE, profile)?;
    info!(age = profile.age, goals = profile.goals.len(), "profile saved");
    Ok(())
}

/// The stored profile, if there is one that still validates.
pub fn load_profile<S: KeyValueStore + ?Sized>(store: &S) -> Option<Profile> {
    let profile: Profile = load_json(store, store_keys::PROFILE)?;
    match profile.validate() {
        Ok(()) => Some(profile),
        Err(e) => {
            debug!(error = %e, "stored profile is invalid, ignoring it");
            None
        }
    }
}

/// Wipe everything: profile, saved tips and every cached partition.
pub fn logout<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StorageError> {
    store.clear()?;
    info!("logged out, store cleared");
    Ok(())
}
