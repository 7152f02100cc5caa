use crate::commands::{CmdMessage, CmdResult};
use crate::geo::{self, LocationProvider, Nearby};
use crate::store::{StorageBackend, StoreRepository};

/// Stores nearest first when `provider` yields a location. Without one the
/// stores come back in saved order with a warning carrying the reason.
pub fn run<B: StorageBackend>(
    repo: &StoreRepository<B>,
    provider: &dyn LocationProvider,
) -> CmdResult {
    let mut result = CmdResult::default();
    match geo::nearby(repo.stores(), provider) {
        Nearby::Ranked { origin, stores } => {
            result.add_message(CmdMessage::info(format!("Sorted by distance from {origin}")));
            result.ranked = stores;
        }
        Nearby::Unranked { stores, reason } => {
            result.add_message(CmdMessage::warning(format!(
                "Unable to get your location: {reason}"
            )));
            result.stores = stores;
        }
    }
    result
}
