//! Text search across humans, droids and starships.

use starwars_shared::SearchResult;
use tracing::debug;

use crate::interfaces::EntityStore;

/// Find every entity whose name contains `text`.
///
/// Matching is an exact, case-sensitive substring test with no normalization.
/// Results are grouped as contiguous blocks of humans, then droids, then
/// starships; within a block the store's iteration order is kept. There is no
/// limit on the number of results.
pub async fn search(store: &dyn EntityStore, text: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();

    results.extend(
        store
            .humans()
            .await
            .into_iter()
            .filter(|human| human.name.contains(text))
            .map(SearchResult::Human),
    );
    results.extend(
        store
            .droids()
            .await
            .into_iter()
            .filter(|droid| droid.name.contains(text))
            .map(SearchResult::Droid),
    );
    results.extend(
        store
            .starships()
            .await
            .into_iter()
            .filter(|starship| starship.name.contains(text))
            .map(SearchResult::Starship),
    );

    debug!(text = %text, hits = results.len(), "Search completed");
    results
}
