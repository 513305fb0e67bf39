//! Polymorphic resolution of `Character` and `SearchResult` values.
//!
//! The concrete variant of a value is read from its tag. Before a value is
//! handed to serialization its id is confirmed against the matching store
//! collection, so a value the store does not know about is reported instead
//! of being rendered.
//!
//! Weak references carry no tag at all and are resolved by id, trying the
//! collections in a fixed order: humans, then droids (then starships for
//! search results). The first match wins.

use starwars_shared::{Character, EntityKind, SearchResult};
use tracing::warn;

use crate::errors::ResolveError;
use crate::interfaces::EntityStore;

/// Determine the concrete variant of a character.
///
/// # Returns
///
/// * `Ok(EntityKind)` - `Human` or `Droid`
/// * `Err(ResolveError::UnresolvedType)` - If the store holds no entity of that
///   variant with the character's id
pub async fn resolve_character(
    store: &dyn EntityStore,
    character: &Character,
) -> Result<EntityKind, ResolveError> {
    confirm(store, character.kind(), character.id()).await
}

/// Determine the concrete variant of a search result.
///
/// # Returns
///
/// * `Ok(EntityKind)` - `Human`, `Droid` or `Starship`
/// * `Err(ResolveError::UnresolvedType)` - If the store holds no entity of that
///   variant with the result's id
pub async fn resolve_search_result(
    store: &dyn EntityStore,
    result: &SearchResult,
) -> Result<EntityKind, ResolveError> {
    confirm(store, result.kind(), result.id()).await
}

async fn confirm(
    store: &dyn EntityStore,
    kind: EntityKind,
    id: &str,
) -> Result<EntityKind, ResolveError> {
    if store.contains(kind, id).await {
        Ok(kind)
    } else {
        Err(ResolveError::unresolved_type(format!(
            "no {} with id {}",
            kind, id
        )))
    }
}

/// Resolve an untagged character reference: humans first, then droids.
///
/// A dangling reference is not an error; it resolves to `None`.
pub async fn character_by_id(store: &dyn EntityStore, id: &str) -> Option<Character> {
    if let Some(human) = store.human(id).await {
        return Some(Character::Human(human));
    }
    if let Some(droid) = store.droid(id).await {
        return Some(Character::Droid(droid));
    }
    warn!(id = %id, "Character reference does not resolve");
    None
}

/// Resolve an untagged id into a search result: humans, droids, then starships.
///
/// # Returns
///
/// * `Ok(SearchResult)` - The first entity found with that id
/// * `Err(ResolveError::UnresolvedType)` - If no collection holds the id
pub async fn search_result_by_id(
    store: &dyn EntityStore,
    id: &str,
) -> Result<SearchResult, ResolveError> {
    if let Some(human) = store.human(id).await {
        return Ok(SearchResult::Human(human));
    }
    if let Some(droid) = store.droid(id).await {
        return Ok(SearchResult::Droid(droid));
    }
    if let Some(starship) = store.starship(id).await {
        return Ok(SearchResult::Starship(starship));
    }
    Err(ResolveError::unresolved_type(format!(
        "id {} is not a Human, Droid or Starship",
        id
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use starwars_shared::{Droid, Human, Starship};

    async fn store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert_human(Human::new("1000", "Luke Skywalker", 1.72)).await;
        store.insert_droid(Droid::new("2001", "R2-D2")).await;
        store.insert_starship(Starship::new("3001", "X-Wing", 12.5)).await;
        store
    }

    #[tokio::test]
    async fn test_resolve_character_by_tag() {
        let store = store().await;

        let luke = character_by_id(&store, "1000").await.unwrap();
        assert_eq!(resolve_character(&store, &luke).await, Ok(EntityKind::Human));

        let r2 = character_by_id(&store, "2001").await.unwrap();
        assert_eq!(resolve_character(&store, &r2).await, Ok(EntityKind::Droid));
    }

    #[tokio::test]
    async fn test_resolve_character_unknown_to_store() {
        let store = store().await;
        let stranger = Character::Droid(Droid::new("9999", "IG-88"));

        let result = resolve_character(&store, &stranger).await;
        assert!(matches!(result, Err(ResolveError::UnresolvedType(_))));
    }

    #[tokio::test]
    async fn test_resolve_character_tag_must_match_collection() {
        let store = store().await;
        // Right id, wrong variant.
        let impostor = Character::Droid(Droid::new("1000", "Luke Skywalker"));

        let result = resolve_character(&store, &impostor).await;
        assert!(matches!(result, Err(ResolveError::UnresolvedType(_))));
    }

    #[tokio::test]
    async fn test_character_by_id_prefers_humans() {
        let store = store().await;
        store.insert_droid(Droid::new("1000", "Shadow Luke")).await;

        let found = character_by_id(&store, "1000").await.unwrap();
        assert_eq!(found.kind(), EntityKind::Human);
    }

    #[tokio::test]
    async fn test_character_by_id_dangling_reference() {
        let store = store().await;
        assert!(character_by_id(&store, "3001").await.is_none());
        assert!(character_by_id(&store, "nope").await.is_none());
    }

    #[tokio::test]
    async fn test_search_result_by_id_order_and_miss() {
        let store = store().await;

        assert_eq!(
            search_result_by_id(&store, "3001").await.unwrap().kind(),
            EntityKind::Starship
        );
        assert_eq!(
            search_result_by_id(&store, "2001").await.unwrap().kind(),
            EntityKind::Droid
        );
        assert!(matches!(
            search_result_by_id(&store, "4000").await,
            Err(ResolveError::UnresolvedType(_))
        ));

        let ship = search_result_by_id(&store, "3001").await.unwrap();
        assert_eq!(
            resolve_search_result(&store, &ship).await,
            Ok(EntityKind::Starship)
        );
    }
}
