use async_graphql::{Context, Object, Result, ID};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::service;
use super::types::{
    character_value, search_result_value, CharacterValue, DroidObject, EpisodeValue, HumanObject,
    ReviewObject, SearchResultValue, StarshipObject,
};

/// Root of all queries.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The hero of an episode: Luke for EMPIRE, R2-D2 otherwise
    async fn hero(
        &self,
        ctx: &Context<'_>,
        episode: Option<EpisodeValue>,
    ) -> Result<Option<CharacterValue>> {
        let service = service(ctx)?;
        let hero = service.hero(episode.map(Into::into)).await?;
        character_value(service, hero).await.map(Some)
    }

    /// Reviews of an episode, only those posted after `since` when given
    async fn reviews(
        &self,
        ctx: &Context<'_>,
        episode: EpisodeValue,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ReviewObject>> {
        let reviews = service(ctx)?.reviews(episode.into(), since).await;
        Ok(reviews.into_iter().map(ReviewObject).collect())
    }

    /// Every human, droid and starship whose name contains `text`
    async fn search(&self, ctx: &Context<'_>, text: String) -> Result<Vec<SearchResultValue>> {
        let service = service(ctx)?;
        let results = service.search(&text).await;

        let mut values = Vec::with_capacity(results.len());
        for result in results {
            values.push(search_result_value(service, result).await?);
        }
        debug!(text = %text, hits = values.len(), "Resolved search");
        Ok(values)
    }

    async fn character(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CharacterValue>> {
        let service = service(ctx)?;
        match service.character(&id).await {
            Some(character) => character_value(service, character).await.map(Some),
            None => Ok(None),
        }
    }

    async fn droid(&self, ctx: &Context<'_>, id: ID) -> Result<Option<DroidObject>> {
        Ok(service(ctx)?.droid(&id).await.map(DroidObject))
    }

    async fn human(&self, ctx: &Context<'_>, id: ID) -> Result<Option<HumanObject>> {
        Ok(service(ctx)?.human(&id).await.map(HumanObject))
    }

    async fn starship(&self, ctx: &Context<'_>, id: ID) -> Result<Option<StarshipObject>> {
        Ok(service(ctx)?.starship(&id).await.map(StarshipObject))
    }
}
