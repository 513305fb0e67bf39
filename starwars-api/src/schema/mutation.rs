use async_graphql::{Context, Object, Result};

use super::service;
use super::types::{EpisodeValue, ReviewInputObject, ReviewObject};

/// Root of all mutations.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Store a review for an episode and return it as stored.
    ///
    /// The response is sent once the write completes. A client that
    /// disconnects first abandons the write.
    async fn create_review(
        &self,
        ctx: &Context<'_>,
        episode: EpisodeValue,
        review: ReviewInputObject,
    ) -> Result<ReviewObject> {
        let review = service(ctx)?
            .create_review(episode.into(), review.into())
            .await?;
        Ok(ReviewObject(review))
    }
}
