//! GraphQL output and input types.
//!
//! Domain values from `starwars_shared` are wrapped so the schema can attach
//! resolvers to them. Polymorphic values are checked against the store by the
//! type resolver before they are handed to the executor.

use async_graphql::{Context, Enum, InputObject, Interface, Object, Result, Union, ID};
use chrono::{DateTime, Utc};
use starwars_repository::StarWarsService;
use starwars_shared::{
    Character, Droid, Episode, FriendsConnection, Human, LengthUnit, PageInfo, Review,
    ReviewInput, SearchResult, Starship,
};

use super::service;

/// A film of the original trilogy.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "Episode")]
pub enum EpisodeValue {
    /// Star Wars Episode IV: A New Hope, released in 1977.
    #[graphql(name = "NEWHOPE")]
    NewHope,
    /// Star Wars Episode V: The Empire Strikes Back, released in 1980.
    Empire,
    /// Star Wars Episode VI: Return of the Jedi, released in 1983.
    Jedi,
}

impl From<EpisodeValue> for Episode {
    fn from(value: EpisodeValue) -> Self {
        match value {
            EpisodeValue::NewHope => Episode::NewHope,
            EpisodeValue::Empire => Episode::Empire,
            EpisodeValue::Jedi => Episode::Jedi,
        }
    }
}

impl From<Episode> for EpisodeValue {
    fn from(episode: Episode) -> Self {
        match episode {
            Episode::NewHope => EpisodeValue::NewHope,
            Episode::Empire => EpisodeValue::Empire,
            Episode::Jedi => EpisodeValue::Jedi,
        }
    }
}

/// Units of height and length.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "LengthUnit")]
pub enum LengthUnitValue {
    /// The standard unit around the world.
    Meter,
    /// Primarily used in the United States.
    Foot,
}

impl From<LengthUnitValue> for LengthUnit {
    fn from(value: LengthUnitValue) -> Self {
        match value {
            LengthUnitValue::Meter => LengthUnit::Meter,
            LengthUnitValue::Foot => LengthUnit::Foot,
        }
    }
}

/// A character from the Star Wars universe.
#[derive(Interface)]
#[graphql(
    name = "Character",
    field(name = "id", ty = "ID", desc = "The ID of the character"),
    field(name = "name", ty = "String", desc = "The name of the character"),
    field(
        name = "friends",
        ty = "Vec<Option<CharacterValue>>",
        desc = "The friends of the character, or an empty list if they have none"
    ),
    field(
        name = "friends_connection",
        ty = "FriendsConnectionObject",
        desc = "The friends of the character exposed as a connection with edges",
        arg(name = "first", ty = "Option<i32>"),
        arg(name = "after", ty = "Option<ID>")
    ),
    field(
        name = "appears_in",
        ty = "Vec<EpisodeValue>",
        desc = "The movies this character appears in"
    )
)]
pub enum CharacterValue {
    Human(HumanObject),
    Droid(DroidObject),
}

impl From<Character> for CharacterValue {
    fn from(character: Character) -> Self {
        match character {
            Character::Human(human) => CharacterValue::Human(HumanObject(human)),
            Character::Droid(droid) => CharacterValue::Droid(DroidObject(droid)),
        }
    }
}

/// Confirm a character's variant against the store and wrap it.
pub(crate) async fn character_value(
    service: &StarWarsService,
    character: Character,
) -> Result<CharacterValue> {
    service.resolve_character(&character).await?;
    Ok(character.into())
}

async fn optional_character_values(
    service: &StarWarsService,
    characters: Vec<Option<Character>>,
) -> Result<Vec<Option<CharacterValue>>> {
    let mut values = Vec::with_capacity(characters.len());
    for character in characters {
        values.push(match character {
            Some(character) => Some(character_value(service, character).await?),
            None => None,
        });
    }
    Ok(values)
}

async fn friends_of(ctx: &Context<'_>, character: Character) -> Result<Vec<Option<CharacterValue>>> {
    let service = service(ctx)?;
    let friends = service.friends(&character).await;
    optional_character_values(service, friends).await
}

async fn friends_connection_of(
    ctx: &Context<'_>,
    character: Character,
    first: Option<i32>,
    after: Option<ID>,
) -> Result<FriendsConnectionObject> {
    let service = service(ctx)?;
    // Zero and negative page sizes mean "no limit".
    let first = first.and_then(|n| usize::try_from(n).ok());
    let connection = service
        .friends_connection(&character, first, after.as_ref().map(|id| id.as_str()))
        .await?;
    FriendsConnectionObject::resolve(service, connection).await
}

/// Any result of the `search` query.
#[derive(Union)]
#[graphql(name = "SearchResult")]
pub enum SearchResultValue {
    Human(HumanObject),
    Droid(DroidObject),
    Starship(StarshipObject),
}

/// Confirm a search result's variant against the store and wrap it.
pub(crate) async fn search_result_value(
    service: &StarWarsService,
    result: SearchResult,
) -> Result<SearchResultValue> {
    service.resolve_search_result(&result).await?;
    Ok(match result {
        SearchResult::Human(human) => SearchResultValue::Human(HumanObject(human)),
        SearchResult::Droid(droid) => SearchResultValue::Droid(DroidObject(droid)),
        SearchResult::Starship(starship) => SearchResultValue::Starship(StarshipObject(starship)),
    })
}

/// A humanoid creature from the Star Wars universe.
#[derive(Clone)]
pub struct HumanObject(pub Human);

#[Object(name = "Human")]
impl HumanObject {
    /// The ID of the human
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    /// What this human calls themselves
    async fn name(&self) -> String {
        self.0.name.clone()
    }

    /// Height in the preferred unit, default is meters
    async fn height(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "LengthUnitValue::Meter")] unit: LengthUnitValue,
    ) -> Result<f64> {
        let unit = LengthUnit::from(unit);
        service(ctx)?.height(&self.0, Some(unit.as_str())).map_err(Into::into)
    }

    /// Mass in kilograms, or null if unknown
    async fn mass(&self) -> Option<f64> {
        self.0.mass
    }

    async fn friends(&self, ctx: &Context<'_>) -> Result<Vec<Option<CharacterValue>>> {
        friends_of(ctx, Character::Human(self.0.clone())).await
    }

    async fn friends_connection(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<ID>,
    ) -> Result<FriendsConnectionObject> {
        friends_connection_of(ctx, Character::Human(self.0.clone()), first, after).await
    }

    async fn appears_in(&self) -> Vec<EpisodeValue> {
        self.0.appears_in.iter().copied().map(Into::into).collect()
    }

    /// A list of starships this person has piloted, or an empty list if none
    async fn starships(&self, ctx: &Context<'_>) -> Result<Vec<StarshipObject>> {
        let starships = service(ctx)?.starships(&self.0).await;
        Ok(starships.into_iter().map(StarshipObject).collect())
    }
}

/// An autonomous mechanical character in the Star Wars universe.
#[derive(Clone)]
pub struct DroidObject(pub Droid);

#[Object(name = "Droid")]
impl DroidObject {
    /// The ID of the droid
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    /// What others call this droid
    async fn name(&self) -> String {
        self.0.name.clone()
    }

    async fn friends(&self, ctx: &Context<'_>) -> Result<Vec<Option<CharacterValue>>> {
        friends_of(ctx, Character::Droid(self.0.clone())).await
    }

    async fn friends_connection(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<ID>,
    ) -> Result<FriendsConnectionObject> {
        friends_connection_of(ctx, Character::Droid(self.0.clone()), first, after).await
    }

    async fn appears_in(&self) -> Vec<EpisodeValue> {
        self.0.appears_in.iter().copied().map(Into::into).collect()
    }

    /// This droid's primary function
    async fn primary_function(&self) -> Option<&str> {
        self.0.primary_function.as_deref()
    }
}

#[derive(Clone)]
pub struct StarshipObject(pub Starship);

#[Object(name = "Starship")]
impl StarshipObject {
    /// The ID of the starship
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    /// The name of the starship
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Length of the starship, along the longest axis
    async fn length(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "LengthUnitValue::Meter")] unit: LengthUnitValue,
    ) -> Result<f64> {
        let unit = LengthUnit::from(unit);
        service(ctx)?.length(&self.0, Some(unit.as_str())).map_err(Into::into)
    }

    async fn history(&self) -> Vec<Vec<i32>> {
        self.0.history.iter().map(|point| point.to_vec()).collect()
    }
}

/// A connection object for a character's friends.
pub struct FriendsConnectionObject {
    total_count: usize,
    edges: Vec<FriendsEdgeObject>,
    friends: Vec<Option<CharacterValue>>,
    page_info: PageInfo,
}

impl FriendsConnectionObject {
    async fn resolve(service: &StarWarsService, connection: FriendsConnection) -> Result<Self> {
        let FriendsConnection {
            total_count,
            edges,
            friends,
            page_info,
        } = connection;

        let mut edge_values = Vec::with_capacity(edges.len());
        for edge in edges {
            let node = match edge.node {
                Some(character) => Some(character_value(service, character).await?),
                None => None,
            };
            edge_values.push(FriendsEdgeObject {
                cursor: edge.cursor,
                node,
            });
        }

        Ok(Self {
            total_count,
            edges: edge_values,
            friends: optional_character_values(service, friends).await?,
            page_info,
        })
    }
}

#[Object(name = "FriendsConnection")]
impl FriendsConnectionObject {
    /// The total number of friends
    async fn total_count(&self) -> usize {
        self.total_count
    }

    /// The edges for each of the character's friends
    async fn edges(&self) -> &Vec<FriendsEdgeObject> {
        &self.edges
    }

    /// A list of the friends, as a convenience when edges are not needed
    async fn friends(&self) -> &Vec<Option<CharacterValue>> {
        &self.friends
    }

    /// Information for paginating this connection
    async fn page_info(&self) -> PageInfoObject {
        PageInfoObject(self.page_info.clone())
    }
}

/// An edge object for a character's friends.
pub struct FriendsEdgeObject {
    cursor: String,
    node: Option<CharacterValue>,
}

#[Object(name = "FriendsEdge")]
impl FriendsEdgeObject {
    /// A cursor used for pagination
    async fn cursor(&self) -> ID {
        ID(self.cursor.clone())
    }

    /// The character represented by this friendship edge
    async fn node(&self) -> Option<&CharacterValue> {
        self.node.as_ref()
    }
}

/// Information for paginating this connection.
pub struct PageInfoObject(PageInfo);

#[Object(name = "PageInfo")]
impl PageInfoObject {
    async fn start_cursor(&self) -> Option<ID> {
        self.0.start_cursor.clone().map(ID)
    }

    async fn end_cursor(&self) -> Option<ID> {
        self.0.end_cursor.clone().map(ID)
    }

    async fn has_next_page(&self) -> bool {
        self.0.has_next_page
    }
}

/// Represents a review for a movie.
pub struct ReviewObject(pub Review);

#[Object(name = "Review")]
impl ReviewObject {
    /// The number of stars this review gave, 1-5
    async fn stars(&self) -> i32 {
        self.0.stars
    }

    /// Comment about the movie
    async fn commentary(&self) -> Option<&str> {
        self.0.commentary.as_deref()
    }

    /// When the review was posted
    async fn time(&self) -> DateTime<Utc> {
        self.0.time
    }
}

/// The input object sent when someone is creating a new review.
#[derive(InputObject)]
#[graphql(name = "ReviewInput")]
pub struct ReviewInputObject {
    /// 1-5 stars
    pub stars: i32,
    /// Comment about the movie, optional
    pub commentary: Option<String>,
    /// When the review was posted
    pub time: Option<DateTime<Utc>>,
}

impl From<ReviewInputObject> for ReviewInput {
    fn from(input: ReviewInputObject) -> Self {
        ReviewInput {
            stars: input.stars,
            commentary: input.commentary,
            time: input.time,
        }
    }
}
