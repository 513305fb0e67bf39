//! Entity types: humans, droids and starships, plus the polymorphic
//! `Character` and `SearchResult` values built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::episode::Episode;

/// Weak reference to another entity.
///
/// Holds only the id. Resolving it always goes through the entity store and
/// may legitimately find nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntityRef {
    pub id: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A humanoid creature from the Star Wars universe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Human {
    pub id: String,
    pub name: String,
    /// Height in meters.
    pub height: f64,
    /// Mass in kilograms, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    pub friends: Vec<EntityRef>,
    pub appears_in: Vec<Episode>,
    pub starships: Vec<EntityRef>,
}

impl Human {
    /// Create a human with no friends, appearances or starships.
    pub fn new(id: impl Into<String>, name: impl Into<String>, height: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            height,
            mass: None,
            friends: Vec::new(),
            appears_in: Vec::new(),
            starships: Vec::new(),
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_friends<I, R>(mut self, friends: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.friends = friends.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_appearances(mut self, episodes: impl IntoIterator<Item = Episode>) -> Self {
        self.appears_in = episodes.into_iter().collect();
        self
    }

    pub fn with_starships<I, R>(mut self, starships: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.starships = starships.into_iter().map(Into::into).collect();
        self
    }
}

/// An autonomous mechanical character in the Star Wars universe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Droid {
    pub id: String,
    pub name: String,
    pub friends: Vec<EntityRef>,
    pub appears_in: Vec<Episode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_function: Option<String>,
}

impl Droid {
    /// Create a droid with no friends, appearances or primary function.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            friends: Vec::new(),
            appears_in: Vec::new(),
            primary_function: None,
        }
    }

    pub fn with_primary_function(mut self, primary_function: impl Into<String>) -> Self {
        self.primary_function = Some(primary_function.into());
        self
    }

    pub fn with_friends<I, R>(mut self, friends: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.friends = friends.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_appearances(mut self, episodes: impl IntoIterator<Item = Episode>) -> Self {
        self.appears_in = episodes.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Starship {
    pub id: String,
    pub name: String,
    /// Length in meters.
    pub length: f64,
    /// Recorded coordinates, oldest first.
    pub history: Vec<[i32; 2]>,
}

impl Starship {
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: impl IntoIterator<Item = [i32; 2]>) -> Self {
        self.history = history.into_iter().collect();
        self
    }
}

/// Discriminant of a concrete entity variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Human,
    Droid,
    Starship,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Human => f.write_str("Human"),
            EntityKind::Droid => f.write_str("Droid"),
            EntityKind::Starship => f.write_str("Starship"),
        }
    }
}

/// A character in the Star Wars trilogy: either a human or a droid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum Character {
    Human(Human),
    Droid(Droid),
}

impl Character {
    pub fn id(&self) -> &str {
        match self {
            Character::Human(human) => &human.id,
            Character::Droid(droid) => &droid.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Character::Human(human) => &human.name,
            Character::Droid(droid) => &droid.name,
        }
    }

    /// The character's friends, as weak references in their stored order.
    pub fn friends(&self) -> &[EntityRef] {
        match self {
            Character::Human(human) => &human.friends,
            Character::Droid(droid) => &droid.friends,
        }
    }

    pub fn appears_in(&self) -> &[Episode] {
        match self {
            Character::Human(human) => &human.appears_in,
            Character::Droid(droid) => &droid.appears_in,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Character::Human(_) => EntityKind::Human,
            Character::Droid(_) => EntityKind::Droid,
        }
    }
}

impl From<Human> for Character {
    fn from(human: Human) -> Self {
        Character::Human(human)
    }
}

impl From<Droid> for Character {
    fn from(droid: Droid) -> Self {
        Character::Droid(droid)
    }
}

/// A value returned by text search: any of the three entity kinds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum SearchResult {
    Human(Human),
    Droid(Droid),
    Starship(Starship),
}

impl SearchResult {
    pub fn id(&self) -> &str {
        match self {
            SearchResult::Human(human) => &human.id,
            SearchResult::Droid(droid) => &droid.id,
            SearchResult::Starship(starship) => &starship.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SearchResult::Human(human) => &human.name,
            SearchResult::Droid(droid) => &droid.name,
            SearchResult::Starship(starship) => &starship.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            SearchResult::Human(_) => EntityKind::Human,
            SearchResult::Droid(_) => EntityKind::Droid,
            SearchResult::Starship(_) => EntityKind::Starship,
        }
    }
}

impl From<Character> for SearchResult {
    fn from(character: Character) -> Self {
        match character {
            Character::Human(human) => SearchResult::Human(human),
            Character::Droid(droid) => SearchResult::Droid(droid),
        }
    }
}

impl From<Starship> for SearchResult {
    fn from(starship: Starship) -> Self {
        SearchResult::Starship(starship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_accessors_are_uniform() {
        let luke: Character = Human::new("1000", "Luke Skywalker", 1.72)
            .with_friends(["1002", "2001"])
            .into();
        let r2: Character = Droid::new("2001", "R2-D2")
            .with_friends(["1000"])
            .into();

        assert_eq!(luke.id(), "1000");
        assert_eq!(luke.kind(), EntityKind::Human);
        assert_eq!(luke.friends().len(), 2);
        assert_eq!(r2.name(), "R2-D2");
        assert_eq!(r2.kind(), EntityKind::Droid);
        assert_eq!(r2.friends(), &[EntityRef::new("1000")]);
    }

    #[test]
    fn test_character_into_search_result_keeps_variant() {
        let result = SearchResult::from(Character::from(Droid::new("2000", "C-3PO")));
        assert_eq!(result.kind(), EntityKind::Droid);
        assert_eq!(result.id(), "2000");
    }

    #[test]
    fn test_serialization_is_type_tagged() {
        let ship = SearchResult::from(Starship::new("3001", "X-Wing", 12.5).with_history([[6, 4]]));
        let json = serde_json::to_value(&ship).unwrap();

        assert_eq!(json["__typename"], "Starship");
        assert_eq!(json["history"], serde_json::json!([[6, 4]]));
    }
}
