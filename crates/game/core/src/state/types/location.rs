//! Locations, interactable fixtures and the world graph.

use std::collections::BTreeMap;

use super::character::Character;
use super::item::{Item, name_matches};
use super::quest::Quest;

/// Mutable state of an interactable fixture.
///
/// A fixture is a container when `container` is present and a switch when
/// `toggled` is present. Both may be absent for purely decorative objects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractableState {
    pub locked: bool,
    pub opened: bool,
    pub container: Option<Vec<Item>>,
    pub toggled: Option<bool>,
}

/// A door, chest, lever or any other fixture that is not an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interactable {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: InteractableState,
}

impl Interactable {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            state: InteractableState::default(),
        }
    }

    pub fn locked(mut self) -> Self {
        self.state.locked = true;
        self
    }

    pub fn with_contents(mut self, items: Vec<Item>) -> Self {
        self.state.container = Some(items);
        self
    }

    pub fn with_toggle(mut self, on: bool) -> Self {
        self.state.toggled = Some(on);
        self
    }
}

/// One node of the world graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<Character>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interactables: Vec<Interactable>,
    /// Exit description → destination location id. Several exits may lead to
    /// the same destination.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: BTreeMap<String, String>,
    /// Quest definitions offered here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quests: Vec<Quest>,
}

/// What a name lookup in a location resolved to.
///
/// Lookups prefer characters, then loose items, then fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalEntity {
    Character(usize),
    Item(usize),
    Interactable(usize),
}

impl LocalEntity {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Character(_) => "character",
            Self::Item(_) => "item",
            Self::Interactable(_) => "interactable",
        }
    }
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            characters: Vec::new(),
            items: Vec::new(),
            interactables: Vec::new(),
            exits: BTreeMap::new(),
            quests: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_interactable(mut self, interactable: Interactable) -> Self {
        self.interactables.push(interactable);
        self
    }

    pub fn with_exit(mut self, description: impl Into<String>, destination: impl Into<String>) -> Self {
        self.exits.insert(description.into(), destination.into());
        self
    }

    /// Substring lookup across characters, items and fixtures, in that order.
    pub fn find(&self, query: &str) -> Option<LocalEntity> {
        if let Some(index) = self.characters.iter().position(|c| c.matches(query)) {
            return Some(LocalEntity::Character(index));
        }
        if let Some(index) = self.items.iter().position(|i| i.matches(query)) {
            return Some(LocalEntity::Item(index));
        }
        self.interactables
            .iter()
            .position(|i| name_matches(&i.name, query))
            .map(LocalEntity::Interactable)
    }

    /// Exact-name character lookup.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub fn character_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.name == name)
    }

    pub fn remove_character(&mut self, name: &str) -> Option<Character> {
        let index = self.characters.iter().position(|c| c.name == name)?;
        Some(self.characters.remove(index))
    }

    /// First exit description leading to `destination`.
    pub fn exit_to(&self, destination: &str) -> Option<&str> {
        self.exits
            .iter()
            .find(|(_, dest)| dest.as_str() == destination)
            .map(|(desc, _)| desc.as_str())
    }
}

/// Rejections raised while admitting a generated location into the world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("location id must not be empty")]
    EmptyLocationId,

    #[error("location '{0}' already exists")]
    DuplicateLocation(String),

    #[error("location '{location}' lists character '{name}' twice")]
    DuplicateCharacter { location: String, name: String },
}

impl crate::error::GameError for WorldError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyLocationId => "WORLD_EMPTY_LOCATION_ID",
            Self::DuplicateLocation(_) => "WORLD_DUPLICATE_LOCATION",
            Self::DuplicateCharacter { .. } => "WORLD_DUPLICATE_CHARACTER",
        }
    }
}

/// All locations keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameWorld {
    #[cfg_attr(feature = "serde", serde(default))]
    pub locations: BTreeMap<String, Location>,
}

impl GameWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.insert(location.id.clone(), location);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Location> {
        self.locations.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Case-insensitive exact-name search over every location.
    ///
    /// Returns the character and the id of the location holding it.
    pub fn find_character_anywhere(&self, name: &str) -> Option<(&Character, &str)> {
        self.locations.values().find_map(|location| {
            location
                .characters
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(name))
                .map(|c| (c, location.id.as_str()))
        })
    }

    /// Admits a newly generated location.
    ///
    /// Existing locations are never overwritten.
    pub fn add_location(&mut self, location: Location) -> Result<&Location, WorldError> {
        if location.id.trim().is_empty() {
            return Err(WorldError::EmptyLocationId);
        }
        if self.locations.contains_key(&location.id) {
            return Err(WorldError::DuplicateLocation(location.id));
        }
        for (index, character) in location.characters.iter().enumerate() {
            if location.characters[..index]
                .iter()
                .any(|other| other.name == character.name)
            {
                return Err(WorldError::DuplicateCharacter {
                    location: location.id.clone(),
                    name: character.name.clone(),
                });
            }
        }

        tracing::info!(location = %location.id, "added location to the world");
        let id = location.id.clone();
        Ok(self.locations.entry(id).or_insert(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tavern() -> Location {
        Location::new("tavern", "The Prancing Pony")
            .with_character(Character::new("Barliman"))
            .with_item(Item::new("Barrel of Ale"))
            .with_interactable(Interactable::new("bar_door", "Barrel Room Door"))
            .with_exit("north door", "street")
            .with_exit("back door", "street")
    }

    #[test]
    fn lookup_prefers_characters_then_items_then_fixtures() {
        let location = tavern();
        assert_eq!(location.find("barli"), Some(LocalEntity::Character(0)));
        assert_eq!(location.find("barrel of"), Some(LocalEntity::Item(0)));
        assert_eq!(location.find("room door"), Some(LocalEntity::Interactable(0)));
        assert_eq!(location.find("dragon"), None);
    }

    #[test]
    fn add_location_rejects_duplicates_and_blank_ids() {
        let mut world = GameWorld::new().with_location(tavern());

        assert_eq!(
            world.add_location(Location::new("tavern", "Copy")).err(),
            Some(WorldError::DuplicateLocation("tavern".into()))
        );
        assert_eq!(
            world.add_location(Location::new("  ", "Blank")).err(),
            Some(WorldError::EmptyLocationId)
        );

        let crowded = Location::new("hall", "Hall")
            .with_character(Character::new("Guard"))
            .with_character(Character::new("Guard"));
        assert!(matches!(
            world.add_location(crowded),
            Err(WorldError::DuplicateCharacter { .. })
        ));

        assert!(world.add_location(Location::new("street", "Street")).is_ok());
        assert!(world.contains("street"));
    }

    #[test]
    fn find_character_anywhere_ignores_case() {
        let world = GameWorld::new().with_location(tavern());
        let (character, location) = world
            .find_character_anywhere("BARLIMAN")
            .expect("character should be found");
        assert_eq!(character.name, "Barliman");
        assert_eq!(location, "tavern");
        assert!(world.find_character_anywhere("barli").is_none());
    }

    #[test]
    fn many_exits_may_share_a_destination() {
        let location = tavern();
        assert_eq!(location.exits.len(), 2);
        assert_eq!(location.exit_to("street"), Some("back door"));
    }
}
