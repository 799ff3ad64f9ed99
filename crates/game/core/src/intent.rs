//! Structured player intent as produced by the language layer.

use std::collections::BTreeMap;
use std::fmt;

/// Intent tag. Unknown tags are kept verbatim in [`IntentKind::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum IntentKind {
    Attack,
    TakeItem,
    DropItem,
    GiveItem,
    UseItem,
    Equip,
    Unequip,
    Move,
    PassTime,
    Interact,
    Look,
    Dialogue,
    SkillCheck,
    Other(String),
}

impl IntentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Attack => "attack",
            Self::TakeItem => "take_item",
            Self::DropItem => "drop_item",
            Self::GiveItem => "give_item",
            Self::UseItem => "use_item",
            Self::Equip => "equip",
            Self::Unequip => "unequip",
            Self::Move => "move",
            Self::PassTime => "pass_time",
            Self::Interact => "interact",
            Self::Look => "look",
            Self::Dialogue => "dialogue",
            Self::SkillCheck => "skill_check",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for IntentKind {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "attack" => Self::Attack,
            "take_item" => Self::TakeItem,
            "drop_item" => Self::DropItem,
            "give_item" => Self::GiveItem,
            "use_item" => Self::UseItem,
            "equip" => Self::Equip,
            "unequip" => Self::Unequip,
            "move" => Self::Move,
            "pass_time" => Self::PassTime,
            "interact" => Self::Interact,
            "look" => Self::Look,
            "dialogue" => Self::Dialogue,
            "skill_check" => Self::SkillCheck,
            _ => Self::Other(tag.to_string()),
        }
    }
}

impl From<String> for IntentKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<IntentKind> for String {
    fn from(kind: IntentKind) -> Self {
        match kind {
            IntentKind::Other(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified player action with its extracted parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intent {
    pub intent: IntentKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<String>,
    /// Receiving character of a `give_item`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recipient: Option<String>,
    /// Fixture a key is used on.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_on: Option<String>,
    /// Minutes for `pass_time`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dc: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_description: String,
    /// Remaining fields, stringified.
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra: BTreeMap<String, String>,
}

impl Intent {
    pub fn new(kind: impl Into<IntentKind>) -> Self {
        Self {
            intent: kind.into(),
            target: None,
            recipient: None,
            target_on: None,
            duration: None,
            skill: None,
            dc: None,
            action_description: String::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn attack(target: impl Into<String>) -> Self {
        Self::new(IntentKind::Attack).with_target(target)
    }

    pub fn take(item: impl Into<String>) -> Self {
        Self::new(IntentKind::TakeItem).with_target(item)
    }

    pub fn give(item: impl Into<String>, recipient: impl Into<String>) -> Self {
        let mut intent = Self::new(IntentKind::GiveItem).with_target(item);
        intent.recipient = Some(recipient.into());
        intent
    }

    pub fn go(destination: impl Into<String>) -> Self {
        Self::new(IntentKind::Move).with_target(destination)
    }

    pub fn pass_time(minutes: i64) -> Self {
        let mut intent = Self::new(IntentKind::PassTime);
        intent.duration = Some(minutes);
        intent
    }

    pub fn skill_check(skill: impl Into<String>, dc: i32) -> Self {
        let mut intent = Self::new(IntentKind::SkillCheck);
        intent.skill = Some(skill.into());
        intent.dc = Some(dc);
        intent
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_target_on(mut self, target_on: impl Into<String>) -> Self {
        self.target_on = Some(target_on.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.action_description = description.into();
        self
    }

    /// Target with surrounding whitespace removed; blank reads as absent.
    pub fn target(&self) -> Option<&str> {
        non_blank(self.target.as_deref())
    }

    pub fn recipient(&self) -> Option<&str> {
        non_blank(self.recipient.as_deref())
    }

    pub fn target_on(&self) -> Option<&str> {
        non_blank(self.target_on.as_deref())
    }

    pub fn is(&self, kind: &IntentKind) -> bool {
        &self.intent == kind
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
