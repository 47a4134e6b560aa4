use serde::{Deserialize, Serialize};
use std::fmt;

/// Card identifier. Derived from the creation time in milliseconds.
pub type CardId = i64;

/// Sizes the board knows how to lay out: small, medium, large.
pub const CARD_SIZES: [u32; 3] = [1, 2, 3];

pub const DEFAULT_SIZE: u32 = 1;

/// Visibility of a single card.
///
/// The `hidden`/`keep` flag pair stored on a [`Card`] is always written from
/// one of these states, so a shown card can never carry a keep flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardState {
    Shown,
    HiddenDiscard,
    HiddenKeep,
}

impl CardState {
    pub fn from_flags(hidden: bool, keep: bool) -> Self {
        match (hidden, keep) {
            (false, _) => CardState::Shown,
            (true, false) => CardState::HiddenDiscard,
            (true, true) => CardState::HiddenKeep,
        }
    }

    pub fn is_hidden(self) -> bool {
        !matches!(self, CardState::Shown)
    }

    pub fn is_kept(self) -> bool {
        matches!(self, CardState::HiddenKeep)
    }

    /// The hide button: shown cards get hidden, kept cards come back.
    pub fn toggled_hidden(self) -> Self {
        match self {
            CardState::Shown => CardState::HiddenDiscard,
            CardState::HiddenDiscard => CardState::HiddenDiscard,
            CardState::HiddenKeep => CardState::Shown,
        }
    }

    /// Keep only applies to hidden cards; shown cards ignore it.
    pub fn with_keep(self, keep: bool) -> Self {
        match self {
            CardState::Shown => CardState::Shown,
            _ if keep => CardState::HiddenKeep,
            _ => CardState::HiddenDiscard,
        }
    }

    /// Closing reveal mode spends the keep flag.
    pub fn after_reveal(self) -> Self {
        match self {
            CardState::HiddenKeep => CardState::Shown,
            other => other,
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Shown => write!(f, "shown"),
            CardState::HiddenDiscard => write!(f, "hidden"),
            CardState::HiddenKeep => write!(f, "kept"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(deserialize_with = "coerce::id")]
    pub id: CardId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_size", deserialize_with = "coerce::size")]
    pub size: u32,
    #[serde(default)]
    pub(crate) hidden: bool,
    #[serde(default)]
    pub(crate) keep: bool,
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

impl Card {
    pub fn new(id: CardId, title: String, description: String, size: u32) -> Self {
        Self {
            id,
            title,
            description,
            size,
            hidden: false,
            keep: false,
        }
    }

    pub fn state(&self) -> CardState {
        CardState::from_flags(self.hidden, self.keep)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Keep flag as seen by callers; false whenever the card is shown.
    pub fn is_kept(&self) -> bool {
        self.state().is_kept()
    }

    /// Size to lay the card out at. Stored sizes outside [`CARD_SIZES`] fall
    /// back to the nearest one.
    pub fn layout_size(&self) -> u32 {
        self.size.clamp(CARD_SIZES[0], CARD_SIZES[CARD_SIZES.len() - 1])
    }

    pub(crate) fn set_state(&mut self, state: CardState) {
        self.hidden = state.is_hidden();
        self.keep = state.is_kept();
    }

    /// Rewrites the flags from the derived state, dropping a stray keep.
    pub(crate) fn normalize(&mut self) {
        let state = self.state();
        self.set_state(state);
    }
}

/// Lenient integer parsing for stored cards, which may carry numbers as
/// strings ("2") or floats (2.0).
mod coerce {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntLike {
        Int(i64),
        Float(f64),
        Text(String),
    }

    fn to_i64<E: Error>(value: IntLike) -> Result<i64, E> {
        match value {
            IntLike::Int(n) => Ok(n),
            IntLike::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            IntLike::Float(f) => Err(E::custom(format!("not a number: {}", f))),
            IntLike::Text(s) => leading_int(&s)
                .ok_or_else(|| E::custom(format!("not an integer: {:?}", s))),
        }
    }

    /// Integer prefix of a string, ignoring surrounding whitespace ("12px" -> 12).
    fn leading_int(s: &str) -> Option<i64> {
        let s = s.trim();
        let digits_start = usize::from(s.starts_with('-') || s.starts_with('+'));
        let end = s[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(s.len(), |i| i + digits_start);
        if end == digits_start {
            return None;
        }
        s[..end].parse().ok()
    }

    pub(super) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        to_i64(IntLike::deserialize(deserializer)?)
    }

    /// Sizes below one, and sizes that are not numbers at all, collapse to
    /// the smallest size.
    pub(super) fn size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let n = IntLike::deserialize(deserializer)
            .ok()
            .and_then(|value| to_i64::<D::Error>(value).ok())
            .unwrap_or(1);
        Ok(u32::try_from(n.max(1)).unwrap_or(u32::MAX))
    }
}
