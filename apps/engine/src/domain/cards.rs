//! Modifier card types: the three kinds, per-player counts, and per-move
//! selections.

use serde::{Deserialize, Serialize};

use crate::errors::engine::EngineError;

/// The closed set of modifier cards. The authoritative record knows exactly
/// these three kinds; anything else seen in presentation code is decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Absorbs one wrong step instead of resetting the run.
    Shield,
    /// Doubles the card award of a correct step.
    Doubler,
    /// Cuts the cipher cost of the move by two.
    Swift,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Shield, CardKind::Doubler, CardKind::Swift];

    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Shield => "Shield",
            CardKind::Doubler => "Doubler",
            CardKind::Swift => "Swift",
        }
    }
}

/// Per-player card counts. Mutated only by the move flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCounts {
    shield: u32,
    doubler: u32,
    swift: u32,
}

impl CardCounts {
    pub fn count(&self, kind: CardKind) -> u32 {
        match kind {
            CardKind::Shield => self.shield,
            CardKind::Doubler => self.doubler,
            CardKind::Swift => self.swift,
        }
    }

    pub fn add(&mut self, kind: CardKind, n: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(n);
    }

    /// Spend one card. Callers validate ownership first; counts never go
    /// below zero.
    pub fn remove(&mut self, kind: CardKind) {
        debug_assert!(self.count(kind) > 0, "spending a card that is not owned");
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(1);
    }

    /// Drop every card (run reset).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> u64 {
        self.shield as u64 + self.doubler as u64 + self.swift as u64
    }

    fn slot_mut(&mut self, kind: CardKind) -> &mut u32 {
        match kind {
            CardKind::Shield => &mut self.shield,
            CardKind::Doubler => &mut self.doubler,
            CardKind::Swift => &mut self.swift,
        }
    }
}

/// The set of cards attached to a single move.
///
/// At most one of each kind; duplicated input is rejected at construction so
/// no later code has to reason about multiplicity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelection {
    shield: bool,
    doubler: bool,
    swift: bool,
}

impl CardSelection {
    pub const NONE: CardSelection = CardSelection {
        shield: false,
        doubler: false,
        swift: false,
    };

    /// Build a selection from caller input, rejecting duplicates.
    pub fn from_cards(cards: &[CardKind]) -> Result<Self, EngineError> {
        let mut selection = Self::NONE;
        for &kind in cards {
            if selection.contains(kind) {
                return Err(EngineError::InvalidCardSelection(format!(
                    "{} selected twice",
                    kind.label()
                )));
            }
            selection.set(kind);
        }
        Ok(selection)
    }

    /// Builder for tests and fixed selections.
    pub fn with(mut self, kind: CardKind) -> Self {
        self.set(kind);
        self
    }

    pub fn contains(&self, kind: CardKind) -> bool {
        match kind {
            CardKind::Shield => self.shield,
            CardKind::Doubler => self.doubler,
            CardKind::Swift => self.swift,
        }
    }

    /// Number of selected cards (0..=3).
    pub fn count(&self) -> u32 {
        self.iter().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        !(self.shield || self.doubler || self.swift)
    }

    pub fn iter(&self) -> impl Iterator<Item = CardKind> + '_ {
        CardKind::ALL.into_iter().filter(|&kind| self.contains(kind))
    }

    fn set(&mut self, kind: CardKind) {
        match kind {
            CardKind::Shield => self.shield = true,
            CardKind::Doubler => self.doubler = true,
            CardKind::Swift => self.swift = true,
        }
    }
}
