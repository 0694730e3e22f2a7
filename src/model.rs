//! Quest data model: the tile board, the single modal, and what has been revealed.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

pub const TILE_COUNT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    Clue,
    Dare,
}

impl ChallengeKind {
    pub fn emoji(self) -> &'static str {
        match self {
            ChallengeKind::Clue => "🔍",
            ChallengeKind::Dare => "🎯",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            ChallengeKind::Clue => "clue",
            ChallengeKind::Dare => "dare",
        }
    }

    /// Scratch cover colour.
    pub fn cover_color(self) -> &'static str {
        match self {
            ChallengeKind::Clue => "#d53f8c",
            ChallengeKind::Dare => "#9f1239",
        }
    }
}

/// Hidden text for a tile (zero-based index).
pub fn challenge_text(kind: ChallengeKind, tile: usize) -> String {
    match kind {
        ChallengeKind::Clue => format!(
            "🔍 Here's your clue:\n\nThis is a mysterious clue for tile {}",
            tile + 1
        ),
        ChallengeKind::Dare => format!(
            "🎯 Your dare is:\n\nThis is an exciting dare for tile {}",
            tile + 1
        ),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestTile {
    pub label: String,
    /// The first tile carries a heart instead of a question mark.
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Choosing { tile: usize },
    Scratching { tile: usize, kind: ChallengeKind },
}

impl ModalState {
    pub fn tile(&self) -> Option<usize> {
        match *self {
            ModalState::Closed => None,
            ModalState::Choosing { tile } | ModalState::Scratching { tile, .. } => Some(tile),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRecord {
    pub tile: usize,
    pub kind: ChallengeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestState {
    pub tiles: Vec<QuestTile>,
    pub modal: ModalState,
    pub reveals: Vec<RevealRecord>,
    pub welcome_open: bool,
    /// Set once the current scratch session has been recorded.
    scratch_recorded: bool,
}

impl QuestState {
    pub fn new(welcome_open: bool) -> Self {
        let tiles = (0..TILE_COUNT)
            .map(|i| QuestTile {
                label: format!("Title {}", i + 1),
                featured: i == 0,
            })
            .collect();
        Self {
            tiles,
            modal: ModalState::Closed,
            reveals: Vec::new(),
            welcome_open,
            scratch_recorded: false,
        }
    }

    pub fn revealed_kinds(&self, tile: usize) -> Vec<ChallengeKind> {
        let mut kinds: Vec<ChallengeKind> = Vec::new();
        for r in self.reveals.iter().filter(|r| r.tile == tile) {
            if !kinds.contains(&r.kind) {
                kinds.push(r.kind);
            }
        }
        kinds
    }
}

#[derive(Clone, Debug)]
pub enum QuestAction {
    OpenTile(usize),
    Choose(ChallengeKind),
    Revealed,
    Back,
    Close,
    DismissWelcome,
}

impl Reducible for QuestState {
    type Action = QuestAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use QuestAction::*;
        let mut new = (*self).clone();
        match action {
            OpenTile(tile) => {
                if new.modal != ModalState::Closed || tile >= new.tiles.len() {
                    return self;
                }
                new.modal = ModalState::Choosing { tile };
            }
            Choose(kind) => {
                let ModalState::Choosing { tile } = new.modal else { return self; };
                new.modal = ModalState::Scratching { tile, kind };
                new.scratch_recorded = false;
            }
            Revealed => {
                let ModalState::Scratching { tile, kind } = new.modal else { return self; };
                if new.scratch_recorded {
                    return self;
                }
                new.reveals.push(RevealRecord { tile, kind });
                new.scratch_recorded = true;
            }
            Back | Close => {
                new.modal = ModalState::Closed;
            }
            DismissWelcome => {
                new.welcome_open = false;
            }
        }
        Rc::new(new)
    }
}
