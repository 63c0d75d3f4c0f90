//! Game library listing and the "Play" action.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Notice, ViewError};
use crate::domain::catalog::{Catalog, Game, GameColumn, GameStatus, SortSpec, sort_rows};

/// Options for the game library view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLibraryRequest {
    /// Game to select. Defaults to the first game.
    pub selected: Option<String>,
    /// Whether "Play" was pressed for the selected game.
    pub play: bool,
    /// Only list games with this status.
    pub status: Option<GameStatus>,
    pub sort: Option<SortSpec<GameColumn>>,
}

/// Result of pressing "Play". No game session is started either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Launching { game: String },
    UnderMaintenance { game: String },
}

impl PlayOutcome {
    pub fn is_launching(&self) -> bool {
        matches!(self, Self::Launching { .. })
    }

    pub fn notice(&self) -> Notice {
        match self {
            Self::Launching { game } => Notice::success(format!("Launching {game}...")),
            Self::UnderMaintenance { game } => {
                Notice::warning(format!("{game} is currently under maintenance."))
            }
        }
    }
}

impl From<&Game> for PlayOutcome {
    fn from(game: &Game) -> Self {
        let name = game.name().to_owned();
        match game.status() {
            GameStatus::Available => Self::Launching { game: name },
            GameStatus::Maintenance => Self::UnderMaintenance { game: name },
        }
    }
}

/// Press "Play" on the named game.
///
/// # Examples
/// ```
/// use gamehub::domain::catalog::{Catalog, Game, GameStatus};
/// use gamehub::domain::views::play_game;
///
/// let games = Catalog::new(vec![Game::new("PixelWarriors", 12, GameStatus::Maintenance)])
///     .expect("unique keys");
/// let outcome = play_game(&games, "PixelWarriors").expect("known game");
/// assert!(!outcome.is_launching());
/// ```
pub fn play_game(games: &Catalog<Game>, name: &str) -> Result<PlayOutcome, ViewError> {
    games
        .find_by_key(name)
        .map(PlayOutcome::from)
        .ok_or_else(|| ViewError::UnknownGame {
            name: name.to_owned(),
        })
}

/// Listing plus the selected game and any notice about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameLibraryView {
    title: &'static str,
    description: &'static str,
    games: Vec<Game>,
    selected: Option<Game>,
    notice: Option<Notice>,
}

impl GameLibraryView {
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn selected(&self) -> Option<&Game> {
        self.selected.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

pub(super) fn render(
    games: &Catalog<Game>,
    request: GameLibraryRequest,
) -> Result<GameLibraryView, ViewError> {
    let selected = match request.selected.as_deref() {
        Some(name) => Some(
            games
                .find_by_key(name)
                .ok_or_else(|| ViewError::UnknownGame {
                    name: name.to_owned(),
                })?,
        ),
        None => games.first(),
    };

    // A game under maintenance warns as soon as it is selected; an
    // available one only reports once "Play" is pressed.
    let notice = selected.and_then(|game| {
        let outcome = PlayOutcome::from(game);
        (request.play || !outcome.is_launching()).then(|| outcome.notice())
    });

    let mut listing = games.filter(|game| request.status.is_none_or(|s| game.status() == s));
    if let Some(sort) = request.sort {
        sort_rows(&mut listing, sort.column, sort.descending);
    }

    Ok(GameLibraryView {
        title: "Game Library",
        description: "Explore and play a variety of games available on our platform.",
        games: listing,
        selected: selected.cloned(),
        notice,
    })
}
