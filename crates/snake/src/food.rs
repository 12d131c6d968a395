use brick_game_core::types::{BOARD_COLS, BOARD_ROWS};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::body::Body;

/// Food position for a fresh game
pub const START_FOOD: (i8, i8) = (10, 7);

/// Pick a food cell uniformly among the cells the body does not cover. `None` when the
/// body fills the board.
pub fn place_food<R: Rng + ?Sized>(body: &Body, rng: &mut R) -> Option<(i8, i8)> {
    (0..BOARD_ROWS as i8)
        .flat_map(|row| (0..BOARD_COLS as i8).map(move |col| (row, col)))
        .filter(|&pos| !body.contains(pos))
        .choose(rng)
}
