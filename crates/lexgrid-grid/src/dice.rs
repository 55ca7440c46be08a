//! Dice-roll board generation.
//!
//! A board is rolled the way the physical game does it: the dice are
//! shaken into the tray in random order and each shows one random face.
//! Boards with more cells than dice reuse the set cyclically, so the
//! classic 16-die set still fills a 6×6 board.
//!
//! Uses a seeded ChaCha8 RNG in [`roll_board`] so that a seed always
//! produces the same board.

use lexgrid_core::GridError;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::Grid;

/// The 16 dice of the classic game. The `Qu` face is printed as `Q`.
const CLASSIC: [&str; 16] = [
    "AACIOT", "ABILTY", "ABJMOQ", "ACDEMP", "ACELRS", "ADENVZ", "AHMORS", "BIFORX", "DENOSW",
    "DKNOTU", "EEFHIY", "EGKLUY", "EGINTV", "EHINPS", "ELPSTU", "GILRUW",
];

/// A set of letter dice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Vec<char>>,
}

impl DiceSet {
    /// The classic 16-die set.
    pub fn classic() -> Self {
        Self {
            dice: CLASSIC.iter().map(|d| d.chars().collect()).collect(),
        }
    }

    /// Build a set from one string of faces per die.
    ///
    /// Returns `Err(GridError::Empty)` if there are no dice or a die has
    /// no faces.
    pub fn from_faces<I, S>(dice: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dice: Vec<Vec<char>> = dice
            .into_iter()
            .map(|d| d.as_ref().chars().collect())
            .collect();
        if dice.is_empty() || dice.iter().any(|d: &Vec<char>| d.is_empty()) {
            return Err(GridError::Empty);
        }
        Ok(Self { dice })
    }

    /// Number of dice in the set.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Roll a `size`×`size` board.
    pub fn roll<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Grid, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        if size > GridError::MAX_SIZE {
            return Err(GridError::TooLarge { size });
        }
        let mut order: Vec<usize> = (0..size * size).map(|i| i % self.dice.len()).collect();
        order.shuffle(rng);
        let letters: String = order
            .into_iter()
            .map(|d| {
                let faces = &self.dice[d];
                faces[rng.random_range(0..faces.len())]
            })
            .collect();
        Grid::from_letters(size, &letters)
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::classic()
    }
}

/// Roll a `size`×`size` board from the classic dice with a fixed seed.
pub fn roll_board(size: usize, seed: u64) -> Result<Grid, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    DiceSet::classic().roll(size, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn same_seed_same_board() {
        assert_eq!(roll_board(4, 7).unwrap(), roll_board(4, 7).unwrap());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let boards: Vec<Grid> = (0..8).map(|s| roll_board(5, s).unwrap()).collect();
        assert!(boards.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn letters_come_from_dice_faces() {
        let faces: String = CLASSIC.concat();
        let board = roll_board(6, 99).unwrap();
        assert_eq!(board.cell_count(), 36);
        for pos in board.positions() {
            assert!(faces.contains(board.letter(pos)));
        }
    }

    #[test]
    fn each_die_used_once_on_full_board() {
        // One face per die: a single-letter-per-die set makes each die
        // identifiable on the board.
        let set = DiceSet::from_faces(["A", "B", "C", "D"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let board = set.roll(2, &mut rng).unwrap();
        let mut counts: HashMap<char, usize> = HashMap::new();
        for pos in board.positions() {
            *counts.entry(board.letter(pos)).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&n| n == 1));
    }

    #[test]
    fn larger_board_reuses_dice() {
        let set = DiceSet::from_faces(["A", "B"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let board = set.roll(3, &mut rng).unwrap();
        let a_count = board.positions().filter(|&p| board.letter(p) == 'A').count();
        // 9 cells over 2 dice: A fills cells 0, 2, 4, 6, 8 of the cycle.
        assert_eq!(a_count, 5);
    }

    #[test]
    fn rejects_bad_sizes_and_sets() {
        assert_eq!(roll_board(0, 1), Err(GridError::Empty));
        assert!(matches!(
            roll_board(GridError::MAX_SIZE + 1, 1),
            Err(GridError::TooLarge { .. })
        ));
        assert_eq!(
            DiceSet::from_faces(Vec::<&str>::new()),
            Err(GridError::Empty)
        );
        assert_eq!(DiceSet::from_faces(["AB", ""]), Err(GridError::Empty));
    }

    #[test]
    fn classic_set_has_sixteen_six_sided_dice() {
        let set = DiceSet::classic();
        assert_eq!(set.len(), 16);
        assert!(set.dice.iter().all(|d| d.len() == 6));
    }
}
