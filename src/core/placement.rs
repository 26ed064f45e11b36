//! Committed word placements

use super::direction::Direction;
use super::word::Word;

/// A word written into the grid along a straight line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: Word,
    pub start: (usize, usize),
    pub direction: Direction,
}

impl Placement {
    #[must_use]
    pub const fn new(word: Word, start: (usize, usize), direction: Direction) -> Self {
        Self {
            word,
            start,
            direction,
        }
    }

    /// Last cell of the placement
    #[must_use]
    pub fn end(&self) -> (usize, usize) {
        let (dr, dc) = self.direction.delta();
        let steps = self.word.len().saturating_sub(1) as isize;
        (
            (self.start.0 as isize + dr * steps) as usize,
            (self.start.1 as isize + dc * steps) as usize,
        )
    }

    /// Cells covered by the word, first letter first
    #[must_use]
    pub fn path(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..self.word.len() as isize)
            .map(|i| {
                (
                    (self.start.0 as isize + dr * i) as usize,
                    (self.start.1 as isize + dc * i) as usize,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_direction() {
        let placement = Placement::new(Word::new("sum").unwrap(), (2, 2), Direction::UpLeft);
        assert_eq!(placement.path(), vec![(2, 2), (1, 1), (0, 0)]);
        assert_eq!(placement.end(), (0, 0));
    }

    #[test]
    fn horizontal_path() {
        let placement = Placement::new(Word::new("area").unwrap(), (1, 0), Direction::Right);
        assert_eq!(placement.path(), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }
}
