use crate::othello::prelude::*;

/// Simple board coordinate; x grows rightward along a row, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(column) = chars.next() else {
            return Err(anyhow!("expected an algebraic coordinate like d3; received an empty string"));
        };
        if !column.is_ascii_lowercase() {
            return Err(anyhow!("expected a column letter in a..z; received {column}"));
        }
        let row = chars.as_str().parse::<usize>()?;
        if row == 0 {
            return Err(anyhow!("rows are numbered from 1; received {s}"));
        }
        Ok(Coord { x: (column as usize) - ('a' as usize), y: row - 1 })
    }
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }

    /// The canonical notation of the coord is its column letter followed by its
    /// 1-based row. Columns past 'z' are not notatable; boards in this crate
    /// stay within 26 columns.
    pub fn notate(&self) -> String {
        format!("{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}

// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub x: isize,
    pub y: isize,
}

/// Offsets that turn a coordinate into one of its eight compass neighbours.
pub static COMPASS_OFFSETS: [OffsetCoord; 8] = [
    OffsetCoord { x: -1, y: -1 },
    OffsetCoord { x: 0, y: -1 },
    OffsetCoord { x: 1, y: -1 },
    OffsetCoord { x: -1, y: 0 },
    OffsetCoord { x: 1, y: 0 },
    OffsetCoord { x: -1, y: 1 },
    OffsetCoord { x: 0, y: 1 },
    OffsetCoord { x: 1, y: 1 },
];

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> OffsetCoord {
        OffsetCoord {
            x: self.x as isize + rhs.x,
            y: self.y as isize + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn parses_algebraic_coordinates() {
        assert_eq!("a1".parse::<Coord>().unwrap(), Coord::new(0, 0));
        assert_eq!("d3".parse::<Coord>().unwrap(), Coord::new(3, 2));
        assert_eq!("h8".parse::<Coord>().unwrap(), Coord::new(7, 7));
    }

    #[test]
    fn notation_round_trips() {
        for repr in ["a1", "c7", "h8", "z26"] {
            assert_eq!(repr.parse::<Coord>().unwrap().notate(), repr);
        }
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for repr in ["", "3d", "d0", "D3", "dd"] {
            assert!(repr.parse::<Coord>().is_err());
        }
    }
}
