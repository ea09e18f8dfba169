use regex::Regex;

use crate::othello::prelude::*;

/// A full-grid rendition of a board: one symbol per cell, row-major from the
/// top-left, with '.', '-' or '_' marking an empty cell. The grid must be
/// square.
#[derive(Clone, Debug)]
pub struct SetupString {
    pub repr: String,
    pub side: usize,
    pub symbols: Vec<Option<char>>,
}

impl std::str::FromStr for SetupString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let count = s.chars().count();
        let side = (count as f64).sqrt() as usize;
        if count == 0 || side * side != count {
            return Err(anyhow!("a setup string must cover a square grid; received {count} cells"));
        }

        let mut symbols = Vec::with_capacity(count);
        for ch in s.chars() {
            if EMPTY_SYMBOLS.contains(&ch) {
                symbols.push(None);
            } else if ch.is_ascii_alphabetic() {
                symbols.push(Some(ch.to_ascii_uppercase()));
            } else {
                return Err(anyhow!("invalid notation {ch} for a cell"));
            }
        }
        Ok(SetupString { repr: s.to_owned(), side, symbols })
    }
}

/// The conventional opening position: the four central cells occupied, the
/// first symbol (the dark player) on the anti-diagonal.
pub fn standard_setup(side: usize, symbols: [char; 2]) -> Result<SetupString> {
    if side < 2 || side % 2 != 0 {
        return Err(anyhow!("the standard opening needs an even side of at least 2; received {side}"));
    }

    let [dark, light] = symbols;
    let mid = side / 2;
    let mut cells: Vec<Option<char>> = vec![None; side * side];
    cells[(mid - 1) * side + (mid - 1)] = Some(light);
    cells[(mid - 1) * side + mid] = Some(dark);
    cells[mid * side + (mid - 1)] = Some(dark);
    cells[mid * side + mid] = Some(light);

    let repr: String = cells.iter().map(|c| c.unwrap_or('.')).collect();
    Ok(SetupString { repr, side, symbols: cells })
}

/// A single ownership claim of the form `B@d3`: the claiming seat's symbol,
/// '@', and the target cell in algebraic notation.
#[derive(Clone, Debug)]
pub struct ClaimString {
    pub repr: String,
    pub symbol: char,
    pub coord: Coord,
}

impl std::str::FromStr for ClaimString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new("^(?<symbol>[A-Za-z])@(?<coord>[a-z][0-9]{1,2})$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse claim {s}"));
        };

        let symbol = matches.name("symbol").unwrap().as_str()
            .chars().next().unwrap()
            .to_ascii_uppercase();
        let coord = matches.name("coord").unwrap().as_str().parse::<Coord>()?;
        Ok(ClaimString { repr: s.to_owned(), symbol, coord })
    }
}

/// A parsed game record: a setup followed by an ordered list of claims.
///
/// Caveat: the record is only syntactically checked; a claim may still name a
/// symbol nobody is seated under, or a cell outside the board. Records are
/// validated for real by replaying each claim against a live board.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub setup: SetupString,
    pub claims: Vec<ClaimString>,
}

impl std::str::FromStr for GameRecord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts = s.split(';').collect::<Vec<&str>>();
        let Some((setup_str, claim_list)) = parts.split_first() else {
            return Err(anyhow!("game record cannot be empty!"));
        };

        let setup = setup_str.trim().parse::<SetupString>()?;
        let mut claims = vec![];
        for claim_str in claim_list {
            let claim = claim_str.trim().parse::<ClaimString>()?;
            claims.push(claim);
        }

        Ok(GameRecord { setup, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello::prelude::Coord;

    #[test]
    fn parses_square_setups() {
        let setup = "B..w".parse::<SetupString>().unwrap();
        assert_eq!(setup.side, 2);
        assert_eq!(setup.symbols, vec![Some('B'), None, None, Some('W')]);
    }

    #[test]
    fn rejects_ragged_setups() {
        assert!("B..W.".parse::<SetupString>().is_err());
        assert!("".parse::<SetupString>().is_err());
        assert!("B..?".parse::<SetupString>().is_err());
    }

    #[test]
    fn standard_opening_is_centred() {
        let setup = standard_setup(8, ['B', 'W']).unwrap();
        assert_eq!(setup.symbols[3 * 8 + 3], Some('W'));
        assert_eq!(setup.symbols[3 * 8 + 4], Some('B'));
        assert_eq!(setup.symbols[4 * 8 + 3], Some('B'));
        assert_eq!(setup.symbols[4 * 8 + 4], Some('W'));
        assert_eq!(setup.symbols.iter().filter(|c| c.is_some()).count(), 4);
        assert!(standard_setup(7, ['B', 'W']).is_err());
    }

    #[test]
    fn parses_claims() {
        let claim = "B@d3".parse::<ClaimString>().unwrap();
        assert_eq!(claim.symbol, 'B');
        assert_eq!(claim.coord, Coord::new(3, 2));

        let claim = "w@a1".parse::<ClaimString>().unwrap();
        assert_eq!(claim.symbol, 'W');
        assert_eq!(claim.coord, Coord::new(0, 0));
    }

    #[test]
    fn rejects_malformed_claims() {
        for repr in ["Bd3", "B@3d", "BB@d3", "@d3", "B@"] {
            assert!(repr.parse::<ClaimString>().is_err());
        }
    }

    #[test]
    fn parses_records() {
        let record = "B..W; B@a1; W@b2".parse::<GameRecord>().unwrap();
        assert_eq!(record.setup.side, 2);
        assert_eq!(record.claims.len(), 2);
        assert_eq!(record.claims[1].symbol, 'W');
        assert!("B..W; B+a1".parse::<GameRecord>().is_err());
    }
}
