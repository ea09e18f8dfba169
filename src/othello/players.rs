/// The identifier a player is registered under; unique within a roster.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Constructs a new identifier.
    pub fn new(id: impl Into<String>) -> PlayerId {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        PlayerId::new(value)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant in a game, seated at a board under a single-character symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    symbol: char,
}

impl Player {
    /// Constructs a new player.
    pub fn new(id: impl Into<PlayerId>, symbol: char) -> Player {
        Player { id: id.into(), symbol }
    }

    /// Gets the identifier this player is registered under.
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Gets the symbol this player's stones print as.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl From<&str> for Player {
    fn from(value: &str) -> Self {
        let symbol = value.chars().next().map_or('?', |c| c.to_ascii_uppercase());
        Player::new(value, symbol)
    }
}
