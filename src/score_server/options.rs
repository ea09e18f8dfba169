use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct ScoreServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Side length of the boards dealt by `newgame`.
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIDE)]
    pub side: usize,

    /// Comma-separated player ids, in seat order.
    #[arg(short, long, default_value = "black,white")]
    pub players: String,

    /// Echo the score table after every claim.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl ScoreServerOptions {
    /// Builds the roster from the players option. Each player prints under the
    /// uppercased first character of its id, so ids must not collide on either
    /// axis.
    pub fn roster(&self) -> Result<Vec<Player>> {
        let mut players: Vec<Player> = vec![];
        for id in self.players.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let player = Player::from(id);
            if players.iter().any(|p| p.id() == player.id() || p.symbol() == player.symbol()) {
                return Err(anyhow!("player {} collides with an earlier seat", player.id()));
            }
            players.push(player);
        }
        if players.is_empty() {
            return Err(anyhow!("at least one player must be seated"));
        }
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreServerOptions;
    use clap::Parser;

    #[test]
    fn roster_derives_symbols() {
        let options = ScoreServerOptions::parse_from(["othello"]);
        let roster = options.roster().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id().as_str(), "black");
        assert_eq!(roster[0].symbol(), 'B');
        assert_eq!(roster[1].symbol(), 'W');
    }

    #[test]
    fn roster_rejects_symbol_collisions() {
        let options = ScoreServerOptions::parse_from(["othello", "--players", "black,blue"]);
        assert!(options.roster().is_err());
    }
}
