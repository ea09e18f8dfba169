mod options;

use std::process::exit;

use itertools::Itertools;
pub use options::ScoreServerOptions;

use crate::prelude::*;

/// An interactive console over the scoring engine.
///
/// Speaks a line-oriented protocol on stdin: every command answers with its
/// payload and an `ok` footer; recoverable failures answer `err` plus the
/// reason, then `ok`.
pub struct ScoreServer {
    board: Option<Board>,
    tracker: Option<Rc<RefCell<ScoreTracker>>>,
    roster: Vec<Player>,
    config: ScoreServerOptions,
}

impl ScoreServer {
    /// Produces a new server with the given options.
    pub fn new(options: ScoreServerOptions) -> Result<ScoreServer> {
        Ok(ScoreServer {
            board: None,
            tracker: None,
            roster: options.roster()?,
            config: options,
        })
    }

    /// Runs the console until stdin closes.
    pub fn run(&mut self) -> Result<()> {
        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0 {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, args.get(1..).unwrap_or(&[]))?;
        }
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "board" => self.board_repr(),
            | "claim" => self.claim(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "points" => self.points(args),
            | "quit" => exit(0),
            | "scores" => self.scores(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    /// Starts a new game, potentially from an advanced position (i.e. with a
    /// claim history). Without arguments, deals the standard opening.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let record = if !args.is_empty() {
            args.join(" ").parse::<GameRecord>()?
        } else {
            GameRecord {
                setup: standard_setup(self.config.side, self.seat_symbols()?)?,
                claims: vec![],
            }
        };

        let mut board = Board::from_setup(&record.setup, &self.roster)?;
        let tracker = ScoreTracker::attach(&self.roster, &mut board);
        tracker.borrow_mut().observe(|affected| {
            log::debug!("scores changed for [{}]", affected.iter().join(", "));
        });
        tracker.borrow_mut().initialize(&board)?;

        // claims replay through the incremental path, never a rescan
        for claim in &record.claims {
            Self::claim_on(&mut board, claim)?;
        }

        self.board = Some(board);
        self.tracker = Some(tracker);

        println!("{}", self.get().notate());
        Ok(())
    }

    fn claim(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        if args.is_empty() {
            return Err(anyhow!("no claim provided"));
        }

        let claim = args[0].parse::<ClaimString>().context("claims look like B@d3")?;
        Self::claim_on(self.board.as_mut().unwrap(), &claim)?;

        println!("{}", self.get().notate());
        if self.config.verbose {
            self.scores()?;
        }
        Ok(())
    }

    fn scores(&self) -> Result<()> {
        let tracker = self.ensure_tracked()?.borrow();
        let repr = tracker.players_score().iter()
            .map(|item| format!("{} {}", item.player_id, item.score))
            .join("; ");
        println!("{}", repr);
        Ok(())
    }

    fn points(&self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            return Err(anyhow!("no player id provided"));
        }

        let tracker = self.ensure_tracked()?.borrow();
        println!("{}", tracker.points(&PlayerId::from(args[0])));
        Ok(())
    }

    fn board_repr(&self) -> Result<()> {
        println!("{}", self.ensure_started()?.notate());
        Ok(())
    }

    /// The dark and light symbols for the standard opening, which seats
    /// exactly two players.
    fn seat_symbols(&self) -> Result<[char; 2]> {
        match self.roster.as_slice() {
            [dark, light] => Ok([dark.symbol(), light.symbol()]),
            _ => Err(anyhow!("the standard opening seats exactly 2 players; {} are seated", self.roster.len())),
        }
    }

    /// Applies a single claim to a board, resolving its seat symbol.
    fn claim_on(board: &mut Board, claim: &ClaimString) -> Result<()> {
        let player_id = board.player_by_symbol(claim.symbol)
            .ok_or_else(|| anyhow!("no player is seated under symbol {}", claim.symbol))?
            .id().clone();
        board.set_occupant(&claim.coord, Some(&player_id))
    }

    // accessors

    fn ensure_started(&self) -> Result<&Board> {
        self.board.as_ref().ok_or_else(|| anyhow!("no game in progress"))
    }

    fn ensure_tracked(&self) -> Result<&Rc<RefCell<ScoreTracker>>> {
        self.tracker.as_ref().ok_or_else(|| anyhow!("no game in progress"))
    }

    /// Retrieves the board in a shared context.
    fn get(&self) -> &Board {
        self.board.as_ref().unwrap()
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        Ok(())
    }

    /// Prints an error to the console stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the ok footer to the console stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }
}
