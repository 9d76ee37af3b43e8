//! The game session: handshake, then alternate server and player moves.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use super::channel::LineChannel;
use super::error::ClientError;
use crate::board::{Board, EndReason, Move, Side};
use crate::player::Player;

/// Time to initialize when the server's clock is not used.
const STANDALONE_INIT_TIME: Duration = Duration::from_secs(19);
/// Time per move when the server's clock is not used.
const STANDALONE_MOVE_TIME: Duration = Duration::from_secs(9);
/// Pause between idle polls while the opponent thinks.
const IDLE_TICK: Duration = Duration::from_millis(10);

/// How the session announces itself to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Play against the server itself; deadlines are local.
    Standalone,
    /// Join the game identified by the key; deadlines come from the server.
    Game(String),
}

impl Mode {
    fn line(&self) -> String {
        match self {
            Mode::Standalone => "MODE STANDALONE".to_string(),
            Mode::Game(key) => format!("MODE GAME {key}"),
        }
    }
}

/// Convert a server timestamp (microseconds since the Unix epoch) to a
/// local instant. Timestamps in the past map to now.
#[must_use]
pub fn deadline_from_micros(micros: i64) -> Instant {
    let now = Instant::now();
    let Ok(since_epoch) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return now;
    };
    let target = Duration::from_micros(micros.max(0).unsigned_abs());
    now + target.saturating_sub(since_epoch)
}

/// Drives one game between a channel and a player.
pub struct Session<C, P> {
    channel: C,
    player: P,
    mode: Mode,
    board: Board,
}

impl<C: LineChannel, P: Player> Session<C, P> {
    pub fn new(channel: C, player: P, mode: Mode) -> Self {
        Session {
            channel,
            player,
            mode,
            board: Board::new(),
        }
    }

    /// Position after the last applied move.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_parts(self) -> (C, P) {
        (self.channel, self.player)
    }

    fn deadline(&self, server: Instant, standalone: Duration) -> Instant {
        match self.mode {
            Mode::Standalone => Instant::now() + standalone,
            Mode::Game(_) => server,
        }
    }

    /// Play the game to its end and return the server's verdict.
    pub fn run(&mut self) -> Result<EndReason, ClientError> {
        self.channel.write_line(&self.mode.line())?;

        let line = self.read_blocking()?;
        let (deadline, first) = parse_init(&line).ok_or(ClientError::Handshake { line })?;
        let deadline = self.deadline(deadline, STANDALONE_INIT_TIME);
        self.player.initialize(first, deadline);
        self.channel.write_line("INIT")?;

        let to_move = if first { Side::Own } else { Side::Other };
        self.board = Board::starting(to_move);
        log::info!("game started, moving first: {first}");

        loop {
            let line = self.wait_for_opponent()?;
            let (deadline, mv) = parse_move_line(&line).ok_or(ClientError::Protocol { line })?;
            let deadline = self.deadline(deadline, STANDALONE_MOVE_TIME);

            match mv {
                Move::EndOfGame(reason) => {
                    log::info!("game over: {reason}");
                    return Ok(reason);
                }
                Move::Null => log::warn!("ignoring malformed move from server"),
                _ if self.board.find_possible_moves().contains(&mv) => self.board.do_move(&mv),
                _ => log::warn!("ignoring illegal move from server: {mv}"),
            }

            let reply = self.player.play(&self.board, deadline);
            self.channel.write_line(&reply.to_string())?;
            if let Move::EndOfGame(reason) = reply {
                log::info!("player ended the game: {reason}");
                return Ok(reason);
            }
            self.board.do_move(&reply);
        }
    }

    fn read_blocking(&mut self) -> Result<String, ClientError> {
        self.channel
            .read_line(true)?
            .ok_or(ClientError::ChannelClosed)
    }

    /// Poll the channel, letting the player use the wait, until a line
    /// arrives.
    fn wait_for_opponent(&mut self) -> Result<String, ClientError> {
        loop {
            if let Some(line) = self.channel.read_line(false)? {
                return Ok(line);
            }
            if self.player.idle(&self.board) {
                return self.read_blocking();
            }
            thread::sleep(IDLE_TICK);
        }
    }
}

/// `<deadline_us> <first>`, `first` non-zero if we move first.
fn parse_init(line: &str) -> Option<(Instant, bool)> {
    let mut tokens = line.split_whitespace();
    let micros = tokens.next()?.parse::<i64>().ok()?;
    let first = tokens.next()?.parse::<i64>().ok()?;
    Some((deadline_from_micros(micros), first != 0))
}

/// `<deadline_us> <move>`; a malformed move decodes to [`Move::Null`].
fn parse_move_line(line: &str) -> Option<(Instant, Move)> {
    let (micros, mv) = line.trim().split_once(' ')?;
    let micros = micros.parse::<i64>().ok()?;
    Some((deadline_from_micros(micros), Move::decode(mv)))
}
