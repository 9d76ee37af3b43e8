use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use checkers_engine::board::{Board, EndReason, Side};
use checkers_engine::client::{Mode, Session, StdioChannel};
use checkers_engine::engine::EngineOptions;
use checkers_engine::player::{Player, RandomPlayer, SearchPlayer};

/// Self-play games are called a draw after this many plies.
const SELF_PLAY_MAX_PLIES: usize = 200;

struct Args {
    mode: Mode,
    self_play: bool,
    random: bool,
    list_options: bool,
    move_time: Duration,
    options: EngineOptions,
}

fn usage() -> &'static str {
    "usage: checkers [--game KEY] [--random] [--self-play] [--move-time MS] \
     [--set NAME=VALUE]... [--list-options]"
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        mode: Mode::Standalone,
        self_play: false,
        random: false,
        list_options: false,
        move_time: Duration::from_millis(1000),
        options: EngineOptions::default(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--game" => {
                let key = iter.next().ok_or("--game needs a key")?;
                args.mode = Mode::Game(key);
            }
            "--self-play" => args.self_play = true,
            "--random" => args.random = true,
            "--list-options" => args.list_options = true,
            "--move-time" => {
                let ms = iter
                    .next()
                    .and_then(|v| v.parse::<u64>().ok())
                    .ok_or("--move-time needs milliseconds")?;
                args.move_time = Duration::from_millis(ms);
            }
            "--set" => {
                let assignment = iter.next().ok_or("--set needs name=value")?;
                args.options.apply_assignment(&assignment);
            }
            "-h" | "--help" => return Err(usage().to_string()),
            other => return Err(format!("unknown argument {other:?}\n{}", usage())),
        }
    }
    Ok(args)
}

/// The configured player; `search` is used unless `--random` was given.
fn make_player(random: bool, search: SearchPlayer) -> Box<dyn Player> {
    if random {
        Box::new(RandomPlayer::new())
    } else {
        Box::new(search)
    }
}

/// Both sides played locally. The second player sees the board flipped, as
/// a server would present it.
fn self_play(args: &Args) -> EndReason {
    let mut own = make_player(args.random, SearchPlayer::new(&args.options));
    let mut other: Box<dyn Player> = Box::new(SearchPlayer::new(&args.options));
    let deadline = || Instant::now() + args.move_time;
    own.initialize(true, deadline());
    other.initialize(false, deadline());

    let mut board = Board::new();
    for ply in 0..SELF_PLAY_MAX_PLIES {
        if board.game_over() {
            println!("{board}");
            return match board.side_to_move() {
                Side::Own => EndReason::Loss,
                Side::Other => EndReason::Win,
            };
        }
        let mv = match board.side_to_move() {
            Side::Own => own.play(&board, deadline()),
            Side::Other => other.play(&board.flipped(), deadline()).mirror(),
        };
        if mv.is_null() {
            log::warn!("player returned no move at ply {ply}");
            return EndReason::Draw;
        }
        println!("{ply:3} {}: {mv}", board.side_to_move());
        board.do_move(&mv);
    }
    println!("{board}");
    EndReason::Draw
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if args.list_options {
        for line in args.options.option_lines() {
            println!("{line}");
        }
        return ExitCode::SUCCESS;
    }

    if args.self_play {
        let result = self_play(&args);
        println!("result for own side: {result}");
        return ExitCode::SUCCESS;
    }

    let player = SearchPlayer::new(&args.options);
    let channel = StdioChannel::stdio(player.stop_flag());
    let player = make_player(args.random, player);
    let mut session = Session::new(channel, player, args.mode);
    match session.run() {
        Ok(reason) => {
            log::info!("{}", verdict(reason));
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn verdict(reason: EndReason) -> &'static str {
    match reason {
        EndReason::Win => "YOU WIN",
        EndReason::Loss => "YOU LOSE",
        EndReason::Draw => "DRAW",
        EndReason::Invalid(_) => "INVALID GAME",
    }
}
