// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use battletracker::{Board, GameTracker, Orientation};

/// Ship lengths of the standard fleet.
const FLEET: &[i32] = &[5, 4, 3, 3, 2];

/// Number of random positions tried for each ship before giving up on it.
const RANDOM_ATTEMPTS: usize = 1000;

/// Settings taken from the command line.
struct Options {
    /// Place the standard fleet at random before the first prompt.
    random_fleet: bool,
    /// Draw ships that have not been hit.
    reveal: bool,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            random_fleet: matches.is_present("random_fleet"),
            reveal: matches.is_present("reveal"),
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Place ships on a board and shoot them down.")
        .arg(
            Arg::with_name("random_fleet")
                .short("r")
                .long("random-fleet")
                .help("place the standard fleet at random before play"),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show ships that have not been hit yet"),
        )
        .get_matches();
    let options = Options::from_matches(&matches);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();
    let mut game = GameTracker::new();

    if options.random_fleet {
        place_random_fleet(&mut rng, &mut game);
    }
    play(&mut rng, &mut game, &options, &mut input)
}

/// Commands accepted at the prompt.
enum Command {
    Place(i32, i32, i32, Orientation),
    Fire(i32, i32),
    Random,
    Show,
    New,
    Help,
    Quit,
}

/// Run the prompt until the player quits or input ends.
fn play(
    rng: &mut impl Rng,
    game: &mut GameTracker,
    options: &Options,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    println!("Place ships, then fire at them. Type help or ? for commands.");
    loop {
        println!();
        let cmd = match input.read_input_lower("> ", parse_command)? {
            Some(cmd) => cmd,
            None => return Ok(()),
        };
        match cmd {
            Command::Place(x, y, length, dir) => match game.place_ship(x, y, length, dir) {
                Ok(()) => show_board(game.board(), true),
                Err(err) => report(&err),
            },
            Command::Fire(x, y) => match game.attack_position(x, y) {
                Ok(hit) => {
                    println!("{}", if hit { "Hit!" } else { "Miss." });
                    show_board(game.board(), options.reveal);
                    if game.is_game_over() {
                        println!("All ships destroyed! Type new to play again.");
                    }
                }
                Err(err) => report(&err),
            },
            Command::Random if game.board().game_begun() => {
                println!("Cannot place ships once shots have been fired.");
            }
            Command::Random => {
                place_random_fleet(rng, game);
                show_board(game.board(), true);
            }
            Command::Show => show_board(game.board(), options.reveal),
            Command::New => {
                game.start_new_game();
                println!("Started a new game.");
            }
            Command::Help => print_help(),
            Command::Quit => return Ok(()),
        }
    }
}

/// Parse one line of input. Prints a message and returns `None` if it is not a command.
fn parse_command(line: &str) -> Option<Command> {
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
        (?:(?:at|on)\s+)?
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)\s+
        (?P<len>-?[0-9]+)\s+
        (?P<dir>\w+)$",
        )
        .expect("place pattern")
    });
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:fire|attack|shoot)\s+
        (?:at\s+)?
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$",
        )
        .expect("fire pattern")
    });

    match line {
        "?" | "help" | "h" => Some(Command::Help),
        "random" | "rand" | "randomize" => Some(Command::Random),
        "show" | "board" => Some(Command::Show),
        "new" | "restart" => Some(Command::New),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => {
            if let Some(captures) = PLACE.captures(other) {
                let dir = match &captures["dir"] {
                    "h" | "horizontal" | "right" | "r" => Orientation::Horizontal,
                    "v" | "vertical" | "down" | "d" => Orientation::Vertical,
                    other => {
                        println!(
                            "invalid orientation {}, choose \"horizontal\" or \"vertical\"",
                            other
                        );
                        return None;
                    }
                };
                Some(Command::Place(
                    parse_number(&captures["x"])?,
                    parse_number(&captures["y"])?,
                    parse_number(&captures["len"])?,
                    dir,
                ))
            } else if let Some(captures) = FIRE.captures(other) {
                Some(Command::Fire(
                    parse_number(&captures["x"])?,
                    parse_number(&captures["y"])?,
                ))
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    }
}

/// Parse a number from the prompt, complaining if it does not fit in an `i32`.
fn parse_number(text: &str) -> Option<i32> {
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("invalid number: {}", text);
            None
        }
    }
}

/// Place every ship of the standard fleet at a random free position.
fn place_random_fleet(rng: &mut impl Rng, game: &mut GameTracker) {
    for &length in FLEET {
        let placed = (0..RANDOM_ATTEMPTS).any(|_| {
            let dir = rng.gen();
            match random_position(rng, game.board(), length, dir) {
                Some((x, y)) => game.place_ship(x, y, length, dir).is_ok(),
                None => false,
            }
        });
        if !placed {
            println!("Could not find room for a ship of length {}.", length);
        }
    }
    info!(
        "Random fleet placed, {} ships on the board",
        game.board().read_ship_list().len()
    );
}

/// Pick a start for a ship that stays on the board and does not cross another ship.
fn random_position(
    rng: &mut impl Rng,
    board: &Board,
    length: i32,
    dir: Orientation,
) -> Option<(i32, i32)> {
    let size = board.size() as i32;
    if length > size {
        return None;
    }
    let (max_x, max_y) = match dir {
        Orientation::Horizontal => (size - length, size - 1),
        Orientation::Vertical => (size - 1, size - length),
    };
    let x = rng.gen_range(0, max_x + 1);
    let y = rng.gen_range(0, max_y + 1);
    let free = (0..length).all(|i| {
        let (cx, cy) = match dir {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        };
        board
            .get_space(cx as usize, cy as usize)
            .map_or(false, |space| !space.contains_ship())
    });
    if free {
        Some((x, y))
    } else {
        None
    }
}

/// Print out the board with row and column numbers.
fn show_board(board: &Board, reveal: bool) {
    let rendered = board.build_board_string(reveal);
    print!("   ");
    for x in 0..board.size() {
        print!("{:^3}", x);
    }
    println!();
    for (y, row) in rendered.lines().enumerate() {
        print!("{:>2} ", y);
        for cell in row.chars() {
            print!("{:^3}", cell);
        }
        println!();
    }
}

/// Print an error along with everything that caused it.
fn report(err: &dyn Error) {
    print!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        print!(" ({})", cause);
        source = cause.source();
    }
    println!();
}

fn print_help() {
    println!(
        "Available Commands:
    place <x>,<y> <length> <dir>  place a ship starting at the given coordinate.
        <dir> is \"horizontal\" (extends right) or \"vertical\" (extends down).
    fire <x>,<y>                  fire at the given coordinate.
    random                        place the standard fleet (5, 4, 3, 3, 2) at random.
    show                          print the board.
    new                           discard this board and start a new game.
    quit                          leave the game.

Ships can only be placed before the first shot is fired."
    );
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// `false` at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        match parse_command("place 3,4 5 h") {
            Some(Command::Place(3, 4, 5, Orientation::Horizontal)) => {}
            _ => panic!("place not parsed"),
        }
        match parse_command("put at -1 2 3 vertical") {
            Some(Command::Place(-1, 2, 3, Orientation::Vertical)) => {}
            _ => panic!("put not parsed"),
        }
        match parse_command("fire at 6, 7") {
            Some(Command::Fire(6, 7)) => {}
            _ => panic!("fire not parsed"),
        }
        assert!(parse_command("place 3,4 5 diagonal").is_none());
        assert!(parse_command("fire 99999999999 0").is_none());
        assert!(parse_command("dance").is_none());
    }

    #[test]
    fn random_fleet_fills_board() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(11);
        let mut game = GameTracker::new();
        place_random_fleet(&mut rng, &mut game);
        let board = game.board();
        assert_eq!(board.read_ship_list().len(), FLEET.len());
        let occupied = board
            .read_board_spaces()
            .iter()
            .flat_map(|column| column.iter())
            .filter(|space| space.contains_ship())
            .count();
        assert_eq!(occupied, FLEET.iter().sum::<i32>() as usize);
    }

    #[test]
    fn input_reader_stops_at_eof() {
        let mut input = InputReader::new(&b"bogus\nshow\n"[..]);
        assert!(matches!(
            input.read_input_lower("> ", parse_command).unwrap(),
            Some(Command::Show)
        ));
        assert!(input.read_input_lower("> ", parse_command).unwrap().is_none());
    }
}
