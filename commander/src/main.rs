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
    fmt,
    io::{self, BufRead, Write},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{info, LevelFilter};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use simple_logger::SimpleLogger;

use hexfleet::{
    fleet::FleetError, HexGrid, NavState, OffsetCoordinate, Orientation, PixelPosition,
    ShipNavigator,
};

type Fleet<'g> = hexfleet::Fleet<'g, String>;

/// Matches `x,y` or `x y` pairs of possibly-negative decimal numbers.
static PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<a>-?[0-9]+(?:\.[0-9]+)?)(?:\s*,\s*|\s+)(?P<b>-?[0-9]+(?:\.[0-9]+)?)$")
        .unwrap()
});

fn main() -> io::Result<()> {
    let matches = App::new("Hex Commander")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Steer starships around a hex grid from the command line.")
        .arg(
            Arg::with_name("columns")
                .long("columns")
                .value_name("COLUMNS")
                .help("number of columns in the grid")
                .default_value("100"),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows in the grid")
                .default_value("100"),
        )
        .arg(
            Arg::with_name("radius")
                .long("radius")
                .value_name("PIXELS")
                .help("distance from a cell centre to its corners")
                .default_value("20"),
        )
        .arg(
            Arg::with_name("origin")
                .long("origin")
                .value_name("X,Y")
                .help("pixel centre of cell 0,0")
                .default_value("0,0"),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("COL,ROW")
                .help("starting cell of the flagship")
                .default_value("0,0"),
        )
        .arg(
            Arg::with_name("heading")
                .long("heading")
                .value_name("HEADING")
                .help("starting heading of the flagship")
                .default_value("east"),
        )
        .arg(
            Arg::with_name("random_start")
                .long("random-start")
                .help("start the flagship at a random cell and heading, ignoring --start"),
        )
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .help("log verbosity")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .case_insensitive(true)
                .default_value("warn"),
        )
        .get_matches();

    let level = value_t!(matches, "log_level", LevelFilter).unwrap_or_else(|e| e.exit());
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let grid = build_grid(&matches)?;
    info!(
        "grid of {}x{} cells, radius {}",
        grid.dimensions().columns(),
        grid.dimensions().rows(),
        grid.layout().radius()
    );

    let start = choose_start(&matches, &grid)?;
    let mut fleet = Fleet::new(&grid);
    let mut selected = String::from("flagship");
    if let Err(err) = fleet.add_ship(selected.clone(), start) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()));
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    println!("Type help or ? for commands.");
    command_loop(&mut fleet, &mut selected, &mut input)
}

/// Build the grid from the command line options.
fn build_grid(matches: &ArgMatches) -> io::Result<HexGrid> {
    let columns = value_t!(matches, "columns", u32).unwrap_or_else(|e| e.exit());
    let rows = value_t!(matches, "rows", u32).unwrap_or_else(|e| e.exit());
    let radius = value_t!(matches, "radius", f32).unwrap_or_else(|e| e.exit());
    let (x, y) = matches
        .value_of("origin")
        .and_then(|origin| parse_pair::<f32>(origin))
        .ok_or_else(|| invalid_input("origin must be given as X,Y"))?;
    HexGrid::try_new(PixelPosition::new(x, y), radius, columns, rows)
        .map_err(|e| invalid_input(e.to_string()))
}

/// Pick the flagship's starting state from the command line options.
fn choose_start(matches: &ArgMatches, grid: &HexGrid) -> io::Result<NavState> {
    if matches.is_present("random_start") {
        let mut rng = rand::thread_rng();
        let position = grid.dimensions().random_cell(&mut rng);
        return Ok(NavState::new(position, rng.gen()));
    }
    let (col, row) = matches
        .value_of("start")
        .and_then(|start| parse_pair::<i32>(start))
        .ok_or_else(|| invalid_input("start must be given as COL,ROW"))?;
    let heading = value_t!(matches, "heading", Orientation).unwrap_or_else(|e| e.exit());
    Ok(NavState::new(OffsetCoordinate::new(col, row), heading))
}

fn invalid_input<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

/// Parse an `a,b` pair.
fn parse_pair<T: std::str::FromStr>(text: &str) -> Option<(T, T)> {
    let captures = PAIR.captures(text.trim())?;
    Some((captures["a"].parse().ok()?, captures["b"].parse().ok()?))
}

enum Command {
    Forward,
    Back,
    Left,
    Right,
    MoveTo(OffsetCoordinate),
    Click(PixelPosition),
    Spawn(String, OffsetCoordinate, Orientation),
    Select(String),
    Standby,
    Status,
    Map,
    Help,
    Quit,
}

/// Read and run operator commands until the operator quits.
fn command_loop(
    fleet: &mut Fleet,
    selected: &mut String,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    /// Matchers for commands with args.
    static MOVE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:move|goto|jump)\s+(?P<pos>-?[0-9]+(?:\s*,\s*|\s+)-?[0-9]+)$").unwrap()
    });
    static CLICK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^click\s+(?P<pos>-?[0-9.]+(?:\s*,\s*|\s+)-?[0-9.]+)$").unwrap()
    });
    static SPAWN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)spawn\s+
        (?P<name>\w+)\s+
        (?:(?:at|on|to)\s+)?
        (?P<pos>-?[0-9]+(?:\s*,\s*|\s+)-?[0-9]+)
        (?:\s+(?P<dir>\w+))?$",
        )
        .unwrap()
    });
    static SELECT: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?:select|ship)\s+(?P<name>\w+)$").unwrap());

    loop {
        println!();
        let cmd = input.read_input_lower(&format!("[{}] >", selected), |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "forward" | "f" | "up" => Some(Command::Forward),
            "back" | "b" | "down" => Some(Command::Back),
            "left" | "l" => Some(Command::Left),
            "right" | "r" => Some(Command::Right),
            "standby" | "end" => Some(Command::Standby),
            "status" | "s" => Some(Command::Status),
            "map" | "m" => Some(Command::Map),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = MOVE.captures(other) {
                    offset_arg(&captures).map(Command::MoveTo)
                } else if let Some(captures) = CLICK.captures(other) {
                    match parse_pair::<f32>(&captures["pos"]) {
                        Some((x, y)) => Some(Command::Click(PixelPosition::new(x, y))),
                        None => {
                            println!("invalid pixel position: {}", &captures["pos"]);
                            None
                        }
                    }
                } else if let Some(captures) = SPAWN.captures(other) {
                    let heading = match captures.name("dir") {
                        None => Orientation::East,
                        Some(dir) => match dir.as_str().parse() {
                            Ok(heading) => heading,
                            Err(err) => {
                                println!("{}", err);
                                return None;
                            }
                        },
                    };
                    offset_arg(&captures)
                        .map(|pos| Command::Spawn(captures["name"].to_owned(), pos, heading))
                } else if let Some(captures) = SELECT.captures(other) {
                    Some(Command::Select(captures["name"].to_owned()))
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Quit => return Ok(()),
            Command::Help => print_help(),
            Command::Select(name) => {
                if fleet.get(&name).is_some() {
                    *selected = name;
                    show_status(fleet, selected);
                } else {
                    println!("No ship named {}.", name);
                }
            }
            Command::Spawn(name, position, heading) => {
                let spawned = fleet
                    .add_ship(name.clone(), NavState::new(position, heading))
                    .map(|_| ());
                match spawned {
                    Ok(()) => {
                        *selected = name;
                        show_status(fleet, selected);
                    }
                    Err(FleetError::Duplicate(_)) => {
                        println!("A ship named {} is already in play.", name)
                    }
                    Err(FleetError::Placement(err)) => {
                        println!("Cannot spawn: {}.", err.reason())
                    }
                }
            }
            Command::Click(pixel) => {
                let under_cursor = fleet.ships_at_pixel(pixel).next().cloned();
                match under_cursor {
                    Some(name) => {
                        *selected = name;
                        show_status(fleet, selected);
                    }
                    None => {
                        let target = fleet.grid().pixel_to_offset(pixel);
                        steer(fleet, selected, |nav| nav.move_to(target).map(|_| ()));
                    }
                }
            }
            Command::Map => show_map(fleet, selected),
            Command::Status => show_status(fleet, selected),
            Command::Forward => steer(fleet, selected, |nav| nav.move_forward().map(|_| ())),
            Command::Back => steer(fleet, selected, |nav| nav.move_backward().map(|_| ())),
            Command::MoveTo(target) => {
                steer(fleet, selected, |nav| nav.move_to(target).map(|_| ()))
            }
            Command::Left => steer(fleet, selected, |nav| {
                nav.rotate_left();
                Ok(())
            }),
            Command::Right => steer(fleet, selected, |nav| {
                nav.rotate_right();
                Ok(())
            }),
            Command::Standby => steer(fleet, selected, |nav| {
                if nav.on_turn() {
                    nav.stand_down();
                } else {
                    nav.take_turn();
                }
                Ok(())
            }),
        }
    }
}

/// Pull a `col,row` coordinate out of a matched command.
fn offset_arg(captures: &Captures) -> Option<OffsetCoordinate> {
    match parse_pair::<i32>(&captures["pos"]) {
        Some(pair) => Some(pair.into()),
        None => {
            println!("invalid coordinate: {}", &captures["pos"]);
            None
        }
    }
}

/// Apply an operation to the selected ship and report the outcome.
fn steer<F>(fleet: &mut Fleet, selected: &str, op: F)
where
    F: FnOnce(&mut ShipNavigator) -> Result<(), hexfleet::ships::MoveError>,
{
    let nav = match fleet.get_mut(selected) {
        Some(nav) => nav,
        None => {
            println!("No ship selected.");
            return;
        }
    };
    if let Err(err) = op(nav) {
        println!("Invalid move, reverted: {}.", err.reason());
    }
    show_status(fleet, selected);
}

/// Print what a renderer would need to draw the selected ship.
fn show_status(fleet: &Fleet, selected: &str) {
    let nav = match fleet.get(selected) {
        Some(nav) => nav,
        None => return,
    };
    let open_headings = nav.open_headings();
    let open: Vec<_> = Orientation::ALL
        .iter()
        .filter(|&&heading| open_headings.contains(heading))
        .map(ToString::to_string)
        .collect();
    println!(
        "{}: cell {} heading {} | pixel {} rotation {}° | {}",
        selected,
        nav.position(),
        nav.heading(),
        nav.pixel_position(),
        nav.rotation_degrees(),
        if nav.on_turn() { "on turn" } else { "standing by" },
    );
    println!("    clear headings: {}", open.join(", "));
}

/// Print the area of the grid around the selected ship. Odd rows are indented by half a
/// cell to show the shifted layout.
fn show_map(fleet: &Fleet, selected: &str) {
    enum MapCell {
        Empty,
        Ship(char),
        Selected(char),
    }
    impl fmt::Display for MapCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                MapCell::Empty => f.pad("."),
                MapCell::Ship(c) => f.pad(&c.to_string()),
                MapCell::Selected(c) => f.pad(&format!("[{}]", c)),
            }
        }
    }
    const HALF_WIDTH: i32 = 8;
    const HALF_HEIGHT: i32 = 5;

    let dim = *fleet.grid().dimensions();
    let center = fleet
        .get(selected)
        .map_or(OffsetCoordinate::new(0, 0), |nav| nav.position());
    let window = |mid: i32, half: i32, len: i32| {
        let lo = (mid - half).max(0).min((len - 2 * half - 1).max(0));
        lo..(lo + 2 * half + 1).min(len)
    };
    let cols = window(center.col, HALF_WIDTH, dim.columns());
    let rows = window(center.row, HALF_HEIGHT, dim.rows());

    print!("     ");
    for col in cols.clone() {
        print!("{:^4}", col);
    }
    println!();
    for row in rows {
        print!("{:>4} ", row);
        if row & 1 != 0 {
            print!("  ");
        }
        for col in cols.clone() {
            let coord = OffsetCoordinate::new(col, row);
            let cell = match fleet.ships_at(coord).next() {
                None => MapCell::Empty,
                Some(name) => {
                    let initial = name.chars().next().unwrap_or('?');
                    if name == selected {
                        MapCell::Selected(initial.to_ascii_uppercase())
                    } else {
                        MapCell::Ship(initial)
                    }
                }
            };
            print!("{:^4}", cell);
        }
        println!();
    }
}

fn print_help() {
    println!(
        "Available Commands:
    forward (f)                 move the selected ship one cell along its heading.
    back (b)                    move the selected ship one cell backwards, keeping its heading.
    left (l) / right (r)        turn the selected ship 60 degrees.
    move <col>,<row>            jump the selected ship to the given cell.
    click <x>,<y>               select the ship under the pixel, or move the selected ship
        to the cell under it.
    spawn <name> <col>,<row> [heading]
                                put a new ship into play and select it. Headings are
        \"e\", \"se\", \"sw\", \"w\", \"nw\" and \"ne\".
    select <name>               select a ship by name.
    standby                     toggle whether the selected ship may change position.
    status (s)                  show the selected ship's position and heading.
    map (m)                     show the grid around the selected ship.
    quit (q)                    leave the game."
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
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        assert_eq!(parse_pair::<i32>("3,4"), Some((3, 4)));
        assert_eq!(parse_pair::<i32>(" -1 , 2 "), Some((-1, 2)));
        assert_eq!(parse_pair::<i32>("7 9"), Some((7, 9)));
        assert_eq!(parse_pair::<f32>("12.5,-3"), Some((12.5, -3.)));
        assert_eq!(parse_pair::<i32>("1.5,2"), None);
        assert_eq!(parse_pair::<i32>("north"), None);
    }
}
