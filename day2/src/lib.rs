use std::{fmt, sync::OnceLock};

use parse_ints::parse_leading;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    Forward,
    Up,
    Down,
}

impl Direction {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "forward" => Some(Self::Forward),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// One decoded line of the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Command {
    pub direction: Direction,
    #[cfg_attr(test, proptest(strategy = "0..=i32::MAX"))]
    pub magnitude: i32,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction.as_str(), self.magnitude)
    }
}

/// How strictly a command line is checked before it's accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// The word must be exact, then the leading digits after the space are
    /// the magnitude and anything trailing them is ignored.
    #[default]
    Lenient,
    /// The whole line must match `^(forward|up|down) ([0-9]+)$`.
    Strict,
}

/// Decodes one line. `None` means the line has no effect on the course.
pub fn parse_command(line: &str, mode: ParseMode) -> Option<Command> {
    match mode {
        ParseMode::Strict => parse_strict(line),
        ParseMode::Lenient => parse_lenient(line),
    }
}

fn parse_strict(line: &str) -> Option<Command> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^(forward|up|down) ([0-9]+)$").expect("command pattern is a valid regex")
    });
    let caps = re.captures(line)?;
    let direction = Direction::from_word(&caps[1])?;
    let magnitude = caps[2].parse::<i32>().ok()?;
    Some(Command {
        direction,
        magnitude,
    })
}

fn parse_lenient(line: &str) -> Option<Command> {
    let (word, rest) = line.split_once(' ')?;
    let direction = Direction::from_word(word)?;
    let magnitude = parse_leading(rest.as_bytes()).and_then(|n| i32::try_from(n).ok())?;
    Some(Command {
        direction,
        magnitude,
    })
}

/// Decodes every line, keeping the ignored ones as `None`.
pub fn parse_input(puzzle: &str, mode: ParseMode) -> Vec<Option<Command>> {
    puzzle
        .lines()
        .map(|line| parse_command(line, mode))
        .collect()
}

/// Something that can be steered by a course of commands.
pub trait Navigator: Default {
    fn apply(&mut self, command: Command);

    fn horizontal(&self) -> i32;

    fn depth(&self) -> i32;

    fn product(&self) -> i64 {
        i64::from(self.horizontal()) * i64::from(self.depth())
    }
}

/// Runs a whole course from the surface. Ignored lines leave the navigator as is.
pub fn pilot<N: Navigator>(commands: impl IntoIterator<Item = Option<Command>>) -> N {
    let mut navigator = N::default();
    for command in commands.into_iter().flatten() {
        navigator.apply(command);
    }
    navigator
}

/// Up and down move the submarine directly.
///
/// A command whose effect doesn't fit in the `i32` fields is skipped, the
/// same as a line that doesn't parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i32,
    pub depth: i32,
}

impl Position {
    pub fn delta(command: Command) -> Self {
        let Command {
            direction,
            magnitude,
        } = command;
        match direction {
            Direction::Forward => Self {
                horizontal: magnitude,
                depth: 0,
            },
            Direction::Up => Self {
                horizontal: 0,
                depth: -magnitude,
            },
            Direction::Down => Self {
                horizontal: 0,
                depth: magnitude,
            },
        }
    }

    /// Field-wise sum, or `None` if either field overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            horizontal: self.horizontal.checked_add(rhs.horizontal)?,
            depth: self.depth.checked_add(rhs.depth)?,
        })
    }
}

impl Navigator for Position {
    fn apply(&mut self, command: Command) {
        if let Some(next) = self.checked_add(Self::delta(command)) {
            *self = next;
        }
    }

    fn horizontal(&self) -> i32 {
        self.horizontal
    }

    fn depth(&self) -> i32 {
        self.depth
    }
}

/// The change in position caused by a single line.
pub fn navigate(line: &str, mode: ParseMode) -> Position {
    parse_command(line, mode)
        .map(Position::delta)
        .unwrap_or_default()
}

/// Up and down only tilt the submarine; forward then dives along the aim.
///
/// Like [`Position`], a command that would overflow a field leaves the
/// position untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AimedPosition {
    pub horizontal: i32,
    pub depth: i32,
    pub aim: i32,
}

impl AimedPosition {
    pub fn forward(&mut self, magnitude: i32) {
        let Some(horizontal) = self.horizontal.checked_add(magnitude) else {
            return;
        };
        let Some(depth) = self
            .aim
            .checked_mul(magnitude)
            .and_then(|dive| self.depth.checked_add(dive))
        else {
            return;
        };
        self.horizontal = horizontal;
        self.depth = depth;
    }

    pub fn up(&mut self, magnitude: i32) {
        if let Some(aim) = self.aim.checked_sub(magnitude) {
            self.aim = aim;
        }
    }

    pub fn down(&mut self, magnitude: i32) {
        if let Some(aim) = self.aim.checked_add(magnitude) {
            self.aim = aim;
        }
    }
}

impl Navigator for AimedPosition {
    fn apply(&mut self, command: Command) {
        match command.direction {
            Direction::Forward => self.forward(command.magnitude),
            Direction::Up => self.up(command.magnitude),
            Direction::Down => self.down(command.magnitude),
        }
    }

    fn horizontal(&self) -> i32 {
        self.horizontal
    }

    fn depth(&self) -> i32 {
        self.depth
    }
}

pub fn solve_puzzle_part1(commands: &[Option<Command>]) -> i64 {
    pilot::<Position>(commands.iter().copied()).product()
}

pub fn solve_puzzle_part2(commands: &[Option<Command>]) -> i64 {
    pilot::<AimedPosition>(commands.iter().copied()).product()
}
