use itertools::Itertools;
use nom::Parser;
use nom::branch::alt;
use nom::character::complete::{anychar, char, multispace1};
use nom::combinator::{eof, map_res, opt};
use nom::error::Error;
use pyraminx_core::{Direction, Section, Twist};

use crate::ParseError;

/// Characters accepted by [`multispace1`].
const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Parses a whitespace-separated twist sequence.
///
/// `L2` is parsed as two `L` twists, and `L2'` as two `L'` twists. Empty or
/// all-whitespace input is an empty sequence. Only ASCII whitespace separates
/// twists.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, ParseError> {
    let mut twists = vec![];
    let mut rest = s.trim_start_matches(WHITESPACE);
    while !rest.is_empty() {
        let offset = s.len() - rest.len();
        let (after, (twist, count)) = twist_token()
            .parse_complete(rest)
            .map_err(|_| bad_token(rest, offset))?;
        twists.extend(std::iter::repeat_n(twist, count));

        let offset = s.len() - after.len();
        let (after, _) = separator()
            .parse_complete(after)
            .map_err(|_| unexpected_char(after, offset))?;
        rest = after;
    }
    Ok(twists)
}

/// Parses a single twist such as `L'`.
pub fn parse_twist(s: &str) -> Result<Twist, ParseError> {
    parse_twists(s)?
        .into_iter()
        .exactly_one()
        .map_err(|_| ParseError::ExpectedOneTwist)
}

/// Parser for one twist and how many times it repeats.
fn twist_token<'a>() -> impl Parser<&'a str, Output = (Twist, usize), Error = Error<&'a str>> {
    (
        map_res(anychar, Section::from_letter),
        opt(char('2')),
        opt(char('\'')),
    )
        .map(|(section, double, prime)| {
            let direction = match prime {
                Some(_) => Direction::CounterClockwise,
                None => Direction::Clockwise,
            };
            let count = if double.is_some() { 2 } else { 1 };
            (Twist::new(section, direction), count)
        })
}

/// Parser for the whitespace between twists, or the end of input.
fn separator<'a>() -> impl Parser<&'a str, Output = &'a str, Error = Error<&'a str>> {
    alt((multispace1, eof))
}

fn bad_token(rest: &str, offset: usize) -> ParseError {
    match rest.chars().next() {
        Some(found) if found.is_alphabetic() => ParseError::InvalidSection { offset, found },
        _ => unexpected_char(rest, offset),
    }
}

fn unexpected_char(rest: &str, offset: usize) -> ParseError {
    ParseError::UnexpectedChar {
        offset,
        found: rest.chars().next().unwrap_or_default(),
    }
}
