// Input collection: interactive prompts (terminal or plain lines) and the
// fixed-order argument form of the radius search.

use crate::geo::{BoundingBox, Coordinate, SearchArea};
use anyhow::{Context, Result};
use dialoguer::Input;
use std::fmt;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Usage block printed when the radius arguments are malformed.
pub const USAGE: &str = "\
Find airports by distance. Insert a coordinate and search radius to get a list of airports sorted by distance.
Usage:

airport-finder around -lon -lat -d
Call without arguments for interactive mode

OPTIONS:
-lon\tLongitude value, between -180 and 180
-lat\tLatitude value, between -90 and 90
-d\tSearch distance radius in degrees, values between 0 and 360
--help\tShow this message";

/// Kind of scalar being read, with its closed range `[-limit, limit]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Longitude,
    Latitude,
    Distance,
}

impl Limit {
    pub fn value(self) -> f64 {
        match self {
            Limit::Longitude => 180.0,
            Limit::Latitude => 90.0,
            Limit::Distance => 360.0,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Limit::Longitude => "Longitude",
            Limit::Latitude => "Latitude",
            Limit::Distance => "Distance",
        };
        f.write_str(name)
    }
}

/// A value that did not parse or fell outside its range. The message is
/// the corrective text shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Please insert a valid {kind}: Values between -{limit} and {limit}", limit = .kind.value())]
pub struct InvalidValue {
    pub kind: Limit,
}

/// Parse a float and check it lies within `[-limit, limit]`.
pub fn parse_bounded(text: &str, kind: Limit) -> Result<f64, InvalidValue> {
    let value: f64 = text.trim().parse().map_err(|_| InvalidValue { kind })?;
    let limit = kind.value();
    // NaN fails both comparisons, so reject it explicitly.
    if value.is_nan() || value > limit || value < -limit {
        return Err(InvalidValue { kind });
    }
    Ok(value)
}

/// Input ran out before a valid value was given.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("input ended before a valid {kind} was given")]
pub struct InputClosed {
    pub kind: Limit,
}

/// Source of validated scalars. Implementations re-prompt until a valid
/// value is given and only fail when input can no longer be read.
pub trait Prompter {
    fn ask(&mut self, question: &str, kind: Limit) -> Result<f64>;

    /// Printed once before the first question of an interactive session.
    fn banner(&mut self, banner: &str) -> Result<()>;
}

/// Prompter backed by `dialoguer`, used when stdin is a terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str, kind: Limit) -> Result<f64> {
        // `validate_with` keeps dialoguer re-prompting with our message
        // until the text parses and is in range.
        let text: String = Input::new()
            .with_prompt(question)
            .validate_with(move |input: &String| parse_bounded(input, kind).map(|_| ()))
            .interact_text()
            .context("Failed to read from terminal")?;
        Ok(parse_bounded(&text, kind)?)
    }

    fn banner(&mut self, banner: &str) -> Result<()> {
        println!("{}", banner);
        Ok(())
    }
}

/// Line oriented prompter for piped stdin (and tests): writes the
/// question, reads one line, repeats on invalid input.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LinePrompter { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str, kind: Limit) -> Result<f64> {
        loop {
            writeln!(self.writer, "{} :", question)?;
            self.writer.flush()?;
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputClosed { kind }.into());
            }
            match parse_bounded(&line, kind) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected {:?} for {}", line.trim(), kind);
                    writeln!(self.writer, "\n{}", e)?;
                }
            }
        }
    }

    fn banner(&mut self, banner: &str) -> Result<()> {
        writeln!(self.writer, "{}", banner)?;
        Ok(())
    }
}

pub const AREA_BANNER: &str = "\
********************************************
***** Airports in a given area locator *****
********************************************";

pub const AROUND_BANNER: &str = "\
*********************************
***** Airports in your area *****
*********************************";

/// Ask for two longitudes and two latitudes and normalize them into a box.
pub fn collect_bounding_box(prompter: &mut dyn Prompter) -> Result<SearchArea> {
    prompter.banner(AREA_BANNER)?;
    let lon_start = prompter.ask(
        "Type the value for the Longitude start coordinate",
        Limit::Longitude,
    )?;
    let lon_end = prompter.ask(
        "Type the value for the Longitude end coordinate",
        Limit::Longitude,
    )?;
    let lat_start = prompter.ask(
        "Type the value for the Latitude start coordinate",
        Limit::Latitude,
    )?;
    let lat_end = prompter.ask(
        "Type the value for the Latitude end coordinate",
        Limit::Latitude,
    )?;
    Ok(SearchArea::Box(BoundingBox::normalized(
        (lon_start, lon_end),
        (lat_start, lat_end),
    )))
}

/// Ask for a position and a search distance.
pub fn collect_radius(prompter: &mut dyn Prompter) -> Result<SearchArea> {
    prompter.banner(AROUND_BANNER)?;
    let lon = prompter.ask("Type the value for your Longitude position", Limit::Longitude)?;
    let lat = prompter.ask("Type the value for your Latitude position", Limit::Latitude)?;
    let distance = prompter.ask(
        "Type the value for the search distance (in Degrees)",
        Limit::Distance,
    )?;
    Ok(SearchArea::radius(Coordinate::new(lon, lat), distance))
}

/// Why a radius argument list was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UsageError {
    #[error("expected 0 or 6 arguments, got {0}")]
    ArgumentCount(usize),

    #[error("expected flag {expected}, found {found:?}")]
    UnexpectedFlag { expected: &'static str, found: String },

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
}

/// Result of reading the radius arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum RadiusArgs {
    /// No arguments: ask interactively.
    Interactive,
    Given(SearchArea),
}

const RADIUS_FLAGS: [(&str, Limit); 3] = [
    ("-lon", Limit::Longitude),
    ("-lat", Limit::Latitude),
    ("-d", Limit::Distance),
];

/// Accepts exactly `-lon <v> -lat <v> -d <v>` in that order, or nothing.
pub fn parse_radius_args<S: AsRef<str>>(args: &[S]) -> Result<RadiusArgs, UsageError> {
    if args.is_empty() {
        return Ok(RadiusArgs::Interactive);
    }
    if args.len() != RADIUS_FLAGS.len() * 2 {
        return Err(UsageError::ArgumentCount(args.len()));
    }

    let mut values = [0.0; 3];
    for (i, (flag, kind)) in RADIUS_FLAGS.iter().enumerate() {
        let found = args[i * 2].as_ref();
        if found != *flag {
            return Err(UsageError::UnexpectedFlag {
                expected: *flag,
                found: found.to_string(),
            });
        }
        let raw = args[i * 2 + 1].as_ref();
        values[i] = parse_bounded(raw, *kind).map_err(|_| UsageError::InvalidValue {
            flag: *flag,
            value: raw.to_string(),
        })?;
    }

    Ok(RadiusArgs::Given(SearchArea::radius(
        Coordinate::new(values[0], values[1]),
        values[2],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn line_prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_bounded("180", Limit::Longitude), Ok(180.0));
        assert_eq!(parse_bounded(" -90\n", Limit::Latitude), Ok(-90.0));
        assert!(parse_bounded("180.5", Limit::Longitude).is_err());
        assert!(parse_bounded("-360.01", Limit::Distance).is_err());
        assert!(parse_bounded("NaN", Limit::Distance).is_err());
        assert!(parse_bounded("abc", Limit::Latitude).is_err());
    }

    #[test]
    fn corrective_message_names_the_range() {
        let err = parse_bounded("200", Limit::Longitude).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please insert a valid Longitude: Values between -180 and 180"
        );
    }

    #[test]
    fn line_prompter_reprompts_until_valid() -> Result<()> {
        let mut prompter = line_prompter("foo\n95\n45.5\n");
        let value = prompter.ask("Latitude?", Limit::Latitude)?;
        assert_eq!(value, 45.5);

        let (_, out) = prompter.into_inner();
        let out = String::from_utf8(out)?;
        assert_eq!(out.matches("Latitude? :").count(), 3);
        assert_eq!(
            out.matches("Please insert a valid Latitude: Values between -90 and 90").count(),
            2
        );
        Ok(())
    }

    #[test]
    fn line_prompter_reports_closed_input() {
        let mut prompter = line_prompter("bad\n");
        let err = prompter.ask("Longitude?", Limit::Longitude).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputClosed>(),
            Some(&InputClosed {
                kind: Limit::Longitude
            })
        );
    }

    #[test]
    fn collects_normalized_box() -> Result<()> {
        let mut prompter = line_prompter("10\n-10\n5\n-5\n");
        let area = collect_bounding_box(&mut prompter)?;
        assert_eq!(
            area,
            SearchArea::Box(BoundingBox::normalized((-10.0, 10.0), (-5.0, 5.0)))
        );
        Ok(())
    }

    #[test]
    fn collects_radius_with_absolute_distance() -> Result<()> {
        let mut prompter = line_prompter("4.35\n50.85\n-2\n");
        let area = collect_radius(&mut prompter)?;
        assert_eq!(area, SearchArea::radius(Coordinate::new(4.35, 50.85), 2.0));
        assert_eq!(area.max_distance(), Some(2.0));
        Ok(())
    }

    #[test]
    fn no_arguments_means_interactive() {
        let args: [&str; 0] = [];
        assert_eq!(parse_radius_args(&args), Ok(RadiusArgs::Interactive));
    }

    #[test]
    fn fixed_order_arguments_are_accepted() {
        let args = ["-lon", "4.35", "-lat", "50.85", "-d", "-1.5"];
        assert_eq!(
            parse_radius_args(&args),
            Ok(RadiusArgs::Given(SearchArea::radius(
                Coordinate::new(4.35, 50.85),
                1.5
            )))
        );
    }

    #[test]
    fn flags_out_of_order_are_rejected() {
        let args = ["-lat", "50", "-lon", "4", "-d", "1"];
        assert_eq!(
            parse_radius_args(&args),
            Err(UsageError::UnexpectedFlag {
                expected: "-lon",
                found: "-lat".to_string(),
            })
        );
    }

    #[test]
    fn wrong_count_and_bad_values_are_rejected() {
        assert_eq!(
            parse_radius_args(&["--help"]),
            Err(UsageError::ArgumentCount(1))
        );
        assert_eq!(
            parse_radius_args(&["-lon", "4", "-lat", "91", "-d", "1"]),
            Err(UsageError::InvalidValue {
                flag: "-lat",
                value: "91".to_string(),
            })
        );
        assert!(parse_radius_args(&["-lon", "x", "-lat", "1", "-d", "1"]).is_err());
    }
}
