// The single search flow shared by both modes:
// area -> query box -> fetch -> rank -> present.

use crate::api::{AirportSource, FetchError};
use crate::geo::{Mode, SearchArea};
use crate::input::{self, Prompter};
use crate::output;
use crate::rank::{self, Airport};
use anyhow::{Context, Result};
use std::io::Write;

/// What the fetch step produced. A failure is kept distinct here even
/// though it is presented exactly like an empty result.
#[derive(Debug)]
pub enum Fetched {
    Airports(Vec<Airport>),
    Failed(FetchError),
}

impl Fetched {
    pub fn into_airports(self) -> Vec<Airport> {
        match self {
            Fetched::Airports(airports) => airports,
            Fetched::Failed(e) => {
                log::warn!("search failed, treating as no results: {}", e);
                Vec::new()
            }
        }
    }
}

impl From<Result<Vec<Airport>, FetchError>> for Fetched {
    fn from(result: Result<Vec<Airport>, FetchError>) -> Self {
        match result {
            Ok(airports) => Fetched::Airports(airports),
            Err(e) => Fetched::Failed(e),
        }
    }
}

/// Summary of one run, mostly for callers that want to log or test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub mode: Mode,
    pub fetched: usize,
    pub shown: usize,
    pub failed: bool,
}

/// Interactively collect the area for `mode`.
pub fn collect(mode: Mode, prompter: &mut dyn Prompter) -> Result<SearchArea> {
    match mode {
        Mode::Area => input::collect_bounding_box(prompter),
        Mode::Around => input::collect_radius(prompter),
    }
}

/// Fetch, rank and print the airports for an already validated area.
pub fn run<W: Write>(area: SearchArea, source: &dyn AirportSource, out: &mut W) -> Result<Report> {
    let bbox = area.bounding_box();
    log::debug!("searching {:?} in {:?} mode", bbox, area.mode());

    let fetched = Fetched::from(source.airports_in(&bbox));
    let failed = matches!(fetched, Fetched::Failed(_));
    let mut airports = fetched.into_airports();
    let fetched = airports.len();

    rank::rank(&mut airports, area.reference_point());
    let shown = output::present(out, &airports, area.max_distance())
        .context("Failed to write results")?;
    out.flush().context("Failed to write results")?;

    log::info!("{} of {} airports shown", shown, fetched);
    Ok(Report {
        mode: area.mode(),
        fetched,
        shown,
        failed,
    })
}
