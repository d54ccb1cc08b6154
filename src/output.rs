// Presenter: renders the ranked airports as plain text.

use crate::rank::Airport;
use std::io::{self, Write};

pub const NO_RESULTS: &str = "No airports found in the designated area";

/// Write `airports` (already ranked) to `out`.
///
/// An empty list gets the fixed no-results line. With `max_distance` set
/// (radius mode) records farther than it are skipped while printing,
/// since the query box over-fetches the circle, and each record also
/// shows its distance. Returns the number of records shown.
pub fn present<W: Write>(
    out: &mut W,
    airports: &[Airport],
    max_distance: Option<f64>,
) -> io::Result<usize> {
    if airports.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
        return Ok(0);
    }

    let mut shown = 0;
    for airport in airports {
        if max_distance.map_or(false, |max| airport.distance > max) {
            continue;
        }
        write!(
            out,
            "Airport\t{}\nLongitude\t{}\nLatitude\t{}\n",
            airport.name, airport.lon, airport.lat
        )?;
        if max_distance.is_some() {
            writeln!(out, "Distance\t{}", airport.distance)?;
        }
        writeln!(out)?;
        shown += 1;
    }
    Ok(shown)
}
