// Distance ranking of fetched airports.

use crate::geo::Coordinate;

/// An airport returned by the search, with its distance to the
/// reference point once `rank` has run.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub distance: f64,
}

impl Airport {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Airport {
            name: name.into(),
            lon,
            lat,
            distance: 0.0,
        }
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

/// Planar distance in degree space. This is a flat approximation, not a
/// great-circle distance.
pub fn euclidean_distance(from: Coordinate, to: Coordinate) -> f64 {
    ((from.lon - to.lon).powi(2) + (from.lat - to.lat).powi(2)).sqrt()
}

/// Fill in every airport's distance to `reference` and sort closest
/// first. `sort_by` is stable, so equal distances keep arrival order.
pub fn rank(airports: &mut [Airport], reference: Coordinate) {
    for airport in airports.iter_mut() {
        airport.distance = euclidean_distance(reference, airport.position());
    }
    airports.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_four_five() {
        let d = euclidean_distance(Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn sorts_closest_first_and_keeps_ties_in_order() {
        let mut airports = vec![
            Airport::new("far", 10.0, 0.0),
            Airport::new("tie-a", 0.0, 1.0),
            Airport::new("near", 0.5, 0.0),
            Airport::new("tie-b", -1.0, 0.0),
        ];
        rank(&mut airports, Coordinate::new(0.0, 0.0));
        let names: Vec<_> = airports.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["near", "tie-a", "tie-b", "far"]);
        assert_eq!(airports[3].distance, 10.0);
    }

    fn airport_strategy() -> impl Strategy<Value = Airport> {
        (-5i32..5, -5i32..5).prop_map(|(lon, lat)| {
            Airport::new(format!("{lon}/{lat}"), lon as f64, lat as f64)
        })
    }

    proptest! {
        #[test]
        fn prop_distance_to_self_is_zero(lon in -180.0..180.0f64, lat in -90.0..90.0f64) {
            let p = Coordinate::new(lon, lat);
            prop_assert_eq!(euclidean_distance(p, p), 0.0);
        }

        #[test]
        fn prop_distance_is_symmetric(
            a in (-180.0..180.0f64, -90.0..90.0f64),
            b in (-180.0..180.0f64, -90.0..90.0f64)
        ) {
            let a = Coordinate::new(a.0, a.1);
            let b = Coordinate::new(b.0, b.1);
            prop_assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
        }

        #[test]
        fn prop_rank_is_idempotent(mut airports in prop::collection::vec(airport_strategy(), 0..20)) {
            let reference = Coordinate::new(0.5, -0.5);
            rank(&mut airports, reference);
            let once = airports.clone();
            rank(&mut airports, reference);
            prop_assert_eq!(&once, &airports);
            prop_assert!(airports.windows(2).all(|w| w[0].distance <= w[1].distance));
        }
    }
}
