// Geometry shared by both search modes: coordinates, the box sent to the
// search service and the point results are ranked against.

/// A (longitude, latitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinate { lon, lat }
    }
}

/// Axis-aligned box in degree space. After `normalized` or `around`
/// `lon_min <= lon_max` and `lat_min <= lat_max` hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    /// Build a box from two user supplied corners, swapping each axis
    /// into ascending order when the values were typed in reverse.
    pub fn normalized(lon: (f64, f64), lat: (f64, f64)) -> Self {
        let (lon_min, lon_max) = sort_pair(lon.0, lon.1);
        let (lat_min, lat_max) = sort_pair(lat.0, lat.1);
        BoundingBox {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// Square box of half-width `radius` around `center`. Not clamped to
    /// the legal coordinate range; the search service accepts overshoot.
    pub fn around(center: Coordinate, radius: f64) -> Self {
        BoundingBox {
            lon_min: center.lon - radius,
            lon_max: center.lon + radius,
            lat_min: center.lat - radius,
            lat_max: center.lat + radius,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            lon: (self.lon_min + self.lon_max) / 2.0,
            lat: (self.lat_min + self.lat_max) / 2.0,
        }
    }
}

/// Returns `(min, max)` of the two values.
pub fn sort_pair(a: f64, b: f64) -> (f64, f64) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Which of the two command line flows is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Explicit box given by two corners.
    Area,
    /// Center point plus radius.
    Around,
}

/// Validated user request, before it is turned into a query box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchArea {
    Box(BoundingBox),
    Radius { center: Coordinate, radius: f64 },
}

impl SearchArea {
    /// Radius area; a negative radius is taken by absolute value.
    pub fn radius(center: Coordinate, radius: f64) -> Self {
        SearchArea::Radius {
            center,
            radius: radius.abs(),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            SearchArea::Box(_) => Mode::Area,
            SearchArea::Radius { .. } => Mode::Around,
        }
    }

    /// The box the remote service is queried with.
    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            SearchArea::Box(bbox) => bbox,
            SearchArea::Radius { center, radius } => BoundingBox::around(center, radius),
        }
    }

    /// Point results are ranked against: the box center in area mode,
    /// the user's own position in radius mode.
    pub fn reference_point(&self) -> Coordinate {
        match *self {
            SearchArea::Box(bbox) => bbox.center(),
            SearchArea::Radius { center, .. } => center,
        }
    }

    /// Maximum distance a record may have to be shown, if any.
    pub fn max_distance(&self) -> Option<f64> {
        match *self {
            SearchArea::Box(_) => None,
            SearchArea::Radius { radius, .. } => Some(radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reversed_corners_are_swapped() {
        let bbox = BoundingBox::normalized((10.0, -10.0), (5.0, -5.0));
        assert_eq!(
            bbox,
            BoundingBox {
                lon_min: -10.0,
                lon_max: 10.0,
                lat_min: -5.0,
                lat_max: 5.0,
            }
        );
        assert_eq!(bbox.center(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn radius_box_is_not_clamped() {
        let area = SearchArea::radius(Coordinate::new(179.0, 89.0), 3.0);
        let bbox = area.bounding_box();
        assert_eq!(bbox.lon_max, 182.0);
        assert_eq!(bbox.lat_max, 92.0);
    }

    #[test]
    fn negative_radius_is_made_positive() {
        let area = SearchArea::radius(Coordinate::new(1.0, 2.0), -4.0);
        assert_eq!(area.max_distance(), Some(4.0));
        assert_eq!(area.reference_point(), Coordinate::new(1.0, 2.0));
        assert_eq!(area.mode(), Mode::Around);
    }

    #[test]
    fn box_reference_is_center_not_corner() {
        let area = SearchArea::Box(BoundingBox::normalized((0.0, 10.0), (0.0, 4.0)));
        assert_eq!(area.reference_point(), Coordinate::new(5.0, 2.0));
        assert_eq!(area.max_distance(), None);
    }

    proptest! {
        #[test]
        fn prop_sort_pair_orders(a in -180.0..180.0f64, b in -180.0..180.0f64) {
            prop_assert_eq!(sort_pair(a, b), (a.min(b), a.max(b)));
        }

        #[test]
        fn prop_around_box_is_exact(
            lon in -180.0..180.0f64,
            lat in -90.0..90.0f64,
            r in 0.0..360.0f64
        ) {
            let bbox = BoundingBox::around(Coordinate::new(lon, lat), r);
            prop_assert_eq!(bbox.lon_min, lon - r);
            prop_assert_eq!(bbox.lon_max, lon + r);
            prop_assert_eq!(bbox.lat_min, lat - r);
            prop_assert_eq!(bbox.lat_max, lat + r);
        }
    }
}
