// ---------------------------------------------------------------------------
// Country coordinates – ISO-3 code → approximate centroid
// ---------------------------------------------------------------------------

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Resolves an ISO-3 country code to a display position for the map.
/// Injected into the map adapter so the marker source can be swapped
/// (e.g. for a GeoJSON-backed lookup) without touching derivation code.
pub trait CoordLookup {
    fn coords(&self, iso3: &str) -> Option<LatLon>;
}

/// Built-in table of country centroids, rounded to whole degrees — plenty
/// for placing a marker per country on a world view.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCentroids;

impl CoordLookup for BuiltinCentroids {
    fn coords(&self, iso3: &str) -> Option<LatLon> {
        let code = iso3.to_ascii_uppercase();
        CENTROIDS
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|&(_, lat, lon)| LatLon { lat, lon })
    }
}

/// (ISO-3 code, latitude, longitude).
const CENTROIDS: &[(&str, f64, f64)] = &[
    ("AFG", 33.0, 65.0),
    ("AGO", -12.5, 18.5),
    ("ALB", 41.0, 20.0),
    ("ARE", 24.0, 54.0),
    ("ARG", -34.0, -64.0),
    ("AUS", -27.0, 133.0),
    ("AUT", 47.3, 13.3),
    ("BEL", 50.8, 4.0),
    ("BGD", 24.0, 90.0),
    ("BGR", 43.0, 25.0),
    ("BRA", -10.0, -55.0),
    ("CAN", 60.0, -95.0),
    ("CHE", 47.0, 8.0),
    ("CHL", -30.0, -71.0),
    ("CHN", 35.0, 105.0),
    ("CIV", 8.0, -5.0),
    ("CMR", 6.0, 12.0),
    ("COD", -2.5, 23.5),
    ("COL", 4.0, -72.0),
    ("CZE", 49.8, 15.5),
    ("DEU", 51.0, 9.0),
    ("DNK", 56.0, 10.0),
    ("DZA", 28.0, 3.0),
    ("ECU", -2.0, -77.5),
    ("EGY", 27.0, 30.0),
    ("ESP", 40.0, -4.0),
    ("ETH", 8.0, 38.0),
    ("FIN", 64.0, 26.0),
    ("FRA", 46.0, 2.0),
    ("GBR", 54.0, -2.0),
    ("GHA", 8.0, -2.0),
    ("GRC", 39.0, 22.0),
    ("HUN", 47.0, 20.0),
    ("IDN", -5.0, 120.0),
    ("IND", 20.0, 77.0),
    ("IRL", 53.0, -8.0),
    ("IRN", 32.0, 53.0),
    ("IRQ", 33.0, 44.0),
    ("ISR", 31.5, 34.8),
    ("ITA", 42.8, 12.8),
    ("JPN", 36.0, 138.0),
    ("KAZ", 48.0, 68.0),
    ("KEN", 1.0, 38.0),
    ("KOR", 37.0, 127.5),
    ("MAR", 32.0, -5.0),
    ("MDG", -20.0, 47.0),
    ("MEX", 23.0, -102.0),
    ("MLI", 17.0, -4.0),
    ("MMR", 22.0, 98.0),
    ("MOZ", -18.2, 35.0),
    ("MYS", 2.5, 112.5),
    ("NER", 16.0, 8.0),
    ("NGA", 10.0, 8.0),
    ("NLD", 52.5, 5.8),
    ("NOR", 62.0, 10.0),
    ("NPL", 28.0, 84.0),
    ("NZL", -41.0, 174.0),
    ("PAK", 30.0, 70.0),
    ("PER", -10.0, -76.0),
    ("PHL", 13.0, 122.0),
    ("POL", 52.0, 20.0),
    ("PRT", 39.5, -8.0),
    ("ROU", 46.0, 25.0),
    ("RUS", 60.0, 100.0),
    ("SAU", 25.0, 45.0),
    ("SDN", 15.0, 30.0),
    ("SEN", 14.0, -14.0),
    ("SWE", 62.0, 15.0),
    ("TCD", 15.0, 19.0),
    ("THA", 15.0, 100.0),
    ("TUR", 39.0, 35.0),
    ("TZA", -6.0, 35.0),
    ("UGA", 1.0, 32.0),
    ("UKR", 49.0, 32.0),
    ("USA", 38.0, -97.0),
    ("VEN", 8.0, -66.0),
    ("VNM", 16.2, 107.8),
    ("ZAF", -29.0, 24.0),
    ("ZMB", -15.0, 30.0),
    ("ZWE", -20.0, 30.0),
];
