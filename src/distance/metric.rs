//! Distance formulas for coordinate-based instances.

use std::fmt;

/// A city location in the plane.
///
/// Cities carry no identifier of their own: a city's index is its
/// position in the coordinate list (zero-based).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// TSPLIB `EDGE_WEIGHT_TYPE` values understood by the distance model.
///
/// Strings that name no supported type decode to
/// [`Unrecognized`](EdgeWeightType::Unrecognized), which is rejected when
/// the matrix is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeWeightType {
    /// Costs are listed in an `EDGE_WEIGHT_SECTION`.
    Explicit,
    /// Euclidean distance between coordinates.
    Euc2d,
    /// TSPLIB pseudo-Euclidean distance.
    Att,
    Unrecognized(String),
}

impl EdgeWeightType {
    /// Decodes a header value. Never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "EXPLICIT" => Self::Explicit,
            "EUC_2D" => Self::Euc2d,
            "ATT" => Self::Att,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Cost between two cities, or `None` when this type is not
    /// coordinate-based.
    pub fn distance(&self, a: &City, b: &City) -> Option<f64> {
        match self {
            Self::Euc2d => Some(euclidean_distance(a, b)),
            Self::Att => Some(att_distance(a, b)),
            Self::Explicit | Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for EdgeWeightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("EXPLICIT"),
            Self::Euc2d => f.write_str("EUC_2D"),
            Self::Att => f.write_str("ATT"),
            Self::Unrecognized(s) => f.write_str(s),
        }
    }
}

/// Plain Euclidean distance, no rounding.
pub fn euclidean_distance(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Pseudo-Euclidean `ATT` distance.
///
/// `r = sqrt(dx² + dy²) / 10`, rounded half-up with `floor(r + 0.5)`;
/// when that rounding falls below `r` the result is bumped by one.
pub fn att_distance(a: &City, b: &City) -> f64 {
    let r = euclidean_distance(a, b) / 10.0;
    let t = (r + 0.5).floor();
    if t < r {
        t + 1.0
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(EdgeWeightType::parse("EXPLICIT"), EdgeWeightType::Explicit);
        assert_eq!(EdgeWeightType::parse(" EUC_2D "), EdgeWeightType::Euc2d);
        assert_eq!(EdgeWeightType::parse("ATT"), EdgeWeightType::Att);
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            EdgeWeightType::parse("GEO"),
            EdgeWeightType::Unrecognized("GEO".into())
        );
    }

    #[test]
    fn test_euclidean() {
        let d = euclidean_distance(&City::new(0.0, 0.0), &City::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_keeps_fraction() {
        let d = euclidean_distance(&City::new(0.0, 0.0), &City::new(1.0, 1.0));
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_att_exact_integer() {
        // r = 50 / 10 = 5
        let d = att_distance(&City::new(0.0, 0.0), &City::new(30.0, 40.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_att_rounds_down_then_bumps() {
        // r = 5.2: floor(5.7) = 5 < 5.2, so 6
        let d = att_distance(&City::new(0.0, 0.0), &City::new(52.0, 0.0));
        assert_eq!(d, 6.0);
    }

    #[test]
    fn test_att_rounds_up() {
        // r = 5.7: floor(6.2) = 6 >= 5.7
        let d = att_distance(&City::new(0.0, 0.0), &City::new(57.0, 0.0));
        assert_eq!(d, 6.0);
    }

    #[test]
    fn test_att_half() {
        // r = 5.5: floor(6.0) = 6
        let d = att_distance(&City::new(0.0, 0.0), &City::new(55.0, 0.0));
        assert_eq!(d, 6.0);
    }

    #[test]
    fn test_distance_dispatch() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert_eq!(EdgeWeightType::Euc2d.distance(&a, &b), Some(5.0));
        assert_eq!(EdgeWeightType::Att.distance(&a, &b), Some(1.0));
        assert_eq!(EdgeWeightType::Explicit.distance(&a, &b), None);
    }
}
