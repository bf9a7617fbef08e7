//! Inverse ETRS-TM35FIN (Gauss-Krüger) projection to WGS84.
//!
//! Krüger n-series expansion from projected coordinates to the conformal
//! sphere, followed by an iterated conformal-to-geodetic latitude
//! correction. Pure computation: no I/O, no logging.

use crate::domain::model::GeographicCoordinate;
use crate::utils::error::{Axis, ConvertError, Result};

/// Validity envelope of the TM35FIN projection for mainland Finland, meters.
pub const MIN_X: f64 = 6_582_464.035_8;
pub const MAX_X: f64 = 7_799_839.890_2;
pub const MIN_Y: f64 = 50_199.481_4;
pub const MAX_Y: f64 = 761_274.624_7;

/// GRS80/WGS84 semi-major axis, meters.
const A: f64 = 6_378_137.0;
/// WGS84 flattening.
const F: f64 = 1.0 / 298.257_223_563;
/// TM35FIN central scale factor.
const K0: f64 = 0.9996;
/// TM35FIN false easting, meters.
const E0: f64 = 500_000.0;
/// TM35FIN central meridian, degrees east.
const LON0_DEG: f64 = 27.0;

/// Converts a TM35FIN planar pair to WGS84 degrees.
///
/// `x` is validated first, then `y`; a violation on `x` is reported even when
/// both axes are out of range.
pub fn to_wgs84(x: f64, y: f64) -> Result<GeographicCoordinate> {
    if x < MIN_X || x > MAX_X {
        return Err(ConvertError::OutOfRange {
            axis: Axis::X,
            value: x,
            min: MIN_X,
            max: MAX_X,
        });
    }

    if y < MIN_Y || y > MAX_Y {
        return Err(ConvertError::OutOfRange {
            axis: Axis::Y,
            value: y,
            min: MIN_Y,
            max: MAX_Y,
        });
    }

    // Third flattening, meridian arc scale, eccentricity and the 4th-order
    // Krüger coefficients. Pure functions of the ellipsoid, no runtime input.
    let n = F / (2.0 - F);
    let a1 = A / (1.0 + n) * (1.0 + n.powi(2) / 4.0 + n.powi(4) / 64.0);
    let e = (2.0 * F - F.powi(2)).sqrt();
    let h1 = n / 2.0 - 2.0 / 3.0 * n.powi(2) + 37.0 / 96.0 * n.powi(3) - 1.0 / 360.0 * n.powi(4);
    let h2 = n.powi(2) / 48.0 + n.powi(3) / 15.0 - 437.0 / 1440.0 * n.powi(4);
    let h3 = 17.0 / 480.0 * n.powi(3) - 37.0 / 840.0 * n.powi(4);
    let h4 = 4397.0 / 161_280.0 * n.powi(4);

    let xi = x / (a1 * K0);
    let eta = (y - E0) / (a1 * K0);

    // Inverse series corrections. The xi side reuses h2 in the third term and
    // h3 in the fourth (instead of h3/h4 as on the eta side). This matches
    // the reference implementation bit for bit and is kept unchanged; it is a
    // suspected defect inherited from the reference, pending verification
    // against an authoritative TM35FIN inverse.
    let xi1 = h1 * (2.0 * xi).sin() * (2.0 * eta).cosh();
    let xi2 = h2 * (4.0 * xi).sin() * (4.0 * eta).cosh();
    let xi3 = h2 * (6.0 * xi).sin() * (6.0 * eta).cosh();
    let xi4 = h3 * (8.0 * xi).sin() * (8.0 * eta).cosh();

    let eta1 = h1 * (2.0 * xi).cos() * (2.0 * eta).sinh();
    let eta2 = h2 * (4.0 * xi).cos() * (4.0 * eta).sinh();
    let eta3 = h3 * (6.0 * xi).cos() * (6.0 * eta).sinh();
    let eta4 = h4 * (8.0 * xi).cos() * (8.0 * eta).sinh();

    let xi_p = xi - xi1 - xi2 - xi3 - xi4;
    let eta_p = eta - eta1 - eta2 - eta3 - eta4;

    // Conformal latitude on the sphere.
    let beta = (xi_p.sin() / eta_p.cosh()).asin();
    if !beta.is_finite() {
        return Err(ConvertError::NumericDomain);
    }

    // Invert the isometric-latitude relation for the ellipsoid with exactly
    // four fixed-point passes. A literal count, not a tolerance loop, to
    // match the reference output.
    let q = beta.tan().asinh();
    let mut q_p = q + e * (e * q.tanh()).atanh();
    for _ in 0..3 {
        q_p = q + e * (e * q_p.tanh()).atanh();
    }

    let latitude = q_p.sinh().atan().to_degrees();
    let longitude = (LON0_DEG.to_radians() + (eta_p.tanh() / beta.cos()).asin()).to_degrees();

    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(ConvertError::NumericDomain);
    }

    Ok(GeographicCoordinate {
        latitude,
        longitude,
    })
}
