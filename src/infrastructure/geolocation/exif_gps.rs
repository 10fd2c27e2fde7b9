//! EXIF GPS extraction for uploaded images.
//!
//! Reads the GPS sub-block of an image's embedded metadata and converts the
//! degrees/minutes/seconds triples to signed decimal degrees. Extraction is
//! strictly best-effort: corrupt data, unsupported formats, missing metadata,
//! or an incomplete GPS block all yield [`GpsExtraction::NotFound`], never an
//! error. An upload must succeed whether or not its photo carries location
//! data.

use exif::{In, Tag, Value};
use std::io::Cursor;

/// Outcome of attempting to extract GPS coordinates from image metadata.
///
/// Modeled as a result type rather than error suppression so the
/// "never fails the upload" contract is visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GpsExtraction {
    /// Both coordinates were decoded, in signed decimal degrees
    /// (positive north/east, negative south/west).
    Found { latitude: f64, longitude: f64 },

    /// No usable GPS block; the upload proceeds without location.
    NotFound,
}

impl GpsExtraction {
    pub fn has_gps(&self) -> bool {
        matches!(self, GpsExtraction::Found { .. })
    }
}

/// Extract GPS coordinates from raw image bytes.
///
/// Accepts any container format `kamadak-exif` understands (JPEG, TIFF, PNG,
/// HEIF, WebP). Partially corrupt metadata is tolerated via
/// `continue_on_error`; whatever fields survive are still inspected.
pub fn extract_gps(data: &[u8]) -> GpsExtraction {
    let mut reader = exif::Reader::new();
    reader.continue_on_error(true);
    let mut cursor = Cursor::new(data);

    let exif = match reader
        .read_from_container(&mut cursor)
        .or_else(|e| e.distill_partial_result(|_| {}))
    {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!(error = %e, "no readable EXIF metadata in upload");
            return GpsExtraction::NotFound;
        }
    };

    gps_from_exif(&exif)
}

/// Locate the GPS fields in decoded metadata and convert them.
///
/// All four fields (latitude, latitude ref, longitude, longitude ref) must be
/// present and non-empty. The hemisphere reference negates the coordinate
/// unless it is exactly `"N"` / `"E"`; any other value, including a malformed
/// one, selects the negative hemisphere.
fn gps_from_exif(exif: &exif::Exif) -> GpsExtraction {
    let lat_dms = rationals(exif, Tag::GPSLatitude);
    let lat_ref = reference(exif, Tag::GPSLatitudeRef);
    let lon_dms = rationals(exif, Tag::GPSLongitude);
    let lon_ref = reference(exif, Tag::GPSLongitudeRef);

    let (Some(lat_dms), Some(lat_ref), Some(lon_dms), Some(lon_ref)) =
        (lat_dms, lat_ref, lon_dms, lon_ref)
    else {
        return GpsExtraction::NotFound;
    };

    let (Some(mut latitude), Some(mut longitude)) =
        (dms_to_decimal(&lat_dms), dms_to_decimal(&lon_dms))
    else {
        return GpsExtraction::NotFound;
    };

    if lat_ref != "N" {
        latitude = -latitude;
    }
    if lon_ref != "E" {
        longitude = -longitude;
    }

    GpsExtraction::Found {
        latitude,
        longitude,
    }
}

/// Read a degrees/minutes/seconds triple stored as EXIF rationals.
fn rationals(exif: &exif::Exif, tag: Tag) -> Option<Vec<exif::Rational>> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(r) if !r.is_empty() => Some(r.clone()),
        _ => None,
    }
}

/// Read a hemisphere reference ("N"/"S"/"E"/"W") stored as an ASCII field.
fn reference(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    let text = match &field.value {
        Value::Ascii(chunks) => chunks
            .first()
            .map(|c| String::from_utf8_lossy(c).trim_matches('\0').trim().to_string())?,
        _ => return None,
    };

    if text.is_empty() { None } else { Some(text) }
}

/// Convert a degrees/minutes/seconds triple to decimal degrees:
/// `degrees + minutes/60 + seconds/3600`.
///
/// A zero-denominator rational makes `to_f64` non-finite; JSON cannot carry
/// such a value, so the coordinate is treated as undecodable.
fn dms_to_decimal(rationals: &[exif::Rational]) -> Option<f64> {
    if rationals.len() < 3 {
        return None;
    }

    let degrees = rationals[0].to_f64();
    let minutes = rationals[1].to_f64();
    let seconds = rationals[2].to_f64();

    Some(degrees + minutes / 60.0 + seconds / 3600.0).filter(|v| v.is_finite())
}
