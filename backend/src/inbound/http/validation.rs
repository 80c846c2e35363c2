//! Shared validation helpers for inbound HTTP adapters.
//!
//! Coordinate fields arrive as loosely typed JSON: numbers or numeric
//! strings. A field counts as missing when it is absent or falsy (`null`,
//! `false`, `0`, `""`); any other value must parse as a finite number.

use serde_json::Value;

use crate::domain::{CoordinatePair, CoordinateValidationError, Error};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Latitude and longitude field names of one coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CoordinateFields {
    pub(crate) lat: FieldName,
    pub(crate) lon: FieldName,
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("missing required field: {}", field.as_str()))
}

pub(crate) fn invalid_number_error(field: FieldName) -> Error {
    Error::invalid_request(format!(
        "{} must be a number or numeric string",
        field.as_str()
    ))
}

fn invalid_coordinate_error(fields: CoordinateFields, error: CoordinateValidationError) -> Error {
    let field = match error {
        CoordinateValidationError::NonFiniteLatitude
        | CoordinateValidationError::LatitudeOutOfRange(_) => fields.lat,
        CoordinateValidationError::NonFiniteLongitude
        | CoordinateValidationError::LongitudeOutOfRange(_) => fields.lon,
    };
    Error::invalid_request(format!("{}: {error}", field.as_str()))
}

/// Whether a JSON value is absent or falsy.
pub(crate) fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(number)) => number.as_f64().is_none_or(|n| n == 0.0),
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Bool(true) | Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Ensure a field is present and truthy.
pub(crate) fn require_present(value: Option<&Value>, field: FieldName) -> Result<(), Error> {
    if is_missing(value) {
        return Err(missing_field_error(field));
    }
    Ok(())
}

/// Parse a present coordinate component from a JSON number or numeric string.
pub(crate) fn parse_number(value: Option<&Value>, field: FieldName) -> Result<f64, Error> {
    require_present(value, field)?;
    match value {
        Some(Value::Number(number)) => number.as_f64().ok_or_else(|| invalid_number_error(field)),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_number_error(field)),
        _ => Err(invalid_number_error(field)),
    }
}

/// Parse one coordinate pair from its two raw fields.
pub(crate) fn parse_coordinate_pair(
    lat: Option<&Value>,
    lon: Option<&Value>,
    fields: CoordinateFields,
) -> Result<CoordinatePair, Error> {
    let lat = parse_number(lat, fields.lat)?;
    let lon = parse_number(lon, fields.lon)?;
    CoordinatePair::new(lat, lon).map_err(|err| invalid_coordinate_error(fields, err))
}
