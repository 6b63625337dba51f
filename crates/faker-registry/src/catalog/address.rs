//! Address and geography generators.

use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryCode, CountryName, PostCode, StateAbbr, StateName,
    StreetName, StreetSuffix, TimeZone, ZipCode,
};
use fake::locales::EN;
use serde_json::Value;

use super::{fake_text, float_between, param, round_to};
use crate::descriptor::{FakerRng, OutputKind, ParamKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "address",
        label: "Address",
        category: "address",
        description: "Single-line postal address",
        example: "364 Unionsville, Apt. 3, Norfolk, OH 39410",
        output: OutputKind::String,
        params: &[],
        generate: address,
    },
    RawEntry {
        native: "street",
        label: "Street",
        category: "address",
        description: "Building number and street name",
        example: "364 Unionsville Port",
        output: OutputKind::String,
        params: &[],
        generate: street,
    },
    RawEntry {
        native: "streetname",
        label: "Street Name",
        category: "address",
        description: "Street name without a building number",
        example: "View Port",
        output: OutputKind::String,
        params: &[],
        generate: street_name,
    },
    RawEntry {
        native: "streetnumber",
        label: "Street Number",
        category: "address",
        description: "Building number on a street",
        example: "13645",
        output: OutputKind::String,
        params: &[],
        generate: street_number,
    },
    RawEntry {
        native: "streetsuffix",
        label: "Street Suffix",
        category: "address",
        description: "Thoroughfare type appended to a street name",
        example: "Avenue",
        output: OutputKind::String,
        params: &[],
        generate: street_suffix,
    },
    RawEntry {
        native: "city",
        label: "City",
        category: "address",
        description: "City name",
        example: "Marcelside",
        output: OutputKind::String,
        params: &[],
        generate: city,
    },
    RawEntry {
        native: "state",
        label: "State",
        category: "address",
        description: "US state name",
        example: "Illinois",
        output: OutputKind::String,
        params: &[],
        generate: state,
    },
    RawEntry {
        native: "stateabr",
        label: "State Abbreviation",
        category: "address",
        description: "Two-letter US state code",
        example: "IL",
        output: OutputKind::String,
        params: &[],
        generate: state_abbreviation,
    },
    RawEntry {
        native: "zip",
        label: "Zip",
        category: "address",
        description: "US postal code",
        example: "13645",
        output: OutputKind::String,
        params: &[],
        generate: zip,
    },
    RawEntry {
        native: "postcode",
        label: "Zip",
        category: "address",
        description: "Postal code",
        example: "13645",
        output: OutputKind::String,
        params: &[],
        generate: post_code,
    },
    RawEntry {
        native: "country",
        label: "Country",
        category: "address",
        description: "Country name",
        example: "Uruguay",
        output: OutputKind::String,
        params: &[],
        generate: country,
    },
    RawEntry {
        native: "countryabr",
        label: "Country Abbreviation",
        category: "address",
        description: "ISO 3166 alpha-2 country code",
        example: "UY",
        output: OutputKind::String,
        params: &[],
        generate: country_abbreviation,
    },
    RawEntry {
        native: "timezone",
        label: "Time Zone",
        category: "address",
        description: "IANA time zone name",
        example: "Europe/Oslo",
        output: OutputKind::String,
        params: &[],
        generate: time_zone,
    },
    RawEntry {
        native: "latitude",
        label: "Latitude",
        category: "address",
        description: "Geographic latitude in degrees",
        example: "-73.534056",
        output: OutputKind::Float,
        params: &[],
        generate: latitude,
    },
    RawEntry {
        native: "longitude",
        label: "Longitude",
        category: "address",
        description: "Geographic longitude in degrees",
        example: "-147.068112",
        output: OutputKind::Float,
        params: &[],
        generate: longitude,
    },
    RawEntry {
        native: "latituderange",
        label: "Latitude Range",
        category: "address",
        description: "Latitude within the given bounds",
        example: "22.921026",
        output: OutputKind::Float,
        params: &[
            param("min", ParamKind::Float, "-90", "Minimum latitude"),
            param("max", ParamKind::Float, "90", "Maximum latitude"),
        ],
        generate: latitude_range,
    },
    RawEntry {
        native: "longituderange",
        label: "Longitude Range",
        category: "address",
        description: "Longitude within the given bounds",
        example: "-8.170450",
        output: OutputKind::Float,
        params: &[
            param("min", ParamKind::Float, "-180", "Minimum longitude"),
            param("max", ParamKind::Float, "180", "Maximum longitude"),
        ],
        generate: longitude_range,
    },
];

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;
const COORDINATE_DECIMALS: i32 = 6;

fake_text!(street_name, StreetName(EN));
fake_text!(street_number, BuildingNumber(EN));
fake_text!(street_suffix, StreetSuffix(EN));
fake_text!(city, CityName(EN));
fake_text!(state, StateName(EN));
fake_text!(state_abbreviation, StateAbbr(EN));
fake_text!(zip, ZipCode(EN));
fake_text!(post_code, PostCode(EN));
fake_text!(country, CountryName(EN));
fake_text!(country_abbreviation, CountryCode(EN));
fake_text!(time_zone, TimeZone(EN));

fn street_line(rng: &mut FakerRng) -> String {
    let number: String = BuildingNumber(EN).fake_with_rng(rng);
    let name: String = StreetName(EN).fake_with_rng(rng);
    format!("{number} {name}")
}

fn street(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::String(street_line(rng)))
}

fn address(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let line = street_line(rng);
    let city: String = CityName(EN).fake_with_rng(rng);
    let state: String = StateAbbr(EN).fake_with_rng(rng);
    let zip: String = ZipCode(EN).fake_with_rng(rng);
    Ok(Value::String(format!("{line}, {city}, {state} {zip}")))
}

fn coordinate(
    rng: &mut FakerRng,
    params: Option<&BoundParams>,
    limit: f64,
) -> Result<Value, GenerateError> {
    let (min, max) = match params {
        Some(bound) => (bound.float("min")?, bound.float("max")?),
        None => (-limit, limit),
    };
    for (name, value) in [("min", min), ("max", max)] {
        if value.abs() > limit {
            return Err(GenerateError::InvalidParameter {
                parameter: name.to_owned(),
                value: value.to_string(),
                message: format!("must be between -{limit} and {limit}"),
            });
        }
    }
    let value = float_between(rng, min, max)?;
    Ok(Value::from(round_to(value, COORDINATE_DECIMALS)))
}

fn latitude(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    coordinate(rng, None, LATITUDE_LIMIT)
}

fn longitude(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    coordinate(rng, None, LONGITUDE_LIMIT)
}

fn latitude_range(
    rng: &mut FakerRng,
    params: Option<&BoundParams>,
) -> Result<Value, GenerateError> {
    coordinate(rng, Some(BoundParams::required(params, "min")?), LATITUDE_LIMIT)
}

fn longitude_range(
    rng: &mut FakerRng,
    params: Option<&BoundParams>,
) -> Result<Value, GenerateError> {
    coordinate(rng, Some(BoundParams::required(params, "min")?), LONGITUDE_LIMIT)
}
