//! Internet, network, and account generators.

use fake::Fake;
use fake::faker::internet::raw::{
    DomainSuffix, FreeEmail, IPv4, IPv6, MACAddress, Password, UserAgent, Username,
};
use fake::faker::lorem::raw::Word;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use serde_json::Value;

use super::{count, fake_text, optional, param, pick_text};
use crate::descriptor::{FakerRng, OutputKind, ParamKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "username",
        label: "Username",
        category: "auth",
        description: "Account user name",
        example: "markus_moen",
        output: OutputKind::String,
        params: &[],
        generate: username,
    },
    RawEntry {
        native: "password",
        label: "Password",
        category: "auth",
        description: "Random password with a length between the given bounds",
        example: "cKe8dP2nQz",
        output: OutputKind::String,
        params: &[
            param("minLength", ParamKind::Int, "8", "Minimum password length"),
            param("maxLength", ParamKind::Int, "16", "Maximum password length"),
        ],
        generate: password,
    },
    RawEntry {
        native: "freeemail",
        label: "Free Email",
        category: "internet",
        description: "Email address at a free mail provider",
        example: "markus@gmail.com",
        output: OutputKind::String,
        params: &[],
        generate: free_email,
    },
    RawEntry {
        native: "domainsuffix",
        label: "Domain Suffix",
        category: "internet",
        description: "Top-level domain",
        example: "org",
        output: OutputKind::String,
        params: &[],
        generate: domain_suffix,
    },
    RawEntry {
        native: "domainname",
        label: "Domain Name",
        category: "internet",
        description: "Domain name, optionally under a fixed top-level domain",
        example: "centraltarget.biz",
        output: OutputKind::String,
        params: &[optional(
            "suffix",
            ParamKind::String,
            "Top-level domain to use instead of a random one",
        )],
        generate: domain_name,
    },
    RawEntry {
        native: "url",
        label: "URL",
        category: "internet",
        description: "Web address",
        example: "https://www.dynamiciterate.name/target/seamless",
        output: OutputKind::String,
        params: &[],
        generate: url,
    },
    RawEntry {
        native: "ipv4address",
        label: "IPv4 Address",
        category: "internet",
        description: "Dotted-quad IPv4 address",
        example: "222.83.191.222",
        output: OutputKind::String,
        params: &[],
        generate: ipv4,
    },
    RawEntry {
        native: "ipv6address",
        label: "IPv6 Address",
        category: "internet",
        description: "Colon-separated IPv6 address",
        example: "2001:cafe:8898:ee17:bc35:9064:5866:d019",
        output: OutputKind::String,
        params: &[],
        generate: ipv6,
    },
    RawEntry {
        native: "macaddress",
        label: "MAC Address",
        category: "internet",
        description: "Hardware MAC address",
        example: "cb:ce:06:94:22:e9",
        output: OutputKind::String,
        params: &[],
        generate: mac_address,
    },
    RawEntry {
        native: "useragent",
        label: "User Agent",
        category: "internet",
        description: "Browser user agent string",
        example: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
        output: OutputKind::String,
        params: &[],
        generate: user_agent,
    },
    RawEntry {
        native: "httpmethod",
        label: "HTTP Method",
        category: "internet",
        description: "HTTP request method",
        example: "PATCH",
        output: OutputKind::String,
        params: &[],
        generate: http_method,
    },
    RawEntry {
        native: "httpstatuscode",
        label: "HTTP Status Code",
        category: "internet",
        description: "HTTP response status code",
        example: "404",
        output: OutputKind::Int,
        params: &[],
        generate: http_status_code,
    },
    RawEntry {
        native: "httpstatuscodesimple",
        label: "HTTP Status Code Simple",
        category: "internet",
        description: "Common HTTP response status code",
        example: "200",
        output: OutputKind::Int,
        params: &[],
        generate: http_status_code_simple,
    },
];

const HTTP_METHODS: &[&str] = &["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"];

const HTTP_STATUS_CODES: &[i64] = &[
    100, 101, 200, 201, 202, 204, 206, 301, 302, 303, 304, 307, 308, 400, 401, 403, 404, 405,
    406, 409, 410, 415, 418, 422, 429, 500, 501, 502, 503, 504,
];

const SIMPLE_HTTP_STATUS_CODES: &[i64] = &[200, 301, 302, 400, 404, 500];

/// Longest password the generator will build.
const MAX_PASSWORD_LENGTH: usize = 512;

fake_text!(username, Username(EN));
fake_text!(free_email, FreeEmail(EN));
fake_text!(domain_suffix, DomainSuffix(EN));
fake_text!(ipv4, IPv4(EN));
fake_text!(ipv6, IPv6(EN));
fake_text!(mac_address, MACAddress(EN));
fake_text!(user_agent, UserAgent(EN));

fn password(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let params = BoundParams::required(params, "minLength")?;
    let min = count(params, "minLength")?.max(1);
    let max = count(params, "maxLength")?.min(MAX_PASSWORD_LENGTH);
    if min > max {
        return Err(GenerateError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(Value::String(Password(EN, min..max + 1).fake_with_rng(rng)))
}

fn host(rng: &mut FakerRng) -> String {
    let first: String = Word(EN).fake_with_rng(rng);
    let second: String = Word(EN).fake_with_rng(rng);
    format!("{first}{second}")
}

fn domain_name(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let host = host(rng);
    let suffix = match params.and_then(|bound| bound.opt_string("suffix")) {
        Some(suffix) => suffix.trim_start_matches('.').to_owned(),
        None => DomainSuffix(EN).fake_with_rng(rng),
    };
    Ok(Value::String(format!("{host}.{suffix}")))
}

fn url(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let host = host(rng);
    let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
    let first: String = Word(EN).fake_with_rng(rng);
    let second: String = Word(EN).fake_with_rng(rng);
    Ok(Value::String(format!(
        "https://www.{host}.{suffix}/{first}/{second}"
    )))
}

fn http_method(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, HTTP_METHODS))
}

fn pick_status(rng: &mut FakerRng, codes: &[i64]) -> Value {
    codes.choose(rng).copied().map_or(Value::Null, Value::from)
}

fn http_status_code(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_status(rng, HTTP_STATUS_CODES))
}

fn http_status_code_simple(
    rng: &mut FakerRng,
    _: Option<&BoundParams>,
) -> Result<Value, GenerateError> {
    Ok(pick_status(rng, SIMPLE_HTTP_STATUS_CODES))
}
