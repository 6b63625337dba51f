//! Person and contact generators.

use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{FirstName, LastName, Name, NameWithTitle, Suffix, Title};
use fake::faker::phone_number::raw::{CellNumber, PhoneNumber};
use fake::locales::EN;
use serde_json::Value;

use super::{fake_text, pick_text};
use crate::descriptor::{FakerRng, OutputKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "firstname",
        label: "First Name",
        category: "person",
        description: "Given name of a person",
        example: "Markus",
        output: OutputKind::String,
        params: &[],
        generate: first_name,
    },
    RawEntry {
        native: "lastname",
        label: "Last Name",
        category: "person",
        description: "Family name of a person",
        example: "Moen",
        output: OutputKind::String,
        params: &[],
        generate: last_name,
    },
    RawEntry {
        native: "name",
        label: "Name",
        category: "person",
        description: "Given and family name of a person",
        example: "Markus Moen",
        output: OutputKind::String,
        params: &[],
        generate: name,
    },
    RawEntry {
        native: "namewithtitle",
        label: "Name With Title",
        category: "person",
        description: "Full name preceded by an honorific",
        example: "Dr. Markus Moen",
        output: OutputKind::String,
        params: &[],
        generate: name_with_title,
    },
    RawEntry {
        native: "nameprefix",
        label: "Prefix",
        category: "person",
        description: "Honorific placed before a name",
        example: "Mrs.",
        output: OutputKind::String,
        params: &[],
        generate: name_prefix,
    },
    RawEntry {
        native: "namesuffix",
        label: "Suffix",
        category: "person",
        description: "Generational or academic suffix placed after a name",
        example: "Jr.",
        output: OutputKind::String,
        params: &[],
        generate: name_suffix,
    },
    RawEntry {
        native: "gender",
        label: "Gender",
        category: "person",
        description: "Gender identity",
        example: "female",
        output: OutputKind::String,
        params: &[],
        generate: gender,
    },
    RawEntry {
        native: "phone",
        label: "Phone",
        category: "contact",
        description: "Landline telephone number",
        example: "(555) 867-5309",
        output: OutputKind::String,
        params: &[],
        generate: phone,
    },
    RawEntry {
        native: "cellphone",
        label: "Cell Phone",
        category: "contact",
        description: "Mobile telephone number",
        example: "555-012-3456",
        output: OutputKind::String,
        params: &[],
        generate: cell_phone,
    },
    RawEntry {
        native: "email",
        label: "Email",
        category: "contact",
        description: "Email address on a reserved example domain",
        example: "markus@example.com",
        output: OutputKind::String,
        params: &[],
        generate: email,
    },
];

const GENDERS: &[&str] = &["male", "female", "non-binary"];

fake_text!(first_name, FirstName(EN));
fake_text!(last_name, LastName(EN));
fake_text!(name, Name(EN));
fake_text!(name_with_title, NameWithTitle(EN));
fake_text!(name_prefix, Title(EN));
fake_text!(name_suffix, Suffix(EN));
fake_text!(phone, PhoneNumber(EN));
fake_text!(cell_phone, CellNumber(EN));
fake_text!(email, SafeEmail(EN));

fn gender(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, GENDERS))
}
