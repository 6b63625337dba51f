//! Identifiers, colours, string helpers, and file generators.

use fake::faker::filesystem::raw::{DirPath, FileExtension, FileName, FilePath};
use fake::locales::EN;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde_json::Value;
use uuid::Builder;

use super::{count, digits, fake_text, letters, param, pick_text};
use crate::descriptor::{FakerRng, OutputKind, ParamKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "uuid",
        label: "UUID",
        category: "misc",
        description: "Random version 4 UUID",
        example: "590c1440-9888-45b0-bd51-a817ee07c3f2",
        output: OutputKind::String,
        params: &[],
        generate: uuid,
    },
    RawEntry {
        native: "hexcolor",
        label: "Hex Color",
        category: "misc",
        description: "Colour as a hex triplet",
        example: "#a99fb4",
        output: OutputKind::String,
        params: &[],
        generate: hex_color,
    },
    RawEntry {
        native: "rgbcolor",
        label: "RGB Color",
        category: "misc",
        description: "Colour as red, green, and blue components",
        example: "[152, 23, 144]",
        output: OutputKind::IntArray,
        params: &[],
        generate: rgb_color,
    },
    RawEntry {
        native: "safecolor",
        label: "Safe Color",
        category: "misc",
        description: "One of the sixteen basic web colour names",
        example: "teal",
        output: OutputKind::String,
        params: &[],
        generate: safe_color,
    },
    RawEntry {
        native: "flipacoin",
        label: "Flip A Coin",
        category: "misc",
        description: "Heads or tails",
        example: "tails",
        output: OutputKind::String,
        params: &[],
        generate: flip_a_coin,
    },
    RawEntry {
        native: "randomstring",
        label: "Random String",
        category: "misc",
        description: "One string chosen from the given list",
        example: "b",
        output: OutputKind::String,
        params: &[param("strs", ParamKind::StringArray, "", "Strings to choose from")],
        generate: random_string,
    },
    RawEntry {
        native: "shufflestrings",
        label: "Shuffle Strings",
        category: "misc",
        description: "The given strings in random order",
        example: "[\"c\", \"a\", \"b\"]",
        output: OutputKind::StringArray,
        params: &[param("strs", ParamKind::StringArray, "", "Strings to shuffle")],
        generate: shuffle_strings,
    },
    RawEntry {
        native: "letter",
        label: "Letter",
        category: "misc",
        description: "Single lowercase ASCII letter",
        example: "g",
        output: OutputKind::String,
        params: &[],
        generate: letter,
    },
    RawEntry {
        native: "lettern",
        label: "Letter N",
        category: "misc",
        description: "Run of lowercase ASCII letters of the given length",
        example: "gbrma",
        output: OutputKind::String,
        params: &[param("count", ParamKind::Int, "5", "Number of letters")],
        generate: letter_n,
    },
    RawEntry {
        native: "numerify",
        label: "Numerify",
        category: "misc",
        description: "Replaces every # in the input with a random digit",
        example: "381",
        output: OutputKind::String,
        params: &[param("str", ParamKind::String, "###", "Template to fill")],
        generate: numerify,
    },
    RawEntry {
        native: "lexify",
        label: "Lexify",
        category: "misc",
        description: "Replaces every ? in the input with a random letter",
        example: "khq",
        output: OutputKind::String,
        params: &[param("str", ParamKind::String, "???", "Template to fill")],
        generate: lexify,
    },
    RawEntry {
        native: "weighted",
        label: "Weighted",
        category: "misc",
        description: "One string chosen from a list; withheld from the registry",
        example: "hello",
        output: OutputKind::String,
        params: &[param("strs", ParamKind::StringArray, "", "Strings to choose from")],
        generate: random_string,
    },
    RawEntry {
        native: "filename",
        label: "File Name",
        category: "file",
        description: "File name with an extension",
        example: "report.pdf",
        output: OutputKind::String,
        params: &[],
        generate: file_name,
    },
    RawEntry {
        native: "fileextension",
        label: "File Extension",
        category: "file",
        description: "File extension without the dot",
        example: "csv",
        output: OutputKind::String,
        params: &[],
        generate: file_extension,
    },
    RawEntry {
        native: "filepath",
        label: "File Path",
        category: "file",
        description: "Absolute path to a file",
        example: "/var/lib/report.pdf",
        output: OutputKind::String,
        params: &[],
        generate: file_path,
    },
    RawEntry {
        native: "dirpath",
        label: "Dir Path",
        category: "file",
        description: "Absolute path to a directory",
        example: "/usr/share",
        output: OutputKind::String,
        params: &[],
        generate: dir_path,
    },
    RawEntry {
        native: "mimetype",
        label: "Mime Type",
        category: "file",
        description: "Media type",
        example: "application/json",
        output: OutputKind::String,
        params: &[],
        generate: mime_type,
    },
    RawEntry {
        native: "semver",
        label: "Semver",
        category: "file",
        description: "Semantic version number",
        example: "1.4.2",
        output: OutputKind::String,
        params: &[],
        generate: semver,
    },
];

const SAFE_COLORS: &[&str] = &[
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "purple", "red", "silver", "teal", "white", "yellow",
];

const COIN_FACES: &[&str] = &["heads", "tails"];

const MIME_TYPES: &[&str] = &[
    "application/json",
    "application/pdf",
    "application/xml",
    "application/zip",
    "audio/mpeg",
    "image/gif",
    "image/jpeg",
    "image/png",
    "text/css",
    "text/csv",
    "text/html",
    "text/plain",
    "video/mp4",
];

fake_text!(file_name, FileName(EN));
fake_text!(file_extension, FileExtension(EN));
fake_text!(file_path, FilePath(EN));
fake_text!(dir_path, DirPath(EN));

fn uuid(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let id = Builder::from_random_bytes(rng.random()).into_uuid();
    Ok(Value::String(id.to_string()))
}

fn hex_color(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let [red, green, blue]: [u8; 3] = rng.random();
    Ok(Value::String(format!("#{red:02x}{green:02x}{blue:02x}")))
}

fn rgb_color(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let channels: [u8; 3] = rng.random();
    Ok(Value::from(channels.to_vec()))
}

fn safe_color(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, SAFE_COLORS))
}

fn flip_a_coin(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, COIN_FACES))
}

fn random_string(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let strs = BoundParams::required(params, "strs")?.strings("strs")?;
    strs.choose(rng)
        .cloned()
        .map(Value::String)
        .ok_or_else(|| GenerateError::EmptyChoice {
            parameter: "strs".to_owned(),
        })
}

fn shuffle_strings(
    rng: &mut FakerRng,
    params: Option<&BoundParams>,
) -> Result<Value, GenerateError> {
    let mut strs = BoundParams::required(params, "strs")?
        .strings("strs")?
        .to_vec();
    strs.shuffle(rng);
    Ok(Value::from(strs))
}

fn letter(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::String(letters(rng, 1)))
}

fn letter_n(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let length = count(BoundParams::required(params, "count")?, "count")?;
    Ok(Value::String(letters(rng, length)))
}

fn fill_template(
    rng: &mut FakerRng,
    params: Option<&BoundParams>,
    marker: char,
    fill: fn(&mut FakerRng, usize) -> String,
) -> Result<Value, GenerateError> {
    let template = BoundParams::required(params, "str")?.string("str")?;
    let filled = template
        .chars()
        .map(|c| {
            if c == marker {
                fill(rng, 1)
            } else {
                c.to_string()
            }
        })
        .collect();
    Ok(Value::String(filled))
}

fn numerify(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    fill_template(rng, params, '#', digits)
}

fn lexify(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    fill_template(rng, params, '?', letters)
}

fn mime_type(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, MIME_TYPES))
}

fn semver(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let major: u8 = rng.random_range(0..10);
    let minor: u8 = rng.random_range(0..20);
    let patch: u8 = rng.random_range(0..30);
    Ok(Value::String(format!("{major}.{minor}.{patch}")))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    fn with(name: &str, values: &[&str]) -> BoundParams {
        let mut params = BoundParams::new();
        params.insert(name, values.iter().map(|v| (*v).to_owned()).collect());
        params
    }

    #[test]
    fn uuid_is_version_four() {
        let mut rng = FakerRng::seed_from_u64(2);
        let value = uuid(&mut rng, None).expect("uuid");
        let parsed = ::uuid::Uuid::parse_str(value.as_str().expect("string")).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[rstest]
    #[case::numerify('#')]
    #[case::lexify('?')]
    fn templates_replace_only_their_marker(#[case] marker: char) {
        let mut rng = FakerRng::seed_from_u64(2);
        let template = format!("ab-{marker}{marker}");
        let params = with("str", &[template.as_str()]);
        let value = if marker == '#' {
            numerify(&mut rng, Some(&params))
        } else {
            lexify(&mut rng, Some(&params))
        }
        .expect("filled");
        let text = value.as_str().expect("string");
        assert!(text.starts_with("ab-"));
        assert_eq!(text.len(), 5);
        assert!(text.chars().skip(3).all(|c| c.is_ascii_alphanumeric()));
        assert!(!text.contains(marker));
    }

    #[test]
    fn random_string_rejects_empty_list() {
        let mut rng = FakerRng::seed_from_u64(2);
        assert_eq!(
            random_string(&mut rng, Some(&with("strs", &[]))),
            Err(GenerateError::EmptyChoice {
                parameter: "strs".to_owned()
            })
        );
    }

    #[test]
    fn hex_color_is_a_hash_and_six_hex_digits() {
        let mut rng = FakerRng::seed_from_u64(2);
        let value = hex_color(&mut rng, None).expect("colour");
        let text = value.as_str().expect("string");
        assert_eq!(text.len(), 7);
        assert!(text.starts_with('#'));
        assert!(text.chars().skip(1).all(|c| c.is_ascii_hexdigit()));
    }
}
