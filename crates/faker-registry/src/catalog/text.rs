//! Words, prose, and entertainment titles.

use fake::Fake;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::Rng;
use serde_json::Value;

use super::{count, fake_text, param, pick, pick_text};
use crate::descriptor::{FakerRng, OutputKind, ParamKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "word",
        label: "Word",
        category: "lorem",
        description: "Single placeholder word",
        example: "quia",
        output: OutputKind::String,
        params: &[],
        generate: word,
    },
    RawEntry {
        native: "words",
        label: "Words",
        category: "lorem",
        description: "List of placeholder words",
        example: "[\"quia\", \"sit\", \"amet\"]",
        output: OutputKind::StringArray,
        params: &[param("count", ParamKind::Int, "3", "Number of words")],
        generate: words,
    },
    RawEntry {
        native: "sentence",
        label: "Sentence",
        category: "lorem",
        description: "Capitalised sentence of placeholder words",
        example: "Quia sit amet dolor est.",
        output: OutputKind::String,
        params: &[param("wordCount", ParamKind::Int, "5", "Number of words")],
        generate: sentence,
    },
    RawEntry {
        native: "paragraph",
        label: "Paragraph",
        category: "lorem",
        description: "Several sentences of placeholder words",
        example: "Quia sit amet dolor est. Et enim aut vero minus.",
        output: OutputKind::String,
        params: &[param(
            "sentenceCount",
            ParamKind::Int,
            "3",
            "Number of sentences",
        )],
        generate: paragraph,
    },
    RawEntry {
        native: "noun",
        label: "Noun",
        category: "word",
        description: "Common English noun",
        example: "lantern",
        output: OutputKind::String,
        params: &[],
        generate: noun,
    },
    RawEntry {
        native: "verb",
        label: "Verb",
        category: "word",
        description: "Common English verb",
        example: "gather",
        output: OutputKind::String,
        params: &[],
        generate: verb,
    },
    RawEntry {
        native: "adjective",
        label: "Adjective",
        category: "word",
        description: "Common English adjective",
        example: "quiet",
        output: OutputKind::String,
        params: &[],
        generate: adjective,
    },
    RawEntry {
        native: "booktitle",
        label: "Title",
        category: "book",
        description: "Book title",
        example: "The Silent Harbour",
        output: OutputKind::String,
        params: &[],
        generate: title,
    },
    RawEntry {
        native: "bookauthor",
        label: "Author",
        category: "book",
        description: "Book author",
        example: "Markus Moen",
        output: OutputKind::String,
        params: &[],
        generate: author,
    },
    RawEntry {
        native: "bookgenre",
        label: "Genre",
        category: "book",
        description: "Literary genre",
        example: "Mystery",
        output: OutputKind::String,
        params: &[],
        generate: book_genre,
    },
    RawEntry {
        native: "moviename",
        label: "Name",
        category: "movie",
        description: "Film title",
        example: "The Crimson Orchard",
        output: OutputKind::String,
        params: &[],
        generate: title,
    },
    RawEntry {
        native: "moviegenre",
        label: "Genre",
        category: "movie",
        description: "Film genre",
        example: "Western",
        output: OutputKind::String,
        params: &[],
        generate: movie_genre,
    },
];

const NOUNS: &[&str] = &[
    "anchor", "bridge", "canyon", "harbour", "lantern", "meadow", "orchard", "river", "signal",
    "tower", "valley", "window",
];

const VERBS: &[&str] = &[
    "build", "carry", "drift", "gather", "listen", "mend", "observe", "run", "travel", "wander",
];

const ADJECTIVES: &[&str] = &[
    "ancient", "bright", "crimson", "distant", "gentle", "hidden", "quiet", "restless", "silent",
    "wild",
];

const BOOK_GENRES: &[&str] = &[
    "Adventure",
    "Biography",
    "Fantasy",
    "Historical",
    "Horror",
    "Mystery",
    "Poetry",
    "Romance",
    "Science Fiction",
    "Thriller",
];

const MOVIE_GENRES: &[&str] = &[
    "Action",
    "Animation",
    "Comedy",
    "Documentary",
    "Drama",
    "Musical",
    "Noir",
    "Sci-Fi",
    "Thriller",
    "Western",
];

const MIN_SENTENCE_WORDS: usize = 4;
const MAX_SENTENCE_WORDS: usize = 9;

fake_text!(word, Word(EN));
fake_text!(author, Name(EN));

fn word_list(rng: &mut FakerRng, length: usize) -> Vec<String> {
    (0..length)
        .map(|_| Word(EN).fake_with_rng::<String, _>(rng))
        .collect()
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn sentence_of(rng: &mut FakerRng, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    format!("{}.", capitalise(&word_list(rng, length).join(" ")))
}

fn words(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let length = count(BoundParams::required(params, "count")?, "count")?;
    Ok(Value::from(word_list(rng, length)))
}

fn sentence(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let length = count(BoundParams::required(params, "wordCount")?, "wordCount")?;
    Ok(Value::String(sentence_of(rng, length)))
}

fn paragraph(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let sentences = count(
        BoundParams::required(params, "sentenceCount")?,
        "sentenceCount",
    )?;
    let text: Vec<String> = (0..sentences)
        .map(|_| {
            let length = rng.random_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS);
            sentence_of(rng, length)
        })
        .collect();
    Ok(Value::String(text.join(" ")))
}

fn noun(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, NOUNS))
}

fn verb(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, VERBS))
}

fn adjective(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, ADJECTIVES))
}

fn title(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let adjective = capitalise(pick(rng, ADJECTIVES));
    let noun = capitalise(pick(rng, NOUNS));
    Ok(Value::String(format!("The {adjective} {noun}")))
}

fn book_genre(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, BOOK_GENRES))
}

fn movie_genre(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(pick_text(rng, MOVIE_GENRES))
}
