//! Seeded fake data generators addressed by name.
//!
//! This crate ingests a catalog of fake data generators once, indexes them
//! by canonical name and by category, and lets callers invoke them through a
//! seeded [`Faker`] instance. A dynamic-object surface ([`DynamicObject`])
//! exposes the same functions to untyped callers such as scripting runtimes.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Normalizing raw catalog entries into lower-camel canonical names
//! - A process-wide [`Registry`] built exactly once, including the synthetic
//!   [`ZEN_CATEGORY`] that lists every function
//! - Reproducible generation from a non-zero seed
//! - Binding positional, dynamically typed arguments to named parameters
//! - A JSON catalog export describing every function and its parameters
//!
//! # Example
//!
//! ```
//! use faker_registry::Faker;
//! use serde_json::json;
//!
//! let faker = Faker::new(2026);
//!
//! let roll = faker.call("number", &[json!(1), json!(6)]).expect("generated");
//! assert!(roll.as_i64().is_some_and(|n| (1..=6).contains(&n)));
//!
//! let person = faker.category("person").expect("person category");
//! let first = person.call("firstName", &[]).expect("generated");
//! assert!(first.is_string());
//! ```

mod binder;
pub mod catalog;
pub mod cli;
mod config;
mod descriptor;
mod dispatch;
mod error;
mod faker;
mod ingest;
mod params;
mod registry;

pub use binder::bind_arguments;
pub use config::FakerSettings;
pub use descriptor::{Descriptor, FakerRng, GenerateFn, OutputKind, ParamKind, Parameter};
pub use dispatch::{CALL_KEY, DynamicObject, Invoker, Property};
pub use error::{FakerError, GenerateError};
pub use faker::{BoundFunction, CategoryView, Faker};
pub use ingest::{IngestionRules, RawEntry, RawParam, derive_key};
pub use params::BoundParams;
pub use registry::{Catalog, FunctionMap, Registry, ZEN_CATEGORY};
