//! Seeded generator instances and their per-category views.
//!
//! A [`Faker`] owns one random source and a shared handle to a
//! [`Registry`]. Every call, whether addressed by name or through a
//! [`CategoryView`], draws from that single source, so one seed fixes the
//! whole sequence of generated values.

use std::cell::RefCell;
use std::sync::Arc;

use rand::SeedableRng;
use serde_json::Value;
use tracing::{debug, trace};

use crate::binder::bind_arguments;
use crate::config::FakerSettings;
use crate::descriptor::{Descriptor, FakerRng};
use crate::error::FakerError;
use crate::registry::{FunctionMap, Registry};

/// A seeded random source bound to a registry.
///
/// The random source lives in a `RefCell`, which keeps `Faker` `!Sync`: one
/// instance serves one caller at a time. A re-entrant call made while a
/// generator is running is rejected with [`FakerError::InvalidInvocation`].
///
/// # Example
///
/// ```
/// use faker_registry::Faker;
///
/// let first = Faker::new(11);
/// let second = Faker::new(11);
///
/// let a = first.call("firstName", &[]).expect("generated");
/// let b = second.call("firstName", &[]).expect("generated");
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct Faker {
    registry: Arc<Registry>,
    rng: RefCell<FakerRng>,
    seed: u64,
}

impl Faker {
    /// Creates an instance over the process-wide registry.
    ///
    /// A `seed` of zero draws the random source from system entropy; any
    /// other value makes the output sequence reproducible.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_registry(Registry::global(), seed)
    }

    /// Creates an instance over an explicit registry.
    #[must_use]
    pub fn with_registry(registry: Arc<Registry>, seed: u64) -> Self {
        let rng = if seed == 0 {
            FakerRng::from_rng(&mut rand::rng())
        } else {
            FakerRng::seed_from_u64(seed)
        };
        debug!(seed, reproducible = seed != 0, "faker instance created");

        Self {
            registry,
            rng: RefCell::new(rng),
            seed,
        }
    }

    /// Creates an instance seeded from configuration.
    #[must_use]
    pub fn from_settings(settings: &FakerSettings) -> Self {
        Self::new(settings.seed())
    }

    /// Returns the seed this instance was created with; zero means entropy.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the registry this instance dispatches against.
    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Invokes the function registered under `name` with positional `args`.
    ///
    /// # Errors
    ///
    /// - [`FakerError::UnknownFunction`] if `name` is not registered.
    /// - [`FakerError::MissingParameter`] if a mandatory argument is absent.
    /// - [`FakerError::GenerationFailure`] if the generator fails.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, FakerError> {
        let descriptor =
            self.registry
                .lookup_by_name(name)
                .ok_or_else(|| FakerError::UnknownFunction {
                    name: name.to_owned(),
                })?;
        self.invoke(descriptor, args)
    }

    /// Returns a view over one category, or `None` if it does not exist.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<CategoryView<'_>> {
        self.registry
            .category_entry(name)
            .map(|(name, functions)| CategoryView {
                faker: self,
                name,
                functions,
            })
    }

    /// Returns every category name, sorted.
    #[must_use]
    pub fn category_names(&self) -> &[String] {
        self.registry.category_names()
    }

    fn invoke(&self, descriptor: &Descriptor, args: &[Value]) -> Result<Value, FakerError> {
        let bound = bind_arguments(descriptor.name(), descriptor.params(), args)?;

        let mut rng = self
            .rng
            .try_borrow_mut()
            .map_err(|_| FakerError::InvalidInvocation {
                message: "faker instance is already generating a value".to_owned(),
            })?;

        trace!(function = descriptor.name(), "invoking generator");
        descriptor
            .generate(&mut rng, bound.as_ref())
            .map_err(|source| FakerError::GenerationFailure {
                function: descriptor.name().to_owned(),
                source,
            })
    }
}

impl Default for Faker {
    /// Creates an entropy-seeded instance over the process-wide registry.
    fn default() -> Self {
        Self::new(0)
    }
}

/// The functions of one category, bound to the instance that produced it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryView<'f> {
    faker: &'f Faker,
    name: &'f str,
    functions: &'f FunctionMap,
}

impl<'f> CategoryView<'f> {
    /// Returns the category name.
    #[must_use]
    pub const fn name(&self) -> &'f str {
        self.name
    }

    /// Returns the names of the functions in this category, sorted.
    pub fn function_names(&self) -> impl Iterator<Item = &'f str> + use<'f> {
        self.functions.keys().map(String::as_str)
    }

    /// Resolves a function of this category.
    #[must_use]
    pub fn get(&self, function: &str) -> Option<BoundFunction<'f>> {
        self.functions
            .get(function)
            .map(|descriptor| BoundFunction {
                faker: self.faker,
                descriptor,
            })
    }

    /// Invokes a function of this category.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::UnknownFunction`] if the category has no such
    /// function, otherwise as [`Faker::call`].
    pub fn call(&self, function: &str, args: &[Value]) -> Result<Value, FakerError> {
        self.get(function)
            .ok_or_else(|| FakerError::UnknownFunction {
                name: format!("{}.{function}", self.name),
            })?
            .invoke(args)
    }
}

/// A resolved function ready to be invoked on its owning instance.
#[derive(Debug, Clone, Copy)]
pub struct BoundFunction<'f> {
    faker: &'f Faker,
    descriptor: &'f Arc<Descriptor>,
}

impl<'f> BoundFunction<'f> {
    /// Returns the descriptor this function dispatches to.
    #[must_use]
    pub fn descriptor(&self) -> &'f Descriptor {
        self.descriptor
    }

    /// Binds `args` and runs the generator on the owning instance's random
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::MissingParameter`] or
    /// [`FakerError::GenerationFailure`].
    pub fn invoke(&self, args: &[Value]) -> Result<Value, FakerError> {
        self.faker.invoke(self.descriptor, args)
    }
}
