//! Dynamic-object surface for scripting runtimes.
//!
//! A scripting binding exposes two kinds of object: the top-level faker and
//! one view per category. Both are modelled by the closed [`DynamicObject`]
//! enum, which answers the four property hooks a dynamic object needs
//! (`get`, `has`, `keys`, `delete`). Property lookups never fail; an unknown
//! key yields [`Property::Undefined`]. Invocation failures are reported
//! through [`FakerError`].

use serde_json::Value;

use crate::error::FakerError;
use crate::faker::{BoundFunction, CategoryView, Faker};

/// Reserved top-level key resolving to the invocation capability.
pub const CALL_KEY: &str = "call";

/// An object as seen by a dynamically typed caller.
#[derive(Debug, Clone, Copy)]
pub enum DynamicObject<'f> {
    /// The faker itself: its keys are category names plus [`CALL_KEY`].
    TopLevel(&'f Faker),
    /// One category: a bag of callable functions.
    Category(CategoryView<'f>),
}

impl<'f> DynamicObject<'f> {
    /// Resolves a property.
    ///
    /// On the top level, [`CALL_KEY`] yields [`Property::Call`] and a
    /// category name yields [`Property::Category`]. On a category, a function
    /// name yields [`Property::Function`]. Anything else is
    /// [`Property::Undefined`].
    ///
    /// # Example
    ///
    /// ```
    /// use faker_registry::{DynamicObject, Faker, Property};
    ///
    /// let faker = Faker::new(42);
    /// let top = DynamicObject::from(&faker);
    ///
    /// assert!(matches!(top.get("person"), Property::Category(_)));
    /// assert!(matches!(top.get("spaceships"), Property::Undefined));
    ///
    /// let Property::Category(person) = top.get("person") else {
    ///     panic!("expected a category");
    /// };
    /// let Property::Function(first_name) = DynamicObject::from(person).get("firstName") else {
    ///     panic!("expected a function");
    /// };
    /// assert!(first_name.invoke(&[]).expect("generated").is_string());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Property<'f> {
        match self {
            Self::TopLevel(faker) => {
                if key == CALL_KEY {
                    return Property::Call(Invoker { faker: *faker });
                }
                faker
                    .category(key)
                    .map_or(Property::Undefined, Property::Category)
            }
            Self::Category(view) => view.get(key).map_or(Property::Undefined, Property::Function),
        }
    }

    /// Membership testing is not supported; always `false`.
    ///
    /// Callers discover members through [`Self::get`] and [`Self::keys`].
    #[must_use]
    pub const fn has(&self, _key: &str) -> bool {
        false
    }

    /// Returns the enumerable keys.
    ///
    /// The top level enumerates category names; a category enumerates
    /// nothing, its functions being reachable only through [`Self::get`].
    #[must_use]
    pub fn keys(&self) -> &'f [String] {
        match self {
            Self::TopLevel(faker) => faker.category_names(),
            Self::Category(_) => &[],
        }
    }

    /// Properties are read-only; always `false`.
    #[must_use]
    pub const fn delete(&self, _key: &str) -> bool {
        false
    }
}

impl<'f> From<&'f Faker> for DynamicObject<'f> {
    fn from(faker: &'f Faker) -> Self {
        Self::TopLevel(faker)
    }
}

impl<'f> From<CategoryView<'f>> for DynamicObject<'f> {
    fn from(view: CategoryView<'f>) -> Self {
        Self::Category(view)
    }
}

/// Result of a property lookup.
#[derive(Debug, Clone, Copy)]
pub enum Property<'f> {
    /// The top-level invocation capability.
    Call(Invoker<'f>),
    /// A category object.
    Category(CategoryView<'f>),
    /// A callable function of a category.
    Function(BoundFunction<'f>),
    /// No such property.
    Undefined,
}

impl<'f> Property<'f> {
    /// Returns `true` for [`Property::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the property as an object when it is a category.
    #[must_use]
    pub const fn as_object(&self) -> Option<DynamicObject<'f>> {
        match self {
            Self::Category(view) => Some(DynamicObject::Category(*view)),
            Self::Call(_) | Self::Function(_) | Self::Undefined => None,
        }
    }
}

/// The `call(name, ...args)` capability of a top-level object.
#[derive(Debug, Clone, Copy)]
pub struct Invoker<'f> {
    faker: &'f Faker,
}

impl Invoker<'_> {
    /// Invokes the function named by the first argument with the rest.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidInvocation`] if the first argument is
    /// missing or not a string, otherwise as [`Faker::call`].
    ///
    /// # Example
    ///
    /// ```
    /// use faker_registry::{DynamicObject, Faker, FakerError, Property};
    /// use serde_json::json;
    ///
    /// let faker = Faker::new(42);
    /// let Property::Call(call) = DynamicObject::from(&faker).get("call") else {
    ///     panic!("expected the call capability");
    /// };
    ///
    /// let value = call.call(&[json!("number"), json!(1), json!(6)]).expect("generated");
    /// assert!(value.as_i64().is_some_and(|n| (1..=6).contains(&n)));
    ///
    /// let err = call.call(&[json!("no_such_function")]).expect_err("unknown");
    /// assert!(matches!(err, FakerError::UnknownFunction { .. }));
    /// ```
    pub fn call(&self, args: &[Value]) -> Result<Value, FakerError> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| FakerError::InvalidInvocation {
                message: "missing function name".to_owned(),
            })?;
        let Value::String(name) = name else {
            return Err(FakerError::InvalidInvocation {
                message: format!("function name must be a string, got {name}"),
            });
        };
        self.faker.call(name, rest)
    }
}
