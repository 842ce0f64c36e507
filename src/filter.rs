use std::fmt;

use crate::{
    argument::{ArgumentInput, Arguments},
    error::{FfgraphError, FfgraphResult},
    link::Links,
    name::check_name,
    value::Value,
};

/// One named filtergraph operation with arguments and input/output pads.
///
/// Renders `<inputs><name>=<arguments><outputs>`; the `=` and argument text
/// are omitted entirely when there are no arguments. A filter's output links
/// are the handles a caller later reuses as another filter's inputs.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    name: String,
    arguments: Arguments,
    input: Links,
    output: Links,
}

impl Filter {
    /// A filter with no arguments and no pads. The name must be a valid
    /// identifier.
    pub fn new(name: impl Into<String>) -> FfgraphResult<Self> {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> FilterBuilder {
        FilterBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn input(&self) -> &Links {
        &self.input
    }

    pub fn output(&self) -> &Links {
        &self.output
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.input, self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "={}", self.arguments)?;
        }
        write!(f, "{}", self.output)
    }
}

/// Chainable construction for [`Filter`].
///
/// Positional and pre-built arguments accumulate in call order. Keyed
/// arguments merge dict-style: a base mapping from [`kwargs`](Self::kwargs),
/// then inline [`kwarg`](Self::kwarg) overrides — on key collision the
/// last-applied value wins while the key keeps its first-insertion position.
/// Keyed arguments are appended after the positionals. All validation happens
/// in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct FilterBuilder {
    name: String,
    args: Vec<ArgumentInput>,
    kwargs: Vec<(String, Value)>,
    input: Links,
    output: Links,
}

impl FilterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
            input: Links::new(),
            output: Links::new(),
        }
    }

    /// Append a positional value, a pre-built argument, or a whole
    /// `Arguments` (flattened).
    pub fn arg(mut self, arg: impl Into<ArgumentInput>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set one keyed argument, overriding an earlier value for the same key.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        upsert(&mut self.kwargs, key.into(), value.into());
        self
    }

    /// Merge a base mapping of keyed arguments, in iteration order.
    pub fn kwargs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            upsert(&mut self.kwargs, key.into(), value.into());
        }
        self
    }

    /// Set the input pads; accepts any form that normalizes to [`Links`].
    pub fn input(mut self, links: impl Into<Links>) -> Self {
        self.input = links.into();
        self
    }

    /// Set the output pads; accepts any form that normalizes to [`Links`].
    pub fn output(mut self, links: impl Into<Links>) -> Self {
        self.output = links.into();
        self
    }

    /// Validate the name and argument keys and assemble the filter.
    pub fn build(self) -> FfgraphResult<Filter> {
        if self.name.trim().is_empty() {
            return Err(FfgraphError::validation("filter name must be non-empty"));
        }
        check_name(&self.name)?;

        let mut arguments = Arguments::new();
        for arg in self.args {
            arguments.push(arg)?;
        }
        for (key, value) in self.kwargs {
            arguments.push((key, value))?;
        }

        Ok(Filter {
            name: self.name,
            arguments,
            input: self.input,
            output: self.output,
        })
    }
}

fn upsert(kwargs: &mut Vec<(String, Value)>, key: String, value: Value) {
    match kwargs.iter_mut().find(|(existing, _)| *existing == key) {
        Some(slot) => slot.1 = value,
        None => kwargs.push((key, value)),
    }
}
