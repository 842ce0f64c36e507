use std::fmt;

use crate::{
    error::FfgraphResult,
    name::check_name,
    value::Value,
};

/// One filter argument: a bare value, or a `key=value` pair.
///
/// A closed sum; render sites match exhaustively and no further variants are
/// anticipated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Argument {
    Positional(Value),
    Key { key: String, value: Value },
}

impl Argument {
    pub fn positional(value: impl Into<Value>) -> Self {
        Self::Positional(value.into())
    }

    /// Build a keyed argument. The key must be a valid identifier.
    pub fn key(key: impl Into<String>, value: impl Into<Value>) -> FfgraphResult<Self> {
        let key = key.into();
        check_name(&key)?;
        Ok(Self::Key {
            key,
            value: value.into(),
        })
    }

    pub fn value(&self) -> &Value {
        match self {
            Self::Positional(value) => value,
            Self::Key { value, .. } => value,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(value) => write!(f, "{value}"),
            Self::Key { key, value } => write!(f, "{key}={value}"),
        }
    }
}

/// Accepted shapes for a single [`Arguments::push`] call.
///
/// The tagged equivalent of call-shape dispatch: a pre-built argument, a bare
/// value (becomes positional), a `(key, value)` pair (becomes keyed), or a
/// whole `Arguments` (flattened, not nested).
#[derive(Clone, Debug)]
pub enum ArgumentInput {
    Argument(Argument),
    Value(Value),
    Pair(String, Value),
    Arguments(Arguments),
}

impl From<Argument> for ArgumentInput {
    fn from(argument: Argument) -> Self {
        Self::Argument(argument)
    }
}

impl From<Arguments> for ArgumentInput {
    fn from(arguments: Arguments) -> Self {
        Self::Arguments(arguments)
    }
}

impl From<Value> for ArgumentInput {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ArgumentInput {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for ArgumentInput {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

macro_rules! argument_input_from_int {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for ArgumentInput {
            fn from(value: $ty) -> Self {
                Self::Value(value.into())
            }
        })+
    };
}

argument_input_from_int!(i32, i64, u32, u64);

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for ArgumentInput {
    fn from((key, value): (K, V)) -> Self {
        Self::Pair(key.into(), value.into())
    }
}

/// An ordered, append-only sequence of [`Argument`]s.
///
/// Insertion order is significant and duplicates are allowed. Renders
/// `:`-joined; if any member's value needs escaping the whole joined string
/// is wrapped in single quotes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Arguments {
    all: Vec<Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of accepted shapes, left to right.
    pub fn from_items<I>(items: impl IntoIterator<Item = I>) -> FfgraphResult<Self>
    where
        I: Into<ArgumentInput>,
    {
        let mut arguments = Self::new();
        for item in items {
            arguments.push(item)?;
        }
        Ok(arguments)
    }

    /// Append one accepted shape.
    ///
    /// Keyed pairs validate their key first; on rejection the sequence is
    /// left untouched. A nested `Arguments` is flattened.
    pub fn push(&mut self, item: impl Into<ArgumentInput>) -> FfgraphResult<()> {
        match item.into() {
            ArgumentInput::Argument(argument) => self.all.push(argument),
            ArgumentInput::Value(value) => self.all.push(Argument::Positional(value)),
            ArgumentInput::Pair(key, value) => self.all.push(Argument::key(key, value)?),
            ArgumentInput::Arguments(arguments) => self.extend(arguments),
        }
        Ok(())
    }

    /// Append every member of `other`, in order.
    pub fn extend(&mut self, other: Arguments) {
        self.all.extend(other.all);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.all.iter()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// `true` iff any member's value contains special characters, in which
    /// case the rendered form is quoted as a whole.
    pub fn requires_quotes(&self) -> bool {
        self.iter().any(|arg| arg.value().contains_special_chars())
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.all.iter()
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(Argument::to_string)
            .collect::<Vec<_>>()
            .join(":");
        if self.requires_quotes() {
            write!(f, "'{joined}'")
        } else {
            f.write_str(&joined)
        }
    }
}
