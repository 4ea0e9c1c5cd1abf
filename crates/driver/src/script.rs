use crate::{
    literal::{
        into_key,
        into_value,
    },
    Error,
};
use collections::{
    Key,
    StandardCollection,
    Value,
};
use serde_json::{
    Deserializer,
    Value as Json,
};
use std::io::Write;

/// A single script operation applied to a standard collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Get { key: Key, default: Option<Value> },
    Set { key: Key, value: Value },
    Push(Value),
    Pop,
    Shift,
    Unshift(Value),
    Remove(Key),
    Exists(Key),
    All,
    Clear,
    Count,
    Empty,
}

/// The names of all script operations.
const OPERATIONS: [&str; 12] = [
    "get", "set", "push", "pop", "shift", "unshift", "remove", "exists", "all", "clear", "count",
    "empty",
];

/// Checks that an operation received between `min` and `max` arguments.
fn expect_arity(
    line: usize,
    operation: &'static str,
    found: usize,
    min: usize,
    max: usize,
) -> Result<(), Error> {
    if found < min || found > max {
        let expected = match (min, max) {
            (0, 0) => "no arguments",
            (1, 1) => "a single argument",
            (1, 2) => "one or two arguments",
            _ => "two arguments",
        };
        return Err(Error::Arity {
            line,
            operation,
            expected,
            found,
        })
    }
    Ok(())
}

impl Operation {
    /// Parses a script line.
    ///
    /// Returns `None` for blank lines and `#` comments.
    ///
    /// # Errors
    ///
    /// If the operation is unknown or its arguments are malformed.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, Error> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None)
        }
        let (name, rest) = text
            .split_once(char::is_whitespace)
            .unwrap_or((text, ""));
        let name = OPERATIONS
            .iter()
            .copied()
            .find(|operation| *operation == name)
            .ok_or_else(|| {
                Error::UnknownOperation {
                    line,
                    name: name.to_string(),
                }
            })?;
        let args = Deserializer::from_str(rest)
            .into_iter::<Json>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| Error::Json { line, error })?;
        let found = args.len();
        let mut args = args.into_iter();
        // Arity is checked before any argument is taken.
        let mut arg = move || args.next().unwrap_or(Json::Null);
        let operation = match name {
            "get" => {
                expect_arity(line, name, found, 1, 2)?;
                let key = into_key(line, arg())?;
                let default = if found == 2 { Some(into_value(arg())) } else { None };
                Self::Get { key, default }
            }
            "set" => {
                expect_arity(line, name, found, 2, 2)?;
                let key = into_key(line, arg())?;
                Self::Set {
                    key,
                    value: into_value(arg()),
                }
            }
            "push" | "unshift" => {
                expect_arity(line, name, found, 1, 1)?;
                let value = into_value(arg());
                if name == "push" {
                    Self::Push(value)
                } else {
                    Self::Unshift(value)
                }
            }
            "remove" | "exists" => {
                expect_arity(line, name, found, 1, 1)?;
                let key = into_key(line, arg())?;
                if name == "remove" {
                    Self::Remove(key)
                } else {
                    Self::Exists(key)
                }
            }
            _ => {
                expect_arity(line, name, found, 0, 0)?;
                match name {
                    "pop" => Self::Pop,
                    "shift" => Self::Shift,
                    "all" => Self::All,
                    "clear" => Self::Clear,
                    "count" => Self::Count,
                    _ => Self::Empty,
                }
            }
        };
        Ok(Some(operation))
    }

    /// Applies the operation to the collection.
    ///
    /// Returns the text to print for operations that query the collection.
    ///
    /// # Errors
    ///
    /// If a pushed value cannot receive a key.
    pub fn apply(
        self,
        line: usize,
        collection: &mut StandardCollection,
    ) -> Result<Option<String>, Error> {
        let output = match self {
            Self::Get { key, default } => {
                let default = default.unwrap_or_default();
                Some(collection.get_or(key, &default).to_string())
            }
            Self::Set { key, value } => {
                collection.set(key, value);
                None
            }
            Self::Push(value) => {
                collection
                    .try_push(value)
                    .map_err(|error| Error::Collection { line, error })?;
                None
            }
            Self::Pop => Some(collection.pop().unwrap_or_default().to_string()),
            Self::Shift => Some(collection.shift().unwrap_or_default().to_string()),
            Self::Unshift(value) => {
                collection.unshift(value);
                None
            }
            Self::Remove(key) => {
                collection.remove(key);
                None
            }
            Self::Exists(key) => Some(collection.exists(key).to_string()),
            Self::All => Some(Value::Array(collection.clone()).to_string()),
            Self::Clear => {
                collection.clear();
                None
            }
            Self::Count => Some(collection.len().to_string()),
            Self::Empty => Some(collection.is_empty().to_string()),
        };
        Ok(output)
    }
}

/// Runs every operation of the script against the collection.
///
/// Writes one line to `out` per querying operation and returns the
/// number of executed operations.
///
/// # Errors
///
/// Stops at the first line that fails to parse or apply.
pub fn run<W>(
    script: &str,
    collection: &mut StandardCollection,
    out: &mut W,
) -> Result<usize, Error>
where
    W: Write,
{
    let mut executed = 0;
    for (index, text) in script.lines().enumerate() {
        let line = index + 1;
        let operation = match Operation::parse(line, text)? {
            Some(operation) => operation,
            None => continue,
        };
        log::debug!("line {}: {:?}", line, operation);
        if let Some(output) = operation.apply(line, collection)? {
            writeln!(out, "{}", output)?;
        }
        executed += 1;
    }
    log::info!(
        "executed {} operations, {} entries remain",
        executed,
        collection.len()
    );
    Ok(executed)
}
