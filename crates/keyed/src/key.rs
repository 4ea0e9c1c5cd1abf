use core::{
    fmt,
    str::FromStr,
};

/// A key of a keyed collection.
///
/// Keys are either integer indices or string names. Strings that are the
/// canonical decimal representation of an `i64` are always turned into
/// integer indices, so `"7"` and `7` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Creates a key from the given string.
    ///
    /// Returns an index key if the string is a canonical decimal integer.
    pub fn name<S>(name: S) -> Self
    where
        S: Into<String> + AsRef<str>,
    {
        match parse_canonical_index(name.as_ref()) {
            Some(index) => Self::Index(index),
            None => Self::Name(name.into()),
        }
    }

    /// Returns `true` if the key is an integer index.
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns the integer index of the key if any.
    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the string name of the key if any.
    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

/// Parses `text` as an index key if it is written the way an `i64` prints.
///
/// Rejects leading zeros, a leading `+`, negative zero and whitespace.
fn parse_canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let bytes = digits.as_bytes();
    match bytes {
        [] => return None,
        [b'0'] if digits.len() != text.len() => return None,
        [b'0', _, ..] => return None,
        _ => (),
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None
    }
    text.parse::<i64>().ok()
}

impl From<i64> for Key {
    #[inline]
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(index: i32) -> Self {
        Self::Index(index.into())
    }
}

impl From<u32> for Key {
    #[inline]
    fn from(index: u32) -> Self {
        Self::Index(index.into())
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::name(name)
    }
}

impl From<&Key> for Key {
    #[inline]
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl FromStr for Key {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::name(s))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Name(name) => write!(f, "{:?}", name),
        }
    }
}
