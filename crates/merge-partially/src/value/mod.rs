//! Dynamic value model the merge engine operates on.
//!
//! `Value` is a closed set of kinds: JSON values plus dates, big integers,
//! symbol tokens, callables and an explicit `Undefined` meaning "absent".
//! `Clone` is a full structural copy; only immutable handles
//! (`Callable`, `Opaque`) are shared between the copy and the original.

mod handles;
mod json;


pub use handles::{Callable, Opaque, Symbol};

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// Associative object: own keys mapped to values.
pub type Object = BTreeMap<Key, Value>;

static UNDEFINED: Value = Value::Undefined;

/// Key of an object entry.
///
/// `Index(n)` and `Name` holding the canonical decimal form of `n` are the
/// same key for equality, ordering and hashing.
#[derive(Debug, Clone)]
pub enum Key {
    /// String property name.
    Name(String),
    /// Numeric property name.
    Index(u64),
    /// Unique symbol token.
    Symbol(Symbol),
}

/// Comparable form of a key.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CanonicalKey<'a> {
    Index(u64),
    Name(&'a str),
    Symbol(&'a Symbol),
}

impl Key {
    /// Key for a property name; canonical integer names become `Index`.
    pub fn name(name: impl Into<String>) -> Self {
        let name = name.into();
        match parse_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }

    /// Property name for string keys.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    fn canonical(&self) -> CanonicalKey<'_> {
        match self {
            Key::Name(name) => match parse_index(name) {
                Some(index) => CanonicalKey::Index(index),
                None => CanonicalKey::Name(name),
            },
            Key::Index(index) => CanonicalKey::Index(*index),
            Key::Symbol(symbol) => CanonicalKey::Symbol(symbol),
        }
    }
}

/// Parse `name` as an index when it is the canonical decimal form of a `u64`.
fn parse_index(name: &str) -> Option<u64> {
    let canonical = !name.is_empty()
        && name.bytes().all(|byte| byte.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if canonical { name.parse().ok() } else { None }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::name(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::name(name)
    }
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        Key::Index(index)
    }
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Key::Symbol(symbol)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
            Key::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value; as an override it means "keep the seed".
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Date(DateTime<Utc>),
    Symbol(Symbol),
    Function(Callable),
    Array(Vec<Value>),
    Object(Object),
    /// Foreign handle with no structural meaning for merging.
    Opaque(Opaque),
}

impl Value {
    /// Build an object value from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Build an object value with no keys.
    pub fn empty_object() -> Self {
        Value::Object(Object::new())
    }

    /// Build an array value.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(items.into_iter().collect())
    }

    /// Look up an own key on an object value.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(&key.into()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Short kind name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Opaque(_) => "opaque",
        }
    }
}

impl<K: Into<Key>> Index<K> for Value {
    type Output = Value;

    /// Missing keys and non-object values index to `Undefined`.
    fn index(&self, key: K) -> &Value {
        self.get(key).unwrap_or(&UNDEFINED)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&json::render(self))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Number(f64::from(number))
    }
}

impl From<i128> for Value {
    fn from(number: i128) -> Self {
        Value::BigInt(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Function(callable)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Opaque(opaque)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_f64() == Some(f64::from(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
