//! A small dynamic value model used for the records that travel
//! through a [Store](crate::Store) dispatch.
//!
//! Records ([Object]) remember how they were created through an
//! optional [Prototype] link, which is what the action validator
//! ([is_plain_object()](crate::is_plain_object())) inspects.

use serde::{
    ser::{SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{collections::BTreeMap, fmt::Debug, rc::Rc};

thread_local! {
    static OBJECT_PROTOTYPE: Rc<Prototype> = Rc::new(Prototype {
        name: String::from("Object"),
        parent: None,
    });
}

/// A link in the chain of "constructors" an [Object] was created
/// through.
///
/// The chain ends at a root prototype. Object literals
/// ([Object::new()]) link directly to the shared root returned by
/// [Prototype::object()].
pub struct Prototype {
    name: String,
    parent: Option<Rc<Prototype>>,
}

impl Prototype {
    /// The root prototype shared by every object literal created on
    /// this thread.
    pub fn object() -> Rc<Prototype> {
        OBJECT_PROTOTYPE.with(Rc::clone)
    }

    /// Create a new, unrelated root prototype (for example an object
    /// root belonging to some other environment).
    pub fn root<N: Into<String>>(name: N) -> Rc<Prototype> {
        Rc::new(Prototype {
            name: name.into(),
            parent: None,
        })
    }

    /// Create a prototype which inherits from `parent`, as a custom
    /// constructor would.
    pub fn extend<N: Into<String>>(parent: &Rc<Prototype>, name: N) -> Rc<Prototype> {
        Rc::new(Prototype {
            name: name.into(),
            parent: Some(parent.clone()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Rc<Prototype>> {
        self.parent.as_ref()
    }
}

impl Debug for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prototype({}", self.name)?;
        let mut parent = self.parent.as_ref();
        while let Some(p) = parent {
            write!(f, " -> {}", p.name)?;
            parent = p.parent.as_ref();
        }
        write!(f, ")")
    }
}

/// A record with named fields, and an optional [Prototype] link.
#[derive(Clone)]
pub struct Object {
    prototype: Option<Rc<Prototype>>,
    fields: BTreeMap<String, Value>,
}

impl Object {
    /// Create an empty object literal.
    pub fn new() -> Self {
        Self::with_prototype(Prototype::object())
    }

    /// Create an empty object with no prototype at all.
    pub fn bare() -> Self {
        Self {
            prototype: None,
            fields: BTreeMap::new(),
        }
    }

    /// Create an empty object linked to `prototype`.
    pub fn with_prototype(prototype: Rc<Prototype>) -> Self {
        Self {
            prototype: Some(prototype),
            fields: BTreeMap::new(),
        }
    }

    /// Create an object literal with its `type` field set, ready to
    /// be dispatched as an action.
    pub fn of_type<T: Into<Value>>(action_type: T) -> Self {
        Self::new().field("type", action_type)
    }

    /// Builder style version of [Object::insert()].
    pub fn field<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `type` field of this record, if present.
    pub fn action_type(&self) -> Option<&Value> {
        self.get("type")
    }

    /// Returns `true` if the `type` field is the string `action_type`.
    pub fn is_type(&self, action_type: &str) -> bool {
        match self.action_type() {
            Some(Value::String(t)) => t == action_type,
            _ => false,
        }
    }

    pub fn prototype(&self) -> Option<&Rc<Prototype>> {
        self.prototype.as_ref()
    }

    /// Returns `true` if this object has no prototype, or if its
    /// direct prototype is also the end of its prototype chain (it
    /// was not produced by a custom constructor).
    pub fn is_plain(&self) -> bool {
        let proto = match &self.prototype {
            Some(proto) => proto,
            None => return true,
        };

        let mut base = proto;
        while let Some(parent) = base.parent() {
            base = parent;
        }

        Rc::ptr_eq(proto, base)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        let same_prototype = match (&self.prototype, &other.prototype) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_prototype && self.fields == other.fields
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(proto) = &self.prototype {
            if !Rc::ptr_eq(proto, &Prototype::object()) {
                write!(f, "{} ", proto.name)?;
            }
        }
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

/// A dynamically typed value.
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Object(object) => object.fmt(f),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// JSON objects become object literals.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::new();
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Value::Object(object)
            }
        }
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.fields() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
