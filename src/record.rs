//! Lenient views over the free-form plan document.
//!
//! Floor-plan records are loose key-value maps. Nothing here fails on an unexpected shape,
//! accessors simply report the value as absent and the converters decide what that means.
use crate::*;
use serde_json::{Map, Value};
use std::path::Path;

pub type Attrs = Map<String, Value>;

/// The element collections a plan is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Walls,
    Rooms,
    Items,
    Ducts,
    Rulers,
}

impl Kind {
    /// Key of the collection in the plan document.
    pub fn key(self) -> &'static str {
        match self {
            Kind::Walls => "walls",
            Kind::Rooms => "rooms2",
            Kind::Items => "items",
            Kind::Ducts => "pipes_ventilation",
            Kind::Rulers => "rulers",
        }
    }
}

/// The `plan` section of a floor-plan document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Plan(Attrs);

impl Plan {
    /// Read and parse a floor-plan document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&s)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(s)?)
    }

    /// Extract the `plan` section from a whole document.
    pub fn from_document(doc: Value) -> Result<Self> {
        match doc {
            Value::Object(mut root) => match root.remove("plan") {
                Some(Value::Object(plan)) => Ok(Plan(plan)),
                _ => Err(Error::MissingPlan),
            },
            _ => Err(Error::MissingPlan),
        }
    }

    /// Iterate the elements of a collection, in document order.
    ///
    /// Elements which are not records are passed through as raw values since the partition
    /// filter still has an opinion on them.
    pub fn raw(&self, kind: Kind) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0
            .get(kind.key())
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(id, v)| (id.as_str(), v))
    }

    /// Iterate the record elements of a collection, in document order.
    pub fn records(&self, kind: Kind) -> impl Iterator<Item = Record<'_>> + '_ {
        self.raw(kind).filter_map(move |(id, v)| match v {
            Value::Object(attrs) => Some(Record { id, attrs }),
            _ => {
                log::debug!("{} '{}' is not a record", kind.key(), id);
                None
            }
        })
    }
}

impl From<Attrs> for Plan {
    fn from(attrs: Attrs) -> Self {
        Plan(attrs)
    }
}

/// One element of the plan: a wall, hole, room, item, duct or ruler.
#[derive(Copy, Clone, Debug)]
pub struct Record<'a> {
    pub id: &'a str,
    attrs: &'a Attrs,
}

impl<'a> Record<'a> {
    pub fn new(id: &'a str, attrs: &'a Attrs) -> Self {
        Self { id, attrs }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.attrs.get(key)
    }

    /// A present, non-null value.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(number)
    }

    pub fn point(&self, key: &str) -> Option<Point2> {
        self.get(key).and_then(point)
    }

    /// The sub-plan tag of this record.
    pub fn tag(&self) -> PlanTag<'a> {
        PlanTag::of(self.get("plan"))
    }

    /// Nested records under `key`, such as the holes of a wall.
    pub fn children(&self, key: &str) -> impl Iterator<Item = Record<'a>> + 'a {
        self.get(key)
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .filter_map(|(id, v)| v.as_object().map(|attrs| Record::new(id, attrs)))
    }
}

/// A number, or a string holding one.
pub fn number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A `{x, y}` record with numeric coordinates.
pub fn point(v: &Value) -> Option<Point2> {
    let x = v.get("x")?.as_f64()?;
    let y = v.get("y")?.as_f64()?;
    Some([x, y])
}

/// A list of points, `None` if any entry is not a point.
pub fn point_list(v: &Value) -> Option<Vec<Point2>> {
    v.as_array()?.iter().map(point).collect()
}

/// Whether a value counts as set: non-null, non-zero, non-empty.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
