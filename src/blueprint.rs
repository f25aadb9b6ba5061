//! The schema-free intermediate representation every engine can materialize and every writer
//! can emit: a tagged-variant tree isomorphic to JSON, plus an `Invalid` sentinel.

use indexmap::IndexMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::buffer::{BufferReader, BufferWriter};
use crate::dispatch::{FromBlueprint, FromBuffer, ToBlueprint, ToBuffer};

/// The 0..=7 binary type tag from spec §6.1, carried as its own enum so a reader can validate
/// an incoming byte with `TryFromPrimitive` rather than matching a bare range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub(crate) enum BlueprintTag {
    Invalid = 0,
    Null = 1,
    Boolean = 2,
    Integer = 3,
    FloatingPoint = 4,
    String = 5,
    Array = 6,
    Object = 7,
}

/// A node in the blueprint tree. Exactly one variant is active at a time; reassigning a
/// container destroys its previous children.
#[derive(Debug, Clone, PartialEq)]
pub enum Blueprint {
    /// Sentinel meaning "no value set".
    Invalid,
    Null,
    Boolean(bool),
    Integer(i64),
    FloatingPoint(f64),
    String(String),
    Array(Vec<Blueprint>),
    Object(IndexMap<String, Blueprint>),
}

impl Default for Blueprint {
    fn default() -> Self {
        Blueprint::Invalid
    }
}

macro_rules! setter {
    ($name:ident, $variant:ident, $t:ty) => {
        pub fn $name(&mut self, value: $t) {
            *self = Blueprint::$variant(value);
        }
    };
}

macro_rules! predicate {
    ($name:ident, $variant:ident) => {
        pub fn $name(&self) -> bool {
            matches!(self, Blueprint::$variant(..))
        }
    };
}

impl Blueprint {
    pub fn set_to_null(&mut self) {
        *self = Blueprint::Null;
    }

    pub fn set_to_invalid(&mut self) {
        *self = Blueprint::Invalid;
    }

    setter!(set_to_boolean, Boolean, bool);
    setter!(set_to_integer, Integer, i64);
    setter!(set_to_floating_point, FloatingPoint, f64);
    setter!(set_to_string, String, String);
    setter!(set_to_array, Array, Vec<Blueprint>);
    setter!(set_to_object, Object, IndexMap<String, Blueprint>);

    pub fn is_invalid(&self) -> bool {
        matches!(self, Blueprint::Invalid)
    }

    predicate!(is_null, Null);
    predicate!(is_boolean, Boolean);
    predicate!(is_integer, Integer);
    predicate!(is_floating_point, FloatingPoint);
    predicate!(is_string, String);
    predicate!(is_array, Array);
    predicate!(is_object, Object);

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Blueprint::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Blueprint::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_floating_point(&self) -> Option<f64> {
        match self {
            Blueprint::FloatingPoint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Blueprint::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Blueprint]> {
        match self {
            Blueprint::Array(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Blueprint>> {
        match self {
            Blueprint::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Blueprint>> {
        match self {
            Blueprint::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Blueprint>> {
        match self {
            Blueprint::Object(v) => Some(v),
            _ => None,
        }
    }

    /// The 0..=7 binary type tag from spec §6.1, in canonical declaration order.
    pub(crate) fn binary_tag(&self) -> u8 {
        self.tag().into()
    }

    pub(crate) fn tag(&self) -> BlueprintTag {
        match self {
            Blueprint::Invalid => BlueprintTag::Invalid,
            Blueprint::Null => BlueprintTag::Null,
            Blueprint::Boolean(_) => BlueprintTag::Boolean,
            Blueprint::Integer(_) => BlueprintTag::Integer,
            Blueprint::FloatingPoint(_) => BlueprintTag::FloatingPoint,
            Blueprint::String(_) => BlueprintTag::String,
            Blueprint::Array(_) => BlueprintTag::Array,
            Blueprint::Object(_) => BlueprintTag::Object,
        }
    }
}

impl ToBuffer for Blueprint {
    fn to_buffer(&self, w: &mut BufferWriter) {
        w.write_u8(self.binary_tag());
        match self {
            Blueprint::Invalid | Blueprint::Null => {}
            Blueprint::Boolean(v) => w.write_bool(*v),
            Blueprint::Integer(v) => w.write_i64(*v),
            Blueprint::FloatingPoint(v) => w.write_f64(*v),
            Blueprint::String(v) => w.write_str(v),
            Blueprint::Array(items) => w.write_sequence(items.iter(), |w, item| item.to_buffer(w)),
            Blueprint::Object(map) => w.write_sequence(map.iter(), |w, (key, value)| {
                w.write_str(key);
                value.to_buffer(w);
            }),
        }
    }
}

impl FromBuffer for Blueprint {
    fn from_buffer(r: &mut BufferReader) -> Self {
        let byte = r.read_u8();
        let tag = match BlueprintTag::try_from(byte) {
            Ok(tag) => tag,
            Err(_) => {
                r.fail_with_invalid_tag(byte);
                return Blueprint::Invalid;
            }
        };

        match tag {
            BlueprintTag::Invalid => Blueprint::Invalid,
            BlueprintTag::Null => Blueprint::Null,
            BlueprintTag::Boolean => Blueprint::Boolean(r.read_bool()),
            BlueprintTag::Integer => Blueprint::Integer(r.read_i64()),
            BlueprintTag::FloatingPoint => Blueprint::FloatingPoint(r.read_f64()),
            BlueprintTag::String => Blueprint::String(r.read_string()),
            BlueprintTag::Array => Blueprint::Array(r.read_sequence(Blueprint::from_buffer)),
            BlueprintTag::Object => {
                let pairs: Vec<(String, Blueprint)> =
                    r.read_sequence(|r| (r.read_string(), Blueprint::from_buffer(r)));
                Blueprint::Object(pairs.into_iter().collect())
            }
        }
    }
}

/// A [`Blueprint`] navigating into itself: the identity case that lets whole trees flow
/// through the same `to_blueprint`/`from_blueprint` convenience functions typed values use.
impl ToBlueprint for Blueprint {
    fn to_blueprint(&self) -> Blueprint {
        self.clone()
    }
}

impl FromBlueprint for Blueprint {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_replace_tag_and_payload() {
        let mut b = Blueprint::Integer(5);
        b.set_to_string("hi".to_string());
        assert!(b.is_string());
        assert_eq!(b.as_str(), Some("hi"));
        assert_eq!(b.as_integer(), None);
    }

    #[test]
    fn binary_tags_are_0_through_7() {
        let values = [
            Blueprint::Invalid,
            Blueprint::Null,
            Blueprint::Boolean(true),
            Blueprint::Integer(1),
            Blueprint::FloatingPoint(1.0),
            Blueprint::String("x".into()),
            Blueprint::Array(vec![]),
            Blueprint::Object(IndexMap::new()),
        ];

        for (i, v) in values.iter().enumerate() {
            assert_eq!(v.binary_tag(), i as u8);
        }
    }

    #[test]
    fn object_iteration_preserves_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), Blueprint::Integer(1));
        map.insert("a".to_string(), Blueprint::Integer(2));
        let b = Blueprint::Object(map);

        let keys: Vec<_> = b.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
