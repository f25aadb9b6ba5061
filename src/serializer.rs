//! The façade a [`crate::dispatch::Serialize`] impl is handed: one of the six engines, behind a
//! single type so a struct's field list only has to be written once.

use crate::blueprint::Blueprint;
use crate::blueprint_reader::BlueprintReader;
use crate::blueprint_writer::BlueprintWriter;
use crate::buffer::{BufferReader, BufferWriter};
use crate::dispatch::{FromBlueprint, FromBuffer, FromText, ToBlueprint, ToBuffer, ToText};
use crate::text::{StringReader, StringWriter};

/// A field type usable with [`Serializer::value`]/[`Serializer::named`]: every primitive and
/// every type built with [`crate::via_serialize!`] satisfies this automatically.
pub trait Value: ToBuffer + FromBuffer + ToText + FromText + ToBlueprint + FromBlueprint {}
impl<T: ToBuffer + FromBuffer + ToText + FromText + ToBlueprint + FromBlueprint> Value for T {}

pub enum Serializer<'a> {
    BufferWrite(&'a mut BufferWriter),
    BufferRead(&'a mut BufferReader<'a>),
    TextWrite(&'a mut StringWriter),
    TextRead(&'a mut StringReader<'a>),
    BlueprintWrite(&'a mut BlueprintWriter<'a>),
    BlueprintRead(&'a mut BlueprintReader<'a>),
}

impl<'a> Serializer<'a> {
    pub fn for_buffer_write(w: &'a mut BufferWriter) -> Self {
        Serializer::BufferWrite(w)
    }

    pub fn for_buffer_read(r: &'a mut BufferReader<'a>) -> Self {
        Serializer::BufferRead(r)
    }

    pub fn for_text_write(w: &'a mut StringWriter) -> Self {
        Serializer::TextWrite(w)
    }

    pub fn for_text_read(r: &'a mut StringReader<'a>) -> Self {
        Serializer::TextRead(r)
    }

    pub fn for_blueprint_write(w: &'a mut BlueprintWriter<'a>) -> Self {
        Serializer::BlueprintWrite(w)
    }

    pub fn for_blueprint_read(r: &'a mut BlueprintReader<'a>) -> Self {
        Serializer::BlueprintRead(r)
    }

    pub fn is_reading(&self) -> bool {
        matches!(self, Serializer::BufferRead(_) | Serializer::TextRead(_) | Serializer::BlueprintRead(_))
    }

    pub fn is_writing(&self) -> bool {
        !self.is_reading()
    }

    /// Serializes or deserializes `slot` in place, with no associated name — the binary engine
    /// convention, where field order carries the meaning names would elsewhere.
    pub fn value<T: Value>(&mut self, slot: &mut T) {
        match self {
            Serializer::BufferWrite(w) => slot.to_buffer(w),
            Serializer::BufferRead(r) => *slot = T::from_buffer(r),
            Serializer::TextWrite(w) => slot.to_text(w),
            Serializer::TextRead(r) => *slot = T::from_text(r),
            Serializer::BlueprintWrite(w) => w.set_value(slot.to_blueprint()),
            Serializer::BlueprintRead(r) => *slot = T::from_blueprint(r.current()),
        }
    }

    /// Serializes or deserializes `slot` under `name`. On the buffer and text engines this is
    /// equivalent to [`Self::value`] — names aren't encoded in those streams — while the
    /// blueprint engine descends into (or creates) an object member.
    pub fn named<T: Value>(&mut self, name: &str, slot: &mut T) {
        match self {
            Serializer::BlueprintWrite(w) => {
                w.set_member(name);
                slot.to_blueprint_field(w);
                w.end_member();
            }
            Serializer::BlueprintRead(r) => {
                r.set_member(name);
                *slot = T::from_blueprint(r.current());
                r.end_member();
            }
            _ => self.value(slot),
        }
    }

    /// Writes `slot` only if it differs from `default`, and on read leaves `slot` at `default`
    /// when the blueprint has no such member. Buffer/text engines always serialize the value.
    pub fn named_if_ne<T: Value + PartialEq>(&mut self, name: &str, slot: &mut T, default: &T) {
        match self {
            Serializer::BlueprintWrite(w) => {
                if slot != default {
                    w.set_member(name);
                    slot.to_blueprint_field(w);
                    w.end_member();
                }
            }
            Serializer::BlueprintRead(r) => {
                if r.has_member(name) {
                    r.set_member(name);
                    *slot = T::from_blueprint(r.current());
                    r.end_member();
                } else {
                    *slot = default.clone_via_blueprint();
                }
            }
            _ => self.value(slot),
        }
    }
}

trait ToBlueprintField {
    fn to_blueprint_field(&self, w: &mut BlueprintWriter);
}

impl<T: ToBlueprint> ToBlueprintField for T {
    fn to_blueprint_field(&self, w: &mut BlueprintWriter) {
        w.set_value(self.to_blueprint());
    }
}

trait CloneViaBlueprint: Sized {
    fn clone_via_blueprint(&self) -> Self;
}

impl<T: ToBlueprint + FromBlueprint> CloneViaBlueprint for T {
    fn clone_via_blueprint(&self) -> Self {
        Self::from_blueprint(&self.to_blueprint())
    }
}
