//! The read-side mirror of [`crate::blueprint_writer::BlueprintWriter`]: a stacked cursor that
//! navigates an existing [`Blueprint`] tree without consuming it.

use crate::blueprint::Blueprint;
use crate::error::BlueprintError;

static INVALID: Blueprint = Blueprint::Invalid;

enum PathSegment {
    Key(String),
    Index(usize),
}

pub struct BlueprintReader<'a> {
    root: &'a Blueprint,
    stack: Vec<PathSegment>,
    failed: bool,
    errors: Vec<BlueprintError>,
}

impl<'a> BlueprintReader<'a> {
    pub fn new(root: &'a Blueprint) -> Self {
        BlueprintReader { root, stack: Vec::new(), failed: false, errors: Vec::new() }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn errors(&self) -> &[BlueprintError] {
        &self.errors
    }

    fn path(&self) -> String {
        let mut out = String::new();
        for seg in &self.stack {
            match seg {
                PathSegment::Key(k) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(k);
                }
                PathSegment::Index(i) => out.push_str(&format!("[{i}]")),
            }
        }
        if out.is_empty() {
            out.push('$');
        }
        out
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.failed = true;
        let path = self.path();
        self.errors.push(BlueprintError::new(path, message));
    }

    pub fn current(&self) -> &'a Blueprint {
        let mut node = self.root;
        for seg in &self.stack {
            node = match seg {
                PathSegment::Key(key) => node.as_object().and_then(|o| o.get(key)).unwrap_or(&INVALID),
                PathSegment::Index(i) => node.as_array().and_then(|a| a.get(*i)).unwrap_or(&INVALID),
            };
        }
        node
    }

    pub fn get_boolean(&mut self) -> bool {
        match self.current().as_boolean() {
            Some(v) => v,
            None => {
                self.fail("expected a boolean");
                false
            }
        }
    }

    pub fn get_integer(&mut self) -> i64 {
        match self.current().as_integer() {
            Some(v) => v,
            None => {
                self.fail("expected an integer");
                0
            }
        }
    }

    pub fn get_floating_point(&mut self) -> f64 {
        match self.current().as_floating_point() {
            Some(v) => v,
            None => {
                self.fail("expected a floating point number");
                0.0
            }
        }
    }

    pub fn get_string(&mut self) -> String {
        match self.current().as_str() {
            Some(v) => v.to_string(),
            None => {
                self.fail("expected a string");
                String::new()
            }
        }
    }

    pub fn array_len(&mut self) -> usize {
        match self.current().as_array() {
            Some(v) => v.len(),
            None => {
                self.fail("expected an array");
                0
            }
        }
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.current().as_object().map(|o| o.contains_key(name)).unwrap_or(false)
    }

    /// Descends into member `name`. Pair with [`Self::end_member`]; reading from a node that
    /// isn't an object, or a missing member, surfaces [`Blueprint::Invalid`] to subsequent
    /// reads and records a failure.
    pub fn set_member(&mut self, name: &str) {
        if !self.current().is_object() {
            self.fail("expected an object");
        }
        self.stack.push(PathSegment::Key(name.to_string()));
    }

    pub fn end_member(&mut self) {
        self.stack.pop();
    }

    pub fn push_element(&mut self, index: usize) {
        if !self.current().is_array() {
            self.fail("expected an array");
        }
        self.stack.push(PathSegment::Index(index));
    }

    pub fn end_element(&mut self) {
        self.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn navigates_object_and_array() {
        let mut obj = IndexMap::new();
        obj.insert("a".to_string(), Blueprint::Integer(1));
        obj.insert("b".to_string(), Blueprint::Array(vec![Blueprint::Boolean(true), Blueprint::Null]));
        let tree = Blueprint::Object(obj);

        let mut r = BlueprintReader::new(&tree);
        r.set_member("a");
        assert_eq!(r.get_integer(), 1);
        r.end_member();

        r.set_member("b");
        r.push_element(0);
        assert!(r.get_boolean());
        r.end_element();
        r.end_member();
        assert!(!r.has_failed());
    }

    #[test]
    fn missing_member_fails_with_path() {
        let tree = Blueprint::Object(IndexMap::new());
        let mut r = BlueprintReader::new(&tree);
        r.set_member("missing");
        let _ = r.get_integer();
        assert!(r.has_failed());
        assert_eq!(r.errors()[0].path, "missing");
    }
}
