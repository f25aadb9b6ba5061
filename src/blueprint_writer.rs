//! A stacked cursor that builds a [`Blueprint`] tree incrementally: `set_member`/`end_member`
//! and `push_element`/`end_element` navigate into a container and back out, while `set_*`
//! mutates whatever node the cursor currently sits on.

use indexmap::IndexMap;

use crate::blueprint::Blueprint;

enum PathSegment {
    Key(String),
    Index(usize),
}

pub struct BlueprintWriter<'a> {
    root: &'a mut Blueprint,
    stack: Vec<PathSegment>,
}

impl<'a> BlueprintWriter<'a> {
    pub fn new(root: &'a mut Blueprint) -> Self {
        BlueprintWriter { root, stack: Vec::new() }
    }

    fn current(&mut self) -> &mut Blueprint {
        let mut node: &mut Blueprint = self.root;
        for seg in &self.stack {
            node = match seg {
                PathSegment::Key(key) => {
                    let obj = node.as_object_mut().expect("set_member requires an object node");
                    obj.entry(key.clone()).or_insert(Blueprint::Invalid)
                }
                PathSegment::Index(i) => {
                    let arr = node.as_array_mut().expect("push_element requires an array node");
                    &mut arr[*i]
                }
            };
        }
        node
    }

    pub fn set_value(&mut self, value: Blueprint) {
        *self.current() = value;
    }

    pub fn set_null(&mut self) {
        self.current().set_to_null();
    }

    pub fn set_boolean(&mut self, v: bool) {
        self.current().set_to_boolean(v);
    }

    pub fn set_integer(&mut self, v: i64) {
        self.current().set_to_integer(v);
    }

    pub fn set_floating_point(&mut self, v: f64) {
        self.current().set_to_floating_point(v);
    }

    pub fn set_string(&mut self, v: String) {
        self.current().set_to_string(v);
    }

    /// Replaces the current node with an empty object and descends into member `name`,
    /// creating it if absent. Pair with [`Self::end_member`].
    pub fn set_member(&mut self, name: &str) {
        if !self.current().is_object() {
            self.current().set_to_object(IndexMap::new());
        }
        self.stack.push(PathSegment::Key(name.to_string()));
    }

    pub fn end_member(&mut self) {
        self.stack.pop();
    }

    /// Replaces the current node with an empty array if it isn't one already.
    pub fn begin_array(&mut self) {
        if !self.current().is_array() {
            self.current().set_to_array(Vec::new());
        }
    }

    /// Appends a new element to the current array node and descends into it. Pair with
    /// [`Self::end_element`].
    pub fn push_element(&mut self) {
        self.begin_array();
        let index = {
            let arr = self.current().as_array_mut().expect("begin_array just ran");
            arr.push(Blueprint::Invalid);
            arr.len() - 1
        };
        self.stack.push(PathSegment::Index(index));
    }

    pub fn end_element(&mut self) {
        self.stack.pop();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_object_and_array() {
        let mut root = Blueprint::Invalid;
        let mut w = BlueprintWriter::new(&mut root);

        w.set_member("a");
        w.set_integer(1);
        w.end_member();

        w.set_member("b");
        w.push_element();
        w.set_boolean(true);
        w.end_element();
        w.push_element();
        w.set_null();
        w.end_element();
        w.end_member();

        let obj = root.as_object().unwrap();
        assert_eq!(obj.get("a").unwrap().as_integer(), Some(1));
        let arr = obj.get("b").unwrap().as_array().unwrap();
        assert_eq!(arr[0].as_boolean(), Some(true));
        assert!(arr[1].is_null());
    }
}
