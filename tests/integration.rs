use aser::{
    from_bytes, from_json_string, from_pon_string, to_bytes, to_json_string, to_pretty_pon_string, Blueprint,
    EnumNames, FromBlueprint, FromBuffer, Serialize, Serializer, StringWriter, ToBlueprint, ToBuffer,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

impl Serialize for Point {
    fn serialize(&mut self, s: &mut Serializer) {
        s.named("x", &mut self.x);
        s.named("y", &mut self.y);
    }
}

aser::via_serialize!(Point);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

impl Default for Color {
    fn default() -> Self {
        Color::Red
    }
}

impl From<Color> for i64 {
    fn from(c: Color) -> i64 {
        c as i64
    }
}

impl EnumNames for Color {
    const NAMES: &'static [&'static str] = &["red", "green", "blue"];

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            2 => Some(Color::Blue),
            _ => None,
        }
    }
}

aser::via_enum_names!(Color);

#[test]
fn struct_roundtrips_through_binary() {
    let p = Point { x: 1.5, y: -2.0 };
    let bytes = to_bytes(&p);
    let back: Point = from_bytes(&bytes);
    assert_eq!(back, p);
}

#[test]
fn struct_roundtrips_through_blueprint() {
    let p = Point { x: 3.5, y: 0.0 };
    let b = p.to_blueprint();
    assert_eq!(b.as_object().unwrap().get("x").unwrap().as_floating_point(), Some(3.5));
    let back = Point::from_blueprint(&b);
    assert_eq!(back, p);
}

#[test]
fn blueprint_binary_roundtrip_example() {
    let mut fields = indexmap::IndexMap::new();
    fields.insert("x".to_string(), Blueprint::FloatingPoint(3.5));
    let tree = Blueprint::Object(fields);

    let bytes = to_bytes(&tree);
    let back: Blueprint = from_bytes(&bytes);
    assert_eq!(back, tree);
}

#[test]
fn enum_name_roundtrip() {
    let mut w = StringWriter::new();
    aser::ToText::to_text(&Color::Green, &mut w);
    assert_eq!(w.into_string(), "green");

    let lowered = "BLUE".to_lowercase();
    let mut r = aser::StringReader::new(&lowered);
    let c: Color = aser::FromText::from_text(&mut r);
    assert_eq!(c, Color::Blue);
}

#[test]
fn pon_pretty_print_example() {
    let mut fields = indexmap::IndexMap::new();
    fields.insert("a".to_string(), Blueprint::Integer(1));
    fields.insert("b".to_string(), Blueprint::Array(vec![Blueprint::Boolean(true), Blueprint::Null]));
    let tree = Blueprint::Object(fields);

    let pretty = to_pretty_pon_string(&tree);
    assert!(pretty.contains("a = 1"));

    let back: Blueprint = from_pon_string(&pretty).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn json_compact_example() {
    let mut fields = indexmap::IndexMap::new();
    fields.insert("a".to_string(), Blueprint::Integer(1));
    fields.insert("b".to_string(), Blueprint::Array(vec![Blueprint::Boolean(true), Blueprint::Null]));
    let tree = Blueprint::Object(fields);

    let json = to_json_string(&tree);
    assert_eq!(json, r#"{"a":1,"b":[true,null]}"#);

    let back: Blueprint = from_json_string(&json).unwrap();
    assert_eq!(back, tree);
}
