//! Blueprint <-> JSON, built directly on `serde_json::Value` rather than deriving
//! `Serialize`/`Deserialize` on [`Blueprint`] itself — the two trees are isomorphic but
//! `Blueprint`'s `Invalid` sentinel has no JSON counterpart, so the conversion is manual and
//! total in both directions (`Invalid` round-trips through `null`).

use indexmap::IndexMap;
use serde_json::{Map, Value as Json};

use crate::blueprint::Blueprint;

pub fn to_json(value: &Blueprint) -> Json {
    match value {
        Blueprint::Invalid | Blueprint::Null => Json::Null,
        Blueprint::Boolean(v) => Json::Bool(*v),
        Blueprint::Integer(v) => Json::Number((*v).into()),
        Blueprint::FloatingPoint(v) => {
            serde_json::Number::from_f64(*v).map(Json::Number).unwrap_or(Json::Null)
        }
        Blueprint::String(v) => Json::String(v.clone()),
        Blueprint::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Blueprint::Object(map) => {
            let mut obj = Map::new();
            for (k, v) in map {
                obj.insert(k.clone(), to_json(v));
            }
            Json::Object(obj)
        }
    }
}

pub fn from_json(value: &Json) -> Blueprint {
    match value {
        Json::Null => Blueprint::Null,
        Json::Bool(v) => Blueprint::Boolean(*v),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Blueprint::Integer(i)
            } else {
                Blueprint::FloatingPoint(n.as_f64().unwrap_or_default())
            }
        }
        Json::String(v) => Blueprint::String(v.clone()),
        Json::Array(items) => Blueprint::Array(items.iter().map(from_json).collect()),
        Json::Object(obj) => {
            let mut map = IndexMap::new();
            for (k, v) in obj {
                map.insert(k.clone(), from_json(v));
            }
            Blueprint::Object(map)
        }
    }
}

pub fn to_json_string(value: &Blueprint, pretty: bool) -> String {
    let json = to_json(value);
    if pretty {
        serde_json::to_string_pretty(&json).expect("Blueprint never contains non-finite floats after from_json")
    } else {
        serde_json::to_string(&json).expect("Blueprint never contains non-finite floats after from_json")
    }
}

pub fn from_json_string(input: &str) -> Result<Blueprint, serde_json::Error> {
    tracing::trace!(len = input.len(), "parsing JSON");
    let json: Json = serde_json::from_str(input)?;
    Ok(from_json(&json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_example_roundtrips() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Blueprint::Integer(1));
        map.insert("b".to_string(), Blueprint::Array(vec![Blueprint::Boolean(true), Blueprint::Null]));
        let tree = Blueprint::Object(map);

        let text = to_json_string(&tree, false);
        assert_eq!(text, r#"{"a":1,"b":[true,null]}"#);

        let parsed = from_json_string(&text).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn invalid_serializes_as_null() {
        assert_eq!(to_json(&Blueprint::Invalid), Json::Null);
    }
}
