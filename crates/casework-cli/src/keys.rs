use crate::KeysConfig;

use casework::Name;
use serde_json::{Map, Value};

/// Renames the object keys of a JSON document.
///
/// Keys are converted to `config.style`, with the configured inflection
/// applied to their last word. Values are kept as they are. Objects nested
/// inside other objects are only renamed when `config.recursive` is set;
/// objects that are direct elements of a top-level array count as top-level.
///
/// If two keys of one object collide once renamed, the later one wins.
pub fn rename_keys(value: Value, config: &KeysConfig) -> Value {
    rename_value(value, config, true)
}

fn rename_value(value: Value, config: &KeysConfig, top_level: bool) -> Value {
    if !top_level && !config.recursive {
        return value;
    }

    match value {
        Value::Object(map) => Value::Object(rename_object(map, config)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rename_value(item, config, top_level))
                .collect(),
        ),
        value => value,
    }
}

fn rename_object(map: Map<String, Value>, config: &KeysConfig) -> Map<String, Value> {
    let mut renamed = Map::with_capacity(map.len());

    for (key, value) in map {
        let new_key = rename_key(&key, config);
        let value = rename_value(value, config, false);

        if renamed.contains_key(&new_key) {
            log::warn!("key `{key}` renames to `{new_key}`, replacing an earlier key");
        }

        renamed.insert(new_key, value);
    }

    renamed
}

fn rename_key(key: &str, config: &KeysConfig) -> String {
    let name = Name::new(key);
    let name = match config.inflect {
        Some(inflection) => name.inflect(inflection),
        None => name,
    };
    name.to_case(config.style)
}
