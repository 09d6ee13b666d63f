//! The generic "read next line under label" interpreter.

use regex::Regex;
use serde_yaml::{Mapping, Value};

/// How a matched value line is coerced before insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coerce {
    /// Keep the raw line.
    Text,
    /// Parse as an integer; non-numeric lines are skipped entirely.
    Integer,
}

/// One field of a mapping table: when a line equals `trigger`, the next
/// line is the value, written at `path` in the output mapping.
///
/// `end_pattern` guards against a missing value: when the next line matches
/// it, the next label has already started and the field is left unset.
#[derive(Clone, Copy, Debug)]
pub struct FieldMapping {
    pub trigger: &'static str,
    pub path: &'static [&'static str],
    pub coerce: Coerce,
    pub end_pattern: Option<&'static str>,
}

/// Applies a mapping table to the compressed text lines, producing a nested
/// mapping ready to merge into the output template.
pub fn read_fields(lines: &[String], mappings: &[FieldMapping]) -> Mapping {
    let guards: Vec<Option<Regex>> = mappings
        .iter()
        .map(|m| m.end_pattern.map(|p| Regex::new(p).expect("static end pattern")))
        .collect();

    let mut data = Mapping::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(index) = mappings.iter().position(|m| m.trigger == line.trim()) else {
            continue;
        };
        let mapping = &mappings[index];
        let Some(next) = lines.get(i + 1).map(|l| l.trim()) else {
            continue;
        };
        if let Some(guard) = &guards[index]
            && guard.is_match(next)
        {
            continue;
        }

        let value = match mapping.coerce {
            Coerce::Text => Value::String(next.to_string()),
            Coerce::Integer => {
                if !next.chars().all(|c| c.is_ascii_digit()) || next.is_empty() {
                    continue;
                }
                match next.parse::<i64>() {
                    Ok(n) => Value::Number(n.into()),
                    Err(_) => continue,
                }
            }
        };
        set_at_path(&mut data, mapping.path, value);
    }

    data
}

fn set_at_path(data: &mut Mapping, path: &[&str], value: Value) {
    let (last, parents) = path.split_last().expect("field path is never empty");

    let mut current = data;
    for key in parents {
        let entry = current
            .entry(Value::String(key.to_string()))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if !entry.is_mapping() {
            *entry = Value::Mapping(Mapping::new());
        }
        current = entry.as_mapping_mut().expect("just ensured a mapping");
    }
    current.insert(Value::String(last.to_string()), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn get<'a>(mapping: &'a Mapping, key: &str) -> &'a Value {
        mapping.get(&Value::String(key.to_string())).unwrap()
    }

    const MAPPINGS: &[FieldMapping] = &[
        FieldMapping {
            trigger: "State",
            path: &["location", "state"],
            coerce: Coerce::Text,
            end_pattern: Some("District"),
        },
        FieldMapping {
            trigger: "Pincode",
            path: &["location", "pincode"],
            coerce: Coerce::Text,
            end_pattern: None,
        },
        FieldMapping {
            trigger: "Year of Establishment",
            path: &["official", "established"],
            coerce: Coerce::Integer,
            end_pattern: None,
        },
    ];

    #[test]
    fn value_is_read_from_next_line() {
        let data = read_fields(
            &lines(&["State", "UTTAR PRADESH", "Pincode", "283203"]),
            MAPPINGS,
        );
        let location = get(&data, "location").as_mapping().unwrap();
        assert_eq!(get(location, "state"), &Value::from("UTTAR PRADESH"));
        assert_eq!(get(location, "pincode"), &Value::from("283203"));
    }

    #[test]
    fn end_pattern_leaves_field_unset() {
        // value block missing: the next label follows immediately
        let data = read_fields(&lines(&["State", "District"]), MAPPINGS);
        assert!(data.is_empty());
    }

    #[test]
    fn integer_coercion_skips_non_numeric() {
        let data = read_fields(&lines(&["Year of Establishment", "not a year"]), MAPPINGS);
        assert!(data.is_empty());

        let data = read_fields(&lines(&["Year of Establishment", "2003"]), MAPPINGS);
        let official = get(&data, "official").as_mapping().unwrap();
        assert_eq!(get(official, "established"), &Value::from(2003));
    }

    #[test]
    fn trigger_at_end_of_input_is_ignored() {
        let data = read_fields(&lines(&["Pincode"]), MAPPINGS);
        assert!(data.is_empty());
    }
}
