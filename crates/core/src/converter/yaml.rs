//! YAML assembly for the enrollment table.

use serde_yaml::{Mapping, Value};

use crate::table::{ALL_CATEGORIES, EnrollmentTable};

/// Stable identifier for a grade header cell ("Pre-Pr" -> "pre-pr").
fn grade_key(grade: &str) -> String {
    grade.to_lowercase().replace(' ', "_")
}

fn count(text: Option<&str>) -> Value {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => match t.parse::<i64>() {
            Ok(n) => Value::Number(n.into()),
            Err(_) => Value::Null,
        },
        _ => Value::Null,
    }
}

/// Builds the `enrollment` output section:
/// `category -> grade -> {boys, girls}`, with `null` for unmatched slots.
pub fn enrollment_to_mapping(table: &EnrollmentTable) -> Mapping {
    let mut enrollment = Mapping::new();

    for category in ALL_CATEGORIES {
        let Some(pairs) = table.categories.get(category.key) else {
            continue;
        };
        let mut grades = Mapping::new();
        for (index, pair) in pairs.iter().enumerate() {
            let Some(grade) = table.grades.get(index) else {
                continue;
            };
            let mut counts = Mapping::new();
            counts.insert(Value::from("boys"), count(pair.boys.as_deref()));
            counts.insert(Value::from("girls"), count(pair.girls.as_deref()));
            grades.insert(Value::from(grade_key(grade)), Value::Mapping(counts));
        }
        enrollment.insert(Value::from(category.yaml_key), Value::Mapping(grades));
    }

    let mut root = Mapping::new();
    root.insert(Value::from("enrollment"), Value::Mapping(enrollment));
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ValuePair;
    use indexmap::IndexMap;

    #[test]
    fn categories_keyed_by_yaml_name_and_grade() {
        let mut categories: IndexMap<&'static str, Vec<ValuePair>> = IndexMap::new();
        for category in ALL_CATEGORIES {
            categories.insert(category.key, vec![ValuePair::default()]);
        }
        categories["musl"] = vec![ValuePair {
            boys: Some("4".to_string()),
            girls: None,
        }];
        let table = EnrollmentTable {
            grades: vec!["Pre-Pr".to_string()],
            columns: vec![],
            categories,
        };

        let root = enrollment_to_mapping(&table);
        let text = serde_yaml::to_string(&Value::Mapping(root)).unwrap();
        let parsed: Value = serde_yaml::from_str(&text).unwrap();

        let muslim = &parsed["enrollment"]["muslim"]["pre-pr"];
        assert_eq!(muslim["boys"], Value::from(4));
        assert_eq!(muslim["girls"], Value::Null);
    }

    #[test]
    fn extra_columns_without_grade_are_skipped() {
        let mut categories: IndexMap<&'static str, Vec<ValuePair>> = IndexMap::new();
        categories.insert(
            "gen",
            vec![ValuePair::default(), ValuePair::default()],
        );
        let table = EnrollmentTable {
            grades: vec!["I".to_string()],
            columns: vec![],
            categories,
        };

        let root = enrollment_to_mapping(&table);
        let enrollment = root
            .get(&Value::from("enrollment"))
            .and_then(Value::as_mapping)
            .unwrap();
        let r#gen = enrollment
            .get(&Value::from("gen"))
            .and_then(Value::as_mapping)
            .unwrap();
        assert_eq!(r#gen.len(), 1);
    }
}
