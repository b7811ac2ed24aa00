//! Cell-level conversion between CSV text and `FoodRecord` fields.

use super::{StoreError, StoreResult};
use crate::model::food::FoodRecord;

const TRUE_CELL: &str = "True";
const FALSE_CELL: &str = "False";

/// Decodes one CSV row laid out as `columns` into a record.
///
/// Required columns absent from `columns` keep their structured default.
pub(crate) fn decode_record<'a>(
    columns: &[String],
    cells: impl IntoIterator<Item = &'a str>,
) -> StoreResult<FoodRecord> {
    let mut record = FoodRecord::default();
    for (column, raw) in columns.iter().zip(cells) {
        apply_cell(&mut record, column, raw)?;
    }
    Ok(record)
}

/// Encodes `record` as one CSV row laid out as `columns`.
pub(crate) fn encode_record(record: &FoodRecord, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|column| encode_cell(record, column))
        .collect()
}

fn apply_cell(record: &mut FoodRecord, column: &str, raw: &str) -> StoreResult<()> {
    match column {
        "group_name" => record.group_name = text_cell(raw),
        "subgroup_name" => record.subgroup_name = text_cell(raw),
        "subsubgroup_name" => record.subsubgroup_name = text_cell(raw),
        "food_name" => record.food_name = text_cell(raw),
        "kcal" => record.kcal = number_cell(column, raw)?,
        "proteins" => record.proteins = number_cell(column, raw)?,
        "carbs" => record.carbs = number_cell(column, raw)?,
        "carbs_sugar" => record.carbs_sugar = number_cell(column, raw)?,
        "fats" => record.fats = number_cell(column, raw)?,
        "fats_saturated" => record.fats_saturated = number_cell(column, raw)?,
        "fibers" => record.fibers = number_cell(column, raw)?,
        "salt" => record.salt = number_cell(column, raw)?,
        "new_name" => record.new_name = text_cell(raw),
        "deleted" => record.deleted = bool_cell(raw)?,
        other => {
            record.extra.insert(other.to_string(), raw.to_string());
        }
    }
    Ok(())
}

fn encode_cell(record: &FoodRecord, column: &str) -> String {
    match column {
        "group_name" => text_out(&record.group_name),
        "subgroup_name" => text_out(&record.subgroup_name),
        "subsubgroup_name" => text_out(&record.subsubgroup_name),
        "food_name" => text_out(&record.food_name),
        "kcal" => number_out(record.kcal),
        "proteins" => number_out(record.proteins),
        "carbs" => number_out(record.carbs),
        "carbs_sugar" => number_out(record.carbs_sugar),
        "fats" => number_out(record.fats),
        "fats_saturated" => number_out(record.fats_saturated),
        "fibers" => number_out(record.fibers),
        "salt" => number_out(record.salt),
        "new_name" => text_out(&record.new_name),
        "deleted" => {
            if record.deleted {
                TRUE_CELL.to_string()
            } else {
                FALSE_CELL.to_string()
            }
        }
        other => record.extra.get(other).cloned().unwrap_or_default(),
    }
}

fn text_cell(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn number_cell(column: &str, raw: &str) -> StoreResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        // NaN is how blank numeric cells surface from some writers.
        Ok(value) if value.is_nan() => Ok(None),
        Ok(value) if value.is_finite() => Ok(Some(value)),
        Ok(_) | Err(_) => Err(StoreError::InvalidData(format!(
            "invalid number `{trimmed}` in column `{column}`"
        ))),
    }
}

fn bool_cell(raw: &str) -> StoreResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" => Ok(true),
        "false" | "0" | "0.0" | "" => Ok(false),
        other => Err(StoreError::InvalidData(format!(
            "invalid boolean `{other}` in column `deleted`"
        ))),
    }
}

fn text_out(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number_out(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{decode_record, encode_record};
    use crate::model::food::REQUIRED_COLUMNS;
    use crate::store::StoreError;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn decodes_typed_fields_and_blanks() {
        let layout = columns(&["food_name", "kcal", "salt", "new_name", "deleted"]);
        let record = decode_record(&layout, ["Apple", "52.0", "", "", "True"]).unwrap();

        assert_eq!(record.food_name.as_deref(), Some("Apple"));
        assert_eq!(record.kcal, Some(52.0));
        assert_eq!(record.salt, None);
        assert_eq!(record.new_name, None);
        assert!(record.deleted);
    }

    #[test]
    fn missing_deleted_column_defaults_to_false() {
        let layout = columns(&["food_name"]);
        let record = decode_record(&layout, ["Apple"]).unwrap();
        assert!(!record.deleted);
        assert_eq!(record.group_name, None);
    }

    #[test]
    fn unknown_columns_are_carried_verbatim() {
        let layout = columns(&["origin", "food_name"]);
        let record = decode_record(&layout, ["  Spain ", "Orange"]).unwrap();
        assert_eq!(record.extra.get("origin").map(String::as_str), Some("  Spain "));

        let row = encode_record(&record, &layout);
        assert_eq!(row, vec!["  Spain ".to_string(), "Orange".to_string()]);
    }

    #[test]
    fn rejects_non_numeric_nutrient() {
        let layout = columns(&["kcal"]);
        let err = decode_record(&layout, ["lots"]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(message) if message.contains("kcal")));
    }

    #[test]
    fn rejects_infinite_nutrient() {
        let layout = columns(&["kcal", "salt"]);
        for cells in [["1e400", ""], ["", "-inf"], ["", "Infinity"]] {
            let err = decode_record(&layout, cells).unwrap_err();
            assert!(matches!(err, StoreError::InvalidData(_)));
        }
        let record = decode_record(&layout, ["NaN", "1e300"]).unwrap();
        assert_eq!(record.kcal, None);
        assert_eq!(record.salt, Some(1e300));
    }

    #[test]
    fn rejects_unknown_boolean() {
        let layout = columns(&["deleted"]);
        assert!(decode_record(&layout, ["maybe"]).is_err());
        assert!(!decode_record(&layout, ["FALSE"]).unwrap().deleted);
        assert!(decode_record(&layout, ["1"]).unwrap().deleted);
    }

    #[test]
    fn encodes_required_layout() {
        let layout = columns(&REQUIRED_COLUMNS);
        let mut record = crate::model::food::FoodRecord::named("Apple");
        record.kcal = Some(52.5);
        let row = encode_record(&record, &layout);

        assert_eq!(row.len(), 14);
        assert_eq!(row[3], "Apple");
        assert_eq!(row[4], "52.5");
        assert_eq!(row[12], "");
        assert_eq!(row[13], "False");
    }
}
