use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MealError, Result};
use crate::models::Nutrients;

use super::NutritionTable;

/// One row of a table file: a food name followed by its eight nutrients.
#[derive(Debug, Deserialize)]
struct TableRow {
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    vitamin_c: f64,
    iron: f64,
}

impl TableRow {
    fn into_entry(self) -> (String, Nutrients) {
        let nutrients = Nutrients {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sugar: self.sugar,
            vitamin_c: self.vitamin_c,
            iron: self.iron,
        };
        (self.name, nutrients)
    }
}

/// Accepted JSON layouts: `{"rice": {...}}` or `[{"name": "rice", ...}]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Map(HashMap<String, Nutrients>),
    Rows(Vec<TableRow>),
}

/// Load a nutrition table from a `.json` or `.csv` file.
///
/// Keys are canonicalized (later duplicates win) and the result is validated.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<NutritionTable> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let table = match extension.as_deref() {
        Some("json") => parse_json(&fs::read_to_string(path)?)?,
        Some("csv") => parse_csv(fs::File::open(path)?)?,
        _ => {
            return Err(MealError::InvalidInput(format!(
                "unsupported table format: {}",
                path.display()
            )));
        }
    };

    table.validate()?;
    Ok(table)
}

fn parse_json(content: &str) -> Result<NutritionTable> {
    let table = match serde_json::from_str(content)? {
        JsonTable::Map(map) => NutritionTable::new(map),
        JsonTable::Rows(rows) => NutritionTable::new(rows.into_iter().map(TableRow::into_entry)),
    };
    Ok(table)
}

fn parse_csv<R: std::io::Read>(reader: R) -> Result<NutritionTable> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = reader
        .deserialize::<TableRow>()
        .map(|row| row.map(TableRow::into_entry))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(NutritionTable::new(rows))
}
