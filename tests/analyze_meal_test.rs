use assert_float_eq::assert_float_absolute_eq;

use meal_analyzer_rs::analyzer::{
    analyze_meal, suggest, AnalyzerConfig, FIBER_SUGGESTION, PROTEIN_SUGGESTION,
    VITAMIN_C_SUGGESTION,
};
use meal_analyzer_rs::models::Nutrients;
use meal_analyzer_rs::reference::NutritionTable;

fn food(protein: f64, fiber: f64, vitamin_c: f64) -> Nutrients {
    Nutrients {
        calories: 100.0,
        protein,
        carbs: 10.0,
        fat: 2.0,
        fiber,
        sugar: 1.0,
        vitamin_c,
        iron: 0.5,
    }
}

fn assert_nutrients_eq(actual: &Nutrients, expected: &Nutrients) {
    assert_float_absolute_eq!(actual.calories, expected.calories, 1e-9);
    assert_float_absolute_eq!(actual.protein, expected.protein, 1e-9);
    assert_float_absolute_eq!(actual.carbs, expected.carbs, 1e-9);
    assert_float_absolute_eq!(actual.fat, expected.fat, 1e-9);
    assert_float_absolute_eq!(actual.fiber, expected.fiber, 1e-9);
    assert_float_absolute_eq!(actual.sugar, expected.sugar, 1e-9);
    assert_float_absolute_eq!(actual.vitamin_c, expected.vitamin_c, 1e-9);
    assert_float_absolute_eq!(actual.iron, expected.iron, 1e-9);
}

#[test]
fn test_exact_items_are_summed() {
    let table = NutritionTable::builtin();
    let result = analyze_meal(&table, "Rice, Dal", &AnalyzerConfig::default());

    let expected = *table.get("rice").unwrap() + *table.get("dal").unwrap();
    assert_nutrients_eq(&result.nutrition, &expected);
    assert!(result.missing.is_empty());
    assert_eq!(result.suggestions, suggest(&expected));
}

#[test]
fn test_unknown_item_is_reported_missing() {
    let table = NutritionTable::builtin();
    let result = analyze_meal(&table, "rice, xyz123", &AnalyzerConfig::default());

    assert_nutrients_eq(&result.nutrition, table.get("rice").unwrap());
    assert_eq!(result.missing, vec!["xyz123"]);
}

#[test]
fn test_typo_is_corrected_before_lookup() {
    let table = NutritionTable::builtin();
    let result = analyze_meal(&table, "ricee", &AnalyzerConfig::default());

    assert_nutrients_eq(&result.nutrition, table.get("rice").unwrap());
    assert!(result.missing.is_empty());
    assert_eq!(result.breakdown[0].food, "rice");
}

#[test]
fn test_empty_meal_reports_one_empty_item() {
    let table = NutritionTable::builtin();
    let result = analyze_meal(&table, "", &AnalyzerConfig::default());

    assert_eq!(result.missing, vec![""]);
    assert_nutrients_eq(&result.nutrition, &Nutrients::zero());
    assert_eq!(
        result.suggestions,
        vec![PROTEIN_SUGGESTION, FIBER_SUGGESTION, VITAMIN_C_SUGGESTION]
    );
}

#[test]
fn test_missing_item_is_verbatim_after_normalizing() {
    let table = NutritionTable::builtin();
    let result = analyze_meal(&table, "   XYZ123  ", &AnalyzerConfig::default());
    assert_eq!(result.missing, vec!["xyz123"]);
}

#[test]
fn test_exact_name_is_not_corrected() {
    // "curd" and "rice" are keys too; an exact key is used as-is
    let table = NutritionTable::builtin();
    let result = analyze_meal(&table, "CURD RICE", &AnalyzerConfig::default());

    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.breakdown[0].food, "curd rice");
    assert_nutrients_eq(&result.nutrition, table.get("curd rice").unwrap());
}

#[test]
fn test_only_low_protein_suggested() {
    let table = NutritionTable::new([("thali", food(15.0, 12.0, 20.0))]);
    let result = analyze_meal(&table, "thali", &AnalyzerConfig::default());
    assert_eq!(result.suggestions, vec![PROTEIN_SUGGESTION]);
}

#[test]
fn test_analysis_is_idempotent() {
    let table = NutritionTable::builtin();
    let config = AnalyzerConfig::default();
    let meal = "idli, sambar, chutni, dosa,, vada";

    assert_eq!(
        analyze_meal(&table, meal, &config),
        analyze_meal(&table, meal, &config)
    );
}

#[test]
fn test_totals_always_have_eight_non_negative_keys() {
    let table = NutritionTable::builtin();
    let config = AnalyzerConfig::default();

    for meal in ["", ",,,", "rice", "paneer, guava, ???", "chicken, chicken, egg"] {
        let result = analyze_meal(&table, meal, &config);
        let value = serde_json::to_value(&result).unwrap();
        let nutrition = value["nutrition"].as_object().unwrap();

        assert_eq!(nutrition.len(), 8);
        for (key, amount) in nutrition {
            assert!(amount.as_f64().unwrap() >= 0.0, "{} negative for {:?}", key, meal);
        }
    }
}

#[test]
fn test_higher_cutoff_disables_correction() {
    let table = NutritionTable::builtin();
    let strict = AnalyzerConfig {
        cutoff: 0.9,
        ..Default::default()
    };

    let result = analyze_meal(&table, "ricee", &strict);
    assert_eq!(result.missing, vec!["ricee"]);
}
