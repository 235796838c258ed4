use snake_search::{search, Coordinate, LetterGrid, SearchOptions, SearchOutcome, SearchReport};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

#[test]
fn test_grid_from_json_rows() {
    let grid: LetterGrid = serde_json::from_value(serde_json::json!(["AB", "CD"])).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.get(Coordinate::new(1, 1)), Some('D'));
}

#[test]
fn test_grid_to_json_rows() {
    let grid = LetterGrid::new(&["AB", "CD"]).unwrap();
    let value = serde_json::to_value(&grid).unwrap();
    assert_eq!(value, serde_json::json!(["AB", "CD"]));
}

#[test]
fn test_ragged_grid_json_rejected() {
    let result: Result<LetterGrid, _> = serde_json::from_value(serde_json::json!(["ABC", "D"]));
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("Row 1"),
        "Deserialisation error must name the ragged row, got: {message}"
    );
}

#[test]
fn test_empty_grid_json_rejected() {
    let result: Result<LetterGrid, _> = serde_json::from_value(serde_json::json!([]));
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn test_options_defaults_from_empty_object() {
    let options: SearchOptions = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(options, SearchOptions::default());
}

#[test]
fn test_options_camel_case_fields() {
    let options: SearchOptions =
        serde_json::from_value(serde_json::json!({ "stepBudget": 40, "prune": false })).unwrap();
    assert_eq!(options.step_budget, Some(40));
    assert!(!options.prune);
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[test]
fn test_found_report_shape() {
    let grid = LetterGrid::new(&["AB"]).unwrap();
    let report = search(&grid, "AB", &SearchOptions::default());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "query": "AB",
            "outcome": "Found",
            "path": [{ "row": 0, "col": 0 }, { "row": 0, "col": 1 }],
            "steps": 2
        })
    );
}

#[test]
fn test_absent_report_omits_path() {
    let grid = LetterGrid::new(&["AB"]).unwrap();
    let report = search(&grid, "BB", &SearchOptions::default());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["outcome"], "Absent");
    assert!(value.get("path").is_none(), "Absent reports must not carry a path");
}

#[test]
fn test_exhausted_report_outcome_name() {
    let grid = LetterGrid::new(&["ABC"]).unwrap();
    let report = search(&grid, "ABC", &SearchOptions::default().with_step_budget(1));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["outcome"], "BudgetExhausted");
    assert_eq!(value["steps"], 1);
}

#[test]
fn test_report_round_trips() {
    let grid = LetterGrid::new(&["AB", "CD"]).unwrap();
    let report = search(&grid, "ACDB", &SearchOptions::default());
    let text = serde_json::to_string(&report).unwrap();
    let back: SearchReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back, report);
    assert_eq!(back.outcome, SearchOutcome::Found);
}
