//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use gridfacts::models::{Blueprint, Dependency, Impact, Solution};
use gridfacts::output::{
    BlueprintResult, DependencyListResult, ImpactListResult, OutputMode, SearchResult,
    SolutionListResult,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn output_mode_parses_known_formats() {
    assert_eq!("human".parse::<OutputMode>(), Ok(OutputMode::Human));
    assert_eq!("JSON".parse::<OutputMode>(), Ok(OutputMode::Json));
}

#[test]
fn output_mode_rejects_unknown_format() {
    assert!("yaml".parse::<OutputMode>().is_err());
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn search_result_serialization() {
    let result = SearchResult {
        query: "delhi".to_string(),
        matched: 1,
        dependencies: vec![Dependency::new(
            "Coal-fired Power",
            "Large existing plants supply many cities.",
            &["High CO₂"],
            &["NTPC Dadri → Delhi NCR (India)"],
        )],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"query\":\"delhi\""));
    assert!(json.contains("\"matched\":1"));
    assert!(json.contains("Coal-fired Power"));
    assert!(json.contains("NTPC Dadri"));
}

#[test]
fn search_result_empty_match_serialization() {
    let result = SearchResult {
        query: "zz-nonexistent".to_string(),
        matched: 0,
        dependencies: vec![],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"matched\":0"));
    assert!(json.contains("\"dependencies\":[]"));
}

#[test]
fn dependency_list_serialization() {
    let result = DependencyListResult {
        total: 1,
        dependencies: vec![Dependency::new(
            "Natural Gas Plants",
            "Often used for baseload/peaking.",
            &["Methane leakage"],
            &["Common in many urban grids worldwide"],
        )],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"total\":1"));
    assert!(json.contains("Methane leakage"));
}

#[test]
fn solution_list_serialization() {
    let result = SolutionListResult {
        solutions: vec![Solution::new(
            "Rooftop & Community Solar",
            &["Cuts daytime outages"],
        )],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("Rooftop & Community Solar"));
    assert!(json.contains("Cuts daytime outages"));
}

#[test]
fn impact_list_serialization() {
    let result = ImpactListResult {
        impacts: vec![Impact::new(
            "Economic Loss",
            "Shops and SMEs lose revenue during outages.",
        )],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("Economic Loss"));
}

#[test]
fn blueprint_serialization() {
    let result = BlueprintResult {
        blueprint: Blueprint::new(
            "Starter Blueprint",
            &["Size critical loads."],
            "Fewer outages.",
        ),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"steps\""));
    assert!(json.contains("Fewer outages."));
}
