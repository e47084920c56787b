//! Tests for the scan state machine.

use std::path::Path;

use super::*;
use crate::health::HealthStatus;

fn linker() -> SearchLinker {
    SearchLinker::new("https://www.google.com/search").unwrap()
}

fn catalog(labels: &[&str]) -> ProductCatalog {
    let rows = labels.iter().enumerate().map(|(i, l)| {
        vec![
            format!("Product {i}"),
            format!("Brand {i}"),
            l.to_string(),
        ]
    });
    ProductCatalog::from_rows(["Name", "Brand", "Label"], rows)
}

fn recommender(
    dir: &Path,
    catalog: Result<ProductCatalog, CatalogError>,
    settings: RecommenderSettings,
) -> Recommender {
    let log = ActivityLog::new(dir.join("user_data_logs.csv"));
    Recommender::new(settings, catalog, linker(), log)
}

fn input(health: HealthStatus) -> ScanInput {
    ScanInput {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        health,
        capture_completed: true,
    }
}

#[test]
fn incomplete_input_stops_before_logging() {
    let dir = tempfile::tempdir().unwrap();
    let rec = recommender(dir.path(), Ok(catalog(&["Oily"])), RecommenderSettings::default());
    let mut inp = input(HealthStatus::Healthy);
    inp.email = "  ".to_string();
    inp.capture_completed = false;

    match rec.scan(&inp) {
        Err(ScanError::IncompleteInput { missing }) => assert_eq!(missing, ["email", "capture"]),
        other => panic!("expected IncompleteInput, got {other:?}"),
    }
    assert!(!rec.activity_log().path().exists());
}

#[test]
fn missing_dataset_suppresses_recommendations_but_still_logs() {
    let dir = tempfile::tempdir().unwrap();
    let missing = ProductCatalog::load(&dir.path().join("skincare_data.csv"));
    let rec = recommender(dir.path(), missing, RecommenderSettings::default());

    let report = rec.scan(&input(HealthStatus::Healthy)).unwrap();
    assert_eq!(report.category.label(), "Dry");
    assert!(matches!(
        report.outcome,
        RecommendationOutcome::DatasetUnavailable { .. }
    ));
    assert_eq!(rec.activity_log().entries().unwrap().len(), 1);
}

#[test]
fn unresolved_schema_reports_columns() {
    let dir = tempfile::tempdir().unwrap();
    let cat = ProductCatalog::from_rows(["Foo", "Bar"], vec![vec!["Oily", "x"]]);
    let rec = recommender(dir.path(), Ok(cat), RecommenderSettings::default());

    let report = rec.scan(&input(HealthStatus::FrequentAcidity)).unwrap();
    assert_eq!(
        report.outcome,
        RecommendationOutcome::SchemaUnresolved {
            columns: vec!["foo".to_string(), "bar".to_string()]
        }
    );
}

#[test]
fn no_matches_warn_policy_has_no_preview() {
    let dir = tempfile::tempdir().unwrap();
    let rec = recommender(dir.path(), Ok(catalog(&["Dry", "Dry"])), RecommenderSettings::default());

    let report = rec.scan(&input(HealthStatus::OccasionalBloating)).unwrap();
    assert_eq!(
        report.outcome,
        RecommendationOutcome::NoMatches {
            column: "label".to_string(),
            preview: None
        }
    );
}

#[test]
fn no_matches_preview_policy_shows_top_rows() {
    let dir = tempfile::tempdir().unwrap();
    let settings = RecommenderSettings {
        empty_match: EmptyMatchPolicy::Preview,
        preview_rows: 2,
        ..RecommenderSettings::default()
    };
    let rec = recommender(dir.path(), Ok(catalog(&["Dry", "Dry", "Dry"])), settings);

    let report = rec.scan(&input(HealthStatus::FrequentAcidity)).unwrap();
    match report.outcome {
        RecommendationOutcome::NoMatches {
            preview: Some(rows),
            ..
        } => {
            let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, ["Product 0", "Product 1"]);
        }
        other => panic!("expected preview, got {other:?}"),
    }
}

#[test]
fn compound_labels_filter_on_first_segment() {
    let dir = tempfile::tempdir().unwrap();
    let settings = RecommenderSettings {
        label_style: LabelStyle::Compound,
        ..RecommenderSettings::default()
    };
    let rec = recommender(
        dir.path(),
        Ok(catalog(&["Oily", "Sensitive skin", "Normal"])),
        settings,
    );

    let report = rec.scan(&input(HealthStatus::FrequentAcidity)).unwrap();
    assert_eq!(report.category.label(), "Sensitive/Oily");
    assert_eq!(report.keyword, "Sensitive");
    match report.outcome {
        RecommendationOutcome::MatchesFound { products, .. } => {
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].name, "Product 1");
        }
        other => panic!("expected matches, got {other:?}"),
    }
    assert_eq!(
        rec.activity_log().entries().unwrap()[0].analysis,
        "Sensitive/Oily"
    );
}

#[test]
fn recommendations_carry_fields_and_links() {
    let dir = tempfile::tempdir().unwrap();
    let cat = ProductCatalog::from_rows(
        ["product_name", "skin_type", "price"],
        vec![vec!["Clay Mask", "oily", "9.99"]],
    );
    let rec = recommender(dir.path(), Ok(cat), RecommenderSettings::default());
    let category = derive_category(HealthStatus::FrequentAcidity, LabelStyle::Short);

    assert_eq!(
        rec.recommend(&category),
        RecommendationOutcome::MatchesFound {
            column: "skin_type".to_string(),
            products: vec![Recommendation {
                name: "Clay Mask".to_string(),
                brand: "oily".to_string(),
                price: "9.99".to_string(),
                search_link: "https://www.google.com/search?q=Clay+Mask".to_string(),
            }],
        }
    );
}

#[test]
fn recommend_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let rec = recommender(
        dir.path(),
        Ok(catalog(&["Oily", "Dry", "Oily"])),
        RecommenderSettings::default(),
    );
    let category = derive_category(HealthStatus::FrequentAcidity, LabelStyle::Short);
    assert_eq!(rec.recommend(&category), rec.recommend(&category));
    assert!(!rec.activity_log().path().exists());
}

#[test]
fn report_serializes_with_state_tag() {
    let dir = tempfile::tempdir().unwrap();
    let rec = recommender(dir.path(), Ok(catalog(&["Dry"])), RecommenderSettings::default());
    let report = rec.scan(&input(HealthStatus::Healthy)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["category"], "Dry");
    assert_eq!(json["outcome"]["state"], "matches_found");
    assert_eq!(json["outcome"]["products"][0]["brand"], "Brand 0");
}
