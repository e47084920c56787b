//! `dermalyze scan` – submit the form and show recommendations.

use anyhow::Result;
use dermalyze_core::health::HealthStatus;
use dermalyze_core::recommend::{
    Recommendation, RecommendationOutcome, Recommender, ScanInput, ScanReport,
};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScanArgs {
    pub name: String,
    pub email: String,
    pub health: HealthStatus,
    pub capture: Option<PathBuf>,
    pub json: bool,
}

/// A capture counts as completed when the file exists and is non-empty.
fn capture_completed(path: Option<&Path>) -> bool {
    path.and_then(|p| std::fs::metadata(p).ok())
        .is_some_and(|m| m.is_file() && m.len() > 0)
}

pub fn run_scan(recommender: &Recommender, args: ScanArgs) -> Result<()> {
    let input = ScanInput {
        name: args.name,
        email: args.email,
        health: args.health,
        capture_completed: capture_completed(args.capture.as_deref()),
    };
    let report = recommender.scan(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_products(products: &[Recommendation]) {
    for (i, p) in products.iter().enumerate() {
        println!(
            "{:>2}. {}  |  Brand: {}  |  Price: {}",
            i + 1,
            p.name,
            p.brand,
            p.price
        );
        println!("    {}", p.search_link);
    }
}

fn print_report(report: &ScanReport) {
    println!("Analysis report for {}", report.name);
    println!("Detected skin category: {}", report.category);
    println!();

    match &report.outcome {
        RecommendationOutcome::DatasetUnavailable { reason } => {
            println!("Recommendations unavailable: {reason}");
        }
        RecommendationOutcome::SchemaUnresolved { columns } => {
            println!("Could not find a skin-type column in the product dataset.");
            println!("Available columns: {}", columns.join(", "));
        }
        RecommendationOutcome::MatchesFound { products, .. } => {
            println!("Recommended products:");
            print_products(products);
        }
        RecommendationOutcome::NoMatches { column, preview } => {
            println!(
                "No products match {:?} in column {:?}.",
                report.keyword, column
            );
            if let Some(rows) = preview {
                println!("Showing the first {} products instead:", rows.len());
                print_products(rows);
            }
        }
    }
}
