// Colored terminal output for a single analysis.

use colored::Colorize;
use serde_json::{Map, Value};

use crate::analysis::{Analysis, AnalysisResponse};

/// Print an analysis response to stdout.
pub fn display_response(response: &AnalysisResponse) {
    match response {
        AnalysisResponse::Success(analysis) => display_analysis(analysis),
        AnalysisResponse::Failure { error } => {
            println!("\n{} {}", "Analysis failed:".red().bold(), error);
        }
    }
}

fn display_analysis(analysis: &Analysis) {
    println!("\n{}", "=== Content Analysis ===".bold());
    println!();

    let verdict = if analysis.flagged {
        "FLAGGED".red().bold()
    } else {
        "not flagged".green()
    };
    println!("  {:<12} {}", "Moderation:".dimmed(), verdict);

    let hits = triggered_categories(&analysis.categories);
    if hits.is_empty() {
        println!("  {:<12} {}", "Categories:".dimmed(), "none".dimmed());
    } else {
        println!("  {}", "Categories:".dimmed());
        for (name, detail) in hits {
            match detail {
                Some(score) => println!("    {} {} ({score:.2})", "!".yellow(), name),
                None => println!("    {} {}", "!".yellow(), name),
            }
        }
    }

    println!();
    println!("  {}", "Insights:".dimmed());
    for line in analysis.insights.lines() {
        println!("    {line}");
    }
    println!();
}

/// Categories worth showing: boolean `true` entries, and numeric scores
/// above zero (with the score attached).
pub fn triggered_categories(categories: &Map<String, Value>) -> Vec<(&str, Option<f64>)> {
    categories
        .iter()
        .filter_map(|(name, value)| match value {
            Value::Bool(true) => Some((name.as_str(), None)),
            Value::Number(n) => n
                .as_f64()
                .filter(|score| *score > 0.0)
                .map(|score| (name.as_str(), Some(score))),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggered_categories_keeps_true_and_positive_scores() {
        let categories: Map<String, Value> = serde_json::from_str(
            r#"{"hate": false, "violence": true, "spam": 0.2, "harassment": 0.0, "note": "x"}"#,
        )
        .unwrap();

        let hits = triggered_categories(&categories);
        assert_eq!(hits, vec![("violence", None), ("spam", Some(0.2))]);
    }

    #[test]
    fn triggered_categories_empty_when_nothing_fires() {
        let categories: Map<String, Value> =
            serde_json::from_str(r#"{"hate": false, "sexual": false}"#).unwrap();
        assert!(triggered_categories(&categories).is_empty());
    }
}
