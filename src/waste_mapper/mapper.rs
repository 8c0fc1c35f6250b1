use crate::config::{FallbackRule, KeywordRule};
use crate::image_classifier::interface::Classification;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteCategory {
    Plastic,
    Metal,
    Paper,
    Organic,
    Glass,
    Electronic,
    Hazardous,
    General,
}

impl WasteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Plastic => "plastic",
            WasteCategory::Metal => "metal",
            WasteCategory::Paper => "paper",
            WasteCategory::Organic => "organic",
            WasteCategory::Glass => "glass",
            WasteCategory::Electronic => "electronic",
            WasteCategory::Hazardous => "hazardous",
            WasteCategory::General => "general",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedClassification {
    pub label: String,
    pub probability: f32,
    pub category: WasteCategory,
    pub confidence: f32,
}

/// Maps generic classifier output onto waste categories. Total over its
/// input: every classification gets a category, and output length equals
/// input length.
///
/// Matching is two-tier. The ordered keyword table is checked first; the
/// first rule whose keyword is a substring of the lowercased label wins and
/// its fixed confidence replaces the classifier probability. Labels that
/// miss the table fall back to the per-category keyword sets, tried in the
/// order the rules are listed, keeping the classifier probability. Labels
/// that miss both tiers land in the general category.
pub fn map_to_waste_categories(
    keyword_rules: &[KeywordRule],
    fallback_rules: &[FallbackRule],
    classifications: &[Classification],
) -> Vec<CategorizedClassification> {
    classifications
        .iter()
        .map(|classification| {
            let label = classification.label.to_lowercase();

            match keyword_rules
                .iter()
                .find(|rule| label.contains(rule.keyword.as_str()))
            {
                Some(rule) => CategorizedClassification {
                    label: classification.label.clone(),
                    probability: classification.probability,
                    category: rule.category,
                    confidence: rule.confidence,
                },
                None => CategorizedClassification {
                    label: classification.label.clone(),
                    probability: classification.probability,
                    category: fallback_category(fallback_rules, &label),
                    confidence: classification.probability,
                },
            }
        })
        .collect()
}

fn fallback_category(fallback_rules: &[FallbackRule], label: &str) -> WasteCategory {
    fallback_rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| label.contains(keyword.as_str())))
        .map(|rule| rule.category)
        .unwrap_or(WasteCategory::General)
}
