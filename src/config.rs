use crate::waste_mapper::mapper::WasteCategory;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keyword: String,
    pub category: WasteCategory,
    pub confidence: f32,
}

#[derive(Debug, Clone)]
pub struct FallbackRule {
    pub category: WasteCategory,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub dropzone_dir: PathBuf,
    pub dropzone_poll_rate: Duration,
    pub top_predictions: usize,
    pub impact_reveal_duration: Duration,
    pub keyword_rules: Vec<KeywordRule>,
    pub fallback_rules: Vec<FallbackRule>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            dropzone_dir: PathBuf::from("./dropzone"),
            dropzone_poll_rate: Duration::from_millis(500),
            top_predictions: 3,
            impact_reveal_duration: Duration::from_millis(1000),
            logger_timezone: pacific_standard_time(),
            // Checked top to bottom; the first matching keyword wins, so
            // rule order is the priority order for overlapping keywords.
            keyword_rules: vec![
                KeywordRule {
                    keyword: "bottle".to_string(),
                    category: WasteCategory::Plastic,
                    confidence: 0.9,
                },
                KeywordRule {
                    keyword: "can".to_string(),
                    category: WasteCategory::Metal,
                    confidence: 0.85,
                },
                KeywordRule {
                    keyword: "newspaper".to_string(),
                    category: WasteCategory::Paper,
                    confidence: 0.8,
                },
                KeywordRule {
                    keyword: "banana".to_string(),
                    category: WasteCategory::Organic,
                    confidence: 0.95,
                },
                KeywordRule {
                    keyword: "jar".to_string(),
                    category: WasteCategory::Glass,
                    confidence: 0.88,
                },
                KeywordRule {
                    keyword: "computer".to_string(),
                    category: WasteCategory::Electronic,
                    confidence: 0.92,
                },
                KeywordRule {
                    keyword: "battery".to_string(),
                    category: WasteCategory::Hazardous,
                    confidence: 0.97,
                },
            ],
            fallback_rules: vec![
                FallbackRule {
                    category: WasteCategory::Plastic,
                    keywords: keywords(&["plastic", "bottle", "bag", "container"]),
                },
                FallbackRule {
                    category: WasteCategory::Metal,
                    keywords: keywords(&["can", "metal", "aluminum", "steel"]),
                },
                FallbackRule {
                    category: WasteCategory::Paper,
                    keywords: keywords(&["paper", "cardboard", "newspaper", "envelope"]),
                },
                FallbackRule {
                    category: WasteCategory::Organic,
                    keywords: keywords(&["food", "fruit", "vegetable", "banana", "apple"]),
                },
                FallbackRule {
                    category: WasteCategory::Glass,
                    keywords: keywords(&["glass", "jar", "bottle"]),
                },
                FallbackRule {
                    category: WasteCategory::Electronic,
                    keywords: keywords(&["electronic", "computer", "phone", "device"]),
                },
                FallbackRule {
                    category: WasteCategory::Hazardous,
                    keywords: keywords(&["battery", "chemical", "hazardous", "toxic"]),
                },
            ],
        }
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn pacific_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(8 * 3600).unwrap()
}
