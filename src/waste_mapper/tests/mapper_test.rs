#[cfg(test)]
mod mapper_test {
    use crate::config::Config;
    use crate::image_classifier::interface::Classification;
    use crate::waste_mapper::mapper::{map_to_waste_categories, WasteCategory};

    fn classification(label: &str, probability: f32) -> Classification {
        Classification {
            label: label.to_string(),
            probability,
        }
    }

    fn map(classifications: &[Classification]) -> Vec<crate::waste_mapper::mapper::CategorizedClassification> {
        let config = Config::default();
        map_to_waste_categories(&config.keyword_rules, &config.fallback_rules, classifications)
    }

    #[test]
    fn test_battery_labels_are_hazardous() {
        for label in ["battery", "car battery", "Battery Pack"] {
            let results = map(&[classification(label, 0.5)]);
            assert_eq!(results[0].category, WasteCategory::Hazardous);
            assert_eq!(results[0].confidence, 0.97);
        }
    }

    #[test]
    fn test_banana_labels_are_organic() {
        for label in ["banana", "ripe banana", "BANANA peel"] {
            let results = map(&[classification(label, 0.5)]);
            assert_eq!(results[0].category, WasteCategory::Organic);
            assert_eq!(results[0].confidence, 0.95);
        }
    }

    #[test]
    fn test_table_match_overrides_classifier_probability() {
        let results = map(&[classification("plastic bottle", 0.8)]);

        assert_eq!(results[0].category, WasteCategory::Plastic);
        assert_eq!(results[0].confidence, 0.9);
        assert_eq!(results[0].probability, 0.8);
    }

    #[test]
    fn test_fallback_keeps_classifier_probability() {
        let results = map(&[classification("cardboard box", 0.6)]);

        assert_eq!(results[0].category, WasteCategory::Paper);
        assert_eq!(results[0].confidence, 0.6);
    }

    #[test]
    fn test_unmatched_label_is_general() {
        let results = map(&[classification("rock", 0.33)]);

        assert_eq!(results[0].category, WasteCategory::General);
        assert_eq!(results[0].confidence, 0.33);

        let results = map(&[classification("unknown object", 0.42)]);

        assert_eq!(results[0].category, WasteCategory::General);
        assert_eq!(results[0].confidence, 0.42);
    }

    #[test]
    fn test_empty_label_is_general() {
        let results = map(&[classification("", 0.1)]);

        assert_eq!(results[0].category, WasteCategory::General);
        assert_eq!(results[0].confidence, 0.1);
    }

    #[test]
    fn test_overlapping_keywords_resolve_by_table_order() {
        // "glass bottle" hits the bottle rule before the glass fallback set
        let results = map(&[classification("glass bottle", 0.7)]);
        assert_eq!(results[0].category, WasteCategory::Plastic);
        assert_eq!(results[0].confidence, 0.9);

        // "drinking glass" misses the table and lands in the glass set
        let results = map(&[classification("drinking glass", 0.7)]);
        assert_eq!(results[0].category, WasteCategory::Glass);
        assert_eq!(results[0].confidence, 0.7);
    }

    #[test]
    fn test_substring_matching_is_coarse() {
        // "candle" contains "can"; substring matching does not know about
        // word boundaries
        let results = map(&[classification("candle", 0.5)]);
        assert_eq!(results[0].category, WasteCategory::Metal);
        assert_eq!(results[0].confidence, 0.85);
    }

    #[test]
    fn test_mapping_is_length_preserving() {
        assert_eq!(map(&[]).len(), 0);

        let input = vec![
            classification("banana", 0.9),
            classification("rock", 0.5),
            classification("laptop computer", 0.3),
            classification("wine glass", 0.2),
        ];
        assert_eq!(map(&input).len(), input.len());
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let input = vec![
            classification("plastic bottle", 0.8),
            classification("unknown object", 0.42),
            classification("battery pack", 0.6),
        ];

        assert_eq!(map(&input), map(&input));
    }
}
