#[cfg(test)]
mod disposal_test {
    use crate::waste_mapper::disposal::advice_for;
    use crate::waste_mapper::mapper::WasteCategory;

    #[test]
    fn test_recyclables_share_high_impact() {
        for category in [
            WasteCategory::Plastic,
            WasteCategory::Metal,
            WasteCategory::Paper,
            WasteCategory::Glass,
        ] {
            assert_eq!(advice_for(category).impact_percent, 90);
        }
    }

    #[test]
    fn test_special_category_impact_values() {
        assert_eq!(advice_for(WasteCategory::Organic).impact_percent, 80);
        assert_eq!(advice_for(WasteCategory::Electronic).impact_percent, 85);
        assert_eq!(advice_for(WasteCategory::Hazardous).impact_percent, 95);
        assert_eq!(advice_for(WasteCategory::General).impact_percent, 30);
    }

    #[test]
    fn test_every_category_has_an_instruction() {
        for category in [
            WasteCategory::Plastic,
            WasteCategory::Metal,
            WasteCategory::Paper,
            WasteCategory::Organic,
            WasteCategory::Glass,
            WasteCategory::Electronic,
            WasteCategory::Hazardous,
            WasteCategory::General,
        ] {
            let advice = advice_for(category);
            assert!(!advice.instruction.is_empty());
            assert!(!advice.impact_text.is_empty());
        }
    }
}
