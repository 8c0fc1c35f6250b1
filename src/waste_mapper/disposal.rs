use crate::waste_mapper::mapper::WasteCategory;

#[derive(Debug, Clone, PartialEq)]
pub struct DisposalAdvice {
    pub instruction: &'static str,
    pub impact_percent: u8,
    pub impact_text: &'static str,
}

pub fn advice_for(category: WasteCategory) -> DisposalAdvice {
    let instruction = match category {
        WasteCategory::Plastic => "Place in designated recycling bin. Rinse containers first.",
        WasteCategory::Metal => {
            "Clean and place in metal recycling. Aluminum foil should be clean and balled up."
        }
        WasteCategory::Paper => {
            "Separate by grade. Remove any plastic windows from envelopes."
        }
        WasteCategory::Organic => "Compost in designated bin. No meat or dairy in home compost.",
        WasteCategory::Glass => {
            "Sort by color and recycle separately. Do not include broken glass."
        }
        WasteCategory::Electronic => {
            "Take to e-waste recycling center. Never dispose in regular trash."
        }
        WasteCategory::Hazardous => {
            "Special handling required. Contact local hazardous waste facility."
        }
        WasteCategory::General => {
            "Place in general waste bin. Check local guidelines for specific disposal requirements."
        }
    };

    let (impact_percent, impact_text) = match category {
        WasteCategory::Plastic
        | WasteCategory::Metal
        | WasteCategory::Paper
        | WasteCategory::Glass => (
            90,
            "Highly recyclable - Proper disposal reduces landfill waste significantly.",
        ),
        WasteCategory::Organic => (80, "Compostable - Reduces methane emissions from landfills."),
        WasteCategory::Electronic => (
            85,
            "Valuable materials recoverable - Prevents hazardous substance leakage.",
        ),
        WasteCategory::Hazardous => (
            95,
            "Critical to dispose properly - Prevents environmental contamination.",
        ),
        WasteCategory::General => (
            30,
            "Minimal recovery potential - Consider reducing consumption.",
        ),
    };

    DisposalAdvice {
        instruction,
        impact_percent,
        impact_text,
    }
}
