use std::collections::BTreeMap;

use serde::Serialize;

use super::formatter::format_report;
use crate::analysis::AnalysisResult;

/// Compact projection of an analysis, shaped for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub phone_number: String,
    pub birthdate: String,
    pub report: String,
    pub score: f64,
    pub recommendation: String,
    pub details: SummaryDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDetails {
    /// Field name -> number of pairs in that field
    pub magnetic_fields: BTreeMap<&'static str, usize>,
    pub lingdong_81: LingdongSummary,
    pub five_elements: ElementsSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct LingdongSummary {
    pub number: u32,
    #[serde(rename = "type")]
    pub fortune: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementsSummary {
    pub birth_element: &'static str,
    pub compatibility_score: i32,
}

impl From<&AnalysisResult> for AnalysisSummary {
    fn from(analysis: &AnalysisResult) -> Self {
        let magnetic_fields = analysis
            .magnetic_fields
            .field_counts
            .iter()
            .map(|(kind, count)| (kind.name(), *count))
            .collect();

        AnalysisSummary {
            phone_number: analysis.phone_number.clone(),
            birthdate: analysis.birthdate.to_string(),
            report: format_report(analysis, false),
            score: analysis.final_score,
            recommendation: analysis.recommendation.label(),
            details: SummaryDetails {
                magnetic_fields,
                lingdong_81: LingdongSummary {
                    number: analysis.lingdong.index,
                    fortune: analysis
                        .lingdong
                        .fortune_class
                        .map(|c| c.label())
                        .unwrap_or("未知"),
                    meaning: analysis.lingdong.meaning,
                },
                five_elements: ElementsSummary {
                    birth_element: analysis.five_elements.birth_element.label(),
                    compatibility_score: analysis.five_elements.compatibility_score,
                },
            },
        }
    }
}

/// Pretty-printed JSON of the summary projection.
pub fn summary_json(analysis: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&AnalysisSummary::from(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PhoneNumerology;
    use serde_json::Value;

    #[test]
    fn test_summary_shape() {
        let analysis = PhoneNumerology::new("1990/09/25")
            .unwrap()
            .comprehensive_analysis("0978-759-196")
            .unwrap();
        let json: Value = serde_json::from_str(&summary_json(&analysis).unwrap()).unwrap();

        assert_eq!(json["phone_number"], "0978-759-196");
        assert_eq!(json["birthdate"], "1990/09/25");
        assert_eq!(json["score"], 37.79);
        assert_eq!(json["recommendation"], "★☆☆☆☆ 不推薦");
        assert_eq!(json["details"]["magnetic_fields"]["延年"], 4);
        assert_eq!(json["details"]["lingdong_81"]["number"], 76);
        assert_eq!(json["details"]["lingdong_81"]["type"], "凶帶吉");
        assert_eq!(json["details"]["five_elements"]["birth_element"], "火");
        assert_eq!(json["details"]["five_elements"]["compatibility_score"], 8);
        assert!(json["report"].as_str().unwrap().contains("綜合評分"));
    }

    #[test]
    fn test_full_result_serializes() {
        let analysis = PhoneNumerology::new("1990/09/25")
            .unwrap()
            .comprehensive_analysis("0978-759-196")
            .unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["recommendation"], "not_recommended");
        assert_eq!(json["magnetic_fields"]["field_counts"]["yannian"], 4);
        assert_eq!(json["five_elements"]["birth_element"], "fire");
    }
}
