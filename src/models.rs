use serde::Serialize;

/// Success envelope returned by the analysis endpoint.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub code: u16,
    pub message: String,
    pub result: String,
    pub confidence: f64,
    pub details: AnalysisDetails,
}

#[derive(Debug, Serialize)]
pub struct AnalysisDetails {
    pub received_crop: String,
    pub note: String,
}

impl AnalysisResponse {
    pub fn success(result: String, confidence: f64, received_crop: String) -> Self {
        AnalysisResponse {
            code: 200,
            message: "success".to_owned(),
            result,
            confidence,
            details: AnalysisDetails {
                received_crop,
                note: "analysis complete".to_owned(),
            },
        }
    }
}
