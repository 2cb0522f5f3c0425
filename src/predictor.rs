use rand::seq::IndexedRandom;
use rand::Rng;

pub type PredictorError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

/// The classification step behind the analysis endpoint. A real
/// implementation wraps a model; the handler only sees this seam.
///
/// Implementations must not fail for well-formed input; any internal
/// failure surfaces as an error the handler reports as a server error.
pub trait Predictor: Send + Sync {
    fn predict(
        &self,
        image: &[u8],
        filename: &str,
        crop_type: &str,
    ) -> Result<Prediction, PredictorError>;
}

// Candidate disease labels per crop type, in reporting order.
const CANDIDATE_LABELS: &[(&str, &[&str])] = &[
    ("peach", &["桃疮痂病", "桃褐腐病", "桃缩叶病", "健康"]),
    ("apple", &["苹果腐烂病", "苹果轮纹病", "健康"]),
    ("wheat", &["小麦锈病", "小麦赤霉病"]),
    ("rice", &["稻瘟病", "纹枯病"]),
];

const FALLBACK_LABELS: &[&str] = &["unknown disease"];

/// Stand-in provider for running without a real model: picks a label
/// uniformly from the crop's candidate list and fabricates a confidence
/// in [0.85, 0.99], rounded to 2 decimals.
pub struct MockPredictor;

impl MockPredictor {
    fn candidates(crop_type: &str) -> &'static [&'static str] {
        CANDIDATE_LABELS
            .iter()
            .find(|(crop, _)| *crop == crop_type)
            .map(|(_, labels)| *labels)
            .unwrap_or(FALLBACK_LABELS)
    }
}

impl Predictor for MockPredictor {
    fn predict(
        &self,
        _image: &[u8],
        _filename: &str,
        crop_type: &str,
    ) -> Result<Prediction, PredictorError> {
        let mut rng = rand::rng();

        let label = Self::candidates(crop_type)
            .choose(&mut rng)
            .copied()
            .unwrap_or(FALLBACK_LABELS[0]);

        let confidence = (rng.random_range(0.85..=0.99) * 100.0_f64).round() / 100.0;

        Ok(Prediction {
            label: label.to_owned(),
            confidence,
        })
    }
}
