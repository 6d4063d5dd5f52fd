use serde::{Deserialize, Serialize};

pub const SIMILAR_MESSAGE: &str = "Similar Images ✓";
pub const DIFFERENT_MESSAGE: &str = "Different Images ✗";

/// Outcome of one comparison. Scores are percentages rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub similarity_score: f64,
    #[serde(rename = "structural_similarity")]
    pub pixel_similarity: f64,
    pub histogram_similarity: f64,
    pub is_similar: bool,
    pub message: String,
}

impl ComparisonResult {
    /// Longer sentence for display next to the message.
    pub fn description(&self) -> &'static str {
        if self.is_similar {
            "The images appear to be similar"
        } else {
            "The images are not similar"
        }
    }
}

impl std::fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "{}", self.description())?;
        writeln!(f, "Overall similarity:   {:.2}%", self.similarity_score)?;
        writeln!(f, "Pixel similarity:     {:.2}%", self.pixel_similarity)?;
        write!(f, "Histogram similarity: {:.2}%", self.histogram_similarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_original_field_names() {
        let result = ComparisonResult {
            similarity_score: 81.25,
            pixel_similarity: 77.5,
            histogram_similarity: 90.0,
            is_similar: true,
            message: SIMILAR_MESSAGE.to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["similarity_score"], 81.25);
        assert_eq!(json["structural_similarity"], 77.5);
        assert!(json.get("pixel_similarity").is_none());

        let parsed: ComparisonResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, result);
    }
}
