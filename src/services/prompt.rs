//! Analysis prompt template.
//!
//! The instruction sent upstream is data, not code: the response schema is
//! a plain string block held by [`AnalysisPrompt`], so the output contract
//! can evolve without touching the handler pipeline.

/// Schema description the model is instructed to fill in. Kept as prose
/// because the upstream contract is enforced by prompt, not by this
/// service; the relayed payload stays opaque to us.
const ANALYSIS_SCHEMA: &str = r#"{
  "score": (final rounded number, 0-100),
  "scoreRationale": (str - one-sentence summary of the final score, grounded in the average of the sub-metrics),
  "identityAnalysis": {
    "claimedSector": (str),
    "detectedSector": (str),
    "matchStatus": ("MATCH CONFIRMED" or "PERCEPTION DRIFT" or "Insufficient Data"),
    "insight": (str)
  },
  "competitors": {
    "direct": [{"name": "str", "status": "str"}],
    "leaders": [{"name": "str", "status": "str"}]
  },
  "strategicSummary": (str),
  "strengths": [(str), (str)],
  "weaknesses": [(str), (str)],
  "optimization": {
    "objective": (str),
    "rationale": (str),
    "text": (str)
  },
  "platforms": [
    {"name": "Gemini", "status": "Analyzed"},
    {"name": "GPT-5", "status": "Simulated"},
    {"name": "Claude", "status": "Scanned"}
  ],
  "metrics": {
    "DigitalPresence": {
      "name": "Digital Footprint & Volume",
      "value": (number, 0-100),
      "rationale": (str, two sentences grounding the value in observable search and keyword trends)
    },
    "SentimentHealth": {
      "name": "Sentiment Balance",
      "value": (number, 0-100),
      "rationale": (str, two sentences grounding the value in the positive/negative tone of recent coverage)
    },
    "IdentityMatch": {
      "name": "Perception Consistency",
      "value": (number, 0-100),
      "rationale": (str, two sentences comparing the claimed positioning with the observed footprint)
    }
  }
}"#;

/// Prompt template for a brand analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisPrompt {
    schema: String,
}

impl Default for AnalysisPrompt {
    fn default() -> Self {
        Self {
            schema: ANALYSIS_SCHEMA.to_string(),
        }
    }
}

impl AnalysisPrompt {
    /// Template with a caller-supplied schema block.
    pub fn with_schema(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    /// Render the full instruction for one brand/industry pair.
    pub fn render(&self, brand: &str, industry: &str) -> String {
        format!(
            "You are Iris, a brand intelligence analyst.\n\
             Task: analyze the brand below and respond with output in the JSON format that follows. Write nothing else.\n\
             \n\
             RULES:\n\
             1. HONESTY: if there is not enough data about the brand (too new or too niche), say \"Insufficient Data\" outright.\n\
             2. IDENTITY CHECK: if the user's claimed sector does not match the brand's digital footprint, flag it as \"PERCEPTION DRIFT\".\n\
             3. FORMAT: return valid JSON only.\n\
             4. GROUNDED SCORING: give every sub-metric (DigitalPresence, SentimentHealth, IdentityMatch) a value between 0 and 100, and base each rationale on concrete, observable indicators.\n\
             \n\
             Brand: {brand}\n\
             Industry: {industry}\n\
             \n\
             JSON SCHEMA:\n{schema}",
            brand = brand,
            industry = industry,
            schema = self.schema,
        )
    }
}
