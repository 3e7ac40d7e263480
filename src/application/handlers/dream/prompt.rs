//! Prompt construction for the interpretation request.
//!
//! The model is instructed to return only a JSON object matching the
//! `DreamInterpretation` wire shape, with explicit cardinality guidance
//! (3-5 themes, 5-8 symbols, 3-5 emotions, 3-5 insights) and vivid hex
//! colors for the visualization.

/// System instruction sent with every interpretation request.
pub const SYSTEM_PROMPT: &str = "You are a dream interpretation expert. \
    Always respond with valid JSON only, no markdown formatting.";

/// Builds the user prompt embedding the dream text.
pub fn build_user_prompt(dream_text: &str) -> String {
    format!(
        r##"You are an expert dream analyst. Analyze the following dream and provide a detailed interpretation in JSON format.

Dream: "{dream_text}"

Return ONLY valid JSON (no markdown, no code blocks) with this exact structure:
{{
  "summary": "A brief 2-3 sentence summary of the dream's core meaning",
  "themes": [
    {{"name": "theme name", "description": "brief description", "intensity": 0-100}}
  ],
  "symbols": [
    {{"name": "symbol", "meaning": "what it represents", "category": "nature/people/objects/abstract", "color": "#hex"}}
  ],
  "emotions": [
    {{"name": "emotion", "intensity": 0-100, "color": "#hex"}}
  ],
  "insights": ["insight 1", "insight 2", "insight 3"],
  "lucidDreamPotential": 0-100
}}

Include 3-5 themes, 5-8 symbols, 3-5 emotions, and 3-5 insights. Use vibrant hex colors for visualization."##
    )
}
