use crate::zodiac::{ZodiacSign, GENERIC_ZODIAC_PREDICTION};

pub const OFFLINE_SERVICE_NOTE: &str = "Using offline prediction (API unavailable)";
pub const OFFLINE_CLIENT_NOTE: &str = "Offline Mode - Server Unavailable";

const GENERIC_SKILLS_ADVICE: &str = "Focus on developing skills that align with your natural strengths as indicated by your astrological profile.";

/// Builds the canned career prediction used whenever the language model cannot be reached.
///
/// The sign is looked up by its exact name; anything unrecognized gets the generic paragraph.
pub fn generate_fallback_prediction(name: Option<&str>, zodiac: &str, skills: &[String]) -> String {
    let user_name = name.filter(|n| !n.is_empty()).unwrap_or("there");
    let user_zodiac = if zodiac.is_empty() {
        "your zodiac sign"
    } else {
        zodiac
    };

    let sign_paragraph = zodiac
        .parse::<ZodiacSign>()
        .map(|sign| sign.canned_prediction())
        .unwrap_or(GENERIC_ZODIAC_PREDICTION);

    let skills_advice = if skills.is_empty() {
        GENERIC_SKILLS_ADVICE.to_string()
    } else {
        format!(
            "Your existing skills in {} align well with your astrological profile. Consider enhancing these with additional training in complementary areas.",
            skills.join(", ")
        )
    };

    format!(
        r#"# Career Prediction for {user_name}

## Astrological Overview
As {user_zodiac}, you have unique strengths that shape your career trajectory. {sign_paragraph}

## Skills Assessment
{skills_advice}

## Timeline Prediction
The next 3-5 years represent a significant growth period for your career development. Pay particular attention to opportunities that arise in early 2026, as planetary alignments suggest this will be a pivotal time for professional advancement.

## Recommended Focus Areas
1. Continue developing your core competencies while exploring adjacent skill areas
2. Build your professional network in the coming months
3. Prepare for a significant career opportunity or transition in 2026

Remember that while astrological guidance provides insight, your personal effort and choices ultimately shape your professional journey. Trust your intuition while making practical, strategic decisions."#
    )
}
