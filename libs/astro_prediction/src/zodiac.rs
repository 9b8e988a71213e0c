use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Sentence used in place of a canned paragraph when the sign is not one of the twelve.
pub const GENERIC_ZODIAC_PREDICTION: &str = "Your astrological profile suggests diverse career possibilities that align with your natural talents.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown zodiac sign: {0}")]
pub struct UnknownZodiacSign(pub String);

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// The canned career paragraph for this sign.
    pub fn canned_prediction(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Your natural leadership abilities and pioneering spirit point to entrepreneurship or management roles. The period from 2025-2027 looks particularly favorable for career advancement.",
            ZodiacSign::Taurus => "Your practical approach and determination make you well-suited for finance, real estate, or any field requiring persistence. Focus on building stable, long-term career foundations.",
            ZodiacSign::Gemini => "Your versatility and communication skills suggest success in media, writing, teaching, or sales. Consider developing technical skills to complement your natural adaptability.",
            ZodiacSign::Cancer => "Your intuitive and nurturing nature indicates success in healthcare, counseling, or hospitality. Your ability to create emotional connections is your greatest professional asset.",
            ZodiacSign::Leo => "Your charismatic presence points to success in entertainment, leadership positions, or creative fields. Developing organizational skills will help balance your natural creativity.",
            ZodiacSign::Virgo => "Your analytical mind and attention to detail suggest excellence in research, data analysis, or quality assurance. The next two years are ideal for specialized training.",
            ZodiacSign::Libra => "Your diplomatic nature and sense of fairness indicate potential in law, human resources, or design fields. Partnership opportunities will be significant in 2026.",
            ZodiacSign::Scorpio => "Your investigative nature and determination point to success in research, psychology, or strategic planning. Focus on transformative career moves in late 2025.",
            ZodiacSign::Sagittarius => "Your adventurous spirit and philosophical mind suggest teaching, publishing, or international business. Expand your horizons through education in 2025-2026.",
            ZodiacSign::Capricorn => "Your disciplined approach and ambition indicate executive potential. Focus on building authority in your field with incremental, steady progress.",
            ZodiacSign::Aquarius => "Your innovative thinking and humanitarian values point to technology, social enterprise, or scientific research. Group collaborations will be particularly rewarding.",
            ZodiacSign::Pisces => "Your creative imagination and empathy suggest artistic pursuits, psychology, or spiritual guidance. Trust your intuition regarding career decisions in 2025.",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = UnknownZodiacSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name() == s)
            .ok_or_else(|| UnknownZodiacSign(s.to_string()))
    }
}
