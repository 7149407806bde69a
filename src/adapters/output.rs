use crate::domain::model::{
    ChineseAnimal, ChineseElement, CompatibilityResult, Element, MatchSource, Quality, Reading,
    WesternSign, YinYang, ZodiacSign,
};
use crate::utils::error::{Result, SecretsError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// Header line plus one flattened row per record.
    Csv,
}

#[derive(Debug, Serialize)]
struct ReadingRow {
    birth_date: String,
    western_sign: ZodiacSign,
    element: Element,
    quality: Quality,
    chinese_year: i32,
    chinese_animal: ChineseAnimal,
    chinese_element: ChineseElement,
    yin_yang: YinYang,
    life_path: u32,
    birthday: u32,
    personal_year: u32,
    personal_month: u32,
    personal_day: u32,
    expression: Option<u32>,
    soul_urge: Option<u32>,
    personality: Option<u32>,
    maturity: Option<u32>,
    challenge: Option<u32>,
    master_numbers: String,
}

impl From<&Reading> for ReadingRow {
    fn from(reading: &Reading) -> Self {
        let western = &reading.zodiac.western;
        let chinese = &reading.zodiac.chinese;
        let numbers = reading.numerology.as_ref();

        Self {
            birth_date: reading.birth_date.to_string(),
            western_sign: western.sign,
            element: western.element,
            quality: western.quality,
            chinese_year: chinese.year,
            chinese_animal: chinese.animal,
            chinese_element: chinese.element,
            yin_yang: chinese.yin_yang,
            life_path: reading.life_path,
            birthday: reading.birthday,
            personal_year: reading.personal_cycles.year,
            personal_month: reading.personal_cycles.month,
            personal_day: reading.personal_cycles.day,
            expression: numbers.map(|n| n.expression),
            soul_urge: numbers.and_then(|n| n.soul_urge),
            personality: numbers.and_then(|n| n.personality),
            maturity: numbers.map(|n| n.maturity),
            challenge: numbers.map(|n| n.challenge),
            master_numbers: numbers
                .map(|n| {
                    n.master_numbers
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompatibilityRow<'a> {
    sign_a: ZodiacSign,
    sign_b: ZodiacSign,
    score: u32,
    level: &'a str,
    source: MatchSource,
    tip: &'a str,
    element_note: &'a str,
    quality_note: &'a str,
}

#[derive(Debug, Serialize)]
struct SignRow {
    sign: ZodiacSign,
    name: &'static str,
    symbol: &'static str,
    date_range: &'static str,
    element: Element,
    quality: Quality,
}

impl From<&WesternSign> for SignRow {
    fn from(info: &WesternSign) -> Self {
        Self {
            sign: info.sign,
            name: info.name,
            symbol: info.symbol,
            date_range: info.date_range,
            element: info.element,
            quality: info.quality,
        }
    }
}

fn to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| SecretsError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| SecretsError::IoError(std::io::Error::other(e)))
}

pub fn render_reading(reading: &Reading, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reading)?),
        OutputFormat::Csv => to_csv([ReadingRow::from(reading)]),
    }
}

pub fn render_compatibility(result: &CompatibilityResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => to_csv([CompatibilityRow {
            sign_a: result.sign_a,
            sign_b: result.sign_b,
            score: result.score,
            level: result.level,
            source: result.source,
            tip: &result.tip,
            element_note: result.element_note,
            quality_note: result.quality_note,
        }]),
    }
}

/// All twelve western signs in calendar order.
pub fn render_signs(format: OutputFormat) -> Result<String> {
    let signs: Vec<WesternSign> = ZodiacSign::ALL.iter().map(|s| s.info()).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&signs)?),
        OutputFormat::Csv => to_csv(signs.iter().map(SignRow::from)),
    }
}
