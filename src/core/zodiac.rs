use crate::domain::model::{
    BirthDate, ChineseAnimal, ChineseElement, ChineseSign, Element, Quality, WesternSign,
    YinYang, ZodiacClassification, ZodiacSign,
};
use crate::utils::error::{Result, SecretsError};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

struct SignRow {
    sign: ZodiacSign,
    name: &'static str,
    symbol: &'static str,
    start: (u32, u32),
    end: (u32, u32),
    date_range: &'static str,
    element: Element,
    quality: Quality,
    description: &'static str,
}

// Calendar order from Aries. Start and end days are both inclusive.
static SIGN_TABLE: [SignRow; 12] = [
    SignRow {
        sign: ZodiacSign::Aries,
        name: "Aries",
        symbol: "♈",
        start: (3, 21),
        end: (4, 19),
        date_range: "March 21 - April 19",
        element: Element::Fire,
        quality: Quality::Cardinal,
        description: "The Ram - Bold, energetic, and natural leaders",
    },
    SignRow {
        sign: ZodiacSign::Taurus,
        name: "Taurus",
        symbol: "♉",
        start: (4, 20),
        end: (5, 20),
        date_range: "April 20 - May 20",
        element: Element::Earth,
        quality: Quality::Fixed,
        description: "The Bull - Reliable, practical, and determined",
    },
    SignRow {
        sign: ZodiacSign::Gemini,
        name: "Gemini",
        symbol: "♊",
        start: (5, 21),
        end: (6, 20),
        date_range: "May 21 - June 20",
        element: Element::Air,
        quality: Quality::Mutable,
        description: "The Twins - Curious, adaptable, and communicative",
    },
    SignRow {
        sign: ZodiacSign::Cancer,
        name: "Cancer",
        symbol: "♋",
        start: (6, 21),
        end: (7, 22),
        date_range: "June 21 - July 22",
        element: Element::Water,
        quality: Quality::Cardinal,
        description: "The Crab - Intuitive, protective, and emotional",
    },
    SignRow {
        sign: ZodiacSign::Leo,
        name: "Leo",
        symbol: "♌",
        start: (7, 23),
        end: (8, 22),
        date_range: "July 23 - August 22",
        element: Element::Fire,
        quality: Quality::Fixed,
        description: "The Lion - Confident, creative, and generous",
    },
    SignRow {
        sign: ZodiacSign::Virgo,
        name: "Virgo",
        symbol: "♍",
        start: (8, 23),
        end: (9, 22),
        date_range: "August 23 - September 22",
        element: Element::Earth,
        quality: Quality::Mutable,
        description: "The Virgin - Analytical, practical, and helpful",
    },
    SignRow {
        sign: ZodiacSign::Libra,
        name: "Libra",
        symbol: "♎",
        start: (9, 23),
        end: (10, 22),
        date_range: "September 23 - October 22",
        element: Element::Air,
        quality: Quality::Cardinal,
        description: "The Scales - Diplomatic, fair, and social",
    },
    SignRow {
        sign: ZodiacSign::Scorpio,
        name: "Scorpio",
        symbol: "♏",
        start: (10, 23),
        end: (11, 21),
        date_range: "October 23 - November 21",
        element: Element::Water,
        quality: Quality::Fixed,
        description: "The Scorpion - Passionate, resourceful, and brave",
    },
    SignRow {
        sign: ZodiacSign::Sagittarius,
        name: "Sagittarius",
        symbol: "♐",
        start: (11, 22),
        end: (12, 21),
        date_range: "November 22 - December 21",
        element: Element::Fire,
        quality: Quality::Mutable,
        description: "The Archer - Adventurous, independent, and philosophical",
    },
    SignRow {
        sign: ZodiacSign::Capricorn,
        name: "Capricorn",
        symbol: "♑",
        start: (12, 22),
        end: (1, 19),
        date_range: "December 22 - January 19",
        element: Element::Earth,
        quality: Quality::Cardinal,
        description: "The Goat - Responsible, disciplined, and practical",
    },
    SignRow {
        sign: ZodiacSign::Aquarius,
        name: "Aquarius",
        symbol: "♒",
        start: (1, 20),
        end: (2, 18),
        date_range: "January 20 - February 18",
        element: Element::Air,
        quality: Quality::Fixed,
        description: "The Water Bearer - Progressive, independent, and humanitarian",
    },
    SignRow {
        sign: ZodiacSign::Pisces,
        name: "Pisces",
        symbol: "♓",
        start: (2, 19),
        end: (3, 20),
        date_range: "February 19 - March 20",
        element: Element::Water,
        quality: Quality::Mutable,
        description: "The Fish - Compassionate, artistic, and intuitive",
    },
];

impl SignRow {
    fn contains(&self, month: u32, day: u32) -> bool {
        let at = (month, day);
        if self.start <= self.end {
            self.start <= at && at <= self.end
        } else {
            // wraps the new year (Capricorn)
            at >= self.start || at <= self.end
        }
    }
}

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

    fn row(self) -> &'static SignRow {
        &SIGN_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.row().name
    }

    pub fn symbol(self) -> &'static str {
        self.row().symbol
    }

    pub fn element(self) -> Element {
        self.row().element
    }

    pub fn quality(self) -> Quality {
        self.row().quality
    }

    pub fn date_range(self) -> &'static str {
        self.row().date_range
    }

    pub fn description(self) -> &'static str {
        self.row().description
    }

    /// First day of the sign as `(month, day)`.
    pub fn start(self) -> (u32, u32) {
        self.row().start
    }

    /// Last day of the sign as `(month, day)`.
    pub fn end(self) -> (u32, u32) {
        self.row().end
    }

    pub fn info(self) -> WesternSign {
        let row = self.row();
        WesternSign {
            sign: row.sign,
            name: row.name,
            symbol: row.symbol,
            date_range: row.date_range,
            element: row.element,
            quality: row.quality,
            description: row.description,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = SecretsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SecretsError::UnknownSign {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Sign for a month/day pair. Feb 29 is accepted; days that never exist are not.
pub fn sign_for(month: u32, day: u32) -> Result<ZodiacSign> {
    // 2000 is a leap year, so every real month/day pair is valid in it
    if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
        return Err(SecretsError::invalid_birth_date(
            format!("--{:02}-{:02}", month, day),
            "no such day in the calendar",
        ));
    }

    SIGN_TABLE
        .iter()
        .find(|row| row.contains(month, day))
        .map(|row| row.sign)
        .ok_or_else(|| {
            SecretsError::invalid_birth_date(
                format!("--{:02}-{:02}", month, day),
                "date not covered by the sign table",
            )
        })
}

pub fn classify_western(date: &BirthDate) -> WesternSign {
    let sign = SIGN_TABLE
        .iter()
        .find(|row| row.contains(date.month(), date.day()))
        .map(|row| row.sign)
        .unwrap_or(ZodiacSign::Capricorn); // unreachable: the table covers every day
    tracing::debug!("{} falls in {}", date, sign);
    sign.info()
}

const ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

const CHINESE_ELEMENTS: [ChineseElement; 5] = [
    ChineseElement::Wood,
    ChineseElement::Fire,
    ChineseElement::Earth,
    ChineseElement::Metal,
    ChineseElement::Water,
];

impl ChineseAnimal {
    pub fn lucky_numbers(self) -> [u32; 3] {
        match self {
            ChineseAnimal::Rat => [2, 3, 6],
            ChineseAnimal::Ox => [1, 4, 6],
            ChineseAnimal::Tiger => [1, 3, 4],
            ChineseAnimal::Rabbit => [3, 4, 6],
            ChineseAnimal::Dragon => [1, 6, 7],
            ChineseAnimal::Snake => [2, 8, 9],
            ChineseAnimal::Horse => [2, 3, 7],
            ChineseAnimal::Goat => [2, 7, 8],
            ChineseAnimal::Monkey => [4, 9, 1],
            ChineseAnimal::Rooster => [5, 7, 8],
            ChineseAnimal::Dog => [3, 4, 9],
            ChineseAnimal::Pig => [2, 5, 8],
        }
    }
}

/// Chinese sign by Gregorian year. Any integer year maps; the lunar new year
/// boundary is not modelled.
pub fn classify_chinese(year: i32) -> ChineseSign {
    let offset = i64::from(year) - 4;
    let animal = ANIMALS[offset.rem_euclid(12) as usize];
    let element = CHINESE_ELEMENTS[offset.div_euclid(2).rem_euclid(5) as usize];
    let yin_yang = if year.rem_euclid(2) == 0 {
        YinYang::Yang
    } else {
        YinYang::Yin
    };

    ChineseSign {
        year,
        animal,
        element,
        yin_yang,
        lucky_numbers: animal.lucky_numbers(),
    }
}

pub fn classify(date: &BirthDate) -> ZodiacClassification {
    ZodiacClassification {
        western: classify_western(date),
        chinese: classify_chinese(date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn western(year: i32, month: u32, day: u32) -> ZodiacSign {
        classify_western(&BirthDate::from_ymd(year, month, day).unwrap()).sign
    }

    #[test]
    fn test_table_is_in_enum_order() {
        for (i, row) in SIGN_TABLE.iter().enumerate() {
            assert_eq!(row.sign as usize, i);
        }
    }

    #[test]
    fn test_both_sides_of_every_boundary() {
        for sign in ZodiacSign::ALL {
            let (month, day) = sign.start();
            let before = NaiveDate::from_ymd_opt(2001, month, day)
                .unwrap()
                .pred_opt()
                .unwrap();
            let previous = ZodiacSign::ALL[(sign as usize + 11) % 12];

            assert_eq!(sign_for(month, day).unwrap(), sign);
            assert_eq!(sign_for(sign.end().0, sign.end().1).unwrap(), sign);
            assert_eq!(sign_for(before.month(), before.day()).unwrap(), previous);
        }
    }

    #[test]
    fn test_april_nineteenth_is_aries_and_twentieth_is_taurus() {
        assert_eq!(western(1999, 4, 19), ZodiacSign::Aries);
        assert_eq!(western(1999, 4, 20), ZodiacSign::Taurus);
    }

    #[test]
    fn test_capricorn_wraps_the_year() {
        assert_eq!(western(1990, 12, 22), ZodiacSign::Capricorn);
        assert_eq!(western(1990, 12, 31), ZodiacSign::Capricorn);
        assert_eq!(western(1991, 1, 1), ZodiacSign::Capricorn);
        assert_eq!(western(1991, 1, 19), ZodiacSign::Capricorn);
        assert_eq!(western(1991, 1, 20), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_leap_day_is_pisces() {
        assert_eq!(western(2024, 2, 29), ZodiacSign::Pisces);
        assert_eq!(sign_for(2, 29).unwrap(), ZodiacSign::Pisces);
        assert!(sign_for(2, 30).is_err());
        assert!(sign_for(13, 1).is_err());
    }

    #[test]
    fn test_sign_metadata() {
        let leo = ZodiacSign::Leo.info();
        assert_eq!(leo.name, "Leo");
        assert_eq!(leo.symbol, "♌");
        assert_eq!(leo.element, Element::Fire);
        assert_eq!(leo.quality, Quality::Fixed);
        assert_eq!(leo.date_range, "July 23 - August 22");
        assert_eq!(ZodiacSign::Capricorn.quality(), Quality::Cardinal);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn test_sign_from_str() {
        assert_eq!("aries".parse::<ZodiacSign>().unwrap(), ZodiacSign::Aries);
        assert_eq!(" SAGITTARIUS ".parse::<ZodiacSign>().unwrap(), ZodiacSign::Sagittarius);
        assert!(matches!(
            "ophiuchus".parse::<ZodiacSign>(),
            Err(SecretsError::UnknownSign { .. })
        ));
    }

    #[test]
    fn test_chinese_known_years() {
        let y2020 = classify_chinese(2020);
        assert_eq!(y2020.animal, ChineseAnimal::Rat);
        assert_eq!(y2020.element, ChineseElement::Metal);
        assert_eq!(y2020.yin_yang, YinYang::Yang);

        let y1990 = classify_chinese(1990);
        assert_eq!(y1990.animal, ChineseAnimal::Horse);
        assert_eq!(y1990.element, ChineseElement::Metal);

        let y2023 = classify_chinese(2023);
        assert_eq!(y2023.animal, ChineseAnimal::Rabbit);
        assert_eq!(y2023.element, ChineseElement::Water);
        assert_eq!(y2023.yin_yang, YinYang::Yin);
        assert_eq!(y2023.lucky_numbers, [3, 4, 6]);
    }

    #[test]
    fn test_chinese_handles_years_before_the_anchor() {
        let y3 = classify_chinese(3);
        assert_eq!(y3.animal, ChineseAnimal::Pig);
        assert_eq!(y3.element, ChineseElement::Water);
        assert_eq!(classify_chinese(-8).animal, ChineseAnimal::Rat);
    }
}
