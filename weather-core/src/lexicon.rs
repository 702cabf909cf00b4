//! WMO weather code lexicon.
//!
//! Maps the numeric `weather_code` returned by Open-Meteo to the zh-CN text and
//! emoji shown on the card. See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

/// Display text and icon for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    pub text: &'static str,
    pub icon: &'static str,
}

impl Condition {
    const fn new(text: &'static str, icon: &'static str) -> Self {
        Self { text, icon }
    }
}

/// Returned for any code outside the known WMO set.
pub const UNKNOWN: Condition = Condition::new("未知", "❔");

/// Every code that has its own entry in the lexicon.
pub const KNOWN_CODES: &[i64] = &[
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85, 86,
    95, 96, 99,
];

/// Resolve a WMO code. Never fails: unknown codes map to [`UNKNOWN`].
pub fn lookup(code: i64) -> Condition {
    match code {
        0 => Condition::new("晴", "☀️"),
        1 => Condition::new("多云转晴", "🌤️"),
        2 => Condition::new("多云", "⛅️"),
        3 => Condition::new("阴", "☁️"),
        45 => Condition::new("有雾", "🌫️"),
        48 => Condition::new("霜雾", "🌫️"),
        51 => Condition::new("小毛毛雨", "🌦️"),
        53 => Condition::new("中毛毛雨", "🌦️"),
        55 => Condition::new("大毛毛雨", "🌧️"),
        56 => Condition::new("小冻雨", "🧊🌧️"),
        57 => Condition::new("大冻雨", "🧊🌧️"),
        61 => Condition::new("小雨", "🌧️"),
        63 => Condition::new("中雨", "🌧️"),
        65 => Condition::new("大雨", "🌧️"),
        66 => Condition::new("小冻雨", "🧊🌧️"),
        67 => Condition::new("大冻雨", "🧊🌧️"),
        71 => Condition::new("小雪", "🌨️"),
        73 => Condition::new("中雪", "🌨️"),
        75 => Condition::new("大雪", "❄️"),
        77 => Condition::new("冰粒", "🌨️"),
        80 => Condition::new("阵雨", "🌦️"),
        81 => Condition::new("中阵雨", "🌧️"),
        82 => Condition::new("暴阵雨", "⛈️"),
        85 => Condition::new("小阵雪", "🌨️"),
        86 => Condition::new("大阵雪", "❄️"),
        95 => Condition::new("雷阵雨", "⛈️"),
        96 => Condition::new("雷阵雨伴冰雹", "⛈️🧊"),
        99 => Condition::new("强雷阵雨伴冰雹", "⛈️🧊"),
        _ => UNKNOWN,
    }
}

pub fn is_known(code: i64) -> bool {
    KNOWN_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_has_its_documented_pair() {
        let table: &[(i64, &str, &str)] = &[
            (0, "晴", "☀️"),
            (1, "多云转晴", "🌤️"),
            (2, "多云", "⛅️"),
            (3, "阴", "☁️"),
            (45, "有雾", "🌫️"),
            (48, "霜雾", "🌫️"),
            (51, "小毛毛雨", "🌦️"),
            (53, "中毛毛雨", "🌦️"),
            (55, "大毛毛雨", "🌧️"),
            (56, "小冻雨", "🧊🌧️"),
            (57, "大冻雨", "🧊🌧️"),
            (61, "小雨", "🌧️"),
            (63, "中雨", "🌧️"),
            (65, "大雨", "🌧️"),
            (66, "小冻雨", "🧊🌧️"),
            (67, "大冻雨", "🧊🌧️"),
            (71, "小雪", "🌨️"),
            (73, "中雪", "🌨️"),
            (75, "大雪", "❄️"),
            (77, "冰粒", "🌨️"),
            (80, "阵雨", "🌦️"),
            (81, "中阵雨", "🌧️"),
            (82, "暴阵雨", "⛈️"),
            (85, "小阵雪", "🌨️"),
            (86, "大阵雪", "❄️"),
            (95, "雷阵雨", "⛈️"),
            (96, "雷阵雨伴冰雹", "⛈️🧊"),
            (99, "强雷阵雨伴冰雹", "⛈️🧊"),
        ];

        assert_eq!(table.len(), KNOWN_CODES.len());
        for (code, text, icon) in table {
            let condition = lookup(*code);
            assert_eq!(condition.text, *text, "text for code {code}");
            assert_eq!(condition.icon, *icon, "icon for code {code}");
            assert!(is_known(*code));
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        for code in [9999, -1, 4, 100, i64::MAX, i64::MIN] {
            assert_eq!(lookup(code), UNKNOWN, "code {code}");
            assert!(!is_known(code));
        }
    }

    #[test]
    fn unknown_pair_is_not_empty() {
        assert_eq!(UNKNOWN.text, "未知");
        assert_eq!(UNKNOWN.icon, "❔");
    }

    #[test]
    fn freezing_rain_tiers_share_text_with_freezing_drizzle() {
        assert_eq!(lookup(56), lookup(66));
        assert_eq!(lookup(57), lookup(67));
    }
}
