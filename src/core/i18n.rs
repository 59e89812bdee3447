//! Localized labels the engine needs for records, mismatch lists and the
//! history report. Everything else visible to the player belongs to the UI.

use super::config::{Locale, PuzzleMode};
use crate::board::TileKind;

/// Label of a puzzle mode, stored in history records.
#[must_use]
pub fn mode_label(mode: PuzzleMode, locale: Locale) -> &'static str {
    match mode {
        PuzzleMode::Trigram => locale.pick("八卦", "Bagua"),
        PuzzleMode::Hexagram => locale.pick("六十四卦", "64 Hexagrams"),
        PuzzleMode::Idiom => locale.pick("易道成语", "Wisdom Idioms"),
    }
}

/// Suffix naming the kind of a wrong placement, e.g. "Qian nature".
#[must_use]
pub fn kind_label(kind: TileKind, locale: Locale) -> &'static str {
    match kind {
        TileKind::Symbol => locale.pick("卦象", "symbol"),
        TileKind::Name => locale.pick("卦名", "name"),
        TileKind::Nature => locale.pick("物象", "nature"),
        TileKind::SolarTerm => locale.pick("节气", "solar term"),
        TileKind::HexName => locale.pick("卦名", "hexagram name"),
        TileKind::Idiom => locale.pick("成语", "idiom"),
    }
}

/// Field labels of the plain-text history report.
#[derive(Clone, Copy, Debug)]
pub struct ReportLabels {
    pub title: &'static str,
    pub generated_at: &'static str,
    pub user: &'static str,
    pub guest: &'static str,
    pub record: &'static str,
    pub mode: &'static str,
    pub timestamp: &'static str,
    pub score: &'static str,
    pub feedback: &'static str,
    pub file_stem: &'static str,
}

#[must_use]
pub fn report_labels(locale: Locale) -> ReportLabels {
    match locale {
        Locale::Zh => ReportLabels {
            title: "易经大师 - 演算历程报告",
            generated_at: "生成时间",
            user: "用户",
            guest: "游客",
            record: "记录",
            mode: "模式",
            timestamp: "时间",
            score: "评分",
            feedback: "感悟反馈",
            file_stem: "易经演算历程",
        },
        Locale::En => ReportLabels {
            title: "I Ching Master - Practice Records Report",
            generated_at: "Generated at",
            user: "User",
            guest: "Guest",
            record: "Record",
            mode: "Mode",
            timestamp: "Timestamp",
            score: "Score",
            feedback: "Insight Feedback",
            file_stem: "IChing_Records",
        },
    }
}
