// 表示用の文字列整形

use crate::domain::configuration::{Configuration, ScoredCandidate};

/// 力を小数1桁で表示する（NaN は "—"）
pub fn format_force(force: f64) -> String {
    if force.is_finite() {
        format!("{:.1}", force)
    } else {
        "—".to_string()
    }
}

/// 構成の位置表示
pub fn format_configuration(configuration: &Configuration) -> String {
    match configuration {
        Configuration::Single(p) => format!("位置: {} · 1本", p),
        Configuration::Double(pair) => format!("I: {} · II: {} · 2本", pair.lo(), pair.hi()),
    }
}

/// 候補1行: "<力> kg | <位置> | Δ <差> kg"
pub fn format_candidate(candidate: &ScoredCandidate) -> String {
    format!(
        "{} kg | {} | Δ {} kg",
        format_force(candidate.force),
        format_configuration(&candidate.configuration),
        format_force(candidate.diff)
    )
}
