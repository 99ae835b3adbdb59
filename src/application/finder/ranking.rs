// 候補の順位付け

use crate::domain::configuration::ScoredCandidate;

/// 差の昇順（同差は力の昇順）に並べ、先頭 `limit` 件を返す
///
/// 比較は全順序なので、入力の列挙順に関係なく同じ結果になる。
/// 候補が `limit` より少なければそのまま全件を返す。
pub fn rank(mut candidates: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    candidates.sort_by(ScoredCandidate::ranking_cmp);
    candidates.truncate(limit);
    candidates
}
