// スコア付き候補

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::configuration::{Configuration, Position};

/// 構成と、その合計の力・目標との差
///
/// シリアライズ時は `{"mode":"single","position":7,"force":..,"diff":..}` /
/// `{"mode":"double","i":5,"j":9,"force":..,"diff":..}` の平坦な行になる。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "CandidateRow", try_from = "CandidateRow")]
pub struct ScoredCandidate {
    pub configuration: Configuration,
    pub force: f64,
    pub diff: f64,
}

impl ScoredCandidate {
    pub fn new(configuration: Configuration, force: f64, target: f64) -> Self {
        Self {
            configuration,
            force,
            diff: (force - target).abs(),
        }
    }

    /// 1本掛けの位置
    pub fn position(&self) -> Option<Position> {
        match self.configuration {
            Configuration::Single(p) => Some(p),
            Configuration::Double(_) => None,
        }
    }

    /// 2本掛けの位置 (i < j)
    pub fn pair(&self) -> Option<(Position, Position)> {
        match self.configuration {
            Configuration::Single(_) => None,
            Configuration::Double(pair) => Some((pair.lo(), pair.hi())),
        }
    }

    /// 順位付けの全順序: 差 → 力 → 構成
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        self.diff
            .total_cmp(&other.diff)
            .then_with(|| self.force.total_cmp(&other.force))
            .then_with(|| self.configuration.cmp(&other.configuration))
    }
}

/// 外部向けの行形式
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
enum CandidateRow {
    Single { position: i32, force: f64, diff: f64 },
    Double { i: i32, j: i32, force: f64, diff: f64 },
}

impl From<ScoredCandidate> for CandidateRow {
    fn from(candidate: ScoredCandidate) -> Self {
        let ScoredCandidate {
            configuration,
            force,
            diff,
        } = candidate;
        match configuration {
            Configuration::Single(p) => Self::Single {
                position: p.get(),
                force,
                diff,
            },
            Configuration::Double(pair) => Self::Double {
                i: pair.lo().get(),
                j: pair.hi().get(),
                force,
                diff,
            },
        }
    }
}

impl TryFrom<CandidateRow> for ScoredCandidate {
    type Error = String;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        let (configuration, force, diff) = match row {
            CandidateRow::Single {
                position,
                force,
                diff,
            } => (Configuration::single(position), force, diff),
            CandidateRow::Double { i, j, force, diff } => {
                let configuration = Configuration::double(i, j)
                    .ok_or_else(|| format!("2本掛けの位置が同じです: {}", i))?;
                (configuration, force, diff)
            }
        };
        Ok(Self {
            configuration,
            force,
            diff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_is_absolute() {
        let above = ScoredCandidate::new(Configuration::single(1), 10.0, 7.5);
        let below = ScoredCandidate::new(Configuration::single(1), 5.0, 7.5);
        assert_eq!(above.diff, 2.5);
        assert_eq!(below.diff, 2.5);
    }

    #[test]
    fn ranking_breaks_ties_by_force() {
        let low = ScoredCandidate::new(Configuration::single(1), 5.0, 7.5);
        let high = ScoredCandidate::new(Configuration::single(2), 10.0, 7.5);
        assert_eq!(low.ranking_cmp(&high), Ordering::Less);
        assert_eq!(high.ranking_cmp(&low), Ordering::Greater);
    }

    #[test]
    fn ranking_falls_back_to_configuration() {
        let a = ScoredCandidate::new(Configuration::double(1, 4).unwrap(), 9.0, 9.0);
        let b = ScoredCandidate::new(Configuration::double(2, 3).unwrap(), 9.0, 9.0);
        assert_eq!(a.ranking_cmp(&b), Ordering::Less);
        assert_eq!(a.ranking_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn accessors_match_arity() {
        let single = ScoredCandidate::new(Configuration::single(7), 1.0, 1.0);
        assert_eq!(single.position(), Some(Position::new(7)));
        assert_eq!(single.pair(), None);

        let double = ScoredCandidate::new(Configuration::double(9, 3).unwrap(), 1.0, 1.0);
        assert_eq!(double.position(), None);
        assert_eq!(double.pair(), Some((Position::new(3), Position::new(9))));
    }

    #[test]
    fn serializes_as_flat_rows() {
        let single = ScoredCandidate::new(Configuration::single(7), 30.5, 30.0);
        let value = serde_json::to_value(single).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "mode": "single", "position": 7, "force": 30.5, "diff": 0.5 })
        );

        let double = ScoredCandidate::new(Configuration::double(9, 5).unwrap(), 64.5, 64.0);
        let value = serde_json::to_value(double).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "mode": "double", "i": 5, "j": 9, "force": 64.5, "diff": 0.5 })
        );
    }

    #[test]
    fn reads_rows_back() {
        let json = r#"{ "mode": "double", "i": 9, "j": 5, "force": 64.5, "diff": 0.5 }"#;
        let candidate: ScoredCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.pair(), Some((Position::new(5), Position::new(9))));

        let same = r#"{ "mode": "double", "i": 4, "j": 4, "force": 1.0, "diff": 0.0 }"#;
        assert!(serde_json::from_str::<ScoredCandidate>(same).is_err());
    }
}
