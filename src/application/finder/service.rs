// 目標の力に最も近い構成を探すサービス

use crate::constants::DEFAULT_LIMIT;
use crate::domain::configuration::{Configuration, Mode, ScoredCandidate};
use crate::domain::force::ForceModel;
use crate::vlog;

use super::ranking::rank;

/// 力モデルを全探索して目標に近い構成を返す
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigurationFinder {
    model: ForceModel,
    default_limit: usize,
}

impl ConfigurationFinder {
    pub fn new(model: ForceModel) -> Self {
        Self {
            model,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// `limit` 省略時の件数を変更する
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn model(&self) -> &ForceModel {
        &self.model
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// 1本掛けの候補（非有限の目標は空）
    pub fn find_single(&self, target: f64, limit: Option<usize>) -> Vec<ScoredCandidate> {
        self.search(Mode::Single, target, limit)
    }

    /// 2本掛けの候補（非有限の目標は空）
    pub fn find_double(&self, target: f64, limit: Option<usize>) -> Vec<ScoredCandidate> {
        self.search(Mode::Double, target, limit)
    }

    pub fn find(&self, mode: Mode, target: f64, limit: Option<usize>) -> Vec<ScoredCandidate> {
        self.search(mode, target, limit)
    }

    fn search(&self, mode: Mode, target: f64, limit: Option<usize>) -> Vec<ScoredCandidate> {
        if !target.is_finite() {
            vlog!("[検索] mode={} 目標が有限値ではないため空: {}", mode, target);
            return Vec::new();
        }
        let limit = limit.unwrap_or(self.default_limit);

        let candidates: Vec<ScoredCandidate> = match mode {
            Mode::Single => self.score(self.model.single_configurations(), target),
            Mode::Double => self.score(self.model.double_configurations(), target),
        };
        let total = candidates.len();
        let ranked = rank(candidates, limit);

        if let Some(best) = ranked.first() {
            vlog!(
                "[検索] mode={} target={} 候補数={} 返却={} 最良={}({}) 差={}",
                mode,
                target,
                total,
                ranked.len(),
                best.configuration,
                best.configuration.mode(),
                best.diff
            );
        } else {
            vlog!("[検索] mode={} target={} 候補数={} 返却=0", mode, target, total);
        }
        ranked
    }

    fn score(
        &self,
        configurations: impl Iterator<Item = Configuration>,
        target: f64,
    ) -> Vec<ScoredCandidate> {
        configurations
            .map(|c| ScoredCandidate::new(c, self.model.force_of(&c), target))
            .collect()
    }
}

impl Default for ConfigurationFinder {
    fn default() -> Self {
        Self::new(ForceModel::reference())
    }
}
