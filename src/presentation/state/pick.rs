// 目標の力から構成を選ぶ画面の状態

use crate::application::finder::ConfigurationFinder;
use crate::domain::configuration::{Mode, ScoredCandidate};
use crate::presentation::format::format_candidate;
use crate::presentation::input::coerce_number;

/// 候補が出せないときの表示
pub const EMPTY_MESSAGE: &str = "目標の力（kg）を入力してください";

/// 選択画面の状態
#[derive(Clone, Debug)]
pub struct PickState {
    pub mode: Mode,
    pub target: f64,
    pub rows: Vec<ScoredCandidate>,
}

impl PickState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Double,
            target: f64::NAN,
            rows: Vec::new(),
        }
    }

    /// 目標のテキストを受け取り候補を更新する
    pub fn update(
        &mut self,
        finder: &ConfigurationFinder,
        mode: Mode,
        target_text: &str,
        limit: Option<usize>,
    ) {
        self.mode = mode;
        self.target = coerce_number(target_text);
        self.rows = finder.find(mode, self.target, limit);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 表示行。候補がなければ案内文のみ
    pub fn lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![EMPTY_MESSAGE.to_string()];
        }
        self.rows.iter().map(format_candidate).collect()
    }
}

impl Default for PickState {
    fn default() -> Self {
        Self::new()
    }
}
