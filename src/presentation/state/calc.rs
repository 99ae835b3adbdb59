// 力の計算画面の状態

use crate::domain::configuration::Mode;
use crate::domain::force::ForceModel;
use crate::presentation::format::format_force;

/// 計算結果の表示値
#[derive(Clone, Debug, PartialEq)]
pub enum CalcReading {
    /// 取り付け可能。合計の力
    Valid { force: f64 },
    /// 取り付け不可。理由の説明
    Invalid { hint: String },
}

impl CalcReading {
    /// 1本掛けは `i` のみ、2本掛けは `i` と `j` を評価する
    pub fn evaluate(model: &ForceModel, mode: Mode, i: f64, j: f64) -> Self {
        let range = model.range();
        match mode {
            Mode::Single => {
                if !model.is_valid_single(i) {
                    return Self::Invalid {
                        hint: format!("位置は{}〜{}の整数", range.min(), range.max()),
                    };
                }
                Self::Valid {
                    force: model.force(i),
                }
            }
            Mode::Double => {
                if !model.is_valid_double(i, j) {
                    return Self::Invalid {
                        hint: format!(
                            "2本掛けは位置が異なり |i−j| ≥ {}、範囲は{}〜{}",
                            model.min_separation(),
                            range.min(),
                            range.max()
                        ),
                    };
                }
                Self::Valid {
                    force: model.force_pair(i, j),
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// 表示用の値（不可なら "—"）
    pub fn display_value(&self) -> String {
        match self {
            Self::Valid { force } => format_force(*force),
            Self::Invalid { .. } => "—".to_string(),
        }
    }
}

/// 計算画面の状態
#[derive(Clone, Debug)]
pub struct CalcState {
    pub mode: Mode,
    pub position_i: f64,
    pub position_ii: f64,
    pub reading: CalcReading,
}

impl CalcState {
    pub fn new(model: &ForceModel) -> Self {
        let first = model.range().min() as f64;
        let mut state = Self {
            mode: Mode::Double,
            position_i: first,
            position_ii: first + model.min_separation() as f64,
            reading: CalcReading::Invalid {
                hint: String::new(),
            },
        };
        state.recompute(model);
        state
    }

    /// 入力を差し替えて再計算
    pub fn set_inputs(&mut self, model: &ForceModel, mode: Mode, i: f64, j: f64) {
        self.mode = mode;
        self.position_i = i;
        self.position_ii = j;
        self.recompute(model);
    }

    fn recompute(&mut self, model: &ForceModel) {
        self.reading = CalcReading::evaluate(model, self.mode, self.position_i, self.position_ii);
    }

    /// モードの説明
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            Mode::Single => "モード: 1本",
            Mode::Double => "モード: 2本",
        }
    }
}
