// 力モデル - 位置 → 力の二次曲線と妥当性判定

use anyhow::{Context, Result};

use super::config::{Coefficients, ModelConfig, PositionRange};
use crate::domain::configuration::{Configuration, Position};

/// 係数と位置範囲を保持する純粋な力モデル
///
/// 数値演算は失敗しない。非有限の入力には `f64::NAN` を返し、
/// 物理的に意味のある構成かどうかは `is_valid_*` だけが判定する。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceModel {
    config: ModelConfig,
}

impl ForceModel {
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate().context("力モデルの設定が不正です")?;
        Ok(Self { config })
    }

    /// 基準ドメイン（A=0.3008, B=1.8637, C=2.98, 位置1..=12）
    pub fn reference() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.config.coefficients
    }

    pub fn range(&self) -> &PositionRange {
        &self.config.range
    }

    pub fn min_separation(&self) -> i32 {
        self.config.min_separation
    }

    /// 1位置の力 A·p² + B·p + C
    pub fn force(&self, position: f64) -> f64 {
        if !position.is_finite() {
            return f64::NAN;
        }
        let c = &self.config.coefficients;
        c.a() * position * position + c.b() * position + c.c()
    }

    /// 2位置の合計。相互作用項はなく、常に force(i) + force(j) と一致する
    pub fn force_pair(&self, i: f64, j: f64) -> f64 {
        self.force(i) + self.force(j)
    }

    /// 範囲内の整数位置か
    pub fn is_valid_single(&self, position: f64) -> bool {
        self.config.range.contains(position)
    }

    /// 2本掛けとして取り付け可能か（順序は問わない）
    pub fn is_valid_double(&self, i: f64, j: f64) -> bool {
        self.is_valid_single(i)
            && self.is_valid_single(j)
            && i != j
            && (i - j).abs() >= self.config.min_separation as f64
    }

    /// 構成の合計の力
    pub fn force_of(&self, configuration: &Configuration) -> f64 {
        match configuration {
            Configuration::Single(p) => self.force(p.as_f64()),
            Configuration::Double(pair) => self.force_pair(pair.lo().as_f64(), pair.hi().as_f64()),
        }
    }

    /// 構成が取り付け可能か
    pub fn is_valid(&self, configuration: &Configuration) -> bool {
        match configuration {
            Configuration::Single(p) => self.is_valid_single(p.as_f64()),
            Configuration::Double(pair) => {
                self.is_valid_double(pair.lo().as_f64(), pair.hi().as_f64())
            }
        }
    }

    /// 範囲内の全位置（昇順）
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let range = self.config.range;
        (range.min()..=range.max()).map(Position::new)
    }

    /// 取り付け可能な1本掛け構成
    pub fn single_configurations(&self) -> impl Iterator<Item = Configuration> + '_ {
        self.positions()
            .filter(|p| self.is_valid_single(p.as_f64()))
            .map(Configuration::Single)
    }

    /// 取り付け可能な2本掛け構成。i < j のみ列挙するので各組は一度だけ現れる
    pub fn double_configurations(&self) -> impl Iterator<Item = Configuration> + '_ {
        self.positions().flat_map(move |i| {
            self.positions()
                .filter(move |j| i < *j)
                .filter(move |j| self.is_valid_double(i.as_f64(), j.as_f64()))
                .filter_map(move |j| Configuration::double(i, j))
        })
    }
}
