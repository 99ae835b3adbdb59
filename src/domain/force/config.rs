// 力モデル設定のValue Objects

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{COEF_A, COEF_B, COEF_C, MIN_SEPARATION, POSITION_MAX, POSITION_MIN};

/// 力曲線の係数（F = A·p² + B·p + C）
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    /// 基準ドメインの係数
    pub const REFERENCE: Self = Self {
        a: COEF_A,
        b: COEF_B,
        c: COEF_C,
    };

    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let coefficients = Self { a, b, c };
        coefficients.validate()?;
        Ok(coefficients)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("A", self.a), ("B", self.b), ("C", self.c)] {
            if !value.is_finite() {
                return Err(anyhow!("係数{}が有限値ではありません: {}", name, value));
            }
        }
        Ok(())
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// 取り付け位置の閉区間 [min, max]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRange {
    min: i32,
    max: i32,
}

impl PositionRange {
    /// 基準ドメインの範囲（1..=12）
    pub const REFERENCE: Self = Self {
        min: POSITION_MIN,
        max: POSITION_MAX,
    };

    pub fn new(min: i32, max: i32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(anyhow!(
                "位置範囲が逆転しています: {}..={}",
                self.min,
                self.max
            ));
        }
        Ok(())
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// 範囲内の位置の数
    pub fn len(&self) -> usize {
        (self.max as i64 - self.min as i64 + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 実数値が範囲内の整数かどうか
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite()
            && value.fract() == 0.0
            && value >= self.min as f64
            && value <= self.max as f64
    }
}

impl Default for PositionRange {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// 力モデル全体の設定
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub coefficients: Coefficients,
    pub range: PositionRange,
    #[serde(default = "default_min_separation")]
    pub min_separation: i32,
}

fn default_min_separation() -> i32 {
    MIN_SEPARATION
}

impl ModelConfig {
    /// デシリアライズ後はValue Objectの検証を経ていないので再検証する
    pub fn validate(&self) -> Result<()> {
        self.coefficients.validate().context("係数が不正です")?;
        self.range.validate().context("位置範囲が不正です")?;
        if self.min_separation < 1 {
            return Err(anyhow!(
                "最小間隔は1以上である必要があります: {}",
                self.min_separation
            ));
        }
        Ok(())
    }

    /// JSON文字列から読み込んで検証する
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("設定JSONの解析に失敗しました")?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::REFERENCE,
            range: PositionRange::REFERENCE,
            min_separation: MIN_SEPARATION,
        }
    }
}
