// 取り付け位置と構成（1本掛け / 2本掛け）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 取り付け位置（スロット番号）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(i32);

impl Position {
    pub fn new(slot: i32) -> Self {
        Self(slot)
    }

    pub fn get(&self) -> i32 {
        self.0
    }

    /// 力モデルに渡す実数値
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl From<i32> for Position {
    fn from(slot: i32) -> Self {
        Self(slot)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 順序を持たない2位置の組。常に lo < hi で保持する
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionPair {
    lo: Position,
    hi: Position,
}

impl PositionPair {
    /// 同じ位置どうしの組は作れない
    pub fn new(i: Position, j: Position) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { lo: i, hi: j }),
            std::cmp::Ordering::Greater => Some(Self { lo: j, hi: i }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn lo(&self) -> Position {
        self.lo
    }

    pub fn hi(&self) -> Position {
        self.hi
    }
}

/// 評価対象の構成
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Configuration {
    /// 1本掛け
    Single(Position),
    /// 2本掛け（順序なし）
    Double(PositionPair),
}

impl Configuration {
    pub fn single(position: impl Into<Position>) -> Self {
        Self::Single(position.into())
    }

    /// {i, j} と {j, i} は同じ値になる。i == j は None
    pub fn double(i: impl Into<Position>, j: impl Into<Position>) -> Option<Self> {
        PositionPair::new(i.into(), j.into()).map(Self::Double)
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Double(_) => Mode::Double,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(p) => write!(f, "{}", p),
            Self::Double(pair) => write!(f, "{}+{}", pair.lo(), pair.hi()),
        }
    }
}

/// 検索する構成の本数
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Double,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" => Ok(Self::Single),
            "double" | "2" => Ok(Self::Double),
            other => Err(anyhow::anyhow!("不明なモード: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn double_is_unordered() {
        let a = Configuration::double(3, 7).unwrap();
        let b = Configuration::double(7, 3).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn double_rejects_equal_positions() {
        assert!(Configuration::double(5, 5).is_none());
    }

    #[test]
    fn pair_keeps_ascending_order() {
        let pair = PositionPair::new(Position::new(12), Position::new(9)).unwrap();
        assert_eq!(pair.lo().get(), 9);
        assert_eq!(pair.hi().get(), 12);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Configuration::single(4).to_string(), "4");
        assert_eq!(Configuration::double(10, 2).unwrap().to_string(), "2+10");
    }

    #[test]
    fn mode_parses() {
        assert_eq!("single".parse::<Mode>().unwrap(), Mode::Single);
        assert_eq!(" Double ".parse::<Mode>().unwrap(), Mode::Double);
        assert_eq!("2".parse::<Mode>().unwrap(), Mode::Double);
        assert!("triple".parse::<Mode>().is_err());
    }

    #[test]
    fn configuration_reports_mode() {
        assert_eq!(Configuration::single(1).mode(), Mode::Single);
        assert_eq!(Configuration::double(1, 3).unwrap().mode(), Mode::Double);
    }
}
