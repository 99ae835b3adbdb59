// バンド負荷計算 - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod presentation;   // プレゼンテーション層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::finder::ConfigurationFinder;
pub use constants::DEFAULT_LIMIT;
pub use domain::configuration::{Configuration, Mode, Position, ScoredCandidate};
pub use domain::force::{Coefficients, ForceModel, ModelConfig, PositionRange};
