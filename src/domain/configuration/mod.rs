// 構成関連のドメインモデル

pub mod candidate;
pub mod configuration;

pub use candidate::ScoredCandidate;
pub use configuration::{Configuration, Mode, Position, PositionPair};
