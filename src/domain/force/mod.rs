// 力モデルのドメイン層

pub mod config;
pub mod model;

pub use config::{Coefficients, ModelConfig, PositionRange};
pub use model::ForceModel;
