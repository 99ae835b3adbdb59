// プレゼンテーション層 - 入力の正規化と表示用の状態

pub mod format;
pub mod input;
pub mod state;

pub use input::{coerce_number, coerce_position};
pub use state::{CalcReading, CalcState, PickState};
