// 画面ごとの表示状態

pub mod calc;
pub mod pick;

pub use calc::{CalcReading, CalcState};
pub use pick::PickState;
