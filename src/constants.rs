// 基準ドメインの定数

/// ====== 力曲線の係数（F = A·p² + B·p + C） ======
pub const COEF_A: f64 = 0.3008;
pub const COEF_B: f64 = 1.8637;
pub const COEF_C: f64 = 2.98;

/// ====== 取り付け位置の範囲 ======
pub const POSITION_MIN: i32 = 1;
pub const POSITION_MAX: i32 = 12;

/// 2本掛けで必要な位置の最小間隔
pub const MIN_SEPARATION: i32 = 2;

/// 検索結果の既定件数
pub const DEFAULT_LIMIT: usize = 2;
