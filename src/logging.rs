// 詳細ログ（ファイル出力）

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// 経過時間の基準（最初のログ初期化または書き込み時点）
static STARTED: OnceLock<Instant> = OnceLock::new();

fn elapsed() -> Duration {
    STARTED.get_or_init(Instant::now).elapsed()
}

/// 経過ミリ秒を前置した1行
fn format_line(elapsed: Duration, message: &str) -> String {
    format!("[{:>9.3}ms] {}", elapsed.as_secs_f64() * 1000.0, message)
}

/// ログファイルを初期化する（既存の内容は破棄）
pub fn init_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    STARTED.get_or_init(Instant::now);

    if let Ok(mut log_file) = LOG_FILE.lock() {
        *log_file = Some(file);
    }
    Ok(())
}

/// ログを1行書き込む。ファイル未設定なら標準エラーへ
pub fn write_log(message: String) {
    let line = format_line(elapsed(), &message);
    if let Ok(mut log_file) = LOG_FILE.lock() {
        match *log_file {
            Some(ref mut file) => {
                let _ = writeln!(file, "{}", line);
                let _ = file.flush();
            }
            None => eprintln!("{}", line),
        }
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（無効時はフォーマットもしない）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}
