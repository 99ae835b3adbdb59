use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bandforce::logging;
use bandforce::presentation::input::coerce_position;
use bandforce::presentation::state::{CalcReading, CalcState, PickState};
use bandforce::{ConfigurationFinder, ForceModel, Mode, ModelConfig};

#[derive(Parser, Debug)]
#[command(name = "bandforce", about = "バンドの取り付け位置と負荷の計算")]
struct Cli {
    /// 力モデルの設定ファイル（JSON）。省略時は基準値
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 詳細ログの出力先
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 位置から力を計算する（J を省略すると1本掛け）
    Calc {
        #[arg(allow_negative_numbers = true)]
        i: String,
        #[arg(allow_negative_numbers = true)]
        j: Option<String>,
    },
    /// 目標の力に近い構成を探す
    Pick {
        /// 目標の力 (kg)
        #[arg(allow_negative_numbers = true)]
        target: String,
        /// single / double
        #[arg(short, long, value_parser = parse_mode, default_value = "double")]
        mode: Mode,
        /// 表示する件数
        #[arg(short, long)]
        limit: Option<usize>,
        /// 候補をJSON Lines形式で出力する
        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(text: &str) -> Result<Mode, String> {
    text.parse::<Mode>().map_err(|e| e.to_string())
}

fn load_model(path: Option<&PathBuf>) -> Result<ForceModel> {
    let Some(path) = path else {
        return Ok(ForceModel::reference());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?;
    let config = ModelConfig::from_json(&text)
        .with_context(|| format!("設定ファイルが不正です: {}", path.display()))?;
    ForceModel::new(config)
}

/// サブコマンドを実行して出力行を返す
fn execute(model: ForceModel, command: Commands) -> Result<Vec<String>> {
    match command {
        Commands::Calc { i, j } => {
            let (mode, second) = match j {
                Some(j) => (Mode::Double, coerce_position(&j)),
                None => (Mode::Single, f64::NAN),
            };
            let mut state = CalcState::new(&model);
            state.set_inputs(&model, mode, coerce_position(&i), second);

            let reading = match &state.reading {
                CalcReading::Valid { .. } => format!("{} kg", state.reading.display_value()),
                CalcReading::Invalid { hint } => format!("— ({})", hint),
            };
            Ok(vec![state.mode_label().to_string(), reading])
        }
        Commands::Pick {
            target,
            mode,
            limit,
            json,
        } => {
            let finder = ConfigurationFinder::new(model);
            let mut state = PickState::new();
            state.update(&finder, mode, &target, limit);
            if !json {
                return Ok(state.lines());
            }
            state
                .rows
                .iter()
                .map(|row| serde_json::to_string(row).context("候補のJSON化に失敗しました"))
                .collect()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        logging::init_log_file(path)
            .with_context(|| format!("ログファイルを作成できません: {}", path.display()))?;
        logging::enable_verbose_logging();
    }

    let model = load_model(cli.config.as_ref())?;
    bandforce::vlog!("[起動] config={:?}", model.config());

    for line in execute(model, cli.command)? {
        println!("{}", line);
    }
    Ok(())
}
