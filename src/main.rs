use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::unbounded;

use opchain::application::solver::event::SolveEvent;
use opchain::application::solver::search::run_solve;
use opchain::application::solver::service::SolverService;
use opchain::domain::solve::{MemoSize, OperatorMode, SolveConfig};
use opchain::infrastructure::input::parse_path;
use opchain::{logging, vlog};

/// 演算子チェーン総当たりソルバー
#[derive(Parser, Debug)]
#[command(
    name = "opchain",
    version,
    about = "オペランド列の隙間に演算子を総当たりで割り当て、目標値を再現できる方程式の合計を求める"
)]
struct Cli {
    /// 入力ファイル（`<target>: <operand> <operand> ...` 形式）
    input: PathBuf,

    /// 使用する演算子セット
    #[arg(long, value_enum, default_value = "add-mul")]
    mode: OperatorMode,

    /// 充足した方程式の JSONL 出力先
    #[arg(long)]
    output: Option<PathBuf>,

    /// 状態メモ上限（千単位）
    #[arg(long, default_value_t = 300)]
    memo_k: u32,

    /// 進捗・ログ表示を抑止する
    #[arg(long)]
    quiet: bool,

    /// 詳細ログをファイルへ出力する
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::enable_verbose_logging();
        logging::init_log_file("opchain.log").context("ログファイルを初期化できません")?;
    }

    let config = SolveConfig {
        mode: cli.mode,
        memo_limit: MemoSize::new_in_thousands(cli.memo_k)?,
    };

    let equations = parse_path(&cli.input)?;
    vlog!("入力: {} 本の方程式を読み込みました", equations.len());

    let mut service = SolverService::new();
    let handle = service.start_solve(&equations, &config, cli.output.as_deref())?;

    // Ctrl-C で中断フラグを立てる
    {
        let abort = handle.progress.abort_flag();
        ctrlc::set_handler(move || {
            abort.store(true, Ordering::Relaxed);
        })
        .context("シグナルハンドラを設定できません")?;
    }

    let (tx, rx) = unbounded::<SolveEvent>();
    let progress = service.progress();
    let worker = {
        let config = config.clone();
        let output = cli.output.clone();
        thread::spawn(move || {
            let result = run_solve(equations, &config, output, tx.clone(), progress);
            if let Err(e) = &result {
                let _ = tx.send(SolveEvent::Error(format!("{e:?}")));
            }
            result
        })
    };

    // イベントループ（チャネルはワーカー終了時に閉じる）
    let mut final_progress = None;
    let mut failure = None;
    while let Ok(event) = rx.recv() {
        match event {
            SolveEvent::Log(message) => {
                if !cli.quiet {
                    eprintln!("{message}");
                }
                vlog!("{}", message);
            }
            SolveEvent::Progress(st) => {
                if !cli.quiet {
                    eprintln!(
                        "進捗: {}/{} 本 / 充足 {} / 展開節点 {} / 枝刈り {} / 速度 {:.1} nodes/s",
                        st.equations_done,
                        st.total_equations,
                        st.satisfied_count,
                        st.nodes_searched,
                        st.pruned_count,
                        st.search_rate
                    );
                }
            }
            SolveEvent::Finished(st) => {
                final_progress = Some(st);
            }
            SolveEvent::Error(message) => {
                failure = Some(message);
            }
        }
    }

    let sum = worker
        .join()
        .map_err(|_| anyhow::anyhow!("ワーカースレッドの join に失敗しました"))?;
    if let Some(message) = failure {
        anyhow::bail!("解探索が失敗しました: {message}");
    }
    let sum = sum?;

    if let Some(st) = &final_progress {
        let summary = service.create_summary(st);
        if !cli.quiet {
            eprintln!(
                "完了: 充足 {}/{} 本 / 展開節点 {} / {:.2} 秒 / {:.1} nodes/s",
                summary.satisfied_count,
                summary.equations_total,
                summary.nodes_searched,
                summary.elapsed_seconds,
                summary.nodes_per_second
            );
        }
        vlog!("合計 = {}", summary.total_sum);
    }

    println!("{sum}");
    Ok(())
}
