// 結果書き出しスレッド

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::application::solver::event::SolveEvent;
use crate::domain::solve::EquationOutcome;
use crate::infrastructure::storage::{FileResultWriter, ResultWriter};

/// 書き込みチャネルとスレッドハンドルを返す
pub fn spawn_writer_thread(
    outfile: PathBuf,
    event_tx: Sender<SolveEvent>,
) -> Result<(Sender<Vec<EquationOutcome>>, JoinHandle<Result<()>>)> {
    let writer = FileResultWriter::json_lines(&outfile)
        .with_context(|| format!("出力を作成できません: {}", outfile.display()))?;
    let (wtx, wrx) = unbounded::<Vec<EquationOutcome>>();

    let handle = thread::spawn(move || writer_thread_main(wrx, writer, event_tx));

    Ok((wtx, handle))
}

/// ライタースレッドのメイン処理
fn writer_thread_main(
    wrx: Receiver<Vec<EquationOutcome>>,
    mut writer: FileResultWriter,
    tx: Sender<SolveEvent>,
) -> Result<()> {
    while let Ok(batch) = wrx.recv() {
        writer.write_batch(&batch)?;
    }

    writer.flush()?;

    if writer.count() > 0 {
        let _ = tx.send(SolveEvent::Log(format!(
            "充足した方程式を{}件書き出しました",
            writer.count()
        )));
    }

    Ok(())
}
