// 結果の書き込み

use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::solve::EquationOutcome;

/// 判定結果を書き込むためのtrait
pub trait ResultWriter: Send {
    /// 単一の結果を書き込む
    fn write_result(&mut self, outcome: &EquationOutcome) -> Result<()>;

    /// 複数の結果をバッチで書き込む
    fn write_batch(&mut self, outcomes: &[EquationOutcome]) -> Result<()> {
        for outcome in outcomes {
            self.write_result(outcome)?;
        }
        Ok(())
    }

    /// 書き込みを完了（フラッシュ）
    fn flush(&mut self) -> Result<()>;

    /// 書き込んだ結果数を取得
    fn count(&self) -> u64;
}

/// 出力フォーマット
#[derive(Clone, Copy, Debug)]
pub enum OutputFormat {
    /// JSON Lines形式（1行1結果）
    JsonLines,
    /// JSON配列形式
    JsonArray,
}

/// ファイルへの結果書き込み実装
pub struct FileResultWriter {
    writer: BufWriter<File>,
    count: u64,
    format: OutputFormat,
}

impl FileResultWriter {
    /// 新しいファイルライターを作成
    pub fn new(path: &Path, format: OutputFormat) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        Ok(Self {
            writer,
            count: 0,
            format,
        })
    }

    /// JSON Lines形式で作成
    pub fn json_lines(path: &Path) -> Result<Self> {
        Self::new(path, OutputFormat::JsonLines)
    }

    /// JSON配列形式で作成
    pub fn json_array(path: &Path) -> Result<Self> {
        let mut writer = Self::new(path, OutputFormat::JsonArray)?;
        writer.writer.write_all(b"[\n")?;
        Ok(writer)
    }
}

impl ResultWriter for FileResultWriter {
    fn write_result(&mut self, outcome: &EquationOutcome) -> Result<()> {
        match self.format {
            OutputFormat::JsonLines => {
                let json = serde_json::to_string(outcome)?;
                writeln!(self.writer, "{}", json)?;
            }
            OutputFormat::JsonArray => {
                if self.count > 0 {
                    writeln!(self.writer, ",")?;
                }
                let json = serde_json::to_string(outcome)?;
                write!(self.writer, "  {}", json)?;
            }
        }
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if matches!(self.format, OutputFormat::JsonArray) {
            writeln!(self.writer, "\n]")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }
}

/// メモリ内結果書き込み実装（テスト用）
pub struct MemoryResultWriter {
    outcomes: Vec<EquationOutcome>,
}

impl MemoryResultWriter {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn outcomes(&self) -> &[EquationOutcome] {
        &self.outcomes
    }
}

impl Default for MemoryResultWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultWriter for MemoryResultWriter {
    fn write_result(&mut self, outcome: &EquationOutcome) -> Result<()> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.outcomes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_outcome() -> EquationOutcome {
        EquationOutcome {
            target: 190,
            operands: vec![10, 19],
            satisfiable: true,
        }
    }

    #[test]
    fn memory_writer_stores_outcomes() {
        let mut writer = MemoryResultWriter::new();
        let outcome = test_outcome();

        writer.write_result(&outcome).unwrap();
        writer.write_result(&outcome).unwrap();

        assert_eq!(writer.count(), 2);
        assert_eq!(writer.outcomes().len(), 2);
    }

    #[test]
    fn memory_writer_batch_write() {
        let mut writer = MemoryResultWriter::new();
        let outcomes = vec![test_outcome(), test_outcome(), test_outcome()];

        writer.write_batch(&outcomes).unwrap();

        assert_eq!(writer.count(), 3);
    }

    #[test]
    fn json_lines_writer_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");

        let mut writer = FileResultWriter::json_lines(&path).unwrap();
        writer.write_result(&test_outcome()).unwrap();
        writer
            .write_result(&EquationOutcome {
                target: 3267,
                operands: vec![81, 40, 27],
                satisfiable: true,
            })
            .unwrap();
        writer.flush().unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: EquationOutcome = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.target, 190);
        assert_eq!(first.operands, vec![10, 19]);
        assert!(first.satisfiable);
    }

    #[test]
    fn json_array_writer_produces_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let mut writer = FileResultWriter::json_array(&path).unwrap();
        writer.write_result(&test_outcome()).unwrap();
        writer.write_result(&test_outcome()).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<EquationOutcome> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
