// 結果の永続化

pub mod writer;

pub use writer::{FileResultWriter, MemoryResultWriter, OutputFormat, ResultWriter};
