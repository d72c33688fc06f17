// インフラ層 - 外部システムとの接続、技術的実装

pub mod cache;
pub mod input;
pub mod storage;

pub use input::parse_path;
pub use storage::ResultWriter;
