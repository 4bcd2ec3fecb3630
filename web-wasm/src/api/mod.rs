//! 解析API呼び出し（fetch）

pub mod client;
