// 構成検索アプリケーションサービス

pub mod ranking;
pub mod service;

pub use ranking::rank;
pub use service::ConfigurationFinder;
