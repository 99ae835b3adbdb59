// アプリケーション層 - ユースケース

pub mod finder;

pub use finder::ConfigurationFinder;
