//! ロギングユーティリティモジュール
//!
//! `log` クレートのマクロをブラウザのコンソールへ出力するための初期化処理を提供します。

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// デバッグ情報（状態遷移など）
    Debug,
    /// 情報（一般的な情報）
    Info,
    /// 警告（潜在的な問題）
    Warning,
    /// エラー（コールバックの失敗など）
    Error,
}

impl LogLevel {
    /// `log` クレートのレベルに変換
    pub fn to_log_level(self) -> log::Level {
        match self {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }

    /// 文字列からログレベルを解釈（不明な値は `None`）
    pub fn parse(name: &str) -> Option<LogLevel> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// ロギング初期化
///
/// wasm_logger はブラウザのコンソールに出力する。出力の絞り込みは `log` の
/// 最大レベルで行うため、初期化後も `set_log_level` で変更できる。
pub fn init_logging(min_level: LogLevel) {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    set_log_level(min_level);
}

/// 出力する最小ログレベルを変更
pub fn set_log_level(min_level: LogLevel) {
    log::set_max_level(min_level.to_log_level().to_level_filter());
    log::info!("ログレベルを設定しました (最小レベル: {:?})", min_level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(LogLevel::Warning.to_log_level(), log::Level::Warn);
    }
}
