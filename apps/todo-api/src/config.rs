//! # Todo API 設定
//!
//! 環境変数から Todo API サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_URL: &str = "sqlite://todo.db";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない値
    #[error("TODO_API_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// Todo API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoApiConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl TodoApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のルックアップ関数から設定を読み込む
    ///
    /// 未設定の変数はデフォルト値を使用する。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("TODO_API_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("TODO_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_未設定の場合デフォルト値を使用する() {
        let config = TodoApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            TodoApiConfig {
                host:         "0.0.0.0".to_string(),
                port:         8000,
                database_url: "sqlite://todo.db".to_string(),
            }
        );
    }

    #[test]
    fn test_環境変数の値で上書きされる() {
        let config = TodoApiConfig::from_lookup(lookup_from(&[
            ("TODO_API_HOST", "127.0.0.1"),
            ("TODO_API_PORT", "3000"),
            ("DATABASE_URL", "sqlite:///var/lib/todo/todo.db"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite:///var/lib/todo/todo.db");
    }

    #[test]
    fn test_不正なポート番号はエラーになる() {
        let result = TodoApiConfig::from_lookup(lookup_from(&[("TODO_API_PORT", "abc")]));

        assert_eq!(result, Err(ConfigError::InvalidPort("abc".to_string())));
    }

    #[test]
    fn test_範囲外のポート番号はエラーになる() {
        let result = TodoApiConfig::from_lookup(lookup_from(&[("TODO_API_PORT", "70000")]));

        assert!(result.is_err());
    }
}
