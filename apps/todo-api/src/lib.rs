//! # Todo API ライブラリ
//!
//! Todo アイテムの HTTP API を構成するモジュールを公開する。
//! `main.rs` はインフラ初期化とサーバー起動のみを担当し、
//! ルーター構築は [`app_builder`] に集約する（統合テストから直接呼び出すため）。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
