//! GUIモジュール - eframeアプリケーションと画面テーマ

mod app;
mod theme;

pub use app::run;
