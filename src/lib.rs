//! 品番画像リネーマー - 品番ベースの連番リネームコピーを行う画像整理ツール
//!
//! # 機能
//! - 画像ファイルのドラッグ＆ドロップ / ダイアログでの追加
//! - リストの並べ替え（1件移動・ファイル名ソート）で連番順を制御
//! - `{品番}_{プレフィックス}{連番}{拡張子}` 形式でのリネームコピー
//! - 出力先の同名ファイルは -1, -2, … で自動回避
//! - プレビュー実行（ファイルを書き込まずに対応表のみ表示）

pub mod collection;
pub mod dnd;
pub mod export;
pub mod gui;
pub mod paths;

pub use collection::FileCollection;
pub use export::{ExportReport, ExportSettings};
