//! エクスポートモジュール - 出力名の組み立てとリネームコピーの実行

use crate::paths::unique_path;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// プレフィックス未入力時の既定値
pub const DEFAULT_PREFIX: &str = "ImageName";

/// 実行前バリデーションのエラー
///
/// いずれの場合も副作用ゼロで中断し、ユーザーの修正を待つ。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// 品番が空、または数字以外を含む
    #[error("品番は数字のみで入力してください")]
    InvalidPartNumber,
    /// リストに画像が1枚もない
    #[error("画像が1枚も選択されていません")]
    EmptyCollection,
    /// 実コピーなのに出力フォルダが未選択
    #[error("出力フォルダが選択されていません")]
    MissingOutputDir,
}

/// エクスポート設定
///
/// 実行のたびにUIの入力値から組み立て直す。保存はしない。
#[derive(Debug, Clone, Default)]
pub struct ExportSettings {
    /// 品番（数字のみ）
    pub part_number: String,
    /// ファイル名プレフィックス（空なら既定値を使用）
    pub prefix: String,
    /// 連番の開始値（1未満は1に切り上げ）
    pub start_index: u32,
    /// 連番のゼロ埋め桁数（0 = 埋めない）
    pub pad_width: u32,
    /// 出力フォルダ（プレビュー時は不要）
    pub output_dir: Option<PathBuf>,
    /// プレビューのみ（ファイルを書き込まない）
    pub preview_only: bool,
}

/// 1件分の処理結果
#[derive(Debug, Clone)]
pub struct ItemResult {
    pub success: bool,
    /// 元ファイル名
    pub original: String,
    /// 出力ファイル名（重複回避後）
    pub new_name: Option<String>,
    pub error: Option<String>,
}

/// 1回の実行の結果
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// プレビュー実行だったかどうか
    pub preview: bool,
    /// リストの並び順どおりの処理結果
    pub results: Vec<ItemResult>,
    /// コピーに成功した件数（プレビュー時は0）
    pub exported: usize,
}

/// 品番が有効かどうか（空でなく数字のみ）
pub fn is_valid_part_number(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

/// 出力ファイル名を組み立てる
///
/// フォーマット: `{品番}_{プレフィックス}{連番}{拡張子}`
/// 連番は pad_width > 0 のときゼロ埋め。拡張子は先頭のドットを含み、
/// 元ファイルの大文字小文字をそのまま使う。
pub fn build_name(part: &str, index: u32, ext: &str, prefix: &str, pad_width: u32) -> String {
    let num_str = if pad_width > 0 {
        format!("{index:0width$}", width = pad_width as usize)
    } else {
        index.to_string()
    };
    format!("{part}_{prefix}{num_str}{ext}")
}

/// リストを先頭から処理し、プレビューまたは実コピーを行う
///
/// バリデーションに失敗した場合は何も書き込まずにエラーを返す。
/// 実コピー中の個別の失敗はその1件の結果に記録し、残りの処理は続行する。
pub fn run_export(files: &[PathBuf], settings: &ExportSettings) -> Result<ExportReport, ExportError> {
    let part = settings.part_number.trim();
    if !is_valid_part_number(part) {
        return Err(ExportError::InvalidPartNumber);
    }
    if files.is_empty() {
        return Err(ExportError::EmptyCollection);
    }
    let output_dir = if settings.preview_only {
        None
    } else {
        match settings.output_dir.as_deref() {
            Some(dir) => Some(dir),
            None => return Err(ExportError::MissingOutputDir),
        }
    };

    // 実効値の決定
    let trimmed = settings.prefix.trim();
    let prefix = if trimmed.is_empty() { DEFAULT_PREFIX } else { trimmed };
    let start_index = settings.start_index.max(1);

    let mut results = Vec::with_capacity(files.len());
    let mut exported = 0;

    for (offset, src) in files.iter().enumerate() {
        let index = start_index + offset as u32;
        let ext = src
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let out_name = build_name(part, index, &ext, prefix, settings.pad_width);
        let original = file_name_of(src);

        match output_dir {
            None => {
                results.push(ItemResult {
                    success: true,
                    original,
                    new_name: Some(out_name),
                    error: None,
                });
            }
            Some(dir) => {
                let dest = unique_path(&dir.join(&out_name));
                match std::fs::copy(src, &dest) {
                    Ok(_) => {
                        exported += 1;
                        results.push(ItemResult {
                            success: true,
                            original,
                            new_name: Some(file_name_of(&dest)),
                            error: None,
                        });
                    }
                    Err(e) => {
                        tracing::error!("コピー失敗 {}: {}", src.display(), e);
                        results.push(ItemResult {
                            success: false,
                            original,
                            new_name: None,
                            error: Some(e.to_string()),
                        });
                    }
                }
            }
        }
    }

    Ok(ExportReport {
        preview: settings.preview_only,
        results,
        exported,
    })
}

/// パス末尾のファイル名を表示用の文字列にする
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
