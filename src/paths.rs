//! パス判定モジュール - 画像ファイルの判定と出力パスの重複回避

use std::path::{Path, PathBuf};

/// 対応する画像拡張子（小文字比較）
pub const IMAGE_EXTS: [&str; 8] = ["jpg", "jpeg", "png", "webp", "bmp", "tif", "tiff", "heic"];

/// パスが対象の画像ファイルかどうかを判定
///
/// 実在する通常ファイルで、拡張子が対応リストに含まれる場合のみ true。
/// 拡張子の大文字小文字は区別しない。内容のチェックは行わない。
pub fn is_image_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// 重複しない出力パスを取得（同名ファイルがある場合は -1, -2, … を付与）
///
/// 拡張子の手前に連番を挿入し、存在しない最初の候補を返す。
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|s| s.to_str());
    let parent = path.parent().unwrap_or(Path::new(""));

    let mut counter = 1u32;
    loop {
        let candidate_name = match ext {
            Some(ext) => format!("{stem}-{counter}.{ext}"),
            None => format!("{stem}-{counter}"),
        };
        let candidate = parent.join(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn accepts_supported_extensions_case_insensitively() {
        let temp = tempdir().unwrap();
        for name in ["a.jpg", "b.JPEG", "c.Png", "d.webp", "e.HEIC", "f.tif"] {
            let path = temp.path().join(name);
            std::fs::write(&path, b"x").unwrap();
            assert!(is_image_file(&path), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_unsupported_extension_and_missing_file() {
        let temp = tempdir().unwrap();
        let txt = temp.path().join("note.txt");
        std::fs::write(&txt, b"x").unwrap();
        assert!(!is_image_file(&txt));
        assert!(!is_image_file(&temp.path().join("ghost.jpg")));
    }

    #[test]
    fn rejects_directory_even_with_image_extension() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("folder.jpg");
        std::fs::create_dir(&dir).unwrap();
        assert!(!is_image_file(&dir));
    }

    #[test]
    fn unique_path_returns_free_path_unchanged() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("x.jpg");
        assert_eq!(unique_path(&path), path);
    }

    #[test]
    fn unique_path_skips_existing_suffixes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("x.jpg");
        std::fs::write(&path, b"x").unwrap();
        std::fs::write(temp.path().join("x-1.jpg"), b"x").unwrap();
        assert_eq!(unique_path(&path), temp.path().join("x-2.jpg"));
    }

    #[test]
    fn unique_path_handles_extensionless_names() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("x");
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(unique_path(&path), temp.path().join("x-1"));
    }
}
