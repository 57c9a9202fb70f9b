//! ファイルリストモジュール - エクスポート順を保持する画像リスト

use crate::paths::is_image_file;
use std::path::PathBuf;

/// ユーザーが並べ替えながら管理する画像ファイルのリスト
///
/// 並び順がそのままエクスポート時の連番になる。
/// 同一パス（完全一致）の重複は持たない。
#[derive(Debug, Default)]
pub struct FileCollection {
    files: Vec<PathBuf>,
}

impl FileCollection {
    /// 空のリストを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 候補パスを追加し、実際に追加できた件数を返す
    ///
    /// 対象の画像ファイルでないもの、既にリストにあるものは黙ってスキップする。
    pub fn add<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            if !is_image_file(&path) {
                tracing::debug!("対象外のためスキップ: {}", path.display());
                continue;
            }
            if self.files.contains(&path) {
                tracing::debug!("重複のためスキップ: {}", path.display());
                continue;
            }
            self.files.push(path);
            added += 1;
        }
        added
    }

    /// 指定位置のエントリを削除し、削除できた件数を返す
    ///
    /// インデックスのずれを避けるため大きい方から処理する。
    /// 範囲外のインデックスは無視する。
    pub fn remove_at(&mut self, indices: &[usize]) -> usize {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        let mut removed = 0;
        for index in sorted {
            if index < self.files.len() {
                self.files.remove(index);
                removed += 1;
            }
        }
        removed
    }

    /// リストを空にする
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// ファイル名（パス末尾のみ）の大文字小文字を無視した昇順に並べ替え
    pub fn sort_by_file_name(&mut self) {
        self.files.sort_by_key(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default()
        });
    }

    /// エントリを隣と入れ替える（direction は -1 か +1）
    ///
    /// 移動先が範囲外なら何もしない。成功時は移動後のインデックスを返すので、
    /// 呼び出し側は選択位置を追従させられる。
    pub fn move_one(&mut self, index: usize, direction: i32) -> Option<usize> {
        if index >= self.files.len() {
            return None;
        }
        let target = index as i64 + direction as i64;
        if target < 0 || target >= self.files.len() as i64 {
            return None;
        }
        let target = target as usize;
        self.files.swap(index, target);
        Some(target)
    }

    /// 登録件数
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// リストが空かどうか
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 現在の並び順のままのスライス
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"img").unwrap();
        path
    }

    #[test]
    fn add_skips_duplicates_and_ineligible_paths() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.jpg");
        let txt = touch(temp.path(), "note.txt");
        let missing = temp.path().join("missing.png");

        let mut list = FileCollection::new();
        assert_eq!(list.add([a.clone(), txt, missing]), 1);
        assert_eq!(list.add([a.clone()]), 0); // 重複
        assert_eq!(list.files(), &[a]);
    }

    #[test]
    fn remove_at_processes_indices_highest_first() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.jpg");
        let b = touch(temp.path(), "b.jpg");
        let c = touch(temp.path(), "c.jpg");

        let mut list = FileCollection::new();
        list.add([a, b.clone(), c]);
        // 昇順で渡しても前方の削除に巻き込まれない
        assert_eq!(list.remove_at(&[0, 2]), 2);
        assert_eq!(list.files(), &[b]);
    }

    #[test]
    fn remove_at_ignores_out_of_range_indices() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.jpg");

        let mut list = FileCollection::new();
        list.add([a.clone()]);
        assert_eq!(list.remove_at(&[5]), 0);
        assert_eq!(list.files(), &[a]);
    }

    #[test]
    fn sort_compares_file_names_case_insensitively() {
        let temp = tempdir().unwrap();
        let upper = touch(temp.path(), "B.jpg");
        let lower = touch(temp.path(), "a.jpg");
        let last = touch(temp.path(), "c.jpg");

        let mut list = FileCollection::new();
        list.add([last.clone(), upper.clone(), lower.clone()]);
        list.sort_by_file_name();
        assert_eq!(list.files(), &[lower, upper, last]);
    }

    #[test]
    fn move_one_swaps_with_neighbour_and_returns_new_index() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.jpg");
        let b = touch(temp.path(), "b.jpg");
        let c = touch(temp.path(), "c.jpg");

        let mut list = FileCollection::new();
        list.add([a.clone(), b.clone(), c.clone()]);
        assert_eq!(list.move_one(0, 1), Some(1));
        assert_eq!(list.files(), &[b, a, c]);
    }

    #[test]
    fn move_one_is_noop_at_the_edges() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.jpg");
        let b = touch(temp.path(), "b.jpg");

        let mut list = FileCollection::new();
        list.add([a.clone(), b.clone()]);
        assert_eq!(list.move_one(0, -1), None);
        assert_eq!(list.move_one(1, 1), None);
        assert_eq!(list.files(), &[a, b]);
    }

    #[test]
    fn clear_empties_the_list() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.jpg");

        let mut list = FileCollection::new();
        list.add([a]);
        list.clear();
        assert!(list.is_empty());
    }
}
