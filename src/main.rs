//! 品番画像リネーマー - メインエントリポイント

use anyhow::Result;

fn main() -> Result<()> {
    // ロギング初期化
    tracing_subscriber::fmt::init();

    // GUIアプリケーション起動
    if let Err(e) = part_image_renamer::gui::run() {
        // 最低限のダイアログを出してから終了
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("致命的なエラー")
            .set_description(e.to_string())
            .show();
        return Err(e);
    }

    Ok(())
}
