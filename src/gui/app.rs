//! メインアプリケーションウィンドウ

use crate::collection::FileCollection;
use crate::dnd::parse_drop_payload;
use crate::export::{run_export, ExportError, ExportReport, ExportSettings, DEFAULT_PREFIX};
use crate::paths::IMAGE_EXTS;
use anyhow::Result;
use chrono::Local;
use eframe::egui;
use egui::{CentralPanel, RichText, Vec2};
use std::path::PathBuf;

use super::theme::{dark_theme, Colors};

/// アプリケーション状態
pub struct PartImageRenamerApp {
    /// エクスポート順の画像リスト
    files: FileCollection,
    /// リスト上の選択位置
    selected: Option<usize>,
    /// 品番入力
    part_number: String,
    /// プレフィックス入力
    prefix: String,
    /// 連番の開始値
    start_index: u32,
    /// ゼロ埋め桁数（0 = 埋めない）
    pad_width: u32,
    /// 出力フォルダ
    output_dir: Option<PathBuf>,
    /// プレビューのみ（コピーしない）
    preview_only: bool,
    /// 操作ログ（セッション中のみ保持）
    log_lines: Vec<String>,
    /// ステータスバーの表示
    status: String,
}

impl Default for PartImageRenamerApp {
    fn default() -> Self {
        Self {
            files: FileCollection::new(),
            selected: None,
            part_number: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            start_index: 1,
            pad_width: 0,
            output_dir: None,
            preview_only: false,
            log_lines: Vec::new(),
            status: "画像をドロップして開始".to_string(),
        }
    }
}

impl PartImageRenamerApp {
    /// 操作ログに1行追記
    fn push_log(&mut self, msg: impl Into<String>) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), msg.into());
        self.log_lines.push(line);
    }

    /// 候補パスをリストに追加
    ///
    /// 対象外・重複は件数にだけ反映される（個別には報告しない）。
    fn add_files(&mut self, paths: Vec<PathBuf>) {
        let added = self.files.add(paths);
        if added > 0 {
            tracing::info!("{added} 件の画像を追加");
            self.push_log(format!("{added} 件の画像を追加しました"));
            self.status = format!("リスト: {} 件", self.files.len());
        } else {
            self.push_log("追加できる画像はありませんでした");
        }
    }

    /// ファイル選択ダイアログから追加
    fn add_files_dialog(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("画像ファイル", &IMAGE_EXTS)
            .add_filter("すべてのファイル", &["*"])
            .pick_files()
        {
            self.add_files(paths);
        }
    }

    /// 選択中のエントリを削除
    fn remove_selected(&mut self) {
        let Some(index) = self.selected else { return };
        if self.files.remove_at(&[index]) > 0 {
            self.push_log("選択した画像を削除しました");
            self.status = format!("リスト: {} 件", self.files.len());
        }
        self.selected = if self.files.is_empty() {
            None
        } else {
            Some(index.min(self.files.len() - 1))
        };
    }

    /// リストを空にする
    fn clear_list(&mut self) {
        self.files.clear();
        self.selected = None;
        self.push_log("リストをクリアしました");
        self.status = "リスト: 0 件".to_string();
    }

    /// ファイル名順（大文字小文字を無視）に並べ替え
    fn sort_by_name(&mut self) {
        self.files.sort_by_file_name();
        self.selected = None;
        self.push_log("ファイル名順に並べ替えました");
    }

    /// 選択中のエントリを上下に移動（direction は -1 か +1）
    fn move_selected(&mut self, direction: i32) {
        let Some(index) = self.selected else { return };
        if let Some(new_index) = self.files.move_one(index, direction) {
            self.selected = Some(new_index);
            let label = if direction < 0 { "上" } else { "下" };
            self.push_log(format!("1件を{label}へ移動しました"));
        }
    }

    /// 出力フォルダを選択
    fn choose_output_dir(&mut self) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            self.push_log(format!("出力フォルダ: {}", dir.display()));
            self.output_dir = Some(dir);
        }
    }

    /// エクスポートを実行（プレビューまたは実コピー）
    fn generate(&mut self) {
        let settings = ExportSettings {
            part_number: self.part_number.trim().to_string(),
            prefix: self.prefix.clone(),
            start_index: self.start_index,
            pad_width: self.pad_width,
            output_dir: self.output_dir.clone(),
            preview_only: self.preview_only,
        };

        match run_export(self.files.files(), &settings) {
            Ok(report) => self.log_report(&report),
            Err(e) => {
                // バリデーションエラーは修正されるまで実行しない
                let title = match e {
                    ExportError::InvalidPartNumber => "品番が不正です",
                    ExportError::EmptyCollection => "画像がありません",
                    ExportError::MissingOutputDir => "出力フォルダ未選択",
                };
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title(title)
                    .set_description(e.to_string())
                    .show();
            }
        }
    }

    /// 実行結果を操作ログに反映
    fn log_report(&mut self, report: &ExportReport) {
        for item in &report.results {
            if report.preview {
                if let Some(name) = &item.new_name {
                    self.push_log(format!("プレビュー: {} → {}", item.original, name));
                }
            } else if item.success {
                if let Some(name) = &item.new_name {
                    self.push_log(format!("保存: {} → {}", item.original, name));
                }
            } else {
                let reason = item.error.as_deref().unwrap_or("不明なエラー");
                self.push_log(format!("エラー: {}: {}", item.original, reason));
            }
        }

        let summary = if report.preview {
            "プレビュー完了（ファイルは書き込まれていません）".to_string()
        } else {
            format!("完了: {} 件出力しました", report.exported)
        };
        tracing::info!("{summary}");
        self.push_log(summary.clone());
        self.status = summary;
    }

    /// ドロップとペーストの入力を処理
    fn handle_input(&mut self, ctx: &egui::Context) {
        // ドロップされたファイル
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.add_files(dropped);
        }

        // ペーストされたパス文字列（スペースを含むパスは { } 囲み）
        let pasted: Vec<String> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Paste(text) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        });
        for text in pasted {
            let paths: Vec<PathBuf> = parse_drop_payload(&text)
                .into_iter()
                .map(PathBuf::from)
                .collect();
            if !paths.is_empty() {
                self.add_files(paths);
            }
        }
    }
}

impl eframe::App for PartImageRenamerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing = Vec2::new(8.0, 10.0);

            // ヘッダー
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new("品番画像リネーマー")
                        .size(26.0)
                        .color(Colors::TEXT_PRIMARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(self.output_dir.is_some(), egui::Button::new("📁 出力フォルダを開く"))
                        .clicked()
                    {
                        if let Some(ref dir) = self.output_dir {
                            let _ = open::that(dir);
                        }
                    }
                });
            });

            ui.label(
                RichText::new("画像をドロップ → 品番を入力 → 連番リネームコピーを出力")
                    .size(13.0)
                    .color(Colors::TEXT_SECONDARY),
            );

            ui.add_space(4.0);

            // ドロップゾーン
            let is_hovering = !ui.ctx().input(|i| i.raw.hovered_files.is_empty());

            let frame_color = if is_hovering { Colors::ACCENT } else { Colors::BORDER };
            let bg_color = if is_hovering { Colors::BG_HOVER } else { Colors::BG_CARD };

            let drop_zone = egui::Frame::new()
                .fill(bg_color)
                .stroke(egui::Stroke::new(2.0, frame_color))
                .corner_radius(12.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::new(ui.available_width(), 72.0));
                    ui.vertical_centered(|ui| {
                        let icon = if is_hovering { "📥" } else { "🖼" };
                        ui.label(RichText::new(icon).size(32.0));
                        ui.label(
                            RichText::new("画像ファイルをここにドロップ（クリックで選択）")
                                .size(14.0)
                                .color(Colors::TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new("対応形式: JPG / JPEG / PNG / WEBP / BMP / TIF / TIFF / HEIC")
                                .size(11.0)
                                .color(Colors::TEXT_SECONDARY),
                        );
                    });
                });

            if drop_zone
                .response
                .interact(egui::Sense::click())
                .clicked()
            {
                self.add_files_dialog();
            }

            // ファイルリスト（並び順 = 連番順）
            egui::ScrollArea::vertical()
                .id_salt("file_list")
                .max_height(170.0)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (i, path) in self.files.files().iter().enumerate() {
                        let selected = self.selected == Some(i);
                        let label = format!("{:>3}. {}", i + 1, path.display());
                        if ui.selectable_label(selected, label).clicked() {
                            self.selected = Some(i);
                        }
                    }
                });

            // リスト操作
            ui.horizontal(|ui| {
                if ui.button("画像を追加…").clicked() {
                    self.add_files_dialog();
                }
                if ui
                    .add_enabled(self.selected.is_some(), egui::Button::new("選択を削除"))
                    .clicked()
                {
                    self.remove_selected();
                }
                if ui.button("クリア").clicked() {
                    self.clear_list();
                }
                if ui.button("名前順に並べ替え").clicked() {
                    self.sort_by_name();
                }
                if ui
                    .add_enabled(self.selected.is_some(), egui::Button::new("▲ 上へ"))
                    .clicked()
                {
                    self.move_selected(-1);
                }
                if ui
                    .add_enabled(self.selected.is_some(), egui::Button::new("▼ 下へ"))
                    .clicked()
                {
                    self.move_selected(1);
                }
            });

            ui.separator();

            // エクスポート設定
            ui.horizontal(|ui| {
                ui.label("品番:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.part_number)
                        .desired_width(120.0)
                        .hint_text("例: 1234"),
                );

                ui.label("プレフィックス:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.prefix)
                        .desired_width(140.0)
                        .hint_text(DEFAULT_PREFIX),
                );
            });

            ui.horizontal(|ui| {
                ui.label("開始番号:");
                ui.add(egui::DragValue::new(&mut self.start_index).range(1..=9999));

                ui.label("ゼロ埋め桁数:");
                ui.add(egui::DragValue::new(&mut self.pad_width).range(0..=6));

                ui.checkbox(&mut self.preview_only, "プレビューのみ（コピーしない）");
            });

            ui.horizontal(|ui| {
                ui.label("出力フォルダ:");
                let shown = self
                    .output_dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "未選択".to_string());
                ui.label(RichText::new(shown).color(Colors::TEXT_SECONDARY));
                if ui.button("参照…").clicked() {
                    self.choose_output_dir();
                }
            });

            if ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(RichText::new("出力実行").size(15.0)),
                )
                .clicked()
            {
                self.generate();
            }

            // 操作ログ
            ui.label(
                RichText::new("操作ログ")
                    .size(14.0)
                    .color(Colors::TEXT_PRIMARY),
            );
            egui::Frame::new()
                .fill(Colors::BG_CARD)
                .corner_radius(8.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("activity_log")
                        .stick_to_bottom(true)
                        .auto_shrink([false, false])
                        .max_height((ui.available_height() - 40.0).max(60.0))
                        .show(ui, |ui| {
                            for line in &self.log_lines {
                                let color = if line.contains("エラー:") {
                                    Colors::ERROR
                                } else if line.contains("保存:") {
                                    Colors::SUCCESS
                                } else {
                                    Colors::TEXT_SECONDARY
                                };
                                ui.label(RichText::new(line).size(12.0).color(color));
                            }
                        });
                });

            // ステータスバー
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                egui::Frame::new()
                    .fill(Colors::BG_CARD)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&self.status)
                                .size(12.0)
                                .color(Colors::TEXT_SECONDARY),
                        );
                    });
            });
        });
    }
}

/// アプリケーションを起動
pub fn run() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 860.0])
            .with_min_inner_size([640.0, 720.0])
            .with_title("品番画像リネーマー")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "品番画像リネーマー",
        options,
        Box::new(|cc| {
            // ダークテーマを設定
            cc.egui_ctx.set_style(dark_theme());

            // 日本語フォントを設定
            let mut fonts = egui::FontDefinitions::default();

            #[cfg(windows)]
            {
                if let Ok(font_data) = std::fs::read("C:\\Windows\\Fonts\\YuGothM.ttc") {
                    fonts.font_data.insert(
                        "yu_gothic".to_owned(),
                        egui::FontData::from_owned(font_data).into(),
                    );

                    fonts
                        .families
                        .entry(egui::FontFamily::Proportional)
                        .or_default()
                        .insert(0, "yu_gothic".to_owned());

                    fonts
                        .families
                        .entry(egui::FontFamily::Monospace)
                        .or_default()
                        .push("yu_gothic".to_owned());
                }
            }

            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(PartImageRenamerApp::default()))
        }),
    )
    .map_err(|e| anyhow::anyhow!("アプリケーションエラー: {}", e))
}
