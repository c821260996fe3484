//! アイコン1枚分の生成と保存。
//!
//! キャンバス確保 → 円の描画 → ラベルの描画 → 保存、の順に処理します。

use crate::domain::canvas::{BoundingBox, Canvas, CanvasSpec, BLACK};
use crate::domain::icon_request::IconRequest;
use crate::domain::label_font::LabelFont;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// ラベルの左上座標
pub const LABEL_ORIGIN: (i64, i64) = (20, 20);

#[derive(Debug, Error)]
pub enum IconError {
    /// 書き込み失敗 (パス・権限) や、拡張子から形式を判定できない場合
    #[error("画像 {} を保存できません", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// 描画済みのアイコン画像。
#[derive(Debug, Clone)]
pub struct IconImage {
    image: RgbImage,
}

impl IconImage {
    /// リクエストの色とラベルでアイコンを描画します。保存はしません。
    pub fn create(request: &IconRequest, font: &LabelFont) -> Self {
        Self::draw(request.fill, &request.label, font)
    }

    fn draw(fill: Rgb<u8>, label: &str, font: &LabelFont) -> Self {
        let spec = CanvasSpec::ICON;
        let mut canvas = Canvas::new(&spec);
        canvas.draw_ellipse(BoundingBox::covering(&spec), fill, BLACK);
        font.draw_text(&mut canvas, LABEL_ORIGIN, label, BLACK);
        Self {
            image: canvas.into_image(),
        }
    }

    /// 画像を `path` に書き出します。既存ファイルは警告なしに上書きされます。
    ///
    /// エンコード形式は拡張子から決まります。
    pub fn save_to_path(&self, path: &Path) -> Result<(), IconError> {
        self.image.save(path).map_err(|source| IconError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// アイコンを描画して `path` に保存します。
pub fn create_cell_image(
    path: &Path,
    color: Rgb<u8>,
    text: &str,
    font: &LabelFont,
) -> Result<(), IconError> {
    IconImage::draw(color, text, font).save_to_path(path)
}
