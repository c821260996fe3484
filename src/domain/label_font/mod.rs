//! ラベル文字列の描画に使うフォント。
//!
//! 既定では組み込みの 5×7 ビットマップフォントを使い、フォントファイルが
//! 指定された場合は `rusttype` で TrueType/OpenType フォントを描画します。

pub mod bitmap;

use crate::domain::canvas::Canvas;
use image::Rgb;
use rusttype::{point, Font, Scale};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// TrueType フォントで描画するときの文字サイズ (ピクセル)
pub const TRUETYPE_PX: f32 = 11.0;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("フォントファイル {} を読み込めません", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("フォントファイル {} は有効なフォントではありません", .0.display())]
    Invalid(PathBuf),
}

/// ラベル描画用のフォント。
#[derive(Clone)]
pub enum LabelFont {
    /// 組み込みビットマップフォント
    Bitmap,
    /// ファイルから読み込んだアウトラインフォント
    TrueType(Font<'static>),
}

impl LabelFont {
    /// フォントを準備します。
    ///
    /// * `font_path`: `Some(path)` ならそのファイルを読み込み、`None` なら組み込みフォントを使います。
    pub fn new(font_path: Option<&Path>) -> Result<Self, FontError> {
        match font_path {
            Some(path) => Self::from_file(path),
            None => Ok(LabelFont::Bitmap),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        // ファイル全体をバイト列として読み込む
        let bytes = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // 解析できないデータは無効なフォントとして扱う
        Self::from_bytes(bytes).ok_or_else(|| FontError::Invalid(path.to_path_buf()))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(bytes).map(LabelFont::TrueType)
    }

    /// `(x, y)` を左上として `text` を描画します。キャンバス外は切り捨てます。
    pub fn draw_text(&self, canvas: &mut Canvas, origin: (i64, i64), text: &str, color: Rgb<u8>) {
        match self {
            LabelFont::Bitmap => draw_bitmap_text(canvas, origin, text, color),
            LabelFont::TrueType(font) => draw_truetype_text(font, canvas, origin, text, color),
        }
    }
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFont::Bitmap => write!(f, "LabelFont::Bitmap"),
            LabelFont::TrueType(_) => write!(f, "LabelFont::TrueType"),
        }
    }
}

fn draw_bitmap_text(canvas: &mut Canvas, (x, y): (i64, i64), text: &str, color: Rgb<u8>) {
    // 1文字ずつ送り幅ぶん右へずらして描く
    for (i, ch) in text.chars().enumerate() {
        // 未収録の文字は四角形で代用する
        let glyph = bitmap::glyph(ch).unwrap_or(bitmap::MISSING_GLYPH);
        let left = x + (i as i64) * bitmap::ADVANCE as i64;
        // 点灯している画素だけを書き込む (キャンバス外は切り捨て)
        for (col, row) in bitmap::lit_pixels(&glyph) {
            canvas.put_pixel_clipped(left + col as i64, y + row as i64, color);
        }
    }
}

fn draw_truetype_text(
    font: &Font<'static>,
    canvas: &mut Canvas,
    (x, y): (i64, i64),
    text: &str,
    color: Rgb<u8>,
) {
    let scale = Scale::uniform(TRUETYPE_PX);
    let v_metrics = font.v_metrics(scale);
    // layout はベースライン基準なので、アセント分下げて上端を y に合わせる
    let start = point(x as f32, y as f32 + v_metrics.ascent);

    for glyph in font.layout(text, scale, start) {
        // 空白など外形を持たないグリフは境界矩形がない
        if let Some(bb) = glyph.pixel_bounding_box() {
            // gx, gy は境界矩形内の相対座標、coverage は画素の被覆率
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x as i64 + gx as i64;
                let py = bb.min.y as i64 + gy as i64;
                canvas.blend_pixel_clipped(px, py, color, coverage);
            });
        }
    }
}
