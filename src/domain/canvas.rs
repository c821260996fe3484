//! アイコンを描画するキャンバス。
//!
//! `image::RgbImage` を所有し、楕円の塗りつぶしと輪郭線の描画を提供します。

use image::{Rgb, RgbImage};

/// 白 (背景色)
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
/// 黒 (輪郭線とラベルの色)
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// キャンバスの寸法と背景色。アルファチャンネルは持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
}

impl CanvasSpec {
    /// 64×64、白背景の固定仕様。
    pub const ICON: CanvasSpec = CanvasSpec {
        width: 64,
        height: 64,
        background: WHITE,
    };
}

/// 楕円の外接矩形 `[x0, y0, x1, y1]`。右端・下端も含む。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    /// キャンバス全体を覆う矩形。`[0, 0, width, height]`
    pub fn covering(spec: &CanvasSpec) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: spec.width as f32,
            y1: spec.height as f32,
        }
    }

    fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    fn radii(&self) -> (f32, f32) {
        ((self.x1 - self.x0) / 2.0, (self.y1 - self.y0) / 2.0)
    }
}

/// 1リクエスト分のピクセルバッファ。
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// 背景色で塗りつぶした新しいキャンバスを確保します。
    pub fn new(spec: &CanvasSpec) -> Self {
        Self {
            image: RgbImage::from_pixel(spec.width, spec.height, spec.background),
        }
    }

    /// 楕円を `fill` で塗りつぶし、幅1ピクセルの `outline` で縁取ります。
    ///
    /// キャンバスからはみ出した部分は切り捨てられます。
    pub fn draw_ellipse(&mut self, bbox: BoundingBox, fill: Rgb<u8>, outline: Rgb<u8>) {
        // 外接矩形から中心と半径を求める
        let (cx, cy) = bbox.center();
        let (rx, ry) = bbox.radii();
        // 幅または高さが0の楕円は何も描かない
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        // キャンバス上の全画素を走査し、楕円の内側だけを塗る
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            // 中心からの相対座標
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            // 楕円の外側 (四隅など) は背景色のまま
            if !inside(dx, dy, rx, ry) {
                continue;
            }
            // 内側の楕円 (半径 -1) に入らない画素が輪郭線
            *pixel = if inside(dx, dy, rx - 1.0, ry - 1.0) {
                fill
            } else {
                outline
            };
        }
    }

    /// 範囲外の座標は無視して1画素を書き込みます。
    pub fn put_pixel_clipped(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    /// `coverage` (0.0〜1.0) の割合で `color` を既存の画素に重ねます。
    pub fn blend_pixel_clipped(&mut self, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        if let Some(pixel) = self.pixel_mut(x, y) {
            // チャンネルごとに線形補間する
            for (dst, src) in pixel.0.iter_mut().zip(color.0) {
                let mixed = *dst as f32 * (1.0 - coverage) + src as f32 * coverage;
                *dst = mixed.round() as u8;
            }
        }
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut Rgb<u8>> {
        // 負の座標や幅・高さ以上の座標は範囲外
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return None;
        }
        Some(self.image.get_pixel_mut(x as u32, y as u32))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

// 楕円の方程式 (dx/rx)^2 + (dy/ry)^2 <= 1 で内外を判定する
fn inside(dx: f32, dy: f32, rx: f32, ry: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_with_circle(fill: Rgb<u8>) -> Canvas {
        let spec = CanvasSpec::ICON;
        let mut canvas = Canvas::new(&spec);
        canvas.draw_ellipse(BoundingBox::covering(&spec), fill, BLACK);
        canvas
    }

    #[test]
    fn new_canvas_is_white_and_fixed_size() {
        let canvas = Canvas::new(&CanvasSpec::ICON);
        assert_eq!(canvas.image().dimensions(), (64, 64));
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn ellipse_fills_center_and_leaves_corners() {
        let green = Rgb([0, 255, 0]);
        let canvas = icon_with_circle(green);
        let img = canvas.image();

        assert_eq!(*img.get_pixel(32, 32), green);
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(*img.get_pixel(x, y), WHITE, "corner ({}, {})", x, y);
        }
    }

    #[test]
    fn ellipse_has_black_outline_on_left_and_top_edge() {
        let canvas = icon_with_circle(Rgb([255, 0, 0]));
        let img = canvas.image();
        assert_eq!(*img.get_pixel(0, 32), BLACK);
        assert_eq!(*img.get_pixel(32, 0), BLACK);
        // 輪郭のすぐ内側は塗りつぶし色
        assert_eq!(*img.get_pixel(2, 32), Rgb([255, 0, 0]));
    }

    #[test]
    fn degenerate_box_draws_nothing() {
        let spec = CanvasSpec::ICON;
        let mut canvas = Canvas::new(&spec);
        let bbox = BoundingBox {
            x0: 10.0,
            y0: 10.0,
            x1: 10.0,
            y1: 40.0,
        };
        canvas.draw_ellipse(bbox, Rgb([0, 0, 255]), BLACK);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn clipped_writes_ignore_out_of_range() {
        let mut canvas = Canvas::new(&CanvasSpec::ICON);
        canvas.put_pixel_clipped(-1, 5, BLACK);
        canvas.put_pixel_clipped(64, 5, BLACK);
        canvas.blend_pixel_clipped(5, 64, BLACK, 1.0);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));

        canvas.put_pixel_clipped(3, 4, BLACK);
        assert_eq!(*canvas.image().get_pixel(3, 4), BLACK);
    }

    #[test]
    fn blend_mixes_by_coverage() {
        let mut canvas = Canvas::new(&CanvasSpec::ICON);
        canvas.blend_pixel_clipped(1, 1, BLACK, 0.5);
        assert_eq!(*canvas.image().get_pixel(1, 1), Rgb([128, 128, 128]));
        canvas.blend_pixel_clipped(2, 2, BLACK, 2.0);
        assert_eq!(*canvas.image().get_pixel(2, 2), BLACK);
    }
}
