use image::Rgb;
use std::path::PathBuf;

/// 1枚のアイコン生成依頼。生成時に一度だけ消費される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// 出力ファイル名。拡張子でエンコード形式が決まる。
    pub path: PathBuf,
    /// 円の塗りつぶし色
    pub fill: Rgb<u8>,
    /// 円の上に描くラベル (通常は1文字)
    pub label: String,
}

impl IconRequest {
    pub fn new(path: impl Into<PathBuf>, fill: Rgb<u8>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fill,
            label: label.into(),
        }
    }
}

/// 既定で生成する3種類のアイコン (セル / NPC / セクター)。この順に生成する。
pub fn default_requests() -> Vec<IconRequest> {
    vec![
        IconRequest::new("cell.png", Rgb([0, 255, 0]), "C"),
        IconRequest::new("npc.png", Rgb([255, 0, 0]), "N"),
        IconRequest::new("sec.png", Rgb([0, 0, 255]), "S"),
    ]
}
