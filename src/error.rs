use crate::domain::icon_image::IconError;
use crate::domain::label_font::FontError;
use crate::domain::output_dir::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("出力先パスのエラー")]
    Path(#[from] PathError),

    #[error("フォントの読み込みエラー")]
    Font(#[from] FontError),

    #[error("アイコン生成エラー")]
    Icon(#[from] IconError),
}
