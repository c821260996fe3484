//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! UI層（`cli`）とドメイン層（`domain`）を仲介し、アイコン生成の処理フローを実装します。

use crate::cli::Args;
use cell_icons::domain::icon_image::IconImage;
use cell_icons::domain::icon_request::{default_requests, IconRequest};
use cell_icons::domain::label_font::LabelFont;
use cell_icons::domain::output_dir::directory_path::DirectoryPath;
use cell_icons::error::AppError;

/// すべて成功したときに表示するメッセージ
pub const SUCCESS_MESSAGE: &str = "Images created successfully.";

/// アプリケーションのメインロジックを実行します。
///
/// # 戻り値
/// * `Ok(())`: 3枚すべてのアイコンを書き出した場合。
/// * `Err(AppError)`: いずれかの処理に失敗した場合。残りのアイコンは生成しません。
pub fn run(args: Args) -> Result<(), AppError> {
    // 出力先は作成せず、存在しなければここで失敗させる
    let output_dir = DirectoryPath::new(&args.output_dir)?;
    // フォント指定がなければ組み込みのビットマップフォントを使う
    let font = LabelFont::new(args.font_path.as_deref())?;

    println!("[アイコン生成開始] 出力先: {}", output_dir);
    // 1枚でも失敗したら `?` で抜け、残りは生成しない
    for request in default_requests() {
        generate(&request, &output_dir, &font)?;
    }

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}

fn generate(
    request: &IconRequest,
    output_dir: &DirectoryPath,
    font: &LabelFont,
) -> Result<(), AppError> {
    let output_path = output_dir.join(&request.path);
    IconImage::create(request, font).save_to_path(&output_path)?;
    println!("  -> 生成しました: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args_for(output_dir: PathBuf) -> Args {
        Args {
            output_dir,
            font_path: None,
        }
    }

    #[test]
    fn run_writes_three_icons() {
        let dir = tempdir().unwrap();
        run(args_for(dir.path().to_path_buf())).unwrap();

        let expected = [
            ("cell.png", Rgb([0u8, 255, 0])),
            ("npc.png", Rgb([255, 0, 0])),
            ("sec.png", Rgb([0, 0, 255])),
        ];
        for (name, fill) in expected {
            let path = dir.path().join(name);
            assert!(fs::metadata(&path).unwrap().len() > 0, "{}", name);

            let img = image::open(&path).unwrap().to_rgb8();
            assert_eq!(img.dimensions(), (64, 64));
            assert_eq!(*img.get_pixel(32, 32), fill, "{}", name);
            assert_ne!(*img.get_pixel(0, 0), fill, "{}", name);
        }
    }

    #[test]
    fn run_twice_overwrites_existing_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("npc.png"), b"stale").unwrap();

        run(args_for(dir.path().to_path_buf())).unwrap();
        run(args_for(dir.path().to_path_buf())).unwrap();

        let img = image::open(dir.path().join("npc.png")).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (64, 64));
    }

    #[test]
    fn missing_output_dir_fails_before_writing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("assets").join("images");

        let err = run(args_for(missing.clone())).unwrap_err();
        assert!(matches!(err, AppError::Path(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn missing_output_dir_reports_not_found() {
        use cell_icons::domain::output_dir::path_error::PathError;

        let dir = tempdir().unwrap();
        let err = run(args_for(dir.path().join("missing"))).unwrap_err();
        match err {
            AppError::Path(PathError::NotFound(msg)) => assert!(msg.contains("missing")),
            other => panic!("予期せぬエラーが返されました: {:?}", other),
        }
    }

    #[test]
    fn invalid_font_fails_without_writing() {
        let dir = tempdir().unwrap();
        let font_path = dir.path().join("broken.ttf");
        fs::write(&font_path, b"not a font").unwrap();

        let args = Args {
            output_dir: dir.path().to_path_buf(),
            font_path: Some(font_path),
        };
        let err = run(args).unwrap_err();
        assert!(matches!(err, AppError::Font(_)));
        assert!(!dir.path().join("cell.png").exists());
    }

    #[test]
    fn first_failure_stops_remaining_icons() {
        let dir = tempdir().unwrap();
        // cell.png の位置にディレクトリがあると書き込みに失敗する
        fs::create_dir(dir.path().join("cell.png")).unwrap();

        let err = run(args_for(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, AppError::Icon(_)));
        assert!(!dir.path().join("npc.png").exists());
        assert!(!dir.path().join("sec.png").exists());
    }

    #[test]
    fn args_default_to_current_directory() {
        use clap::Parser;
        let args = Args::try_parse_from(["cell_icons"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.font_path.is_none());

        let args = Args::try_parse_from(["cell_icons", "-o", "assets/images", "--font-path", "a.ttf"])
            .unwrap();
        assert_eq!(args.output_dir, PathBuf::from("assets/images"));
        assert_eq!(args.font_path, Some(PathBuf::from("a.ttf")));
    }
}
