use clap::Parser;
use std::path::PathBuf;

/// セル・NPC・セクターのプレースホルダーアイコンを生成します
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// アイコンの出力先フォルダ (存在している必要があります)
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// ラベルに使うTTF/OTFフォントファイルのパス (オプション: デフォルトは組み込みビットマップフォント)
    #[arg(short, long)]
    pub font_path: Option<PathBuf>,
}
