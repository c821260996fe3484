//! ゲーム用のプレースホルダーアイコン (セル / NPC / セクター) を生成するライブラリ。

pub mod domain;
pub mod error;
