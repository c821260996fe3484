use std::fmt;

// 出力先パスに関するエラー
#[derive(Debug)]
pub enum PathError {
    NotFound(String),
    NotADirectory(String),
    IoError(std::io::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotFound(s) => write!(f, "パス '{}' は存在しません。", s),
            PathError::NotADirectory(s) => write!(f, "パス '{}' はディレクトリではありません。", s),
            PathError::IoError(e) => write!(f, "I/Oエラー: {}", e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
