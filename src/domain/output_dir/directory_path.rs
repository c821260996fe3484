use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};

/// アイコンの書き出し先として検証済みのディレクトリ。
///
/// 出力先ディレクトリは自動作成しない。存在しない場合は、画像を1枚も
/// 生成する前にエラーとする。
#[derive(Debug)]
pub struct DirectoryPath {
    path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスが存在し、かつディレクトリであることを検証する
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // シンボリックリンク切れなどもここで弾かれる
        let metadata = match path.metadata() {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PathError::NotFound(path.display().to_string()));
            }
            Err(e) => return Err(PathError::IoError(e)),
        };
        if !metadata.is_dir() {
            return Err(PathError::NotADirectory(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// ディレクトリ直下のファイルパスを組み立てる。
    pub fn join<P: AsRef<Path>>(&self, file_name: P) -> PathBuf {
        self.path.join(file_name)
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
