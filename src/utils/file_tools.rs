//! 文件工具模块
//!
//! 文件 sink 使用的文件操作：确保日志文件存在、以追加模式写入整行。

use crate::error::{KnightLogError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// 文件工具结构体
///
/// 提供各种文件操作的静态方法
pub struct FileTools;

impl FileTools {
    /// 确保目录存在，如果不存在则创建
    ///
    /// # 参数
    ///
    /// * `path` - 目录路径
    pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();

        if !path.exists() {
            fs::create_dir_all(path)?;
        } else if !path.is_dir() {
            return Err(KnightLogError::IoError {
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("路径存在但不是目录: {}", path.display()),
                ),
            });
        }

        Ok(())
    }

    /// 确保文件存在：创建缺失的父目录和空文件，已有内容保持不变
    ///
    /// # 参数
    ///
    /// * `file_path` - 文件路径
    pub fn ensure_file_exists<P: AsRef<Path>>(file_path: P) -> Result<()> {
        let file_path = file_path.as_ref();

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_directory_exists(parent)?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        Ok(())
    }

    /// 以追加模式写入数据，文件不存在时创建
    ///
    /// 数据通过一次 `write_all` 写入。
    ///
    /// # 返回值
    ///
    /// 成功时返回写入的字节数
    pub fn append<P: AsRef<Path>>(file_path: P, data: &[u8]) -> Result<usize> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path.as_ref())?;
        file.write_all(data)?;
        file.flush()?;
        Ok(data.len())
    }

    /// 检查文件是否存在
    pub fn file_exists<P: AsRef<Path>>(file_path: P) -> bool {
        file_path.as_ref().exists()
    }
}
