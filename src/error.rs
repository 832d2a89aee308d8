//! # 统一错误处理模块
//!
//! 定义 xyz2poscar 的所有错误类型，使用 `thiserror` 派生。
//! 每个变体对应一种对外报告的失败类别，见 [`ErrorKind`]。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 失败类别
///
/// 参数个数错误由 `clap` 在进入转换前处理，不出现在这里。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入文件不存在或无法打开
    NotFound,
    /// XYZ 内容格式错误
    MalformedInput,
    /// 输出文件无法创建或写入
    IoFailure,
}

/// 转换错误类型
#[derive(Error, Debug)]
pub enum ConvertError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed xyz file: {path} (line {line}: {reason})")]
    MalformedInput {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// 错误所属类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::FileNotFound { .. } => ErrorKind::NotFound,
            ConvertError::MalformedInput { .. } => ErrorKind::MalformedInput,
            ConvertError::FileWriteError { .. } => ErrorKind::IoFailure,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ConvertError>;
