//! # 美化输出工具
//!
//! 提供统一的终端输出样式，每次运行只输出一行状态。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::error::{ConvertError, ErrorKind};
use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印转换成功消息
pub fn print_conversion(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}

/// 失败类别对应的单行消息
pub fn failure_message(err: &ConvertError) -> String {
    let category = match err.kind() {
        ErrorKind::NotFound => "file not found",
        ErrorKind::MalformedInput => "check xyz file format",
        ErrorKind::IoFailure => "cannot write output",
    };

    match err {
        ConvertError::FileNotFound { path, .. } => format!("Error: {}: {}", category, path),
        ConvertError::MalformedInput { path, line, reason } => {
            format!("Error: {}: {} (line {}: {})", category, path, line, reason)
        }
        ConvertError::FileWriteError { path, source } => {
            format!("Error: {}: {}: {}", category, path, source)
        }
    }
}

/// 打印失败消息
pub fn print_failure(err: &ConvertError) {
    print_error(&failure_message(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_per_category() {
        let not_found = ConvertError::FileNotFound {
            path: "a.xyz".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(failure_message(&not_found), "Error: file not found: a.xyz");

        let malformed = ConvertError::MalformedInput {
            path: "a.xyz".to_string(),
            line: 4,
            reason: "Invalid x coordinate: q".to_string(),
        };
        assert_eq!(
            failure_message(&malformed),
            "Error: check xyz file format: a.xyz (line 4: Invalid x coordinate: q)"
        );

        let write = ConvertError::FileWriteError {
            path: "out/POSCAR".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(failure_message(&write).starts_with("Error: cannot write output: out/POSCAR: "));
    }
}
