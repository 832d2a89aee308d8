//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `input`: XYZ 输入文件
//! - `output`: POSCAR 输出文件
//!
//! 参数个数不对时由 `clap` 打印用法并退出，不会触碰任何文件。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Parser;
use std::path::PathBuf;

/// xyz2poscar - XYZ 分子坐标转 VASP POSCAR
#[derive(Parser, Debug)]
#[command(name = "xyz2poscar")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Convert an XYZ molecule into a POSCAR cubic cell centered on the molecule",
    long_about = None
)]
pub struct Cli {
    /// Input XYZ file
    pub input: PathBuf,

    /// Output POSCAR file (created or overwritten)
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["xyz2poscar", "in.xyz", "POSCAR"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.xyz"));
        assert_eq!(cli.output, PathBuf::from("POSCAR"));
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        assert!(Cli::try_parse_from(["xyz2poscar"]).is_err());
        assert!(Cli::try_parse_from(["xyz2poscar", "in.xyz"]).is_err());
        assert!(Cli::try_parse_from(["xyz2poscar", "a", "b", "c"]).is_err());
    }
}
