//! # xyz2poscar - XYZ 分子坐标转 VASP POSCAR
//!
//! 读取 XYZ 文件第一帧，把分子放进 40 Å 立方晶胞中心，
//! 输出 Cartesian 坐标的 POSCAR。
//!
//! ## 用法
//! ```text
//! xyz2poscar <xyz> <poscar>
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (XYZ 解析 / POSCAR 输出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_failure(&e);
        std::process::exit(1);
    }
}
