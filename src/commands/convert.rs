//! # convert 命令实现
//!
//! 将单个 XYZ 文件转换为 POSCAR。
//!
//! ## 功能
//! - 读取 XYZ 第一帧
//! - 按元素首次出现顺序分组
//! - 平移几何中心到立方晶胞中心
//! - 写出 Cartesian 坐标 POSCAR
//!
//! 输入完整解析成功后才创建输出文件，解析失败不会触碰输出路径。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::Cli;
use crate::error::{ConvertError, Result};
use crate::models::{Lattice, CELL_EDGE};
use crate::parsers::poscar::to_poscar_string;
use crate::parsers::xyz::parse_xyz_file;
use crate::utils::output;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 一次转换的结果摘要
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub atoms: usize,
    pub species: usize,
    pub formula: String,
    pub shift: [f64; 3],
}

/// 执行 convert 命令
pub fn execute(args: Cli) -> Result<()> {
    let summary = convert(&args.input, &args.output)?;

    output::print_conversion(
        &args.input.display().to_string(),
        &describe_output(&args.output, &summary),
    );

    Ok(())
}

/// 成功状态行中箭头右侧的描述
fn describe_output(output: &Path, summary: &ConversionSummary) -> String {
    format!(
        "{} ({}, {} atoms in {} species, shift {:.3} {:.3} {:.3})",
        output.display(),
        summary.formula,
        summary.atoms,
        summary.species,
        summary.shift[0],
        summary.shift[1],
        summary.shift[2]
    )
}

/// 转换 XYZ 文件为 POSCAR 文件
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let molecule = parse_xyz_file(input)?;
    let lattice = Lattice::cubic(CELL_EDGE);

    let write_err = |e: std::io::Error| ConvertError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    };

    let content = to_poscar_string(&molecule, &lattice);
    let mut file = File::create(output).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(ConversionSummary {
        atoms: molecule.groups.atom_count(),
        species: molecule.groups.species_count(),
        formula: molecule.formula(),
        shift: molecule.centering_shift(&lattice),
    })
}
