//! # XYZ 格式解析器
//!
//! 逐行读取 XYZ 分子坐标文件，只读取第一帧。
//!
//! ## XYZ 格式说明
//! ```text
//! N                      # atom count
//! Comment line           # copied into POSCAR line 1
//! El x y z               # N atom lines, extra columns ignored
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/convert.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{ConvertError, Result};
use crate::models::{Atom, Molecule};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// 解析 XYZ 文件
pub fn parse_xyz_file(path: &Path) -> Result<Molecule> {
    let not_found = |e: io::Error| ConvertError::FileNotFound {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::open(path).map_err(not_found)?;
    // 目录在 Unix 上可以打开但不可读
    if file.metadata().map_err(not_found)?.is_dir() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::Other,
            "is a directory",
        )));
    }

    parse_xyz_reader(BufReader::new(file), &path.display().to_string())
}

/// 从任意 `BufRead` 流式解析 XYZ 格式
pub fn parse_xyz_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Molecule> {
    let malformed = |line: usize, reason: String| ConvertError::MalformedInput {
        path: source_name.to_string(),
        line,
        reason,
    };

    let mut lines = reader.lines();
    let mut read_line = |line_no: usize| -> Result<Option<String>> {
        match lines.next() {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(e)) => Err(malformed(line_no, format!("Unreadable line: {}", e))),
            None => Ok(None),
        }
    };

    // Line 1: atom count
    let header = read_line(1)?.ok_or_else(|| malformed(1, "Empty file".to_string()))?;
    let declared_count: usize = header
        .trim()
        .parse()
        .map_err(|_| malformed(1, format!("Invalid atom count '{}'", header.trim())))?;
    if declared_count == 0 {
        return Err(malformed(1, "Atom count must be positive".to_string()));
    }

    // Line 2: comment
    let comment =
        read_line(2)?.ok_or_else(|| malformed(2, "Missing comment line".to_string()))?;
    let mut molecule = Molecule::new(comment, declared_count);

    // Atom lines, first frame only
    for i in 0..declared_count {
        let line_no = i + 3;
        let line = read_line(line_no)?.ok_or_else(|| {
            malformed(
                line_no,
                format!("Header declares {} atoms but found {}", declared_count, i),
            )
        })?;
        molecule.add_atom(parse_atom_line(&line).map_err(|r| malformed(line_no, r))?);
    }

    // 之后只允许空行或下一帧的原子数行
    let next_no = declared_count + 3;
    if let Some(line) = read_line(next_no)? {
        let trimmed = line.trim();
        if !trimmed.is_empty() && trimmed.parse::<usize>().is_err() {
            return Err(malformed(
                next_no,
                format!(
                    "Header declares {} atoms but more atom lines follow",
                    declared_count
                ),
            ));
        }
    }

    Ok(molecule)
}

/// 解析一行原子记录: `El x y z [...]`
fn parse_atom_line(line: &str) -> std::result::Result<Atom, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(format!("Expected 'element x y z', got '{}'", line.trim()));
    }

    let mut position = [0.0; 3];
    for (axis, (slot, token)) in position.iter_mut().zip(&parts[1..4]).enumerate() {
        *slot = token
            .parse()
            .map_err(|_| format!("Invalid {} coordinate: {}", ["x", "y", "z"][axis], token))?;
    }

    Ok(Atom::new(parts[0], position))
}
