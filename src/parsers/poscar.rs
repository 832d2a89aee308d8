//! # VASP POSCAR 格式输出
//!
//! 将分子写入立方晶胞，笛卡尔坐标，几何中心平移到晶胞中心。
//!
//! ## POSCAR 格式说明
//! ```text
//! Comment line (structure name)
//! 1.0                    # scaling factor
//! a1 a2 a3               # lattice vector a
//! b1 b2 b3               # lattice vector b
//! c1 c2 c3               # lattice vector c
//! Element1 Element2 ...  # element symbols (VASP 5+)
//! n1 n2 ...              # number of atoms per element
//! Cartesian              # coordinate type
//! x1 y1 z1               # atom positions
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `models/structure.rs`

use crate::models::{Lattice, Molecule};
use std::io::{self, Write};

/// 将分子写为 POSCAR
pub fn write_poscar<W: Write>(w: &mut W, molecule: &Molecule, lattice: &Lattice) -> io::Result<()> {
    // Line 0: Comment
    writeln!(w, "{}", molecule.comment)?;

    // Line 1: Scale
    writeln!(w, "1.0")?;

    // Lines 2-4: Lattice
    for row in &lattice.matrix {
        writeln!(w, "{:>20.10}{:>21.10}{:>21.10}", row[0], row[1], row[2])?;
    }

    // Line 5: Elements
    for element in molecule.groups.elements() {
        write!(w, " {:>4}", element)?;
    }
    writeln!(w)?;

    // Line 6: Counts
    for count in molecule.groups.counts() {
        write!(w, " {:>4}", count)?;
    }
    writeln!(w)?;

    // Coordinate type
    writeln!(w, "Cartesian")?;

    // Atom positions, shifted so the centroid sits at the cell center
    let shift = molecule.centering_shift(lattice);
    for (_, positions) in molecule.groups.iter() {
        for pos in positions {
            writeln!(
                w,
                "{:>16.9}{:>20.9}{:>20.9}",
                pos[0] + shift[0],
                pos[1] + shift[1],
                pos[2] + shift[2]
            )?;
        }
    }

    Ok(())
}

/// 将分子转换为 POSCAR 格式字符串
pub fn to_poscar_string(molecule: &Molecule, lattice: &Lattice) -> String {
    let mut buf = Vec::new();
    // Vec<u8> sink never returns an error
    let _ = write_poscar(&mut buf, molecule, lattice);
    String::from_utf8_lossy(&buf).into_owned()
}
