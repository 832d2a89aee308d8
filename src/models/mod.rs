//! # 数据模型模块
//!
//! 定义分子结构与立方晶胞的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: structure

pub mod structure;

pub use structure::{Atom, Lattice, Molecule, CELL_EDGE};
