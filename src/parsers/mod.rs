//! # 解析器模块
//!
//! 提供 XYZ 输入解析与 POSCAR 输出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xyz, poscar

pub mod poscar;
pub mod xyz;
