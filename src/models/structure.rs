//! # 分子结构数据模型
//!
//! 定义 XYZ 读入后的分子表示，以及输出 POSCAR 时使用的立方晶胞。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 无外部模块依赖

use std::collections::HashMap;

/// 立方晶胞边长 (Å)
pub const CELL_EDGE: f64 = 40.0;

/// 晶格表示
#[derive(Debug, Clone)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 边长为 `edge` 的轴对齐立方晶胞
    pub fn cubic(edge: f64) -> Self {
        Lattice {
            matrix: [[edge, 0.0, 0.0], [0.0, edge, 0.0], [0.0, 0.0, edge]],
        }
    }

    /// 晶胞中心
    pub fn center(&self) -> [f64; 3] {
        let m = self.matrix;
        [
            (m[0][0] + m[1][0] + m[2][0]) / 2.0,
            (m[0][1] + m[1][1] + m[2][1]) / 2.0,
            (m[0][2] + m[1][2] + m[2][2]) / 2.0,
        ]
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素符号（任意文本标签）
    pub element: String,

    /// 笛卡尔坐标 [x, y, z]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 按元素分组的坐标，保持元素首次出现的顺序
#[derive(Debug, Clone, Default)]
pub struct ElementGroups {
    groups: Vec<(String, Vec<[f64; 3]>)>,
    index: HashMap<String, usize>,
}

impl ElementGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个原子；新元素排在已有元素之后
    pub fn push(&mut self, atom: Atom) {
        match self.index.get(&atom.element) {
            Some(&i) => self.groups[i].1.push(atom.position),
            None => {
                self.index.insert(atom.element.clone(), self.groups.len());
                self.groups.push((atom.element, vec![atom.position]));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[[f64; 3]])> {
        self.groups
            .iter()
            .map(|(element, positions)| (element.as_str(), positions.as_slice()))
    }

    pub fn elements(&self) -> Vec<&str> {
        self.groups.iter().map(|(e, _)| e.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.groups.iter().map(|(_, p)| p.len()).collect()
    }

    /// 元素种类数
    pub fn species_count(&self) -> usize {
        self.groups.len()
    }

    /// 原子总数
    pub fn atom_count(&self) -> usize {
        self.groups.iter().map(|(_, p)| p.len()).sum()
    }
}

/// 分子结构（XYZ 第一帧）
#[derive(Debug, Clone)]
pub struct Molecule {
    /// 注释行（XYZ 第二行）
    pub comment: String,

    /// 首行声明的原子数
    pub declared_count: usize,

    /// 按元素分组的坐标
    pub groups: ElementGroups,

    /// 所有原子坐标逐轴累加
    pub sum: [f64; 3],
}

impl Molecule {
    pub fn new(comment: impl Into<String>, declared_count: usize) -> Self {
        Molecule {
            comment: comment.into(),
            declared_count,
            groups: ElementGroups::new(),
            sum: [0.0; 3],
        }
    }

    pub fn add_atom(&mut self, atom: Atom) {
        for (s, x) in self.sum.iter_mut().zip(atom.position) {
            *s += x;
        }
        self.groups.push(atom);
    }

    /// 几何中心，以声明的原子数为除数
    pub fn centroid(&self) -> [f64; 3] {
        let n = self.declared_count as f64;
        [self.sum[0] / n, self.sum[1] / n, self.sum[2] / n]
    }

    /// 将几何中心平移到晶胞中心所需的位移
    pub fn centering_shift(&self, lattice: &Lattice) -> [f64; 3] {
        let center = lattice.center();
        let centroid = self.centroid();
        [
            center[0] - centroid[0],
            center[1] - centroid[1],
            center[2] - centroid[2],
        ]
    }

    /// 化学式，按元素首次出现顺序
    pub fn formula(&self) -> String {
        self.groups
            .iter()
            .map(|(el, positions)| {
                if positions.len() == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, positions.len())
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}
