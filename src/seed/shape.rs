use std::fmt;

use log::debug;

use super::neighborhood::Seed;
use super::reduction::Reduction;
use super::shape_codes::SHAPE_CODES;
use crate::error::{Result, SeedError};
use crate::util::value::{Letter, AMINO_ACID_COUNT};

/// 单个 shape 的最大窗口长度（同时也是最大权重）
pub const MAX_SHAPE_LEN: usize = 32;

/// 目录中的一组 shape：权重相同，长度/间隔不同
#[derive(Debug)]
pub struct ShapeSet {
    pub label: &'static str,
    pub patterns: &'static [&'static str],
}

/// 间隔种子模式：1 为必须匹配的位置，0 为忽略位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    id: usize,
    length: u8,
    weight: u8,
    positions: [u8; MAX_SHAPE_LEN],
    mask: u32,
}

impl Shape {
    pub fn new(pattern: &str, id: usize) -> Result<Self> {
        let invalid = |reason: &str| SeedError::InvalidShape {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };
        if pattern.is_empty() {
            return Err(invalid("empty pattern"));
        }
        if pattern.len() > MAX_SHAPE_LEN {
            return Err(invalid("pattern longer than 32 positions"));
        }
        if !pattern.starts_with('1') {
            return Err(invalid("pattern must start with a significant position"));
        }

        let mut positions = [0u8; MAX_SHAPE_LEN];
        let mut weight = 0usize;
        let mut mask = 0u32;
        for (i, b) in pattern.bytes().enumerate() {
            match b {
                b'1' => {
                    positions[weight] = i as u8;
                    weight += 1;
                    mask |= 1u32 << i;
                }
                b'0' => {}
                _ => return Err(invalid("only '0' and '1' are allowed")),
            }
        }

        Ok(Self {
            id,
            length: pattern.len() as u8,
            weight: weight as u8,
            positions,
            mask,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// 窗口长度
    pub fn length(&self) -> usize {
        self.length as usize
    }

    /// 有效位置个数（即种子长度）
    pub fn weight(&self) -> usize {
        self.weight as usize
    }

    pub fn positions(&self) -> &[u8] {
        &self.positions[..self.weight()]
    }

    /// bit i 置位表示窗口第 i 个位置有效
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// 从窗口取出有效位置上的字母组成种子。
    /// 窗口过短，或任一有效位置不是标准氨基酸时返回 None。
    pub fn seed(&self, window: &[Letter]) -> Option<Seed> {
        if window.len() < self.length() {
            return None;
        }
        let mut letters = [0 as Letter; MAX_SHAPE_LEN];
        for (dst, &p) in letters.iter_mut().zip(self.positions()) {
            let l = window[p as usize];
            if l as usize >= AMINO_ACID_COUNT {
                return None;
            }
            *dst = l;
        }
        Seed::new(&letters[..self.weight()]).ok()
    }

    pub fn reduced_seed(&self, window: &[Letter], reduction: &Reduction) -> Option<Seed> {
        self.seed(window).map(|s| s.reduce(reduction))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.length() {
            f.write_str(if self.mask & (1u32 << i) != 0 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// 一组同权重 shape，按 id 顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeConfig {
    code: Option<usize>,
    shapes: Vec<Shape>,
}

impl ShapeConfig {
    /// 取目录中第 `code` 组的前 `count` 个 shape（`count == 0` 表示全部）
    pub fn new(code: usize, count: usize) -> Result<Self> {
        let set = SHAPE_CODES.get(code).ok_or(SeedError::InvalidShapeCode(code))?;
        let n = if count == 0 { set.patterns.len() } else { count.min(set.patterns.len()) };
        let mut cfg = Self::from_patterns(&set.patterns[..n])?;
        cfg.code = Some(code);
        debug!("shape code {} ({}): using {} shapes", code, set.label, n);
        Ok(cfg)
    }

    pub fn from_patterns(patterns: &[&str]) -> Result<Self> {
        let shapes = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| Shape::new(p, i))
            .collect::<Result<Vec<_>>>()?;
        let first = shapes
            .first()
            .ok_or_else(|| SeedError::Config("empty shape set".to_string()))?;
        if let Some(s) = shapes.iter().find(|s| s.weight != first.weight) {
            return Err(SeedError::InvalidShape {
                pattern: s.to_string(),
                reason: format!("weight {} differs from set weight {}", s.weight, first.weight),
            });
        }
        Ok(Self { code: None, shapes })
    }

    /// 目录编号，自定义集合为 None
    pub fn code(&self) -> Option<usize> {
        self.code
    }

    pub fn count(&self) -> usize {
        self.shapes.len()
    }

    pub fn get(&self, i: usize) -> Option<&Shape> {
        self.shapes.get(i)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn weight(&self) -> usize {
        self.shapes[0].weight()
    }

    pub fn max_length(&self) -> usize {
        self.shapes.iter().map(Shape::length).max().unwrap_or(0)
    }

    /// `<count>x<weight>`
    pub fn label(&self) -> String {
        format!("{}x{}", self.count(), self.weight())
    }

    /// 选取 `[shape_from, shape_to)`，`shape_to` 截断到集合大小
    pub fn select(&self, shape_from: usize, shape_to: usize) -> Result<&[Shape]> {
        let to = shape_to.min(self.count());
        if shape_from >= to {
            return Err(SeedError::Config(format!(
                "empty shape range [{}, {}) for a set of {} shapes",
                shape_from,
                shape_to,
                self.count()
            )));
        }
        Ok(&self.shapes[shape_from..to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::reduction::MURPHY_10;
    use crate::util::value::{AMINO_ACID, AMINO_ACID_MASK};

    #[test]
    fn parse_shape() {
        let s = Shape::new("1101", 3).unwrap();
        assert_eq!(s.id(), 3);
        assert_eq!(s.length(), 4);
        assert_eq!(s.weight(), 3);
        assert_eq!(s.positions(), &[0, 1, 3]);
        assert_eq!(s.mask(), 0b1011);
        assert_eq!(s.to_string(), "1101");
    }

    #[test]
    fn reject_bad_patterns() {
        assert!(Shape::new("", 0).is_err());
        assert!(Shape::new("0111", 0).is_err());
        assert!(Shape::new("1121", 0).is_err());
        assert!(Shape::new(&"1".repeat(33), 0).is_err());
        assert!(Shape::new(&"1".repeat(32), 0).is_ok());
    }

    #[test]
    fn catalogue_sets_have_uniform_weight_and_matching_labels() {
        for (code, set) in SHAPE_CODES.iter().enumerate() {
            let cfg = ShapeConfig::new(code, 0).unwrap();
            assert_eq!(cfg.label(), set.label, "shape code {}", code);
            assert!(cfg.shapes().iter().all(|s| s.weight() == cfg.weight()));
            assert!(cfg.max_length() <= MAX_SHAPE_LEN);
        }
    }

    #[test]
    fn catalogue_ids_are_stable() {
        let cfg = ShapeConfig::new(0, 0).unwrap();
        assert_eq!(cfg.code(), Some(0));
        assert_eq!(cfg.count(), 4);
        assert_eq!(cfg.weight(), 12);
        assert_eq!(cfg.get(0).unwrap().to_string(), "111101011101111");
        assert_eq!(ShapeConfig::new(10, 0).unwrap().get(0).unwrap().to_string(), "111111");
    }

    #[test]
    fn count_truncates_set() {
        let cfg = ShapeConfig::new(1, 3).unwrap();
        assert_eq!(cfg.count(), 3);
        assert_eq!(ShapeConfig::new(1, 100).unwrap().count(), 16);
    }

    #[test]
    fn unknown_code() {
        assert_eq!(ShapeConfig::new(16, 0).unwrap_err(), SeedError::InvalidShapeCode(16));
    }

    #[test]
    fn mixed_weights_rejected() {
        assert!(ShapeConfig::from_patterns(&["111", "11011"]).is_err());
        assert!(ShapeConfig::from_patterns(&[]).is_err());
    }

    #[test]
    fn select_range() {
        let cfg = ShapeConfig::new(1, 0).unwrap();
        let sel = cfg.select(2, 5).unwrap();
        assert_eq!(sel.len(), 3);
        assert_eq!(sel[0].id(), 2);
        assert_eq!(cfg.select(14, 100).unwrap().len(), 2);
        assert!(cfg.select(5, 5).is_err());
        assert!(cfg.select(16, 20).is_err());
    }

    #[test]
    fn seed_from_window() {
        let shape = Shape::new("1101", 0).unwrap();
        let window = AMINO_ACID.encode(b"MKVLA").unwrap();
        let seed = shape.seed(&window).unwrap();
        assert_eq!(seed.to_string(), "MKL");
        assert!(shape.seed(&window[..3]).is_none());
    }

    #[test]
    fn masked_position_yields_no_seed() {
        let shape = Shape::new("1101", 0).unwrap();
        let mut window = AMINO_ACID.encode(b"MKVL").unwrap();
        window[2] = AMINO_ACID_MASK;
        assert!(shape.seed(&window).is_some());
        window[1] = AMINO_ACID_MASK;
        assert!(shape.seed(&window).is_none());
    }

    #[test]
    fn reduced_seed_maps_classes() {
        let r = Reduction::new(MURPHY_10).unwrap();
        let shape = Shape::new("111", 0).unwrap();
        let a = shape.reduced_seed(&AMINO_ACID.encode(b"KEI").unwrap(), &r).unwrap();
        let b = shape.reduced_seed(&AMINO_ACID.encode(b"RDL").unwrap(), &r).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1, 2, 6]);
    }
}
