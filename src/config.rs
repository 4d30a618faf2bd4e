use clap::ValueEnum;

use crate::error::{Result, SeedError};
use crate::seed::{Shape, ShapeConfig, MAX_SEED_WEIGHT};
use crate::translate::Translator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceType {
    AminoAcid,
    Nucleotide,
}

/// 比对模式：blastp 直接使用蛋白查询，blastx 先对核酸查询做六框翻译
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AlignMode {
    #[default]
    Blastp,
    Blastx,
}

impl AlignMode {
    pub fn input_sequence_type(self) -> SequenceType {
        match self {
            AlignMode::Blastp => SequenceType::AminoAcid,
            AlignMode::Blastx => SequenceType::Nucleotide,
        }
    }

    /// 每条查询产生的蛋白上下文数
    pub fn query_contexts(self) -> usize {
        match self {
            AlignMode::Blastp => 1,
            AlignMode::Blastx => 6,
        }
    }

    pub fn query_translated(self) -> bool {
        self == AlignMode::Blastx
    }

    /// 查询长度相对蛋白长度的倍数
    pub fn query_len_factor(self) -> usize {
        match self {
            AlignMode::Blastp => 1,
            AlignMode::Blastx => 3,
        }
    }
}

/// 运行参数，类似 AlignOpt：由命令行填充，使用前调用 `validate`
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub seed_weight: usize,
    pub shape_code: usize,
    /// 0 表示整组
    pub shape_count: usize,
    pub shape_from: usize,
    pub shape_to: usize,
    pub genetic_code: u32,
    pub mode: AlignMode,
    pub threads: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed_weight: 12,
            shape_code: 0,
            shape_count: 0,
            shape_from: 0,
            shape_to: usize::MAX,
            genetic_code: 1,
            mode: AlignMode::Blastp,
            threads: 1,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.seed_weight == 0 || self.seed_weight > MAX_SEED_WEIGHT {
            return Err(SeedError::Config(format!(
                "seed weight {} out of range 1..={}",
                self.seed_weight, MAX_SEED_WEIGHT
            )));
        }
        if self.shape_from >= self.shape_to {
            return Err(SeedError::Config(format!(
                "shape range [{}, {}) is empty",
                self.shape_from, self.shape_to
            )));
        }
        if self.threads == 0 {
            return Err(SeedError::Config("threads must be at least 1".to_string()));
        }
        Ok(())
    }

    /// 构建 shape 集合，并检查其权重与 seed_weight 一致
    pub fn shape_config(&self) -> Result<ShapeConfig> {
        let shapes = ShapeConfig::new(self.shape_code, self.shape_count)?;
        if shapes.weight() != self.seed_weight {
            return Err(SeedError::Config(format!(
                "shape code {} has weight {}, but seed weight is {}",
                self.shape_code,
                shapes.weight(),
                self.seed_weight
            )));
        }
        Ok(shapes)
    }

    pub fn active_shapes<'a>(&self, shapes: &'a ShapeConfig) -> Result<&'a [Shape]> {
        shapes.select(self.shape_from, self.shape_to)
    }

    pub fn translator(&self) -> Result<Translator> {
        Translator::new(self.genetic_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_consistent() {
        let cfg = RunConfig::default();
        cfg.validate().unwrap();
        let shapes = cfg.shape_config().unwrap();
        assert_eq!(shapes.label(), "4x12");
        assert_eq!(cfg.active_shapes(&shapes).unwrap().len(), 4);
        assert_eq!(cfg.translator().unwrap().id(), 1);
    }

    #[test]
    fn weight_mismatch_is_rejected() {
        let cfg = RunConfig { shape_code: 1, ..RunConfig::default() };
        assert!(matches!(cfg.shape_config(), Err(SeedError::Config(_))));
        let cfg = RunConfig { shape_code: 1, seed_weight: 9, ..RunConfig::default() };
        assert_eq!(cfg.shape_config().unwrap().count(), 16);
    }

    #[test]
    fn invalid_values() {
        assert!(RunConfig { seed_weight: 0, ..RunConfig::default() }.validate().is_err());
        assert!(RunConfig { seed_weight: 33, ..RunConfig::default() }.validate().is_err());
        assert!(RunConfig { shape_from: 3, shape_to: 3, ..RunConfig::default() }.validate().is_err());
        assert!(RunConfig { threads: 0, ..RunConfig::default() }.validate().is_err());
        assert!(RunConfig { genetic_code: 7, ..RunConfig::default() }.translator().is_err());
    }

    #[test]
    fn align_modes() {
        assert_eq!(AlignMode::Blastx.query_contexts(), 6);
        assert_eq!(AlignMode::Blastx.query_len_factor(), 3);
        assert!(AlignMode::Blastx.query_translated());
        assert_eq!(AlignMode::Blastp.input_sequence_type(), SequenceType::AminoAcid);
        assert_eq!(AlignMode::Blastx.input_sequence_type(), SequenceType::Nucleotide);
    }
}
