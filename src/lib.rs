//! # protseed
//!
//! 蛋白 / 翻译核酸比对器中种子索引所依赖的符号层组件。
//!
//! 本 crate 提供：
//!
//! - **约简字母表**：按划分串把 20 种氨基酸合并为若干等价类
//! - **间隔种子库**：按编号选取的 shape 目录，可从序列窗口提取种子
//! - **密码子翻译**：按遗传密码表构建 5×5×5 正向 / 反向互补查找表，支持六框翻译
//! - **种子邻域枚举**：给定打分矩阵与阈值，列出所有得分不低于阈值的变体种子
//!
//! ## 快速示例
//!
//! ```rust
//! use protseed::score::Blosum62;
//! use protseed::seed::{Reduction, Seed, MURPHY_10};
//! use protseed::translate::Translator;
//! use protseed::util::{AMINO_ACID, NUCLEOTIDE};
//!
//! // 邻域枚举
//! let seed: Seed = "MKVLA".parse().unwrap();
//! let threshold = seed.self_score(&Blosum62) - 4;
//! let neighbors = seed.neighborhood(threshold, &Blosum62);
//! assert!(neighbors.contains(&seed));
//!
//! // 约简字母表
//! let reduction = Reduction::new(MURPHY_10).unwrap();
//! let k = AMINO_ACID.from_char(b'K').unwrap();
//! let r = AMINO_ACID.from_char(b'R').unwrap();
//! assert_eq!(reduction.get(k), reduction.get(r));
//!
//! // 翻译
//! let t = Translator::new(1).unwrap();
//! let dna = NUCLEOTIDE.encode(b"TTT").unwrap();
//! assert_eq!(t.amino_acid(&dna, 0), AMINO_ACID.from_char(b'F').unwrap());
//! ```
//!
//! ## 模块说明
//!
//! - [`util`] — 字母与字符的互相转换、核酸互补
//! - [`score`] — 打分矩阵接口与 BLOSUM62
//! - [`seed`] — 约简字母表、shape 目录、种子与邻域枚举
//! - [`translate`] — 遗传密码表与密码子查找表
//! - [`config`] — 运行参数与比对模式

pub mod config;
pub mod error;
pub mod score;
pub mod seed;
pub mod translate;
pub mod util;

pub use error::{Result, SeedError};
