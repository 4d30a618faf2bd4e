use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;

use super::reduction::Reduction;
use crate::error::{Result, SeedError};
use crate::score::ScoreMatrix;
use crate::util::value::{Letter, AMINO_ACID, AMINO_ACID_COUNT};

/// 种子最大长度
pub const MAX_SEED_WEIGHT: usize = 32;

/// 定长种子：栈上固定容量数组 + 有效长度，复制即快照。
///
/// 字母限定为 20 种标准氨基酸（或经 [`Seed::reduce`] 得到的约简字母），
/// 保证邻域枚举时原字母一定在候选范围内。
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed {
    data: [Letter; MAX_SEED_WEIGHT],
    len: u8,
}

impl Seed {
    pub fn new(letters: &[Letter]) -> Result<Self> {
        if letters.is_empty() || letters.len() > MAX_SEED_WEIGHT {
            return Err(SeedError::SeedLength(letters.len()));
        }
        if let Some(pos) = letters.iter().position(|&l| l as usize >= AMINO_ACID_COUNT) {
            return Err(SeedError::SeedLetter { letter: letters[pos], pos });
        }
        let mut data = [0; MAX_SEED_WEIGHT];
        data[..letters.len()].copy_from_slice(letters);
        Ok(Self { data, len: letters.len() as u8 })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Letter] {
        &self.data[..self.len()]
    }

    /// 逐位置映射到约简字母表
    pub fn reduce(&self, reduction: &Reduction) -> Seed {
        let mut out = *self;
        let n = out.len();
        for l in &mut out.data[..n] {
            *l = reduction.get(*l);
        }
        out
    }

    /// 逐位置打分求和，两个种子长度须相同
    pub fn score<S: ScoreMatrix + ?Sized>(&self, other: &Seed, matrix: &S) -> i32 {
        debug_assert_eq!(self.len, other.len);
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| matrix.score(a, b))
            .sum()
    }

    pub fn self_score<S: ScoreMatrix + ?Sized>(&self, matrix: &S) -> i32 {
        self.score(self, matrix)
    }

    /// 枚举邻域：清空 `out` 后写入所有满足 `score(self, s') >= threshold` 的种子 s'。
    ///
    /// 原地深度优先：每个位置依次尝试字母表中的全部字母，累计分数低于阈值即剪枝；
    /// 累计分数中尚未访问的位置按自身得分计入。结果按字母编码的字典序排列。
    /// 返回时 `self` 与调用前完全相同。
    pub fn enum_neighborhood<S: ScoreMatrix + ?Sized>(
        &mut self,
        threshold: i32,
        matrix: &S,
        out: &mut Vec<Seed>,
    ) {
        out.clear();
        let score = self.self_score(matrix);
        self.enum_from(0, threshold, matrix, out, score);
    }

    fn enum_from<S: ScoreMatrix + ?Sized>(
        &mut self,
        pos: usize,
        threshold: i32,
        matrix: &S,
        out: &mut Vec<Seed>,
        score: i32,
    ) {
        let l = self.data[pos];
        // score 变为：pos 之前的变异得分 + pos 之后的自身得分
        let score = score - matrix.score(l, l);
        let last = self.len() - 1;
        for c in 0..matrix.alphabet_size() {
            let c = c as Letter;
            let new_score = score + matrix.score(l, c);
            self.data[pos] = c;
            if new_score >= threshold {
                if pos < last {
                    self.enum_from(pos + 1, threshold, matrix, out, new_score);
                } else {
                    out.push(*self);
                }
            }
        }
        self.data[pos] = l;
    }

    /// 在副本上枚举，不需要可变借用
    pub fn neighborhood<S: ScoreMatrix + ?Sized>(&self, threshold: i32, matrix: &S) -> Vec<Seed> {
        let mut work = *self;
        let mut out = Vec::new();
        work.enum_neighborhood(threshold, matrix, &mut out);
        out
    }
}

/// 并行枚举多个种子的邻域，每个 worker 各自持有种子副本与输出；结果与输入顺序一致
pub fn neighborhoods<S: ScoreMatrix + Sync + ?Sized>(
    seeds: &[Seed],
    threshold: i32,
    matrix: &S,
) -> Vec<Vec<Seed>> {
    let start = std::time::Instant::now();
    let out: Vec<Vec<Seed>> = seeds
        .par_iter()
        .map(|s| s.neighborhood(threshold, matrix))
        .collect();
    debug!(
        "enumerated {} neighbors for {} seeds (threshold {}) in {:?}",
        out.iter().map(Vec::len).sum::<usize>(),
        seeds.len(),
        threshold,
        start.elapsed()
    );
    out
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AMINO_ACID.decode(self.as_slice()))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seed").field(&self.as_slice()).finish()
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    /// 只接受 20 种标准氨基酸字符（大小写均可）
    fn from_str(s: &str) -> Result<Self> {
        let letters = AMINO_ACID.encode(s.as_bytes())?;
        if let Some(pos) = letters.iter().position(|&l| l as usize >= AMINO_ACID_COUNT) {
            return Err(SeedError::InvalidCharacter {
                byte: s.as_bytes()[pos],
                alphabet: "standard amino acid",
            });
        }
        Seed::new(&letters)
    }
}
