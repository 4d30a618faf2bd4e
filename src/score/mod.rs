use crate::util::value::{Letter, AMINO_ACID_COUNT};

/// 替换打分矩阵。邻域枚举只依赖它：字母表大小 + 对称整数打分函数
pub trait ScoreMatrix {
    /// 枚举时每个位置尝试的字母数 `[0, alphabet_size)`
    fn alphabet_size(&self) -> usize;

    fn score(&self, a: Letter, b: Letter) -> i32;

    /// 字母表内的最低分
    fn min_score(&self) -> i32 {
        let n = self.alphabet_size() as Letter;
        let mut min = i32::MAX;
        for a in 0..n {
            for b in 0..n {
                min = min.min(self.score(a, b));
            }
        }
        min
    }
}

const BLOSUM62_SIZE: usize = 25;

/// BLOSUM62，顺序 ARNDCQEGHILKMFPSTWYVBJZX*
#[rustfmt::skip]
static BLOSUM62: [i8; BLOSUM62_SIZE * BLOSUM62_SIZE] = [
    //  A,  R,  N,  D,  C,  Q,  E,  G,  H,  I,  L,  K,  M,  F,  P,  S,  T,  W,  Y,  V,  B,  J,  Z,  X,  *
        4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1, -1, -1, -4,
       -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1, -2,  0, -1, -4,
       -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  4, -3,  0, -1, -4,
       -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4, -3,  1, -1, -4,
        0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -1, -3, -1, -4,
       -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0, -2,  4, -1, -4,
       -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1, -3,  4, -1, -4,
        0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -4, -2, -1, -4,
       -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0, -3,  0, -1, -4,
       -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3,  3, -3, -1, -4,
       -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4,  3, -3, -1, -4,
       -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0, -3,  1, -1, -4,
       -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3,  2, -1, -1, -4,
       -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3,  0, -3, -1, -4,
       -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -3, -1, -1, -4,
        1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0, -2,  0, -1, -4,
        0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1, -1, -1, -4,
       -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -2, -2, -1, -4,
       -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -1, -2, -1, -4,
        0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3,  2, -2, -1, -4,
       -2, -1,  4,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4, -3,  0, -1, -4,
       -1, -2, -3, -3, -1, -2, -3, -4, -3,  3,  3, -3,  2,  0, -3, -2, -1, -2, -1,  2, -3,  3, -3, -1, -4,
       -1,  0,  0,  1, -3,  4,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -2, -2, -2,  0, -3,  4, -1, -4,
       -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -4,
       -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1,
];

/// 超出表范围的字母得分
const BLOSUM62_DEFAULT: i32 = -4;

#[derive(Clone, Copy, Debug, Default)]
pub struct Blosum62;

impl ScoreMatrix for Blosum62 {
    fn alphabet_size(&self) -> usize {
        AMINO_ACID_COUNT
    }

    #[inline]
    fn score(&self, a: Letter, b: Letter) -> i32 {
        let (a, b) = (a as usize, b as usize);
        if a >= BLOSUM62_SIZE || b >= BLOSUM62_SIZE {
            return BLOSUM62_DEFAULT;
        }
        BLOSUM62[a * BLOSUM62_SIZE + b] as i32
    }
}

/// 匹配 / 错配二值打分，适用于核酸或小字母表
#[derive(Clone, Copy, Debug)]
pub struct MatchMismatch {
    pub alphabet_size: usize,
    pub match_score: i32,
    pub mismatch_penalty: i32,
}

impl ScoreMatrix for MatchMismatch {
    fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    #[inline]
    fn score(&self, a: Letter, b: Letter) -> i32 {
        if a == b {
            self.match_score
        } else {
            -self.mismatch_penalty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::AMINO_ACID;

    fn aa(c: u8) -> Letter {
        AMINO_ACID.from_char(c).unwrap()
    }

    #[test]
    fn blosum62_is_symmetric() {
        for a in 0..BLOSUM62_SIZE as Letter {
            for b in 0..BLOSUM62_SIZE as Letter {
                assert_eq!(Blosum62.score(a, b), Blosum62.score(b, a));
            }
        }
    }

    #[test]
    fn blosum62_known_values() {
        assert_eq!(Blosum62.score(aa(b'W'), aa(b'W')), 11);
        assert_eq!(Blosum62.score(aa(b'K'), aa(b'R')), 2);
        assert_eq!(Blosum62.score(aa(b'C'), aa(b'E')), -4);
        assert_eq!(Blosum62.score(30, 0), BLOSUM62_DEFAULT);
        assert_eq!(Blosum62.min_score(), -4);
    }

    #[test]
    fn blosum62_diagonal_dominates_rows() {
        let n = Blosum62.alphabet_size() as Letter;
        for a in 0..n {
            for b in 0..n {
                assert!(Blosum62.score(a, a) >= Blosum62.score(a, b));
            }
        }
    }

    #[test]
    fn match_mismatch_scores() {
        let m = MatchMismatch { alphabet_size: 4, match_score: 2, mismatch_penalty: 1 };
        assert_eq!(m.score(1, 1), 2);
        assert_eq!(m.score(1, 2), -1);
        assert_eq!(m.min_score(), -1);
    }
}
