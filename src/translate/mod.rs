mod codes;

use log::debug;

use crate::error::{Result, SeedError};
use crate::util::dna::complement;
use crate::util::value::{Letter, AMINO_ACID, NUCLEOTIDE_MASK};
use codes::CODES;

/// 以三个核酸字母（`ACGTN`，`N` 为 mask）为下标的查找表
pub type CodonCube = [[[Letter; 5]; 5]; 5];

/// A、C、G、T 在 `TCAG` 顺序密码串中的列号
const CODE_COLUMN: [usize; 4] = [2, 1, 3, 0];

/// 按编号取 64 字符的密码串，未分配时返回 None
pub fn genetic_code(id: u32) -> Option<&'static str> {
    CODES.get(id as usize).copied().flatten()
}

/// 所有已分配的遗传密码编号，升序
pub fn genetic_code_ids() -> impl Iterator<Item = u32> {
    (0..CODES.len() as u32).filter(|&id| genetic_code(id).is_some())
}

/// 密码子翻译器：正向表与反向互补表。
///
/// 反向表存放互补三联体的翻译结果，反链密码子按碱基逆序查表。
/// 构造即完成初始化，不存在未初始化状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    id: u32,
    lookup: CodonCube,
    lookup_reverse: CodonCube,
}

impl Translator {
    pub fn new(id: u32) -> Result<Self> {
        let (lookup, lookup_reverse) = build_cubes(id)?;
        Ok(Self { id, lookup, lookup_reverse })
    }

    /// 按新的遗传密码重建两张表；出错时 `self` 保持不变
    pub fn init(&mut self, id: u32) -> Result<()> {
        let (lookup, lookup_reverse) = build_cubes(id)?;
        self.id = id;
        self.lookup = lookup;
        self.lookup_reverse = lookup_reverse;
        Ok(())
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn lookup(&self) -> &CodonCube {
        &self.lookup
    }

    pub fn lookup_reverse(&self) -> &CodonCube {
        &self.lookup_reverse
    }

    /// 三个字母均须为核酸字母（`0..=4`），否则 panic
    #[inline]
    pub fn codon(&self, a: Letter, b: Letter, c: Letter) -> Letter {
        debug_assert!(a <= NUCLEOTIDE_MASK && b <= NUCLEOTIDE_MASK && c <= NUCLEOTIDE_MASK);
        self.lookup[a as usize][b as usize][c as usize]
    }

    /// 正链三联体 `a b c` 所在位置在反链上读出的氨基酸；字母要求同 [`Self::codon`]
    #[inline]
    pub fn codon_reverse(&self, a: Letter, b: Letter, c: Letter) -> Letter {
        debug_assert!(a <= NUCLEOTIDE_MASK && b <= NUCLEOTIDE_MASK && c <= NUCLEOTIDE_MASK);
        self.lookup_reverse[c as usize][b as usize][a as usize]
    }

    /// 翻译 `dna[pos..pos + 3]`。
    ///
    /// # Panics
    ///
    /// `pos + 3 > dna.len()`，或三联体中含非核酸字母时 panic。
    #[inline]
    pub fn amino_acid(&self, dna: &[Letter], pos: usize) -> Letter {
        debug_assert!(pos + 3 <= dna.len(), "codon at {} past end of {}", pos, dna.len());
        self.codon(dna[pos], dna[pos + 1], dna[pos + 2])
    }

    /// 反链版本的 [`Self::amino_acid`]，panic 条件相同
    #[inline]
    pub fn amino_acid_reverse(&self, dna: &[Letter], pos: usize) -> Letter {
        debug_assert!(pos + 3 <= dna.len(), "codon at {} past end of {}", pos, dna.len());
        self.codon_reverse(dna[pos], dna[pos + 1], dna[pos + 2])
    }

    /// 六框翻译，顺序 +1、+2、+3、-1、-2、-3；第 f 框含 `(len - f) / 3` 个残基。
    /// `dna` 中的字母须为核酸字母
    pub fn translate(&self, dna: &[Letter]) -> [Vec<Letter>; 6] {
        let n = dna.len();
        let mut frames: [Vec<Letter>; 6] = Default::default();
        for f in 0..3 {
            if n < f + 3 {
                continue;
            }
            let d = (n - f) / 3;
            frames[f] = (0..d).map(|i| self.amino_acid(dna, f + 3 * i)).collect();
            frames[f + 3] = (0..d)
                .map(|i| self.amino_acid_reverse(dna, n - 3 - f - 3 * i))
                .collect();
        }
        frames
    }
}

fn build_cubes(id: u32) -> Result<(CodonCube, CodonCube)> {
    let code = genetic_code(id).ok_or(SeedError::InvalidGeneticCode(id))?.as_bytes();
    let decode = |i: Letter, j: Letter, k: Letter| {
        let offset =
            CODE_COLUMN[i as usize] * 16 + CODE_COLUMN[j as usize] * 4 + CODE_COLUMN[k as usize];
        AMINO_ACID.from_char(code[offset])
    };

    // 任一位置为 mask 时保持氨基酸 mask
    let mut lookup: CodonCube = [[[AMINO_ACID.mask(); 5]; 5]; 5];
    let mut lookup_reverse = lookup;
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                lookup[i as usize][j as usize][k as usize] = decode(i, j, k)?;
                lookup_reverse[i as usize][j as usize][k as usize] =
                    decode(complement(i), complement(j), complement(k))?;
            }
            fill_wobble(&mut lookup[i as usize][j as usize]);
            fill_wobble(&mut lookup_reverse[i as usize][j as usize]);
        }
    }

    debug!("genetic code {} initialized", id);
    Ok((lookup, lookup_reverse))
}

/// 第三位为 mask 时，若四种碱基翻译结果一致则取该结果
fn fill_wobble(row: &mut [Letter; 5]) {
    if row[..4].iter().all(|&aa| aa == row[0]) {
        row[4] = row[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::dna::{A, C, G, T};
    use crate::util::value::{AMINO_ACID_MASK, NUCLEOTIDE, STOP_LETTER};

    const N: Letter = NUCLEOTIDE_MASK;

    fn aa(c: u8) -> Letter {
        AMINO_ACID.from_char(c).unwrap()
    }

    fn frame_str(frame: &[Letter]) -> String {
        AMINO_ACID.decode(frame)
    }

    #[test]
    fn standard_code_codons() {
        let t = Translator::new(1).unwrap();
        assert_eq!(t.codon(T, T, T), aa(b'F'));
        assert_eq!(t.codon(A, T, G), aa(b'M'));
        assert_eq!(t.codon(T, A, A), STOP_LETTER);
        assert_eq!(t.codon(G, G, C), aa(b'G'));
        assert_eq!(t.codon(A, G, A), aa(b'R'));
    }

    #[test]
    fn masked_base_propagates() {
        let t = Translator::new(1).unwrap();
        assert_eq!(t.codon(T, T, N), AMINO_ACID_MASK);
        assert_eq!(t.codon(N, T, T), AMINO_ACID_MASK);
        assert_eq!(t.codon(T, N, T), AMINO_ACID_MASK);
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    if i == N || j == N {
                        assert_eq!(t.lookup()[i as usize][j as usize][k as usize], AMINO_ACID_MASK);
                        assert_eq!(t.lookup_reverse()[i as usize][j as usize][k as usize], AMINO_ACID_MASK);
                    }
                }
            }
        }
    }

    #[test]
    fn fourfold_degenerate_codon_resolves_mask() {
        let t = Translator::new(1).unwrap();
        assert_eq!(t.codon(C, T, N), aa(b'L'));
        assert_eq!(t.codon(G, G, N), aa(b'G'));
        assert_eq!(t.codon(A, T, N), AMINO_ACID_MASK);
        // 3 号码表中 CTN 编码 T
        assert_eq!(Translator::new(3).unwrap().codon(C, T, N), aa(b'T'));
    }

    #[test]
    fn reverse_cube_complements_each_axis() {
        let t = Translator::new(11).unwrap();
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    assert_eq!(
                        t.lookup_reverse()[a as usize][b as usize][c as usize],
                        t.codon(complement(a), complement(b), complement(c))
                    );
                    assert_eq!(
                        t.codon_reverse(a, b, c),
                        t.codon(complement(c), complement(b), complement(a))
                    );
                }
            }
        }
    }

    #[test]
    fn invalid_ids() {
        for id in [0, 7, 8, 15, 17, 18, 19, 20, 27, 1000] {
            assert_eq!(Translator::new(id).unwrap_err(), SeedError::InvalidGeneticCode(id));
        }
        assert_eq!(genetic_code_ids().count(), 19);
        assert!(genetic_code_ids().all(|id| Translator::new(id).is_ok()));
    }

    #[test]
    fn init_overwrites_tables() {
        let mut t = Translator::new(1).unwrap();
        assert_eq!(t.codon(A, G, A), aa(b'R'));
        t.init(2).unwrap();
        assert_eq!(t.id(), 2);
        assert_eq!(t.codon(A, G, A), STOP_LETTER);
        assert_eq!(t, Translator::new(2).unwrap());
        assert!(t.init(7).is_err());
        assert_eq!(t.id(), 2);
        assert_eq!(t, Translator::new(2).unwrap());
    }

    #[test]
    fn six_frames() {
        let t = Translator::new(1).unwrap();
        let dna = NUCLEOTIDE.encode(b"ATGGCCTAA").unwrap();
        let frames = t.translate(&dna);
        let got: Vec<String> = frames.iter().map(|f| frame_str(f)).collect();
        assert_eq!(got, vec!["MA*", "WP", "GL", "LGH", "*A", "RP"]);
    }

    #[test]
    #[should_panic]
    fn codon_past_end_panics() {
        let t = Translator::new(1).unwrap();
        let dna = NUCLEOTIDE.encode(b"ATGC").unwrap();
        t.amino_acid(&dna, 2);
    }

    #[test]
    #[should_panic]
    fn reverse_codon_past_end_panics() {
        let t = Translator::new(1).unwrap();
        let dna = NUCLEOTIDE.encode(b"ATG").unwrap();
        t.amino_acid_reverse(&dna, 1);
    }

    #[test]
    fn last_codon_in_bounds() {
        let t = Translator::new(1).unwrap();
        let dna = NUCLEOTIDE.encode(b"CATG").unwrap();
        assert_eq!(t.amino_acid(&dna, 1), aa(b'M'));
    }

    #[test]
    fn short_sequences() {
        let t = Translator::new(1).unwrap();
        let frames = t.translate(&NUCLEOTIDE.encode(b"ATGC").unwrap());
        assert_eq!(frames.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 1, 0, 1, 1, 0]);
        assert!(t.translate(&[]).iter().all(Vec::is_empty));
    }
}
