use super::value::{Letter, NUCLEOTIDE_MASK};

pub const A: Letter = 0;
pub const C: Letter = 1;
pub const G: Letter = 2;
pub const T: Letter = 3;

/// 互补碱基：A<->T, C<->G，mask 保持不变
pub const REVERSE_LETTER: [Letter; 5] = [T, G, C, A, NUCLEOTIDE_MASK];

#[inline]
pub fn complement(letter: Letter) -> Letter {
    match REVERSE_LETTER.get(letter as usize) {
        Some(&c) => c,
        None => NUCLEOTIDE_MASK,
    }
}

pub fn revcomp(seq: &[Letter]) -> Vec<Letter> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq.iter().rev() {
        out.push(complement(b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_is_involution() {
        for l in 0..5 {
            assert_eq!(complement(complement(l)), l);
        }
        assert_eq!(complement(NUCLEOTIDE_MASK), NUCLEOTIDE_MASK);
        assert_eq!(complement(9), NUCLEOTIDE_MASK);
    }

    #[test]
    fn revcomp_letters() {
        assert_eq!(revcomp(&[A, C, G, T, NUCLEOTIDE_MASK]), vec![NUCLEOTIDE_MASK, A, C, G, T]);
    }
}
