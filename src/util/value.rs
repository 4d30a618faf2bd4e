use crate::error::{Result, SeedError};

/// 字母的内部编码：符号串中的下标
pub type Letter = u8;

const INVALID: u8 = 0xff;

/// 标准氨基酸个数，即 [`AMINO_ACID`] 中的字母 `0..20`
pub const AMINO_ACID_COUNT: usize = 20;
/// `X`
pub const AMINO_ACID_MASK: Letter = 23;
/// `*`
pub const STOP_LETTER: Letter = 24;
/// `N`
pub const NUCLEOTIDE_MASK: Letter = 4;

/// 氨基酸，顺序 `ARNDCQEGHILKMFPSTWYVBJZX*`
pub static AMINO_ACID: ValueTraits =
    ValueTraits::new("amino acid", b"ARNDCQEGHILKMFPSTWYVBJZX*", AMINO_ACID_MASK, b"UO-", &[]);

/// 核酸，顺序 `ACGTN`；IUPAC 简并码统一映射为 `N`，`U` 视作 `T`
pub static NUCLEOTIDE: ValueTraits =
    ValueTraits::new("nucleotide", b"ACGTN", NUCLEOTIDE_MASK, b"MRWSYKVHDB", &[(b'U', b'T')]);

/// 字母表：固定符号串 + 256 项字符查找表，另有一个吸收歧义输入的 mask 字母
#[derive(Debug)]
pub struct ValueTraits {
    name: &'static str,
    symbols: &'static [u8],
    mask: Letter,
    table: [u8; 256],
}

impl ValueTraits {
    /// 构建查找表：大小写均接受，`mask_chars` 映射到 mask，`aliases` 为 (别名, 目标字符)。
    pub const fn new(
        name: &'static str,
        symbols: &'static [u8],
        mask: Letter,
        mask_chars: &'static [u8],
        aliases: &'static [(u8, u8)],
    ) -> Self {
        let mut table = [INVALID; 256];
        let mut i = 0;
        while i < symbols.len() {
            let c = symbols[i];
            table[c as usize] = i as u8;
            table[c.to_ascii_lowercase() as usize] = i as u8;
            i += 1;
        }
        let mut i = 0;
        while i < mask_chars.len() {
            let c = mask_chars[i];
            table[c as usize] = mask;
            table[c.to_ascii_lowercase() as usize] = mask;
            i += 1;
        }
        let mut i = 0;
        while i < aliases.len() {
            let (from, to) = aliases[i];
            let v = table[to as usize];
            table[from as usize] = v;
            table[from.to_ascii_lowercase() as usize] = v;
            i += 1;
        }
        Self { name, symbols, mask, table }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 字母个数（含 mask）
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn mask(&self) -> Letter {
        self.mask
    }

    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    #[inline]
    pub fn from_char(&self, ch: u8) -> Result<Letter> {
        match self.table[ch as usize] {
            INVALID => Err(SeedError::InvalidCharacter { byte: ch, alphabet: self.name }),
            l => Ok(l),
        }
    }

    #[inline]
    pub fn to_char(&self, letter: Letter) -> u8 {
        self.symbols.get(letter as usize).copied().unwrap_or(b'?')
    }

    pub fn encode(&self, s: &[u8]) -> Result<Vec<Letter>> {
        s.iter().map(|&c| self.from_char(c)).collect()
    }

    pub fn decode(&self, letters: &[Letter]) -> String {
        letters.iter().map(|&l| self.to_char(l) as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amino_acid_codes() {
        assert_eq!(AMINO_ACID.size(), 25);
        assert_eq!(AMINO_ACID.from_char(b'A').unwrap(), 0);
        assert_eq!(AMINO_ACID.from_char(b'v').unwrap(), 19);
        assert_eq!(AMINO_ACID.from_char(b'X').unwrap(), AMINO_ACID_MASK);
        assert_eq!(AMINO_ACID.from_char(b'*').unwrap(), STOP_LETTER);
        assert_eq!(AMINO_ACID.from_char(b'U').unwrap(), AMINO_ACID_MASK);
        assert!(AMINO_ACID.from_char(b'1').is_err());
    }

    #[test]
    fn nucleotide_codes_and_ambiguity() {
        assert_eq!(NUCLEOTIDE.encode(b"acgtU").unwrap(), vec![0, 1, 2, 3, 3]);
        assert_eq!(NUCLEOTIDE.from_char(b'R').unwrap(), NUCLEOTIDE_MASK);
        assert_eq!(NUCLEOTIDE.from_char(b'n').unwrap(), NUCLEOTIDE_MASK);
        assert!(matches!(
            NUCLEOTIDE.from_char(b'E'),
            Err(SeedError::InvalidCharacter { byte: b'E', .. })
        ));
    }

    #[test]
    fn utf8_input_reports_raw_byte() {
        let err = AMINO_ACID.encode("MÄ".as_bytes()).unwrap_err();
        assert_eq!(err, SeedError::InvalidCharacter { byte: 0xc3, alphabet: "amino acid" });
        assert!(err.to_string().contains("0xc3"));
    }

    #[test]
    fn decode_inverts_encode() {
        let s = b"MKVLAAGX*";
        let letters = AMINO_ACID.encode(s).unwrap();
        assert_eq!(AMINO_ACID.decode(&letters), "MKVLAAGX*");
    }
}
