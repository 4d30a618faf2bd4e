use std::fmt;

use log::debug;

use crate::error::{Result, SeedError};
use crate::util::value::{Letter, AMINO_ACID, AMINO_ACID_COUNT, AMINO_ACID_MASK};

/// murphy.10
pub const MURPHY_10: &str = "A KR EDNQ C G H ILVM FYW P ST";

/// 约简字母表：把 20 种标准氨基酸划分为若干等价类。
///
/// 定义串以空白分隔各组，组的下标（从 0 开始）即约简后的字母。
/// 非标准字母（B、J、Z、X、*）统一映射为氨基酸 mask。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    groups: Vec<String>,
    map: [Letter; 256],
}

impl Reduction {
    pub fn new(definition: &str) -> Result<Self> {
        let malformed = |reason: String| SeedError::MalformedReduction {
            definition: definition.to_string(),
            reason,
        };

        let mut map = [AMINO_ACID_MASK; 256];
        let mut assigned = [false; AMINO_ACID_COUNT];
        let groups: Vec<String> = definition.split_whitespace().map(str::to_ascii_uppercase).collect();

        for (class, group) in groups.iter().enumerate() {
            for ch in group.bytes() {
                let letter = match AMINO_ACID.from_char(ch) {
                    Ok(l) if (l as usize) < AMINO_ACID_COUNT => l,
                    _ => {
                        return Err(malformed(format!(
                            "'{}' is not a standard amino acid",
                            ch.escape_ascii()
                        )))
                    }
                };
                if assigned[letter as usize] {
                    return Err(malformed(format!("'{}' assigned twice", ch.escape_ascii())));
                }
                assigned[letter as usize] = true;
                map[letter as usize] = class as Letter;
            }
        }

        let missing: String = (0..AMINO_ACID_COUNT)
            .filter(|&l| !assigned[l])
            .map(|l| AMINO_ACID.to_char(l as Letter) as char)
            .collect();
        if !missing.is_empty() {
            return Err(malformed(format!("missing letters {}", missing)));
        }

        debug!("reduction '{}' -> {} classes", definition, groups.len());
        Ok(Self { groups, map })
    }

    /// 等价类个数
    pub fn size(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn get(&self, letter: Letter) -> Letter {
        self.map[letter as usize]
    }

    pub fn reduce_seq(&self, seq: &[Letter]) -> Vec<Letter> {
        seq.iter().map(|&l| self.get(l)).collect()
    }

    /// 编码一个约简字母所需的比特数（向上取整）
    pub fn bit_size(&self) -> u32 {
        self.bit_size_exact().ceil() as u32
    }

    pub fn bit_size_exact(&self) -> f64 {
        (self.size() as f64).log2()
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.groups.join(" "))
    }
}
