use thiserror::Error;

use crate::util::value::Letter;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// 遗传密码编号超出表范围或对应空位
    #[error("invalid genetic code id: {0}")]
    InvalidGeneticCode(u32),

    /// 约简定义缺字母、重复字母或含非标准字母
    #[error("malformed reduction '{definition}': {reason}")]
    MalformedReduction { definition: String, reason: String },

    /// 字母表不认识的输入字节；非 ASCII 字节按转义形式输出
    #[error("invalid character '{}' (0x{:02x}) for {} alphabet", .byte.escape_ascii(), .byte, .alphabet)]
    InvalidCharacter { byte: u8, alphabet: &'static str },

    #[error("invalid shape code: {0}")]
    InvalidShapeCode(usize),

    #[error("invalid shape '{pattern}': {reason}")]
    InvalidShape { pattern: String, reason: String },

    /// 种子长度须在 1..=MAX_SEED_WEIGHT 之间
    #[error("seed length {0} out of range")]
    SeedLength(usize),

    /// 种子中出现非标准氨基酸（mask、B/J/Z、终止符等）
    #[error("seed letter {letter} at position {pos} is not a standard amino acid")]
    SeedLetter { letter: Letter, pos: usize },

    /// 运行参数不一致
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;
