pub mod dna;
pub mod value;

pub use value::{Letter, ValueTraits, AMINO_ACID, NUCLEOTIDE};
