use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use protseed::config::{AlignMode, RunConfig};
use protseed::score::{Blosum62, ScoreMatrix};
use protseed::seed::{self, Reduction, Seed, ShapeConfig, MURPHY_10};
use protseed::util::value::AMINO_ACID_COUNT;
use protseed::util::{Letter, AMINO_ACID, NUCLEOTIDE};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const FRAME_NAMES: [&str; 6] = ["+1", "+2", "+3", "-1", "-2", "-3"];

#[derive(Parser, Debug)]
#[command(name = "protseed", author, version, about = "Seed alphabet, spaced-seed and neighborhood tools for protein aligners", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ShapeArgs {
    /// Shape set from the built-in catalogue
    #[arg(long = "shape-code", default_value_t = 0)]
    shape_code: usize,
    /// Use only the first N shapes of the set (0 = all)
    #[arg(long = "shape-count", default_value_t = 0)]
    shape_count: usize,
    /// First active shape id
    #[arg(long = "shape-from", default_value_t = 0)]
    shape_from: usize,
    /// One past the last active shape id (defaults to the end of the set)
    #[arg(long = "shape-to")]
    shape_to: Option<usize>,
    /// Seed weight; defaults to the weight of the selected shape set
    #[arg(long = "seed-weight")]
    seed_weight: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the active shapes of a catalogue set
    Shapes {
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Map protein sequences onto a reduced alphabet
    Reduce {
        /// Space separated residue groups
        #[arg(short, long, default_value = MURPHY_10)]
        definition: String,
        #[arg(required = true)]
        sequences: Vec<String>,
    },
    /// Six-frame translation of nucleotide sequences
    Translate {
        #[arg(short = 'g', long = "genetic-code", default_value_t = 1)]
        genetic_code: u32,
        #[arg(required = true)]
        sequences: Vec<String>,
    },
    /// Extract spaced seeds from a query, optionally with their neighborhood sizes
    Seeds {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long, value_enum, default_value_t = AlignMode::Blastp)]
        mode: AlignMode,
        #[arg(short = 'g', long = "genetic-code", default_value_t = 1)]
        genetic_code: u32,
        /// Space separated residue groups
        #[arg(short, long, default_value = MURPHY_10)]
        definition: String,
        /// Neighborhood score threshold (BLOSUM62)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<i32>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Protein query (blastp) or nucleotide query (blastx)
        query: String,
    },
    /// Enumerate seed neighborhoods under BLOSUM62
    Neighbors {
        /// Minimum score against the original seed
        #[arg(long, allow_negative_numbers = true)]
        threshold: i32,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Print every neighbor, not only the counts
        #[arg(long)]
        list: bool,
        #[arg(required = true)]
        seeds: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Shapes { shape } => {
            let cfg = run_config(&shape, AlignMode::Blastp, 1, 1)?;
            run_shapes(&cfg)
        }
        Commands::Reduce { definition, sequences } => run_reduce(&definition, &sequences),
        Commands::Translate { genetic_code, sequences } => run_translate(genetic_code, &sequences),
        Commands::Seeds {
            shape,
            mode,
            genetic_code,
            definition,
            threshold,
            threads,
            query,
        } => {
            let cfg = run_config(&shape, mode, genetic_code, threads)?;
            run_seeds(&cfg, &definition, threshold, &query)
        }
        Commands::Neighbors { threshold, threads, list, seeds } => {
            run_neighbors(threshold, threads, list, &seeds)
        }
    }
}

fn run_config(shape: &ShapeArgs, mode: AlignMode, genetic_code: u32, threads: usize) -> Result<RunConfig> {
    let seed_weight = match shape.seed_weight {
        Some(w) => w,
        None => ShapeConfig::new(shape.shape_code, shape.shape_count)?.weight(),
    };
    let cfg = RunConfig {
        seed_weight,
        shape_code: shape.shape_code,
        shape_count: shape.shape_count,
        shape_from: shape.shape_from,
        shape_to: shape.shape_to.unwrap_or(usize::MAX),
        genetic_code,
        mode,
        threads,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn run_shapes(cfg: &RunConfig) -> Result<()> {
    let shapes = cfg.shape_config()?;
    let active = cfg.active_shapes(&shapes)?;
    info!("shape code {} ({}): {} active shapes", cfg.shape_code, shapes.label(), active.len());

    println!("id\tlength\tweight\tpattern");
    for s in active {
        println!("{}\t{}\t{}\t{}", s.id(), s.length(), s.weight(), s);
    }
    Ok(())
}

fn run_reduce(definition: &str, sequences: &[String]) -> Result<()> {
    let reduction = Reduction::new(definition)?;
    info!("reduction '{}': {} classes, {} bits", reduction, reduction.size(), reduction.bit_size());

    for (i, g) in reduction.groups().iter().enumerate() {
        println!("class {}\t{}", i, g);
    }
    for s in sequences {
        let letters = AMINO_ACID
            .encode(s.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid protein sequence '{}': {}", s, e))?;
        println!("{}\t{}", s, format_classes(&reduction.reduce_seq(&letters)));
    }
    Ok(())
}

fn run_translate(genetic_code: u32, sequences: &[String]) -> Result<()> {
    let translator = protseed::translate::Translator::new(genetic_code)?;
    info!("genetic code {}", translator.id());

    for (i, s) in sequences.iter().enumerate() {
        let dna = NUCLEOTIDE
            .encode(s.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid nucleotide sequence '{}': {}", s, e))?;
        for (name, frame) in FRAME_NAMES.iter().zip(translator.translate(&dna)) {
            println!("seq{}\t{}\t{}", i + 1, name, AMINO_ACID.decode(&frame));
        }
    }
    Ok(())
}

fn run_seeds(cfg: &RunConfig, definition: &str, threshold: Option<i32>, query: &str) -> Result<()> {
    let reduction = Reduction::new(definition)?;
    let shapes = cfg.shape_config()?;
    let active = cfg.active_shapes(&shapes)?;

    let contexts: Vec<Vec<Letter>> = if cfg.mode.query_translated() {
        let translator = cfg.translator()?;
        let dna = NUCLEOTIDE
            .encode(query.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid nucleotide query: {}", e))?;
        translator.translate(&dna).into_iter().collect()
    } else {
        vec![AMINO_ACID
            .encode(query.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid protein query: {}", e))?]
    };
    debug_assert_eq!(contexts.len(), cfg.mode.query_contexts());

    // (context, shape id, position, seed)
    let mut hits: Vec<(usize, usize, usize, Seed)> = Vec::new();
    for (ci, ctx) in contexts.iter().enumerate() {
        for shape in active {
            if ctx.len() < shape.length() {
                continue;
            }
            for pos in 0..=ctx.len() - shape.length() {
                if let Some(s) = shape.seed(&ctx[pos..]) {
                    hits.push((ci, shape.id(), pos, s));
                }
            }
        }
    }
    info!(
        "{} contexts, {} active shapes, {} seeds",
        contexts.len(),
        active.len(),
        hits.len()
    );

    let counts: Option<Vec<usize>> = match threshold {
        Some(t) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(cfg.threads).build()?;
            let seeds: Vec<Seed> = hits.iter().map(|h| h.3).collect();
            let all = pool.install(|| seed::neighborhoods(&seeds, t, &Blosum62));
            Some(all.iter().map(Vec::len).collect())
        }
        None => None,
    };

    println!("context\tshape\tpos\tseed\treduced{}", if counts.is_some() { "\tneighbors" } else { "" });
    for (i, (ci, sid, pos, s)) in hits.iter().enumerate() {
        let context = if cfg.mode.query_translated() { FRAME_NAMES[*ci] } else { "." };
        let reduced = format_classes(s.reduce(&reduction).as_slice());
        match &counts {
            Some(c) => println!("{}\t{}\t{}\t{}\t{}\t{}", context, sid, pos, s, reduced, c[i]),
            None => println!("{}\t{}\t{}\t{}\t{}", context, sid, pos, s, reduced),
        }
    }
    Ok(())
}

fn run_neighbors(threshold: i32, threads: usize, list: bool, seeds: &[String]) -> Result<()> {
    if threads == 0 {
        anyhow::bail!("threads must be at least 1");
    }
    let parsed = seeds
        .iter()
        .map(|s| {
            s.parse::<Seed>()
                .map_err(|e| anyhow::anyhow!("invalid seed '{}': {}", s, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let all = pool.install(|| seed::neighborhoods(&parsed, threshold, &Blosum62));
    info!(
        "threshold {}: {} seeds, {} neighbors (alphabet size {})",
        threshold,
        parsed.len(),
        all.iter().map(Vec::len).sum::<usize>(),
        Blosum62.alphabet_size()
    );

    for (s, neighbors) in parsed.iter().zip(&all) {
        println!("{}\t{}\t{}", s, s.self_score(&Blosum62), neighbors.len());
        if list {
            for n in neighbors {
                println!("\t{}\t{}", n, s.score(n, &Blosum62));
            }
        }
    }
    Ok(())
}

fn format_classes(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(|&l| if l as usize >= AMINO_ACID_COUNT { "*".to_string() } else { l.to_string() })
        .collect::<Vec<_>>()
        .join("-")
}
