use std::time::Instant;

use anyhow::{bail, Context, Result};
use binfield::util::poly_string;
use binfield::{Element, Field, FieldConfig, StrategyHint};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "binfield", about = "GF(2^m) binary extension field toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Construct a field and print its parameters.
    Info {
        /// Extension degree m (1..=63).
        degree: u32,
        /// Bit-packed modulus (decimal, 0x… or 0b…); canonical if omitted.
        #[arg(long)]
        modulus: Option<String>,
        /// Arithmetic strategy.
        #[arg(long, value_enum, default_value = "auto")]
        strategy: StrategyArg,
    },
    /// Evaluate a single field operation.
    Eval {
        /// Extension degree m (1..=63).
        degree: u32,
        /// Operation to perform.
        #[arg(value_enum)]
        op: OpArg,
        /// First operand.
        a: String,
        /// Second operand (unused for inv).
        b: Option<String>,
        /// Bit-packed modulus (decimal, 0x… or 0b…); canonical if omitted.
        #[arg(long)]
        modulus: Option<String>,
    },
    /// Measure operation throughput with seeded random operands.
    Throughput {
        /// Extension degree m (1..=63).
        degree: u32,
        /// Number of operations per measured loop.
        #[arg(long, default_value_t = 1_000_000)]
        samples: u64,
        /// Seed for the operand generator.
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Arithmetic strategy.
        #[arg(long, value_enum, default_value = "auto")]
        strategy: StrategyArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum StrategyArg {
    Auto,
    Direct,
    Table,
}

impl From<StrategyArg> for StrategyHint {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => StrategyHint::Auto,
            StrategyArg::Direct => StrategyHint::Direct,
            StrategyArg::Table => StrategyHint::Table,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OpArg {
    Add,
    Mul,
    Div,
    Inv,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            degree,
            modulus,
            strategy,
        } => run_info(degree, modulus, strategy)?,
        Commands::Eval {
            degree,
            op,
            a,
            b,
            modulus,
        } => run_eval(degree, op, a, b, modulus)?,
        Commands::Throughput {
            degree,
            samples,
            seed,
            strategy,
        } => run_throughput(degree, samples, seed, strategy)?,
    }

    Ok(())
}

fn build_field(degree: u32, modulus: Option<String>, strategy: StrategyArg) -> Result<Field> {
    let mut config = match modulus {
        Some(text) => {
            let poly = parse_poly(&text)
                .with_context(|| format!("invalid modulus argument '{}'", text))?;
            FieldConfig::with_modulus(degree, poly)
        }
        None => FieldConfig::auto(degree),
    };
    config.strategy = strategy.into();

    Field::create(&config).with_context(|| format!("failed to construct GF(2^{})", degree))
}

fn run_info(degree: u32, modulus: Option<String>, strategy: StrategyArg) -> Result<()> {
    let field = build_field(degree, modulus, strategy)?;

    println!("field          GF(2^{})", field.degree());
    println!("cardinality    {}", field.cardinality());
    println!("characteristic {}", field.characteristic());
    println!("group order    {}", field.order());
    println!(
        "modulus        {:#x} = {}",
        field.modulus(),
        poly_string(field.modulus())
    );
    println!(
        "strategy       {}",
        if field.is_table_backed() {
            "table"
        } else {
            "direct"
        }
    );
    if let Some(generator) = field.generator() {
        println!("generator      {:#x} = {}", generator, poly_string(generator));
    }

    Ok(())
}

fn run_eval(
    degree: u32,
    op: OpArg,
    a: String,
    b: Option<String>,
    modulus: Option<String>,
) -> Result<()> {
    let field = build_field(degree, modulus, StrategyArg::Auto)?;

    let a = parse_element(&field, &a)?;

    let result = match (op, b) {
        (OpArg::Inv, _) => field.inv(a)?,
        (OpArg::Add, Some(text)) => field.add(a, parse_element(&field, &text)?),
        (OpArg::Mul, Some(text)) => field.mul(a, parse_element(&field, &text)?),
        (OpArg::Div, Some(text)) => field.div(a, parse_element(&field, &text)?)?,
        (_, None) => bail!("operation requires a second operand"),
    };

    println!("{:#x} = {}", result, poly_string(result));
    Ok(())
}

/// Pool size for throughput operands, matching the benchmark harness the
/// engine was measured with.
const OPERAND_POOL: usize = 10_000;

fn run_throughput(degree: u32, samples: u64, seed: u64, strategy: StrategyArg) -> Result<()> {
    let field = build_field(degree, None, strategy)?;

    println!(
        "GF(2^{}) [order {}], strategy {}, {} operations per loop, seed {}",
        field.degree(),
        field.cardinality(),
        if field.is_table_backed() {
            "table"
        } else {
            "direct"
        },
        samples,
        seed
    );

    // Seeded generator owned by the harness; the engine itself never
    // holds randomness. Operands are drawn from [1, 2^m) so division and
    // inversion never see the zero element.
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pool: Vec<Element> = (0..OPERAND_POOL)
        .map(|_| rng.gen_range(1..field.cardinality()))
        .collect();

    report("add", samples, measure(samples, &pool, |a, b| field.add(a, b)));
    report("mul", samples, measure(samples, &pool, |a, b| field.mul(a, b)));
    report("div", samples, measure(samples, &pool, |a, b| {
        field.div(a, b).expect("pool operands are nonzero")
    }));
    report("inv", samples, measure(samples, &pool, |a, _| {
        field.inv(a).expect("pool operands are nonzero")
    }));

    Ok(())
}

fn measure(samples: u64, pool: &[Element], op: impl Fn(Element, Element) -> Element) -> f64 {
    let start = Instant::now();
    for i in 0..samples as usize {
        let a = pool[i % pool.len()];
        let b = pool[(i + 1) % pool.len()];
        std::hint::black_box(op(a, b));
    }
    start.elapsed().as_nanos() as f64
}

fn report(name: &str, samples: u64, total_ns: f64) {
    let per_op = total_ns / samples as f64;
    let per_sec = 1e9 / per_op;
    println!(
        "{:<4} {:>10.1} ms total, {:>8.2} ns/op, {:>12.0} ops/sec",
        name,
        total_ns / 1e6,
        per_op,
        per_sec
    );
}

fn parse_poly(text: &str) -> Result<u64> {
    let text = text.trim();
    let value = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)?
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)?
    } else {
        text.parse::<u64>()?
    };
    Ok(value)
}

fn parse_element(field: &Field, text: &str) -> Result<Element> {
    let value = parse_poly(text).with_context(|| format!("invalid element '{}'", text))?;
    if value >= field.cardinality() {
        bail!(
            "element {:#x} out of range for GF(2^{})",
            value,
            field.degree()
        );
    }
    Ok(value)
}
