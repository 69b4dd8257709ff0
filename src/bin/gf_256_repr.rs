//// Here is a simple tool to show the various representations of a number, both as a polynomial
//// in `GF(2)[x]` and reduced into `GF(2^8)`.
////
//// Give it a second number and it also shows the sum and product in both worlds. The `GF(2^8)`
//// product insists the second number is already a field element (at most 8 bits).
////
//// Set `RUST_LOG=galois_bits=trace` to watch reductions happen.
use anyhow::Result;
use clap::Parser;
use galois_bits::{BinaryPolynomial, Field8Element, FieldElement};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gf_256_repr")]
#[command(about = "show binary, hex and polynomial forms in GF(2)[x] and GF(2^8)", long_about = None)]
struct Args {
  /// First operand
  a: u64,

  /// Optional second operand for sum and product
  b: Option<u64>,

  /// Use x^k instead of xk for exponents
  #[arg(long)]
  caret: bool,
}

fn poly(args: &Args, element: &impl BinaryPolynomial) -> String {
  if args.caret {
    format!("{:#}", element)
  } else {
    format!("{}", element)
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "galois_bits=info".into()),
    )
    .init();

  let args = Args::parse();
  info!(a = args.a, b = ?args.b, "gf_256_repr");

  let a = FieldElement::new(args.a);
  let a8 = Field8Element::new(args.a);

  println!("Using GF(2)[x]:");
  println!("  Number:     {}", args.a);
  println!("  Binary:     {:#b}", a);
  println!("  Hex:        {}", a.to_hex_string("0x"));
  println!("  Polynomial: {}", poly(&args, &a));
  println!("Using GF(2^8):");
  println!("  Binary:     {:#b}", a8);
  println!("  Hex:        {}", a8.to_hex_string("0x"));
  println!("  Polynomial: {}", poly(&args, &a8));

  if let Some(b) = args.b {
    let sum = a.add(b);
    let product = a.multiply(b);
    let product8 = a8.multiply(b)?;

    println!("With {}:", b);
    println!("  GF(2)[x] sum:     {} ({})", poly(&args, &sum), sum.to_hex_string("0x"));
    println!("  GF(2)[x] product: {} ({})", poly(&args, &product), product.to_hex_string("0x"));
    println!("  GF(2^8) product:  {} ({})", poly(&args, &product8), product8.to_hex_string("0x"));
  }

  Ok(())
}
