use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use cs_core::rng::RngHandle;
use cs_society::{
    beta_length_society, fixed_length_society, random_society, society_to_json, uniform_society,
};

use super::emit;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Name given to the generated society.
    #[arg(long, default_value = "generated")]
    pub name: String,
    /// Output file; stdout when absent.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,
    #[command(subcommand)]
    pub kind: GenerateKind,
}

#[derive(Subcommand, Debug)]
pub enum GenerateKind {
    /// Hardin's uniform society U(n, h) on a circle of circumference n.
    Uniform {
        /// Number of arcs.
        #[arg(long)]
        n: usize,
        /// Nominal arc length.
        #[arg(long)]
        h: f64,
        /// Amount trimmed from every arc.
        #[arg(long, default_value_t = 0.5)]
        epsilon: f64,
    },
    /// Arcs of one fixed length with uniformly placed left endpoints.
    Fixed {
        /// Number of arcs.
        #[arg(long)]
        n: usize,
        /// Circumference of the circle.
        #[arg(long, default_value_t = 1.0)]
        modulus: f64,
        /// Arc length as a fraction of the circumference.
        #[arg(long)]
        p: f64,
        /// Deterministic seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Arcs with independently uniform endpoints.
    Random {
        /// Number of arcs.
        #[arg(long)]
        n: usize,
        /// Circumference of the circle.
        #[arg(long, default_value_t = 1.0)]
        modulus: f64,
        /// Deterministic seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Uniform left endpoints with Beta(a, b) distributed arc lengths.
    Beta {
        /// Number of arcs.
        #[arg(long)]
        n: usize,
        /// Circumference of the circle.
        #[arg(long, default_value_t = 1.0)]
        modulus: f64,
        /// First shape parameter.
        #[arg(long)]
        a: f64,
        /// Second shape parameter.
        #[arg(long)]
        b: f64,
        /// Deterministic seed.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let society = match &args.kind {
        GenerateKind::Uniform { n, h, epsilon } => {
            uniform_society(args.name.as_str(), *n, *h, *epsilon)?
        }
        GenerateKind::Fixed {
            n,
            modulus,
            p,
            seed,
        } => {
            let mut rng = RngHandle::from_seed(*seed);
            fixed_length_society(args.name.as_str(), *n, *modulus, *p, &mut rng)?
        }
        GenerateKind::Random { n, modulus, seed } => {
            let mut rng = RngHandle::from_seed(*seed);
            random_society(args.name.as_str(), *n, *modulus, &mut rng)?
        }
        GenerateKind::Beta {
            n,
            modulus,
            a,
            b,
            seed,
        } => {
            let mut rng = RngHandle::from_seed(*seed);
            beta_length_society(args.name.as_str(), *n, *modulus, *a, *b, &mut rng)?
        }
    };
    emit(args.out.as_deref(), &society_to_json(&society)?)
}
