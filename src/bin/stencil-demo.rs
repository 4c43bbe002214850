//! Demo driver comparing the recursive executor against the iterative
//! reference on synthetic grids (`main.cpp`'s `REC`/`IT`/`ALL` modes,
//! minus the image I/O — out of scope per spec section 6).

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};

use stencil::config::RuntimeMode;
use stencil::kernels::{Blur3, Blur5, Color, CopyKernel, Life};
use stencil::stopwatch::Stopwatch;
use stencil::{reference, run, BufferSet, Kernel};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Rec,
    It,
    All,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KernelChoice {
    Copy,
    Color,
    Blur3,
    Blur5,
    Life,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    Sequential,
    Threaded,
    WorkStealing,
}

impl From<Backend> for RuntimeMode {
    fn from(b: Backend) -> Self {
        match b {
            Backend::Sequential => RuntimeMode::Sequential,
            Backend::Threaded => RuntimeMode::Threaded,
            Backend::WorkStealing => RuntimeMode::WorkStealing,
        }
    }
}

/// Run the cache-oblivious recursive executor and/or the naive
/// iterative reference over a synthetic grid, and report timings.
#[derive(Parser)]
#[command(name = "stencil-demo", version, about = "Recursive stencil executor demo")]
struct Cli {
    /// Which executor(s) to run
    #[arg(value_enum, default_value = "all")]
    mode: Mode,
    /// Which example kernel to evaluate
    #[arg(long, value_enum, default_value = "blur5")]
    kernel: KernelChoice,
    /// Parallel backend for the recursive executor
    #[arg(long, value_enum, default_value = "work-stealing")]
    backend: Backend,
    /// Grid width
    #[arg(long, default_value_t = 256)]
    width: usize,
    /// Grid height
    #[arg(long, default_value_t = 256)]
    height: usize,
    /// Number of time steps
    #[arg(long, default_value_t = 100)]
    steps: i64,
    /// Seed for the synthetic grid's random fill
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let do_rec = matches!(cli.mode, Mode::Rec | Mode::All);
    let do_it = matches!(cli.mode, Mode::It | Mode::All);

    match cli.kernel {
        KernelChoice::Copy => demo_u8(&cli, do_rec, do_it, &CopyKernel::new(2)),
        KernelChoice::Color => demo_u8(&cli, do_rec, do_it, &Color::new(2)),
        KernelChoice::Life => demo_u8(&cli, do_rec, do_it, &Life),
        KernelChoice::Blur3 => demo_f64(&cli, do_rec, do_it, &Blur3),
        KernelChoice::Blur5 => demo_f64(&cli, do_rec, do_it, &Blur5),
    }
}

fn random_u8_grid(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..width * height).map(|_| rng.gen()).collect()
}

fn demo_u8(cli: &Cli, do_rec: bool, do_it: bool, kernel: &dyn Kernel<u8>) {
    let data = random_u8_grid(cli.width, cli.height, cli.seed);
    let dims = vec![cli.width, cli.height];
    let mut sw = Stopwatch::new();

    if do_rec {
        let mut buf = BufferSet::new(dims.clone(), &data);
        sw.start("recursive");
        run(&mut buf, kernel, cli.steps, cli.backend.into()).expect("demo grid is well-formed");
        sw.stop("recursive");
        println!("recursive: {:?}", sw.elapsed("recursive"));
    }

    if do_it {
        let mut buf = BufferSet::new(dims, &data);
        sw.start("iterative");
        reference::run_iterative(&mut buf, kernel, cli.steps);
        sw.stop("iterative");
        println!("iterative: {:?}", sw.elapsed("iterative"));
    }
}

fn demo_f64(cli: &Cli, do_rec: bool, do_it: bool, kernel: &dyn Kernel<f64>) {
    let ints = random_u8_grid(cli.width, cli.height, cli.seed);
    let data: Vec<f64> = ints.iter().map(|&v| v as f64).collect();
    let dims = vec![cli.width, cli.height];
    let mut sw = Stopwatch::new();

    if do_rec {
        let mut buf = BufferSet::new(dims.clone(), &data);
        sw.start("recursive");
        run(&mut buf, kernel, cli.steps, cli.backend.into()).expect("demo grid is well-formed");
        sw.stop("recursive");
        println!("recursive: {:?}", sw.elapsed("recursive"));
    }

    if do_it {
        let mut buf = BufferSet::new(dims, &data);
        sw.start("iterative");
        reference::run_iterative(&mut buf, kernel, cli.steps);
        sw.stop("iterative");
        println!("iterative: {:?}", sw.elapsed("iterative"));
    }
}
