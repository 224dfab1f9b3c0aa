// stacksort: two-stack sorting solver with time-travel playback

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use stacksort::permutation::{Permutation, PermutationSource};
use stacksort::playback::{PlaybackConfig, PlaybackEngine};
use stacksort::solver::constants::{
    DEFAULT_LARGE_RANGE, DEFAULT_RANGE_THRESHOLD, DEFAULT_SMALL_RANGE,
};
use stacksort::solver::{Solver, SolverConfig};
use stacksort::stacks::Operation;
use stacksort::ui::App;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "stacksort",
    version,
    about = "Sort a permutation with two stacks and replay the operations"
)]
struct Cli {
    /// Length of the random permutation to sort
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Explicit values to sort, comma separated (overrides --size)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Initial playback rate in operations per second
    #[arg(long, default_value_t = 10.0)]
    rate: f64,

    /// Bucket width for inputs up to --range-threshold elements
    #[arg(long, default_value_t = DEFAULT_SMALL_RANGE)]
    small_range: usize,

    /// Bucket width for larger inputs
    #[arg(long, default_value_t = DEFAULT_LARGE_RANGE)]
    large_range: usize,

    /// Largest input that uses --small-range
    #[arg(long, default_value_t = DEFAULT_RANGE_THRESHOLD)]
    range_threshold: usize,

    /// Print the operation log to stdout and exit (no TUI)
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let source = match &cli.values {
        Some(values) => PermutationSource::Fixed {
            values: values.clone(),
        },
        None => PermutationSource::Random { size: cli.size },
    };

    // Explicit values are sorted in the order given; random ones are drawn now
    let permutation = match &cli.values {
        Some(values) => Permutation::from_values(values),
        None => source.draw(&mut rng),
    };
    let permutation = match permutation {
        Ok(permutation) => permutation,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    };

    let solver = Solver::new(SolverConfig {
        small_range: cli.small_range,
        large_range: cli.large_range,
        range_threshold: cli.range_threshold,
    });

    eprintln!("Solving {} elements...", permutation.len());
    let log = solver.solve(&permutation);
    eprintln!("Generated {} operations.", log.len());

    if cli.print {
        print!("{}", log);
        let counts = log.counts();
        let summary: Vec<String> = Operation::ALL
            .iter()
            .filter_map(|op| counts.get(op).map(|n| format!("{}={}", op, n)))
            .collect();
        if !summary.is_empty() {
            eprintln!("Breakdown: {}", summary.join(" "));
        }
        if !log.replay(permutation.elements()).is_solved() {
            eprintln!("Error: replay did not sort the input");
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut engine = PlaybackEngine::with_config(
        permutation.into_elements(),
        log,
        PlaybackConfig::default(),
    );
    // Nothing is playing yet, so this only clamps and stores the rate
    engine.set_rate(cli.rate, std::time::Instant::now());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine, solver, source, rng);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
