use abacus_core::calculus::{self, Concavity, Direction};
use abacus_core::{algebra, polynomial, sequences, stats};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::f64::consts::PI;

#[derive(Parser)]
#[command(
    name = "abacus",
    about = "Worked examples for the Abacus numeric engines",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Derivatives, integrals, limits, critical points.
    Calculus,
    /// Quadratics, polynomials, gcd/lcm, sequences.
    Algebra,
    /// Descriptive statistics and combinatorics.
    Stats,
    /// Every demo section in order.
    All,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::All);
    tracing::debug!(?command, "running demo");

    match command {
        Commands::Calculus => demo_calculus()?,
        Commands::Algebra => demo_algebra()?,
        Commands::Stats => demo_stats()?,
        Commands::All => {
            demo_calculus()?;
            demo_algebra()?;
            demo_stats()?;
        }
    }
    Ok(())
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(60));
}

fn demo_calculus() -> Result<()> {
    banner("CALCULUS");

    section("1. DERIVATIVES");
    let square = |x: f64| x.powi(2);
    let x = 3.0;
    println!("f(x) = x²");
    println!(
        "f'({x}) ≈ {:.6}",
        calculus::derivative(&square, x, calculus::DEFAULT_STEP)
    );
    println!("Analytical: f'({x}) = 2x = {}", 2.0 * x);

    let sine = |x: f64| x.sin();
    let x = PI / 4.0;
    println!("\nf(x) = sin(x)");
    println!(
        "f'(π/4) ≈ {:.6}",
        calculus::derivative(&sine, x, calculus::DEFAULT_STEP)
    );
    println!("Analytical: f'(π/4) = cos(π/4) = {:.6}", x.cos());

    section("2. INTEGRALS");
    println!(
        "∫₀¹ x² dx ≈ {:.6}",
        calculus::integral(&square, 0.0, 1.0, calculus::DEFAULT_INTERVALS)
    );
    println!("Analytical: [x³/3]₀¹ = 1/3 = {:.6}", 1.0 / 3.0);
    println!(
        "\n∫₀^π sin(x) dx ≈ {:.6}",
        calculus::integral(&sine, 0.0, PI, calculus::DEFAULT_INTERVALS)
    );
    println!("Analytical: [-cos(x)]₀^π = 2.000000");

    section("3. SECOND DERIVATIVES (Concavity)");
    let cubic = |x: f64| x.powi(3) - 3.0 * x.powi(2);
    let x = 1.0;
    let curvature = calculus::second_derivative(&cubic, x, calculus::DEFAULT_STEP);
    println!("f(x) = x³ - 3x²");
    println!("f''({x}) ≈ {curvature:.6}");
    println!("Analytical: f''(x) = 6x - 6, f''(1) = 0");
    let label = match calculus::concavity(&cubic, x, calculus::DEFAULT_STEP, 0.1) {
        Concavity::Flat => "Inflection Point",
        Concavity::ConcaveUp | Concavity::ConcaveDown => "Curved",
    };
    println!("Concavity at x={x}: {label}");

    section("4. CRITICAL POINTS");
    let depressed = |x: f64| x.powi(3) - 3.0 * x;
    let critical = calculus::find_critical_points(&depressed, -2.0, 2.0, calculus::DEFAULT_GRID);
    let rounded: Vec<f64> = critical.iter().map(|&x| (x * 100.0).round() / 100.0).collect();
    println!("f(x) = x³ - 3x");
    println!("Critical points in [-2, 2]: {rounded:?}");
    println!("Analytical: f'(x) = 3x² - 3 = 0 → x = ±1");

    section("5. LIMITS");
    let sinc = |x: f64| x.sin() / x;
    println!("f(x) = sin(x)/x");
    println!(
        "lim x→0 ≈ {:.6}",
        calculus::limit(&sinc, 0.0, Direction::Both, calculus::DEFAULT_EPSILON)?
    );
    let reciprocal = |x: f64| 1.0 / x;
    println!("\nf(x) = 1/x");
    match calculus::limit(&reciprocal, 0.0, Direction::Both, calculus::DEFAULT_EPSILON) {
        Ok(value) => println!("lim x→0 ≈ {value:.6}"),
        Err(err) => println!("lim x→0: {err}"),
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}

fn demo_algebra() -> Result<()> {
    banner("ALGEBRA");

    section("1. QUADRATIC FORMULA");
    let (a, b, c) = (1.0, -5.0, 6.0);
    println!("Equation: {a}x² + ({b})x + {c} = 0");
    print_roots(algebra::quadratic_formula(a, b, c)?);

    let (a, b, c) = (1.0, 0.0, 4.0);
    println!("\nEquation: {a}x² + {c} = 0");
    print_roots(algebra::quadratic_formula(a, b, c)?);

    section("2. QUADRATIC FACTORING");
    println!("x² - 5x + 6");
    match algebra::factor_quadratic(1, -5, 6) {
        Some(((m, n), (p, q))) => {
            println!("Factors: ({}x + {n})({}x + {q})", m, p);
        }
        None => println!("No integer factorization"),
    }

    section("3. POLYNOMIAL EVALUATION");
    let coeffs = [1.0, 2.0, 3.0];
    let x = 2.0;
    println!("P(x) = 3x² + 2x + 1");
    println!("P({x}) = {}", polynomial::evaluate(&coeffs, x));

    section("4. POLYNOMIAL DERIVATIVE");
    let coeffs = [5.0, 0.0, 3.0, 2.0];
    println!("P(x) = 2x³ + 3x² + 5");
    println!("P'(x) coefficients: {:?}", polynomial::derivative(&coeffs));
    println!("P'(x) = 6x² + 6x");

    section("5. GCD AND LCM");
    let (a, b) = (48_i64, 18);
    println!("GCD({a}, {b}) = {}", algebra::gcd(a, b));
    println!("LCM({a}, {b}) = {}", algebra::lcm(a, b));

    section("6. ARITHMETIC SEQUENCE");
    let (a1, d, n) = (3.0, 5.0, 8);
    let seq = sequences::arithmetic_sequence(a1, d, n);
    println!("First term: {a1}, Common difference: {d}");
    println!("First {n} terms: {seq:?}");
    println!("Sum: {}", sequences::arithmetic_sum(a1, seq[seq.len() - 1], n));

    section("7. GEOMETRIC SEQUENCE");
    let (a1, r, n) = (2.0, 3.0, 6);
    let seq = sequences::geometric_sequence(a1, r, n);
    println!("First term: {a1}, Common ratio: {r}");
    println!("First {n} terms: {seq:?}");
    println!("Sum: {}", sequences::geometric_sum(a1, r, n));

    println!("\n{}", "=".repeat(60));
    Ok(())
}

fn print_roots(roots: algebra::QuadraticRoots) {
    match roots {
        algebra::QuadraticRoots::Real(x1, x2) => {
            println!("Solutions: x₁ = {x1:.6}, x₂ = {x2:.6}");
        }
        algebra::QuadraticRoots::Complex(z1, z2) => {
            println!(
                "Solutions: x₁ = {:.6} + {:.6}i, x₂ = {:.6} - {:.6}i",
                z1.re, z1.im, z2.re, -z2.im
            );
        }
    }
}

fn demo_stats() -> Result<()> {
    banner("STATISTICS");

    let data = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 15.0, 18.0];

    section("1. CENTRAL TENDENCY");
    println!("Data: {data:?}");
    println!("Mean: {:.2}", stats::mean(&data)?);
    println!("Median: {:.2}", stats::median(&data)?);
    println!("Mode: {:?}", stats::mode(&data));

    section("2. MEASURES OF DISPERSION");
    println!("Sample Variance: {:.2}", stats::variance(&data, true)?);
    println!("Sample Standard Deviation: {:.2}", stats::std_dev(&data, true)?);

    section("3. Z-SCORES");
    let value = 25.0;
    let z = stats::z_score(value, stats::mean(&data)?, stats::std_dev(&data, true)?)?;
    println!("Value: {value}");
    println!("Z-score: {z:.2}");
    println!(
        "Interpretation: {value} is {:.2} standard deviations {} the mean",
        z.abs(),
        if z > 0.0 { "above" } else { "below" }
    );

    section("4. CORRELATION");
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 4.0, 5.0, 4.0, 5.0];
    let r = stats::correlation(&x, &y)?;
    println!("X: {x:?}");
    println!("Y: {y:?}");
    println!("Pearson correlation coefficient: {r:.4}");
    let strength = if r.abs() > 0.7 {
        "strong"
    } else if r.abs() > 0.3 {
        "moderate"
    } else {
        "weak"
    };
    let direction = if r > 0.0 { "positive" } else { "negative" };
    println!("Interpretation: {strength} {direction} correlation");

    section("5. LINEAR REGRESSION");
    let fit = stats::linear_regression(&x, &y)?;
    println!("Regression line: y = {:.2}x + {:.2}", fit.slope, fit.intercept);
    println!("Predicted y when x=6: {:.2}", fit.predict(6.0));

    section("6. COMBINATORICS");
    let (n, r) = (10, 3);
    println!("Combination C({n},{r}): {}", stats::combination(n, r)?);
    println!("Permutation P({n},{r}): {}", stats::permutation(n, r)?);

    section("7. FACTORIAL");
    for i in [0, 1, 5, 10] {
        println!("{i}! = {}", stats::factorial(i)?);
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::CommandFactory;
    use clap::Parser;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["abacus", "stats"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Stats));

        let cli = Cli::try_parse_from(["abacus"]).unwrap();
        assert_eq!(cli.command, None);
    }
}
