use anyhow::{Context, Result};
use catalog::{Catalog, Color, Item, Size};
use clap::Parser;
use colored::Colorize;
use predicates::{
    BetterFilter, ColorSpecification, LegacyFilter, SizeSpecification, Specification,
    SpecificationExt,
};
use std::io::{self, IsTerminal, Write};

/// spec-filter - filter a product catalog with composable specifications
#[derive(Parser)]
#[command(name = "spec-filter")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    /// Only show products of this color (red, green, blue)
    #[arg(long)]
    color: Option<Color>,

    /// Only show products of this size (small, medium, large)
    #[arg(long)]
    size: Option<Size>,

    /// Evaluate the query in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    // Initialize tracing; stderr keeps stdout in the fixed report format
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::sample();
    tracing::info!("Loaded catalog with {} items", catalog.len());

    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let mut report = Report::new(stdout.lock(), styled);

    let written = match build_query(cli.color, cli.size) {
        Some(spec) => run_query(&mut report, &catalog, spec.as_ref(), cli.parallel),
        None => {
            if cli.parallel {
                tracing::warn!("--parallel has no effect without --color or --size");
            }
            run_demo(&mut report, &catalog)
        }
    };
    written.context("Failed to write report to stdout")?;

    Ok(())
}

/// Combine the command-line criteria into one specification.
///
/// Size comes first so the description reads "large and blue".
fn build_query(color: Option<Color>, size: Option<Size>) -> Option<Box<dyn Specification>> {
    match (color, size) {
        (Some(color), Some(size)) => Some(
            SizeSpecification::new(size)
                .and(ColorSpecification::new(color))
                .boxed(),
        ),
        (Some(color), None) => Some(ColorSpecification::new(color).boxed()),
        (None, Some(size)) => Some(SizeSpecification::new(size).boxed()),
        (None, None) => None,
    }
}

/// Print the legacy filter next to the specification-based one.
fn run_demo<W: Write>(report: &mut Report<W>, catalog: &Catalog) -> io::Result<()> {
    let legacy = LegacyFilter::new();
    let green_old = legacy.filter_by_color(catalog.items(), Color::Green);
    report.section("Green products (old):", &green_old, Color::Green.as_str())?;

    let filter = BetterFilter::new();
    let green = ColorSpecification::new(Color::Green);
    report.section("Green products (new):", &filter.filter(catalog, &green), &green.describe())?;

    let large_blue = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
    report.section(
        "Large blue items:",
        &filter.filter(catalog, &large_blue),
        &large_blue.describe(),
    )
}

fn run_query<W: Write>(
    report: &mut Report<W>,
    catalog: &Catalog,
    spec: &dyn Specification,
    parallel: bool,
) -> io::Result<()> {
    let filter = BetterFilter::new();
    let matches = if parallel {
        filter.par_filter(catalog.items(), spec)
    } else {
        filter.filter(catalog, spec)
    };
    report.section("Matching products:", &matches, &spec.describe())
}

/// Writes report sections: a header, then one line per item.
struct Report<W> {
    out: W,
    styled: bool,
}

impl<W: Write> Report<W> {
    fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    fn section(&mut self, header: &str, items: &[&Item], description: &str) -> io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}", header.bold())?;
        } else {
            writeln!(self.out, "{}", header)?;
        }
        for item in items {
            let name = if self.styled {
                item.name().green().to_string()
            } else {
                item.name().to_string()
            };
            writeln!(self.out, "- {} is {}", name, description)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: impl FnOnce(&mut Report<Vec<u8>>) -> io::Result<()>) -> String {
        let mut report = Report::new(Vec::new(), false);
        run(&mut report).unwrap();
        String::from_utf8(report.out).unwrap()
    }

    #[test]
    fn test_demo_output() {
        let catalog = Catalog::sample();
        let output = render(|report| run_demo(report, &catalog));

        assert_eq!(
            output,
            "Green products (old):\n\
             - Apple is green\n\
             - Tree is green\n\
             Green products (new):\n\
             - Apple is green\n\
             - Tree is green\n\
             Large blue items:\n\
             - House is large and blue\n"
        );
    }

    #[test]
    fn test_query_output() {
        let catalog = Catalog::sample();
        let spec = build_query(Some(Color::Blue), Some(Size::Large)).unwrap();

        for parallel in [false, true] {
            let output = render(|report| run_query(report, &catalog, spec.as_ref(), parallel));
            assert_eq!(output, "Matching products:\n- House is large and blue\n");
        }
    }

    #[test]
    fn test_query_without_matches_prints_header_only() {
        let catalog = Catalog::sample();
        let spec = build_query(Some(Color::Red), None).unwrap();

        let output = render(|report| run_query(report, &catalog, spec.as_ref(), false));
        assert_eq!(output, "Matching products:\n");
    }

    #[test]
    fn test_build_query() {
        assert!(build_query(None, None).is_none());
        assert_eq!(build_query(None, Some(Size::Small)).unwrap().describe(), "small");
        assert_eq!(build_query(Some(Color::Green), None).unwrap().describe(), "green");
    }

    #[test]
    fn test_cli_parses_attributes() {
        let cli = Cli::try_parse_from(["spec-filter", "--color", "Blue", "--size", "large"]).unwrap();
        assert_eq!(cli.color, Some(Color::Blue));
        assert_eq!(cli.size, Some(Size::Large));
        assert!(!cli.parallel);

        assert!(Cli::try_parse_from(["spec-filter", "--color", "purple"]).is_err());
        assert!(Cli::try_parse_from(["spec-filter"]).unwrap().color.is_none());
    }
}
