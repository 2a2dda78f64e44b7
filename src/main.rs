use clap::{Parser, ValueEnum};
use inktrap::ufo::{inktrap_ufo, Selection};
use inktrap::{InktrapParameters, InktrapStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inktrap", about = "Add ink traps to sharp corners of a UFO glyph")]
struct Cli {
    /// UFO font to edit in place
    #[arg(long)]
    ufo: PathBuf,

    /// Glyph name
    #[arg(short, long)]
    glyph: String,

    /// Node to trap, as CONTOUR:NODE (repeatable)
    #[arg(short, long = "node", value_parser = parse_node, required_unless_present = "all_corners")]
    nodes: Vec<(usize, usize)>,

    /// Trap every sharp corner between two on-curve neighbors
    #[arg(long, conflicts_with = "nodes")]
    all_corners: bool,

    /// Diameter of the circle pressed into the corner, in font units
    #[arg(short, long, default_value_t = inktrap::DEFAULT_APERTURE)]
    aperture: f64,

    /// Minimum corner sharpness (0 = trap every corner that fits)
    #[arg(short, long, default_value_t = inktrap::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Corner displacement factor (negative pulls inwards)
    #[arg(short, long, default_value_t = inktrap::DEFAULT_DEPTH, allow_hyphen_values = true)]
    depth: f64,

    /// Notch shape
    #[arg(short, long, value_enum, default_value_t = InktrapStyle::default().into())]
    style: Style,

    /// Plateau width for the flat-top style (0 = pointed)
    #[arg(long, default_value_t = inktrap::DEFAULT_FLAT_TOP_SIZE)]
    flat_top_size: f64,

    /// Report what would change without saving
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Style {
    Straight,
    Curved,
    FlatTop,
}

impl From<Style> for InktrapStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Straight => InktrapStyle::Straight,
            Style::Curved => InktrapStyle::Curved,
            Style::FlatTop => InktrapStyle::FlatTop,
        }
    }
}

impl From<InktrapStyle> for Style {
    fn from(style: InktrapStyle) -> Self {
        match style {
            InktrapStyle::Straight => Style::Straight,
            InktrapStyle::Curved => Style::Curved,
            InktrapStyle::FlatTop => Style::FlatTop,
        }
    }
}

impl Cli {
    fn parameters(&self) -> InktrapParameters {
        InktrapParameters {
            aperture: self.aperture,
            threshold: self.threshold,
            depth: self.depth,
            style: self.style.into(),
            flat_top_size: self.flat_top_size,
        }
    }

    fn selection(&self) -> Selection {
        if self.all_corners {
            Selection::AllCorners
        } else {
            Selection::Nodes(self.nodes.clone())
        }
    }
}

fn parse_node(s: &str) -> Result<(usize, usize), String> {
    let (contour, node) = s
        .split_once(':')
        .ok_or_else(|| format!("expected CONTOUR:NODE, got '{s}'"))?;
    let contour = contour.trim().parse().map_err(|e| format!("contour index: {e}"))?;
    let node = node.trim().parse().map_err(|e| format!("node index: {e}"))?;
    Ok((contour, node))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let params = cli.parameters();
    params.validate()?;

    eprintln!();
    eprintln!("  inktrap \u{00b7} {}", cli.glyph);
    eprintln!();

    let outcomes = inktrap_ufo(&cli.ufo, &cli.glyph, &cli.selection(), &params, !cli.dry_run)?;
    let mut accepted = 0;
    for o in &outcomes {
        match &o.outcome.result {
            Ok(trap) => {
                accepted += 1;
                eprintln!(
                    "  {:>3}:{:<4} trap   {:>6.1}\u{00b0}  coverage {:>6.3}  {} nodes, corner \u{2192} ({:.1}, {:.1})",
                    o.contour,
                    o.outcome.index,
                    trap.solved.angle,
                    trap.solved.coverage,
                    trap.nodes.len(),
                    trap.displaced_corner.x,
                    trap.displaced_corner.y,
                );
            }
            Err(reason) => {
                eprintln!("  {:>3}:{:<4} skip   {}", o.contour, o.outcome.index, reason);
            }
        }
    }
    eprintln!();
    eprintln!("  Result      {} of {} corners trapped", accepted, outcomes.len());

    if cli.dry_run {
        eprintln!("  Dry run     nothing written");
    } else if accepted > 0 {
        eprintln!("  \u{2713} {}", cli.ufo.display());
    }
    eprintln!();

    Ok(())
}
