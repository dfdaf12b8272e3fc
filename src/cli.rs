//! CLI interface for LatticeSync
//!
//! Provides command-line interface for:
//! - Mapping text to resonance scalars and a lattice node
//! - Inspecting the torus lattice
//! - Genome signatures and GC-content stability
//! - Frequency-band categorization
//! - Golden alignment scanning
//! - Signature mirroring, discovery matching and identity keys

use crate::alignment::{golden_alignment, PhiLock};
use crate::bands::{content_signature, glome_coordinates, mirror_signature, FrequencyBands};
use crate::discovery::{Catalogue, STABILITY_THRESHOLD};
use crate::encoder::encode_str;
use crate::genome::{gc_stability, sequence_signature, smash_index};
use crate::handshake::omega_key;
use crate::lattice::{generate, lattice_point, lattice_points, TorusParams};
use crate::mapper::{ResonanceConfig, ResonanceMapper};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "latticesync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deterministic resonance mapping of byte sequences onto a torus lattice")]
#[command(
    long_about = "LatticeSync - deterministic string-to-coordinate encoding\n\n\
    Every input is folded into an arbitrary-precision integer (big-endian base-256)\n\
    and reduced to bounded display scalars and a node of a fixed 1010-point torus lattice.\n\n\
    Examples:\n\
      latticesync map \"Axiomatic Sync\"\n\
      latticesync lattice --index 227 --json\n\
      latticesync genome AGATTACAGGAT\n\
      latticesync sector \"Conceptual content of LatticeSync_Core.py\""
)]
#[command(author = "LatticeSync Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map text to resonance scalars and its lattice node
    #[command(
        long_about = "Map text to resonance scalars and its lattice node\n\n\
        The UTF-8 bytes of TEXT are encoded into a bignum V, then:\n\
        • normalized = (V mod 101) / 100\n\
        • torque = |cos(normalized·π·φ)| × 100 (2 decimals)\n\
        • brightness = 0.9 + 0.1·|sin(normalized·π·φ)|\n\
        • angle = normalized × golden angle × k, with display offsets at distance d\n\
        • lattice index = V mod 1010\n\n\
        Example:\n\
          latticesync map \"Axiomatic Sync\" --wide --json\n\
          latticesync map hello --config resonance.json"
    )]
    Map {
        /// Text to encode
        #[arg(value_name = "TEXT")]
        text: String,

        /// JSON file with a resonance configuration (angle_multiplier, offset_distance)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Use the wide angular sweep (k = 10) instead of the default (k = 5)
        #[arg(short, long, conflicts_with = "config")]
        wide: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the torus lattice
    Lattice {
        /// Print a single node instead of the summary
        #[arg(short, long, value_name = "N")]
        index: Option<usize>,

        /// Use the pinched horn torus (R = 1, r = φ) instead of the default
        #[arg(short, long)]
        pinched: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Genome signature, lattice smash index and GC-content stability
    Genome {
        /// DNA sequence (A, T, C, G; case-insensitive)
        #[arg(value_name = "SEQUENCE")]
        sequence: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Categorize text into a golden-ratio frequency band
    Sector {
        /// Text to categorize
        #[arg(value_name = "TEXT")]
        text: String,

        /// Base frequency of the lowest band
        #[arg(short, long, default_value_t = 1000.0)]
        base: f64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan candidates for golden-ratio alignment
    Align {
        /// Candidate strings, scanned in order
        #[arg(value_name = "TEXT", required = true)]
        candidates: Vec<String>,

        /// Maximum distance from φ that counts as aligned
        #[arg(short, long, default_value_t = 0.005)]
        tolerance: f64,
    },

    /// Mirror a content signature through φ and map it to glome coordinates
    Mirror {
        /// Text whose SHA-256 signature is mirrored
        #[arg(value_name = "TEXT")]
        text: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match a discovery against the product catalogue
    #[command(
        long_about = "Match a discovery against the product catalogue\n\n\
        Only discoveries whose stability lies within 0.05 of 1/φ pass the gate.\n\
        Passing discoveries are matched to the product with the nearest SHA-256\n\
        seed signature.\n\n\
        Example:\n\
          latticesync discover \"A novel algorithm for prime number distribution analysis\""
    )]
    Discover {
        /// Discovery description
        #[arg(value_name = "TEXT")]
        text: String,

        /// Stability of the discovery (defaults to 1/φ)
        #[arg(short, long, default_value_t = STABILITY_THRESHOLD)]
        stability: f64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive the 15-digit φ-salted key for an identity
    Handshake {
        /// Username or email
        #[arg(value_name = "IDENTITY")]
        identity: String,

        /// Password
        #[arg(value_name = "PASSWORD")]
        password: String,
    },
}

/// Load a resonance configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ResonanceConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct GenomeReport<'a> {
    sequence: &'a str,
    signature: String,
    smash_index: usize,
    stability: f64,
}

#[derive(Serialize)]
struct MirrorReport {
    signature: String,
    healthy: String,
    glome: [u16; 4],
}

#[derive(Serialize)]
struct SectorReport {
    frequency: f64,
    sector: crate::bands::Sector,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(cli.command)
}

/// Dispatch a parsed command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Map {
            text,
            config,
            wide,
            json,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None if wide => ResonanceConfig::wide(),
                None => ResonanceConfig::default(),
            };
            tracing::debug!(?config, "map command");

            let resonance = ResonanceMapper::new(config).map(&encode_str(&text));
            if json {
                return print_json(&resonance);
            }

            let point = resonance.lattice_point();
            println!("Input: {:?}", text);
            println!("Encoded value: {}", resonance.value);
            println!("Normalized: {:.2}", resonance.normalized);
            println!("Torque: {:.2}", resonance.torque);
            println!("Brightness: {:.4}", resonance.brightness);
            println!(
                "Angle: {:.4} rad  offset ({:.3}, {:.3})",
                resonance.angle, resonance.offset_x, resonance.offset_y
            );
            println!(
                "Lattice node {}: ({:.3}, {:.3}, {:.3})",
                resonance.lattice_index, point.x, point.y, point.z
            );
            Ok(())
        }

        Commands::Lattice {
            index,
            pinched,
            json,
        } => {
            let nodes = if pinched {
                generate(&TorusParams::pinched())
            } else {
                lattice_points().to_vec()
            };

            match index {
                Some(i) => {
                    let point = if pinched {
                        nodes.get(i).copied().with_context(|| {
                            format!("lattice index {i} out of range for {} nodes", nodes.len())
                        })?
                    } else {
                        lattice_point(i)?
                    };
                    if json {
                        return print_json(&point);
                    }
                    println!("Node {}: ({:.4}, {:.4}, {:.4})", i, point.x, point.y, point.z);
                }
                None => {
                    if json {
                        return print_json(&nodes);
                    }
                    let params = if pinched {
                        TorusParams::pinched()
                    } else {
                        TorusParams::default()
                    };
                    println!("Nodes: {}", nodes.len());
                    println!(
                        "Torus radii (R:r) = {}:{:.4}",
                        params.major_radius, params.minor_radius
                    );
                    println!(
                        "Sampling: {} θ × {} φ (endpoints inclusive)",
                        params.major_steps, params.minor_steps
                    );
                }
            }
            Ok(())
        }

        Commands::Genome { sequence, json } => {
            let report = GenomeReport {
                sequence: &sequence,
                signature: sequence_signature(&sequence).to_string(),
                smash_index: smash_index(&sequence),
                stability: gc_stability(&sequence),
            };
            if json {
                return print_json(&report);
            }
            println!("Sequence: {}", report.sequence);
            println!("Signature: {}", report.signature);
            println!("Smash index: {}", report.smash_index);
            println!("Stability (GC content): {:.4}", report.stability);
            Ok(())
        }

        Commands::Sector { text, base, json } => {
            let (frequency, sector) = FrequencyBands::new(base).categorize(text.as_bytes());
            if json {
                return print_json(&SectorReport { frequency, sector });
            }
            println!("Resonance: {:.2} Hz", frequency);
            println!("Sector: [{}]", sector);
            Ok(())
        }

        Commands::Align {
            candidates,
            tolerance,
        } => {
            let lock = PhiLock::new(tolerance);
            for (i, candidate) in candidates.iter().enumerate() {
                println!(
                    "  [{}] alignment {:.5}  {:?}",
                    i,
                    golden_alignment(candidate.as_bytes()),
                    candidate
                );
            }
            match lock.scan(&candidates) {
                Some(i) => println!("Lock achieved at index {}", i),
                None => println!("No candidate aligned with φ"),
            }
            Ok(())
        }

        Commands::Mirror { text, json } => {
            let signature = content_signature(text.as_bytes());
            let healthy = mirror_signature(&signature);
            let report = MirrorReport {
                signature: signature.to_string(),
                healthy: healthy.to_string(),
                glome: glome_coordinates(&healthy),
            };
            if json {
                return print_json(&report);
            }
            println!("Signature: {}", report.signature);
            println!("Mirrored: {}", report.healthy);
            let [a, b, c, d] = report.glome;
            println!("Glome coordinates: ({a}, {b}, {c}, {d})");
            Ok(())
        }

        Commands::Discover {
            text,
            stability,
            json,
        } => {
            let found = Catalogue::default().process(text.as_bytes(), stability);
            if json {
                return print_json(&found);
            }
            match found {
                Some(m) => {
                    println!("Stability peak at {:.3}", m.stability);
                    println!("Product: {}", m.product.name);
                    println!("Market potential: {:.2}", m.market_potential);
                }
                None => println!("Stability peak not detected at {:.3}", stability),
            }
            Ok(())
        }

        Commands::Handshake { identity, password } => {
            println!("{}", omega_key(&identity, &password));
            Ok(())
        }
    }
}
