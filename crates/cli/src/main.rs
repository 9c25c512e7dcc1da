#![deny(unsafe_code)]
//! CLI binary for tricolor.
//!
//! Subcommands:
//! - `show <hex>` — parse a hex color and print it in every model
//! - `rgb <r> <g> <b>` — build a color from 8-bit channels
//! - `hsl <h> <s> <l>` — build a color from hue, saturation, lightness
//! - `cmyk <c> <m> <y> <k>` — build a color from ink coverage
//!
//! Every subcommand accepts `-f/--format <TEMPLATE>` to print through a
//! format template instead of the default listing.

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tricolor_core::Color;

#[derive(Parser)]
#[command(name = "tricolor", about = "Convert colors between RGB, HSL and CMYK")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log conversions to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Output {
    /// Format template, e.g. "Rd,Gd,Bd" or "#RGB".
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a hex color (#RRGGBB or #RRGGBBAA, '#' optional).
    Show {
        color: String,

        #[command(flatten)]
        output: Output,
    },
    /// Build a color from 8-bit red, green and blue.
    Rgb {
        r: u8,
        g: u8,
        b: u8,

        /// Alpha in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,

        #[command(flatten)]
        output: Output,
    },
    /// Build a color from hue (degrees), saturation and lightness.
    #[command(allow_negative_numbers = true)]
    Hsl {
        h: f64,
        s: f64,
        l: f64,

        /// Alpha in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,

        #[command(flatten)]
        output: Output,
    },
    /// Build a color from cyan, magenta, yellow and black.
    #[command(allow_negative_numbers = true)]
    Cmyk {
        c: f64,
        m: f64,
        y: f64,
        k: f64,

        /// Alpha in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,

        #[command(flatten)]
        output: Output,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "tricolor=debug,tricolor_core=trace"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Default human-readable listing of every model.
fn describe(color: &Color) -> String {
    let rgb = color.rgb();
    let hsl = color.hsl();
    let cmyk = color.cmyk();
    format!(
        "hex   {}\nrgb   {}, {}, {}\nhsl   {}, {}, {}\ncmyk  {}, {}, {}, {}\nalpha {}",
        color.to_hex(),
        rgb.r,
        rgb.g,
        rgb.b,
        hsl.h,
        hsl.s,
        hsl.l,
        cmyk.c,
        cmyk.m,
        cmyk.y,
        cmyk.k,
        color.alpha(),
    )
}

/// JSON report: hex form, every component, and the template rendering if any.
fn json_report(color: &Color, formatted: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "hex": color,
        "components": color.components(),
        "formatted": formatted,
    })
}

fn print_color(color: &Color, output: &Output, json: bool) -> Result<(), CliError> {
    let formatted = output.format.as_deref().map(|t| color.format(t));
    if json {
        let info = json_report(color, formatted.as_deref());
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        match formatted {
            Some(text) => println!("{text}"),
            None => println!("{}", describe(color)),
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (color, output) = match cli.command {
        Command::Show { color, output } => {
            let parsed = Color::parse(&color)?;
            debug!(input = %color, rgb = ?parsed.rgb(), alpha = parsed.alpha(), "parsed color");
            (parsed, output)
        }
        Command::Rgb {
            r,
            g,
            b,
            alpha,
            output,
        } => (Color::from_rgba(r, g, b, alpha), output),
        Command::Hsl {
            h,
            s,
            l,
            alpha,
            output,
        } => {
            let color = Color::from_hsla(h, s, l, alpha)?;
            debug!(h, s, l, rgb = ?color.rgb(), "built color from hsl");
            (color, output)
        }
        Command::Cmyk {
            c,
            m,
            y,
            k,
            alpha,
            output,
        } => {
            let color = Color::from_cmyka(c, m, y, k, alpha);
            debug!(c, m, y, k, rgb = ?color.rgb(), "built color from cmyk");
            (color, output)
        }
    };

    print_color(&color, &output, cli.json)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn hsl_accepts_negative_hue() {
        let cli = Cli::try_parse_from(["tricolor", "hsl", "-40", "0.5", "0.5"]).unwrap();
        match cli.command {
            Command::Hsl { h, .. } => assert_eq!(h, -40.0),
            _ => panic!("expected hsl subcommand"),
        }
    }

    #[test]
    fn rgb_rejects_channel_above_255() {
        assert!(Cli::try_parse_from(["tricolor", "rgb", "256", "0", "0"]).is_err());
    }

    #[test]
    fn describe_lists_every_model() {
        let text = describe(&Color::from_rgb(255, 0, 0));
        assert_eq!(
            text,
            "hex   #FF0000\nrgb   255, 0, 0\nhsl   0, 1, 0.5\ncmyk  0, 1, 1, 0\nalpha 1"
        );
    }

    #[test]
    fn json_report_has_hex_components_and_formatted() {
        let color = Color::from_rgba(255, 0, 0, 0.5);
        let report = json_report(&color, Some("255-0-0"));
        assert_eq!(report["hex"], "#FF000080");
        assert_eq!(report["formatted"], "255-0-0");
        let parts = &report["components"];
        assert_eq!(parts["model"], "rgb");
        assert_eq!(parts["r"], 255);
        assert_eq!(parts["s"], 1.0);
        assert_eq!(parts["m"], 1.0);
        assert_eq!(parts["alpha"], 0.5);
    }

    #[test]
    fn json_report_without_template_has_null_formatted() {
        let report = json_report(&Color::default(), None);
        assert!(report["formatted"].is_null());
        assert_eq!(report["hex"], "#000000");
        assert_eq!(report["components"]["k"], 1.0);
    }

    #[test]
    fn run_reports_malformed_hex_as_color_error() {
        let cli = Cli::try_parse_from(["tricolor", "show", "GG0000"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn run_reports_non_finite_hue_as_color_error() {
        let cli = Cli::try_parse_from(["tricolor", "hsl", "inf", "0.5", "0.5"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }
}
