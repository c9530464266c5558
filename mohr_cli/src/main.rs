//! # Mohr CLI Application
//!
//! Terminal front end for the stress transformation calculator. Asks for
//! σx, σy, τxy and the element rotation angle (unless they are passed as
//! flags), then prints Mohr's circle, the rotated stress points and the
//! rotated element.
//!
//! Any value that is not a number ends the program with an error and exit
//! status 1.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::debug;

use mohr_core::calculations::{analyze, AnalysisInput, AnalysisReport, StressState};
use mohr_core::input::ScalarField;
use mohr_core::{CalcError, CalcResult, Settings};

#[derive(Parser, Debug)]
#[command(name = "mohr_cli")]
#[command(about = "Mohr's circle and element rotation calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Normal stress along x (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    sigma_x: Option<f64>,

    /// Normal stress along y (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    sigma_y: Option<f64>,

    /// Shear stress on the x face (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    tau_xy: Option<f64>,

    /// Element rotation in degrees, anticlockwise positive (prompted for when omitted)
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Settings file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Values given on the command line, in prompt order
    fn preset_values(&self) -> [Option<f64>; 4] {
        [self.sigma_x, self.sigma_y, self.tau_xy, self.angle]
    }
}

fn main() {
    let cli = Cli::parse();

    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    // Keep stdout clean for JSON output
    let values = if cli.json {
        collect_values(cli.preset_values(), &mut input, &mut io::stderr())?
    } else {
        collect_values(cli.preset_values(), &mut input, &mut io::stdout())?
    };

    let [sigma_x, sigma_y, tau_xy, angle_deg] = values;
    let analysis = AnalysisInput::with_settings(StressState::new(sigma_x, sigma_y, tau_xy), angle_deg, &settings);
    let report = analyze(&analysis)?;

    let mut out = io::stdout().lock();
    if cli.json {
        writeln!(out, "{}", report.to_json_pretty()?).map_err(write_error)?;
    } else {
        print_report(&mut out, &report, &settings).map_err(write_error)?;
    }
    Ok(())
}

fn write_error(e: io::Error) -> CalcError {
    CalcError::file_error("write", "stdout", e.to_string())
}

/// Fill in every value not preset on the command line by prompting.
fn collect_values<R: BufRead, W: Write>(
    preset: [Option<f64>; 4],
    input: &mut R,
    prompts: &mut W,
) -> CalcResult<[f64; 4]> {
    let mut values = [0.0; 4];
    for ((slot, field), preset) in values.iter_mut().zip(ScalarField::ALL).zip(preset) {
        *slot = match preset {
            Some(v) => v,
            None => prompt_value(input, prompts, field)?,
        };
    }
    Ok(values)
}

/// Print the prompt for `field` and read one line as its value.
fn prompt_value<R: BufRead, W: Write>(input: &mut R, prompts: &mut W, field: ScalarField) -> CalcResult<f64> {
    writeln!(prompts, "{}", field.prompt())
        .and_then(|_| prompts.flush())
        .map_err(write_error)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;
    if read == 0 {
        return Err(CalcError::invalid_input(field.name(), "", "Input ended before a value was entered"));
    }

    field.parse(&line)
}

fn print_report<W: Write>(out: &mut W, report: &AnalysisReport, settings: &Settings) -> io::Result<()> {
    let mohr = &report.mohr_circle;
    let square = &report.square_rotation;
    let stress = |v: f64| settings.format_stress(v);

    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  MOHR'S CIRCLE")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(out, "  σx  = {}", stress(mohr.stress.sigma_x))?;
    writeln!(out, "  σy  = {}", stress(mohr.stress.sigma_y))?;
    writeln!(out, "  τxy = {}", stress(mohr.stress.tau_xy))?;
    writeln!(
        out,
        "  θ   = {} degrees (circle rotation 2θ = {} degrees)",
        mohr.angle_deg,
        mohr.circle_rotation_deg()
    )?;
    writeln!(out)?;
    writeln!(out, "Circle:")?;
    writeln!(out, "  Center: {}", settings.format_point(&mohr.circle.center))?;
    writeln!(out, "  Radius: {}", stress(mohr.circle.radius))?;
    if settings.scaling_factor != 1.0 {
        writeln!(out, "  (radius drawn at scale {})", settings.scaling_factor)?;
    }
    writeln!(out)?;
    writeln!(out, "Points:")?;
    for annotation in mohr.annotations() {
        writeln!(
            out,
            "  {:<20} {}",
            annotation.label,
            settings.format_point(&annotation.point)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Principal Stresses:")?;
    writeln!(out, "  σ1   = {}", stress(mohr.principal.sigma_1))?;
    writeln!(out, "  σ2   = {}", stress(mohr.principal.sigma_2))?;
    writeln!(out, "  τmax = {}", stress(mohr.principal.max_shear))?;
    writeln!(out, "  θp   = {:.*} degrees", settings.decimals, mohr.principal.principal_angle_deg)?;
    writeln!(out)?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  ELEMENT ROTATION")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out)?;
    writeln!(out, "  Center: {}", settings.format_point(&square.center))?;
    writeln!(out, "  {:<8} {:<22} {}", "Vertex", "Original", "Rotated")?;
    for (i, (original, rotated)) in square.original.iter().zip(&square.rotated).enumerate() {
        writeln!(
            out,
            "  {:<8} {:<22} {}",
            i + 1,
            settings.format_point(original),
            settings.format_point(rotated)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", square.caption())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_accepts_negative_values() {
        let cli = Cli::try_parse_from(["mohr_cli", "--tau-xy", "-30", "--angle", "-15.5", "--json"]).unwrap();
        assert_eq!(cli.preset_values(), [None, None, Some(-30.0), Some(-15.5)]);
        assert!(cli.json);
    }

    #[test]
    fn test_prompts_in_order() {
        let mut input = Cursor::new("100\n20\n30\n0\n");
        let mut prompts = Vec::new();
        let values = collect_values([None; 4], &mut input, &mut prompts).unwrap();
        assert_eq!(values, [100.0, 20.0, 30.0, 0.0]);

        let text = String::from_utf8(prompts).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Enter the normal stress along x direction",
                "Enter the normal stress along y direction",
                "Enter the shear stress along x direction",
                "Enter the angle in degrees: +ve for anticlockwise rotation, -ve for clockwise rotation",
            ]
        );
    }

    #[test]
    fn test_preset_values_skip_prompts() {
        let mut input = Cursor::new("45\n");
        let mut prompts = Vec::new();
        let values = collect_values([Some(1.0), Some(2.0), Some(3.0), None], &mut input, &mut prompts).unwrap();
        assert_eq!(values, [1.0, 2.0, 3.0, 45.0]);
        assert_eq!(String::from_utf8(prompts).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_non_numeric_input_is_fatal() {
        let mut input = Cursor::new("100\nabc\n30\n0\n");
        let err = collect_values([None; 4], &mut input, &mut Vec::new()).unwrap_err();
        match err {
            CalcError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "sigma_y");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let mut input = Cursor::new("100\n20\n");
        let err = collect_values([None; 4], &mut input, &mut Vec::new()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_report_text() {
        let settings = Settings::default();
        let report = analyze(&AnalysisInput::with_settings(StressState::new(100.0, 20.0, 30.0), 0.0, &settings)).unwrap();

        let mut out = Vec::new();
        print_report(&mut out, &report, &settings).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Center: (60.00, 0.00)"));
        assert!(text.contains("Radius: 50.00"));
        assert!(text.contains("Rotated Point 1      (100.00, 30.00)"));
        assert!(text.contains("Diameter Endpoint 2  (110.00, 0.00)"));
        assert!(text.contains("σ1   = 110.00"));
        assert!(text.contains("Rotation Angle: 0.0 degrees"));
    }
}
