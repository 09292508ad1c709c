use std::path::{Path, PathBuf};

use serde::Serialize;

use latticeview_core::{BBox, Circuit, CircuitStats, Settings};
use latticeview_io::{load_circuit, load_settings, CircuitData};
use latticeview_renderer::{CircuitDrawer, RenderFrame};

pub const USAGE: &str = "\
usage: latticeview <command> <circuit.json> [--settings <settings.json>] [--output <file>]

commands:
  render     build the circuit and print its render frame as JSON
  stats      print element counts and scene bounds
  normalize  print the circuit document with sorted endpoints";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Render,
    Stats,
    Normalize,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
    pub circuit: PathBuf,
    pub settings: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut args = args.into_iter();
        let command = match args.next().as_deref() {
            Some("render") => Command::Render,
            Some("stats") => Command::Stats,
            Some("normalize") => Command::Normalize,
            Some(other) => return Err(format!("unknown command '{}'", other)),
            None => return Err("missing command".into()),
        };

        let mut circuit = None;
        let mut settings = None;
        let mut output = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--settings" => {
                    settings = Some(PathBuf::from(args.next().ok_or("--settings needs a path")?))
                }
                "--output" => {
                    output = Some(PathBuf::from(args.next().ok_or("--output needs a path")?))
                }
                flag if flag.starts_with("--") => return Err(format!("unknown option '{}'", flag)),
                path if circuit.is_none() => circuit = Some(PathBuf::from(path)),
                extra => return Err(format!("unexpected argument '{}'", extra)),
            }
        }

        Ok(Self {
            command,
            circuit: circuit.ok_or("missing circuit file")?,
            settings,
            output,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CircuitSummary {
    pub stats: CircuitStats,
    pub bounds: Option<BBox>,
}

fn settings_from(path: Option<&Path>) -> Result<Settings, String> {
    match path {
        Some(path) => load_settings(path).map_err(|e| format!("Failed to load settings: {}", e)),
        None => Ok(Settings::default()),
    }
}

fn circuit_from(path: &Path, settings: &Settings) -> Result<Circuit, String> {
    load_circuit(path, settings).map_err(|e| format!("Failed to load circuit: {}", e))
}

/// Build a circuit file and draw it into a render frame.
pub fn render_circuit(path: &Path, settings: &Settings) -> Result<RenderFrame, String> {
    let circuit = circuit_from(path, settings)?;
    let mut frame = RenderFrame::new();
    CircuitDrawer::draw(&circuit, &mut frame, settings);
    Ok(frame)
}

pub fn summarize_circuit(path: &Path, settings: &Settings) -> Result<CircuitSummary, String> {
    let circuit = circuit_from(path, settings)?;
    Ok(CircuitSummary {
        stats: circuit.stats(),
        bounds: circuit.bounds(settings),
    })
}

/// Re-emit a circuit document in canonical form.
pub fn normalize_circuit(path: &Path, settings: &Settings) -> Result<CircuitData, String> {
    let circuit = circuit_from(path, settings)?;
    Ok(CircuitData::from_circuit(&circuit, settings))
}

/// Execute a parsed command and return its JSON output.
pub fn execute(args: &Args) -> Result<String, String> {
    let settings = settings_from(args.settings.as_deref())?;
    let json = match args.command {
        Command::Render => render_circuit(&args.circuit, &settings)?
            .to_json()
            .map_err(|e| e.to_string())?,
        Command::Stats => {
            let summary = summarize_circuit(&args.circuit, &settings)?;
            serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?
        }
        Command::Normalize => normalize_circuit(&args.circuit, &settings)?
            .to_json()
            .map_err(|e| e.to_string())?,
    };
    Ok(json)
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<(), String> {
    let args = Args::parse(args).map_err(|e| format!("{}\n\n{}", e, USAGE))?;
    let json = execute(&args)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| format!("Failed to write output: {}", e))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Result<Args, String> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["render", "c.json", "--settings", "s.json"]).unwrap();
        assert_eq!(parsed.command, Command::Render);
        assert_eq!(parsed.circuit, PathBuf::from("c.json"));
        assert_eq!(parsed.settings, Some(PathBuf::from("s.json")));
        assert!(parsed.output.is_none());

        assert!(args(&[]).is_err());
        assert!(args(&["draw", "c.json"]).is_err());
        assert!(args(&["stats"]).is_err());
        assert!(args(&["stats", "a.json", "b.json"]).is_err());
        assert!(args(&["stats", "a.json", "--settings"]).is_err());
    }

    #[test]
    fn test_execute_render_and_stats() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"logical_qubits": [{"type": "smooth", "injectors": [[[0, 0, 0], [0, 0, 1]]]}]}"#,
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let render = execute(&args(&["render", &path]).unwrap()).unwrap();
        let frame: serde_json::Value = serde_json::from_str(&render).unwrap();
        // two pyramids and two vertices
        assert_eq!(frame["solids"].as_array().unwrap().len(), 4);

        let stats = execute(&args(&["stats", &path]).unwrap()).unwrap();
        let stats: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(stats["stats"]["injectors"], 1);
        assert_eq!(stats["stats"]["smooth_qubits"], 1);
    }

    #[test]
    fn test_run_reports_usage_on_bad_arguments() {
        let err = run(["draw".to_string()]).unwrap_err();
        assert!(err.starts_with("unknown command 'draw'"));
        assert!(err.ends_with(USAGE));
    }

    #[test]
    fn test_execute_reports_bad_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"logical_qubits": [{"type": "diagonal"}]}"#)
            .unwrap();
        let path = file.path().to_string_lossy().to_string();
        let err = execute(&args(&["render", &path]).unwrap()).unwrap_err();
        assert!(err.contains("logical_qubits[0].type"));
    }
}
