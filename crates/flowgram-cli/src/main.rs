use flowgram::Theme;
use flowgram::render::{DotOptions, DrawioOptions, EdgeRouting, LayoutChoice, VisualizationMode, compile};
use flowgram::remote::{ImageFormat, RenderClient};
use std::io::{Read, Write as _};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: flowgram-cli <command> [options] [input-file]

Reads flow notation from the input file, or stdin when no file is given.

Commands:
  validate   check the notation and print diagnostics
  dot        compile to Graphviz DOT source
  drawio     compile to draw.io interchange XML
  json       compile to the JSON export schema
  text       reconstruct notation from a JSON export (input is JSON)
  render     compile to DOT and rasterize via the remote Graphviz service

Options:
  --theme <name>      built-in theme name (default: Professional (Blue))
  --layout <name>     hierarchy | organic | circular | radial | freeform
  --splines <name>    ortho | polyline | curved | line
  --mode <name>       flow | sequence | mindmap | network
  --format <name>     svg | png (render command only)
  --endpoint <url>    override the remote render service URL
  --out <path>        write output to a file instead of stdout
";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io(std::io::Error),
    Core(flowgram::Error),
    Pipeline(flowgram::render::PipelineError),
    Remote(flowgram::remote::RemoteError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Pipeline(err) => write!(f, "{err}"),
            CliError::Remote(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<flowgram::Error> for CliError {
    fn from(value: flowgram::Error) -> Self {
        Self::Core(value)
    }
}

impl From<flowgram::render::PipelineError> for CliError {
    fn from(value: flowgram::render::PipelineError) -> Self {
        Self::Pipeline(value)
    }
}

impl From<flowgram::remote::RemoteError> for CliError {
    fn from(value: flowgram::remote::RemoteError) -> Self {
        Self::Remote(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Validate,
    Dot,
    Drawio,
    Json,
    Text,
    Render,
}

#[derive(Debug)]
struct Cli {
    command: Command,
    theme: String,
    layout: LayoutChoice,
    splines: EdgeRouting,
    mode: VisualizationMode,
    format: ImageFormat,
    endpoint: Option<String>,
    out: Option<PathBuf>,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Cli, CliError> {
    let mut args = std::env::args().skip(1);
    let Some(first) = args.next() else {
        return Err(CliError::Usage("missing command".to_string()));
    };
    if first == "--help" || first == "-h" {
        print!("{USAGE}");
        std::process::exit(0);
    }

    let command = match first.as_str() {
        "validate" => Command::Validate,
        "dot" => Command::Dot,
        "drawio" => Command::Drawio,
        "json" => Command::Json,
        "text" => Command::Text,
        "render" => Command::Render,
        other => return Err(CliError::Usage(format!("unknown command: {other}"))),
    };

    let mut cli = Cli {
        command,
        theme: "Professional (Blue)".to_string(),
        layout: LayoutChoice::default(),
        splines: EdgeRouting::default(),
        mode: VisualizationMode::default(),
        format: ImageFormat::default(),
        endpoint: None,
        out: None,
        input: None,
    };

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
        args.next()
            .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => cli.theme = value(&mut args, "--theme")?,
            "--layout" => {
                let v = value(&mut args, "--layout")?;
                cli.layout = LayoutChoice::from_name(&v)
                    .ok_or_else(|| CliError::Usage(format!("unknown layout: {v}")))?;
            }
            "--splines" => {
                let v = value(&mut args, "--splines")?;
                cli.splines = EdgeRouting::from_name(&v)
                    .ok_or_else(|| CliError::Usage(format!("unknown splines value: {v}")))?;
            }
            "--mode" => {
                let v = value(&mut args, "--mode")?;
                cli.mode = VisualizationMode::from_name(&v)
                    .ok_or_else(|| CliError::Usage(format!("unknown mode: {v}")))?;
            }
            "--format" => {
                let v = value(&mut args, "--format")?;
                cli.format = ImageFormat::from_name(&v)
                    .ok_or_else(|| CliError::Usage(format!("unknown format: {v}")))?;
            }
            "--endpoint" => cli.endpoint = Some(value(&mut args, "--endpoint")?),
            "--out" => cli.out = Some(PathBuf::from(value(&mut args, "--out")?)),
            other if other.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option: {other}")));
            }
            _ => {
                if cli.input.is_some() {
                    return Err(CliError::Usage("multiple input files given".to_string()));
                }
                cli.input = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(cli)
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    match &cli.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(cli: &Cli, bytes: &[u8]) -> Result<(), CliError> {
    match &cli.out {
        Some(path) => std::fs::write(path, bytes)?,
        None => std::io::stdout().write_all(bytes)?,
    }
    Ok(())
}

fn resolve_theme(cli: &Cli) -> Result<&'static Theme, CliError> {
    Theme::builtin(&cli.theme).ok_or_else(|| {
        CliError::Core(flowgram::Error::UnknownTheme {
            name: cli.theme.clone(),
        })
    })
}

fn dot_options(cli: &Cli) -> DotOptions {
    DotOptions {
        layout: cli.layout,
        splines: cli.splines,
        mode: cli.mode,
        collapsed_clusters: Vec::new(),
    }
}

fn run() -> Result<i32, CliError> {
    let cli = parse_args()?;
    let input = read_input(&cli)?;

    match cli.command {
        Command::Validate => {
            let diag = flowgram::validate(&input);
            for warning in &diag.warnings {
                eprintln!("warning: {warning}");
            }
            for error in &diag.errors {
                eprintln!("error: {error}");
            }
            if diag.has_errors() {
                return Ok(1);
            }
            println!("OK");
            Ok(0)
        }
        Command::Dot => {
            let theme = resolve_theme(&cli)?;
            let artifacts = compile(&input, theme, &dot_options(&cli), &DrawioOptions::default())?;
            for warning in &artifacts.warnings {
                eprintln!("warning: {warning}");
            }
            write_output(&cli, artifacts.dot.as_bytes())?;
            Ok(0)
        }
        Command::Drawio => {
            let theme = resolve_theme(&cli)?;
            let artifacts = compile(&input, theme, &dot_options(&cli), &DrawioOptions::default())?;
            for warning in &artifacts.warnings {
                eprintln!("warning: {warning}");
            }
            write_output(&cli, artifacts.drawio.as_bytes())?;
            Ok(0)
        }
        Command::Json => {
            let graph = flowgram::parse_diagram(&input);
            let json = flowgram::export_json(&graph)?;
            write_output(&cli, json.as_bytes())?;
            Ok(0)
        }
        Command::Text => {
            let graph = flowgram::import_json(&input)?;
            let text = flowgram::graph_to_text(&graph);
            write_output(&cli, text.as_bytes())?;
            Ok(0)
        }
        Command::Render => {
            let theme = resolve_theme(&cli)?;
            let artifacts = compile(&input, theme, &dot_options(&cli), &DrawioOptions::default())?;
            let client = match &cli.endpoint {
                Some(endpoint) => RenderClient::with_endpoint(endpoint)?,
                None => RenderClient::new()?,
            };
            match client.render(&artifacts.dot, cli.format) {
                Ok(bytes) => {
                    write_output(&cli, &bytes)?;
                    Ok(0)
                }
                Err(err) => {
                    // The remote service is best-effort; the local artifacts
                    // are still valid, so point the user at them.
                    eprintln!("warning: remote render failed: {err}");
                    eprintln!("hint: the `dot` and `drawio` commands work offline");
                    Ok(1)
                }
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
