use arbor::render::{Metrics, RenderOptions, conllu_to_html, layout_document};
use arbor::{Field, FieldError, FieldSelection, Stanza, split_stanzas};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Parse,
    Layout,
    #[default]
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    fields: Option<FieldSelection>,
    metadata_keys: Vec<String>,
    color: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "arbor-cli\n\
\n\
USAGE:\n\
  arbor-cli [render] [--fields <F1,F2,..>] [--meta <k1,k2,..>] [--color <css-color>] [--out <path>] [<path>|-]\n\
  arbor-cli parse [--pretty] [<path>|-]\n\
  arbor-cli layout [--pretty] [--fields <F1,F2,..>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - render prints an HTML page of SVG dependency diagrams to stdout; use --out to write a file.\n\
  - parse prints the stanza models as JSON; layout prints per-stanza geometry as JSON.\n\
  - --fields picks the displayed CoNLL-U columns (default FORM,UPOS,HEAD,DEPREL);\n\
    unknown or undisplayable names are dropped with a warning.\n\
  - --meta surfaces matching '# key = value' stanza metadata as headings.\n\
"
}

/// Validates a comma-separated field list, dropping bad names with a
/// diagnostic and keeping the rest.
fn parse_fields(raw: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match name.parse::<Field>() {
            Ok(field) => fields.push(field),
            Err(FieldError::Unsupported(name)) => {
                eprintln!("Ignoring {name} (field not supported)");
            }
            Err(FieldError::Unknown(name)) => {
                eprintln!("Ignoring {name} (not a standard CoNLL-U field)");
            }
        }
    }
    fields
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut fields: Option<Vec<Field>> = None;

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--fields" | "-f" => {
                let Some(raw) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                fields.get_or_insert_with(Vec::new).extend(parse_fields(raw));
            }
            "--meta" | "-m" => {
                let Some(raw) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.metadata_keys.extend(
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
            "--color" | "-c" => {
                let Some(color) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !color.trim().is_empty() {
                    args.color = Some(color.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    args.fields = fields.map(FieldSelection::new);
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let options = RenderOptions {
        fields: args.fields.unwrap_or_default(),
        metadata_keys: args.metadata_keys,
        color: args.color.unwrap_or_else(|| "black".to_string()),
    };

    match args.command {
        Command::Parse => {
            let stanzas: Vec<Stanza> = split_stanzas(&text)
                .into_iter()
                .map(Stanza::parse)
                .collect();
            let json = if args.pretty {
                serde_json::to_string_pretty(&stanzas)?
            } else {
                serde_json::to_string(&stanzas)?
            };
            println!("{json}");
            Ok(())
        }
        Command::Layout => {
            let metrics = Metrics::default();
            let mut entries = Vec::new();
            for result in layout_document(&text, &options, &metrics) {
                entries.push(match result {
                    Ok(layout) => serde_json::to_value(&layout)?,
                    Err(err) => serde_json::json!({ "error": err.to_string() }),
                });
            }
            let json = if args.pretty {
                serde_json::to_string_pretty(&entries)?
            } else {
                serde_json::to_string(&entries)?
            };
            println!("{json}");
            Ok(())
        }
        Command::Render => {
            let html = conllu_to_html(&text, &options);
            match args.out.as_deref() {
                Some(path) if path != "-" => std::fs::write(path, html)?,
                _ => print!("{html}"),
            }
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
