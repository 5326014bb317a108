use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use bubble_forge::config::{self, StyleOverrides};
use bubble_forge::session::EditSession;
use bubble_forge::{Kind, StyleParameters, TrianglePosition};

#[derive(Parser)]
#[command(name = "bubble", version)]
#[command(about = "Speech bubble and tooltip generator — HTML + CSS you can paste")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup, stylesheet, or preview model
    Render {
        /// Presentation variant: bubble or tooltip (default: from --config, else bubble)
        #[arg(long)]
        kind: Option<Kind>,

        /// JSON parameter file; flags given here override its values
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        fields: FieldFlags,

        /// What to print
        #[arg(long, value_enum, default_value_t = OutputFormat::All)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Print the default parameters of a kind as JSON
    Defaults {
        #[arg(long, default_value_t = Kind::Bubble)]
        kind: Kind,
    },

    /// Start the interactive configurator in the browser
    Serve {
        #[arg(long)]
        kind: Option<Kind>,

        /// Start from this parameter file instead of the defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Server port
        #[arg(long, default_value_t = 4477)]
        port: u16,
    },

    /// Re-render a parameter file into an output directory on every change
    Watch {
        /// JSON parameter file
        file: PathBuf,

        /// Kind used when the file does not name one
        #[arg(long, default_value_t = Kind::Bubble)]
        kind: Kind,

        /// Output directory for the .html and .css files
        #[arg(long, default_value = "dist")]
        outdir: PathBuf,
    },
}

/// Per-field overrides. Anything left out keeps the file or default value.
#[derive(Args)]
struct FieldFlags {
    /// Background color (any CSS color)
    #[arg(long)]
    background: Option<String>,

    /// Text color (any CSS color)
    #[arg(long)]
    text_color: Option<String>,

    /// Add the drop shadow
    #[arg(long, conflicts_with = "no_shadow")]
    shadow: bool,

    /// Remove the drop shadow
    #[arg(long)]
    no_shadow: bool,

    /// Add the triangle tail
    #[arg(long, conflicts_with = "no_triangle")]
    triangle: bool,

    /// Remove the triangle tail
    #[arg(long)]
    no_triangle: bool,

    /// Triangle position: top, bottom, left or right
    #[arg(long)]
    position: Option<TrianglePosition>,

    /// Triangle size in px (4-20)
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i32>,

    /// Horizontal padding in px (4-40)
    #[arg(long, allow_negative_numbers = true)]
    padding_x: Option<i32>,

    /// Vertical padding in px (4-40)
    #[arg(long, allow_negative_numbers = true)]
    padding_y: Option<i32>,

    /// Corner radius in px (0-20)
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<i32>,

    /// Body text, inserted verbatim
    #[arg(long)]
    text: Option<String>,
}

impl FieldFlags {
    fn into_overrides(self, kind: Option<Kind>) -> StyleOverrides {
        StyleOverrides {
            kind,
            background_color: self.background,
            text_color: self.text_color,
            shadow_enabled: toggle(self.shadow, self.no_shadow),
            triangle_enabled: toggle(self.triangle, self.no_triangle),
            body_text: self.text,
            triangle_position: self.position,
            triangle_size: self.size,
            padding_x: self.padding_x,
            padding_y: self.padding_y,
            border_radius: self.radius,
        }
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Output format for the render command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// HTML markup only
    Markup,
    /// CSS stylesheet only
    Css,
    /// Preview model as JSON
    Preview,
    /// Markup, stylesheet, and preview as one JSON object
    All,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Render {
            kind,
            config,
            fields,
            format,
            o,
        } => {
            let file_layer = match &config {
                Some(path) => config::load_overrides(path)
                    .with_context(|| format!("cannot load '{}'", path.display()))?,
                None => StyleOverrides::default(),
            };
            let overrides = file_layer.merge(fields.into_overrides(kind));
            let (kind, params) = config::resolve(Kind::default(), overrides)?;
            let (text, label) = render_format(&params, kind, format)?;

            match o {
                Some(out_path) => {
                    fs::write(&out_path, &text)
                        .with_context(|| format!("cannot write '{}'", out_path.display()))?;
                    log::info!("wrote {label} to {} ({} bytes)", out_path.display(), text.len());
                }
                None => println!("{text}"),
            }
        }

        Commands::Defaults { kind } => {
            println!("{}", serde_json::to_string_pretty(&kind.defaults())?);
        }

        Commands::Serve { kind, config, port } => {
            let file_layer = match &config {
                Some(path) => config::load_overrides(path)
                    .with_context(|| format!("cannot load '{}'", path.display()))?,
                None => StyleOverrides::default(),
            };
            let overrides = file_layer.merge(StyleOverrides {
                kind,
                ..Default::default()
            });
            let (kind, params) = config::resolve(Kind::default(), overrides)?;
            bubble_forge::server::run_configurator(EditSession::with_params(kind, params), port)
                .context("configurator server failed")?;
        }

        Commands::Watch { file, kind, outdir } => {
            bubble_forge::watch::watch_file(&file, kind, &outdir)
                .with_context(|| format!("cannot watch '{}'", file.display()))?;
        }
    }
    Ok(())
}

/// Render only what `format` asks for.
fn render_format(
    params: &StyleParameters,
    kind: Kind,
    format: OutputFormat,
) -> serde_json::Result<(String, &'static str)> {
    Ok(match format {
        OutputFormat::Markup => (bubble_forge::render_markup(params, kind), "markup"),
        OutputFormat::Css => (bubble_forge::render_stylesheet(params, kind), "stylesheet"),
        OutputFormat::Preview => (
            serde_json::to_string_pretty(&bubble_forge::render_preview(params))?,
            "preview",
        ),
        OutputFormat::All => (
            serde_json::to_string_pretty(&bubble_forge::render(params, kind))?,
            "render output",
        ),
    })
}
