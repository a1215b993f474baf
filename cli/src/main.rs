mod local;

use clap::{Args, Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use uuid::Uuid;

use local::GenerateOptions;

const PLAN_HEADER: &str = "x-palette-plan";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not a hex or hsl color: {0:?}")]
    InvalidColor(String),
    #[error("batch of {requested} palettes exceeds the local limit of {max}")]
    BatchTooLarge { requested: i64, max: i64 },
    #[error(transparent)]
    Palette(#[from] palette::PaletteError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "palette-cli", about = "Palette Painter color tools and API client")]
struct Cli {
    #[arg(long, env = "PALETTE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Plan sent as `x-palette-plan`; the server default applies when unset.
    #[arg(long, env = "PALETTE_PLAN")]
    plan: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    plan: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Readable foreground for a background color.
    Contrast { color: String },
    /// Show a color as hex and HSL.
    Convert { color: String },
    /// Derive every role for a palette.
    Roles {
        #[arg(long, help = "Palette JSON, or - for stdin")]
        palette: String,
    },
    /// Generate random palettes locally.
    Generate(GenerateArgs),
    /// Render a palette as css, scss, tailwind or json.
    Export {
        #[arg(long, help = "Palette JSON, or - for stdin")]
        palette: String,
        #[arg(long, default_value = "css")]
        format: String,
    },
    Ping,
    Api(ApiCommand),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    count: i64,
    #[arg(long)]
    mode: Option<String>,
    #[arg(long)]
    theme: Option<String>,
    #[arg(long)]
    base_hue: Option<f64>,
    #[arg(long)]
    harmony: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ApiCommand {
    #[command(subcommand)]
    command: ApiSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApiSubcommand {
    Palette(PaletteCommand),
    Preset(ListCommand),
    Template(ListCommand),
    Plan(ListCommand),
}

#[derive(Args, Debug)]
struct PaletteCommand {
    #[command(subcommand)]
    command: PaletteSubcommand,
}

#[derive(Subcommand, Debug)]
enum PaletteSubcommand {
    List,
    Read {
        palette_id: Uuid,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, help = "Palette JSON, or - for stdin")]
        palette: String,
        #[arg(long)]
        template_id: Option<String>,
    },
    Delete {
        palette_id: Uuid,
    },
    Export {
        palette_id: Uuid,
        #[arg(long, default_value = "css")]
        format: String,
    },
}

#[derive(Args, Debug)]
struct ListCommand {
    #[command(subcommand)]
    command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
enum ListSubcommand {
    List,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, plan: cli.plan };

    match cli.command {
        Command::Contrast { color } => print_json(&local::contrast_report(&color)),
        Command::Convert { color } => print_json(&local::convert_color(&color)?),
        Command::Roles { palette: input } => {
            let parsed = local::parse_palette(&local::read_palette_arg(&input)?)?;
            print_json(&serde_json::to_value(palette::map_palette_to_roles(&parsed))?)
        }
        Command::Generate(args) => {
            let options = GenerateOptions {
                count: args.count,
                mode: args.mode,
                theme: args.theme,
                base_hue: args.base_hue,
                harmony: args.harmony,
                seed: args.seed,
            };
            print_json(&serde_json::to_value(local::generate(&options)?)?)
        }
        Command::Export { palette: input, format } => {
            print!("{}", local::export(&local::read_palette_arg(&input)?, &format)?);
            Ok(())
        }
        Command::Ping => run_ping(&ctx).await,
        Command::Api(api) => run_api(&ctx, api).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_api(cli: &CliContext, api: ApiCommand) -> Result<(), CliError> {
    match api.command {
        ApiSubcommand::Palette(palette) => run_api_palette(cli, palette).await,
        ApiSubcommand::Preset(_) => print_json(&api_request(cli, reqwest::Method::GET, "/api/presets", None).await?),
        ApiSubcommand::Template(_) => {
            print_json(&api_request(cli, reqwest::Method::GET, "/api/templates", None).await?)
        }
        ApiSubcommand::Plan(_) => print_json(&api_request(cli, reqwest::Method::GET, "/api/plans", None).await?),
    }
}

async fn run_api_palette(cli: &CliContext, palette: PaletteCommand) -> Result<(), CliError> {
    match palette.command {
        PaletteSubcommand::List => {
            let json = api_request(cli, reqwest::Method::GET, "/api/palettes", None).await?;
            print_json(&json)
        }
        PaletteSubcommand::Read { palette_id } => {
            let path = format!("/api/palettes/{palette_id}");
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            print_json(&json)
        }
        PaletteSubcommand::Create { name, palette, template_id } => {
            let colors = local::parse_palette(&local::read_palette_arg(&palette)?)?;
            let mut body = Map::new();
            body.insert("name".to_owned(), Value::String(name));
            body.insert("palette".to_owned(), serde_json::to_value(colors)?);
            if let Some(template_id) = template_id {
                body.insert("templateId".to_owned(), Value::String(template_id));
            }
            let json = api_request(cli, reqwest::Method::POST, "/api/palettes", Some(Value::Object(body))).await?;
            print_json(&json)
        }
        PaletteSubcommand::Delete { palette_id } => {
            let path = format!("/api/palettes/{palette_id}");
            let json = api_request(cli, reqwest::Method::DELETE, &path, None).await?;
            print_json(&json)
        }
        PaletteSubcommand::Export { palette_id, format } => {
            let path = format!("/api/palettes/{palette_id}/export?format={format}");
            let response = send(cli, reqwest::Method::GET, &path, None).await?;
            let status = response.status();
            let text = response.text().await?;
            if !status.is_success() {
                return Err(CliError::ServerError { status: status.as_u16(), message: text });
            }
            print!("{text}");
            Ok(())
        }
    }
}

async fn send(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<reqwest::Response, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(plan) = cli.plan.as_deref() {
        headers.insert(PLAN_HEADER, HeaderValue::from_str(plan)?);
    }

    let client = reqwest::Client::builder().default_headers(headers).build()?;
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body { request.json(&json) } else { request };
    Ok(request.send().await?)
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let response = send(cli, method, path, body).await?;
    let status = response.status();
    let text = response.text().await?;
    decode_response(status, &text)
}

/// Error statuses keep the raw body as the message; success bodies must be JSON.
fn decode_response(status: reqwest::StatusCode, body: &str) -> Result<Value, CliError> {
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: body.trim().to_owned() });
    }
    Ok(serde_json::from_str(body)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
