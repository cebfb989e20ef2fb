use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use showparse_core::{
    Config, Device, OutputFormat, OutputSource, ParserRegistry, Platform, RestTransport,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser)]
#[command(name = "showparse")]
#[command(about = "Turn network device command output into validated structured data", long_about = None)]
struct Cli {
    /// Config file (defaults to ./showparse.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    format: Option<Format>,

    /// Single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse captured command output
    Parse {
        /// Command that produced the output, e.g. "show lisp session"
        #[arg(required = true)]
        command: Vec<String>,

        /// Device platform (iosxe, iosxr, junos, bigip)
        #[arg(short, long)]
        platform: Option<Platform>,

        /// File holding the output (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Fetch a REST resource from the configured device and parse it
    Fetch {
        /// Resource path, e.g. "/mgmt/tm/sys/snmp"
        command: String,

        /// Device platform
        #[arg(short, long)]
        platform: Option<Platform>,
    },
    /// List available parsers
    List {
        /// Only this platform
        #[arg(short, long)]
        platform: Option<Platform>,
    },
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => Config::load().wrap_err("loading configuration")?,
    };

    init_tracing(&config);

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let pretty = config.output.pretty && !cli.compact;
    let registry = ParserRegistry::new();

    match cli.command {
        Commands::Parse {
            command,
            platform,
            input,
        } => {
            let command = command.join(" ");
            let platform = resolve_platform(platform, &config)?;
            let raw = read_input(input.as_ref())?;
            debug!(%platform, command = %command, bytes = raw.len(), "parsing");

            let tree = registry.parse(platform, &command, &raw)?;
            println!("{}", output::render(&tree, format, pretty)?);
        }
        Commands::Fetch { command, platform } => {
            let platform = resolve_platform(platform, &config)?;
            let (parser, _) = registry
                .lookup(platform, &command)
                .ok_or_else(|| eyre!("No parser for '{}' on {}", command, platform))?;
            if parser.source() != OutputSource::Rest {
                bail!(
                    "'{}' is a CLI command; capture its output and use `showparse parse`",
                    command
                );
            }

            let transport = RestTransport::from_config(&config.rest)?;
            let name = config.rest.base_url.clone().unwrap_or_default();
            let device = Device::new(name, platform, transport);

            let tree = device.parse(&command)?;
            println!("{}", output::render(&tree, format, pretty)?);
        }
        Commands::List { platform } => {
            let platforms = match platform {
                Some(p) => vec![p],
                None => Platform::ALL.to_vec(),
            };
            for platform in platforms {
                println!("{} ({})", platform.display_name(), platform);
                for (name, commands) in registry.list_parsers(platform) {
                    println!("  {}", name);
                    for command in commands {
                        println!("    {}", command);
                    }
                }
            }
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over the configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_platform(flag: Option<Platform>, config: &Config) -> Result<Platform> {
    flag.or(config.parser.platform)
        .ok_or_else(|| eyre!("No platform given; pass --platform or set [parser] platform"))
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("reading stdin")?;
            Ok(buf)
        }
    }
}
