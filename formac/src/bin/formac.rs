use clap::{
    Parser,
    Subcommand,
};
use formac::{
    EnrichmentRequest,
    MemoryPlatform,
};
use formcore::ac::{
    Permissions,
    Roles,
};
use std::{
    fs::File,
    io::{
        self,
        BufReader,
    },
    path::PathBuf,
    time::Instant,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "FORMAC_STORE", env = "FORMAC_STORE")]
    store: Option<PathBuf>,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Enrich the request read from the file, or from stdin with `-`
    #[command(arg_required_else_help = true)]
    Enrich {
        request: String,
        /// Fail if any required permission was not granted
        #[clap(long)]
        check: bool,
    },
    /// List the permission and role identifiers
    Vocabulary,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("formcore")
        .module("formrbac")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    match args.command {
        Commands::Enrich { request, check } => {
            enrich(args.store, &request, check).await?;
        }
        Commands::Vocabulary => {
            vocabulary();
        }
    }

    Ok(())
}

async fn enrich(
    store: Option<PathBuf>,
    request: &str,
    check: bool,
) -> anyhow::Result<()> {
    let platform = match store {
        Some(path) => MemoryPlatform::from_path(path)?,
        None => {
            log::warn!("no store provided; lookups will find no grants");
            MemoryPlatform::default()
        }
    };
    let enricher = platform.into_enricher()?;
    let request: EnrichmentRequest = if request == "-" {
        serde_json::from_reader(io::stdin().lock())?
    } else {
        serde_json::from_reader(BufReader::new(File::open(request)?))?
    };

    let instant = Instant::now();
    let result = request.enrich_with(&enricher).await;
    let elapsed = instant.elapsed();
    log::debug!("enrichment took {elapsed:?}");
    println!("{}", serde_json::to_string_pretty(&result)?);

    if check {
        formac::request::check(&result)?;
    }
    Ok(())
}

fn vocabulary() {
    println!("permissions:");
    for permission in Permissions::all().iter() {
        println!("  {permission}");
    }
    println!("roles:");
    for role in Roles::all().iter() {
        println!("  {role}");
    }
}
