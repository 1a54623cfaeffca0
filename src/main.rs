use clap::{Parser, Subcommand};
use imgen::logger::{self, LogLevel, LoggerConfig};
use imgen::samples;
use imgen::{
    AspectRatio, CharCount, ClientConfig, FormView, GenerationFormController, HttpGenerationApi,
    ImageDownloader, Style, TerminalView,
};
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate images from text prompts with a remote text-to-image service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Service base URL (overrides IMGEN_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides IMGEN_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an image from a prompt
    Generate {
        /// Text describing the image; a random sample prompt is used if omitted
        prompt: Option<String>,

        /// Style: realistic, artistic, cartoon, digital_art, 3d
        #[arg(short, long, default_value = "realistic")]
        style: Style,

        /// Aspect ratio: 1:1, 16:9, 9:16, 4:3, 3:4, 21:9
        #[arg(short, long, default_value = "1:1")]
        ratio: AspectRatio,

        /// Save the generated image as a PNG file
        #[arg(short, long)]
        download: bool,

        /// Directory for downloaded images (overrides IMGEN_DOWNLOAD_DIR)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Show the character counter for a prompt
    Count { prompt: String },
    /// Print a random sample prompt
    Sample,
    /// Query the service health endpoint
    Health,
    /// List the styles offered by the service
    Styles,
    /// List the sizes offered by the service
    Sizes,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();

    let log_config = if args.json_logs {
        LoggerConfig::production()
    } else if args.verbose {
        LoggerConfig::development()
    } else {
        LoggerConfig::quiet()
    };
    let log_config = if args.verbose {
        log_config.with_level(LogLevel::Debug)
    } else {
        log_config
    };
    if let Err(e) = logger::init_with_config(log_config) {
        eprintln!("{}", e);
    }

    if dotenv_loaded {
        log::debug!(".env file loaded");
    }

    if run_offline(
        &args.command,
        &mut TerminalView::stdout(),
        &mut rand::thread_rng(),
    ) {
        return ExitCode::SUCCESS;
    }

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = args.timeout.filter(|secs| *secs > 0) {
        config = config.with_timeout(std::time::Duration::from_secs(secs));
    }
    if let Command::Generate {
        out_dir: Some(dir), ..
    } = &args.command
    {
        config = config.with_download_dir(dir.clone());
    }

    let api = match HttpGenerationApi::new(config.clone()) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to initialize client: {}", e);
            eprintln!("{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Using generation service at {}", config.base_url);

    let mut controller = GenerationFormController::new(
        api,
        TerminalView::stdout(),
        ImageDownloader::new(&config.download_dir),
    );

    match args.command {
        Command::Generate {
            prompt,
            style,
            ratio,
            download,
            ..
        } => {
            let prompt = match prompt {
                Some(prompt) => {
                    controller.on_prompt_input(&prompt);
                    prompt
                }
                None => controller
                    .insert_sample_prompt(&mut rand::thread_rng())
                    .to_string(),
            };

            if controller.submit(&prompt, style, ratio).await.is_err() {
                return ExitCode::FAILURE;
            }
            if download {
                match controller.download() {
                    Ok(path) => println!("Saved {}", path.display()),
                    Err(_) => return ExitCode::FAILURE,
                }
            }
        }
        // Answered by run_offline before any client is built.
        Command::Count { .. } | Command::Sample => {}
        Command::Health => match controller.check_health().await {
            Some(status) => println!("{}", render_health(&status)),
            None => {
                eprintln!("Health check failed");
                return ExitCode::FAILURE;
            }
        },
        Command::Styles => match controller.list_styles().await {
            Ok(styles) => {
                for style in styles.styles {
                    println!("{:<12} {:<12} {}", style.id, style.name, style.description);
                }
            }
            Err(e) => {
                eprintln!("{}", e.user_message());
                return ExitCode::FAILURE;
            }
        },
        Command::Sizes => match controller.list_sizes().await {
            Ok(sizes) => {
                for size in sizes.sizes {
                    println!("{:<12} {:<12} {}", size.id, size.name, size.description);
                }
            }
            Err(e) => {
                eprintln!("{}", e.user_message());
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// Handles the commands that never talk to the service, so they work even
/// when the service configuration is broken. Returns false for the rest.
fn run_offline<W: Write, R: Rng + ?Sized>(
    command: &Command,
    view: &mut TerminalView<W>,
    rng: &mut R,
) -> bool {
    match command {
        Command::Count { prompt } => {
            view.update_counter(&CharCount::measure(prompt));
            true
        }
        Command::Sample => {
            let prompt = samples::pick_sample(rng);
            view.set_prompt(prompt);
            view.update_counter(&CharCount::measure(prompt));
            true
        }
        _ => false,
    }
}

fn render_health(status: &serde_json::Value) -> String {
    serde_json::to_string_pretty(status).unwrap_or_else(|_| status.to_string())
}
