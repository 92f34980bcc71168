//! Webforge - AI Website Generation
//!
//! CLI front end for the generation pipeline: collect the design brief
//! from flags, run one generation request, write the result to disk.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use webforge::config::SiteConfig;
use webforge::generator::SiteGenerator;
use webforge::prompt::PromptBuilder;
use webforge::{export, Result};

#[derive(Parser)]
#[command(name = "webforge")]
#[command(version = "0.1.0")]
#[command(about = "AI website generation from a design brief", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a website and write it to disk
    Generate {
        #[command(flatten)]
        site: SiteArgs,

        /// Output directory for the generated files
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },

    /// Print the generation prompt without calling the endpoint
    Prompt {
        #[command(flatten)]
        site: SiteArgs,
    },
}

#[derive(Args)]
struct SiteArgs {
    /// What the website should be (content brief)
    #[arg(short, long)]
    description: String,

    /// Primary color as a hex string
    #[arg(long, default_value = "#4F46E5")]
    primary_color: String,

    /// Secondary color as a hex string
    #[arg(long, default_value = "#10B981")]
    secondary_color: String,

    /// Font family (Inter, Roboto, Open Sans, Montserrat, Poppins, Nunito)
    #[arg(long, default_value = "Inter")]
    font: String,

    /// Layout style (Modern, Minimalist, Corporate, Creative, Elegant, Bold)
    #[arg(long, default_value = "Modern")]
    layout: String,

    /// Include animations
    #[arg(long)]
    animations: bool,

    /// Dark mode support
    #[arg(long)]
    dark_mode: bool,

    /// Number of page sections
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=6))]
    sections: u8,

    /// Generation model identifier
    #[arg(long, default_value = webforge::SUPPORTED_MODEL)]
    model: String,
}

impl SiteArgs {
    fn into_config(self) -> SiteConfig {
        SiteConfig::new(self.description)
            .with_colors(self.primary_color, self.secondary_color)
            .with_font(self.font)
            .with_layout(self.layout)
            .with_animations(self.animations)
            .with_dark_mode(self.dark_mode)
            .with_sections(self.sections)
            .with_model(self.model)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "webforge=debug,info"
    } else {
        "webforge=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Prompt { site } => {
            println!("{}", PromptBuilder::build(&site.into_config()));
            Ok(())
        }

        Commands::Generate { site, out } => {
            let config = site.into_config();

            let generator = SiteGenerator::from_env(&config.model)?;
            let bundle = generator.generate(&config).await?;
            let written = export::write_bundle(&out, &bundle)?;

            println!("{}", "Website generated".green().bold());
            for path in &written {
                println!("  {}", path.display());
            }

            Ok(())
        }
    }
}
