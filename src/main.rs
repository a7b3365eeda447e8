use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tag_gallery::client::{GalleryService, HttpGalleryService};
use tag_gallery::config::GalleryConfig;
use tag_gallery::endpoints::ImageLinks;
use tag_gallery::fetch::{self, ImageKind};
use tag_gallery::gallery::Gallery;
use tag_gallery::{config, output};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tag-gallery")]
#[command(about = "Browse a tag-based image gallery service")]
#[command(long_about = "\
Browse a tag-based image gallery service

The service lists tags, the pictures carrying each tag, and serves every
picture as a thumbnail and in full resolution:

  GET rest/gallery_service/tags                 JSON array of tags
  GET rest/gallery_service/{tag}                JSON array of entries
  GET rest/gallery_service/thumbnail/{name}     thumbnail image
  GET rest/gallery_service/picture/{name}       full-size image

The 'show' command runs the gallery page flow (load tags, select a tag,
optionally select a picture) and writes the resulting page as HTML.

Settings are read from config.toml in --config-dir. Run 'tag-gallery
gen-config' to print a documented config.toml. Set RUST_LOG=tag_gallery=debug
to trace requests.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Gallery application root, overrides service.base_url
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all tags
    Tags,
    /// List the pictures carrying a tag
    Entries {
        /// Tag to look up
        tag: String,
    },
    /// Render the gallery page for a tag (and optionally a picture) to HTML
    Show {
        /// Tag to select
        tag: String,
        /// Picture to open in the detail view
        #[arg(long)]
        picture: Option<String>,
        /// Output HTML file
        #[arg(long, default_value = "gallery.html")]
        output: PathBuf,
    },
    /// Download a picture, or its thumbnail
    Fetch {
        /// Picture name
        picture: String,
        /// Download the thumbnail instead of the full image
        #[arg(long)]
        thumbnail: bool,
        /// Output directory
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tag_gallery=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load config (with the `--base-url` override applied) and build the client.
fn connect(
    config_dir: &Path,
    base_url: Option<String>,
) -> Result<(GalleryConfig, HttpGalleryService), Box<dyn std::error::Error>> {
    let mut config = config::load_config(config_dir)?;
    if let Some(base_url) = base_url {
        config.service.base_url = base_url;
        config.validate()?;
    }
    let service = HttpGalleryService::new(&config.service)?;
    Ok((config, service))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Tags => {
            let (_, service) = connect(&cli.config_dir, cli.base_url)?;
            let tags = service.tags().await?;
            output::print_tags(&tags);
        }
        Command::Entries { tag } => {
            let (_, service) = connect(&cli.config_dir, cli.base_url)?;
            let entries = service.entries_for_tag(&tag).await?;
            output::print_entries(&tag, &entries);
        }
        Command::Show {
            tag,
            picture,
            output: output_path,
        } => {
            let (config, service) = connect(&cli.config_dir, cli.base_url)?;
            let mut gallery = Gallery::new(service, ImageLinks::new(&config.page.image_base));
            gallery.load_tags().await?;
            gallery.select_tag(&tag).await?;
            if let Some(name) = picture {
                if !gallery.select_picture(&name) {
                    warn!(picture = %name, tag = %tag, "picture is not tagged with the selected tag");
                }
            }
            let html = gallery.page().render_document(&config.page);
            std::fs::write(&output_path, html.into_string())?;
            output::print_page_summary(gallery.page(), &output_path);
        }
        Command::Fetch {
            picture,
            thumbnail,
            output: output_dir,
        } => {
            let (_, service) = connect(&cli.config_dir, cli.base_url)?;
            let kind = if thumbnail {
                ImageKind::Thumbnail
            } else {
                ImageKind::Picture
            };
            let fetched = fetch::fetch_image(&service, &picture, kind, &output_dir).await?;
            output::print_fetched(&fetched);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
