// Ammaar Site - Text Preview

use clap::Parser;
use tracing::{error, info};

use ammaar_app::pages::Page;
use ammaar_app::{preview, Site};
use ammaar_common::logging::init_tracing;
use ammaar_common::SiteConfig;
use ammaar_leads::{Interest, LeadConfig};

#[derive(Parser)]
#[command(name = "site-preview")]
#[command(about = "Render a page of the Ammaar site as text and try the contact form")]
struct Cli {
    /// Path to render, e.g. "/projects?filter=Farmland"
    #[arg(long, default_value = "/")]
    path: String,

    /// Open the property modal on this project id
    #[arg(long, value_name = "PROJECT_ID")]
    open: Option<String>,

    /// Submit the contact form with the fields below
    #[arg(long)]
    submit: bool,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    email: String,

    /// Residential Property, Farm Lands, Investment or Other
    #[arg(long, default_value = "Residential Property")]
    interest: String,

    #[arg(long, default_value = "")]
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = SiteConfig::from_env()?;
    init_tracing(&config)?;

    info!("Starting Ammaar site preview");

    let lead_config = LeadConfig::from_env().map_err(|e| {
        error!("Failed to load lead configuration: {}", e);
        e
    })?;
    let site = Site::build(config, lead_config)?;

    let path = if args.submit { "/contact" } else { args.path.as_str() };
    let mut view = match site.navigate(path) {
        Some(view) => view?,
        None => {
            println!("No page at {}", path);
            return Ok(());
        }
    };

    if let Some(id) = &args.open {
        if let Err(e) = view.page.open(id) {
            if !e.is_client_error() {
                return Err(e.into());
            }
            println!("Cannot open '{}': {} [{}]", id, e, e.error_code());
        }
    }

    if args.submit {
        if let Page::Contact(form) = &mut view.page {
            let fields = form.fields_mut();
            fields.name = args.name;
            fields.phone = args.phone;
            fields.email = args.email;
            fields.interest = args.interest.parse::<Interest>()?;
            fields.message = args.message;

            let phase = form.submit(site.submitter()).await?;
            info!(%phase, "Contact form submitted");
        }
    }

    print!("{}", preview::render(&view, site.links()));
    Ok(())
}
