//! Civil Registry Preview CLI
//!
//! Usage:
//!   civil-registry-preview [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for the color palette (TOML format)
//!   --seal <FILE>            Office seal image (png, jpg, gif or svg)
//!   --strict                 Reject unknown types and incomplete records
//!   -f, --fields             Show the fields each certificate type expects
//!   -v, --verbose            Increase log verbosity (repeatable)
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use civil_registry_preview::certificate::fields;
use civil_registry_preview::{
    render_view, CertificateRecord, CertificateType, HtmlConfig, PreviewConfig, SealImage,
    Stylesheet, ValidationMode,
};

#[derive(Parser)]
#[command(name = "civil-registry-preview")]
#[command(about = "Render civil-registry certificate records as preview modals")]
struct Cli {
    /// Input record as JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet file for the color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Office seal image embedded in the certificate header
    #[arg(long)]
    seal: Option<PathBuf>,

    /// Reject unknown certificate types and records with missing fields
    #[arg(long)]
    strict: bool,

    /// Emit only the modal markup, without the surrounding HTML document
    #[arg(long)]
    fragment: bool,

    /// Emit markup without indentation
    #[arg(long)]
    compact: bool,

    /// Text shown in place of missing values
    #[arg(long, value_name = "TEXT")]
    placeholder: Option<String>,

    /// Show the fields each certificate type expects
    #[arg(short, long)]
    fields: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.fields {
        print_fields();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut html = HtmlConfig::new()
        .with_standalone(!cli.fragment)
        .with_pretty_print(!cli.compact);
    if let Some(placeholder) = &cli.placeholder {
        html = html.with_blank_placeholder(placeholder.as_str());
    }

    let validation = if cli.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    let mut config = PreviewConfig::new()
        .with_html(html)
        .with_stylesheet(stylesheet)
        .with_validation(validation);

    if let Some(path) = &cli.seal {
        match SealImage::from_file(path) {
            Ok(seal) => {
                tracing::debug!(path = %path.display(), mime_type = seal.mime_type(), "loaded office seal");
                config = config.with_seal(seal);
            }
            Err(e) => {
                eprintln!("Error loading seal '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let result = CertificateRecord::from_json(&source).and_then(|record| {
        tracing::info!(
            file = %filename,
            certificate_type = %record.certificate_type,
            "rendering certificate preview"
        );
        render_view(&record, &config)
    });

    match result {
        Ok(view) => {
            println!("{}", view);
        }
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("civil_registry_preview={}", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_intro() {
    println!(
        r#"Civil Registry Preview - certificate preview modals

USAGE:
    civil-registry-preview [OPTIONS] [FILE]
    cat record.json | civil-registry-preview

OPTIONS:
    -s, --stylesheet   Custom color palette (TOML file)
    --seal             Office seal image (png, jpg, gif, svg)
    --strict           Reject unknown types and missing fields
    --fragment         Emit the modal without an HTML document
    --compact          Emit markup without indentation
    --placeholder      Text for missing values
    -f, --fields       Show the fields each certificate type expects
    -v, --verbose      Increase log verbosity
    -h, --help         Print help

QUICK START:
    echo '{{"certificate_type": "birth", "template_data": {{"child_name": "Juan Dela Cruz"}}}}' \
        | civil-registry-preview > preview.html

Run --fields for the record fields of each certificate type."#
    );
}

fn print_fields() {
    println!("CERTIFICATE RECORD FIELDS");
    println!("=========================");
    println!();
    println!("common (header and footer)");
    println!("--------------------------");
    for field in fields::COMMON_FIELDS {
        println!("    {}", field);
    }
    for certificate_type in CertificateType::ALL {
        println!();
        let heading = format!("{} ({})", certificate_type, certificate_type.title());
        println!("{}", heading);
        println!("{}", "-".repeat(heading.len()));
        for field in fields::specific_fields(certificate_type) {
            println!("    {}", field);
        }
    }
}
