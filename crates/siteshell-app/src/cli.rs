use clap::Parser;

/// Siteshell - a minimal desktop shell around one web site.
#[derive(Parser, Debug)]
#[command(name = "siteshell", version, about)]
pub struct Args {
    /// Deep-link path to open instead of the home page (e.g. "/docs/abc").
    pub path: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. "siteshell=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
