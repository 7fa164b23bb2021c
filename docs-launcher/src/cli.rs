use backend::config::{
    DEFAULT_CONFIGS_DIR, DEFAULT_EXAMPLES_DIR, DEFAULT_MANIFEST_PATH, DEFAULT_PAGES_DIR,
    DEFAULT_REFERENCE_DIR,
};
use backend::DocsConfig;
use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Serve agent manifests, documentation pages and examples")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Build a manifest from an agent config and write it as JSON")]
    Generate {
        #[arg(long)]
        config: PathBuf,
        #[arg(long, env = "AGENT_MANIFEST_PATH", default_value = DEFAULT_MANIFEST_PATH)]
        out: PathBuf,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, env = "AGENT_DOCS_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,
    #[arg(long, env = "AGENT_DOCS_PORT", default_value_t = 8000)]
    pub port: u16,
    #[arg(long, env = "AGENT_MANIFEST_PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest_path: PathBuf,
    #[arg(long, env = "AGENT_DOCS_DIR", default_value = DEFAULT_REFERENCE_DIR)]
    pub reference_dir: PathBuf,
    #[arg(long, env = "AGENT_PAGES_DIR", default_value = DEFAULT_PAGES_DIR)]
    pub pages_dir: PathBuf,
    #[arg(long, env = "AGENT_EXAMPLES_DIR", default_value = DEFAULT_EXAMPLES_DIR)]
    pub examples_dir: PathBuf,
    #[arg(long, env = "AGENT_CONFIGS_DIR", default_value = DEFAULT_CONFIGS_DIR)]
    pub configs_dir: PathBuf,
}

impl ServeArgs {
    pub fn docs_config(&self) -> DocsConfig {
        DocsConfig {
            manifest_path: self.manifest_path.clone(),
            reference_dir: self.reference_dir.clone(),
            pages_dir: self.pages_dir.clone(),
            examples_dir: self.examples_dir.clone(),
            configs_dir: self.configs_dir.clone(),
        }
    }
}
