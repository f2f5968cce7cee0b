//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Upload APKs to Play tracks and promote releases between them.
#[derive(Debug, Parser)]
#[command(name = "playlift", version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "playlift.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload an APK and assign it to a track
    Publish(PublishArgs),

    /// Promote the newest release from one track to another
    Promote(PromoteArgs),
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Path to the APK to upload (overrides the config file)
    #[arg(long)]
    pub apk: Option<PathBuf>,

    /// Track that receives the upload (overrides the config file)
    #[arg(long)]
    pub track: Option<String>,

    /// Store package name (overrides the config file)
    #[arg(long)]
    pub package: Option<String>,
}

#[derive(Debug, Args)]
pub struct PromoteArgs {
    /// Track the release is promoted from (overrides the config file)
    #[arg(long)]
    pub from: Option<String>,

    /// Track the release is promoted to (overrides the config file)
    #[arg(long)]
    pub to: Option<String>,

    /// Store package name (overrides the config file)
    #[arg(long)]
    pub package: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_publish_subcommand() {
        let cli = Cli::parse_from([
            "playlift", "publish", "--apk", "out/app.apk", "--track", "alpha",
        ]);
        match cli.command {
            Command::Publish(args) => {
                assert_eq!(args.apk.unwrap(), PathBuf::from("out/app.apk"));
                assert_eq!(args.track.as_deref(), Some("alpha"));
                assert!(args.package.is_none());
            }
            _ => panic!("expected publish subcommand"),
        }
    }

    #[test]
    fn parses_promote_subcommand_with_config_path() {
        let cli = Cli::parse_from([
            "playlift",
            "promote",
            "--config",
            "ci/playlift.toml",
            "--from",
            "alpha",
            "--to",
            "beta",
        ]);
        assert_eq!(cli.config, PathBuf::from("ci/playlift.toml"));
        match cli.command {
            Command::Promote(args) => {
                assert_eq!(args.from.as_deref(), Some("alpha"));
                assert_eq!(args.to.as_deref(), Some("beta"));
            }
            _ => panic!("expected promote subcommand"),
        }
    }

    #[test]
    fn config_path_defaults() {
        let cli = Cli::parse_from(["playlift", "promote"]);
        assert_eq!(cli.config, PathBuf::from("playlift.toml"));
    }
}
