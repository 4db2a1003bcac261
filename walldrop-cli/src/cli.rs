use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(name = "Walldrop", author, version, about, long_about = None)]
pub struct Cli {
    /// Where to keep the wallpaper repository.
    ///
    /// The `unchecked`, `checked` and `unwanted` directories are created inside it.
    #[clap(short = 'o', long, value_name = "PATH", help_heading = "SAVE")]
    pub output: Option<PathBuf>,

    /// Maximum time in seconds a single request may take
    #[clap(
        long,
        value_name = "SECONDS",
        value_parser(clap::value_parser!(u64).range(1..)),
        help_heading = "DOWNLOAD"
    )]
    pub timeout: Option<u64>,

    /// Keep going when a tag fails, instead of stopping the whole sync
    #[clap(long, action, help_heading = "DOWNLOAD")]
    pub skip_failed_tags: bool,

    /// Don't log in, even if credentials are configured.
    ///
    /// The subscriptions page requires a session, so this is mostly useful against mirrors.
    #[clap(long, action, help_heading = "GENERAL")]
    pub no_login: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::parse_from([
            "walldrop",
            "-o",
            "/srv/walls",
            "--timeout",
            "15",
            "--skip-failed-tags",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("/srv/walls")));
        assert_eq!(cli.timeout, Some(15));
        assert!(cli.skip_failed_tags);
        assert!(!cli.no_login);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["walldrop", "--timeout", "0"]).is_err());
    }
}
