//! Command line options shared by every binary

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    pub debug: u8,

    /// Configuration file to load instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_common_args() {
        let cli = TestCli::parse_from(["prog", "-d", "2", "--config", "/tmp/panels.json"]);
        assert_eq!(cli.common.debug, 2);
        assert_eq!(cli.common.config, Some(PathBuf::from("/tmp/panels.json")));

        let cli = TestCli::parse_from(["prog"]);
        assert_eq!(cli.common.debug, 0);
        assert!(cli.common.config.is_none());
    }
}
