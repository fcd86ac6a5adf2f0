use clap::{Parser, command};

use crate::poller::timed_poller::DEFAULT_ITERATION_BOUND;

/// Arguments for the local runner binary, which drives the same polling
/// loop as the deployed function against an arbitrary base URL.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long)]
    pub base_url: String,

    #[arg(short, long, default_value_t = DEFAULT_ITERATION_BOUND)]
    pub iteration_bound: u32,

    #[arg(short, long, default_value_t = 1000)]
    pub pause_millis: u64,
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::cli_arguments::CliArguments;
    use crate::poller::timed_poller::DEFAULT_ITERATION_BOUND;

    #[test]
    fn test_cli_arguments_long_flags() {
        let args = CliArguments::parse_from([
            "repeater",
            "--base-url",
            "http://localhost:9000",
            "--iteration-bound",
            "10",
            "--pause-millis",
            "50",
        ]);

        assert_eq!(args.base_url, "http://localhost:9000");
        assert_eq!(args.iteration_bound, 10);
        assert_eq!(args.pause_millis, 50);
    }

    #[test]
    fn test_cli_arguments_short_flags() {
        let args = CliArguments::parse_from(["repeater", "-b", "https://example.com"]);

        assert_eq!(args.base_url, "https://example.com");
        assert_eq!(args.iteration_bound, DEFAULT_ITERATION_BOUND);
        assert_eq!(args.pause_millis, 1000);
    }
}
