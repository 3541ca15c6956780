use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the remote chat service; the /chat route is appended.
    #[arg(long, env = "CHAT_BASE_URL", default_value = "http://localhost:8000")]
    pub chat_base_url: String,

    /// Per-request timeout in seconds for calls to the chat service.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Skip the greeting banner on startup.
    #[arg(long, env = "NO_BANNER", default_value = "false")]
    pub no_banner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_service_contract() {
        let args = Args::parse_from(["chatfront"]);
        assert_eq!(args.chat_base_url, "http://localhost:8000");
        assert_eq!(args.request_timeout_secs, 30);
        assert!(!args.no_banner);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "chatfront",
            "--chat-base-url",
            "https://assistant.example.com",
            "--request-timeout-secs",
            "5",
            "--no-banner",
        ]);
        assert_eq!(args.chat_base_url, "https://assistant.example.com");
        assert_eq!(args.request_timeout_secs, 5);
        assert!(args.no_banner);
    }
}
