use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "phantomeye",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "PhantomEye - OSINT Framework",
    long_about = "PhantomEye collects publicly known subdomains of a target domain, guesses\nrole-based email addresses and renders both into a PDF report."
)]
pub struct Args {
    /// Target domain (ex: tesla.com)
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN")]
    pub domain: String,
}

impl Args {
    /// True when the process was started without any argument at all,
    /// in which case the full help is printed instead of a parse error.
    pub fn needs_usage<I>(args: I) -> bool
    where
        I: IntoIterator<Item = OsString>,
    {
        args.into_iter().nth(1).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_short_and_long_domain() {
        let args = Args::try_parse_from(["phantomeye", "-d", "example.com"]).unwrap();
        assert_eq!(args.domain, "example.com");

        let args = Args::try_parse_from(["phantomeye", "--domain", "tesla.com"]).unwrap();
        assert_eq!(args.domain, "tesla.com");
    }

    #[test]
    fn test_missing_domain_is_rejected() {
        let err = Args::try_parse_from(["phantomeye", "--domain"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = Args::try_parse_from(["phantomeye"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["phantomeye", "-d", "example.com", "--json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_needs_usage() {
        assert!(Args::needs_usage(vec![OsString::from("phantomeye")]));
        assert!(!Args::needs_usage(vec![
            OsString::from("phantomeye"),
            OsString::from("-d"),
        ]));
    }
}
