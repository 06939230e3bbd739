use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal client for a blog CRUD server", long_about = None)]
struct ClapArgs {
    /// Profile name to read from the profile file. Default is 'default'.
    /// A missing profile falls back to the built-in server.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Base URL of the blog server, overriding the profile for this run
    #[clap(short = 's', long, help = "blog server base URL")]
    server: Option<String>,

    #[clap(short = 'v', long, help = "write debug logs")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    server: Option<String>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            server: args.server,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
