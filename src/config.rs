use anyhow::Context;
use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_PORT: u16 = 3002;
const DEFAULT_MEDIA_ROOT: &str = "./media";

/// Runtime configuration, read from the environment.
///
/// | Variable       | Required | Default        |
/// |----------------|----------|----------------|
/// | `DATABASE_URL` | yes      |                |
/// | `JWT_SECRET`   | yes      |                |
/// | `LISTEN_ADDR`  | no       | `0.0.0.0:3002` |
/// | `MEDIA_ROOT`   | no       | `./media`      |
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub listen_addr: SocketAddr,
    pub media_root: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").inspect_err(|_| error!("DATABASE_URL is not set"))?;
        let jwt_secret = env::var("JWT_SECRET").inspect_err(|_| error!("JWT_SECRET is not set"))?;

        let listen_addr = match env::var("LISTEN_ADDR") {
            Ok(addr) => addr
                .parse()
                .with_context(|| format!("LISTEN_ADDR is not a socket address: {addr}"))?,
            Err(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        };

        let media_root = env::var("MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MEDIA_ROOT));

        Ok(Self {
            database_url,
            jwt_secret,
            listen_addr,
            media_root,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("listen_addr", &self.listen_addr)
            .field("media_root", &self.media_root)
            .finish()
    }
}
