use super::request::RequestBuilder;
use entity::users;
use migration::MigratorTrait;
use oj_backend::{
    auth::{Claims, Jwt},
    config::Config,
    State,
};
use reqwest::{Client, Method};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DbConn, Set};
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use tokio::net::TcpListener;
use uuid::Uuid;

const JWT_SECRET: &str = "test-secret";

async fn setup_database() -> DbConn {
    // Every connection to `sqlite::memory:` opens a new database, so the pool
    // is pinned to a single connection.
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(config: &Config, db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let state = State::with_database(config, db);

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        oj_backend::run(listener, state).await.unwrap();
    });

    addr
}

#[derive(Debug)]
pub struct App {
    addr: SocketAddr,
    client: Client,
    jwt_secret: String,
    token: String,
    media_root: PathBuf,
    pub admin_id: i32,
}

#[allow(unused)]
impl App {
    pub async fn new() -> Self {
        let db = setup_database().await;

        let admin = users::ActiveModel {
            username: Set("admin".to_owned()),
            is_staff: Set(true),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("failed to create admin user");

        let media_root = std::env::temp_dir().join(format!("oj-backend-test-{}", Uuid::new_v4()));
        let config = Config {
            database_url: "sqlite::memory:".to_owned(),
            jwt_secret: JWT_SECRET.to_owned(),
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            media_root: media_root.clone(),
        };

        let addr = setup_backend(&config, db).await;

        let mut app = App {
            addr,
            client: Client::new(),
            jwt_secret: JWT_SECRET.to_owned(),
            token: String::new(),
            media_root,
            admin_id: admin.id,
        };
        app.token = app.token_for(admin.id, true);

        app
    }

    pub fn token_for(&self, subject: i32, staff: bool) -> String {
        let claims = Claims {
            subject,
            staff,
            expires_at: chrono::Utc::now().timestamp() + 3600,
        };

        Jwt::new(self.jwt_secret.as_bytes())
            .issue(&claims)
            .expect("failed to issue token")
    }

    pub fn media_root(&self) -> &PathBuf {
        &self.media_root
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    /// A request without credentials.
    pub fn anonymous(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.request(method, self.get_url(url)))
    }

    /// A request authenticated as the staff user.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.anonymous(method, url).token(&self.token)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}
