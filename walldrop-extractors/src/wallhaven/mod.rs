//! Gallery client for `https://wallhaven.cc`
//!
//! The wallhaven client has the following features:
//! - Authentication (session cookie from the login form)
//! - Tag subscription discovery
//! - Paginated search result scraping
//! - Streamed image download
//!
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use walldrop_common::{
    log::debug,
    reqwest::{header, Client},
    search::{SearchQuery, PAGE_SIZE},
    tokio::{
        fs::{remove_file, rename, OpenOptions},
        io::{AsyncWriteExt, BufWriter},
    },
    wallpaper::{Subscriptions, Wallpaper, WallpaperPage},
};

use crate::auth::{AuthState, Credentials, Error};
use crate::error::ExtractorError;
use crate::extractor::caps::Auth;
use crate::extractor::Gallery;
use crate::extractor_config::ServerConfig;

pub mod parse;

/// Main object to talk to the gallery.
///
/// Holds an injected [`Client`], which must have its cookie store enabled for logins to stick.
#[derive(Debug, Clone)]
pub struct WallhavenClient {
    client: Client,
    config: ServerConfig,
    auth_state: AuthState,
}

impl WallhavenClient {
    pub const fn new(client: Client, config: ServerConfig) -> Self {
        Self {
            client,
            config,
            auth_state: AuthState::NotAuthenticated,
        }
    }

    /// Builds the shared HTTP transport: the server's user agent, a cookie store and a per-request
    /// deadline.
    pub fn build_client(config: &ServerConfig, timeout: Duration) -> Result<Client, ExtractorError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(client)
    }

    async fn get_html(&self, url: &str) -> Result<String, ExtractorError> {
        debug!("Fetching {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

impl Gallery for WallhavenClient {
    async fn fetch_subscribed_tags(&self) -> Result<Subscriptions, ExtractorError> {
        let html = self.get_html(&self.config.subscription_url()).await?;
        let subs = parse::subscribed_tags(&html)?;

        debug!("Found {} subscribed tags", subs.len());
        Ok(subs)
    }

    async fn search(&self, query: &SearchQuery, page: u16) -> Result<WallpaperPage, ExtractorError> {
        if page == 0 {
            return Err(ExtractorError::ZeroPage);
        }

        let params = query.query_params(page);
        debug!("Fetching search page {} for {}", page, query.query);

        let html = self
            .client
            .get(self.config.search_url())
            .header("X-Requested-With", "XMLHttpRequest")
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let wallpapers = parse::search_results(&html, &self.config)?;
        debug!("Page {} has {} entries", page, wallpapers.len());

        Ok(WallpaperPage::new(page, wallpapers))
    }

    async fn download(&self, wallpaper: &Wallpaper, destination: &Path) -> Result<u64, ExtractorError> {
        let part = part_path(destination);

        debug!(
            "Fetching {} for wallpaper {} into {}",
            wallpaper.image_url,
            wallpaper.id,
            destination.display()
        );

        match self.stream_to(&wallpaper.image_url, &part).await {
            Ok(size) => {
                rename(&part, destination).await?;
                Ok(size)
            }
            Err(err) => {
                if let Err(rm_err) = remove_file(&part).await {
                    debug!("Could not remove {}: {}", part.display(), rm_err);
                }
                Err(err)
            }
        }
    }

    #[inline]
    fn page_size(&self) -> usize {
        PAGE_SIZE
    }
}

impl WallhavenClient {
    async fn stream_to(&self, url: &str, out_path: &Path) -> Result<u64, ExtractorError> {
        let res = self.client.get(url).send().await?.error_for_status()?;

        let mut stream = res.bytes_stream();

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(out_path)
            .await?;

        let mut bw = BufWriter::new(file);
        let mut written = 0;

        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            written += chunk.len() as u64;
            bw.write_all_buf(&mut chunk).await?;
        }

        bw.flush().await?;

        Ok(written)
    }
}

impl Auth for WallhavenClient {
    async fn auth(&mut self, credentials: &Credentials) -> Result<(), ExtractorError> {
        let login_page = self.get_html(&self.config.login_url()).await?;

        let Some(token) = parse::form_token(&login_page) else {
            return Err(ExtractorError::parse("login page has no form token"));
        };

        debug!("Logging in as {}", credentials.username);

        let res = self
            .client
            .post(self.config.login_form_url())
            .header(header::REFERER, self.config.login_url())
            .form(&[
                ("_token", token.as_str()),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        // A rejected login redirects back to the form.
        if res.url().path() == self.config.login_path {
            self.auth_state = AuthState::NotAuthenticated;
            return Err(Error::InvalidLogin.into());
        }

        debug!("User authenticated");
        self.auth_state = AuthState::Authenticated;

        Ok(())
    }

    #[inline]
    fn is_authenticated(&self) -> bool {
        self.auth_state.is_auth()
    }
}

fn part_path(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}
