//! Remote endpoints of the gallery.
//!
//! Every URL the client touches is derived from a [`ServerConfig`], so the whole client can be
//! pointed at another host (a mirror, or a mock server in tests) by changing `base_url`.
use walldrop_common::serde::{self, Deserialize, Serialize};
use walldrop_common::USER_AGENT;
use std::fmt::Display;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(crate = "self::serde", default, deny_unknown_fields)]
pub struct ServerConfig {
    pub name: String,
    pub pretty_name: String,
    pub user_agent: String,
    /// Scheme and host, without a trailing slash. e.g. `https://wallhaven.cc`
    pub base_url: String,
    pub subscription_path: String,
    pub search_path: String,
    /// Path prefix of wallpaper pages. Listing links look like `<base_url><wallpaper_path>/<id>`.
    pub wallpaper_path: String,
    pub login_path: String,
    pub login_form_path: String,
    /// Full-size image location. `{prefix}` expands to the first two characters of the id,
    /// `{id}` to the id and `{ext}` to `jpg` or `png`.
    pub image_url_template: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: String::from("wallhaven"),
            pretty_name: String::from("Wallhaven"),
            user_agent: USER_AGENT.to_string(),
            base_url: String::from("https://wallhaven.cc"),
            subscription_path: String::from("/subscription"),
            search_path: String::from("/search"),
            wallpaper_path: String::from("/w"),
            login_path: String::from("/login"),
            login_form_path: String::from("/auth/login"),
            image_url_template: String::from(
                "https://w.wallhaven.cc/full/{prefix}/wallhaven-{id}.{ext}",
            ),
        }
    }
}

impl ServerConfig {
    /// Default endpoints served from another host.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    #[inline]
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn subscription_url(&self) -> String {
        self.url(&self.subscription_path)
    }

    pub fn search_url(&self) -> String {
        self.url(&self.search_path)
    }

    pub fn login_url(&self) -> String {
        self.url(&self.login_path)
    }

    pub fn login_form_url(&self) -> String {
        self.url(&self.login_form_path)
    }

    /// Everything in a wallpaper link that comes before the id.
    pub fn wallpaper_url_prefix(&self) -> String {
        format!("{}/", self.url(&self.wallpaper_path))
    }

    pub fn image_url(&self, id: &str, ext: &str) -> String {
        let prefix = id.get(..2).unwrap_or(id);

        self.image_url_template
            .replace("{prefix}", prefix)
            .replace("{id}", id)
            .replace("{ext}", ext)
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_base_url() {
        let cfg = ServerConfig::with_base_url("http://127.0.0.1:4000/");

        assert_eq!(cfg.search_url(), "http://127.0.0.1:4000/search");
        assert_eq!(cfg.subscription_url(), "http://127.0.0.1:4000/subscription");
        assert_eq!(cfg.wallpaper_url_prefix(), "http://127.0.0.1:4000/w/");
        assert_eq!(cfg.login_form_url(), "http://127.0.0.1:4000/auth/login");
    }

    #[test]
    fn image_url_template_expansion() {
        let cfg = ServerConfig::default();

        assert_eq!(
            cfg.image_url("94x38z", "png"),
            "https://w.wallhaven.cc/full/94/wallhaven-94x38z.png"
        );
        assert_eq!(
            cfg.image_url("7", "jpg"),
            "https://w.wallhaven.cc/full/7/wallhaven-7.jpg"
        );
    }
}
