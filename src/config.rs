//! Environment-driven configuration.
//!
//! Values come from environment variables with defaults for local use.
//! Unparsable numbers fall back to the default with a warning.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PAGE_TITLE: &str = "Sadhaka - Your Guide to Spiritual Practice";
pub const DEFAULT_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Options that affect the HTML document shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub page_title: String,
    /// Empty disables the stylesheet link.
    pub stylesheet_href: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            stylesheet_href: DEFAULT_STYLESHEET.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `SADHAKA_PAGE_TITLE`, `SADHAKA_STYLESHEET`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            page_title: lookup("SADHAKA_PAGE_TITLE").unwrap_or(defaults.page_title),
            stylesheet_href: lookup("SADHAKA_STYLESHEET").unwrap_or(defaults.stylesheet_href),
        }
    }
}

/// Configuration for the `page_server` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub render: RenderOptions,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `BIND_ADDR`, `PORT` plus the render options.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let default_addr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid BIND_ADDR '{}', using {}", raw, default_addr);
                default_addr
            }),
            None => default_addr,
        };

        Self {
            bind_addr,
            port,
            render: RenderOptions::from_lookup(&lookup),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Configuration for the `generate_page` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub render: RenderOptions,
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `OUTPUT_DIR` plus the render options.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            output_dir: PathBuf::from(
                lookup("OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            render: RenderOptions::from_lookup(&lookup),
        }
    }
}
