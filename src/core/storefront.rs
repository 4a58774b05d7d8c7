//! Storefront façade over the active content server.

use tracing::info;

use super::receipt::Receipt;
use super::server::ContentServing;
use crate::library::ContentKind;

/// Forwards checkouts to whichever server is currently active
pub struct Storefront {
    server: Box<dyn ContentServing>,
}

impl Storefront {
    pub fn new(server: impl ContentServing + 'static) -> Self {
        Self {
            server: Box::new(server),
        }
    }

    /// Replace the active server; earlier receipts are unaffected
    pub fn set_active_server(&mut self, server: impl ContentServing + 'static) {
        let from = self.server.kind();
        let to = server.kind();
        info!(%from, %to, "Switching active server");
        self.server = Box::new(server);
    }

    /// Kind of content the active server sells
    pub fn active_kind(&self) -> ContentKind {
        self.server.kind()
    }

    /// Check out a wish list against the active server
    pub fn checkout<I, S>(&self, titles: I) -> Receipt
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let wish_list: Vec<String> = titles.into_iter().map(Into::into).collect();
        self.server.serve(&wish_list)
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("kind", &self.server.kind())
            .field("speed_mbps", &self.server.speed_mbps())
            .finish()
    }
}
