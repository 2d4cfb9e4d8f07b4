//! Vanity name resolution (`ISteamUser/ResolveVanityURL`). Not cached.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::types::{AccountIdentity, VanityResponse};

const RESOLVE_VANITY_PATH: &str = "/ISteamUser/ResolveVanityURL/v0001/";

impl Client {
    /// Resolves a vanity name to a Steam ID.
    ///
    /// Returns the identity together with the HTTP status of the response.
    /// Every error that follows a response carries that status too (see
    /// [`Error::status`]).
    pub async fn resolve_vanity_name(
        &self,
        api_key: &str,
        username: &str,
    ) -> Result<(AccountIdentity, u16), Error> {
        let url = format!("{}{RESOLVE_VANITY_PATH}", self.api_base_url);
        let fetched = self
            .get(&url, &[("key", api_key), ("vanityurl", username)])
            .await?;
        let resp: VanityResponse = fetched.decode()?;

        if resp.response.success != 1 {
            debug!(
                username,
                status = fetched.status,
                success = resp.response.success,
                message = resp.response.message.as_deref().unwrap_or_default(),
                "vanity name not resolved"
            );
            return Err(Error::ResolutionFailed {
                username: username.to_string(),
                status: fetched.status,
            });
        }

        Ok((
            AccountIdentity {
                steam_id: resp.response.steamid,
            },
            fetched.status,
        ))
    }
}
