//! Owned games (`IPlayerService/GetOwnedGames`). Not cached.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::types::{OwnedGame, OwnedGamesResponse};

const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";

impl Client {
    /// Lists the games owned by `steam_id`, including free games played.
    ///
    /// Fails with [`Error::NotFound`] when the account reports no games,
    /// which is also what a private profile looks like.
    pub async fn owned_games(&self, api_key: &str, steam_id: &str) -> Result<Vec<OwnedGame>, Error> {
        let url = format!("{}{OWNED_GAMES_PATH}", self.api_base_url);
        let fetched = self
            .get(
                &url,
                &[
                    ("key", api_key),
                    ("steamid", steam_id),
                    ("include_appinfo", "true"),
                    ("include_played_free_games", "true"),
                    ("format", "json"),
                ],
            )
            .await?;
        let resp: OwnedGamesResponse = fetched.decode()?;

        if resp.response.game_count == 0 {
            return Err(Error::NotFound(format!("no games found for Steam ID {steam_id}")));
        }

        let games: Vec<OwnedGame> = resp.response.games.into_iter().map(OwnedGame::from).collect();
        debug!(steam_id, count = games.len(), "fetched owned games");
        Ok(games)
    }
}
