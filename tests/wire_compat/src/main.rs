fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use steamdata::details::parse_app_details;
    use steamdata::{AppCatalog, OwnedGame, RankBy, rank};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    fn load_bytes(name: &str) -> Vec<u8> {
        let path = fixtures_dir().join(name);
        fs::read(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        serde_json::from_slice(&load_bytes(name))
            .unwrap_or_else(|e| panic!("failed to parse fixture {name}: {e}"))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and compares
    /// the JSON values.
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));
        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  Rust:    {reserialized}"
        );
    }

    // --- Catalog cache file ---

    #[test]
    fn fixture_catalog_cache_roundtrip() {
        roundtrip_test::<AppCatalog>("catalog_cache.json");
    }

    #[test]
    fn fixture_catalog_cache_search() {
        let catalog: AppCatalog = serde_json::from_slice(&load_bytes("catalog_cache.json")).unwrap();
        assert_eq!(catalog.apps.len(), 4);
        assert_eq!(catalog.resolve("Naraka Bladepoint").unwrap(), "1203220");
        assert_eq!(catalog.resolve("half-life 2").unwrap(), "220");
        assert_eq!(catalog.resolve("20").unwrap(), "Team Fortress Classic");
    }

    // --- Owned games projection ---

    #[test]
    fn fixture_owned_games_roundtrip() {
        roundtrip_test::<Vec<OwnedGame>>("owned_games.json");
    }

    #[test]
    fn fixture_owned_games_rank() {
        let games: Vec<OwnedGame> = serde_json::from_slice(&load_bytes("owned_games.json")).unwrap();
        let top = rank(games, Some(RankBy::TotalPlaytime), 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Portal 2");
    }

    // --- App details ---

    #[test]
    fn fixture_appdetails_full_game() {
        let details = parse_app_details(620, &load_bytes("appdetails_620.json")).unwrap();

        assert_eq!(details.app_type, "game");
        assert_eq!(details.name, "Portal 2");
        assert_eq!(details.steam_appid, 620);
        assert_eq!(details.required_age_years(), Some(0));
        assert_eq!(details.dlc, vec![323180]);
        assert_eq!(details.website.as_deref(), Some("http://www.thinkwithportals.com/"));

        assert!(details.pc_requirements.is_some());
        assert!(details.mac_requirements.is_none());
        let linux = details.linux_requirements.as_ref().unwrap();
        assert!(linux.minimum.as_deref().unwrap().contains("Ubuntu"));
        assert!(linux.recommended.is_none());

        let price = details.price_overview.as_ref().unwrap();
        assert_eq!(price.currency, "USD");
        assert_eq!(price.final_price, 199);

        let group = &details.package_groups[0];
        assert_eq!(group.display_type, serde_json::json!(0));
        assert_eq!(group.subs[0].packageid, 7877);
        assert_eq!(group.subs[0].can_get_free_license, serde_json::json!("0"));

        assert!(details.platforms.windows && details.platforms.linux && !details.platforms.mac);
        assert_eq!(details.metacritic.as_ref().unwrap().score, 95);
        assert_eq!(details.categories.len(), 2);
        assert_eq!(details.genres[1].id, "25");
        assert_eq!(details.screenshots.len(), 1);
        assert!(details.movies[0].mp4.as_ref().unwrap().max.ends_with("movie_max.mp4"));
        assert_eq!(details.recommendations.unwrap().total, 391000);
        assert_eq!(details.achievements.as_ref().unwrap().highlighted[0].name, "Wake Up Call");
        assert_eq!(details.release_date.as_ref().unwrap().date, "18 Apr, 2011");
        assert!(details.content_descriptors.as_ref().unwrap().ids.is_empty());

        // Fields without a typed counterpart are retained.
        assert_eq!(details.extra["ratings"]["esrb"]["rating"], "e10");
    }

    #[test]
    fn fixture_appdetails_dlc() {
        let details = parse_app_details(323180, &load_bytes("appdetails_dlc.json")).unwrap();

        assert_eq!(details.app_type, "dlc");
        assert_eq!(details.required_age_years(), Some(18));
        assert!(details.website.is_none());
        assert!(details.price_overview.is_none());
        assert!(details.pc_requirements.is_none());
        assert!(details.publishers.is_empty());
        assert_eq!(
            details.content_descriptors.as_ref().unwrap().notes,
            serde_json::json!("Mature content")
        );
        assert_eq!(details.extra["fullgame"]["name"], "Portal 2");
    }

    #[test]
    fn fixture_appdetails_unsuccessful() {
        let err = parse_app_details(404404, &load_bytes("appdetails_unsuccessful.json")).unwrap_err();
        assert!(err.is_not_found(), "got {err:?}");
    }
}
