//! Live-mode pipeline tests against a local mock of the source site.
//!
//! Covers the fetch error policy (roster failures fatal, player-page
//! failures isolated skips), the cross-reference invariant, discovery
//! ordering, and the player cap.

use euroscout::pipeline::{run_live, LiveOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"<html><body>
    <a href="/basketball/team/MAD/roster">Real Madrid</a>
    <a href="/basketball/team/BAR/roster">FC Barcelona</a>
</body></html>"#;

const MAD_ROSTER: &str = r#"<html><body>
    <span>Record 12-4</span>
    <a href="/basketball/player/100/alpha-one">Alpha One</a>
    <a href="/basketball/player/200/beta-two">Beta Two</a>
</body></html>"#;

const BAR_ROSTER: &str = r#"<html><body>
    <span>Record 9-7</span>
    <a href="/basketball/player/300/gamma-three">Gamma Three</a>
</body></html>"#;

fn player_page(name: &str, pts: &str) -> String {
    format!(
        r#"<html><head>
            <meta property="og:title" content="{name} | Proballers">
        </head><body>
            <div>{pts} PTS</div>
            <div>Guard Nationality France</div>
        </body></html>"#
    )
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn opts(server: &MockServer) -> LiveOptions {
    LiveOptions {
        site_root: server.uri(),
        listing_url: format!("{}/listing", server.uri()),
        concurrency: 2,
        ..Default::default()
    }
}

#[tokio::test]
async fn live_mode_resolves_and_cross_references() {
    let server = MockServer::start().await;
    mount_page(&server, "/listing", LISTING).await;
    mount_page(&server, "/basketball/team/MAD/roster", MAD_ROSTER).await;
    mount_page(&server, "/basketball/team/BAR/roster", BAR_ROSTER).await;
    mount_page(
        &server,
        "/basketball/player/100/alpha-one",
        &player_page("Alpha One", "14.2"),
    )
    .await;
    mount_page(
        &server,
        "/basketball/player/200/beta-two",
        &player_page("Beta Two", "8.0"),
    )
    .await;
    mount_page(
        &server,
        "/basketball/player/300/gamma-three",
        &player_page("Gamma Three", "11.1"),
    )
    .await;

    let dataset = run_live(&opts(&server)).await.unwrap();

    // Teams in listing order, with records resolved from roster text.
    let team_ids: Vec<&str> = dataset.teams.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(team_ids, vec!["MAD", "BAR"]);
    assert_eq!(dataset.teams[0].record.as_deref(), Some("12-4"));
    assert_eq!(dataset.teams[1].record.as_deref(), Some("9-7"));

    // Players in roster order (sorted within each roster).
    let player_ids: Vec<&str> = dataset.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(player_ids, vec!["100", "200", "300"]);
    assert_eq!(dataset.players[0].name, "Alpha One");
    assert_eq!(dataset.players[0].season_avg_pts, 14.2);

    // Cross-reference invariant: every non-empty teamId is a real team id.
    for player in &dataset.players {
        assert!(
            player.team_id.is_empty()
                || dataset.teams.iter().any(|t| t.id == player.team_id),
            "dangling team id {:?}",
            player.team_id
        );
    }
    assert_eq!(dataset.players[0].team_id, "MAD");
    assert_eq!(dataset.players[2].team_id, "BAR");

    // Filler shape: every team gets five position values.
    for row in dataset.defense_vs_position.values() {
        assert_eq!(row.len(), 5);
    }
    assert_eq!(dataset.schedule.len(), 1); // one MAD/BAR pairing
}

#[tokio::test]
async fn player_page_failure_is_an_isolated_skip() {
    let server = MockServer::start().await;
    mount_page(&server, "/listing", LISTING).await;
    mount_page(&server, "/basketball/team/MAD/roster", MAD_ROSTER).await;
    mount_page(&server, "/basketball/team/BAR/roster", BAR_ROSTER).await;
    // Player 100 is never mounted: wiremock answers 404.
    mount_page(
        &server,
        "/basketball/player/200/beta-two",
        &player_page("Beta Two", "8.0"),
    )
    .await;
    mount_page(
        &server,
        "/basketball/player/300/gamma-three",
        &player_page("Gamma Three", "11.1"),
    )
    .await;

    let dataset = run_live(&opts(&server)).await.unwrap();
    let player_ids: Vec<&str> = dataset.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(player_ids, vec!["200", "300"]);
}

#[tokio::test]
async fn malformed_player_page_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, "/listing", LISTING).await;
    mount_page(&server, "/basketball/team/MAD/roster", MAD_ROSTER).await;
    mount_page(&server, "/basketball/team/BAR/roster", BAR_ROSTER).await;
    // No og:title and no <title>: the resolver must return no entity.
    mount_page(
        &server,
        "/basketball/player/100/alpha-one",
        "<html><body>broken page</body></html>",
    )
    .await;
    mount_page(
        &server,
        "/basketball/player/200/beta-two",
        &player_page("Beta Two", "8.0"),
    )
    .await;
    mount_page(
        &server,
        "/basketball/player/300/gamma-three",
        &player_page("Gamma Three", "11.1"),
    )
    .await;

    let dataset = run_live(&opts(&server)).await.unwrap();
    let player_ids: Vec<&str> = dataset.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(player_ids, vec!["200", "300"]);
}

#[tokio::test]
async fn roster_failure_is_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, "/listing", LISTING).await;
    mount_page(&server, "/basketball/team/MAD/roster", MAD_ROSTER).await;
    // BAR roster is never mounted: 404 must abort the run.

    let err = run_live(&opts(&server)).await.unwrap_err();
    assert!(err.to_string().contains("/basketball/team/BAR/roster"));
}

#[tokio::test]
async fn listing_failure_is_fatal() {
    let server = MockServer::start().await;
    let err = run_live(&opts(&server)).await.unwrap_err();
    assert!(err.to_string().contains("/listing"));
}

#[tokio::test]
async fn max_players_cap_stops_collection() {
    let server = MockServer::start().await;
    mount_page(&server, "/listing", LISTING).await;
    mount_page(&server, "/basketball/team/MAD/roster", MAD_ROSTER).await;
    mount_page(&server, "/basketball/team/BAR/roster", BAR_ROSTER).await;
    mount_page(
        &server,
        "/basketball/player/100/alpha-one",
        &player_page("Alpha One", "14.2"),
    )
    .await;

    let opts = LiveOptions {
        max_players: Some(1),
        ..opts(&server)
    };
    let dataset = run_live(&opts).await.unwrap();
    assert_eq!(dataset.players.len(), 1);
    assert_eq!(dataset.players[0].id, "100");
}

#[tokio::test]
async fn max_teams_cap_stops_discovery() {
    let server = MockServer::start().await;
    mount_page(&server, "/listing", LISTING).await;
    mount_page(&server, "/basketball/team/MAD/roster", MAD_ROSTER).await;
    mount_page(
        &server,
        "/basketball/player/100/alpha-one",
        &player_page("Alpha One", "14.2"),
    )
    .await;
    mount_page(
        &server,
        "/basketball/player/200/beta-two",
        &player_page("Beta Two", "8.0"),
    )
    .await;

    let opts = LiveOptions {
        max_teams: Some(1),
        ..opts(&server)
    };
    let dataset = run_live(&opts).await.unwrap();
    assert_eq!(dataset.teams.len(), 1);
    assert_eq!(dataset.teams[0].id, "MAD");
}
