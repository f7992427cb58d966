use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn token_pair_parses_login_response() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"access":"A","refresh":"R"}"#).expect("token pair");
    assert_eq!(pair.access, "A");
    assert_eq!(pair.refresh, "R");
}

#[test]
fn user_parses_me_response() {
    let user: User = serde_json::from_str(r#"{"id":3,"username":"alice"}"#).expect("user");
    assert_eq!(user.id, 3);
    assert_eq!(user.username, "alice");
}

// =============================================================
// Movie payloads
// =============================================================

#[test]
fn movie_list_item_tolerates_null_optionals() {
    let item: MovieListItem = serde_json::from_str(
        r#"{"id":1,"title":"Oldboy","poster_url":"","release_year":null,"avg_score":null}"#,
    )
    .expect("list item");
    assert!(item.release_year.is_none());
    assert!(item.avg_score.is_none());
}

#[test]
fn movie_detail_parses_nested_genres_and_casts() {
    let detail: MovieDetail = serde_json::from_str(
        r#"{
            "id": 7,
            "title": "Parasite",
            "original_title": "기생충",
            "overview": "A poor family schemes.",
            "poster_url": "http://img/7.jpg",
            "release_year": 2019,
            "country": "KR",
            "runtime": 132,
            "genres": [{"id":1,"name":"Drama"}],
            "casts": [{
                "id": 11,
                "person": {"id":5,"name":"Song Kang-ho","profile":""},
                "role": "actor",
                "character_name": "Ki-taek"
            }],
            "avg_score": 4.6,
            "user_score": null,
            "is_in_watchlist": false
        }"#,
    )
    .expect("movie detail");
    assert_eq!(detail.genres[0].name, "Drama");
    assert_eq!(detail.casts[0].person.name, "Song Kang-ho");
    assert_eq!(detail.casts[0].role, "actor");
    assert!(detail.user_score.is_none());
    assert!(!detail.is_in_watchlist);
}

#[test]
fn movie_detail_defaults_user_fields_when_absent() {
    // Guests get no user_score / is_in_watchlist context from some
    // endpoints; absent fields must not fail deserialization.
    let detail: MovieDetail = serde_json::from_str(
        r#"{"id":7,"title":"Parasite","release_year":2019,"runtime":132,"avg_score":null}"#,
    )
    .expect("movie detail");
    assert!(detail.user_score.is_none());
    assert!(!detail.is_in_watchlist);
    assert!(detail.genres.is_empty());
}

// =============================================================
// Reviews and watchlist
// =============================================================

#[test]
fn review_parses_like_count() {
    let review: Review = serde_json::from_str(
        r#"{"id":9,"movie":7,"author":"nick","content":"great","like_count":2,"created_at":"2024-01-01T00:00:00Z"}"#,
    )
    .expect("review");
    assert_eq!(review.like_count, 2);
    assert_eq!(review.author, "nick");
}

#[test]
fn like_toggle_parses_both_directions() {
    let on: LikeToggle =
        serde_json::from_str(r#"{"liked":true,"like_count":3}"#).expect("like on");
    assert!(on.liked);
    let off: LikeToggle =
        serde_json::from_str(r#"{"liked":false,"like_count":2}"#).expect("like off");
    assert!(!off.liked);
}

#[test]
fn watch_status_uses_uppercase_wire_strings() {
    assert_eq!(
        serde_json::from_str::<WatchStatus>(r#""WANT""#).expect("want"),
        WatchStatus::Want
    );
    assert_eq!(
        serde_json::from_str::<WatchStatus>(r#""DONE""#).expect("done"),
        WatchStatus::Done
    );
    assert_eq!(
        serde_json::to_string(&WatchStatus::Drop).expect("drop"),
        r#""DROP""#
    );
}

#[test]
fn watchlist_entry_embeds_movie_summary() {
    let entry: WatchListEntry = serde_json::from_str(
        r#"{
            "id": 4,
            "movie": {"id":7,"title":"Parasite","poster_url":"","release_year":2019,
                      "country":"KR","runtime":132,"avg_score":4.6},
            "status": "WANT",
            "created_at": "2024-01-01T00:00:00Z"
        }"#,
    )
    .expect("watchlist entry");
    assert_eq!(entry.movie.title, "Parasite");
    assert_eq!(entry.status, WatchStatus::Want);
}
