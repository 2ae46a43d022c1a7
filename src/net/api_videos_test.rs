use super::*;

#[test]
fn default_query_is_first_page_newest_first() {
    let url = videos_path(&VideoQuery::default());
    assert_eq!(url, "/videos?page=1&limit=12&sortBy=createdAt&sortType=desc");
}

#[test]
fn page_query_moves_the_page_only() {
    let url = videos_path(&VideoQuery::page(3));
    assert_eq!(url, "/videos?page=3&limit=12&sortBy=createdAt&sortType=desc");
}

#[test]
fn search_query_encodes_the_term() {
    let url = videos_path(&VideoQuery::search("rust & wasm"));
    assert_eq!(
        url,
        "/videos?page=1&limit=20&sortBy=createdAt&sortType=desc&query=rust%20%26%20wasm"
    );
}

#[test]
fn by_user_query_restricts_to_the_uploader() {
    let url = videos_path(&VideoQuery::by_user("u42"));
    assert_eq!(url, "/videos?page=1&limit=20&sortBy=createdAt&sortType=desc&userId=u42");
}

#[test]
fn detail_and_mutation_paths() {
    assert_eq!(video_path("v1"), "/videos/v1");
    assert_eq!(toggle_publish_path("v1"), "/videos/toggle/publish/v1");
    assert_eq!(toggle_video_like_path("v1"), "/likes/toggle/v/v1");
}
