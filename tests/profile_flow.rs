//! Command flow from a profile source to a selector, without Discord or the network.
use async_trait::async_trait;
use brawlstats_bot::api::{ProfileError, ProfileRecord, ProfileSource};
use brawlstats_bot::commands::profile::logic::{open_profile, tag_from_args};
use std::sync::Mutex;

/// Replays a canned result and remembers the tags it was asked for.
struct StubSource {
    status: Option<u16>,
    body: &'static str,
    seen: Mutex<Vec<String>>,
}

impl StubSource {
    fn ok(body: &'static str) -> Self {
        Self {
            status: None,
            body,
            seen: Mutex::new(Vec::new()),
        }
    }
    fn failing(status: u16) -> Self {
        Self {
            status: Some(status),
            body: "",
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProfileSource for StubSource {
    async fn fetch_profile(&self, raw_tag: &str) -> Result<ProfileRecord, ProfileError> {
        self.seen.lock().unwrap().push(raw_tag.to_string());
        if let Some(status) = self.status {
            return Err(ProfileError::Api(status));
        }
        brawlstats_bot::api::client::parse_profile_body(self.body.as_bytes())
    }
}

#[tokio::test]
async fn api_404_builds_no_selector() {
    let source = StubSource::failing(404);
    let err = open_profile(&source, "#NOPE").await.unwrap_err();
    assert!(matches!(err, ProfileError::Api(404)));
    assert_eq!(err.user_message(), "❌ API Error: 404");
    assert_eq!(source.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn all_locked_brawlers_report_no_unlocked_items() {
    let source = StubSource::ok(
        r##"{"tag":"#X","name":"New","brawlers":[
            {"id":1,"name":"SHELLY","power":0,"trophies":0},
            {"id":2,"name":"COLT","power":0,"trophies":0}]}"##,
    );
    let err = open_profile(&source, "#X").await.unwrap_err();
    assert!(matches!(err, ProfileError::NoUnlockedItems));
}

#[tokio::test]
async fn null_body_is_not_found() {
    let source = StubSource::ok("null");
    let err = open_profile(&source, "#X").await.unwrap_err();
    assert!(matches!(err, ProfileError::NotFound));
}

#[tokio::test]
async fn successful_profile_opens_on_first_page() {
    let source = StubSource::ok(
        r##"{"tag":"#X","name":"Pro","club":{"name":"Owls"},"brawlers":[
            {"id":1,"name":"SHELLY","power":11,"trophies":500},
            {"id":2,"name":"COLT","power":0,"trophies":0},
            {"id":3,"name":"BULL","power":3,"trophies":900}]}"##,
    );
    let selector = open_profile(&source, "#x").await.unwrap();
    assert_eq!(selector.cursor(), 0);
    assert_eq!(selector.len(), 2);
    let view = selector.current_view();
    assert_eq!(view.items[0].name, "BULL");
    assert_eq!(view.header.club, "Owls");
    assert_eq!(view.footer, "Page 1/1");
    // The raw tag is handed over untouched; normalization belongs to the HTTP client.
    assert_eq!(*source.seen.lock().unwrap(), vec!["#x".to_string()]);
}

#[test]
fn prefix_tag_argument() {
    assert_eq!(tag_from_args(&["#ABC", "extra"]), Some("#ABC"));
    assert_eq!(tag_from_args(&[]), None);
}
