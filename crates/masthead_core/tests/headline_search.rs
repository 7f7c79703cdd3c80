use masthead_core::{
    search_headlines, HeadlineHit, HeadlineQuery, MagazineId, MemoryPressRepository,
    PublishingService, SearchError,
};

fn seeded() -> (
    PublishingService<MemoryPressRepository>,
    MagazineId,
    MagazineId,
) {
    let mut service = PublishingService::new(MemoryPressRepository::new());
    let jane = service.register_author("Jane").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();
    let art_review = service.launch_magazine("Art Review", "Art").unwrap();

    for (magazine, title) in [
        (tech_weekly.uuid(), "Memory Safety in Rust"),
        (tech_weekly.uuid(), "Modern C++ Patterns"),
        (art_review.uuid(), "Rust Belt Photography"),
        (tech_weekly.uuid(), "Borrowed Time: Rust Lifetimes"),
    ] {
        service.publish_article(jane.uuid(), magazine, title).unwrap();
    }

    (service, tech_weekly.uuid(), art_review.uuid())
}

fn titles(hits: &[HeadlineHit]) -> Vec<&str> {
    hits.iter().map(|hit| hit.title.as_str()).collect()
}

#[test]
fn all_terms_must_match_case_insensitively() {
    let (service, _, _) = seeded();

    let query = HeadlineQuery::new("rust memory");
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(titles(&hits), ["Memory Safety in Rust"]);
}

#[test]
fn hits_follow_publication_order() {
    let (service, _, _) = seeded();

    let query = HeadlineQuery::new("rust");
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(
        titles(&hits),
        [
            "Memory Safety in Rust",
            "Rust Belt Photography",
            "Borrowed Time: Rust Lifetimes"
        ]
    );
}

#[test]
fn blank_query_and_zero_limit_return_no_hits() {
    let (service, _, _) = seeded();

    let blank = HeadlineQuery::new("   ");
    assert!(search_headlines(service.repository(), &blank)
        .unwrap()
        .is_empty());

    let mut capped = HeadlineQuery::new("rust");
    capped.limit = 0;
    assert!(search_headlines(service.repository(), &capped)
        .unwrap()
        .is_empty());
}

#[test]
fn limit_truncates_in_order() {
    let (service, _, _) = seeded();

    let mut query = HeadlineQuery::new("rust");
    query.limit = 2;
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(
        titles(&hits),
        ["Memory Safety in Rust", "Rust Belt Photography"]
    );
}

#[test]
fn magazine_filter_restricts_hits() {
    let (service, tech_weekly, art_review) = seeded();

    let mut query = HeadlineQuery::new("rust");
    query.magazine_uuid = Some(art_review);
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(titles(&hits), ["Rust Belt Photography"]);
    assert!(hits.iter().all(|hit| hit.magazine_uuid == art_review));

    query.magazine_uuid = Some(tech_weekly);
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(
        titles(&hits),
        ["Memory Safety in Rust", "Borrowed Time: Rust Lifetimes"]
    );
}

#[test]
fn default_mode_escapes_regex_metacharacters() {
    let (service, _, _) = seeded();

    let query = HeadlineQuery::new("c++");
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(titles(&hits), ["Modern C++ Patterns"]);
}

#[test]
fn raw_mode_compiles_the_query_as_one_pattern() {
    let (service, _, _) = seeded();

    let mut query = HeadlineQuery::new("^borrowed .*lifetimes$");
    query.raw_pattern = true;
    let hits = search_headlines(service.repository(), &query).unwrap();
    assert_eq!(titles(&hits), ["Borrowed Time: Rust Lifetimes"]);
}

#[test]
fn raw_mode_rejects_malformed_patterns() {
    let (service, _, _) = seeded();

    let mut query = HeadlineQuery::new("titles[");
    query.raw_pattern = true;
    let err = search_headlines(service.repository(), &query).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPattern { .. }));
}
