use masthead_core::{
    Author, Magazine, MemoryPressRepository, PressRepository, PublishingError, PublishingService,
};
use std::collections::BTreeSet;
use uuid::Uuid;

fn service() -> PublishingService<MemoryPressRepository> {
    PublishingService::new(MemoryPressRepository::new())
}

#[test]
fn end_to_end_publish_and_query() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();

    let article = service
        .publish_article(jane.uuid(), tech_weekly.uuid(), "Building Systems")
        .unwrap();
    assert_eq!(article.title(), "Building Systems");

    assert_eq!(
        service.article_titles(tech_weekly.uuid()).unwrap(),
        Some(vec!["Building Systems".to_string()])
    );
    assert_eq!(
        service.topic_areas(jane.uuid()).unwrap(),
        Some(BTreeSet::from(["Tech".to_string()]))
    );
}

#[test]
fn publish_article_attributes_to_author() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();

    let article = service
        .publish_article(jane.uuid(), tech_weekly.uuid(), "Building Systems")
        .unwrap();

    let articles = service.author_articles(jane.uuid()).unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].uuid(), article.uuid());
}

#[test]
fn topic_areas_is_none_without_articles() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();

    assert_eq!(service.topic_areas(jane.uuid()).unwrap(), None);
}

#[test]
fn topic_areas_dedupes_categories_across_magazines() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();
    let tech_monthly = service.launch_magazine("Tech Monthly", "Tech").unwrap();
    let art_review = service.launch_magazine("Art Review", "Art").unwrap();

    for (magazine, title) in [
        (&tech_weekly, "Building Systems"),
        (&tech_monthly, "Scaling Systems"),
        (&art_review, "Composition Notes"),
    ] {
        service
            .publish_article(jane.uuid(), magazine.uuid(), title)
            .unwrap();
    }

    assert_eq!(
        service.topic_areas(jane.uuid()).unwrap(),
        Some(BTreeSet::from(["Art".to_string(), "Tech".to_string()]))
    );
}

#[test]
fn author_magazines_are_distinct_in_first_publication_order() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();
    let art_review = service.launch_magazine("Art Review", "Art").unwrap();

    for (magazine, title) in [
        (&art_review, "Composition Notes"),
        (&tech_weekly, "Building Systems"),
        (&art_review, "Brush Techniques"),
    ] {
        service
            .publish_article(jane.uuid(), magazine.uuid(), title)
            .unwrap();
    }

    let magazines = service.author_magazines(jane.uuid()).unwrap();
    let uuids: Vec<_> = magazines.iter().map(Magazine::uuid).collect();
    assert_eq!(uuids, [art_review.uuid(), tech_weekly.uuid()]);
}

#[test]
fn contributors_are_distinct_in_first_contribution_order() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let john = service.register_author("John").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();

    for (author, title) in [
        (&john, "Kernel Notes One"),
        (&jane, "Building Systems"),
        (&john, "Kernel Notes Two"),
    ] {
        service
            .publish_article(author.uuid(), tech_weekly.uuid(), title)
            .unwrap();
    }

    let contributors = service.contributors(tech_weekly.uuid()).unwrap();
    let uuids: Vec<_> = contributors.iter().map(Author::uuid).collect();
    assert_eq!(uuids, [john.uuid(), jane.uuid()]);
}

#[test]
fn contributing_authors_requires_more_than_two_articles() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let john = service.register_author("John").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();

    for title in ["Part One Notes", "Part Two Notes", "Part Three Notes"] {
        service
            .publish_article(jane.uuid(), tech_weekly.uuid(), title)
            .unwrap();
    }
    for title in ["Column One Notes", "Column Two Notes"] {
        service
            .publish_article(john.uuid(), tech_weekly.uuid(), title)
            .unwrap();
    }

    let frequent = service
        .contributing_authors(tech_weekly.uuid())
        .unwrap()
        .expect("jane crosses the bar");
    let uuids: Vec<_> = frequent.iter().map(Author::uuid).collect();
    assert_eq!(uuids, [jane.uuid()]);
}

#[test]
fn contributing_authors_is_none_when_nobody_crosses_the_bar() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();

    for title in ["Part One Notes", "Part Two Notes"] {
        service
            .publish_article(jane.uuid(), tech_weekly.uuid(), title)
            .unwrap();
    }

    assert_eq!(service.contributing_authors(tech_weekly.uuid()).unwrap(), None);
}

#[test]
fn top_publisher_picks_the_magazine_with_most_articles() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let idle = service.launch_magazine("Idle Times", "Leisure").unwrap();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();
    let art_review = service.launch_magazine("Art Review", "Art").unwrap();

    for title in ["Part One Notes", "Part Two Notes", "Part Three Notes"] {
        service
            .publish_article(jane.uuid(), tech_weekly.uuid(), title)
            .unwrap();
    }
    for title in [
        "Sketch One Notes",
        "Sketch Two Notes",
        "Sketch Three Notes",
        "Sketch Four Notes",
        "Sketch Five Notes",
    ] {
        service
            .publish_article(jane.uuid(), art_review.uuid(), title)
            .unwrap();
    }

    let top = service.top_publisher().unwrap().expect("top magazine");
    assert_eq!(top.uuid(), art_review.uuid());
    assert_ne!(top.uuid(), idle.uuid());
}

#[test]
fn top_publisher_is_none_without_magazines_or_articles() {
    let mut service = service();
    assert!(service.top_publisher().unwrap().is_none());

    service.launch_magazine("Tech Weekly", "Tech").unwrap();
    assert!(service.top_publisher().unwrap().is_none());
}

#[test]
fn top_publisher_tie_breaks_on_registration_order() {
    let mut service = service();
    let jane = service.register_author("Jane").unwrap();
    let first = service.launch_magazine("Tech Weekly", "Tech").unwrap();
    let second = service.launch_magazine("Art Review", "Art").unwrap();

    service
        .publish_article(jane.uuid(), first.uuid(), "Building Systems")
        .unwrap();
    service
        .publish_article(jane.uuid(), second.uuid(), "Composition Notes")
        .unwrap();

    let top = service.top_publisher().unwrap().expect("top magazine");
    assert_eq!(top.uuid(), first.uuid());
}

#[test]
fn queries_reject_unknown_handles() {
    let service = service();
    let ghost = Uuid::new_v4();

    let err = service.topic_areas(ghost).unwrap_err();
    assert!(matches!(err, PublishingError::AuthorNotFound(uuid) if uuid == ghost));

    let err = service.article_titles(ghost).unwrap_err();
    assert!(matches!(err, PublishingError::MagazineNotFound(uuid) if uuid == ghost));
}

#[test]
fn magazine_write_paths_revalidate_through_the_service() {
    let mut service = service();
    let tech_weekly = service.launch_magazine("Tech Weekly", "Tech").unwrap();

    let err = service.rename_magazine(tech_weekly.uuid(), "X").unwrap_err();
    assert!(matches!(err, PublishingError::Repo(_)));

    service
        .rename_magazine(tech_weekly.uuid(), "Tech Monthly")
        .unwrap();
    service
        .recategorize_magazine(tech_weekly.uuid(), "Science")
        .unwrap();

    let magazine = service
        .repository()
        .get_magazine(tech_weekly.uuid())
        .unwrap()
        .unwrap();
    assert_eq!(magazine.name(), "Tech Monthly");
    assert_eq!(magazine.category(), "Science");
}
