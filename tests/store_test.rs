mod common;

use common::{TestApp, new_film};
use filmrank::error::AppError;

#[tokio::test]
async fn list_ranks_highest_rating_first() {
    let app = TestApp::new().await;
    let store = &app.state.store;

    let a = app.seed("Heat", 1995).await;
    let b = app.seed("Alien", 1979).await;
    let c = app.seed("Up", 2009).await;
    let unrated = app.seed("Cats", 2019).await;

    store.update(a.id, 7.3, None).await.unwrap();
    store.update(b.id, 9.0, None).await.unwrap();
    store.update(c.id, 8.1, None).await.unwrap();

    let listed = store.list().await.unwrap();
    let rank_of = |id: i32| listed.iter().find(|r| r.film.id == id).unwrap().ranking;

    assert_eq!(rank_of(b.id), 1);
    assert_eq!(rank_of(c.id), 2);
    assert_eq!(rank_of(a.id), 3);
    assert_eq!(rank_of(unrated.id), 4);

    let mut ranks: Vec<_> = listed.iter().map(|r| r.ranking).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn list_of_empty_store_is_empty() {
    let app = TestApp::new().await;
    assert!(app.state.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_title_is_rejected() {
    let app = TestApp::new().await;
    app.seed("Inception", 2010).await;

    let err = app.state.store.create(new_film("Inception", 2011)).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateTitle(ref t) if t == "Inception"), "{err:?}");
    assert_eq!(app.state.store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_film() {
    let app = TestApp::new().await;
    let film = app.seed("Heat", 1995).await;

    app.state.store.delete(film.id).await.unwrap();

    assert!(matches!(app.state.store.get(film.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(app.state.store.delete(film.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_touches_only_rating_and_review() {
    let app = TestApp::new().await;
    let before = app.seed("Heat", 1995).await;

    let after = app.state.store.update(before.id, 8.5, Some("Great".into())).await.unwrap();
    let stored = app.state.store.get(before.id).await.unwrap();

    assert_eq!(after, stored);
    assert_eq!(stored.rating, Some(8.5));
    assert_eq!(stored.review.as_deref(), Some("Great"));
    assert_eq!(stored.title, before.title);
    assert_eq!(stored.year, before.year);
    assert_eq!(stored.description, before.description);
    assert_eq!(stored.poster_url, before.poster_url);
}

#[tokio::test]
async fn update_of_missing_film_is_not_found() {
    let app = TestApp::new().await;
    assert!(matches!(app.state.store.update(42, 5.0, None).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = TestApp::new().await;
    let input = new_film("Arrival", 2016);

    let created = app.state.store.create(input.clone()).await.unwrap();
    let fetched = app.state.store.get(created.id).await.unwrap();

    assert_eq!(fetched.title, input.title);
    assert_eq!(fetched.year, input.year);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.poster_url, input.poster_url);
    assert_eq!(fetched.rating, None);
    assert_eq!(fetched.review, None);
}
