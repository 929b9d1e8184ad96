use crux_core::testing::AppTester;
use shared::api::CityRecord;
use shared::sheet::CLOSED_INDEX;
use shared::{App, City, Effect, Event, Model, ScreenView, SheetState, StoreConfig};

fn loaded_model(app: &AppTester<App, Effect>) -> Model {
    let mut model = Model::default();
    let config = StoreConfig::new("https://api.jsonbin.io/v3/b/1", "key").unwrap();
    app.update(Event::AppStarted { config }, &mut model);

    let cities = City::ingest(vec![
        CityRecord {
            id: None,
            title: "Paris".into(),
            description: "City of light".into(),
            image_url: "http://x/p.jpg".into(),
        },
        CityRecord {
            id: None,
            title: "Rome".into(),
            description: "Eternal city".into(),
            image_url: "http://x/r.jpg".into(),
        },
    ]);
    app.update(
        Event::CitiesFetched {
            request_seq: 1,
            result: Ok(cities),
        },
        &mut model,
    );
    model
}

#[test]
fn tapping_card_opens_sheet_with_city() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);

    let card = app.view(&model).cards()[0].clone();
    assert_eq!(card.title, "Paris");

    let update = app.update(
        Event::CardPressed {
            city_id: shared::CityId::new(card.id.clone()),
        },
        &mut model,
    );
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    assert_eq!(model.sheet, SheetState::Opening);

    let detail = app.view(&model).detail.expect("sheet should have content");
    assert_eq!(detail.title, card.title);
    assert_eq!(detail.description, "City of light");
    assert_eq!(detail.image_url, "http://x/p.jpg");
}

#[test]
fn sheet_lifecycle_clears_selection_once_hidden() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);
    let city_id = model.cities[1].id.clone();

    app.update(Event::CardPressed { city_id }, &mut model);
    app.update(Event::SheetChanged { index: 0 }, &mut model);
    assert_eq!(model.sheet, SheetState::Open);

    app.update(Event::SheetDismissed, &mut model);
    assert_eq!(model.sheet, SheetState::Closing);
    // Content stays while the sheet animates out.
    assert_eq!(app.view(&model).detail.unwrap().title, "Rome");

    app.update(Event::SheetChanged { index: CLOSED_INDEX }, &mut model);
    assert_eq!(model.sheet, SheetState::Closed);
    assert!(model.selected_city.is_none());
    assert!(app.view(&model).detail.is_none());
}

#[test]
fn dismissing_sheet_leaves_screen_state_alone() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);
    let before = app.view(&model).screen;

    let city_id = model.cities[0].id.clone();
    app.update(Event::CardPressed { city_id }, &mut model);
    app.update(Event::SheetChanged { index: 0 }, &mut model);
    app.update(Event::SheetDismissed, &mut model);
    app.update(Event::SheetChanged { index: CLOSED_INDEX }, &mut model);

    assert!(!model.is_loading);
    assert!(model.error.is_none());
    assert_eq!(model.cities.len(), 2);
    assert_eq!(app.view(&model).screen, before);
    assert!(matches!(before, ScreenView::List { .. }));
}

#[test]
fn tapping_another_card_while_open_swaps_content() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);

    let paris = model.cities[0].id.clone();
    let rome = model.cities[1].id.clone();

    app.update(Event::CardPressed { city_id: paris }, &mut model);
    app.update(Event::SheetChanged { index: 0 }, &mut model);
    app.update(Event::CardPressed { city_id: rome }, &mut model);

    assert_eq!(model.sheet, SheetState::Open);
    assert_eq!(app.view(&model).detail.unwrap().title, "Rome");
}

#[test]
fn unknown_card_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);

    let update = app.update(
        Event::CardPressed {
            city_id: shared::CityId::new("missing"),
        },
        &mut model,
    );

    assert!(update.effects.is_empty());
    assert!(model.selected_city.is_none());
    assert_eq!(model.sheet, SheetState::Closed);
}

#[test]
fn refresh_keeps_open_sheet_content() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);

    let city_id = model.cities[0].id.clone();
    app.update(Event::CardPressed { city_id }, &mut model);
    app.update(Event::SheetChanged { index: 0 }, &mut model);

    app.update(Event::RefreshRequested, &mut model);
    app.update(
        Event::CitiesFetched {
            request_seq: 2,
            result: Ok(Vec::new()),
        },
        &mut model,
    );

    assert_eq!(model.sheet, SheetState::Open);
    assert_eq!(app.view(&model).detail.unwrap().title, "Paris");
}

#[test]
fn sheet_open_without_selection_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = loaded_model(&app);

    let update = app.update(Event::SheetChanged { index: 0 }, &mut model);
    assert!(update.effects.is_empty());
    assert_eq!(model.sheet, SheetState::Closed);

    let view = app.view(&model);
    assert!(view.detail.is_none());
    assert_eq!(view.sheet, SheetState::Closed);
}
