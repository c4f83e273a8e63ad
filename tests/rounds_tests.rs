// Host-side tests for round sequencing, the scene catalog and routes.

use glam::DVec2;
use underground_guesser::core::{
    CatalogError, ClickOutcome, GameEvent, GameProgress, LayoutMetrics, NormalizedPoint,
    RoundOrchestrator, Route, RouteError, Scene, SceneCatalog, Screen,
};

static THREE_SCENES: [Scene; 3] = [
    Scene {
        identifier: "sewers",
        display_name: "Sewers",
        answer_location: NormalizedPoint::new(25.0, 70.0),
        narrative: "",
        image_ref: "sewers.jpg",
    },
    Scene {
        identifier: "tower",
        display_name: "Tower",
        answer_location: NormalizedPoint::new(80.0, 80.0),
        narrative: "",
        image_ref: "tower.jpg",
    },
    Scene {
        identifier: "crypt",
        display_name: "Crypt",
        answer_location: NormalizedPoint::new(10.0, 5.0),
        narrative: "",
        image_ref: "crypt.jpg",
    },
];

static DUPLICATED: [Scene; 2] = [
    Scene {
        identifier: "same",
        display_name: "One",
        answer_location: NormalizedPoint::new(0.0, 0.0),
        narrative: "",
        image_ref: "a.jpg",
    },
    Scene {
        identifier: "same",
        display_name: "Two",
        answer_location: NormalizedPoint::new(1.0, 1.0),
        narrative: "",
        image_ref: "b.jpg",
    },
];

static NO_SCENES: [Scene; 0] = [];

fn game() -> RoundOrchestrator {
    RoundOrchestrator::new(SceneCatalog::new(&THREE_SCENES).unwrap())
}

fn guess_and_confirm(g: &mut RoundOrchestrator, guess: NormalizedPoint) -> Option<GameEvent> {
    assert!(g.place_guess(guess), "active round");
    g.confirm()
}

#[test]
fn builtin_catalog_is_well_formed() {
    let catalog = SceneCatalog::builtin().unwrap();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.index_of("miserables-sewers"), Some(0));
    assert_eq!(catalog.index_of("metro"), Some(6));
    assert_eq!(catalog.index_of("nowhere"), None);
    for scene in catalog.iter() {
        assert!(!scene.narrative.is_empty(), "{} has no narrative", scene.identifier);
        assert!(scene.image_ref.contains('.'), "{} image looks wrong", scene.identifier);
        assert!((0.0..=100.0).contains(&scene.answer_location.x));
        assert!((0.0..=100.0).contains(&scene.answer_location.y));
    }
}

#[test]
fn catalog_rejects_empty_and_duplicate_content() {
    assert_eq!(SceneCatalog::new(&NO_SCENES).unwrap_err(), CatalogError::Empty);
    assert_eq!(
        SceneCatalog::new(&DUPLICATED).unwrap_err(),
        CatalogError::DuplicateIdentifier("same".to_string())
    );
}

#[test]
fn game_starts_on_home_then_first_round() {
    let mut g = game();
    assert_eq!(g.screen(), Screen::Home);
    assert!(g.session().is_none());
    assert_eq!(g.start(), GameEvent::RoundStarted(0));
    assert_eq!(g.screen(), Screen::Round(0));
    assert_eq!(g.current_scene().unwrap().identifier, "sewers");
    assert_eq!(g.progress().current_round_index(), 0);
}

#[test]
fn exact_guess_adds_exactly_100() {
    let mut g = game();
    g.start();
    let ev = guess_and_confirm(&mut g, NormalizedPoint::new(25.0, 70.0));
    assert_eq!(ev, Some(GameEvent::RoundComplete { round: 0, score: 100.0 }));
    assert_eq!(g.progress().cumulative_score(), 100.0);
}

#[test]
fn far_guess_scores_inverse_distance() {
    let mut g = game();
    g.start_round(1).unwrap();
    guess_and_confirm(&mut g, NormalizedPoint::new(0.0, 0.0));
    let total = g.progress().cumulative_score();
    assert!((total - 150.0 / 113.137_084_989_847_6).abs() < 1e-9);
    assert!((total - 1.326).abs() < 1e-3);
}

#[test]
fn confirm_is_counted_once() {
    let mut g = game();
    g.start();
    assert_eq!(g.confirm(), None, "no guess yet");
    guess_and_confirm(&mut g, NormalizedPoint::new(25.0, 70.0));
    assert_eq!(g.confirm(), None);
    assert_eq!(g.progress().cumulative_score(), 100.0);
    assert_eq!(g.history().len(), 1);
}

#[test]
fn continue_requires_confirmation() {
    let mut g = game();
    g.start();
    assert_eq!(g.advance(), None);
    assert!(g.place_guess(NormalizedPoint::new(1.0, 1.0)));
    assert_eq!(g.advance(), None);
    assert_eq!(g.screen(), Screen::Round(0));
}

#[test]
fn continue_moves_to_a_fresh_round() {
    let mut g = game();
    g.start();
    guess_and_confirm(&mut g, NormalizedPoint::new(50.0, 50.0));
    assert_eq!(g.advance(), Some(GameEvent::RoundStarted(1)));
    assert_eq!(g.progress().current_round_index(), 1);
    let session = g.session().unwrap();
    assert!(session.guess().is_none());
    assert!(!session.is_confirmed());
    assert_eq!(session.answer(), NormalizedPoint::new(80.0, 80.0));
}

#[test]
fn last_round_finishes_instead_of_overflowing() {
    let mut g = game();
    g.start();
    for round in 0..3 {
        assert_eq!(g.screen(), Screen::Round(round));
        let answer = g.current_scene().unwrap().answer_location;
        guess_and_confirm(&mut g, answer);
        let ev = g.advance().unwrap();
        if round < 2 {
            assert_eq!(ev, GameEvent::RoundStarted(round + 1));
        } else {
            assert_eq!(ev, GameEvent::SequenceExhausted { total: 300.0 });
        }
    }
    assert_eq!(g.screen(), Screen::Finished);
    assert!(g.session().is_none());
    assert!(g.current_scene().is_none());
    assert_eq!(g.advance(), None);

    let ids: Vec<_> = g.history().iter().map(|r| r.scene_identifier).collect();
    assert_eq!(ids, ["sewers", "tower", "crypt"]);
}

#[test]
fn clicks_reach_only_the_active_round() {
    let mut g = game();
    let m = LayoutMetrics {
        rendered_width: 200.0,
        rendered_height: 200.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
    assert_eq!(g.click(DVec2::new(50.0, 60.0), Some(&m)), None);
    assert!(!g.place_guess(NormalizedPoint::new(1.0, 1.0)));

    g.start();
    let outcome = g.click(DVec2::new(50.0, 60.0), Some(&m));
    assert_eq!(outcome, Some(ClickOutcome::Placed(NormalizedPoint::new(25.0, 70.0))));
    assert_eq!(g.progress().cumulative_score(), 0.0, "placing does not score");

    g.confirm();
    assert_eq!(g.progress().cumulative_score(), 100.0);
    assert_eq!(g.click(DVec2::new(0.0, 0.0), Some(&m)), Some(ClickOutcome::Frozen));
    assert!(!g.place_guess(NormalizedPoint::new(1.0, 1.0)));
}

#[test]
fn revisited_round_is_not_scored_twice() {
    let mut g = game();
    g.start();
    guess_and_confirm(&mut g, NormalizedPoint::new(25.0, 70.0));
    g.advance();
    assert!(g.is_scored(0));
    assert!(!g.is_scored(1));

    // browser Back onto the finished round
    assert_eq!(g.start_round(0), Ok(GameEvent::RoundStarted(0)));
    let ev = guess_and_confirm(&mut g, NormalizedPoint::new(25.0, 70.0));
    assert_eq!(ev, Some(GameEvent::RoundComplete { round: 0, score: 100.0 }));
    assert_eq!(g.progress().cumulative_score(), 100.0);
    assert_eq!(g.history().len(), 1);

    // a fresh play-through scores it again
    g.start();
    assert!(!g.is_scored(0));
    guess_and_confirm(&mut g, NormalizedPoint::new(25.0, 70.0));
    assert_eq!(g.progress().cumulative_score(), 100.0);
}

#[test]
fn restart_zeroes_progress_from_anywhere() {
    let mut g = game();
    g.start();
    guess_and_confirm(&mut g, NormalizedPoint::new(25.0, 70.0));
    g.advance();
    assert_eq!(g.restart(), GameEvent::Restarted);
    assert_eq!(g.progress().cumulative_score(), 0.0);
    assert_eq!(g.progress().current_round_index(), 0);
    assert_eq!(g.screen(), Screen::Home);
    assert!(g.history().is_empty());
}

#[test]
fn deep_link_out_of_range_is_refused() {
    let mut g = game();
    assert_eq!(
        g.start_round(3),
        Err(RouteError::RoundOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(g.screen(), Screen::Home);
    assert_eq!(g.start_round(2), Ok(GameEvent::RoundStarted(2)));
}

#[test]
fn progress_ignores_negative_and_non_finite_amounts() {
    let mut p = GameProgress::new();
    p.increase(12.5);
    p.increase(-3.0);
    p.increase(f64::NAN);
    p.increase(f64::INFINITY);
    assert_eq!(p.cumulative_score(), 12.5);
    p.reset();
    assert_eq!(p.cumulative_score(), 0.0);
}

#[test]
fn routes_parse_and_format() {
    assert_eq!(Route::parse(""), Ok(Route::Home));
    assert_eq!(Route::parse("#/"), Ok(Route::Home));
    assert_eq!(Route::parse("#/scene/4"), Ok(Route::Round(4)));
    assert_eq!(Route::parse("#/scene/4/"), Ok(Route::Round(4)));
    assert_eq!(Route::parse("#/ending"), Ok(Route::Ending));
    assert_eq!(
        Route::parse("#/scene/x"),
        Err(RouteError::InvalidRound("x".to_string()))
    );
    assert_eq!(
        Route::parse("#/result"),
        Err(RouteError::Unknown("#/result".to_string()))
    );

    for r in [Route::Home, Route::Round(7), Route::Ending] {
        assert_eq!(Route::parse(&r.to_string()), Ok(r));
    }
}

#[test]
fn routes_are_checked_against_catalog_length() {
    assert_eq!(Route::Round(2).checked(3), Ok(Route::Round(2)));
    assert_eq!(
        Route::Round(3).checked(3),
        Err(RouteError::RoundOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(Route::Ending.checked(0), Ok(Route::Ending));
}
