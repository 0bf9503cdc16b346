use glam::Vec2;
use matariki_engine::renderer::commands::DrawCommand;
use matariki_engine::{
    Catalog, CommandBuffer, ConstellationGame, GameConfig, InputEvent, PanelEvent, Viewport,
};

const ABC: &str = r##"{
    "sequence": ["a", "b", "c"],
    "stars": [
        { "id": "a", "name": "Alpha", "meaning": "first", "story": "s", "cultural": "c",
          "color": "#FF0000", "x": 100, "y": 300, "brightness": 0.9 },
        { "id": "b", "name": "Beta", "meaning": "second", "story": "s", "cultural": "c",
          "color": "#00FF00", "x": 400, "y": 300, "brightness": 0.7 },
        { "id": "c", "name": "Gamma", "meaning": "third", "story": "s", "cultural": "c",
          "color": "#0000FF", "x": 700, "y": 300, "brightness": 0.5 }
    ]
}"##;

const DESKTOP: Viewport = Viewport::new(1920.0, 1080.0);

fn abc_game() -> ConstellationGame {
    let catalog = Catalog::from_json(ABC).unwrap();
    ConstellationGame::new(catalog, GameConfig::default(), DESKTOP)
}

fn screen_of(game: &ConstellationGame, id: &str) -> Vec2 {
    let index = game.session().index_of(id).unwrap();
    game.session().stars()[index].screen
}

fn click(game: &mut ConstellationGame, id: &str) {
    let pos = screen_of(game, id);
    game.push_input(InputEvent::Click { x: pos.x, y: pos.y, touch: false });
    game.tick(0.0);
}

/// Advance by whole fixed ticks through the frame loop.
fn run_seconds(game: &mut ConstellationGame, seconds: f32) {
    let frames = (seconds * 60.0).ceil() as usize;
    for _ in 0..frames {
        game.tick(1.0 / 60.0);
    }
}

#[test]
fn abc_walkthrough() {
    let mut game = abc_game();
    game.drain_events();

    // Wrong star first: no progress.
    click(&mut game, "c");
    assert_eq!(game.session().current_index(), 0);
    assert!(game.session().connections().is_empty());
    assert!(game.drain_events().is_empty());

    click(&mut game, "a");
    click(&mut game, "b");
    assert_eq!(game.session().current_index(), 2);
    assert_eq!(game.session().connections().len(), 1);
    assert_eq!(game.objective(), "Find Gamma");

    click(&mut game, "c");
    assert!(game.session().is_completed());
    assert_eq!(game.session().connections().len(), 2);
    assert_eq!(game.objective(), "All Stars Found!");

    let events = game.drain_events();
    assert!(events.contains(&PanelEvent::Progress { discovered: 3, total: 3 }));
    assert!(events.contains(&PanelEvent::Objective("All Stars Found!".into())));
}

#[test]
fn builtin_playthrough_completes_once() {
    let catalog = Catalog::builtin().unwrap();
    let sequence = catalog.sequence.clone();
    let mut game = ConstellationGame::new(catalog, GameConfig::default(), DESKTOP);

    for id in &sequence {
        click(&mut game, id);
    }
    assert!(game.session().is_completed());
    assert_eq!(game.session().connections().len(), sequence.len() - 1);

    run_seconds(&mut game, 1.5);
    assert!(game.is_celebrating());

    // Clicking more does not restart anything.
    let first = sequence[0].clone();
    click(&mut game, &first);
    run_seconds(&mut game, 1.5);

    let completions = game
        .drain_events()
        .into_iter()
        .filter(|e| *e == PanelEvent::ShowCompletion)
        .count();
    assert_eq!(completions, 1);
}

/// Exactly one target, and it is the star at `sequence[index]`.
fn assert_single_target(game: &ConstellationGame, id: &str) {
    let targets: Vec<&str> = game
        .session()
        .stars()
        .iter()
        .filter(|s| s.is_target)
        .map(|s| s.id())
        .collect();
    assert_eq!(targets, vec![id]);
}

#[test]
fn progress_invariants_hold_after_every_step() {
    let catalog = Catalog::builtin().unwrap();
    let sequence = catalog.sequence.clone();
    let mut game = ConstellationGame::new(catalog, GameConfig::default(), DESKTOP);
    assert_single_target(&game, &sequence[0]);

    for (step, id) in sequence.iter().enumerate() {
        // A wrong click first never moves progress.
        let wrong = &sequence[(step + 1) % sequence.len()];
        if wrong != id && step + 1 < sequence.len() {
            click(&mut game, wrong);
            assert_eq!(game.session().current_index(), step);
        }

        click(&mut game, id);
        let session = game.session();
        let index = session.current_index();
        assert_eq!(index, step + 1);
        assert_eq!(session.discovered().len(), index);
        assert_eq!(session.stars().iter().filter(|s| s.discovered).count(), index);
        assert_eq!(session.connections().len(), index.saturating_sub(1));
        match sequence.get(index) {
            Some(next) => assert_single_target(&game, next),
            None => assert!(session.stars().iter().all(|s| !s.is_target)),
        }
    }
    assert!(game.session().is_completed());
}

#[test]
fn post_completion_click_shows_info_only() {
    let mut game = abc_game();
    for id in ["a", "b", "c"] {
        click(&mut game, id);
    }
    game.close_info();
    game.drain_events();

    click(&mut game, "b");
    let events = game.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], PanelEvent::ShowStarInfo(info) if info.name == "Beta"));
    assert_eq!(game.session().current_index(), 3);
    assert_eq!(game.session().connections().len(), 2);
}

#[test]
fn jiggle_expires_through_frame_loop() {
    let mut game = abc_game();
    click(&mut game, "b");
    let b = game.session().index_of("b").unwrap();
    assert!(game.session().stars()[b].jiggling);

    run_seconds(&mut game, 0.4);
    assert!(game.session().stars()[b].jiggling);
    run_seconds(&mut game, 0.2);
    assert!(!game.session().stars()[b].jiggling);
    assert_eq!(game.session().stars()[b].draw_pos(), game.session().stars()[b].screen);
}

#[test]
fn hint_is_refused_while_flashing() {
    let mut game = abc_game();
    game.drain_events();

    game.push_input(InputEvent::Hint);
    game.push_input(InputEvent::Hint);
    game.tick(0.0);
    assert_eq!(game.effects().flashes.len(), 1);
    assert_eq!(game.drain_events(), vec![PanelEvent::HintAvailable(false)]);

    run_seconds(&mut game, 1.0);
    assert_eq!(game.drain_events(), vec![PanelEvent::HintAvailable(true)]);
}

#[test]
fn reset_restores_initial_state() {
    let mut game = abc_game();
    for id in ["a", "b", "c"] {
        click(&mut game, id);
    }
    run_seconds(&mut game, 1.5);
    assert!(game.is_celebrating());
    game.drain_events();

    game.push_input(InputEvent::Reset);
    game.tick(0.0);

    assert_eq!(game.session().current_index(), 0);
    assert!(game.session().connections().is_empty());
    assert!(game.session().stars().iter().all(|s| !s.discovered && !s.celebrating));
    assert!(!game.is_celebrating());
    assert!(game.effects().particles.is_empty());
    assert!(game.effects().flashes.is_empty());
    assert_eq!(game.objective(), "Find Alpha");
    assert_single_target(&game, "a");

    let events = game.drain_events();
    assert!(events.contains(&PanelEvent::HideCompletion));
    assert!(events.contains(&PanelEvent::Progress { discovered: 0, total: 3 }));
}

#[test]
fn reset_during_hint_clears_flash_and_retargets() {
    let mut game = abc_game();
    click(&mut game, "a");
    click(&mut game, "b");
    assert!(game.request_hint());
    assert_eq!(game.effects().flashes.len(), 1);
    assert!(game.is_hint_active());

    game.push_input(InputEvent::Reset);
    game.tick(0.0);

    assert!(game.effects().flashes.is_empty());
    assert!(!game.is_hint_active());
    assert_single_target(&game, "a");
    assert!(game.session().discovered().is_empty());
    assert!(game.drain_events().contains(&PanelEvent::HintAvailable(true)));
    assert!(game.request_hint());
}

#[test]
fn reset_cancels_pending_completion() {
    let mut game = abc_game();
    for id in ["a", "b", "c"] {
        click(&mut game, id);
    }
    game.reset();
    run_seconds(&mut game, 2.0);
    assert!(!game.is_celebrating());
    assert!(!game.drain_events().contains(&PanelEvent::ShowCompletion));
}

#[test]
fn touch_uses_wider_tolerance() {
    let mut game = abc_game();
    let a = screen_of(&game, "a");
    let near = a + Vec2::new(65.0, 0.0);

    game.push_input(InputEvent::Click { x: near.x, y: near.y, touch: false });
    game.tick(0.0);
    assert_eq!(game.session().current_index(), 0);

    game.push_input(InputEvent::Click { x: near.x, y: near.y, touch: true });
    game.tick(0.0);
    assert_eq!(game.session().current_index(), 1);
}

#[test]
fn render_records_labels_connections_and_rays() {
    let mut game = abc_game();
    click(&mut game, "a");
    click(&mut game, "b");

    let mut buf = CommandBuffer::new();
    game.render(&mut buf);
    assert!(matches!(buf.commands[0], DrawCommand::Clear { width, height } if width == 1920.0 && height == 1080.0));
    assert_eq!(buf.texts(), vec!["Alpha", "Beta"]);
    let lines = buf
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::GradientLine { .. }))
        .count();
    assert_eq!(lines, 1);

    click(&mut game, "c");
    run_seconds(&mut game, 1.2);
    buf.clear_commands();
    game.render(&mut buf);
    let rays = buf
        .commands
        .iter()
        .rev()
        .take_while(|c| matches!(c, DrawCommand::GradientLine { glow: None, .. }))
        .count();
    assert_eq!(rays, 3 * 8);
}

#[test]
fn resize_keeps_stars_inside_viewport() {
    let mut game = abc_game();
    for (w, h) in [(400.0, 800.0), (1024.0, 500.0), (320.0, 240.0)] {
        game.push_input(InputEvent::Resize { width: w, height: h });
        game.tick(0.0);
        for star in game.session().stars() {
            assert!(star.screen.x >= 0.0 && star.screen.x <= w, "x {} in {}", star.screen.x, w);
            assert!(star.screen.y >= 0.0 && star.screen.y <= h, "y {} in {}", star.screen.y, h);
        }
    }
}
