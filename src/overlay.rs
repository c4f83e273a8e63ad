use crate::constants::*;
use crate::core::constants::FINAL_SCORE_PRECISION;
use crate::core::{format_significant, MapMode, Screen};
use crate::dom;
use crate::render;
use crate::state::{AppState, MapView};
use web_sys as web;

/// Bring every screen, label and button in line with `state`, re-measure the
/// map layout and repaint the overlay.
///
/// Screens are shown before measuring: a hidden container reports zero size
/// and would leave the metrics unavailable.
pub fn sync_view(view: &MapView, state: &mut AppState) {
    let document = &view.document;
    let screen = state.game.screen();
    dom::set_visible(document, HOME_SCREEN_ID, screen == Screen::Home);
    dom::set_visible(document, ROUND_SCREEN_ID, matches!(screen, Screen::Round(_)));
    dom::set_visible(document, ENDING_SCREEN_ID, screen == Screen::Finished);

    let total = state.game.progress().cumulative_score();
    dom::set_text(document, SCORE_LABEL_ID, &format!("Score: {:.1}", total));

    match screen {
        Screen::Round(index) => {
            update_round_panel(document, state, index);
            state.layout.remeasure(&view.elements());
            render::paint_map(view, state);
        }
        Screen::Finished => update_ending(document, state),
        Screen::Home => state.layout.invalidate(),
    }
}

fn update_round_panel(document: &web::Document, state: &AppState, index: usize) {
    let len = state.game.catalog().len();
    dom::set_text(document, ROUND_LABEL_ID, &format!("Round {} / {}", index + 1, len));

    if let Some(scene) = state.game.current_scene() {
        dom::set_text(document, SCENE_NAME_ID, scene.display_name);
        dom::set_text(document, SCENE_NARRATIVE_ID, scene.narrative);
        if let Ok(img) = dom::element_by_id::<web::HtmlImageElement>(document, SCENE_IMAGE_ID) {
            let src = format!("{}{}", SCENE_IMAGE_DIR, scene.image_ref);
            if img.get_attribute("src").as_deref() != Some(src.as_str()) {
                img.set_src(&src);
            }
        }
    }

    let session = state.game.session();
    let confirmed = session.map(|s| s.is_confirmed()).unwrap_or(false);
    let can_confirm = session.map(|s| s.can_confirm()).unwrap_or(false);

    // the narrative is part of the reveal
    dom::set_visible(document, SCENE_NARRATIVE_ID, confirmed);
    dom::set_visible(document, CONFIRM_BUTTON_ID, !confirmed);
    dom::set_disabled(document, CONFIRM_BUTTON_ID, !can_confirm);
    dom::set_visible(document, CONTINUE_BUTTON_ID, confirmed);

    match session.and_then(|s| s.score()).filter(|_| confirmed) {
        Some(score) => {
            dom::set_text(document, ROUND_SCORE_ID, &format!("+{:.2} points", score));
            dom::set_visible(document, ROUND_SCORE_ID, true);
        }
        None => dom::set_visible(document, ROUND_SCORE_ID, false),
    }

    dom::set_class(document, PHYSICAL_BUTTON_ID, "active", state.mode == MapMode::Physical);
    dom::set_class(
        document,
        METAPHORICAL_BUTTON_ID,
        "active",
        state.mode == MapMode::Metaphorical,
    );
    dom::set_class(document, MAP_CONTAINER_ID, "confirmed", confirmed);
}

fn update_ending(document: &web::Document, state: &AppState) {
    let total = state.game.progress().cumulative_score();
    dom::set_text(
        document,
        FINAL_SCORE_ID,
        &format!(
            "You scored {} points!",
            format_significant(total, FINAL_SCORE_PRECISION)
        ),
    );

    let Some(list) = document.get_element_by_id(HISTORY_LIST_ID) else {
        return;
    };
    list.set_inner_html("");
    for result in state.game.history() {
        let name = state
            .game
            .catalog()
            .index_of(result.scene_identifier)
            .and_then(|i| state.game.catalog().get(i))
            .map(|s| s.display_name)
            .unwrap_or(result.scene_identifier);
        if let Ok(item) = document.create_element("li") {
            item.set_text_content(Some(&format!("{}: {:.2}", name, result.score)));
            _ = list.append_child(&item);
        }
    }
}
