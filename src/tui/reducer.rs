use tracing::{debug, info, trace, warn};

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;
use crate::article::{ArticleField, ArticleState};
use crate::catalog::DEFAULT_ARTICLE_STATE;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// Panel actions never reach here; the runtime routes them to the form.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::ArticleApplied(article) => reduce_applied(state, article),

        Action::ArticleReset => reduce_reset(state),

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        other => {
            trace!("REDUCER: Ignoring {:?}", other);
            (state, Effect::None)
        }
    }
}

fn field_list(fields: &[ArticleField]) -> String {
    fields
        .iter()
        .map(|field| field.title().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

fn status(message: String) -> Effect {
    Effect::Action(Action::SetStatusMessage {
        message,
        is_error: false,
    })
}

fn reduce_applied(state: AppState, article: ArticleState) -> (AppState, Effect) {
    let changed = article.diff(&state.article);
    info!(
        "ARTICLE: Applied font={} size={} color={} background={} width={}",
        article.font_family_option.value,
        article.font_size_option.value,
        article.font_color.value,
        article.background_color.value,
        article.content_width.value
    );

    let message = if changed.is_empty() {
        "Settings applied (no changes)".to_string()
    } else {
        format!("Applied {}", field_list(&changed))
    };

    let mut new_state = state;
    new_state.article = article;
    (new_state, status(message))
}

fn reduce_reset(state: AppState) -> (AppState, Effect) {
    // The panel resets its draft to its own default without telling us what that is
    let diverging = state.document_default.diff(&DEFAULT_ARTICLE_STATE);
    if !diverging.is_empty() {
        warn!(
            "ARTICLE: Reset restores the document default, which differs from the panel default in {}",
            field_list(&diverging)
        );
    }
    info!("ARTICLE: Reset");
    debug!("ARTICLE: Restoring {:?}", state.document_default);

    let mut new_state = state;
    new_state.article = new_state.document_default;
    (new_state, status("Settings reset".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BACKGROUND_COLORS, FONT_SIZE_OPTIONS};
    use crate::config::{ArticleDefaults, Config};

    #[test]
    fn test_applied_commits_snapshot() {
        let state = AppState::new(Config::default());
        let article = DEFAULT_ARTICLE_STATE.with_field(ArticleField::FontSize, FONT_SIZE_OPTIONS[1]);

        let (new_state, effect) = reduce(state, Action::ArticleApplied(article));

        assert_eq!(new_state.article, article);
        assert_eq!(
            effect,
            Effect::Action(Action::SetStatusMessage {
                message: "Applied font size".to_string(),
                is_error: false,
            })
        );
    }

    #[test]
    fn test_applied_without_changes() {
        let state = AppState::new(Config::default());

        let (new_state, effect) = reduce(state, Action::ArticleApplied(DEFAULT_ARTICLE_STATE));

        assert_eq!(new_state.article, DEFAULT_ARTICLE_STATE);
        assert_eq!(
            effect,
            Effect::Action(Action::SetStatusMessage {
                message: "Settings applied (no changes)".to_string(),
                is_error: false,
            })
        );
    }

    #[test]
    fn test_reset_restores_document_default() {
        let mut state = AppState::new(Config::default());
        state.article = DEFAULT_ARTICLE_STATE.with_field(ArticleField::BackgroundColor, BACKGROUND_COLORS[1]);

        let (new_state, _) = reduce(state, Action::ArticleReset);

        assert_eq!(new_state.article, DEFAULT_ARTICLE_STATE);
    }

    #[test]
    fn test_reset_with_diverging_document_default() {
        // The document keeps its own default; the panel's draft goes back to the catalog default
        let config = Config {
            article: ArticleDefaults {
                font_size: Some("25px".to_string()),
                ..ArticleDefaults::default()
            },
            ..Config::default()
        };
        let state = AppState::new(config);

        let (new_state, _) = reduce(state, Action::ArticleReset);

        assert_eq!(new_state.article.font_size_option, FONT_SIZE_OPTIONS[1]);
        assert_ne!(new_state.article, DEFAULT_ARTICLE_STATE);
    }

    #[test]
    fn test_set_status_message() {
        let state = AppState::default();
        let (new_state, _) = reduce(
            state,
            Action::SetStatusMessage {
                message: "Oops".to_string(),
                is_error: true,
            },
        );
        assert_eq!(new_state.system.status_message.as_deref(), Some("Oops"));
        assert!(new_state.system.status_is_error);
    }

    #[test]
    fn test_panel_actions_leave_state_alone() {
        let state = AppState::new(Config::default());
        let (new_state, effect) = reduce(state, Action::TogglePanel);
        assert_eq!(new_state.article, DEFAULT_ARTICLE_STATE);
        assert_eq!(effect, Effect::None);
    }
}
