use crate::article::ArticleState;
use crate::config::Config;

pub const DEFAULT_STATUS_MESSAGE: &str = "Press p to open the settings panel";

/// Root application state - the document owner
///
/// Holds the committed article configuration the panel's callbacks write to.
/// The panel's draft lives in the form, not here.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Configuration the article is currently rendered with
    pub article: ArticleState,

    /// What the document considers its default, restored on reset
    pub document_default: ArticleState,

    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let document_default = config.article.resolve();
        let mut system = SystemState {
            config,
            ..SystemState::default()
        };
        system.reset_status_message();
        Self {
            article: document_default,
            document_default,
            system,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_ARTICLE_STATE;
    use crate::config::ArticleDefaults;

    #[test]
    fn test_set_status_message_overwrites_error_flag() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error".to_string());
        assert!(state.status_is_error);

        state.set_status_message("Normal message".to_string());
        assert_eq!(state.status_message, Some("Normal message".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_new_state_starts_from_document_default() {
        let config = Config {
            article: ArticleDefaults {
                font_size: Some("38px".to_string()),
                ..ArticleDefaults::default()
            },
            ..Config::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.article, state.document_default);
        assert_eq!(state.article.font_size_option.value, "38px");
        assert_eq!(state.system.status_message.as_deref(), Some(DEFAULT_STATUS_MESSAGE));
    }

    #[test]
    fn test_default_config_matches_panel_default() {
        let state = AppState::new(Config::default());
        assert_eq!(state.document_default, DEFAULT_ARTICLE_STATE);
    }
}
