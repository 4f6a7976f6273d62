pub mod app;
pub mod article_view;
pub mod params_panel;

pub use app::render_app;
pub use article_view::render_article;
pub use params_panel::render_params_panel;
