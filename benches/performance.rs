use criterion::{black_box, criterion_group, criterion_main, Criterion};
use article_params::article::ArticleField;
use article_params::catalog::{BACKGROUND_COLORS, DEFAULT_ARTICLE_STATE, FONT_SIZE_OPTIONS};
use article_params::config::Config;
use article_params::form::{ArticleParamsForm, DocumentEvents, PointerDown};
use article_params::tui::action::Action;
use article_params::tui::components::render_params_panel;
use article_params::tui::focus::{FormControl, FormFocus};
use article_params::tui::reducer::reduce;
use article_params::tui::state::AppState;
use article_params::tui::Runtime;
use ratatui::{buffer::Buffer, layout::Rect};

fn create_form(document: &DocumentEvents) -> ArticleParamsForm {
    ArticleParamsForm::new(document.clone(), |state| { black_box(state); }, || {})
}

/// Benchmark the form's state machine and draft edits
fn bench_form_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");

    group.bench_function("set_field", |b| {
        let document = DocumentEvents::new();
        let mut form = create_form(&document);
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % FONT_SIZE_OPTIONS.len();
            form.set_field(ArticleField::FontSize, black_box(FONT_SIZE_OPTIONS[index]));
        })
    });

    group.bench_function("toggle_open_close", |b| {
        let document = DocumentEvents::new();
        let mut form = create_form(&document);
        b.iter(|| {
            form.toggle();
            form.toggle();
        })
    });

    group.bench_function("outside_pointer_down", |b| {
        let document = DocumentEvents::new();
        let mut form = create_form(&document);
        form.panel_ref().set(Some(Rect::new(0, 0, 44, 22)));
        b.iter(|| {
            form.toggle();
            document.dispatch_pointer_down(black_box(&PointerDown::new(60, 10)));
        })
    });

    group.bench_function("submit_apply", |b| {
        let document = DocumentEvents::new();
        let mut form = create_form(&document);
        form.set_field(ArticleField::BackgroundColor, BACKGROUND_COLORS[1]);
        b.iter(|| {
            form.toggle();
            form.submit_apply();
        })
    });

    group.finish();
}

/// Benchmark panel rendering
fn bench_panel_render(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("render");

    group.bench_function("params_panel", |b| {
        let document = DocumentEvents::new();
        let form = create_form(&document);
        let focus = FormFocus::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 44, 24));
        b.iter(|| {
            render_params_panel(
                buf.area,
                &mut buf,
                &DEFAULT_ARTICLE_STATE,
                &focus,
                form.panel_ref(),
                &config.display,
            )
        })
    });

    group.bench_function("params_panel_with_dropdown", |b| {
        let document = DocumentEvents::new();
        let form = create_form(&document);
        let focus = FormFocus {
            focused: FormControl::Field(ArticleField::FontColor),
            expanded: Some(3),
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 44, 24));
        b.iter(|| {
            render_params_panel(
                buf.area,
                &mut buf,
                &DEFAULT_ARTICLE_STATE,
                &focus,
                form.panel_ref(),
                &config.display,
            )
        })
    });

    group.bench_function("full_screen", |b| {
        let mut runtime = Runtime::new(AppState::new(Config::default()));
        runtime.dispatch(Action::TogglePanel);
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 40));
        b.iter(|| runtime.draw(buf.area, &mut buf))
    });

    group.finish();
}

/// Benchmark reducer dispatch for the host actions
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = AppState::new(Config::default());
    let applied = DEFAULT_ARTICLE_STATE.with_field(ArticleField::FontSize, FONT_SIZE_OPTIONS[2]);

    let mut group = c.benchmark_group("reducer");

    group.bench_function("article_applied", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::ArticleApplied(applied)),
            );
            new_state
        })
    });

    group.bench_function("article_reset", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(black_box(state.clone()), black_box(Action::ArticleReset));
            new_state
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_form_operations,
    bench_panel_render,
    bench_reducer_dispatch
);
criterion_main!(benches);
