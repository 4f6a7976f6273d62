//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::buffer::Buffer;

use crate::article::ArticleState;
use crate::form::{ArticleParamsForm, DocumentEvents};

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Callback invocations recorded by [`recording_form`]
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Apply(ArticleState),
    Reset,
}

/// Build a form whose callbacks append to a shared log
pub fn recording_form(document: &DocumentEvents) -> (ArticleParamsForm, Rc<RefCell<Vec<Recorded>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let apply_log = Rc::clone(&log);
    let reset_log = Rc::clone(&log);
    let form = ArticleParamsForm::new(
        document.clone(),
        move |state| apply_log.borrow_mut().push(Recorded::Apply(state)),
        move || reset_log.borrow_mut().push(Recorded::Reset),
    );
    (form, log)
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// True if any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}
