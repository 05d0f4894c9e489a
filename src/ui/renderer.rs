//! Plain-text rendering of the search/filter bar.
//!
//! The renderer turns a [`SearchFilterBarModel`] into a compact text block: the search
//! input, one line per filter dropdown, the active tags with the clear action, the result
//! count, and the empty state when nothing matches.
//!
//! # Layout
//!
//! ```text
//! [ Search: fellow                        ]
//! Category (1): [x] Fellowship (2) [ ] Innovation (2)
//! Year: [ ] 2021 (2) [ ] 2020 (1)
//! Active: Fellowship  |  Clear (1)
//! Showing 1 of 5 awards
//! ```

use crate::ui::viewmodel::{FilterGroup, SearchFilterBarModel};
use std::fmt::Write;

/// Minimum inner width of the search box.
const SEARCH_BOX_WIDTH: usize = 40;

/// Renders the view model to a string, one element per line.
#[must_use]
pub fn render(model: &SearchFilterBarModel) -> String {
    let mut out = String::new();

    let search_text = if model.search_text.is_empty() {
        model.placeholder.as_str()
    } else {
        model.search_text.as_str()
    };
    let content = format!(" Search: {search_text}");
    let padding = SEARCH_BOX_WIDTH.saturating_sub(content.chars().count());
    let _ = writeln!(out, "[{content}{} ]", " ".repeat(padding));

    for group in &model.groups {
        render_group(&mut out, group);
    }

    if model.has_active_filters {
        let tags: Vec<&str> = model.active_tags.iter().map(|t| t.label.as_str()).collect();
        let _ = writeln!(
            out,
            "Active: {}  |  Clear ({})",
            tags.join(", "),
            model.total_active_filters
        );
    }

    let _ = writeln!(out, "{}", model.summary);

    if let Some(empty) = &model.empty_state {
        let _ = writeln!(out, "{}", empty.message);
        let _ = writeln!(out, "{}", empty.subtitle);
    }

    out
}

fn render_group(out: &mut String, group: &FilterGroup) {
    let _ = write!(out, "{}", group.label);
    if group.selected_count > 0 {
        let _ = write!(out, " ({})", group.selected_count);
    }
    let _ = write!(out, ":");

    for option in &group.options {
        let mark = if option.checked { 'x' } else { ' ' };
        let _ = write!(out, " [{mark}] {} ({})", option.label, option.count);
    }
    out.push('\n');
}
