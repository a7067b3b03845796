//! Sortable header row for the users table.

use agit_business::{Column, SortDirective, SortIndicator};
use egui::{Button, Frame, Margin, RichText, Ui};
use egui_extras::TableRow;

use crate::utils::colors::HEADER_BG_COLOR;

/// Renders every header cell. Returns the column whose header was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, directive: SortDirective) -> Option<Column> {
    let mut clicked = None;
    for column in Column::ALL {
        header.col(|ui| {
            if render_header_cell(ui, column, directive.indicator(column)) {
                clicked = Some(column);
            }
        });
    }
    clicked
}

/// Header text: the label followed by the sort glyph, if any.
pub fn header_text(column: Column, indicator: SortIndicator) -> String {
    match indicator {
        SortIndicator::Hidden => column.label().to_owned(),
        SortIndicator::Unsorted => format!("{} ↕", column.label()),
        SortIndicator::Ascending => format!("{} ⬆", column.label()),
        SortIndicator::Descending => format!("{} ⬇", column.label()),
    }
}

fn render_header_cell(ui: &mut Ui, column: Column, indicator: SortIndicator) -> bool {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, |ui| {
            let text = RichText::new(header_text(column, indicator)).strong();
            if column.is_sortable() {
                ui.add(Button::new(text).frame(false))
                    .on_hover_text("Sort")
                    .clicked()
            } else {
                ui.label(text);
                false
            }
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_text_shows_direction() {
        assert_eq!(header_text(Column::Email, SortIndicator::Unsorted), "Email ↕");
        assert_eq!(header_text(Column::Email, SortIndicator::Ascending), "Email ⬆");
        assert_eq!(header_text(Column::Email, SortIndicator::Descending), "Email ⬇");
        assert_eq!(header_text(Column::Actions, SortIndicator::Hidden), "Actions");
    }
}
