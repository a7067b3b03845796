//! Table components for the users dashboard.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header row
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use agit_business::{DialogContent, Record, RecordsetCompute, SortState};
use agit_states::StateCtx;
use egui::{Align, Frame, Layout, Margin, Stroke, Ui};
use egui_extras::TableBuilder;

use crate::utils::colors::TABLE_BORDER_COLOR;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// What the user did with the table this frame.
#[derive(Debug, Default)]
pub struct TableResult {
    pub sort_click: Option<agit_business::Column>,
    pub action: Option<DialogContent>,
}

/// Renders the current page of the recordset.
pub fn users_table(state_ctx: &StateCtx, ui: &mut Ui) -> TableResult {
    let mut result = TableResult::default();

    let Some(recordset) = state_ctx.cached::<RecordsetCompute>() else {
        ui.label("Loading users...");
        return result;
    };
    let rows: &[Record] = recordset.current_page_rows();
    let directive = state_ctx.state::<SortState>().directive;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("users_table")
                .striped(true)
                .resizable(false)
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    result.sort_click = render_table_header(&mut header, directive);
                })
                .body(|mut body| {
                    if rows.is_empty() {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.weak("No users found");
                            });
                        });
                        return;
                    }
                    for record in rows {
                        body.row(ROW_HEIGHT, |mut row| {
                            if let Some(action) = render_user_row(&mut row, record) {
                                result.action = Some(action);
                            }
                        });
                    }
                });
        });

    result
}
