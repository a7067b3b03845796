use agit_business::{EditSearchCommand, SearchInput, UsersInput};
use agit_states::StateCtx;
use egui::{TextEdit, Ui};

/// The search box. Every edit restarts the debounce; the table filters once
/// typing pauses.
pub fn search_box(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut text = state_ctx.state::<SearchInput>().text.clone();

    ui.horizontal(|ui| {
        let label = ui.label("Search");
        let response = ui
            .add(
                TextEdit::singleline(&mut text)
                    .hint_text("🔍")
                    .desired_width(280.0),
            )
            .labelled_by(label.id);

        if response.changed() {
            state_ctx.update::<UsersInput>(|input| input.search_text = Some(text));
            state_ctx.dispatch::<EditSearchCommand>();
        }
    });
}
