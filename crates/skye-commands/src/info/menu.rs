//! The dropdown attached to an info card.

use super::view::InfoView;
use poise::serenity_prelude as serenity;

const PLACEHOLDER: &str = "Choose what to show";

/// Custom id of the dropdown for one command invocation.
pub fn custom_id(invocation_id: u64) -> String {
    format!("{invocation_id}:userinfo")
}

/// Single-select dropdown offering every view, `selected` marked as default.
pub fn select_row(custom_id: &str, selected: InfoView, disabled: bool) -> serenity::CreateActionRow {
    let options = InfoView::ALL
        .into_iter()
        .map(|view| {
            serenity::CreateSelectMenuOption::new(view.as_str(), view.as_str())
                .description(view.description())
                .default_selection(view == selected)
        })
        .collect();

    serenity::CreateActionRow::SelectMenu(
        serenity::CreateSelectMenu::new(custom_id, serenity::CreateSelectMenuKind::String { options })
            .placeholder(PLACEHOLDER)
            .min_values(1)
            .max_values(1)
            .disabled(disabled),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_id_is_per_invocation() {
        assert_ne!(custom_id(1), custom_id(2));
        assert!(custom_id(42).ends_with(":userinfo"));
    }
}
