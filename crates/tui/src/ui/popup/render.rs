//! Popup rendering implementation.
//!
//! This module provides the `render_popup` function for rendering modal
//! popup dialogs with appropriate styling based on popup type.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use sources_client::SourceType;

use crate::ui::popup::{
    AddSourceField, EditSourceField, POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT, Popup, PopupType,
    WizardStep,
};
use crate::ui::theme::Theme;

/// Render a modal popup dialog.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `popup` - The popup to render
/// * `source_types` - The loaded source type catalog, for the type selector
/// * `theme` - The color theme to use
pub fn render_popup(
    f: &mut Frame,
    popup: &Popup,
    source_types: Option<&[SourceType]>,
    theme: &Theme,
) {
    let size = f.area();
    let popup_area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, size);

    f.render_widget(Clear, popup_area);

    match &popup.kind {
        PopupType::AddSourceWizard {
            name_input,
            type_index,
            url_input,
            role_input,
            username_input,
            password_input,
            authtype_input,
            selected_field,
        } => {
            let step = selected_field.step();
            let mut lines = wizard_header(step);

            match step {
                WizardStep::General => {
                    lines.push(field_line(
                        AddSourceField::Name.label(),
                        name_input,
                        *selected_field == AddSourceField::Name,
                        theme,
                    ));
                    lines.push(field_line(
                        AddSourceField::SourceType.label(),
                        &type_label(source_types, *type_index),
                        *selected_field == AddSourceField::SourceType,
                        theme,
                    ));
                }
                WizardStep::Endpoint => {
                    lines.push(field_line(
                        AddSourceField::Url.label(),
                        url_input,
                        *selected_field == AddSourceField::Url,
                        theme,
                    ));
                    lines.push(field_line(
                        AddSourceField::Role.label(),
                        role_input,
                        *selected_field == AddSourceField::Role,
                        theme,
                    ));
                }
                WizardStep::Credentials => {
                    lines.push(field_line(
                        AddSourceField::Username.label(),
                        username_input,
                        *selected_field == AddSourceField::Username,
                        theme,
                    ));
                    lines.push(field_line(
                        AddSourceField::Password.label(),
                        &mask(password_input),
                        *selected_field == AddSourceField::Password,
                        theme,
                    ));
                    lines.push(field_line(
                        AddSourceField::Authtype.label(),
                        authtype_input,
                        *selected_field == AddSourceField::Authtype,
                        theme,
                    ));
                }
            }

            lines.push(Line::raw(""));
            lines.push(wizard_hints(step, *selected_field == AddSourceField::SourceType, theme));

            render_wizard_body(f, popup_area, &popup.title, lines, theme);
        }
        PopupType::EditSourceWizard {
            name_input,
            url_input,
            username_input,
            password_input,
            authtype_input,
            selected_field,
            ..
        } => {
            let step = selected_field.step();
            let mut lines = wizard_header(step);

            match step {
                WizardStep::General => {
                    lines.push(field_line(
                        EditSourceField::Name.label(),
                        name_input,
                        *selected_field == EditSourceField::Name,
                        theme,
                    ));
                }
                WizardStep::Endpoint => {
                    lines.push(field_line(
                        EditSourceField::Url.label(),
                        url_input,
                        *selected_field == EditSourceField::Url,
                        theme,
                    ));
                }
                WizardStep::Credentials => {
                    lines.push(field_line(
                        EditSourceField::Username.label(),
                        username_input,
                        *selected_field == EditSourceField::Username,
                        theme,
                    ));
                    lines.push(field_line(
                        EditSourceField::Password.label(),
                        &mask(password_input),
                        *selected_field == EditSourceField::Password,
                        theme,
                    ));
                    lines.push(field_line(
                        EditSourceField::Authtype.label(),
                        authtype_input,
                        *selected_field == EditSourceField::Authtype,
                        theme,
                    ));
                }
            }

            lines.push(Line::raw(""));
            lines.push(wizard_hints(step, false, theme));

            render_wizard_body(f, popup_area, &popup.title, lines, theme);
        }
        PopupType::DeleteSourceConfirm { .. } => {
            let p = Paragraph::new(popup.content.as_str())
                .block(
                    Block::default()
                        .title(popup.title.as_str())
                        .borders(Borders::ALL)
                        .border_style(theme.error()),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(p, popup_area);
        }
    }
}

fn render_wizard_body(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    theme: &Theme,
) {
    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title_style(theme.title()),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

fn wizard_header(step: WizardStep) -> Vec<Line<'static>> {
    vec![
        Line::raw(format!(
            "Step {} of {}: {}",
            step.position(),
            WizardStep::COUNT,
            step.heading()
        )),
        Line::raw(""),
    ]
}

fn field_line<'a>(label: &'a str, value: &str, selected: bool, theme: &Theme) -> Line<'a> {
    let marker = if selected { "> " } else { "  " };
    let style = if selected { theme.highlight() } else { theme.text() };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{label}: "), style),
        Span::styled(value.to_string(), style),
    ])
}

fn wizard_hints(step: WizardStep, on_type_selector: bool, theme: &Theme) -> Line<'static> {
    let enter = match step {
        WizardStep::Credentials => "Enter: submit",
        _ => "Enter: next step",
    };
    let mut hints = format!("Tab: next field | {enter} | Esc: cancel");
    if on_type_selector {
        hints = format!("←/→: change type | {hints}");
    }
    Line::styled(hints, theme.text_dim())
}

fn type_label(source_types: Option<&[SourceType]>, type_index: usize) -> String {
    source_types
        .and_then(|types| types.get(type_index))
        .map(|t| t.product_name.clone().unwrap_or_else(|| t.name.clone()))
        .unwrap_or_else(|| "(no source types loaded)".to_string())
}

fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Create a centered rectangle with the given percentage of the screen size.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
