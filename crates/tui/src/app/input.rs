//! Keyboard input handling.
//!
//! `App::handle_input` turns key events into actions. Keystrokes that
//! only move a cursor or edit a wizard field mutate state directly and
//! return `None`; everything that needs a side effect or a reducer pass
//! comes back as an action.

use crossterm::event::{KeyCode, KeyEvent};
use secrecy::SecretString;
use sources_client::SourceForm;

use crate::action::Action;
use crate::app::App;
use crate::ui::popup::{AddSourceField, EditSourceField, Popup, PopupType};

impl App {
    /// Handle a key event, returning the action it maps to, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.popup.is_some() {
            return self.handle_popup_input(key);
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::LoadSources),
            KeyCode::Char('a') => Some(Action::OpenAddSourceWizard),
            KeyCode::Char('e') => self.selected_source().map(|source| {
                Action::LoadSourceForEdit {
                    source_id: source.id.clone(),
                }
            }),
            KeyCode::Char('d') => {
                if let Some(source) = self.selected_source() {
                    let kind = PopupType::DeleteSourceConfirm {
                        source_id: source.id.clone(),
                        source_name: source.name.clone(),
                    };
                    self.popup = Some(Popup::builder(kind).build());
                }
                None
            }
            KeyCode::Down => {
                self.select_next_row();
                None
            }
            KeyCode::Up => {
                self.select_previous_row();
                None
            }
            KeyCode::Right => Some(Action::NextPage),
            KeyCode::Left => Some(Action::PreviousPage),
            _ => None,
        }
    }

    fn handle_popup_input(&mut self, key: KeyEvent) -> Option<Action> {
        let popup = self.popup.as_mut()?;
        match &mut popup.kind {
            PopupType::AddSourceWizard {
                name_input,
                type_index,
                url_input,
                role_input,
                username_input,
                password_input,
                authtype_input,
                selected_field,
            } => match key.code {
                KeyCode::Esc => Some(Action::ClosePopup),
                KeyCode::Tab => {
                    *selected_field = selected_field.next();
                    None
                }
                KeyCode::BackTab => {
                    *selected_field = selected_field.previous();
                    None
                }
                KeyCode::Left if *selected_field == AddSourceField::SourceType => {
                    let count = self.source_types.as_ref().map_or(0, Vec::len);
                    if count > 0 {
                        *type_index = (*type_index + count - 1) % count;
                    }
                    None
                }
                KeyCode::Right if *selected_field == AddSourceField::SourceType => {
                    let count = self.source_types.as_ref().map_or(0, Vec::len);
                    if count > 0 {
                        *type_index = (*type_index + 1) % count;
                    }
                    None
                }
                KeyCode::Enter => {
                    if let Some(next) = selected_field.next_step_start() {
                        *selected_field = next;
                        return None;
                    }
                    let source_types = self.source_types.clone().unwrap_or_default();
                    let source_type = source_types
                        .get(*type_index)
                        .map(|t| t.name.clone())
                        .unwrap_or_default();
                    let form = SourceForm {
                        source_name: name_input.clone(),
                        source_type,
                        url: non_empty(url_input),
                        role: non_empty(role_input),
                        user_name: non_empty(username_input),
                        password: non_empty(password_input)
                            .map(|password| SecretString::new(password.into())),
                        authtype: non_empty(authtype_input),
                        ..SourceForm::default()
                    };
                    Some(Action::SubmitSourceCreate {
                        form: Box::new(form),
                        source_types,
                    })
                }
                KeyCode::Backspace => {
                    if let Some(input) = add_wizard_input(
                        *selected_field,
                        name_input,
                        url_input,
                        role_input,
                        username_input,
                        password_input,
                        authtype_input,
                    ) {
                        input.pop();
                    }
                    None
                }
                KeyCode::Char(c) => {
                    if let Some(input) = add_wizard_input(
                        *selected_field,
                        name_input,
                        url_input,
                        role_input,
                        username_input,
                        password_input,
                        authtype_input,
                    ) {
                        input.push(c);
                    }
                    None
                }
                _ => None,
            },
            PopupType::EditSourceWizard {
                detail,
                name_input,
                url_input,
                username_input,
                password_input,
                authtype_input,
                selected_field,
            } => match key.code {
                KeyCode::Esc => Some(Action::ClosePopup),
                KeyCode::Tab => {
                    *selected_field = selected_field.next();
                    None
                }
                KeyCode::BackTab => {
                    *selected_field = selected_field.previous();
                    None
                }
                KeyCode::Enter => {
                    if let Some(next) = selected_field.next_step_start() {
                        *selected_field = next;
                        return None;
                    }
                    let form = SourceForm {
                        source_name: name_input.clone(),
                        url: non_empty(url_input),
                        user_name: non_empty(username_input),
                        password: non_empty(password_input)
                            .map(|password| SecretString::new(password.into())),
                        authtype: non_empty(authtype_input),
                        ..SourceForm::default()
                    };
                    Some(Action::SubmitSourceUpdate {
                        detail: detail.clone(),
                        form: Box::new(form),
                    })
                }
                KeyCode::Backspace => {
                    if let Some(input) = edit_wizard_input(
                        *selected_field,
                        name_input,
                        url_input,
                        username_input,
                        password_input,
                        authtype_input,
                    ) {
                        input.pop();
                    }
                    None
                }
                KeyCode::Char(c) => {
                    if let Some(input) = edit_wizard_input(
                        *selected_field,
                        name_input,
                        url_input,
                        username_input,
                        password_input,
                        authtype_input,
                    ) {
                        input.push(c);
                    }
                    None
                }
                _ => None,
            },
            PopupType::DeleteSourceConfirm {
                source_id,
                source_name,
            } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Some(Action::RemoveSource {
                    source_id: source_id.clone(),
                    source_name: source_name.clone(),
                }),
                KeyCode::Char('n') | KeyCode::Esc => Some(Action::ClosePopup),
                _ => None,
            },
        }
    }
}

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

/// The editable buffer behind an add wizard field, if it accepts text.
#[allow(clippy::too_many_arguments)]
fn add_wizard_input<'a>(
    field: AddSourceField,
    name_input: &'a mut String,
    url_input: &'a mut String,
    role_input: &'a mut String,
    username_input: &'a mut String,
    password_input: &'a mut String,
    authtype_input: &'a mut String,
) -> Option<&'a mut String> {
    match field {
        AddSourceField::Name => Some(name_input),
        AddSourceField::SourceType => None,
        AddSourceField::Url => Some(url_input),
        AddSourceField::Role => Some(role_input),
        AddSourceField::Username => Some(username_input),
        AddSourceField::Password => Some(password_input),
        AddSourceField::Authtype => Some(authtype_input),
    }
}

fn edit_wizard_input<'a>(
    field: EditSourceField,
    name_input: &'a mut String,
    url_input: &'a mut String,
    username_input: &'a mut String,
    password_input: &'a mut String,
    authtype_input: &'a mut String,
) -> Option<&'a mut String> {
    match field {
        EditSourceField::Name => Some(name_input),
        EditSourceField::Url => Some(url_input),
        EditSourceField::Username => Some(username_input),
        EditSourceField::Password => Some(password_input),
        EditSourceField::Authtype => Some(authtype_input),
    }
}
