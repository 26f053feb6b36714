//! Modal popup dialogs.
//!
//! This module provides the `Popup` struct, the `PopupType` enum describing
//! every dialog the TUI can open, and the field-cycling enums used for
//! wizard form navigation.

mod render;

pub use render::render_popup;

use sources_client::{SourceDetail, endpoint_url};

/// Width of popups as a percentage of the screen width.
pub const POPUP_WIDTH_PERCENT: u16 = 60;

/// Height of popups as a percentage of the screen height.
pub const POPUP_HEIGHT_PERCENT: u16 = 50;

/// The three pages of the source wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Name and source type
    General,
    /// Connection endpoint
    Endpoint,
    /// Credentials for the endpoint
    Credentials,
}

impl WizardStep {
    /// Returns the heading shown for this step.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Endpoint => "Endpoint",
            Self::Credentials => "Credentials",
        }
    }

    /// Returns the 1-based position of this step for progress display.
    pub fn position(&self) -> usize {
        match self {
            Self::General => 1,
            Self::Endpoint => 2,
            Self::Credentials => 3,
        }
    }

    /// Total number of wizard steps.
    pub const COUNT: usize = 3;
}

/// Field selection for the add source wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddSourceField {
    /// Source name field
    Name,
    /// Source type selection
    SourceType,
    /// Endpoint URL field
    Url,
    /// Endpoint role field
    Role,
    /// Username field
    Username,
    /// Password field
    Password,
    /// Authentication type field
    Authtype,
}

impl AddSourceField {
    /// Get the next field in the form (cycles through all fields).
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::SourceType,
            Self::SourceType => Self::Url,
            Self::Url => Self::Role,
            Self::Role => Self::Username,
            Self::Username => Self::Password,
            Self::Password => Self::Authtype,
            Self::Authtype => Self::Name,
        }
    }

    /// Get the previous field in the form (cycles through all fields).
    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Authtype,
            Self::SourceType => Self::Name,
            Self::Url => Self::SourceType,
            Self::Role => Self::Url,
            Self::Username => Self::Role,
            Self::Password => Self::Username,
            Self::Authtype => Self::Password,
        }
    }

    /// The wizard step this field belongs to.
    pub fn step(self) -> WizardStep {
        match self {
            Self::Name | Self::SourceType => WizardStep::General,
            Self::Url | Self::Role => WizardStep::Endpoint,
            Self::Username | Self::Password | Self::Authtype => WizardStep::Credentials,
        }
    }

    /// The first field of the step after this field's step, if any.
    pub fn next_step_start(self) -> Option<Self> {
        match self.step() {
            WizardStep::General => Some(Self::Url),
            WizardStep::Endpoint => Some(Self::Username),
            WizardStep::Credentials => None,
        }
    }

    /// The label shown next to the field input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::SourceType => "Type",
            Self::Url => "URL",
            Self::Role => "Role",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Authtype => "Authentication type",
        }
    }
}

/// Field selection for the edit source wizard.
///
/// Editing never changes the source type or endpoint role, so those
/// fields are absent from the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSourceField {
    /// Source name field
    Name,
    /// Endpoint URL field
    Url,
    /// Username field
    Username,
    /// Password field
    Password,
    /// Authentication type field
    Authtype,
}

impl EditSourceField {
    /// Get the next field in the form (cycles through all fields).
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Url,
            Self::Url => Self::Username,
            Self::Username => Self::Password,
            Self::Password => Self::Authtype,
            Self::Authtype => Self::Name,
        }
    }

    /// Get the previous field in the form (cycles through all fields).
    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Authtype,
            Self::Url => Self::Name,
            Self::Username => Self::Url,
            Self::Password => Self::Username,
            Self::Authtype => Self::Password,
        }
    }

    /// The wizard step this field belongs to.
    pub fn step(self) -> WizardStep {
        match self {
            Self::Name => WizardStep::General,
            Self::Url => WizardStep::Endpoint,
            Self::Username | Self::Password | Self::Authtype => WizardStep::Credentials,
        }
    }

    /// The first field of the step after this field's step, if any.
    pub fn next_step_start(self) -> Option<Self> {
        match self.step() {
            WizardStep::General => Some(Self::Url),
            WizardStep::Endpoint => Some(Self::Username),
            WizardStep::Credentials => None,
        }
    }

    /// The label shown next to the field input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Url => "URL",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Authtype => "Authentication type",
        }
    }
}

/// The kinds of popup the TUI can display.
#[derive(Debug, Clone)]
pub enum PopupType {
    /// Three-step wizard collecting a new source, endpoint, and credentials
    AddSourceWizard {
        name_input: String,
        type_index: usize,
        url_input: String,
        role_input: String,
        username_input: String,
        password_input: String,
        authtype_input: String,
        selected_field: AddSourceField,
    },
    /// Wizard editing an existing source, prefilled from loaded records
    EditSourceWizard {
        detail: Box<SourceDetail>,
        name_input: String,
        url_input: String,
        username_input: String,
        password_input: String,
        authtype_input: String,
        selected_field: EditSourceField,
    },
    /// Confirmation dialog before deleting a source
    DeleteSourceConfirm {
        source_id: String,
        source_name: String,
    },
}

impl PopupType {
    /// An empty add source wizard positioned on its first field.
    pub fn add_wizard() -> Self {
        Self::AddSourceWizard {
            name_input: String::new(),
            type_index: 0,
            url_input: String::new(),
            role_input: String::new(),
            username_input: String::new(),
            password_input: String::new(),
            authtype_input: String::new(),
            selected_field: AddSourceField::Name,
        }
    }

    /// An edit wizard prefilled from a loaded source detail.
    ///
    /// The password field starts empty. The API never returns stored
    /// secrets, so an untouched password simply means "keep the current
    /// one" as far as the user is concerned, and the update chain omits
    /// the field entirely.
    pub fn edit_wizard(detail: Box<SourceDetail>) -> Self {
        let name_input = detail.source.name.clone();
        let url_input = detail.endpoint.as_ref().map(endpoint_url).unwrap_or_default();
        let username_input = detail
            .authentication
            .as_ref()
            .and_then(|auth| auth.username.clone())
            .unwrap_or_default();
        let authtype_input = detail
            .authentication
            .as_ref()
            .and_then(|auth| auth.authtype.clone())
            .unwrap_or_default();

        Self::EditSourceWizard {
            detail,
            name_input,
            url_input,
            username_input,
            password_input: String::new(),
            authtype_input,
            selected_field: EditSourceField::Name,
        }
    }
}

/// A modal popup dialog with title, content, and type.
#[derive(Debug, Clone)]
pub struct Popup {
    /// The title displayed in the popup border
    pub title: String,
    /// The main content text of the popup
    pub content: String,
    /// The kind/type of popup (determines behavior and default styling)
    pub kind: PopupType,
}

impl Popup {
    /// Create a new `PopupBuilder` for the given popup type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sources_tui::ui::popup::{Popup, PopupType};
    ///
    /// let popup = Popup::builder(PopupType::add_wizard()).build();
    /// assert_eq!(popup.title, "Add a New Source");
    /// ```
    pub fn builder(kind: PopupType) -> PopupBuilder {
        PopupBuilder::new(kind)
    }
}

/// Builder for constructing `Popup` instances.
pub struct PopupBuilder {
    kind: PopupType,
    title: Option<String>,
    content: Option<String>,
}

impl PopupBuilder {
    /// Create a new builder for the given popup type.
    pub fn new(kind: PopupType) -> Self {
        Self {
            kind,
            title: None,
            content: None,
        }
    }

    /// Set the popup title.
    ///
    /// If not set, a default title will be used based on the popup type.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the popup content.
    ///
    /// If not set, default content will be used based on the popup type.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Build the `Popup` instance using defaults derived from `PopupType`.
    pub fn build(self) -> Popup {
        let (default_title, default_content) = self.build_defaults();

        Popup {
            title: self.title.unwrap_or(default_title),
            content: self.content.unwrap_or(default_content),
            kind: self.kind,
        }
    }

    fn build_defaults(&self) -> (String, String) {
        match &self.kind {
            PopupType::AddSourceWizard { .. } => ("Add a New Source".to_string(), String::new()),
            PopupType::EditSourceWizard { name_input, .. } => {
                (format!("Edit Source '{name_input}'"), String::new())
            }
            PopupType::DeleteSourceConfirm { source_name, .. } => (
                "Remove Source".to_string(),
                format!(
                    "Are you sure you want to remove source '{source_name}'? (y/n)",
                ),
            ),
        }
    }
}
