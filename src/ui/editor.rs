use iced::widget::{button, column, horizontal_space, pick_list, row, text, text_editor, text_input};
use iced::{Element, Font, Length};

use crate::model::language::Language;
use crate::model::script::{ScriptId, ScriptRecord};
use crate::ui::script_list::muted_text;

#[derive(Debug, Clone)]
pub enum EditorMessage {
    SetName(String),
    SetLanguage(Language),
    CodeAction(text_editor::Action),
    Save,
    Cancel,
}

/// Form state for creating a script (`target == None`) or editing one.
pub struct EditorState {
    pub target: Option<ScriptId>,
    pub name: String,
    pub language: Language,
    pub code: text_editor::Content,
}

impl EditorState {
    pub fn blank() -> Self {
        Self {
            target: None,
            name: String::new(),
            language: Language::default(),
            code: text_editor::Content::new(),
        }
    }

    pub fn for_record(record: &ScriptRecord) -> Self {
        Self {
            target: Some(record.id),
            name: record.script.name.clone(),
            language: record.script.language.clone(),
            code: text_editor::Content::with_text(&record.script.code),
        }
    }

    /// Apply a field edit. Save and Cancel are left to the caller.
    pub fn apply(&mut self, msg: EditorMessage) {
        match msg {
            EditorMessage::SetName(name) => self.name = name,
            EditorMessage::SetLanguage(language) => self.language = language,
            EditorMessage::CodeAction(action) => self.code.perform(action),
            EditorMessage::Save | EditorMessage::Cancel => {}
        }
    }

    fn language_options(&self) -> Vec<Language> {
        let mut options = Language::BUILTIN.to_vec();
        if !options.contains(&self.language) {
            options.push(self.language.clone());
        }
        options
    }
}

pub fn view(state: &EditorState) -> Element<'_, EditorMessage> {
    let title = if state.target.is_some() {
        "Script Editor"
    } else {
        "New Script"
    };

    column![
        text(title).size(22).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }),
        label("Name"),
        text_input("Script name", &state.name)
            .on_input(EditorMessage::SetName)
            .on_submit(EditorMessage::Save),
        label("Language"),
        pick_list(
            state.language_options(),
            Some(state.language.clone()),
            EditorMessage::SetLanguage
        )
        .width(200),
        label("Code"),
        text_editor(&state.code)
            .placeholder("Type your code here...")
            .on_action(EditorMessage::CodeAction)
            .font(Font::MONOSPACE)
            .height(Length::Fill),
        row![
            horizontal_space().width(Length::Fill),
            button("Cancel")
                .on_press(EditorMessage::Cancel)
                .style(button::secondary),
            button("Save")
                .on_press(EditorMessage::Save)
                .style(button::success),
        ]
        .spacing(10),
    ]
    .spacing(6)
    .padding(16)
    .height(Length::Fill)
    .into()
}

fn label(s: &str) -> Element<'_, EditorMessage> {
    text(s).size(12).style(muted_text).into()
}
