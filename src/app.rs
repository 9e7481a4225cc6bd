use iced::widget::{column, container, stack};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::config::paths;
use crate::config::settings::Settings;
use crate::model::script::ScriptId;
use crate::store::script_store::{Error, LoadOutcome, ScriptStore};
use crate::store::settings_store;
use crate::ui;
use crate::ui::about_modal::AboutMessage;
use crate::ui::editor::{EditorMessage, EditorState};
use crate::ui::script_list::ScriptListMessage;

pub enum Screen {
    Main,
    Editor(EditorState),
}

pub struct ScriptRunner {
    store: ScriptStore,
    pub screen: Screen,
    pub status: String,
    pub settings: Settings,
    pub show_about: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Toolbar
    NewScript,
    ToggleTheme,
    ShowAbout,
    AboutMsg(AboutMessage),

    ScriptListMsg(ScriptListMessage),
    EditorMsg(EditorMessage),

    // Keyboard
    Escape,
}

impl ScriptRunner {
    pub fn new(store: ScriptStore, settings: Settings, status: String) -> Self {
        Self {
            store,
            screen: Screen::Main,
            status,
            settings,
            show_about: false,
        }
    }

    /// Load settings and the script file, then hand the state to iced.
    pub fn boot() -> (Self, Task<Message>) {
        let settings = settings_store::load_settings();
        let (store, outcome) = ScriptStore::open(paths::scripts_file());
        let status = match outcome {
            LoadOutcome::Loaded(n) => format!("Loaded {n} scripts from {}", store.path().display()),
            LoadOutcome::Missing => "Ready".to_string(),
            LoadOutcome::Failed(e) => format!("Could not load scripts: {e}"),
        };
        (Self::new(store, settings, status), Task::none())
    }
}

pub fn update(state: &mut ScriptRunner, message: Message) -> Task<Message> {
    match message {
        Message::NewScript => {
            if matches!(state.screen, Screen::Main) && !state.show_about {
                state.screen = Screen::Editor(EditorState::blank());
            }
        }

        Message::ToggleTheme => {
            state.settings.dark_mode = !state.settings.dark_mode;
            settings_store::save_settings(&state.settings);
        }

        Message::ShowAbout => state.show_about = true,

        Message::AboutMsg(AboutMessage::Close) => state.show_about = false,

        Message::Escape => {
            if state.show_about {
                state.show_about = false;
            } else if matches!(state.screen, Screen::Editor(_)) {
                state.screen = Screen::Main;
            }
        }

        Message::ScriptListMsg(msg) => handle_script_list_message(state, msg),

        Message::EditorMsg(msg) => handle_editor_message(state, msg),
    }
    Task::none()
}

fn handle_script_list_message(state: &mut ScriptRunner, msg: ScriptListMessage) {
    match msg {
        ScriptListMessage::Run(id) => run_script(state, id),
        ScriptListMessage::Edit(id) => match state.store.get(id) {
            Some(record) => state.screen = Screen::Editor(EditorState::for_record(record)),
            None => state.status = Error::NotFound(id).to_string(),
        },
        ScriptListMessage::Delete(id) => match state.store.delete(id) {
            Ok(record) => state.status = format!("Deleted: {}", record.script.name),
            Err(e) => state.status = format!("Delete error: {e}"),
        },
    }
}

/// Execution is not supported; the request is only logged.
fn run_script(state: &mut ScriptRunner, id: ScriptId) {
    let Some(record) = state.store.get(id) else {
        state.status = Error::NotFound(id).to_string();
        return;
    };
    let script = &record.script;
    tracing::info!(language = %script.language, "Running: {}", script.name);
    state.status = format!("Running: {}", script.name);
}

fn handle_editor_message(state: &mut ScriptRunner, msg: EditorMessage) {
    let Screen::Editor(editor) = &mut state.screen else {
        return;
    };

    match msg {
        EditorMessage::Save => save_editor(state),
        EditorMessage::Cancel => state.screen = Screen::Main,
        other => editor.apply(other),
    }
}

fn save_editor(state: &mut ScriptRunner) {
    let Screen::Editor(editor) = &state.screen else {
        return;
    };

    let code = editor.code.text();
    let language = editor.language.clone();
    let result = match editor.target {
        Some(id) => state.store.update(id, &editor.name, language, &code),
        None => state.store.create(&editor.name, language, &code),
    };

    match result {
        Ok(record) => {
            state.status = format!("Saved: {}", record.script.name);
            state.screen = Screen::Main;
        }
        // Keep the form open so the input can be corrected.
        Err(e @ Error::InvalidInput(_)) => state.status = e.to_string(),
        Err(e) if e.is_persistence() => {
            state.status = format!("Saved in memory only: {e}");
            state.screen = Screen::Main;
        }
        Err(e) => {
            state.status = format!("Save error: {e}");
            state.screen = Screen::Main;
        }
    }
}

// --- View ---

pub fn view(state: &ScriptRunner) -> Element<'_, Message> {
    let editing = matches!(state.screen, Screen::Editor(_));
    let toolbar = ui::toolbar::view(editing, state.settings.dark_mode);

    let body: Element<'_, Message> = match &state.screen {
        Screen::Main => ui::script_list::view(state.store.list()).map(Message::ScriptListMsg),
        Screen::Editor(editor) => ui::editor::view(editor).map(Message::EditorMsg),
    };

    let status_bar = ui::status_bar::view(&state.status, state.store.len());

    let mut content: Element<'_, Message> = column![
        toolbar,
        container(body).width(Length::Fill).height(Length::Fill),
        status_bar,
    ]
    .into();

    if state.show_about {
        let scripts_file = state.store.path().display().to_string();
        content = stack![content, ui::about_modal::view(scripts_file).map(Message::AboutMsg)].into();
    }

    content
}

pub fn theme(state: &ScriptRunner) -> Theme {
    if state.settings.dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub fn subscription(_state: &ScriptRunner) -> Subscription<Message> {
    iced::keyboard::on_key_press(handle_key_press)
}

fn handle_key_press(
    key: iced::keyboard::Key,
    modifiers: iced::keyboard::Modifiers,
) -> Option<Message> {
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    match &key {
        Key::Named(Named::Escape) => Some(Message::Escape),
        Key::Character(c) if modifiers.command() && c.as_str() == "n" => Some(Message::NewScript),
        Key::Character(c) if modifiers.command() && c.as_str() == "s" => {
            Some(Message::EditorMsg(EditorMessage::Save))
        }
        _ => None,
    }
}
