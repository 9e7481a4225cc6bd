use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Border, Color, Element, Font, Length, Theme};

use crate::model::script::{ScriptId, ScriptRecord};

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone)]
pub enum ScriptListMessage {
    Run(ScriptId),
    Edit(ScriptId),
    Delete(ScriptId),
}

pub fn view(records: &[ScriptRecord]) -> Element<'_, ScriptListMessage> {
    if records.is_empty() {
        return container(
            column![
                text("No scripts yet").size(16).style(muted_text),
                text("Click + New Script to create one").size(13).style(muted_text),
            ]
            .spacing(4)
            .align_x(iced::Alignment::Center),
        )
        .center(Length::Fill)
        .into();
    }

    let cards = records
        .iter()
        .fold(column![].spacing(10).padding(10), |col, record| {
            col.push(card(record))
        });

    scrollable(cards)
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}

fn card(record: &ScriptRecord) -> Element<'_, ScriptListMessage> {
    let script = &record.script;
    let id = record.id;

    let header = row![
        text(&script.name).size(20).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }),
        horizontal_space().width(Length::Fill),
        text(format!("[{}]", script.language))
            .size(14)
            .color(Color::from_rgb(0.4, 0.6, 1.0)),
    ]
    .align_y(iced::Alignment::Center);

    let preview = text(script.preview(PREVIEW_CHARS))
        .size(12)
        .font(Font::MONOSPACE)
        .style(muted_text);

    let actions = row![
        button(text("▶ Run").size(13))
            .on_press(ScriptListMessage::Run(id))
            .style(button::success),
        button(text("Edit").size(13))
            .on_press(ScriptListMessage::Edit(id))
            .style(button::primary),
        button(text("Delete").size(13))
            .on_press(ScriptListMessage::Delete(id))
            .style(button::danger),
    ]
    .spacing(6);

    container(column![header, preview, actions].spacing(10))
        .padding(14)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let p = theme.palette();
            container::Style {
                background: Some(iced::Background::Color(p.background)),
                border: Border {
                    color: Color::from_rgba(p.text.r, p.text.g, p.text.b, 0.12),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}

/// Theme-aware muted text style (50% opacity of the theme's text color).
pub fn muted_text(theme: &Theme) -> text::Style {
    let p = theme.palette();
    text::Style {
        color: Some(Color::from_rgba(p.text.r, p.text.g, p.text.b, 0.5)),
    }
}
