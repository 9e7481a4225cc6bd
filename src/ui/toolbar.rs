use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Border, Color, Element, Font, Length, Theme};

use crate::app::Message;

pub fn view<'a>(editing: bool, dark_mode: bool) -> Element<'a, Message> {
    let theme_label = if dark_mode { "☀ Light" } else { "☾ Dark" };

    let title = text("Script Runner").size(22).font(Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    });

    // New Script is disabled while the editor is open.
    let new_script = toolbar_button("+ New Script", (!editing).then_some(Message::NewScript));

    let tb = row![
        title,
        horizontal_space().width(24),
        new_script,
        horizontal_space().width(Length::Fill),
        toolbar_button(theme_label, Some(Message::ToggleTheme)),
        toolbar_button("About", Some(Message::ShowAbout)),
    ]
    .spacing(4)
    .padding(8)
    .align_y(iced::Alignment::Center);

    container(tb)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.palette();
            container::Style {
                background: Some(iced::Background::Color(Color::from_rgba(
                    palette.text.r,
                    palette.text.g,
                    palette.text.b,
                    0.04,
                ))),
                ..container::Style::default()
            }
        })
        .into()
}

fn toolbar_button(label: &str, msg: Option<Message>) -> iced::widget::Button<'_, Message> {
    button(text(label).size(14))
        .on_press_maybe(msg)
        .style(|theme: &Theme, status| {
            let palette = theme.palette();
            let mut style = button::Style {
                background: Some(iced::Background::Color(palette.background)),
                text_color: palette.text,
                border: Border {
                    color: Color::from_rgba(palette.text.r, palette.text.g, palette.text.b, 0.2),
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..button::Style::default()
            };
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    style.background = Some(iced::Background::Color(Color::from_rgba(
                        palette.text.r,
                        palette.text.g,
                        palette.text.b,
                        0.08,
                    )));
                }
                button::Status::Disabled => {
                    style.text_color = Color::from_rgba(
                        palette.text.r,
                        palette.text.g,
                        palette.text.b,
                        0.4,
                    );
                }
                button::Status::Active => {}
            }
            style
        })
        .padding([4, 10])
}
