use iced::widget::{button, column, container, horizontal_rule, row, text};
use iced::{Border, Color, Element, Font, Length, Theme};

#[derive(Debug, Clone)]
pub enum AboutMessage {
    Close,
}

pub fn view<'a>(scripts_file: String) -> Element<'a, AboutMessage> {
    let title = text("Script Runner").size(24).font(Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    });

    let info = column![
        info_row("Version", env!("CARGO_PKG_VERSION").to_string()),
        info_row("Build date", env!("BUILD_DATE").to_string()),
        info_row("Commit", env!("GIT_COMMIT").to_string()),
        info_row("Scripts", scripts_file),
    ]
    .spacing(4);

    let dialog = container(
        column![
            title,
            text("Store, edit and run short code snippets").size(14),
            horizontal_rule(1),
            info,
            horizontal_rule(1),
            button("Close")
                .on_press(AboutMessage::Close)
                .style(button::primary),
        ]
        .spacing(12)
        .padding(24)
        .max_width(420)
        .align_x(iced::Alignment::Center),
    )
    .style(|theme: &Theme| {
        let palette = theme.palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background)),
            border: Border {
                color: Color::from_rgba(palette.text.r, palette.text.g, palette.text.b, 0.3),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        }
    });

    container(dialog)
        .center(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..container::Style::default()
        })
        .into()
}

fn info_row<'a>(label: &'a str, value: String) -> Element<'a, AboutMessage> {
    row![
        text(format!("{label}:"))
            .size(13)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .width(90),
        text(value).size(13),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}
