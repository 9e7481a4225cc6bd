use iced::widget::{container, horizontal_space, row, text};
use iced::{Element, Length};

use crate::app::Message;
use crate::ui::script_list::muted_text;

pub fn view(status: &str, script_count: usize) -> Element<'_, Message> {
    let count = match script_count {
        1 => "1 script".to_string(),
        n => format!("{n} scripts"),
    };

    container(
        row![
            text(status).size(13),
            horizontal_space().width(Length::Fill),
            text(count).size(13).style(muted_text),
        ],
    )
    .width(Length::Fill)
    .padding([2, 8])
    .into()
}
