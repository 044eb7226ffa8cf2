//! Message bubble: avatar, bold sender label with send time, and wrapped
//! body text.

use gpui::{div, img, prelude::*, px, AnyElement, FontWeight, Pixels, Styled};

use crate::chat::{Message, Role};
use crate::gui::theme::Theme;

/// Width and height of the avatar area.
pub const AVATAR_SIZE: Pixels = px(40.);

/// Render one message.
///
/// Messages without an avatar get a round placeholder of the same size so
/// the text column stays aligned.
pub fn message_bubble(message: &Message, theme: &Theme) -> impl IntoElement {
    let bubble_bg = match message.role() {
        Role::User => theme.user_bubble,
        Role::Assistant => theme.assistant_bubble,
    };

    div()
        .flex()
        .items_start()
        .gap(px(10.))
        .p(px(10.))
        .rounded(px(8.))
        .bg(bubble_bg)
        .child(avatar(message, theme))
        .child(
            div()
                .flex()
                .flex_col()
                .flex_1()
                .min_w(px(0.))
                .gap(px(5.))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(8.))
                        .child(
                            div()
                                .font_weight(FontWeight::BOLD)
                                .text_color(theme.text_muted)
                                .child(message.role().label()),
                        )
                        .child(
                            div()
                                .text_size(px(11.))
                                .text_color(theme.text_muted)
                                .child(message.time_label()),
                        ),
                )
                .child(
                    div()
                        .w_full()
                        .text_color(theme.text)
                        .child(message.content().to_string()),
                ),
        )
}

fn avatar(message: &Message, theme: &Theme) -> AnyElement {
    match message.avatar() {
        Some(path) => img(path.to_path_buf())
            .flex_shrink_0()
            .size(AVATAR_SIZE)
            .rounded_full()
            .into_any_element(),
        None => div()
            .flex_shrink_0()
            .size(AVATAR_SIZE)
            .rounded_full()
            .bg(theme.avatar_placeholder)
            .into_any_element(),
    }
}
