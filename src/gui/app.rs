//! Chat window view
//!
//! Owns a [`ChatSession`] and renders it as a scrollable list of message
//! bubbles above the input box and send button.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    actions, canvas, div, point, prelude::*, px, rgb, App, Context, Entity, FocusHandle,
    Focusable, KeyBinding, MouseButton, ScrollHandle, Styled, Subscription, WeakEntity, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};

use super::components::message_bubble;
use super::theme::Theme;
use crate::chat::{ChatSession, Role, SubmitOutcome};

actions!(echo_chat, [Quit]);

/// Placeholder shown in the empty input box.
const INPUT_PLACEHOLDER: &str = "在這裡輸入訊息...";

/// Label of the send button.
const SEND_LABEL: &str = "傳送";

/// The input grows with its content up to this many rows, then scrolls.
const MAX_INPUT_ROWS: usize = 4;

/// Main chat view
pub struct ChatWindow {
    /// Focus handle for keyboard input
    focus_handle: FocusHandle,
    /// Message input
    input_state: Entity<InputState>,
    /// Messages, draft and responder
    session: ChatSession,
    /// Color theme
    theme: Theme,
    /// Scroll handle for the message list
    messages_scroll_handle: ScrollHandle,
    /// Number of messages in the most recently prepainted list
    laid_out_count: Rc<Cell<usize>>,
    _subscriptions: Vec<Subscription>,
}

impl ChatWindow {
    pub fn new(session: ChatSession, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input_state = cx.new(|cx| {
            InputState::new(window, cx)
                .auto_grow(1, MAX_INPUT_ROWS)
                .placeholder(INPUT_PLACEHOLDER)
        });

        // Plain enter inserts a newline; cmd/ctrl-enter sends.
        let input_sub = cx.subscribe_in(
            &input_state,
            window,
            |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { secondary: true } = event {
                    this.send_message(window, cx);
                }
            },
        );

        input_state.update(cx, |state, cx| state.focus(window, cx));

        let view = Self {
            focus_handle: cx.focus_handle(),
            input_state,
            session,
            theme: Theme::default(),
            messages_scroll_handle: ScrollHandle::new(),
            laid_out_count: Rc::new(Cell::new(0)),
            _subscriptions: vec![input_sub],
        };

        if !view.session.messages().is_empty() {
            view.schedule_scroll_to_bottom(window, cx);
        }
        view
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Append a message and bring it into view.
    pub fn append_message(
        &mut self,
        role: Role,
        content: impl Into<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.session.append_message(role, content);
        self.schedule_scroll_to_bottom(window, cx);
        cx.notify();
    }

    /// Send whatever is in the input box.
    fn send_message(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let content = self.input_state.read(cx).value().to_string();
        self.session.set_draft(content);

        let SubmitOutcome::Sent { user, reply } = self.session.submit() else {
            return;
        };
        tracing::debug!(user, reply, "Message sent");

        self.input_state.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
        self.schedule_scroll_to_bottom(window, cx);
        cx.notify();
    }

    /// Scroll to the bottom once a frame containing the new bubbles has been
    /// laid out. Does nothing if the view is gone by then.
    fn schedule_scroll_to_bottom(&self, window: &mut Window, cx: &mut Context<Self>) {
        Self::on_next_frame_scroll(cx.entity().downgrade(), window);
    }

    /// Next-frame callbacks run before that frame is drawn, so a pass that
    /// hasn't seen the new messages yet re-arms for the following frame.
    fn on_next_frame_scroll(this: WeakEntity<Self>, window: &mut Window) {
        window.on_next_frame(move |window, cx| {
            let still_pending = this
                .update(cx, |view, cx| view.apply_pending_scroll(cx))
                .unwrap_or(false);
            if still_pending {
                Self::on_next_frame_scroll(this, window);
                window.refresh();
            }
        });
    }

    /// Returns `true` while the bottom request is still waiting for layout.
    fn apply_pending_scroll(&mut self, cx: &mut Context<Self>) -> bool {
        let max_offset = self.messages_scroll_handle.max_offset().height;
        // GPUI scroll offsets are negative as you scroll down.
        let current = -self.messages_scroll_handle.offset().y / px(1.);
        let laid_out = self.laid_out_count.get();
        let scroll = self.session.scroll_mut();
        scroll.scroll_to(current);

        if scroll.layout_settled(max_offset / px(1.), laid_out) {
            let target = scroll.offset();
            self.messages_scroll_handle.set_offset(point(px(0.), px(-target)));
            cx.notify();
        }
        self.session.scroll().is_pending()
    }

    fn quit(&mut self, _: &Quit, _window: &mut Window, cx: &mut Context<Self>) {
        cx.quit();
    }

    /// Render the message list
    fn render_messages(&self) -> impl IntoElement {
        let theme = &self.theme;
        let message_count = self.session.messages().len();
        let laid_out_count = self.laid_out_count.clone();

        div()
            .id("messages-container")
            .flex_1()
            .min_h(px(0.))
            .overflow_y_scroll()
            .track_scroll(&self.messages_scroll_handle)
            .p(px(16.))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(12.))
                    .children(
                        self.session
                            .messages()
                            .iter()
                            .map(|msg| message_bubble(msg, theme)),
                    ),
            )
            // Records which messages the scroll handle's max offset covers
            .child(
                canvas(
                    move |_bounds, _window, _cx| laid_out_count.set(message_count),
                    |_bounds, _, _window, _cx| {},
                )
                .w_full()
                .h(px(0.)),
            )
    }

    /// Render the input area
    fn render_input(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .items_end()
            .gap(px(12.))
            .p(px(16.))
            .border_t_1()
            .border_color(theme.border)
            .bg(theme.panel_background)
            .child(div().flex_1().child(Input::new(&self.input_state)))
            .child(
                div()
                    .id("send-btn")
                    .px(px(16.))
                    .py(px(10.))
                    .rounded(px(8.))
                    .bg(theme.accent)
                    .text_color(rgb(0xffffff))
                    .cursor_pointer()
                    .hover(|s| s.opacity(0.9))
                    .on_mouse_up(
                        MouseButton::Left,
                        cx.listener(|this, _, window, cx| {
                            this.send_message(window, cx);
                        }),
                    )
                    .child(SEND_LABEL),
            )
    }
}

impl Focusable for ChatWindow {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ChatWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .track_focus(&self.focus_handle)
            .key_context("ChatWindow")
            .on_action(cx.listener(Self::quit))
            .flex()
            .flex_col()
            .size_full()
            .bg(self.theme.background)
            .text_color(self.theme.text)
            .child(self.render_messages())
            .child(self.render_input(cx))
    }
}

/// Register keybindings for the application
pub fn register_keybindings(cx: &mut App) {
    cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);
}
