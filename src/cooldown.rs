use crate::conf::resend_countdown_text;
use crate::view::CooldownView;
use futures::{Stream, StreamExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    Finished,
}

/// Resend cooldown of one trigger button.
///
/// The button stays disabled from `start` until the tick that reaches zero,
/// which clears the hint and restores the label captured at start.
#[derive(Debug)]
pub struct Countdown {
    remaining: u32,
    label: String,
    prefix: String,
}

impl Countdown {
    pub fn start<V: CooldownView>(view: &V, secs: u32, prefix: impl Into<String>) -> Self {
        let label = view.button_label();
        view.set_button_disabled(true);

        Self {
            remaining: secs,
            label,
            prefix: prefix.into(),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick<V: CooldownView>(&mut self, view: &V) -> Tick {
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            view.set_hint("");
            view.set_button_disabled(false);
            view.set_button_label(&self.label);
            Tick::Finished
        } else {
            view.set_hint(&resend_countdown_text(&self.prefix, self.remaining));
            Tick::Running(self.remaining)
        }
    }

    /// Consumes ticks until the countdown finishes or the stream ends.
    ///
    /// Returns the number of ticks consumed.
    pub async fn run<V, S>(mut self, view: &V, ticks: S) -> u32
    where
        V: CooldownView,
        S: Stream<Item = ()>,
    {
        let mut ticks = std::pin::pin!(ticks);
        let mut consumed = 0;

        while ticks.next().await.is_some() {
            consumed += 1;
            if self.tick(view) == Tick::Finished {
                break;
            }
        }

        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{executor::block_on, stream};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeButton {
        hints: RefCell<Vec<String>>,
        label: RefCell<String>,
        disabled: RefCell<bool>,
    }

    impl CooldownView for FakeButton {
        fn set_hint(&self, text: &str) {
            self.hints.borrow_mut().push(text.to_owned());
        }

        fn button_label(&self) -> String {
            self.label.borrow().clone()
        }

        fn set_button_label(&self, label: &str) {
            *self.label.borrow_mut() = label.to_owned();
        }

        fn button_disabled(&self) -> bool {
            *self.disabled.borrow()
        }

        fn set_button_disabled(&self, disabled: bool) {
            *self.disabled.borrow_mut() = disabled;
        }
    }

    fn button(label: &str) -> FakeButton {
        let view = FakeButton::default();
        *view.label.borrow_mut() = label.to_owned();
        view
    }

    #[test]
    fn start_disables_the_button() {
        let view = button("Send code");
        let countdown = Countdown::start(&view, 60, "再送まで");

        assert!(*view.disabled.borrow());
        assert_eq!(countdown.remaining(), 60);
        assert!(view.hints.borrow().is_empty());
    }

    #[test]
    fn full_cooldown_takes_sixty_ticks() {
        let view = button("Send code");
        let countdown = Countdown::start(&view, 60, "再送まで");

        let consumed = block_on(countdown.run(&view, stream::repeat(()).take(100)));

        assert_eq!(consumed, 60);
        let hints = view.hints.borrow();
        assert_eq!(hints.len(), 60);
        assert_eq!(hints[0], "再送まで 59s");
        assert_eq!(hints[58], "再送まで 1s");
        assert_eq!(hints[59], "");
        assert!(!*view.disabled.borrow());
        assert_eq!(*view.label.borrow(), "Send code");
    }

    #[test]
    fn button_stays_disabled_until_the_last_tick() {
        let view = button("Send code");
        let mut countdown = Countdown::start(&view, 3, "Resend in");

        assert_eq!(countdown.tick(&view), Tick::Running(2));
        assert!(*view.disabled.borrow());
        assert_eq!(countdown.tick(&view), Tick::Running(1));
        assert!(*view.disabled.borrow());
        assert_eq!(countdown.tick(&view), Tick::Finished);
        assert!(!*view.disabled.borrow());
        assert_eq!(*view.hints.borrow(), ["Resend in 2s", "Resend in 1s", ""]);
    }

    #[test]
    fn original_label_is_restored() {
        let view = button("認証コードを送信");
        let mut countdown = Countdown::start(&view, 2, "再送まで");
        view.set_button_label("…");

        countdown.tick(&view);
        countdown.tick(&view);

        assert_eq!(*view.label.borrow(), "認証コードを送信");
    }

    #[test]
    fn exhausted_stream_leaves_the_countdown_running() {
        let view = button("Send code");
        let countdown = Countdown::start(&view, 60, "再送まで");

        let consumed = block_on(countdown.run(&view, stream::repeat(()).take(5)));

        assert_eq!(consumed, 5);
        assert!(*view.disabled.borrow());
        assert_eq!(
            view.hints.borrow().last().map(String::as_str),
            Some("再送まで 55s")
        );
    }
}
