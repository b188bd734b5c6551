use crate::view::{InputMode, ToggleView};

/// Flips the target input between masked and revealed.
///
/// Returns the new mode, or `None` if the button has no target.
pub fn toggle<V: ToggleView>(view: &V) -> Option<InputMode> {
    let mode = view.target_mode()?.flipped();
    let labels = view.labels();

    view.set_target_mode(mode);
    view.set_label(match mode {
        InputMode::Revealed => &labels.hide,
        InputMode::Masked => &labels.show,
    });
    if view.has_icon_pair() {
        let (visible, hidden) = mode.icon_displays();
        view.set_icon_displays(visible, hidden);
    }

    Some(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::{ToggleLabels, DEFAULT_HIDE_LABEL, DEFAULT_SHOW_LABEL};
    use claim::{assert_none, assert_some_eq};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeToggle {
        target: RefCell<Option<InputMode>>,
        labels: ToggleLabels,
        label: RefCell<Option<String>>,
        icon_pair: bool,
        icons: RefCell<Option<(String, String)>>,
    }

    impl FakeToggle {
        fn with_target(mode: InputMode) -> Self {
            Self {
                target: RefCell::new(Some(mode)),
                icon_pair: true,
                ..Default::default()
            }
        }
    }

    impl ToggleView for FakeToggle {
        fn target_mode(&self) -> Option<InputMode> {
            *self.target.borrow()
        }

        fn set_target_mode(&self, mode: InputMode) {
            *self.target.borrow_mut() = Some(mode);
        }

        fn labels(&self) -> ToggleLabels {
            self.labels.clone()
        }

        fn set_label(&self, label: &str) {
            *self.label.borrow_mut() = Some(label.to_owned());
        }

        fn has_icon_pair(&self) -> bool {
            self.icon_pair
        }

        fn set_icon_displays(&self, visible: &str, hidden: &str) {
            *self.icons.borrow_mut() = Some((visible.to_owned(), hidden.to_owned()));
        }
    }

    #[test]
    fn masked_field_is_revealed_with_hide_label() {
        let view = FakeToggle::with_target(InputMode::Masked);

        assert_some_eq!(toggle(&view), InputMode::Revealed);
        assert_eq!(view.target_mode(), Some(InputMode::Revealed));
        assert_eq!(view.label.borrow().as_deref(), Some(DEFAULT_HIDE_LABEL));
        assert_eq!(
            *view.icons.borrow(),
            Some(("none".to_owned(), "inline".to_owned()))
        );
    }

    #[test]
    fn revealed_field_is_masked_with_show_label() {
        let view = FakeToggle::with_target(InputMode::Revealed);

        assert_some_eq!(toggle(&view), InputMode::Masked);
        assert_eq!(view.label.borrow().as_deref(), Some(DEFAULT_SHOW_LABEL));
        assert_eq!(
            *view.icons.borrow(),
            Some(("inline".to_owned(), "none".to_owned()))
        );
    }

    #[test]
    fn icons_are_left_alone_without_a_full_pair() {
        let view = FakeToggle {
            icon_pair: false,
            ..FakeToggle::with_target(InputMode::Masked)
        };

        assert_some_eq!(toggle(&view), InputMode::Revealed);
        assert_none!(view.icons.borrow().as_ref());
        assert_eq!(view.label.borrow().as_deref(), Some(DEFAULT_HIDE_LABEL));
    }

    #[test]
    fn two_clicks_restore_the_original_mode() {
        for start in [InputMode::Masked, InputMode::Revealed] {
            let view = FakeToggle::with_target(start);
            toggle(&view);
            toggle(&view);
            assert_eq!(view.target_mode(), Some(start));
        }
    }

    #[test]
    fn configured_labels_are_used() {
        let view = FakeToggle {
            labels: ToggleLabels::with_overrides(
                Some("パスワードを表示".into()),
                Some("パスワードを非表示".into()),
            ),
            ..FakeToggle::with_target(InputMode::Masked)
        };

        toggle(&view);
        assert_eq!(view.label.borrow().as_deref(), Some("パスワードを非表示"));
        toggle(&view);
        assert_eq!(view.label.borrow().as_deref(), Some("パスワードを表示"));
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let view = FakeToggle::default();

        assert_none!(toggle(&view));
        assert_none!(view.label.borrow().as_ref());
        assert_none!(view.icons.borrow().as_ref());
    }
}
