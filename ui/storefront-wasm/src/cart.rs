//! Add-to-cart feedback and quantity steppers.

use crate::dom::{self, QuantityControl};
use crate::events::{Component, Listener};
use crate::feedback;
use sf_behavior::cart;
use sf_scheduler::{SharedScheduler, after};
use std::rc::Rc;
use web_sys::{Element, HtmlElement};

pub struct CartFeedback {
    listeners: Vec<Listener>,
}

impl CartFeedback {
    pub fn bind(
        buttons: &[HtmlElement],
        controls: &[QuantityControl],
        badges: Vec<Element>,
        totals: Vec<HtmlElement>,
        scheduler: SharedScheduler,
    ) -> CartFeedback {
        let badges: Rc<[Element]> = badges.into();
        let totals: Rc<[HtmlElement]> = totals.into();
        let mut listeners = Vec::with_capacity(buttons.len() + controls.len() * 3);

        for button in buttons {
            // Captured now so a second click during the hold restores the real label.
            let label = button.text_content().unwrap_or_default();
            let pressed = button.clone();
            let scheduler = scheduler.clone();
            let badges = badges.clone();
            listeners.push(Listener::new(button, "click", move |_| {
                dom::set_text(&pressed, cart::ADDED_LABEL);
                dom::add_class(&pressed, cart::ADDED_CLASS);
                let restored = pressed.clone();
                let label = label.clone();
                after(&*scheduler, cart::ADDED_HOLD_MS, move || {
                    dom::set_text(&restored, &label);
                    dom::remove_class(&restored, cart::ADDED_CLASS);
                });
                bump_badges(&badges);
            }));
        }

        for control in controls {
            let changed = {
                let scheduler = scheduler.clone();
                let totals = totals.clone();
                Rc::new(move || feedback::pulse_all(&scheduler, &totals, cart::TOTAL_PULSE))
            };

            let (input, on_change) = (control.input.clone(), changed.clone());
            listeners.push(Listener::new(&control.minus, "click", move |_| {
                if let Some(next) = cart::decrement(&input.value()) {
                    input.set_value(&next.to_string());
                    on_change();
                }
            }));

            let (input, on_change) = (control.input.clone(), changed.clone());
            listeners.push(Listener::new(&control.plus, "click", move |_| {
                input.set_value(&cart::increment(&input.value()).to_string());
                on_change();
            }));

            let (input, on_change) = (control.input.clone(), changed);
            listeners.push(Listener::new(&control.input, "change", move |_| {
                input.set_value(&cart::clamp(&input.value()).to_string());
                on_change();
            }));
        }

        CartFeedback { listeners }
    }
}

fn bump_badges(badges: &[Element]) {
    for badge in badges {
        let current = badge.text_content().unwrap_or_default();
        dom::set_text(badge, &cart::next_badge_count(&current).to_string());
    }
}

impl Component for CartFeedback {
    fn name(&self) -> &'static str {
        "cart"
    }

    fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}
