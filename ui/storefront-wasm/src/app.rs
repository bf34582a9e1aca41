//! The mounted storefront: every component bound against one element set.

use crate::animation::ScrollReveal;
use crate::cart::CartFeedback;
use crate::catalog::ViewModeToggle;
use crate::dashboard::TabController;
use crate::dom::Elements;
use crate::events::Component;
use crate::forms::FormValidator;
use crate::nav::Navigation;
use crate::rtl::DirectionToggle;
use crate::search::SearchFields;
use sf_behavior::reveal::ObserverOptions;
use sf_behavior::storage::KeyValueStore;
use sf_scheduler::SharedScheduler;
use std::rc::Rc;

pub struct Storefront {
    components: Vec<Box<dyn Component>>,
}

impl Storefront {
    /// Bind components in page order. Features whose elements are missing are
    /// skipped.
    pub fn mount(els: Elements, scheduler: SharedScheduler, store: Rc<dyn KeyValueStore>) -> Storefront {
        let mut components: Vec<Box<dyn Component>> = Vec::new();

        components.push(Box::new(Navigation::bind(
            els.mobile_menu_btn.as_ref(),
            els.mobile_menu.as_ref(),
            &els.anchor_links,
        )));
        if let Some(toggle) = DirectionToggle::bind(els.rtl_toggle.as_ref(), &els.root, store, scheduler.clone()) {
            components.push(Box::new(toggle));
        }
        if let Some(tabs) = TabController::bind(els.tabs, els.panels) {
            components.push(Box::new(tabs));
        }
        if let Some(view) = ViewModeToggle::bind(
            els.grid_view_btn.as_ref(),
            els.list_view_btn.as_ref(),
            els.products_grid.as_ref(),
        ) {
            components.push(Box::new(view));
        }
        components.push(Box::new(ScrollReveal::bind(
            &els.reveal_targets,
            &els.hover_cards,
            ObserverOptions::default(),
        )));
        components.push(Box::new(FormValidator::bind(&els.forms)));
        components.push(Box::new(CartFeedback::bind(
            &els.add_to_cart_buttons,
            &els.quantity_controls,
            els.cart_badges,
            els.cart_totals,
            scheduler.clone(),
        )));
        components.push(Box::new(SearchFields::bind(els.search_inputs, scheduler)));

        for component in &components {
            tracing::debug!(
                component = component.name(),
                listeners = component.listeners().len(),
                "mounted"
            );
        }
        Storefront { components }
    }

    pub fn component_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    pub fn listener_count(&self) -> usize {
        self.components.iter().map(|c| c.listeners().len()).sum()
    }

    /// Remove every listener and observer.
    pub fn detach(self) {
        let names = self.component_names();
        drop(self.components);
        tracing::info!(?names, "storefront detached");
    }
}
