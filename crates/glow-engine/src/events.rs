//! Synchronous simulation event bus.
//!
//! Diagnostics attach to the orchestrator by registering actions for
//! one of the three lifecycle events. Actions run synchronously, in
//! registration order, against a read-only [`StateView`]; the
//! simulation step does not proceed until every action returns.
//!
//! [`EventBus::add_action`] hands back a [`Weak`] reference so one
//! action can depend on another (the save writer reads the averager)
//! without keeping it alive: if the owning slot is dropped, upgrading
//! the handle fails and the dependent action skips its work.

use crate::state::StateView;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Lifecycle events the orchestrator fires. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimEvent {
    /// Fired once before the first step.
    Start,
    /// Fired after every completed step.
    Step,
    /// Fired once after the last step.
    End,
}

/// An observer attached to a simulation event.
pub trait EventAction {
    /// Called synchronously when the subscribed event fires.
    fn notify(&mut self, event: SimEvent, state: &StateView<'_>);
}

/// Registration-ordered registry of event actions.
#[derive(Default)]
pub struct EventBus {
    actions: IndexMap<SimEvent, Vec<Rc<RefCell<dyn EventAction>>>>,
}

impl EventBus {
    /// An empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` for `event`.
    ///
    /// The bus owns the action; the returned [`Weak`] is a non-owning
    /// handle for wiring dependent actions together.
    pub fn add_action<A>(&mut self, event: SimEvent, action: A) -> Weak<RefCell<A>>
    where
        A: EventAction + 'static,
    {
        let slot = Rc::new(RefCell::new(action));
        let handle = Rc::downgrade(&slot);
        self.actions.entry(event).or_default().push(slot);
        handle
    }

    /// Number of actions registered for `event`.
    pub fn action_count(&self, event: SimEvent) -> usize {
        self.actions.get(&event).map_or(0, Vec::len)
    }

    /// Fire `event`, invoking its actions in registration order.
    pub fn notify(&self, event: SimEvent, state: &StateView<'_>) {
        if let Some(list) = self.actions.get(&event) {
            for action in list {
                action.borrow_mut().notify(event, state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::Parameters;
    use glow_particle::ChargedSpecies;
    use glow_space::ScalarGrid;

    struct Tag {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl EventAction for Tag {
        fn notify(&mut self, _event: SimEvent, _state: &StateView<'_>) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn with_state(f: impl FnOnce(&StateView<'_>)) {
        let parameters = Parameters::case_1();
        let prop = parameters.grid().unwrap();
        let electrons = ChargedSpecies::new(-1.0, 1.0);
        let ions = ChargedSpecies::new(1.0, 1.0);
        let electron_density = ScalarGrid::new(prop);
        let ion_density = ScalarGrid::new(prop);
        let state = StateView {
            parameters: &parameters,
            step: 0,
            time: 0.0,
            electrons: &electrons,
            ions: &ions,
            electron_density: &electron_density,
            ion_density: &ion_density,
        };
        f(&state);
    }

    #[test]
    fn actions_fire_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for id in [3, 1, 2] {
            bus.add_action(SimEvent::Step, Tag { id, log: Rc::clone(&log) });
        }
        with_state(|state| bus.notify(SimEvent::Step, state));
        assert_eq!(*log.borrow(), vec![3, 1, 2]);
    }

    #[test]
    fn events_are_routed_separately() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.add_action(SimEvent::Start, Tag { id: 1, log: Rc::clone(&log) });
        bus.add_action(SimEvent::End, Tag { id: 2, log: Rc::clone(&log) });
        assert_eq!(bus.action_count(SimEvent::Start), 1);
        assert_eq!(bus.action_count(SimEvent::Step), 0);
        with_state(|state| {
            bus.notify(SimEvent::Step, state);
            bus.notify(SimEvent::End, state);
        });
        assert_eq!(*log.borrow(), vec![2]);
    }

    #[test]
    fn weak_handle_upgrades_while_the_bus_owns_the_action() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        let handle = bus.add_action(SimEvent::Step, Tag { id: 7, log });
        assert!(handle.upgrade().is_some());
        drop(bus);
        assert!(handle.upgrade().is_none());
    }
}
