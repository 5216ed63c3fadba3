// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Subscriber<T> = Box<dyn Fn(&T)>;

/// Identificador devuelto por `subscribe`, necesario para darse de baja
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Estado reactivo con sistema de notificaciones.
///
/// Un solo escritor (el dueño del valor) y N observadores. Los observadores
/// reciben una referencia al valor nuevo en cada `set`, y deben darse de
/// baja con `unsubscribe` cuando terminan su ciclo de vida.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: Cell<u64>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Box::new(callback)));
        id
    }

    /// Darse de baja; ignora ids ya eliminados
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self) {
        let value = self.value.borrow();
        for (_, callback) in self.subscribers.borrow().iter() {
            callback(&value);
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_every_set() {
        let state = ReactiveState::new(0_u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        state.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        state.set(1);
        state.set(2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(state.get(), 2);
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let state = ReactiveState::new(0_u32);
        let count = Rc::new(Cell::new(0_u32));

        let count_clone = count.clone();
        let id = state.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        state.set(1);
        state.unsubscribe(id);
        state.set(2);

        assert_eq!(count.get(), 1);

        // Darse de baja dos veces no es un error
        state.unsubscribe(id);
    }

    #[test]
    fn independent_subscribers_coexist() {
        let state = ReactiveState::new(String::new());
        let a = Rc::new(Cell::new(0_u32));
        let b = Rc::new(Cell::new(0_u32));

        let a_clone = a.clone();
        state.subscribe(move |_| a_clone.set(a_clone.get() + 1));
        let b_clone = b.clone();
        let id_b = state.subscribe(move |_| b_clone.set(b_clone.get() + 1));

        state.set("x".to_string());
        state.unsubscribe(id_b);
        state.set("y".to_string());

        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 1);
    }
}
