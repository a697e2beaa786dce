//! Change listeners.
//!
//! A field reports its logical value to every registered listener once per
//! completed edit. Listeners are called synchronously, in registration
//! order, on the thread that drives the field.

use std::fmt;

/// Receives the logical value of a field after each completed edit.
///
/// Implemented for every `FnMut(&V)` closure.
pub trait ChangeListener<V> {
    /// Called with the settled value.
    fn on_changed(&mut self, value: &V);
}

impl<V, F> ChangeListener<V> for F
where
    F: FnMut(&V),
{
    fn on_changed(&mut self, value: &V) {
        self(value)
    }
}

/// Handle returned by [`ChangeNotifier::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Rebuilds an id from [`ListenerId::raw`], for hosts that hand ids
    /// across a language boundary.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the numeric form of this id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// JavaScript numbers and most FFI handles are 32 bits wide; ids past
/// `u32::MAX` do not fit.
impl TryFrom<ListenerId> for u32 {
    type Error = std::num::TryFromIntError;

    fn try_from(id: ListenerId) -> Result<Self, Self::Error> {
        u32::try_from(id.0)
    }
}

/// Ordered set of listeners for one field.
pub struct ChangeNotifier<V> {
    listeners: Vec<(ListenerId, Box<dyn ChangeListener<V>>)>,
    next_id: u64,
}

impl<V> ChangeNotifier<V> {
    /// Creates a notifier without listeners.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a listener after the existing ones.
    pub fn register(&mut self, listener: impl ChangeListener<V> + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if `id` is not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(registered, _)| *registered == id) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Calls every listener with `value`.
    pub fn notify(&mut self, value: &V) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_changed(value);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<V> Default for ChangeNotifier<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ChangeNotifier<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listener_id_to_u32() {
        assert_eq!(u32::try_from(ListenerId::from_raw(7)), Ok(7));
        assert_eq!(u32::try_from(ListenerId::from_raw(u64::from(u32::MAX))), Ok(u32::MAX));
        assert!(u32::try_from(ListenerId::from_raw(u64::from(u32::MAX) + 1)).is_err());
    }

    #[test]
    fn test_notifies_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Rc::clone(&seen);
        notifier.register(move |value: &u32| first.borrow_mut().push(("first", *value)));
        let second = Rc::clone(&seen);
        notifier.register(move |value: &u32| second.borrow_mut().push(("second", *value)));

        notifier.notify(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unregister() {
        let count = Rc::new(RefCell::new(0));
        let mut notifier = ChangeNotifier::new();

        let counter = Rc::clone(&count);
        let id = notifier.register(move |_: &()| *counter.borrow_mut() += 1);
        assert_eq!(notifier.len(), 1);

        assert!(notifier.unregister(id));
        assert!(!notifier.unregister(id));
        assert!(notifier.is_empty());

        notifier.notify(&());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut notifier: ChangeNotifier<()> = ChangeNotifier::new();
        let a = notifier.register(|_: &()| {});
        notifier.unregister(a);
        let b = notifier.register(|_: &()| {});
        assert_ne!(a, b);
    }

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl ChangeListener<String> for Recorder {
        fn on_changed(&mut self, value: &String) {
            self.0.borrow_mut().push(value.clone());
        }
    }

    #[test]
    fn test_trait_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.register(Recorder(Rc::clone(&log)));
        notifier.notify(&"4242".to_string());
        assert_eq!(*log.borrow(), vec!["4242".to_string()]);
    }
}
