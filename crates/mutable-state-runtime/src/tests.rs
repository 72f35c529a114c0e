#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::rc::Rc;

    use crate::prelude::*;

    #[test]
    fn test_hooks_outside_render() {
        assert_eq!(remember(|| 1).err(), Some(HookError::OutsideRender));
        assert!(matches!(use_state(|| 1), Err(HookError::OutsideRender)));
        assert_eq!(use_unmount(|| {}), Err(HookError::OutsideRender));
    }

    #[test]
    fn test_remember_runs_init_once() {
        let inits = Rc::new(Cell::new(0));
        let (mut c, first) = Component::mount({
            let inits = inits.clone();
            move || {
                let a = remember(|| {
                    inits.set(inits.get() + 1);
                    "a"
                })
                .unwrap();
                let b = remember(|| 7u32).unwrap();
                (*a, *b)
            }
        });

        assert_eq!(first, ("a", 7));
        assert_eq!(c.render().unwrap(), ("a", 7));
        assert_eq!(c.render().unwrap(), ("a", 7));
        assert_eq!(inits.get(), 1);
        assert_eq!(c.render_count(), 3);
    }

    #[test]
    fn test_remember_replaces_slot_on_type_change() {
        let flip = Rc::new(Cell::new(false));
        let (mut c, first) = Component::mount({
            let flip = flip.clone();
            move || {
                if flip.get() {
                    remember(|| "text").unwrap().to_string()
                } else {
                    remember(|| 1i32).unwrap().to_string()
                }
            }
        });
        assert_eq!(first, "1");

        flip.set(true);
        assert_eq!(c.render().unwrap(), "text");
    }

    #[test]
    fn test_use_state_set_marks_dirty() {
        let (mut c, (value, setter)) = Component::mount(|| {
            let (v, set) = use_state(|| 0).unwrap();
            (*v, set)
        });
        assert_eq!(value, 0);
        assert!(!c.is_dirty());
        assert!(c.flush().is_none());

        assert!(setter.set(5));
        assert!(c.is_dirty());
        assert_eq!(*setter.peek(), 5);

        let (value, setter) = c.flush().unwrap();
        assert_eq!(value, 5);
        assert!(!c.is_dirty());

        assert!(setter.update(|v| v + 1));
        assert_eq!(c.flush().unwrap().0, 6);
        assert_eq!(c.render_count(), 3);
    }

    #[test]
    fn test_updates_chain_on_latest_value() {
        let (mut c, (_, setter)) = Component::mount(|| {
            let (v, set) = use_state(|| 1).unwrap();
            (*v, set)
        });

        setter.update(|v| v + 1);
        setter.update(|v| v * 10);
        assert_eq!(c.flush().unwrap().0, 20);
    }

    #[test]
    fn test_same_rc_bails_out() {
        let (mut c, (current, setter)) = Component::mount(|| use_state(|| vec![1, 2, 3]).unwrap());

        assert!(!setter.replace(current.clone()));
        assert!(!setter.dispatch(Update::Map(Box::new(|prev: &Rc<Vec<i32>>| prev.clone()))));
        assert!(!c.is_dirty());

        // equal contents, different allocation
        assert!(setter.set(vec![1, 2, 3]));
        assert!(c.is_dirty());
        let (next, _) = c.flush().unwrap();
        assert!(!Rc::ptr_eq(&current, &next));
    }

    #[test]
    fn test_unmount_runs_callbacks_and_drops_state() {
        struct Tracked(Rc<Cell<bool>>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let dropped = Rc::new(Cell::new(false));

        let (mut c, setter) = Component::mount({
            let log = log.clone();
            let dropped = dropped.clone();
            move || {
                let (_, set) = use_state(|| 0).unwrap();
                remember(|| Tracked(dropped.clone())).unwrap();
                let first = log.clone();
                use_unmount(move || first.borrow_mut().push("first")).unwrap();
                let second = log.clone();
                use_unmount(move || second.borrow_mut().push("second")).unwrap();
                set
            }
        });
        c.render().unwrap();
        c.render().unwrap();

        c.unmount();
        assert!(!c.is_mounted());
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert!(dropped.get());

        // ignored once unmounted
        assert!(!setter.set(1));
        assert!(!c.is_dirty());
        assert!(c.flush().is_none());
        assert_eq!(c.render().err(), Some(HookError::Unmounted(c.id())));

        c.unmount();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_drop_unmounts() {
        let ran = Rc::new(Cell::new(false));
        let setter = {
            let ran = ran.clone();
            let (_c, setter) = Component::mount(move || {
                let ran = ran.clone();
                use_unmount(move || ran.set(true)).unwrap();
                use_state(|| 0).unwrap().1
            });
            setter
        };
        assert!(ran.get());
        assert!(!setter.set(3));
    }

    #[test]
    fn test_nested_components_keep_separate_slots() {
        let (mut outer, (outer_value, inner_value)) = Component::mount(|| {
            let v = remember(|| "outer").unwrap();
            let (_inner, inner_value) = Component::mount(|| *remember(|| "inner").unwrap());
            // the outer instance is current again once the inner render ends
            let again = remember(|| 0u8).unwrap();
            assert_eq!(*again, 0);
            (*v, inner_value)
        });
        assert_eq!((outer_value, inner_value), ("outer", "inner"));
        assert_eq!(outer.render().unwrap().0, "outer");
    }

    #[test]
    fn test_scope_dispose_runs_late_disposers() {
        let scope = Scope::new();
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            let inner_scope = scope.clone();
            scope.add_disposer(move || {
                count.set(count.get() + 1);
                let count = count.clone();
                inner_scope.add_disposer(move || count.set(count.get() + 1));
            });
        }
        assert_eq!(scope.pending(), 1);
        scope.dispose();
        assert_eq!(count.get(), 2);
        assert_eq!(scope.pending(), 0);
    }

    #[test]
    fn test_panicking_init_is_retried_with_slots_aligned() {
        let stage = Rc::new(Cell::new(0));
        let attempts = Rc::new(Cell::new(0));
        let (mut c, first) = Component::mount({
            let stage = stage.clone();
            let attempts = attempts.clone();
            move || {
                let a = *remember(|| "a").unwrap();
                if stage.get() == 0 {
                    return (a, None, None);
                }
                let b = *remember(|| {
                    attempts.set(attempts.get() + 1);
                    if stage.get() == 1 {
                        panic!("init failed");
                    }
                    2u32
                })
                .unwrap();
                let third = *remember(|| 'c').unwrap();
                (a, Some(b), Some(third))
            }
        });
        assert_eq!(first, ("a", None, None));

        stage.set(1);
        assert!(catch_unwind(AssertUnwindSafe(|| c.render())).is_err());
        assert!(c.is_mounted());

        stage.set(2);
        assert_eq!(c.render().unwrap(), ("a", Some(2), Some('c')));
        assert_eq!(c.render().unwrap(), ("a", Some(2), Some('c')));
        assert_eq!(attempts.get(), 2);
    }
}
