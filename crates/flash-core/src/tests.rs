#[cfg(test)]
mod tests {
    use crate::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    fn setup() -> TestClock {
        dispatch::clear();
        Scheduler::new().shutdown();
        let clock = TestClock::new(Instant::now());
        set_clock(clock.clone());
        clock
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        sig.set(42);
        sig.set(42);
        assert_eq!(*seen.borrow(), vec![42, 42]);

        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(7);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(1);
        let echoed = Rc::new(Cell::new(0));
        sig.subscribe({
            let sig = sig.clone();
            let echoed = echoed.clone();
            move |_| echoed.set(sig.get())
        });
        sig.set(5);
        assert_eq!(echoed.get(), 5);
    }

    #[test]
    fn test_event_stream_fans_out() {
        let stream = EventStream::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));

        let id_a = stream.subscribe({
            let a = a.clone();
            move || a.set(a.get() + 1)
        });
        stream.subscribe({
            let b = b.clone();
            move || b.set(b.get() + 1)
        });

        stream.send();
        stream.send();
        assert_eq!((a.get(), b.get()), (2, 2));

        stream.unsubscribe(id_a);
        stream.send();
        assert_eq!((a.get(), b.get()), (2, 3));
        assert_eq!(stream.subscriber_count(), 1);
    }

    #[test]
    fn test_dispose_runs_once() {
        let count = Rc::new(Cell::new(0));
        let d = Dispose::new({
            let count = count.clone();
            move || count.set(count.get() + 1)
        });
        let d2 = d.clone();
        d.run();
        d2.run();
        assert_eq!(count.get(), 1);
        assert!(d.is_disposed());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        for i in 0..3 {
            let order = order.clone();
            scope.add_disposer(move || order.borrow_mut().push(i));
        }

        assert!(order.borrow().is_empty());
        scope.dispose();
        assert_eq!(*order.borrow(), vec![2, 1, 0]);
        assert!(scope.is_disposed());

        // Late registrations run immediately.
        let late = Rc::new(Cell::new(false));
        scope.add_disposer({
            let late = late.clone();
            move || late.set(true)
        });
        assert!(late.get());
    }

    #[test]
    fn test_scoped_effect_registers_on_current_scope() {
        let cleaned = Rc::new(Cell::new(false));
        let scope = Scope::new();
        scope.run(|| {
            let cleaned = cleaned.clone();
            scoped_effect(move || on_unmount(move || cleaned.set(true)));
        });
        assert!(!cleaned.get());
        scope.dispose();
        assert!(cleaned.get());
        assert!(current_scope().is_none());
    }

    #[test]
    fn test_scope_run_restores_previous_scope_on_panic() {
        let outer = Scope::new();
        let inner = Scope::new();
        outer.run(|| {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                inner.run(|| panic!("boom"))
            }));
            assert!(result.is_err());
            let current = current_scope().expect("outer scope is current again");
            current.dispose();
        });
        assert!(outer.is_disposed());
        assert!(!inner.is_disposed());
        assert!(current_scope().is_none());
    }

    #[test]
    fn test_key_based_remember() {
        setup();
        let mut sched = Scheduler::new();
        let mut seen = (0, 0);
        sched.compose(|_| {
            let val1 = remember_with_key("test", || 42);
            let val2 = remember_with_key("test", || 100);
            seen = (*val1, *val2);
            Text("x")
        });
        // Same instance: the second init never runs.
        assert_eq!(seen, (42, 42));
    }

    #[test]
    fn test_slots_unmount_when_not_composed() {
        setup();
        let unmounted = Rc::new(Cell::new(0));
        let mut sched = Scheduler::new();

        for _ in 0..3 {
            sched.compose(|_| {
                remember_with_key("kept", || {
                    let unmounted = unmounted.clone();
                    scoped_effect(move || {
                        on_unmount(move || unmounted.set(unmounted.get() + 1))
                    });
                });
                Text("x")
            });
        }
        assert_eq!(unmounted.get(), 0);
        assert_eq!(mounted_slots(), 1);

        sched.compose(|_| Text("x"));
        assert_eq!(unmounted.get(), 1);
        assert_eq!(mounted_slots(), 0);
        assert_eq!(sched.frames(), 4);
    }

    #[test]
    fn test_dispatch_runs_in_deadline_order() {
        let clock = setup();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, ms) in [("c", 30u64), ("a", 10), ("b", 20), ("a2", 10)] {
            let order = order.clone();
            dispatch::post_delayed(label, Duration::from_millis(ms), move || {
                order.borrow_mut().push(label);
                Ok(())
            });
        }

        clock.advance(Duration::from_millis(15));
        assert_eq!(dispatch::run_due(), 2);
        assert_eq!(*order.borrow(), vec!["a", "a2"]);

        clock.advance(Duration::from_millis(15));
        assert_eq!(dispatch::run_due(), 2);
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(dispatch::pending_tasks(), 0);
    }

    #[test]
    fn test_dispatch_cancel_prevents_run() {
        let clock = setup();
        let ran = Rc::new(Cell::new(false));
        let handle = dispatch::post_delayed("cancel-me", Duration::from_secs(1), {
            let ran = ran.clone();
            move || {
                ran.set(true);
                Ok(())
            }
        });
        assert!(handle.is_pending());
        assert_eq!(
            dispatch::next_deadline(),
            Some(now() + Duration::from_secs(1))
        );

        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(dispatch::pending_tasks(), 0);
        assert_eq!(dispatch::next_deadline(), None);

        clock.advance(Duration::from_secs(2));
        assert_eq!(dispatch::run_due(), 0);
        assert!(!ran.get());
    }

    #[test]
    fn test_dispatch_repost_after_cancel_does_not_grow_queue() {
        setup();
        let mut handle = dispatch::post_delayed("flash:dwell", Duration::from_secs(1), || Ok(()));
        for _ in 0..10_000 {
            handle.cancel();
            handle = dispatch::post_delayed("flash:dwell", Duration::from_secs(1), || Ok(()));
        }
        assert_eq!(dispatch::queued_len(), 1);
        assert_eq!(dispatch::pending_tasks(), 1);
        assert!(handle.is_pending());
    }

    #[test]
    fn test_dispatch_defers_tasks_posted_while_draining() {
        let clock = setup();
        let count = Rc::new(Cell::new(0));
        dispatch::post("outer", {
            let count = count.clone();
            move || {
                count.set(count.get() + 1);
                let count = count.clone();
                dispatch::post("inner", move || {
                    count.set(count.get() + 1);
                    Err(TaskError::Cancelled)
                });
                Ok(())
            }
        });

        assert_eq!(dispatch::run_due(), 1);
        assert_eq!(count.get(), 1);
        clock.advance(Duration::from_millis(1));
        // An Err from the body is swallowed.
        assert_eq!(dispatch::run_due(), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.interpolate(0.0), 0.0);
            assert_eq!(easing.interpolate(1.0), 1.0);
        }
        // Ease-out covers more ground in the first half than linear.
        assert!(Easing::EaseOut.interpolate(0.5) > 0.5);
        assert!(Easing::EaseIn.interpolate(0.5) < 0.5);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = setup();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_snap_interrupts_animation() {
        let clock = setup();
        let mut a = AnimatedValue::new(1.0f32, AnimationSpec::ease_out(Duration::from_millis(300)));
        a.set_target(0.0);
        clock.advance(Duration::from_millis(100));
        a.update();
        assert!(*a.get() < 1.0);

        a.snap_to(1.0);
        assert_eq!(*a.get(), 1.0);
        clock.advance(Duration::from_millis(300));
        assert!(!a.update());
        assert_eq!(*a.get(), 1.0);
    }

    #[test]
    fn test_render_multiplies_alpha() {
        let view = Column(Modifier::new().alpha(0.5)).child((
            Text("inner").modifier(Modifier::new().alpha(0.5)),
            Button("go", || {}),
        ));
        let scene = view.render();
        assert_eq!(scene.alpha_of("inner"), Some(0.25));
        assert_eq!(scene.alpha_of("go"), Some(0.5));
        assert!(scene.click("go"));
        assert!(!scene.click("inner"));
    }

    #[test]
    fn test_modifier_alpha_clamps_and_stacks() {
        let m = Modifier::new().alpha(2.0);
        assert_eq!(m.alpha, Some(1.0));
        let m = m.alpha(0.5).alpha(0.5);
        assert_eq!(m.effective_alpha(), 0.25);
        assert_eq!(Modifier::new().alpha(-1.0).effective_alpha(), 0.0);
    }
}
