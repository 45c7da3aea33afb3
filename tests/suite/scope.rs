//! Scope runner and binder behavior through the public API

use std::cell::{Cell, RefCell};

use nullscope_types::{Bound, Scope, defer, nullable, try_nullable};

fn take_through(text: &str, last: usize) -> String {
    text.chars().take(last + 1).collect()
}

#[test]
fn first_absent_bind_ends_the_block() {
    let v1: Option<String> = None;
    let v2: Option<usize> = None;
    let mut count = 0;

    let result = nullable(|scope| {
        count += 1;
        let v3 = scope.bind(v1)?;
        count += 1;
        let v4 = scope.bind(v2)?;
        count += 1;
        Ok(take_through(&v3, v4).len())
    });

    assert_eq!(count, 1);
    assert_eq!(result, None);
}

#[test]
fn second_absent_bind_ends_the_block() {
    let v1 = Some("value".to_string());
    let v2: Option<usize> = None;
    let mut count = 0;

    let result = nullable(|scope| {
        count += 1;
        let v3 = scope.bind(v1)?;
        count += 1;
        let v4 = scope.bind(v2)?;
        count += 1;
        Ok(take_through(&v3, v4).len())
    });

    assert_eq!(count, 2);
    assert_eq!(result, None);
}

#[test]
fn all_present_yields_the_block_value() {
    let v1 = Some("value".to_string());
    let v2 = Some(2);
    let mut count = 0;

    let result = nullable(|scope| {
        count += 1;
        let v3 = scope.bind(v1)?;
        count += 1;
        let v4 = scope.bind(v2)?;
        count += 1;
        Ok(take_through(&v3, v4))
    });

    assert_eq!(count, 3);
    assert_eq!(result.as_deref(), Some("val"));
}

#[test]
fn block_may_return_an_option_itself() {
    let result = nullable(|scope| {
        let value = scope.bind(Some(5))?;
        Ok((value > 10).then_some(value))
    });
    assert_eq!(result, Some(None));
    assert_eq!(result.flatten(), None);
}

#[test]
fn kth_absent_bind_runs_exactly_k_binds() {
    for absent_at in 0..4 {
        let reached = Cell::new(0);
        let result = nullable(|scope| {
            for position in 0..4 {
                let value = (position != absent_at).then_some(position);
                scope.bind(value)?;
                reached.set(reached.get() + 1);
            }
            Ok(())
        });

        assert_eq!(result, None);
        assert_eq!(reached.get(), absent_at);
    }
}

#[test]
fn bind_all_of_three_evaluates_in_order() {
    let log = &RefCell::new(Vec::new());
    let mark = move |label: &'static str, value: Option<i32>| {
        defer(move || {
            log.borrow_mut().push(label);
            value
        })
    };

    let all = nullable(|scope| {
        scope.bind_all((mark("a", Some(1)), mark("b", Some(2)), mark("c", Some(3))))
    });
    assert_eq!(all, Some((1, 2, 3)));
    assert_eq!(*log.borrow(), ["a", "b", "c"]);

    log.borrow_mut().clear();
    let middle = nullable(|scope| {
        scope.bind_all((mark("a", Some(1)), mark("b", None), mark("c", Some(3))))
    });
    assert_eq!(middle, None);
    assert_eq!(*log.borrow(), ["a", "b"]);

    log.borrow_mut().clear();
    let first = nullable(|scope| {
        scope.bind_all((mark("a", None), mark("b", Some(2)), mark("c", Some(3))))
    });
    assert_eq!(first, None);
    assert_eq!(*log.borrow(), ["a"]);
}

#[test]
#[should_panic(expected = "foreign failure")]
fn panics_escape_the_runner() {
    let _ = nullable(|scope| {
        let value = scope.bind(Some(1))?;
        if value == 1 {
            panic!("foreign failure");
        }
        Ok(value)
    });
}

#[derive(Debug, PartialEq, Eq)]
struct Overflow;

fn checked_sum(values: &[Option<u8>]) -> Result<Option<u8>, Overflow> {
    try_nullable(|scope| {
        let mut total: u8 = 0;
        for value in scope.bind_each(values)? {
            total = total.checked_add(*value).ok_or(Overflow)?;
        }
        Ok(total)
    })
}

#[test]
fn typed_failures_are_not_absence() {
    assert_eq!(checked_sum(&[Some(1), Some(2)]), Ok(Some(3)));
    assert_eq!(checked_sum(&[Some(1), None]), Ok(None));
    assert_eq!(checked_sum(&[Some(200), Some(100)]), Err(Overflow));
}

#[test]
fn absence_before_failure_wins() {
    assert_eq!(checked_sum(&[None, Some(200), Some(100)]), Ok(None));
}

fn lookup<'s>(scope: &Scope<'s>, table: &[(&str, u32)], key: &str) -> Bound<'s, u32> {
    let found = table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
    scope.bind(found)
}

#[test]
fn helpers_can_bind_on_behalf_of_the_block() {
    let table = [("a", 1), ("b", 2)];

    let sum = nullable(|scope| Ok(lookup(scope, &table, "a")? + lookup(scope, &table, "b")?));
    assert_eq!(sum, Some(3));

    let missing = nullable(|scope| Ok(lookup(scope, &table, "a")? + lookup(scope, &table, "z")?));
    assert_eq!(missing, None);
}

#[test]
fn nested_scopes_flatten_when_rebound() {
    let inner_ok = |value: Option<u32>| nullable(|scope| Ok(scope.bind(value)? * 2));

    let flat = nullable(|scope| {
        let doubled = scope.bind(inner_ok(Some(4)))?;
        let again = scope.bind(inner_ok(Some(doubled)))?;
        Ok(again)
    });
    assert_eq!(flat, Some(16));

    let mut after = false;
    let broken = nullable(|scope| {
        let doubled = scope.bind(inner_ok(None))?;
        after = true;
        Ok(doubled)
    });
    assert_eq!(broken, None);
    assert!(!after);
}

#[test]
fn inner_absence_does_not_abort_the_outer_block() {
    let mut steps = Vec::new();
    let outer = nullable(|scope| {
        steps.push("outer start");
        let inner = nullable(|inner| inner.bind(None::<u8>));
        steps.push("after inner");
        let value = scope.bind(Some(inner.is_none()))?;
        Ok(value)
    });

    assert_eq!(outer, Some(true));
    assert_eq!(steps, ["outer start", "after inner"]);
}
