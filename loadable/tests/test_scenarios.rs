mod common;

use common::TestState;
use loadable::{combine_map, Loadable, LoadableMapExt, Value};
use std::collections::HashMap;

#[test]
fn test_result_then_map() {
    let loaded: Loadable<String, i32> = Loadable::from_result(Ok(1));
    let next = loaded.map(|a| a + 1);
    assert_eq!(next, Loadable::succeed(2));
    assert!(!next.is_loading());
}

#[test]
fn test_combine_map_succeed() {
    assert_eq!(
        combine_map(vec![1, 2, 3], Loadable::<String, i32>::succeed),
        Loadable::succeed(vec![1, 2, 3])
    );
}

#[test]
fn test_loading_then_failing_continuation() {
    let next = Loadable::<String, i32>::succeed(2)
        .to_loading()
        .and_then(|_| Loadable::<String, i32>::fail("oop".to_string()));
    assert_eq!(next.value(), &Value::Failed("oop".to_string()));
    assert!(next.is_loading());
}

#[test]
fn test_and_map_with_concatenates() {
    let mf: Loadable<String, fn(i32) -> i32> = Loadable::fail("a".to_string());
    let result = mf.and_map_with(|x, y| x + &y, Loadable::fail("b".to_string()));
    assert_eq!(result, Loadable::fail("ab".to_string()));
}

#[test]
fn test_refetch_lifecycle() {
    let state = TestState::default();
    assert!(state.num.is_not_asked());

    let state = state.set_num(Loadable::loading());
    assert!(state.num.is_loading());
    assert!(state.num.is_empty());

    let state = state.set_num(Loadable::from_result(Ok(10)));
    assert_eq!(state.num, Loadable::succeed(10));

    // Stale content stays visible while the refetch runs.
    let state = state.update_num(Loadable::to_loading);
    assert_eq!(state.num.value(), &Value::Succeeded(10));
    assert!(state.num.is_loading());

    let state = state.set_num(Loadable::from_result(Err("timeout".to_string())));
    assert_eq!(state.num.clone().to_error(), Some("timeout".to_string()));
    assert_eq!(state.num.clone().with_default(0), 0);
    assert!(!state.num.is_loading());

    let state = state
        .update_num(Loadable::to_loading)
        .update_num(|num| num.and_then(|n| Loadable::succeed(n + 1)));
    assert!(state.num.is_loading());
    assert!(state.num.is_fail());
}

#[test]
fn test_keyed_refetch() {
    let mut users: HashMap<u32, Loadable<String, String>> = HashMap::new();
    assert!(users.get_loadable(&1).is_not_asked());

    users.to_loading_at(1);
    users.to_loading_at(2);
    users.insert_result(1, Ok("ada".to_string()));
    users.insert_result(2, Err("not found".to_string()));

    users.to_loading_at(1);
    let view: Vec<String> = [1, 2, 3]
        .iter()
        .map(|id| {
            let user = users.get_loadable(id);
            match (user.value(), user.is_loading()) {
                (Value::Succeeded(name), true) => format!("{} (refreshing)", name),
                (Value::Succeeded(name), false) => name.clone(),
                (Value::Failed(error), _) => format!("error: {}", error),
                (Value::Empty, _) => "-".to_string(),
            }
        })
        .collect();
    assert_eq!(view, vec!["ada (refreshing)", "error: not found", "-"]);
}

#[test]
fn test_into_result_with_question_mark() {
    fn total(
        a: Loadable<String, u32>,
        b: Loadable<String, u32>,
    ) -> Result<u32, loadable::LoadableError<String>> {
        Ok(a.into_result()? + b.into_result()?)
    }
    assert_eq!(total(Loadable::succeed(1), Loadable::succeed(2)), Ok(3));
    assert!(total(Loadable::succeed(1), Loadable::loading()).unwrap_err().is_empty());
}
