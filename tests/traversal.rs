use orx_pooled_list::*;

fn list_of(pool: &mut NodePool<char>, values: &str) -> List<char> {
    let list = List::new(pool).expect("unlimited pool");
    for c in values.chars() {
        list.enqueue(pool, c).expect("unlimited pool");
    }
    list
}

fn drain(cursor: &mut Cursor, pool: &NodePool<char>) -> String {
    let mut visited = String::new();
    while let Some(c) = cursor.advance(pool) {
        visited.push(*c);
    }
    visited
}

#[test]
fn cursor_visits_all_then_done() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "abc");

    let mut cursor = list.begin_traversal(&pool);
    assert!(!cursor.is_done());
    assert_eq!(drain(&mut cursor, &pool), "abc");

    assert!(cursor.is_done());
    assert_eq!(cursor.advance(&pool), None);
    assert_eq!(cursor.advance(&pool), None);
}

#[test]
fn cursor_of_empty_list_is_done() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "");

    let mut cursor = list.begin_traversal(&pool);
    assert!(cursor.is_done());
    assert_eq!(cursor, Cursor::default());
    assert_eq!(cursor.advance(&pool), None);
}

#[test]
fn cursor_of_foreign_list_is_done() {
    let mut pool = NodePool::new();
    let other = NodePool::new();
    let list = list_of(&mut pool, "abc");

    let mut cursor = list.begin_traversal(&other);
    assert!(cursor.is_done());
    assert_eq!(cursor.advance(&other), None);
}

#[test]
fn traversals_are_independent_and_restartable() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "abc");

    let mut first = list.begin_traversal(&pool);
    assert_eq!(first.advance(&pool), Some(&'a'));

    let mut second = list.begin_traversal(&pool);
    assert_eq!(drain(&mut second, &pool), "abc");
    assert_eq!(drain(&mut first, &pool), "bc");

    list.push(&mut pool, 'z').expect("unlimited pool");
    let mut restarted = list.begin_traversal(&pool);
    assert_eq!(drain(&mut restarted, &pool), "zabc");
}

#[test]
fn traversal_does_not_mutate() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "xy");

    let mut cursor = list.begin_traversal(&pool);
    drain(&mut cursor, &pool);

    assert_eq!(list.len(&pool), 2);
    assert_eq!(list.visit_top(&pool), Some(&'x'));
}

#[test]
fn cursor_on_released_node_stops() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "ab");

    let mut cursor = list.begin_traversal(&pool);
    assert_eq!(list.pop(&mut pool), Some('a'));

    assert_eq!(cursor.advance(&pool), None);
    assert!(cursor.is_done());
}

#[test]
fn iter_is_exact_size() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "hello");

    let mut iter = list.iter(&pool);
    assert_eq!(iter.len(), 5);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<String>(), "llo");

    let empty = list_of(&mut pool, "");
    assert_eq!(empty.iter(&pool).len(), 0);
    assert_eq!(empty.iter(&pool).next(), None);
}

#[test]
fn iter_matches_cursor() {
    let mut pool = NodePool::new();
    let list = list_of(&mut pool, "pooled");

    let mut cursor = list.begin_traversal(&pool);
    let from_cursor = drain(&mut cursor, &pool);
    let from_iter: String = list.iter(&pool).collect();

    assert_eq!(from_cursor, from_iter);
}
