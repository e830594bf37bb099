use orx_pooled_list::*;
use test_case::test_case;

fn to_str(numbers: &[usize]) -> Vec<String> {
    numbers.iter().map(|x| x.to_string()).collect()
}

fn forward(list: &List<String>, pool: &NodePool<String>) -> Vec<String> {
    let vec: Vec<_> = list.iter(pool).cloned().collect();
    assert_eq!(vec.len(), list.len(pool));
    vec
}

fn new_list(pool: &mut NodePool<String>) -> List<String> {
    List::new(pool).expect("unlimited pool")
}

#[test]
fn new_list_is_empty() {
    let mut pool = NodePool::new();
    let list = new_list(&mut pool);

    assert_eq!(list.len(&pool), 0);
    assert!(list.is_empty(&pool));
    assert!(list.is_valid_for(&pool));
    assert_eq!(list.visit_top(&pool), None);
    assert_eq!(forward(&list, &pool), to_str(&[]));
}

#[test]
fn push_one() {
    let mut pool = NodePool::new();
    let list = new_list(&mut pool);

    list.push(&mut pool, 0.to_string()).expect("unlimited pool");

    assert_eq!(forward(&list, &pool), to_str(&[0]));
}

#[test]
fn push_front_3() {
    let mut pool = NodePool::new();
    let list = new_list(&mut pool);

    list.push(&mut pool, 0.to_string()).expect("unlimited pool");
    list.push(&mut pool, 1.to_string()).expect("unlimited pool");
    list.push(&mut pool, 2.to_string()).expect("unlimited pool");

    assert_eq!(forward(&list, &pool), to_str(&[2, 1, 0]));
    assert_eq!(list.visit_top(&pool), Some(&2.to_string()));
}

#[test]
fn pop_empty() {
    let mut pool = NodePool::<String>::new();
    let list = new_list(&mut pool);

    assert_eq!(list.pop(&mut pool), None);
    assert_eq!(forward(&list, &pool), to_str(&[]));
}

#[test]
fn pop_when_3() {
    let mut pool = NodePool::new();
    let list = new_list(&mut pool);

    for x in 0..3 {
        list.push(&mut pool, x.to_string()).expect("unlimited pool");
    }
    assert_eq!(forward(&list, &pool), to_str(&[2, 1, 0]));

    assert_eq!(list.pop(&mut pool), Some(2.to_string()));
    assert_eq!(forward(&list, &pool), to_str(&[1, 0]));

    assert_eq!(list.pop(&mut pool), Some(1.to_string()));
    assert_eq!(forward(&list, &pool), to_str(&[0]));

    assert_eq!(list.pop(&mut pool), Some(0.to_string()));
    assert_eq!(forward(&list, &pool), to_str(&[]));

    assert_eq!(list.pop(&mut pool), None);
    assert_eq!(forward(&list, &pool), to_str(&[]));
}

#[test]
fn push_pop_letters() {
    let mut pool = NodePool::new();
    let list = List::new(&mut pool).expect("unlimited pool");

    list.push(&mut pool, "a").expect("unlimited pool");
    list.push(&mut pool, "b").expect("unlimited pool");
    list.push(&mut pool, "c").expect("unlimited pool");

    assert_eq!(list.pop(&mut pool), Some("c"));
    assert_eq!(list.pop(&mut pool), Some("b"));
    assert_eq!(list.pop(&mut pool), Some("a"));
    assert_eq!(list.pop(&mut pool), None);
}

#[test_case(&[1, 1, 0, 1, 0, 0])]
#[test_case(&[1, 1, 1, 1, 0, 0, 0, 0, 0])]
#[test_case(&[0, 1, 0, 1, 1, 0, 1, 0, 0, 1])]
#[test_case(&[1; 2000])]
fn interleaved_push_pop_is_lifo_and_counts(ops: &[u8]) {
    let mut pool = NodePool::new();
    let list = List::new(&mut pool).expect("unlimited pool");
    let mut expected = Vec::new();

    for (i, op) in ops.iter().enumerate() {
        match *op {
            1 => {
                list.push(&mut pool, i).expect("unlimited pool");
                expected.push(i);
            }
            _ => assert_eq!(list.pop(&mut pool), expected.pop()),
        }
        assert_eq!(list.len(&pool), expected.len());
        assert_eq!(list.visit_top(&pool), expected.last());
    }

    let remaining: Vec<_> = list.iter(&pool).copied().collect();
    let expected_remaining: Vec<_> = expected.iter().rev().copied().collect();
    assert_eq!(remaining, expected_remaining);
}

#[test]
fn lists_share_pool_independently() {
    let mut pool = NodePool::new();
    let first = new_list(&mut pool);
    let second = new_list(&mut pool);

    first.push(&mut pool, 0.to_string()).expect("unlimited pool");
    second.push(&mut pool, 10.to_string()).expect("unlimited pool");
    first.push(&mut pool, 1.to_string()).expect("unlimited pool");
    second.push(&mut pool, 11.to_string()).expect("unlimited pool");

    assert_eq!(forward(&first, &pool), to_str(&[1, 0]));
    assert_eq!(forward(&second, &pool), to_str(&[11, 10]));

    assert_eq!(first.pop(&mut pool), Some(1.to_string()));
    first.destroy(&mut pool);

    assert_eq!(forward(&second, &pool), to_str(&[11, 10]));
    assert_eq!(pool.num_in_use(), 3);
}

#[test]
fn list_of_foreign_pool_is_invalid() {
    let mut pool = NodePool::new();
    let mut other = NodePool::new();

    let list = new_list(&mut pool);
    list.push(&mut pool, 0.to_string()).expect("unlimited pool");

    assert!(!list.is_valid_for(&other));
    assert_eq!(list.len(&other), 0);
    assert_eq!(list.push(&mut other, 1.to_string()), Err(Error::InvalidHead));
    assert_eq!(list.pop(&mut other), None);
    assert_eq!(list.visit_top(&other), None);
    assert_eq!(other.num_nodes(), 0);

    assert_eq!(forward(&list, &pool), to_str(&[0]));
}

#[test]
fn list_of_foreign_pool_leaves_that_pools_lists_intact() {
    let mut a = NodePool::new();
    let mut b = NodePool::new();

    let la = new_list(&mut a);
    let lb = new_list(&mut b);
    assert_eq!(la.head(), lb.head());
    assert_ne!(la.pool_id(), lb.pool_id());

    lb.push(&mut b, 10.to_string()).expect("unlimited pool");

    assert!(!la.is_valid_for(&b));
    assert_eq!(la.len(&b), 0);
    assert_eq!(la.visit_top(&b), None);
    assert_eq!(la.push(&mut b, 99.to_string()), Err(Error::InvalidHead));
    assert_eq!(la.enqueue(&mut b, 99.to_string()), Err(Error::InvalidHead));
    assert_eq!(la.pop(&mut b), None);
    assert_eq!(la.dequeue(&mut b), None);
    assert_eq!(la.iter(&b).count(), 0);

    la.destroy(&mut b);
    assert!(lb.is_valid_for(&b));
    assert_eq!(forward(&lb, &b), to_str(&[10]));
    assert_eq!(b.num_in_use(), 2);

    assert!(new_list(&mut a).is_valid_for(&a));
}
