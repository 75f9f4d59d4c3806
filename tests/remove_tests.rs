use std::rc::Rc;

use dynlist::DynamicList;

fn contents<T: Clone>(list: &DynamicList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_remove_middle_element() {
    let mut list: DynamicList<char> = "abc".chars().collect();

    assert_eq!(list.remove(&'b'), Some('b'));

    assert_eq!(list.len(), 2);
    assert_eq!(contents(&list), vec!['a', 'c']);
}

#[test]
fn test_remove_first_and_last() {
    let mut list: DynamicList<i32> = (1..=5).collect();

    assert_eq!(list.remove(&1), Some(1));
    assert_eq!(contents(&list), vec![2, 3, 4, 5]);

    assert_eq!(list.remove(&5), Some(5));
    assert_eq!(contents(&list), vec![2, 3, 4]);
}

#[test]
fn test_remove_only_first_occurrence() {
    let mut list: DynamicList<&str> = ["x", "y", "x", "z"].into_iter().collect();

    list.remove(&"x");

    assert_eq!(contents(&list), vec!["y", "x", "z"]);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut list: DynamicList<i32> = (1..=4).collect();
    let capacity = list.capacity();

    assert_eq!(list.remove(&99), None);
    assert_eq!(contents(&list), vec![1, 2, 3, 4]);

    assert_eq!(list.remove(&99), None);
    assert_eq!(contents(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn test_remove_from_empty_list() {
    let mut list: DynamicList<String> = DynamicList::new();

    assert_eq!(list.remove(&String::from("anything")), None);
    assert!(list.is_empty());
}

#[test]
fn test_remove_last_remaining_element() {
    let mut list = DynamicList::new();
    list.append(7);

    assert_eq!(list.remove(&7), Some(7));
    assert!(list.is_empty());
    assert!(list.get(0).is_err());
}

#[test]
fn test_drain_by_removing_first() {
    let mut list: DynamicList<u32> = (0..10).collect();

    for _ in 0..10 {
        let first = *list.get(0).unwrap();
        assert_eq!(list.remove(&first), Some(first));
    }

    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_append_after_remove_fills_gap() {
    let mut list: DynamicList<i32> = (0..4).collect();

    list.remove(&0);
    list.append(4);

    assert_eq!(contents(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.get(3), Ok(&4));
}

#[test]
fn test_remove_releases_element() {
    let shared: Vec<Rc<i32>> = (0..4).map(Rc::new).collect();
    let mut list: DynamicList<Rc<i32>> = shared.iter().cloned().collect();

    let removed = list.remove(&shared[1]);
    assert!(removed.is_some());
    drop(removed);

    assert_eq!(Rc::strong_count(&shared[1]), 1);
    for index in [0, 2, 3] {
        assert_eq!(Rc::strong_count(&shared[index]), 2);
    }
}

#[test]
fn test_clear_releases_elements() {
    let shared = Rc::new("payload");
    let mut list = DynamicList::new();
    for _ in 0..5 {
        list.append(Rc::clone(&shared));
    }
    assert_eq!(Rc::strong_count(&shared), 6);

    list.clear();

    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_drop_releases_elements() {
    let shared = Rc::new(0u8);
    {
        let mut list = DynamicList::new();
        for _ in 0..4 {
            list.append(Rc::clone(&shared));
        }
        assert_eq!(Rc::strong_count(&shared), 5);
    }
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[derive(Debug)]
struct Ticket {
    id: u32,
    label: &'static str,
}

#[test]
fn test_remove_by_predicate() {
    let mut list = DynamicList::new();
    list.append(Ticket { id: 1, label: "open" });
    list.append(Ticket { id: 2, label: "closed" });
    list.append(Ticket { id: 3, label: "closed" });

    let removed = list.remove_by(|ticket| ticket.label == "closed");

    assert_eq!(removed.map(|ticket| ticket.id), Some(2));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).unwrap().id, 3);
}

#[test]
fn test_remove_by_without_match() {
    let mut list = DynamicList::new();
    list.append(Ticket { id: 1, label: "open" });

    assert!(list.remove_by(|ticket| ticket.id == 42).is_none());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_by_stops_at_first_match() {
    let mut list: DynamicList<i32> = (0..6).collect();
    let mut inspected = Vec::new();

    list.remove_by(|&value| {
        inspected.push(value);
        value == 2
    });

    assert_eq!(inspected, vec![0, 1, 2]);
    assert_eq!(contents(&list), vec![0, 1, 3, 4, 5]);
}
