use lexicon_core::table::{OrderedMap, TableError};

fn table_of(words: &[(&str, u64)]) -> OrderedMap<String, u64> {
    let mut table = OrderedMap::with_capacity(64);
    for (word, count) in words {
        table.put((*word).to_string(), *count).unwrap();
    }
    table
}

fn assert_strictly_ascending(table: &OrderedMap<String, u64>) {
    for i in 1..table.len() {
        let prev = table.select(i - 1).unwrap();
        let next = table.select(i).unwrap();
        assert!(prev < next, "keys must be strictly ascending: {prev:?} !< {next:?}");
    }
}

#[test]
fn invariant_keys_strictly_ascending_under_mutation() {
    let mut table = OrderedMap::with_capacity(64);
    let inserts = [
        "mango", "apple", "zebra", "apple", "kiwi", "banana", "mango", "fig",
    ];
    for word in inserts {
        table.put(word.to_string(), 1).unwrap();
    }
    assert_strictly_ascending(&table);
    assert_eq!(table.len(), 6, "duplicates must overwrite, not grow");

    table.delete(&"kiwi".to_string());
    table.delete(&"apple".to_string());
    table.put("cherry".to_string(), 2).unwrap();
    assert_strictly_ascending(&table);
    assert_eq!(table.len(), 5);
}

#[test]
fn invariant_contains_rank_get_coherence() {
    let table = table_of(&[("apple", 1), ("bible", 3), ("zebra", 2)]);

    for word in ["apple", "bible", "zebra"] {
        let key = word.to_string();
        let r = table.rank(&key);
        assert!(r < table.len());
        assert_eq!(table.select(r).unwrap(), &key);
        assert!(table.contains(&key));
        assert!(table.get(&key).is_some());
    }

    let absent = "durian".to_string();
    assert!(!table.contains(&absent));
    assert_eq!(table.get(&absent), None);
}

#[test]
fn put_overwrites_in_place() {
    let mut table = table_of(&[("apple", 1)]);
    assert_eq!(table.get(&"apple".to_string()), Some(&1));

    table.put("apple".to_string(), 7).unwrap();
    assert_eq!(table.get(&"apple".to_string()), Some(&7));
    assert_eq!(table.len(), 1);
}

#[test]
fn delete_absent_is_noop_present_shrinks_by_one() {
    let mut table = table_of(&[("apple", 1), ("bible", 3)]);

    assert_eq!(table.delete(&"zebra".to_string()), None);
    assert_eq!(table.len(), 2);

    assert_eq!(table.delete(&"apple".to_string()), Some(1));
    assert_eq!(table.len(), 1);
    assert!(!table.contains(&"apple".to_string()));
}

#[test]
fn select_and_rank_are_inverse() {
    let table = table_of(&[("ant", 1), ("bee", 2), ("cat", 3), ("dog", 4)]);

    for i in 0..table.len() {
        let key = table.select(i).unwrap().clone();
        assert_eq!(table.rank(&key), i);
    }
}

#[test]
fn floor_and_ceiling_bracket_the_query() {
    let table = table_of(&[("bee", 1), ("cat", 2), ("fox", 3)]);

    // Between stored keys: floor <= query <= ceiling.
    let query = "dog".to_string();
    let floor = table.floor(&query).unwrap();
    let ceiling = table.ceiling(&query).unwrap();
    assert!(floor <= &query);
    assert!(&query <= ceiling);
    assert_eq!(floor, &"cat".to_string());
    assert_eq!(ceiling, &"fox".to_string());

    // Exact hit: both collapse to the key itself.
    let hit = "cat".to_string();
    assert_eq!(table.floor(&hit), Some(&hit));
    assert_eq!(table.ceiling(&hit), Some(&hit));

    // Below every key: no floor. Above every key: no ceiling.
    assert_eq!(table.floor(&"ant".to_string()), None);
    assert_eq!(table.ceiling(&"ant".to_string()), Some(&"bee".to_string()));
    assert_eq!(table.ceiling(&"zzz".to_string()), None);
    assert_eq!(table.floor(&"zzz".to_string()), Some(&"fox".to_string()));
}

#[test]
fn capacity_is_hard_rejected_but_overwrite_still_works() {
    let mut table = OrderedMap::with_capacity(2);
    table.put("ant".to_string(), 1).unwrap();
    table.put("bee".to_string(), 2).unwrap();

    let err = table.put("cat".to_string(), 3).unwrap_err();
    assert_eq!(err, TableError::CapacityExceeded { capacity: 2 });
    assert_eq!(table.len(), 2, "rejected insert must not change the table");

    // Overwriting a resident key is allowed at capacity.
    table.put("ant".to_string(), 9).unwrap();
    assert_eq!(table.get(&"ant".to_string()), Some(&9));
    assert_eq!(table.len(), 2);
}

#[test]
fn empty_table_endpoint_operations_fail() {
    let mut table: OrderedMap<String, u64> = OrderedMap::with_capacity(4);

    assert_eq!(table.min().unwrap_err(), TableError::EmptyCollection);
    assert_eq!(table.max().unwrap_err(), TableError::EmptyCollection);
    assert_eq!(table.delete_min().unwrap_err(), TableError::EmptyCollection);
    assert_eq!(table.delete_max().unwrap_err(), TableError::EmptyCollection);
    assert_eq!(
        table.select(0).unwrap_err(),
        TableError::OutOfRange { index: 0, len: 0 }
    );
}

#[test]
fn delete_endpoints_remove_in_order() {
    let mut table = table_of(&[("ant", 1), ("bee", 2), ("cat", 3)]);

    assert_eq!(table.delete_max().unwrap(), "cat".to_string());
    assert_eq!(table.delete_min().unwrap(), "ant".to_string());
    assert_eq!(table.len(), 1);
    assert_eq!(table.min().unwrap(), &"bee".to_string());
    assert_eq!(table.max().unwrap(), &"bee".to_string());
}
