use text_battleship::{query, try_query, Column};

#[test]
fn join_skips_entities_missing_a_field() {
    let a: Column<&str> = ["x0", "x1"].into_iter().collect();
    let b: Column<&str> = ["y0"].into_iter().collect();
    let mut calls = Vec::new();

    query(2, (&a, &b), &mut calls, |(x, y), calls, entity| {
        calls.push((*x, *y, entity));
    });

    assert_eq!(calls, vec![("x0", "y0", 0)]);
}

#[test]
fn extras_come_after_fields_and_before_the_index() {
    let names: Column<&str> = ["ai", "player"].into_iter().collect();
    let mut extra = (String::from("ctx"), 0usize);

    query(2, (&names,), &mut extra, |(name,), (tag, count), entity| {
        assert_eq!(tag.as_str(), "ctx");
        assert_eq!(*count, entity);
        assert_eq!(*name, if entity == 0 { "ai" } else { "player" });
        *count += 1;
    });

    assert_eq!(extra.1, 2);
}

#[test]
fn gaps_anywhere_skip_the_entity() {
    let a = Column::from_slots(vec![Some(1), None, Some(3), Some(4)]);
    let b = Column::from_slots(vec![Some('a'), Some('b'), None, Some('d')]);
    let c = Column::from_slots(vec![Some(true), Some(true), Some(true), Some(false)]);
    let mut seen = Vec::new();

    query(4, (&a, &b, &c), &mut seen, |(n, ch, flag), seen, entity| {
        seen.push((entity, *n, *ch, *flag));
    });

    assert_eq!(seen, vec![(0, 1, 'a', true), (3, 4, 'd', false)]);
}

#[test]
fn visits_in_ascending_order_and_respects_entity_count() {
    let ids: Column<usize> = (0..5).collect();
    let mut order = Vec::new();

    query(3, (&ids,), &mut order, |(id,), order, entity| {
        assert_eq!(*id, entity);
        order.push(entity);
    });

    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn columns_are_left_unchanged() {
    let a: Column<i32> = [1, 2].into_iter().collect();
    let before = a.clone();
    query(2, (&a,), &mut (), |_, _, _| {});
    assert_eq!(a, before);
}

#[test]
fn try_query_stops_at_first_error() {
    let ids: Column<usize> = (0..4).collect();
    let mut visited = Vec::new();

    let res = try_query(4, (&ids,), &mut visited, |(id,), visited, _| {
        visited.push(*id);
        if *id == 1 {
            Err("boom")
        } else {
            Ok(())
        }
    });

    assert_eq!(res, Err("boom"));
    assert_eq!(visited, vec![0, 1]);
}

#[test]
fn column_get_mut_and_iter() {
    let mut col = Column::from_slots(vec![Some(1), None, Some(3)]);
    *col.get_mut(2).unwrap() += 10;
    assert!(col.get_mut(1).is_none());
    assert!(col.get(7).is_none());
    let filled: Vec<_> = col.iter().map(|(i, v)| (i, *v)).collect();
    assert_eq!(filled, vec![(0, 1), (2, 13)]);
    assert_eq!(col.len(), 3);
}
